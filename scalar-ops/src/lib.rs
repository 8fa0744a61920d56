//! Scalar reference kernels: `extern "C"` unvectorized loops over raw buffers.
//!
//! These serve as:
//! 1. The baseline that vectorized and parallel variants are measured against.
//! 2. Golden reference for correctness testing of those variants.
//!
//! Every function here is `#[no_mangle] pub extern "C"` so external harnesses
//! can locate them by symbol name in the binary, and `#[inline(never)]` so each
//! call in a timed loop is a real call that cannot be folded into the caller.
//!
//! This crate is compiled with `opt-level = 1` (configured in the workspace
//! root Cargo.toml) to preserve the loop structure and keep the optimizer
//! from auto-vectorizing or unrolling it.

pub mod blas;
