//! vecbench: scalar AXPY / DOT baselines and the methodology used to time them.
//!
//! The crate provides:
//! - **Reference kernels**: unvectorized AXPY (`y = a*x + y`) and DOT
//!   (`sum(x[i]*y[i])`) with explicit unchecked and bounds-checked entry points
//! - **Deterministic inputs**: a seedable [`DataGenerator`] so sweeps are
//!   comparable run to run
//! - **Measurement**: warmup/steady-state separation, a monotonic [`Timer`], and
//!   per-kernel cost models that turn wall time into GFLOPS and GB/s
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vecbench::{bench, BenchConfig};
//!
//! let config = BenchConfig::default().with_size(65_536).with_iterations(200);
//! let result = bench::benchmark_axpy(&config).unwrap();
//! println!("{:.3} GFLOPS", result.gflops.unwrap_or(0.0));
//! ```
//!
//! # Limitations
//!
//! Timing is wall-clock on the calling thread. Results are only repeatable
//! when nothing else contends for the CPU during the timed section; nothing
//! here enforces that.

pub mod bench;
pub mod config;
pub mod data_gen;
pub mod error;
pub mod kernels;
pub mod profiling;

pub use bench::{BenchmarkResult, DetailedAnalysis};
pub use config::{BenchConfig, SWEEP_SIZES};
pub use data_gen::DataGenerator;
pub use error::{BenchError, BenchResult};
pub use kernels::{AxpyScalar, DotScalar, KernelKind, ScalarKernel};
pub use profiling::timer::Timer;
