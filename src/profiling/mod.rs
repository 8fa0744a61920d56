//! Measurement primitives for the kernel benchmarks.
//!
//! - [`timer`]: monotonic start/stop interval timer
//! - [`counters`]: per-kernel FLOP/byte cost models and GFLOPS / GB/s derivation
//! - [`report`]: sweep tables, CSV export, detailed single-size report

pub mod counters;
pub mod report;
pub mod timer;

pub use counters::{compute_metrics, OpWorkload, PerfMetrics};
pub use report::{render_detailed, SweepReport};
pub use timer::Timer;
