//! FLOP and byte accounting per kernel, and metric derivation from wall time.
//!
//! The counters are purely arithmetic: they compute theoretical FLOP/byte
//! counts from the element count, then divide by the measured time. Each kernel
//! has its own cost model; there is no generic one.

use std::time::Duration;

use crate::kernels::KernelKind;

/// Work done by one kernel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpWorkload {
    pub flops: u64,
    pub bytes: u64,
}

impl OpWorkload {
    /// Total work of `iterations` identical calls.
    pub fn repeated(self, iterations: usize) -> Self {
        let k = iterations as u64;
        Self {
            flops: self.flops.saturating_mul(k),
            bytes: self.bytes.saturating_mul(k),
        }
    }
}

/// Throughput derived from a workload and the time it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfMetrics {
    /// Wall-clock seconds.
    pub elapsed_secs: f64,
    /// `None` when the elapsed time is zero.
    pub gflops: Option<f64>,
    /// Decimal GB/s. `None` when the elapsed time is zero.
    pub bandwidth_gbs: Option<f64>,
}

/// AXPY: one multiply + one add per element; reads `x`, reads `y`, writes `y`.
///
/// The `3n` byte count holds only because `y` is updated in place. A variant
/// writing to a separate output buffer moves the same bytes but through three
/// distinct streams, and one that skips reading `y` moves `2n`: revisit this
/// function together with any change to the AXPY signature.
pub fn axpy_workload(n: usize, elem_bytes: usize) -> OpWorkload {
    OpWorkload {
        flops: 2 * n as u64,
        bytes: 3 * n as u64 * elem_bytes as u64,
    }
}

/// Dot product: one multiply + one accumulate per element; reads `x` and `y`.
pub fn dot_workload(n: usize, elem_bytes: usize) -> OpWorkload {
    OpWorkload {
        flops: 2 * n as u64,
        bytes: 2 * n as u64 * elem_bytes as u64,
    }
}

impl KernelKind {
    /// Per-call cost of this kernel over `n` f32 elements.
    pub fn workload(self, n: usize) -> OpWorkload {
        let elem = std::mem::size_of::<f32>();
        match self {
            KernelKind::Axpy => axpy_workload(n, elem),
            KernelKind::Dot => dot_workload(n, elem),
        }
    }
}

/// GFLOPS and GB/s of `workload` completed in `elapsed`.
pub fn compute_metrics(workload: OpWorkload, elapsed: Duration) -> PerfMetrics {
    let secs = elapsed.as_secs_f64();
    let rate = |count: u64| (secs > 0.0).then(|| count as f64 / 1e9 / secs);
    PerfMetrics {
        elapsed_secs: secs,
        gflops: rate(workload.flops),
        bandwidth_gbs: rate(workload.bytes),
    }
}
