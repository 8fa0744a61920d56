//! Benchmark driver: input generation, warmup, timed repetition, metrics.
//!
//! For each (kernel, config) pair:
//! 1. Inputs come from a [`DataGenerator`] seeded with `config.seed`, so a sweep
//!    is comparable run to run.
//! 2. `warmup_iterations` untimed calls settle caches and clock frequency.
//! 3. `iterations` calls run back to back under one [`Timer`] interval, which
//!    amortizes the timer's own overhead over the whole batch.
//! 4. Throughput comes from the kernel's cost model and the total interval.
//!
//! Buffers are reused across every call. AXPY therefore compounds onto the same
//! `y` through warmup and timing; only elapsed time matters here, not the
//! numeric output. Kernel arguments and results pass through
//! [`std::hint::black_box`] so the optimizer cannot hoist or drop the calls.

use std::hint::black_box;
use std::time::Duration;

use crate::config::BenchConfig;
use crate::data_gen::DataGenerator;
use crate::error::BenchResult;
use crate::kernels::{AxpyScalar, DotScalar, KernelKind, ScalarKernel};
use crate::profiling::counters::compute_metrics;
use crate::profiling::report::SweepReport;
use crate::profiling::timer::Timer;

/// Outcome of one (kernel, config) measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub kernel: KernelKind,
    pub implementation: &'static str,
    pub size: usize,
    pub iterations: usize,
    pub total_time: Duration,
    pub average_time: Duration,
    /// `None` when the total interval measured zero.
    pub gflops: Option<f64>,
    /// Decimal GB/s. `None` when the total interval measured zero.
    pub bandwidth_gbs: Option<f64>,
}

impl BenchmarkResult {
    pub fn average_time_ms(&self) -> f64 {
        self.total_time.as_secs_f64() * 1e3 / self.iterations as f64
    }
}

/// Single-call versus steady-state timing at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedAnalysis {
    pub kernel: KernelKind,
    pub size: usize,
    pub iterations: usize,
    /// One cold call, no warmup.
    pub single_time: Duration,
    pub average_time: Duration,
    /// `None` for zero-length inputs.
    pub time_per_element_ns: Option<f64>,
    pub gflops: Option<f64>,
    pub bandwidth_gbs: Option<f64>,
}

/// Run `op` `warmup` times untimed, then `iterations` times under one timer
/// interval. Returns the total interval.
pub fn measure<F: FnMut()>(warmup: usize, iterations: usize, mut op: F) -> BenchResult<Duration> {
    for _ in 0..warmup {
        op();
    }

    let mut timer = Timer::new();
    timer.start();
    for _ in 0..iterations {
        op();
    }
    timer.stop()?;
    timer.elapsed()
}

pub fn benchmark(kind: KernelKind, config: &BenchConfig) -> BenchResult<BenchmarkResult> {
    match kind {
        KernelKind::Axpy => benchmark_axpy(config),
        KernelKind::Dot => benchmark_dot(config),
    }
}

pub fn benchmark_axpy(config: &BenchConfig) -> BenchResult<BenchmarkResult> {
    config.validate()?;
    let n = config.size;
    let mut gen = DataGenerator::new(config.seed);
    let x = gen.generate_random(n);
    let mut y = gen.generate_random(n);
    let a = config.alpha;

    log::debug!(
        "benchmark {} {}: n={n} iterations={} warmup={}",
        AxpyScalar::KIND.label(),
        AxpyScalar::name(),
        config.iterations,
        config.warmup_iterations
    );

    let x_ptr = x.as_ptr();
    let y_ptr = y.as_mut_ptr();
    let total = measure(config.warmup_iterations, config.iterations, || {
        // SAFETY: x and y were generated with exactly n elements and outlive the loop.
        unsafe {
            AxpyScalar::compute_unchecked(black_box(a), black_box(x_ptr), black_box(y_ptr), n)
        }
    })?;
    black_box(&y);

    Ok(finish::<AxpyScalar>(config, total))
}

pub fn benchmark_dot(config: &BenchConfig) -> BenchResult<BenchmarkResult> {
    config.validate()?;
    let n = config.size;
    let mut gen = DataGenerator::new(config.seed);
    let x = gen.generate_random(n);
    let y = gen.generate_random(n);

    log::debug!(
        "benchmark {} {}: n={n} iterations={} warmup={}",
        DotScalar::KIND.label(),
        DotScalar::name(),
        config.iterations,
        config.warmup_iterations
    );

    let total = measure(config.warmup_iterations, config.iterations, || {
        // SAFETY: x and y were generated with exactly n elements.
        let r = unsafe {
            DotScalar::compute_unchecked(black_box(x.as_ptr()), black_box(y.as_ptr()), n)
        };
        black_box(r);
    })?;

    Ok(finish::<DotScalar>(config, total))
}

fn finish<K: ScalarKernel>(config: &BenchConfig, total: Duration) -> BenchmarkResult {
    let workload = K::KIND.workload(config.size).repeated(config.iterations);
    let metrics = compute_metrics(workload, total);
    if metrics.gflops.is_none() {
        log::warn!(
            "{} n={} measured zero elapsed time; throughput undefined",
            K::KIND.label(),
            config.size
        );
    }

    let result = BenchmarkResult {
        kernel: K::KIND,
        implementation: K::name(),
        size: config.size,
        iterations: config.iterations,
        total_time: total,
        average_time: total.div_f64(config.iterations as f64),
        gflops: metrics.gflops,
        bandwidth_gbs: metrics.bandwidth_gbs,
    };
    log::info!(
        "{} {} n={}: avg {:.6} ms, {:?} GFLOPS, {:?} GB/s",
        K::KIND.label(),
        K::name(),
        result.size,
        result.average_time_ms(),
        result.gflops,
        result.bandwidth_gbs
    );
    result
}

/// Repeat [`benchmark`] over `sizes`, keeping every other field of `base`.
pub fn run_size_sweep(
    kind: KernelKind,
    base: &BenchConfig,
    sizes: &[usize],
) -> BenchResult<SweepReport> {
    let mut report = SweepReport::new(kind, implementation_name(kind));
    for &size in sizes {
        report.push(benchmark(kind, &base.with_size(size))?);
    }
    Ok(report)
}

/// Time one cold call, then `iterations` back-to-back calls, on fresh inputs.
pub fn detailed_analysis(kind: KernelKind, config: &BenchConfig) -> BenchResult<DetailedAnalysis> {
    config.validate()?;
    let n = config.size;
    let mut gen = DataGenerator::new(config.seed);
    let x = gen.generate_random(n);
    let mut y = gen.generate_random(n);
    let a = config.alpha;

    log::debug!(
        "detailed analysis {} {}: n={n} iterations={}",
        kind.label(),
        implementation_name(kind),
        config.iterations
    );

    let x_ptr = x.as_ptr();
    let y_ptr = y.as_mut_ptr();
    let mut op = || match kind {
        // SAFETY: x and y hold exactly n elements and outlive every call.
        KernelKind::Axpy => unsafe {
            AxpyScalar::compute_unchecked(black_box(a), black_box(x_ptr), black_box(y_ptr), n)
        },
        KernelKind::Dot => {
            let r = unsafe { DotScalar::compute_unchecked(black_box(x_ptr), black_box(y_ptr), n) };
            black_box(r);
        }
    };

    let single_time = measure(0, 1, &mut op)?;
    let total = measure(0, config.iterations, &mut op)?;
    black_box(&y);

    let metrics = compute_metrics(kind.workload(n).repeated(config.iterations), total);
    let average_time = total.div_f64(config.iterations as f64);
    let time_per_element_ns =
        (n > 0).then(|| total.as_secs_f64() * 1e9 / config.iterations as f64 / n as f64);

    log::info!(
        "{} {} n={n}: single {:.6} ms, avg {:.6} ms, {:?} ns/elem, {:?} GFLOPS, {:?} GB/s",
        kind.label(),
        implementation_name(kind),
        single_time.as_secs_f64() * 1e3,
        average_time.as_secs_f64() * 1e3,
        time_per_element_ns,
        metrics.gflops,
        metrics.bandwidth_gbs
    );

    Ok(DetailedAnalysis {
        kernel: kind,
        size: n,
        iterations: config.iterations,
        single_time,
        average_time,
        time_per_element_ns,
        gflops: metrics.gflops,
        bandwidth_gbs: metrics.bandwidth_gbs,
    })
}

fn implementation_name(kind: KernelKind) -> &'static str {
    match kind {
        KernelKind::Axpy => AxpyScalar::name(),
        KernelKind::Dot => DotScalar::name(),
    }
}
