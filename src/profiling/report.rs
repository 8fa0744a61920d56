//! Sweep tables, CSV export and the detailed single-size report.

use std::fmt::Write as _;
use std::path::Path;

use crate::bench::{BenchmarkResult, DetailedAnalysis};
use crate::error::BenchResult;
use crate::kernels::KernelKind;

/// Results of one kernel across a size sweep, in sweep order.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub kernel: KernelKind,
    pub implementation: &'static str,
    results: Vec<BenchmarkResult>,
}

impl SweepReport {
    pub fn new(kernel: KernelKind, implementation: &'static str) -> Self {
        Self { kernel, implementation, results: Vec::new() }
    }

    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn title(&self) -> String {
        format!("=== {} {} Micro-benchmark ===", self.implementation, self.kernel.label())
    }

    /// Tab-separated table: `Size  Time(ms)  GFLOPS  Bandwidth(GB/s)`.
    pub fn to_table(&self) -> String {
        let mut s = String::with_capacity(128 + 64 * self.results.len());
        let _ = writeln!(s, "{}", self.title());
        s.push_str("Size\tTime(ms)\tGFLOPS\tBandwidth(GB/s)\n");
        s.push_str("----\t--------\t------\t---------------\n");
        for r in &self.results {
            let _ = writeln!(
                s,
                "{}\t{:.3}\t{}\t{}",
                r.size,
                r.average_time_ms(),
                fmt_metric(r.gflops),
                fmt_metric(r.bandwidth_gbs)
            );
        }
        s
    }

    /// `size,time_ms,gflops,bandwidth_gb_s`; undefined metrics are empty fields.
    pub fn to_csv(&self) -> String {
        let mut s = String::from("size,time_ms,gflops,bandwidth_gb_s\n");
        for r in &self.results {
            let _ = writeln!(
                s,
                "{},{:.6},{},{}",
                r.size,
                r.average_time_ms(),
                r.gflops.map(|v| format!("{v:.6}")).unwrap_or_default(),
                r.bandwidth_gbs.map(|v| format!("{v:.6}")).unwrap_or_default()
            );
        }
        s
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> BenchResult<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }
}

/// Multi-line report of a [`DetailedAnalysis`].
pub fn render_detailed(d: &DetailedAnalysis) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "=== Detailed {} Analysis (size={}) ===", d.kernel.label(), d.size);
    let _ = writeln!(s, "Single iteration time: {:.6} ms", d.single_time.as_secs_f64() * 1e3);
    let _ = writeln!(
        s,
        "Average time ({} iterations): {:.6} ms",
        d.iterations,
        d.average_time.as_secs_f64() * 1e3
    );
    let _ = writeln!(s, "Time per element: {} ns", fmt_metric(d.time_per_element_ns));
    let _ = writeln!(s, "Performance: {} GFLOPS", fmt_metric(d.gflops));
    let _ = writeln!(s, "Memory bandwidth: {} GB/s", fmt_metric(d.bandwidth_gbs));
    s
}

fn fmt_metric(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.3}"),
        None => "n/a".to_string(),
    }
}
