//! Scalar AXPY / DOT micro-benchmark: size sweep plus a detailed analysis.
//!
//! Tunables: `VECBENCH_ITERATIONS`, `VECBENCH_WARMUP`, `VECBENCH_SEED`,
//! `VECBENCH_ALPHA`. Set `VECBENCH_CSV_DIR` to also write one CSV per kernel.

use std::path::PathBuf;
use std::process::ExitCode;

use vecbench::bench::{detailed_analysis, run_size_sweep};
use vecbench::profiling::render_detailed;
use vecbench::{BenchConfig, BenchResult, KernelKind, SWEEP_SIZES};

fn run() -> BenchResult<()> {
    let config = BenchConfig::from_env()?;
    let csv_dir = std::env::var_os("VECBENCH_CSV_DIR").map(PathBuf::from);

    for kind in [KernelKind::Axpy, KernelKind::Dot] {
        let report = run_size_sweep(kind, &config, SWEEP_SIZES)?;
        println!("{}", report.to_table());

        if let Some(dir) = &csv_dir {
            let path = dir.join(format!(
                "{}_{}.csv",
                kind.label().to_lowercase(),
                report.implementation.to_lowercase()
            ));
            report.write_csv(&path)?;
            log::info!("wrote {}", path.display());
        }
    }

    for kind in [KernelKind::Axpy, KernelKind::Dot] {
        let analysis = detailed_analysis(kind, &config)?;
        println!("{}", render_detailed(&analysis));
    }

    println!("=== Benchmark Complete ===");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("benchmark failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
