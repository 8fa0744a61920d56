//! Benchmark configuration with environment overrides.
//!
//! Defaults reproduce the reference sweep: 1000 timed iterations after 10
//! warmup iterations, `a = 1.5`, seed 42. Any field can be overridden through
//! `VECBENCH_*` environment variables via [`BenchConfig::from_env`].

use std::env;
use std::str::FromStr;

use crate::error::{BenchError, BenchResult};

/// Sweep sizes in f32 elements: 4 KB (fits L1) through 64 MB (exceeds L3).
pub const SWEEP_SIZES: &[usize] = &[
    1024,     // 4KB
    4096,     // 16KB
    16384,    // 64KB
    65536,    // 256KB
    262144,   // 1MB
    1048576,  // 4MB
    4194304,  // 16MB
    16777216, // 64MB
];

pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one benchmark run. Immutable once handed to the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    /// Element count of each input vector.
    pub size: usize,
    /// Timed repetitions.
    pub iterations: usize,
    /// Untimed repetitions run before the timer starts.
    pub warmup_iterations: usize,
    /// AXPY scalar multiplier. Ignored by DOT.
    pub alpha: f32,
    /// Seed for input generation.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: 1_048_576,
            iterations: 1000,
            warmup_iterations: 10,
            alpha: 1.5,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_warmup_iterations(mut self, warmup_iterations: usize) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Defaults overridden by `VECBENCH_ITERATIONS`, `VECBENCH_WARMUP`,
    /// `VECBENCH_SEED` and `VECBENCH_ALPHA` when set.
    pub fn from_env() -> BenchResult<Self> {
        let mut config = Self::default();
        if let Some(v) = env_override("VECBENCH_ITERATIONS")? {
            config.iterations = v;
        }
        if let Some(v) = env_override("VECBENCH_WARMUP")? {
            config.warmup_iterations = v;
        }
        if let Some(v) = env_override("VECBENCH_SEED")? {
            config.seed = v;
        }
        if let Some(v) = env_override("VECBENCH_ALPHA")? {
            config.alpha = v;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidArgument(
                "iterations must be > 0".into(),
            ));
        }
        if !self.alpha.is_finite() {
            return Err(BenchError::InvalidArgument(format!(
                "alpha must be finite, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

fn env_override<T: FromStr>(key: &str) -> BenchResult<Option<T>> {
    match env::var(key) {
        Ok(value) => {
            let value = value.trim();
            value
                .parse::<T>()
                .map(Some)
                .map_err(|_| BenchError::InvalidConfig(format!("{key}={value}")))
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => {
            Err(BenchError::InvalidConfig(format!("{key}={raw:?}")))
        }
    }
}
