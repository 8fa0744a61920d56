//! Property tests for the kernels and the input generator.

use proptest::prelude::*;

use vecbench::profiling::counters::{compute_metrics, OpWorkload};
use vecbench::{AxpyScalar, DataGenerator, DotScalar, KernelKind};

fn equal_len_pair(max_len: usize) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (0..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(-100.0_f32..100.0, n),
            prop::collection::vec(-100.0_f32..100.0, n),
        )
    })
}

proptest! {
    /// DOT equals the independently computed left-to-right sum.
    #[test]
    fn prop_dot_matches_direct_sum((x, y) in equal_len_pair(256)) {
        let mut expected = 0.0_f32;
        for (xi, yi) in x.iter().zip(&y) {
            expected += xi * yi;
        }
        let got = DotScalar::compute_checked(&x, &y).unwrap();
        prop_assert!((got - expected).abs() < 1e-6, "got {}, expected {}", got, expected);
    }

    /// Every AXPY output element is `a * x[i] + y[i]` of the pre-call `y`.
    #[test]
    fn prop_axpy_pointwise((x, y0) in equal_len_pair(256), a in -10.0_f32..10.0) {
        let mut y = y0.clone();
        AxpyScalar::compute_checked(a, &x, &mut y).unwrap();
        for i in 0..x.len() {
            let want = a * x[i] + y0[i];
            prop_assert!((y[i] - want).abs() < 1e-6, "index {}: {} vs {}", i, y[i], want);
        }
    }

    #[test]
    fn prop_axpy_zero_alpha_is_identity((x, y0) in equal_len_pair(128)) {
        let mut y = y0.clone();
        AxpyScalar::compute_checked(0.0, &x, &mut y).unwrap();
        prop_assert_eq!(y, y0);
    }

    #[test]
    fn prop_dot_with_zero_vector_is_zero(y in prop::collection::vec(-100.0_f32..100.0, 0..128)) {
        let x = vec![0.0_f32; y.len()];
        prop_assert_eq!(DotScalar::compute_checked(&x, &y).unwrap(), 0.0);
    }

    #[test]
    fn prop_mismatched_lengths_rejected(n in 0usize..64, extra in 1usize..8) {
        let x = vec![1.0_f32; n];
        let mut y = vec![1.0_f32; n + extra];
        prop_assert!(DotScalar::compute_checked(&x, &y).is_err());
        prop_assert!(AxpyScalar::compute_checked(1.0, &x, &mut y).is_err());
    }

    /// Same seed and call sequence gives bit-identical vectors.
    #[test]
    fn prop_generator_deterministic(seed in any::<u64>(), n in 0usize..512, m in 0usize..64) {
        let mut a = DataGenerator::new(seed);
        let mut b = DataGenerator::new(seed);
        prop_assert_eq!(a.generate_random(n), b.generate_random(n));
        prop_assert_eq!(a.generate_random(m), b.generate_random(m));
    }

    #[test]
    fn prop_sequential_is_index(n in 0usize..1024) {
        let v = DataGenerator::default().generate_sequential(n);
        prop_assert_eq!(v.len(), n);
        for (i, x) in v.iter().enumerate() {
            prop_assert_eq!(*x, i as f32);
        }
    }

    #[test]
    fn prop_strided_positions(n in 0usize..512, stride in 1usize..32) {
        let v = DataGenerator::default().generate_strided(n, stride);
        prop_assert_eq!(v.len(), n);
        for (i, x) in v.iter().enumerate() {
            let want = if i % stride == 0 { i as f32 } else { 0.0 };
            prop_assert_eq!(*x, want);
        }
    }

    /// Derived rates are finite or undefined, never infinite.
    #[test]
    fn prop_metrics_never_infinite(n in 0usize..1_000_000, nanos in 0u64..10_000_000) {
        for kind in [KernelKind::Axpy, KernelKind::Dot] {
            let w: OpWorkload = kind.workload(n);
            let m = compute_metrics(w, std::time::Duration::from_nanos(nanos));
            if nanos == 0 {
                prop_assert!(m.gflops.is_none() && m.bandwidth_gbs.is_none());
            } else {
                prop_assert!(m.gflops.unwrap().is_finite());
                prop_assert!(m.bandwidth_gbs.unwrap().is_finite());
            }
        }
    }
}
