//! Named correctness checks for the scalar kernels.
//!
//! Prints `PASS`/`FAIL` per check, keeps going after a failure, and exits 0
//! only when every check passed.

use std::process::ExitCode;

use vecbench::{AxpyScalar, BenchError, DataGenerator, DotScalar};

const TOL: f32 = 1e-6;

fn close(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < TOL)
}

fn axpy_basic() -> bool {
    let mut y = vec![0.1, 0.2, 0.3, 0.4];
    AxpyScalar::compute_checked(2.0, &[1.0, 2.0, 3.0, 4.0], &mut y).is_ok()
        && close(&y, &[2.1, 4.2, 6.3, 8.4])
}

fn axpy_zero_multiplier() -> bool {
    let mut gen = DataGenerator::default();
    let x = gen.generate_random(100);
    let y0 = gen.generate_random(100);
    let mut y = y0.clone();
    AxpyScalar::compute_checked(0.0, &x, &mut y).is_ok() && close(&y, &y0)
}

fn axpy_large_vectors() -> bool {
    let mut gen = DataGenerator::default();
    let x = gen.generate_random(10_000);
    let y0 = gen.generate_random(10_000);
    let a = 1.5;
    let expected: Vec<f32> = x.iter().zip(&y0).map(|(xi, yi)| a * xi + yi).collect();
    let mut y = y0;
    AxpyScalar::compute_checked(a, &x, &mut y).is_ok() && close(&y, &expected)
}

fn axpy_single_element() -> bool {
    let mut y = vec![1.0];
    AxpyScalar::compute_checked(2.0, &[42.0], &mut y).is_ok() && close(&y, &[85.0])
}

fn axpy_empty() -> bool {
    let mut y: Vec<f32> = Vec::new();
    AxpyScalar::compute_checked(2.0, &[], &mut y).is_ok() && y.is_empty()
}

fn axpy_size_mismatch() -> bool {
    let mut y = vec![0.0; 3];
    matches!(
        AxpyScalar::compute_checked(1.0, &[1.0, 2.0], &mut y),
        Err(BenchError::InvalidArgument(_))
    )
}

fn dot_basic() -> bool {
    matches!(DotScalar::compute_checked(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0]), Ok(r) if (r - 40.0).abs() < TOL)
}

fn dot_zero_vector() -> bool {
    matches!(DotScalar::compute_checked(&[0.0; 3], &[1.0, 2.0, 3.0]), Ok(r) if r.abs() < TOL)
}

fn dot_orthogonal() -> bool {
    matches!(DotScalar::compute_checked(&[1.0, 0.0], &[0.0, 1.0]), Ok(r) if r.abs() < TOL)
}

fn dot_large_vectors() -> bool {
    let mut gen = DataGenerator::default();
    let x = gen.generate_random(10_000);
    let y = gen.generate_random(10_000);
    let mut expected = 0.0_f32;
    for (xi, yi) in x.iter().zip(&y) {
        expected += xi * yi;
    }
    matches!(DotScalar::compute_checked(&x, &y), Ok(r) if (r - expected).abs() < TOL)
}

fn dot_edge_cases() -> bool {
    let single = matches!(DotScalar::compute_checked(&[42.0], &[2.0]), Ok(r) if (r - 84.0).abs() < TOL);
    let empty = matches!(DotScalar::compute_checked(&[], &[]), Ok(r) if r == 0.0);
    single && empty
}

fn dot_size_mismatch() -> bool {
    matches!(
        DotScalar::compute_checked(&[1.0, 2.0], &[1.0]),
        Err(BenchError::InvalidArgument(_))
    )
}

fn main() -> ExitCode {
    env_logger::init();

    let checks: &[(&str, fn() -> bool)] = &[
        ("basic AXPY operation", axpy_basic),
        ("AXPY zero multiplier", axpy_zero_multiplier),
        ("AXPY large vectors", axpy_large_vectors),
        ("AXPY single element", axpy_single_element),
        ("AXPY empty vectors", axpy_empty),
        ("AXPY size mismatch", axpy_size_mismatch),
        ("basic DOT product operation", dot_basic),
        ("DOT zero vectors", dot_zero_vector),
        ("DOT orthogonal vectors", dot_orthogonal),
        ("DOT large vectors", dot_large_vectors),
        ("DOT edge cases", dot_edge_cases),
        ("DOT size mismatch", dot_size_mismatch),
    ];

    let mut passed = 0;
    for (name, check) in checks {
        let ok = check();
        println!("Testing {name}... {}", if ok { "PASS" } else { "FAIL" });
        if ok {
            passed += 1;
        }
    }

    println!("\n{passed}/{} tests passed", checks.len());
    if passed == checks.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
