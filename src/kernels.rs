//! Scalar AXPY and DOT with explicit safety contracts.
//!
//! Each kernel has two entry points:
//! - `compute_unchecked`: raw pointers plus a length, no bounds checks. Forwards
//!   straight to the `extern "C"` reference loop in `vecbench-scalar-ops`.
//! - `compute_checked`: slices, rejects mismatched lengths with
//!   [`BenchError::InvalidArgument`] before delegating to the unchecked form.

use vecbench_scalar_ops::blas::{scalar_axpy, scalar_dot};

use crate::error::{BenchError, BenchResult};

/// Which operation a kernel performs. Selects the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Axpy,
    Dot,
}

impl KernelKind {
    pub fn label(self) -> &'static str {
        match self {
            KernelKind::Axpy => "AXPY",
            KernelKind::Dot => "DOT",
        }
    }
}

/// Identity of a kernel implementation for reporting.
pub trait ScalarKernel {
    /// Implementation name, e.g. `"Scalar"`.
    const NAME: &'static str;
    const KIND: KernelKind;

    fn name() -> &'static str {
        Self::NAME
    }
}

/// `y = a * x + y`, in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxpyScalar;

impl ScalarKernel for AxpyScalar {
    const NAME: &'static str = "Scalar";
    const KIND: KernelKind = KernelKind::Axpy;
}

impl AxpyScalar {
    /// # Safety
    ///
    /// `x` must be valid for `n` reads and `y` for `n` reads and writes.
    #[inline(always)]
    pub unsafe fn compute_unchecked(a: f32, x: *const f32, y: *mut f32, n: usize) {
        scalar_axpy(a, x, y, n);
    }

    pub fn compute_checked(a: f32, x: &[f32], y: &mut [f32]) -> BenchResult<()> {
        check_lengths(x.len(), y.len())?;
        // SAFETY: both slices hold exactly `x.len()` elements.
        unsafe { Self::compute_unchecked(a, x.as_ptr(), y.as_mut_ptr(), x.len()) };
        Ok(())
    }
}

/// `sum(x[i] * y[i])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotScalar;

impl ScalarKernel for DotScalar {
    const NAME: &'static str = "Scalar";
    const KIND: KernelKind = KernelKind::Dot;
}

impl DotScalar {
    /// # Safety
    ///
    /// `x` and `y` must both be valid for `n` reads.
    #[inline(always)]
    pub unsafe fn compute_unchecked(x: *const f32, y: *const f32, n: usize) -> f32 {
        scalar_dot(x, y, n)
    }

    pub fn compute_checked(x: &[f32], y: &[f32]) -> BenchResult<f32> {
        check_lengths(x.len(), y.len())?;
        // SAFETY: both slices hold exactly `x.len()` elements.
        Ok(unsafe { Self::compute_unchecked(x.as_ptr(), y.as_ptr(), x.len()) })
    }
}

#[inline]
fn check_lengths(x_len: usize, y_len: usize) -> BenchResult<()> {
    if x_len != y_len {
        return Err(BenchError::InvalidArgument(format!(
            "vector sizes must match: x={x_len}, y={y_len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f32], want: &[f32]) {
        assert_eq!(got.len(), want.len());
        for (i, (g, w)) in got.iter().zip(want).enumerate() {
            assert!((g - w).abs() < 1e-6, "index {i}: got {g}, want {w}");
        }
    }

    #[test]
    fn test_axpy_basic() {
        let x = [1.0_f32, 2.0, 3.0, 4.0];
        let mut y = [0.1_f32, 0.2, 0.3, 0.4];
        AxpyScalar::compute_checked(2.0, &x, &mut y).unwrap();
        assert_close(&y, &[2.1, 4.2, 6.3, 8.4]);
    }

    #[test]
    fn test_axpy_single_element() {
        let mut y = [1.0_f32];
        AxpyScalar::compute_checked(2.0, &[42.0], &mut y).unwrap();
        assert_eq!(y, [85.0]);
    }

    #[test]
    fn test_axpy_compounds_across_calls() {
        let x = [1.0_f32, 1.0];
        let mut y = [0.0_f32, 0.0];
        for _ in 0..3 {
            AxpyScalar::compute_checked(0.5, &x, &mut y).unwrap();
        }
        assert_close(&y, &[1.5, 1.5]);
    }

    #[test]
    fn test_axpy_empty_is_noop() {
        let mut y: [f32; 0] = [];
        assert!(AxpyScalar::compute_checked(3.0, &[], &mut y).is_ok());
    }

    #[test]
    fn test_axpy_size_mismatch() {
        let mut y = [0.0_f32; 3];
        let err = AxpyScalar::compute_checked(1.0, &[1.0, 2.0], &mut y).unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)));
        assert_eq!(y, [0.0; 3], "y must be untouched on mismatch");
    }

    #[test]
    fn test_dot_basic() {
        let r = DotScalar::compute_checked(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(r, 40.0);
    }

    #[test]
    fn test_dot_empty_is_zero() {
        assert_eq!(DotScalar::compute_checked(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_dot_size_mismatch() {
        let err = DotScalar::compute_checked(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)));
    }

    #[test]
    fn test_unchecked_matches_checked() {
        let x = [0.5_f32, -1.5, 2.0];
        let y = [4.0_f32, 2.0, -1.0];
        let raw = unsafe { DotScalar::compute_unchecked(x.as_ptr(), y.as_ptr(), 3) };
        assert_eq!(raw, DotScalar::compute_checked(&x, &y).unwrap());
    }

    #[test]
    fn test_names() {
        assert_eq!(AxpyScalar::name(), "Scalar");
        assert_eq!(DotScalar::name(), "Scalar");
        assert_eq!(AxpyScalar::KIND.label(), "AXPY");
        assert_eq!(DotScalar::KIND.label(), "DOT");
    }
}
