/// AXPY: `y[i] = a * x[i] + y[i]`, updating `y` in place.
///
/// # Safety
///
/// `x` must be valid for `n` reads and `y` valid for `n` reads and writes.
/// `n == 0` touches neither pointer.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_axpy(a: f32, x: *const f32, y: *mut f32, n: usize) {
    for i in 0..n {
        *y.add(i) = a * *x.add(i) + *y.add(i);
    }
}

/// DOT: `sum(x[i] * y[i])`, accumulated left to right in `f32`.
///
/// # Safety
///
/// `x` and `y` must both be valid for `n` reads. `n == 0` returns `0.0`.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_dot(x: *const f32, y: *const f32, n: usize) -> f32 {
    let mut acc = 0.0_f32;
    for i in 0..n {
        acc += *x.add(i) * *y.add(i);
    }
    acc
}
