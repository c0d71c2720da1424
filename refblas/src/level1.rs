//! BLAS Level 1: the vector primitives the Level-2 kernels lean on.
//!
//! Only `dscal` is needed: every multiply-accumulate kernel forms
//! `y := beta * y` through it before adding `alpha * op(A) * x`.

use refblas_core::error::{buffer_len, Error, Result};

// ============================================================================
// SCAL: x = alpha * x
// ============================================================================

/// Double-precision scal: x := alpha * x
///
/// Scales `n` elements spaced `incx` apart, starting at `x[0]`.
pub fn dscal(n: usize, alpha: f64, x: &mut [f64], incx: usize) -> Result<()> {
    if incx == 0 {
        return Err(Error::InvalidStride { name: "incx" });
    }
    if n == 0 {
        return Ok(());
    }
    buffer_len("x", x.len(), (n - 1).saturating_mul(incx).saturating_add(1))?;
    if incx == 1 {
        for v in &mut x[..n] {
            *v *= alpha;
        }
    } else {
        for v in x.iter_mut().step_by(incx).take(n) {
            *v *= alpha;
        }
    }
    Ok(())
}
