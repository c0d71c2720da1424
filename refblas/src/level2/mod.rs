//! BLAS Level 2: Matrix-vector operations on `f64`.
//!
//! All operations accept a CBLAS-style `Layout`. Row-major is the native
//! storage contract; a column-major call is resolved once at entry into
//! the equivalent row-major call on the transposed buffer (see `plan`).
//!
//! Storage is walked through the `refblas_core::storage` adapters, vectors
//! through `StrideWalker`, so any non-zero stride (negative included) is
//! accepted. Every routine validates all of its arguments before touching
//! a buffer and returns `Err` without mutation on failure.
//!
//! No aliasing between `x`, `y` and `A` is possible through the safe
//! signatures; the in-place triangular routines own `x` exclusively for
//! the duration of the call.

mod general;
mod plan;
mod symmetric;
mod triangular;

pub use general::{dgbmv, dgemv, dger};
pub use symmetric::{dsbmv, dspmv, dspr, dspr2, dsymv, dsyr, dsyr2};
pub use triangular::{dtbmv, dtbsv, dtpmv, dtpsv, dtrmv, dtrsv};

use refblas_core::{Result, StrideWalker};

use crate::level1;

/// Scaling prelude shared by the multiply-accumulate kernels:
/// y := beta * y over the logical elements of `sy`.
///
/// `beta == 0` stores exact zeros so stale non-finite values do not leak
/// into the result.
fn scale_output(beta: f64, y: &mut [f64], sy: &StrideWalker) -> Result<()> {
    if beta == 1.0 {
        return Ok(());
    }
    if beta == 0.0 {
        for off in sy.offsets() {
            y[off] = 0.0;
        }
        return Ok(());
    }
    // The walk covers the same slots in either direction, so scaling from
    // slot 0 with |inc| touches exactly the elements of y.
    level1::dscal(sy.len(), beta, y, sy.inc().unsigned_abs())
}
