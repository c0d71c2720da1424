//! CBLAS-code entry points.
//!
//! Mirrors of the `level2` routines taking the C interface's `i32`
//! dimensions, strides and integer flag codes. Each wrapper decodes and
//! validates its scalars, then forwards to the typed routine, so negative
//! counts surface as [`ErrorKind::InvalidDimension`] and unknown codes as
//! [`ErrorKind::InvalidFlag`] before any buffer is examined.
//!
//! Flag codes follow CBLAS: layout 101/102, trans 111/112/113,
//! uplo 121/122, diag 131/132.
//!
//! [`ErrorKind::InvalidDimension`]: refblas_core::ErrorKind::InvalidDimension
//! [`ErrorKind::InvalidFlag`]: refblas_core::ErrorKind::InvalidFlag

use refblas_core::error::dimension;
use refblas_core::{Diag, Layout, Result, Transpose, Uplo};

use crate::level2;

// ============================================================================
// General
// ============================================================================

/// GEMV with CBLAS codes: y := alpha * op(A) * x + beta * y
pub fn cblas_dgemv(
    layout: i32,
    trans: i32,
    m: i32,
    n: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    x: &[f64],
    incx: i32,
    beta: f64,
    y: &mut [f64],
    incy: i32,
) -> Result<()> {
    level2::dgemv(
        Layout::try_from(layout)?,
        Transpose::try_from(trans)?,
        dimension("m", m)?,
        dimension("n", n)?,
        alpha,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
        beta,
        y,
        incy as isize,
    )
}

/// GBMV with CBLAS codes: y := alpha * op(A) * x + beta * y, A banded
pub fn cblas_dgbmv(
    layout: i32,
    trans: i32,
    m: i32,
    n: i32,
    kl: i32,
    ku: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    x: &[f64],
    incx: i32,
    beta: f64,
    y: &mut [f64],
    incy: i32,
) -> Result<()> {
    level2::dgbmv(
        Layout::try_from(layout)?,
        Transpose::try_from(trans)?,
        dimension("m", m)?,
        dimension("n", n)?,
        dimension("kl", kl)?,
        dimension("ku", ku)?,
        alpha,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
        beta,
        y,
        incy as isize,
    )
}

/// GER with CBLAS codes: A := alpha * x * y^T + A
pub fn cblas_dger(
    layout: i32,
    m: i32,
    n: i32,
    alpha: f64,
    x: &[f64],
    incx: i32,
    y: &[f64],
    incy: i32,
    a: &mut [f64],
    lda: i32,
) -> Result<()> {
    level2::dger(
        Layout::try_from(layout)?,
        dimension("m", m)?,
        dimension("n", n)?,
        alpha,
        x,
        incx as isize,
        y,
        incy as isize,
        a,
        dimension("lda", lda)?,
    )
}

// ============================================================================
// Symmetric
// ============================================================================

/// SYMV with CBLAS codes: y := alpha * A * x + beta * y, A symmetric
pub fn cblas_dsymv(
    layout: i32,
    uplo: i32,
    n: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    x: &[f64],
    incx: i32,
    beta: f64,
    y: &mut [f64],
    incy: i32,
) -> Result<()> {
    level2::dsymv(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        alpha,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
        beta,
        y,
        incy as isize,
    )
}

/// SBMV with CBLAS codes: symmetric band multiply
pub fn cblas_dsbmv(
    layout: i32,
    uplo: i32,
    n: i32,
    k: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    x: &[f64],
    incx: i32,
    beta: f64,
    y: &mut [f64],
    incy: i32,
) -> Result<()> {
    level2::dsbmv(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        dimension("k", k)?,
        alpha,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
        beta,
        y,
        incy as isize,
    )
}

/// SPMV with CBLAS codes: symmetric packed multiply
pub fn cblas_dspmv(
    layout: i32,
    uplo: i32,
    n: i32,
    alpha: f64,
    ap: &[f64],
    x: &[f64],
    incx: i32,
    beta: f64,
    y: &mut [f64],
    incy: i32,
) -> Result<()> {
    level2::dspmv(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        alpha,
        ap,
        x,
        incx as isize,
        beta,
        y,
        incy as isize,
    )
}

/// SYR with CBLAS codes: A := alpha * x * x^T + A
pub fn cblas_dsyr(
    layout: i32,
    uplo: i32,
    n: i32,
    alpha: f64,
    x: &[f64],
    incx: i32,
    a: &mut [f64],
    lda: i32,
) -> Result<()> {
    level2::dsyr(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        alpha,
        x,
        incx as isize,
        a,
        dimension("lda", lda)?,
    )
}

/// SPR with CBLAS codes: packed A := alpha * x * x^T + A
pub fn cblas_dspr(
    layout: i32,
    uplo: i32,
    n: i32,
    alpha: f64,
    x: &[f64],
    incx: i32,
    ap: &mut [f64],
) -> Result<()> {
    level2::dspr(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        alpha,
        x,
        incx as isize,
        ap,
    )
}

/// SYR2 with CBLAS codes: A := alpha * (x * y^T + y * x^T) + A
pub fn cblas_dsyr2(
    layout: i32,
    uplo: i32,
    n: i32,
    alpha: f64,
    x: &[f64],
    incx: i32,
    y: &[f64],
    incy: i32,
    a: &mut [f64],
    lda: i32,
) -> Result<()> {
    level2::dsyr2(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        alpha,
        x,
        incx as isize,
        y,
        incy as isize,
        a,
        dimension("lda", lda)?,
    )
}

/// SPR2 with CBLAS codes: packed rank-2 update
pub fn cblas_dspr2(
    layout: i32,
    uplo: i32,
    n: i32,
    alpha: f64,
    x: &[f64],
    incx: i32,
    y: &[f64],
    incy: i32,
    ap: &mut [f64],
) -> Result<()> {
    level2::dspr2(
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        dimension("n", n)?,
        alpha,
        x,
        incx as isize,
        y,
        incy as isize,
        ap,
    )
}

// ============================================================================
// Triangular
// ============================================================================

/// Decodes the four flags every triangular routine takes.
fn triangular_flags(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
) -> Result<(Layout, Uplo, Transpose, Diag)> {
    Ok((
        Layout::try_from(layout)?,
        Uplo::try_from(uplo)?,
        Transpose::try_from(trans)?,
        Diag::try_from(diag)?,
    ))
}

/// TRMV with CBLAS codes: x := op(A) * x, A triangular
pub fn cblas_dtrmv(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
    n: i32,
    a: &[f64],
    lda: i32,
    x: &mut [f64],
    incx: i32,
) -> Result<()> {
    let (layout, uplo, trans, diag) = triangular_flags(layout, uplo, trans, diag)?;
    level2::dtrmv(
        layout,
        uplo,
        trans,
        diag,
        dimension("n", n)?,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
    )
}

/// TBMV with CBLAS codes: x := op(A) * x, A triangular band
pub fn cblas_dtbmv(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
    n: i32,
    k: i32,
    a: &[f64],
    lda: i32,
    x: &mut [f64],
    incx: i32,
) -> Result<()> {
    let (layout, uplo, trans, diag) = triangular_flags(layout, uplo, trans, diag)?;
    level2::dtbmv(
        layout,
        uplo,
        trans,
        diag,
        dimension("n", n)?,
        dimension("k", k)?,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
    )
}

/// TPMV with CBLAS codes: x := op(A) * x, A triangular packed
pub fn cblas_dtpmv(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
    n: i32,
    ap: &[f64],
    x: &mut [f64],
    incx: i32,
) -> Result<()> {
    let (layout, uplo, trans, diag) = triangular_flags(layout, uplo, trans, diag)?;
    level2::dtpmv(layout, uplo, trans, diag, dimension("n", n)?, ap, x, incx as isize)
}

/// TRSV with CBLAS codes: solves op(A) * x = b in place
pub fn cblas_dtrsv(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
    n: i32,
    a: &[f64],
    lda: i32,
    x: &mut [f64],
    incx: i32,
) -> Result<()> {
    let (layout, uplo, trans, diag) = triangular_flags(layout, uplo, trans, diag)?;
    level2::dtrsv(
        layout,
        uplo,
        trans,
        diag,
        dimension("n", n)?,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
    )
}

/// TBSV with CBLAS codes: banded triangular solve
pub fn cblas_dtbsv(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
    n: i32,
    k: i32,
    a: &[f64],
    lda: i32,
    x: &mut [f64],
    incx: i32,
) -> Result<()> {
    let (layout, uplo, trans, diag) = triangular_flags(layout, uplo, trans, diag)?;
    level2::dtbsv(
        layout,
        uplo,
        trans,
        diag,
        dimension("n", n)?,
        dimension("k", k)?,
        a,
        dimension("lda", lda)?,
        x,
        incx as isize,
    )
}

/// TPSV with CBLAS codes: packed triangular solve
pub fn cblas_dtpsv(
    layout: i32,
    uplo: i32,
    trans: i32,
    diag: i32,
    n: i32,
    ap: &[f64],
    x: &mut [f64],
    incx: i32,
) -> Result<()> {
    let (layout, uplo, trans, diag) = triangular_flags(layout, uplo, trans, diag)?;
    level2::dtpsv(layout, uplo, trans, diag, dimension("n", n)?, ap, x, incx as isize)
}
