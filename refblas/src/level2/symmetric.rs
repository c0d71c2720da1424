//! Symmetric matrices: SYMV/SBMV/SPMV and the rank-1/rank-2 updates
//! SYR/SPR and SYR2/SPR2.
//!
//! Only one triangle is stored. Each stored off-diagonal entry A[i, j]
//! serves both A[i, j] and A[j, i], so the multiply contributes to y[i]
//! and y[j] in the same pass; the diagonal contributes once.

use refblas_core::error::{buffer_len, leading_dimension};
use refblas_core::{
    Band, DenseTriangle, Layout, Packed, Result, RowStorage, StrideWalker, Uplo,
};

use super::plan::symmetric_uplo;
use super::scale_output;

// ============================================================================
// SYMV / SBMV / SPMV: y := alpha * A * x + beta * y
// ============================================================================

/// Double-precision SYMV: y := alpha * A * x + beta * y (A symmetric, dense)
pub fn dsymv(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("lda", lda, n.max(1))?;
    let storage = DenseTriangle { n, lda, uplo };
    buffer_len("a", a.len(), storage.required_len())?;
    multiply("dsymv", &storage, uplo, alpha, a, x, incx, beta, y, incy)
}

/// Double-precision SBMV: y := alpha * A * x + beta * y (A symmetric band)
///
/// The stored triangle has bandwidth `k` in compact band form,
/// `lda >= k + 1`: an upper row starts at its diagonal, a lower row ends
/// at it.
pub fn dsbmv(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("lda", lda, k.saturating_add(1))?;
    let storage = Band::triangle(n, k, lda, uplo);
    buffer_len("a", a.len(), storage.required_len())?;
    multiply("dsbmv", &storage, uplo, alpha, a, x, incx, beta, y, incy)
}

/// Double-precision SPMV: y := alpha * A * x + beta * y (A symmetric, packed)
pub fn dspmv(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    ap: &[f64],
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("ap", ap.len(), Packed::stored(n))?;
    let storage = Packed { n, uplo };
    multiply("dspmv", &storage, uplo, alpha, ap, x, incx, beta, y, incy)
}

fn multiply<S: RowStorage>(
    routine: &str,
    storage: &S,
    uplo: Uplo,
    alpha: f64,
    a: &[f64],
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    let n = storage.rows();
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    let sy = StrideWalker::over("y", n, incy, y.len())?;

    // Quick return if possible
    if n == 0 || (alpha == 0.0 && beta == 1.0) {
        return Ok(());
    }
    log::trace!("{}: {:?} n={}", routine, uplo, n);

    scale_output(beta, y, &sy)?;
    if alpha == 0.0 {
        return Ok(());
    }

    for i in 0..n {
        let (diag, off) = storage.row(i).split_diag(uplo);
        let xi = x[sx.at(i)];
        let scaled = alpha * xi;
        let mut sum = 0.0;
        for (&v, j) in a[off.range()].iter().zip(off.cols()) {
            sum += v * x[sx.at(j)];
            y[sy.at(j)] += scaled * v;
        }
        y[sy.at(i)] += alpha * (sum + a[diag] * xi);
    }
    Ok(())
}

// ============================================================================
// SYR / SPR: A := alpha * x * x^T + A
// ============================================================================

/// Double-precision SYR: A := alpha * x * x^T + A (stored triangle only)
pub fn dsyr(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    a: &mut [f64],
    lda: usize,
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("lda", lda, n.max(1))?;
    let storage = DenseTriangle { n, lda, uplo };
    buffer_len("a", a.len(), storage.required_len())?;
    rank1("dsyr", &storage, alpha, x, incx, a)
}

/// Double-precision SPR: A := alpha * x * x^T + A (A packed)
pub fn dspr(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    ap: &mut [f64],
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("ap", ap.len(), Packed::stored(n))?;
    rank1("dspr", &Packed { n, uplo }, alpha, x, incx, ap)
}

fn rank1<S: RowStorage>(
    routine: &str,
    storage: &S,
    alpha: f64,
    x: &[f64],
    incx: isize,
    a: &mut [f64],
) -> Result<()> {
    let n = storage.rows();
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    if n == 0 || alpha == 0.0 {
        return Ok(());
    }
    log::trace!("{}: n={}", routine, n);

    for i in 0..n {
        let tmp = alpha * x[sx.at(i)];
        if tmp == 0.0 {
            continue;
        }
        let span = storage.row(i);
        for (aij, j) in a[span.range()].iter_mut().zip(span.cols()) {
            *aij += tmp * x[sx.at(j)];
        }
    }
    Ok(())
}

// ============================================================================
// SYR2 / SPR2: A := alpha * x * y^T + alpha * y * x^T + A
// ============================================================================

/// Double-precision SYR2: A := alpha * (x * y^T + y * x^T) + A
pub fn dsyr2(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("lda", lda, n.max(1))?;
    let storage = DenseTriangle { n, lda, uplo };
    buffer_len("a", a.len(), storage.required_len())?;
    rank2("dsyr2", &storage, alpha, x, incx, y, incy, a)
}

/// Double-precision SPR2: A := alpha * (x * y^T + y * x^T) + A (A packed)
pub fn dspr2(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    ap: &mut [f64],
) -> Result<()> {
    let uplo = symmetric_uplo(layout, uplo);
    leading_dimension("ap", ap.len(), Packed::stored(n))?;
    rank2("dspr2", &Packed { n, uplo }, alpha, x, incx, y, incy, ap)
}

fn rank2<S: RowStorage>(
    routine: &str,
    storage: &S,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
) -> Result<()> {
    let n = storage.rows();
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    let sy = StrideWalker::over("y", n, incy, y.len())?;
    if n == 0 || alpha == 0.0 {
        return Ok(());
    }
    log::trace!("{}: n={}", routine, n);

    for i in 0..n {
        let xi = x[sx.at(i)];
        let yi = y[sy.at(i)];
        let span = storage.row(i);
        for (aij, j) in a[span.range()].iter_mut().zip(span.cols()) {
            *aij += alpha * (xi * y[sy.at(j)] + x[sx.at(j)] * yi);
        }
    }
    Ok(())
}
