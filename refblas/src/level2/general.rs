//! General matrices: GEMV, GBMV and GER.

use refblas_core::error::{buffer_len, leading_dimension};
use refblas_core::{Band, Dense, Layout, Result, RowStorage, StrideWalker, Transpose};

use super::plan::{Access, GeneralPlan};
use super::scale_output;

// ============================================================================
// GEMV / GBMV: y := alpha * op(A) * x + beta * y
// ============================================================================

/// Double-precision GEMV: y := alpha * op(A) * x + beta * y
///
/// `A` is `m x n`. With `Transpose::NoTrans` x has `n` elements and y has
/// `m`; with `Trans`/`ConjTrans` the lengths swap.
pub fn dgemv(
    layout: Layout,
    trans: Transpose,
    m: usize,
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
    let plan = GeneralPlan::resolve(layout, trans, m, n, 0, 0);
    leading_dimension("lda", lda, plan.cols.max(1))?;
    let storage = Dense {
        rows: plan.rows,
        cols: plan.cols,
        lda,
    };
    buffer_len("a", a.len(), storage.required_len())?;
    let sx = StrideWalker::over("x", plan.x_len(), incx, x.len())?;
    let sy = StrideWalker::over("y", plan.y_len(), incy, y.len())?;

    // Quick return if possible
    if m == 0 || n == 0 || (alpha == 0.0 && beta == 1.0) {
        return Ok(());
    }
    log::trace!("dgemv: {:?}", plan);

    scale_output(beta, y, &sy)?;
    if alpha == 0.0 {
        return Ok(());
    }
    accumulate(&storage, plan.access, alpha, a, x, &sx, y, &sy);
    Ok(())
}

/// Double-precision GBMV: y := alpha * op(A) * x + beta * y, A banded.
///
/// `m` and `n` are the dimensions of the full matrix; `A` holds it in
/// compact row-major band form with `kl` sub- and `ku` super-diagonals,
/// `lda >= kl + ku + 1` slots per row. Slots outside the band are never
/// read.
pub fn dgbmv(
    layout: Layout,
    trans: Transpose,
    m: usize,
    n: usize,
    kl: usize,
    ku: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    let plan = GeneralPlan::resolve(layout, trans, m, n, kl, ku);
    let storage = Band {
        rows: plan.rows,
        cols: plan.cols,
        kl: plan.kl,
        ku: plan.ku,
        lda,
    };
    leading_dimension("lda", lda, storage.width())?;
    buffer_len("a", a.len(), storage.required_len())?;
    let sx = StrideWalker::over("x", plan.x_len(), incx, x.len())?;
    let sy = StrideWalker::over("y", plan.y_len(), incy, y.len())?;

    if m == 0 || n == 0 || (alpha == 0.0 && beta == 1.0) {
        return Ok(());
    }
    log::trace!("dgbmv: {:?}", plan);

    scale_output(beta, y, &sy)?;
    if alpha == 0.0 {
        return Ok(());
    }
    accumulate(&storage, plan.access, alpha, a, x, &sx, y, &sy);
    Ok(())
}

/// y += alpha * op(A) * x over the stored rows of A.
///
/// Row access is contiguous in row-major storage, so the transposed
/// operator broadcasts `alpha * x[i] * A[i, :]` into y instead of
/// gathering a column.
fn accumulate<S: RowStorage>(
    storage: &S,
    access: Access,
    alpha: f64,
    a: &[f64],
    x: &[f64],
    sx: &StrideWalker,
    y: &mut [f64],
    sy: &StrideWalker,
) {
    match access {
        Access::Gather => {
            for i in 0..storage.rows() {
                let span = storage.row(i);
                let mut sum = 0.0;
                for (&v, j) in a[span.range()].iter().zip(span.cols()) {
                    sum += v * x[sx.at(j)];
                }
                y[sy.at(i)] += alpha * sum;
            }
        }
        Access::Scatter => {
            for i in 0..storage.rows() {
                let tmp = alpha * x[sx.at(i)];
                if tmp == 0.0 {
                    continue;
                }
                let span = storage.row(i);
                for (&v, j) in a[span.range()].iter().zip(span.cols()) {
                    y[sy.at(j)] += tmp * v;
                }
            }
        }
    }
}

// ============================================================================
// GER: rank-1 update  A := alpha * x * y^T + A
// ============================================================================

/// Double-precision GER: A := alpha * x * y^T + A
///
/// x has `m` elements, y has `n`. Rows whose factor `alpha * x[i]` is zero
/// are not written.
pub fn dger(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) -> Result<()> {
    let sx = StrideWalker::over("x", m, incx, x.len())?;
    let sy = StrideWalker::over("y", n, incy, y.len())?;
    // Column-major A is the row-major A^T, and A^T += alpha * y * x^T.
    let (rows, cols, u, su, v, sv) = match layout {
        Layout::RowMajor => (m, n, x, sx, y, sy),
        Layout::ColMajor => (n, m, y, sy, x, sx),
    };
    leading_dimension("lda", lda, cols.max(1))?;
    let storage = Dense { rows, cols, lda };
    buffer_len("a", a.len(), storage.required_len())?;

    if m == 0 || n == 0 || alpha == 0.0 {
        return Ok(());
    }
    log::trace!("dger: {:?} rows={} cols={}", layout, rows, cols);

    for i in 0..rows {
        let tmp = alpha * u[su.at(i)];
        if tmp == 0.0 {
            continue;
        }
        let span = storage.row(i);
        for (aij, j) in a[span.range()].iter_mut().zip(span.cols()) {
            *aij += tmp * v[sv.at(j)];
        }
    }
    Ok(())
}
