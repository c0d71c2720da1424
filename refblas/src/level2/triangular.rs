//! Triangular matrices: TRMV/TBMV/TPMV (x := op(A) x) and TRSV/TBSV/TPSV
//! (solve op(A) x = b in place).
//!
//! All six routines share two kernels and differ only in the storage
//! adapter. The traversal order comes from the plan:
//!
//! ```text
//!                 multiply     solve
//! upper, A        forward      backward
//! lower, A        backward     forward
//! upper, A^T      backward     forward
//! lower, A^T      forward      backward
//! ```
//!
//! No singularity test is performed. A zero on a non-unit diagonal makes
//! the solve produce infinities or NaNs; that is not reported as an error.

use refblas_core::error::{buffer_len, leading_dimension};
use refblas_core::{
    Band, DenseTriangle, Diag, Layout, Packed, Result, RowStorage, StrideWalker, Transpose, Uplo,
};

use super::plan::{Access, TriangularPlan};

/// Double-precision TRMV: x := op(A) * x (A triangular, dense)
pub fn dtrmv(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) -> Result<()> {
    let plan = TriangularPlan::resolve(layout, uplo, trans, diag);
    let storage = dense(plan, n, a, lda)?;
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    log::trace!("dtrmv: {:?} n={}", plan, n);
    multiply(&storage, plan, a, x, &sx);
    Ok(())
}

/// Double-precision TBMV: x := op(A) * x (A triangular band, bandwidth `k`)
pub fn dtbmv(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) -> Result<()> {
    let plan = TriangularPlan::resolve(layout, uplo, trans, diag);
    let storage = band(plan, n, k, a, lda)?;
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    log::trace!("dtbmv: {:?} n={} k={}", plan, n, k);
    multiply(&storage, plan, a, x, &sx);
    Ok(())
}

/// Double-precision TPMV: x := op(A) * x (A triangular, packed)
pub fn dtpmv(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) -> Result<()> {
    let plan = TriangularPlan::resolve(layout, uplo, trans, diag);
    let storage = packed(plan, n, ap)?;
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    log::trace!("dtpmv: {:?} n={}", plan, n);
    multiply(&storage, plan, ap, x, &sx);
    Ok(())
}

/// Double-precision TRSV: solves op(A) * x = b, b given in x (A triangular, dense)
pub fn dtrsv(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) -> Result<()> {
    let plan = TriangularPlan::resolve(layout, uplo, trans, diag);
    let storage = dense(plan, n, a, lda)?;
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    log::trace!("dtrsv: {:?} n={}", plan, n);
    solve(&storage, plan, a, x, &sx);
    Ok(())
}

/// Double-precision TBSV: solves op(A) * x = b (A triangular band, bandwidth `k`)
pub fn dtbsv(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    k: usize,
    a: &[f64],
    lda: usize,
    x: &mut [f64],
    incx: isize,
) -> Result<()> {
    let plan = TriangularPlan::resolve(layout, uplo, trans, diag);
    let storage = band(plan, n, k, a, lda)?;
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    log::trace!("dtbsv: {:?} n={} k={}", plan, n, k);
    solve(&storage, plan, a, x, &sx);
    Ok(())
}

/// Double-precision TPSV: solves op(A) * x = b (A triangular, packed)
pub fn dtpsv(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) -> Result<()> {
    let plan = TriangularPlan::resolve(layout, uplo, trans, diag);
    let storage = packed(plan, n, ap)?;
    let sx = StrideWalker::over("x", n, incx, x.len())?;
    log::trace!("dtpsv: {:?} n={}", plan, n);
    solve(&storage, plan, ap, x, &sx);
    Ok(())
}

fn dense(plan: TriangularPlan, n: usize, a: &[f64], lda: usize) -> Result<DenseTriangle> {
    leading_dimension("lda", lda, n.max(1))?;
    let storage = DenseTriangle {
        n,
        lda,
        uplo: plan.uplo,
    };
    buffer_len("a", a.len(), storage.required_len())?;
    Ok(storage)
}

fn band(plan: TriangularPlan, n: usize, k: usize, a: &[f64], lda: usize) -> Result<Band> {
    leading_dimension("lda", lda, k.saturating_add(1))?;
    let storage = Band::triangle(n, k, lda, plan.uplo);
    buffer_len("a", a.len(), storage.required_len())?;
    Ok(storage)
}

fn packed(plan: TriangularPlan, n: usize, ap: &[f64]) -> Result<Packed> {
    leading_dimension("ap", ap.len(), Packed::stored(n))?;
    Ok(Packed { n, uplo: plan.uplo })
}

/// x := op(A) * x
fn multiply<S: RowStorage>(
    storage: &S,
    plan: TriangularPlan,
    a: &[f64],
    x: &mut [f64],
    sx: &StrideWalker,
) {
    let n = storage.rows();
    let sweep = plan.multiply_sweep();
    match plan.access {
        // Row i only reads x[j] for j on the far side of the diagonal,
        // none of which the sweep has overwritten yet.
        Access::Gather => {
            for i in sweep.rows(n) {
                let (diag, off) = storage.row(i).split_diag(plan.uplo);
                let ix = sx.at(i);
                let mut sum = if plan.unit { x[ix] } else { a[diag] * x[ix] };
                for (&v, j) in a[off.range()].iter().zip(off.cols()) {
                    sum += v * x[sx.at(j)];
                }
                x[ix] = sum;
            }
        }
        // Row i pushes its original x[i] into the entries on the far side
        // of the diagonal, then scales x[i] itself.
        Access::Scatter => {
            for i in sweep.rows(n) {
                let (diag, off) = storage.row(i).split_diag(plan.uplo);
                let ix = sx.at(i);
                let xi = x[ix];
                for (&v, j) in a[off.range()].iter().zip(off.cols()) {
                    x[sx.at(j)] += v * xi;
                }
                if !plan.unit {
                    x[ix] *= a[diag];
                }
            }
        }
    }
}

/// op(A) * x = b, overwriting b with x.
fn solve<S: RowStorage>(
    storage: &S,
    plan: TriangularPlan,
    a: &[f64],
    x: &mut [f64],
    sx: &StrideWalker,
) {
    let n = storage.rows();
    let sweep = plan.solve_sweep();
    match plan.access {
        // Substitution: every x[j] in row i is already resolved.
        Access::Gather => {
            for i in sweep.rows(n) {
                let (diag, off) = storage.row(i).split_diag(plan.uplo);
                let ix = sx.at(i);
                let mut sum = 0.0;
                for (&v, j) in a[off.range()].iter().zip(off.cols()) {
                    sum += v * x[sx.at(j)];
                }
                let mut xi = x[ix] - sum;
                if !plan.unit {
                    xi /= a[diag];
                }
                x[ix] = xi;
            }
        }
        // x[i] is final once every earlier row has been subtracted out;
        // resolve it, then eliminate it from the rows still pending.
        Access::Scatter => {
            for i in sweep.rows(n) {
                let (diag, off) = storage.row(i).split_diag(plan.uplo);
                let ix = sx.at(i);
                if !plan.unit {
                    x[ix] /= a[diag];
                }
                let xi = x[ix];
                for (&v, j) in a[off.range()].iter().zip(off.cols()) {
                    x[sx.at(j)] -= v * xi;
                }
            }
        }
    }
}
