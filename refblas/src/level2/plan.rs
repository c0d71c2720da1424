//! Flag resolution.
//!
//! Each kernel turns its `(layout, trans, uplo, diag)` arguments into a
//! plan once at entry. Column-major calls become row-major calls on the
//! transposed buffer, so the loops below this point only ever see
//! row-major storage and never re-test a flag per element.

use refblas_core::{Diag, Layout, Transpose, Uplo};

/// How a row-major kernel consumes each stored row of A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// op(A) = A: row i is reduced against x into output element i.
    Gather,
    /// op(A) = A^T: row i, scaled by x[i], is broadcast into the output.
    Scatter,
}

impl Access {
    #[inline]
    pub(crate) fn of(trans: Transpose) -> Self {
        if trans.is_trans() {
            Access::Scatter
        } else {
            Access::Gather
        }
    }
}

/// Order in which rows are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sweep {
    Forward,
    Backward,
}

impl Sweep {
    pub(crate) fn rows(self, n: usize) -> impl Iterator<Item = usize> {
        let (forward, backward) = match self {
            Sweep::Forward => (Some(0..n), None),
            Sweep::Backward => (None, Some((0..n).rev())),
        };
        forward
            .into_iter()
            .flatten()
            .chain(backward.into_iter().flatten())
    }
}

/// Row-major view of a general (dense or banded) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GeneralPlan {
    pub access: Access,
    pub rows: usize,
    pub cols: usize,
    pub kl: usize,
    pub ku: usize,
}

impl GeneralPlan {
    pub(crate) fn resolve(
        layout: Layout,
        trans: Transpose,
        m: usize,
        n: usize,
        kl: usize,
        ku: usize,
    ) -> Self {
        match layout {
            Layout::RowMajor => Self {
                access: Access::of(trans),
                rows: m,
                cols: n,
                kl,
                ku,
            },
            Layout::ColMajor => Self {
                access: Access::of(trans.flip()),
                rows: n,
                cols: m,
                kl: ku,
                ku: kl,
            },
        }
    }

    /// Logical length of x.
    #[inline]
    pub(crate) fn x_len(&self) -> usize {
        match self.access {
            Access::Gather => self.cols,
            Access::Scatter => self.rows,
        }
    }

    /// Logical length of y.
    #[inline]
    pub(crate) fn y_len(&self) -> usize {
        match self.access {
            Access::Gather => self.rows,
            Access::Scatter => self.cols,
        }
    }
}

/// Triangle stored in the row-major view of a symmetric matrix.
#[inline]
pub(crate) fn symmetric_uplo(layout: Layout, uplo: Uplo) -> Uplo {
    match layout {
        Layout::RowMajor => uplo,
        Layout::ColMajor => uplo.flip(),
    }
}

/// Row-major view of a triangular operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TriangularPlan {
    pub uplo: Uplo,
    pub access: Access,
    pub unit: bool,
}

impl TriangularPlan {
    pub(crate) fn resolve(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag) -> Self {
        let (uplo, trans) = match layout {
            Layout::RowMajor => (uplo, trans),
            Layout::ColMajor => (uplo.flip(), trans.flip()),
        };
        Self {
            uplo,
            access: Access::of(trans),
            unit: diag.is_unit(),
        }
    }

    /// `x := op(A) x` must read every x[j] a row depends on before that
    /// entry is overwritten.
    pub(crate) fn multiply_sweep(&self) -> Sweep {
        match (self.uplo, self.access) {
            (Uplo::Upper, Access::Gather) | (Uplo::Lower, Access::Scatter) => Sweep::Forward,
            (Uplo::Lower, Access::Gather) | (Uplo::Upper, Access::Scatter) => Sweep::Backward,
        }
    }

    /// Substitution resolves the rows a solve depends on first.
    pub(crate) fn solve_sweep(&self) -> Sweep {
        match self.multiply_sweep() {
            Sweep::Forward => Sweep::Backward,
            Sweep::Backward => Sweep::Forward,
        }
    }
}
