//! Row-major storage adapters.
//!
//! Each adapter maps a logical row of an `m x n` matrix to the contiguous
//! run of stored entries in the flat buffer and the logical column the run
//! starts at. Kernels walk rows through [`RowStorage`] and never compute a
//! buffer offset on their own, so the only bounds check needed is the
//! one-off [`RowStorage::required_len`] test at call entry.
//!
//! Lengths saturate at `usize::MAX` instead of overflowing: an oversized
//! `lda` or dimension then fails that entry test like any other short
//! buffer.
//!
//! ```text
//! dense        (i, j) -> i*lda + j
//! band         (i, j) -> i*lda + (j - i + kl)            for i-kl <= j <= i+ku
//! packed upper (i, j) -> i*(2n - i + 1)/2 + (j - i)      for j >= i
//! packed lower (i, j) -> i*(i + 1)/2 + j                 for j <= i
//! ```

use std::ops::Range;

use crate::layout::Uplo;

/// The stored entries of one logical row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Buffer offset of the first stored entry.
    pub offset: usize,
    /// Number of stored entries.
    pub len: usize,
    /// Logical column of the first stored entry.
    pub col: usize,
}

impl RowSpan {
    /// Buffer range of the stored entries.
    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Logical columns of the stored entries.
    #[inline(always)]
    pub fn cols(&self) -> Range<usize> {
        self.col..self.col + self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Splits a triangular row into the diagonal offset and the
    /// off-diagonal run. The diagonal is the first entry of an upper row
    /// and the last entry of a lower row.
    #[inline(always)]
    pub fn split_diag(self, uplo: Uplo) -> (usize, RowSpan) {
        debug_assert!(!self.is_empty());
        match uplo {
            Uplo::Upper => (
                self.offset,
                RowSpan {
                    offset: self.offset + 1,
                    len: self.len - 1,
                    col: self.col + 1,
                },
            ),
            Uplo::Lower => (
                self.offset + self.len - 1,
                RowSpan {
                    offset: self.offset,
                    len: self.len - 1,
                    col: self.col,
                },
            ),
        }
    }
}

/// A matrix layout that can be walked row by row.
pub trait RowStorage {
    /// Number of logical rows.
    fn rows(&self) -> usize;

    /// Stored entries of row `i`.
    fn row(&self, i: usize) -> RowSpan;

    /// Smallest buffer length that holds every stored entry, saturating at
    /// `usize::MAX`.
    fn required_len(&self) -> usize;

    /// Buffer offset of logical element (i, j), or `None` if it is not stored.
    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        let span = self.row(i);
        span.cols()
            .contains(&j)
            .then(|| span.offset + (j - span.col))
    }
}

/// Dense row-major `rows x cols` matrix with leading dimension `lda`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dense {
    pub rows: usize,
    pub cols: usize,
    pub lda: usize,
}

impl RowStorage for Dense {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn row(&self, i: usize) -> RowSpan {
        RowSpan {
            offset: i * self.lda,
            len: self.cols,
            col: 0,
        }
    }

    fn required_len(&self) -> usize {
        if self.rows == 0 || self.cols == 0 {
            0
        } else {
            (self.rows - 1).saturating_mul(self.lda).saturating_add(self.cols)
        }
    }
}

/// One triangle (diagonal included) of a dense row-major `n x n` matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseTriangle {
    pub n: usize,
    pub lda: usize,
    pub uplo: Uplo,
}

impl RowStorage for DenseTriangle {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn row(&self, i: usize) -> RowSpan {
        match self.uplo {
            Uplo::Upper => RowSpan {
                offset: i * self.lda + i,
                len: self.n - i,
                col: i,
            },
            Uplo::Lower => RowSpan {
                offset: i * self.lda,
                len: i + 1,
                col: 0,
            },
        }
    }

    fn required_len(&self) -> usize {
        if self.n == 0 {
            0
        } else {
            (self.n - 1).saturating_mul(self.lda).saturating_add(self.n)
        }
    }
}

/// Compact row-major band storage.
///
/// Row `i` occupies `lda` slots starting at `i*lda`; slot `kl` holds the
/// diagonal, so column `j` of row `i` sits in slot `j - i + kl`. Slots that
/// fall outside the matrix (upper-left and lower-right corners) are never
/// addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub rows: usize,
    pub cols: usize,
    pub kl: usize,
    pub ku: usize,
    pub lda: usize,
}

impl Band {
    /// Upper triangular (or symmetric upper) band with `k` super-diagonals.
    pub fn upper(n: usize, k: usize, lda: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            kl: 0,
            ku: k,
            lda,
        }
    }

    /// Lower triangular (or symmetric lower) band with `k` sub-diagonals.
    pub fn lower(n: usize, k: usize, lda: usize) -> Self {
        Self {
            rows: n,
            cols: n,
            kl: k,
            ku: 0,
            lda,
        }
    }

    /// Triangular band of bandwidth `k` in the given triangle.
    pub fn triangle(n: usize, k: usize, lda: usize, uplo: Uplo) -> Self {
        match uplo {
            Uplo::Upper => Self::upper(n, k, lda),
            Uplo::Lower => Self::lower(n, k, lda),
        }
    }

    /// Slots per row needed to hold the band.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.kl.saturating_add(self.ku).saturating_add(1)
    }
}

impl RowStorage for Band {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn row(&self, i: usize) -> RowSpan {
        // Stored columns are [i - kl, i + ku] clipped to the matrix; the
        // first of them sits in slot kl - i when that is positive.
        let first = i.saturating_sub(self.kl);
        let end = self.cols.min(i.saturating_add(self.ku).saturating_add(1));
        let len = end.saturating_sub(first);
        RowSpan {
            // Rows below the last column store nothing and may lie past
            // the end of a minimal buffer.
            offset: if len == 0 {
                0
            } else {
                i.saturating_mul(self.lda)
                    .saturating_add(self.kl.saturating_sub(i))
            },
            len,
            col: first,
        }
    }

    fn required_len(&self) -> usize {
        let last = self.rows.min(self.cols.saturating_add(self.kl));
        if last == 0 || self.cols == 0 {
            return 0;
        }
        let span = self.row(last - 1);
        span.offset.saturating_add(span.len)
    }
}

/// Packed triangle of an `n x n` matrix, condensed row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packed {
    pub n: usize,
    pub uplo: Uplo,
}

impl Packed {
    /// Number of stored entries, `n(n+1)/2`, saturating for huge `n`.
    #[inline(always)]
    pub fn stored(n: usize) -> usize {
        if n % 2 == 0 {
            (n / 2).saturating_mul(n + 1)
        } else {
            n.saturating_mul(n / 2 + 1)
        }
    }
}

impl RowStorage for Packed {
    #[inline(always)]
    fn rows(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn row(&self, i: usize) -> RowSpan {
        match self.uplo {
            Uplo::Upper => RowSpan {
                offset: i * (2 * self.n - i + 1) / 2,
                len: self.n - i,
                col: i,
            },
            Uplo::Lower => RowSpan {
                offset: i * (i + 1) / 2,
                len: i + 1,
                col: 0,
            },
        }
    }

    fn required_len(&self) -> usize {
        Self::stored(self.n)
    }
}
