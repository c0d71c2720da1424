//! CBLAS-style layout and flag enumerations.
//!
//! Every flag carries its CBLAS integer code so the raw entry surface can
//! decode it with `TryFrom<i32>`. Unknown codes are rejected with
//! [`Error::InvalidFlag`].

use crate::error::{Error, Result};

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    #[default]
    RowMajor = 101,
    /// Column-major (Fortran-style): elements in a column are contiguous.
    ColMajor = 102,
}

/// Transpose operation for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
    /// Conjugate transpose. Identical to `Trans` for real data.
    ConjTrans = 113,
}

/// BLAS triangle specifier (upper/lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

/// BLAS diagonal specifier (unit/non-unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    Unit = 132,
}

impl Transpose {
    /// Whether the operator is `A^T` rather than `A`.
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }

    /// The opposite operator. `ConjTrans` flips to `NoTrans`.
    #[inline(always)]
    pub fn flip(self) -> Transpose {
        if self.is_trans() {
            Transpose::NoTrans
        } else {
            Transpose::Trans
        }
    }
}

impl Uplo {
    /// The opposite triangle.
    #[inline(always)]
    pub fn flip(self) -> Uplo {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

impl Diag {
    /// Whether the diagonal is implicit ones.
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        self == Diag::Unit
    }
}

macro_rules! impl_try_from_code {
    ($ty:ident, $name:literal, [$($variant:ident),+]) => {
        impl TryFrom<i32> for $ty {
            type Error = Error;

            fn try_from(code: i32) -> Result<Self> {
                $(
                    if code == $ty::$variant as i32 {
                        return Ok($ty::$variant);
                    }
                )+
                log::debug!("rejecting {} flag code {}", $name, code);
                Err(Error::InvalidFlag { name: $name, code })
            }
        }
    };
}

impl_try_from_code!(Layout, "layout", [RowMajor, ColMajor]);
impl_try_from_code!(Transpose, "trans", [NoTrans, Trans, ConjTrans]);
impl_try_from_code!(Uplo, "uplo", [Upper, Lower]);
impl_try_from_code!(Diag, "diag", [NonUnit, Unit]);
