//! Error types for refblas.
//!
//! Every precondition is checked at call entry; a rejected call performs no
//! arithmetic and leaves all buffers untouched.

use thiserror::Error;

/// Result type alias using refblas's Error
pub type Result<T> = std::result::Result<T, Error>;

/// The closed set of failure kinds a kernel can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDimension,
    InvalidFlag,
    InvalidLeadingDimension,
    InvalidStride,
    BufferTooShort,
}

/// Precondition violations detected before a kernel touches its operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row, column or bandwidth count is negative.
    #[error("invalid dimension: {name} = {value} must not be negative")]
    InvalidDimension {
        /// Parameter name (`m`, `n`, `kl`, ...)
        name: &'static str,
        /// Value as supplied by the caller
        value: i64,
    },

    /// A layout, transpose, uplo or diag code is not recognized.
    #[error("invalid {name} flag code {code}")]
    InvalidFlag {
        /// Flag name
        name: &'static str,
        /// Code as supplied by the caller
        code: i32,
    },

    /// The leading dimension (or packed buffer length) cannot hold the
    /// declared rows or bands.
    #[error("invalid leading dimension: {name} = {value}, need at least {required}")]
    InvalidLeadingDimension {
        /// `lda`, or `ap` for packed storage
        name: &'static str,
        /// Value as supplied by the caller
        value: usize,
        /// Smallest acceptable value
        required: usize,
    },

    /// A vector stride is zero, or its walk overflows the address space.
    #[error("invalid stride: {name} must be non-zero")]
    InvalidStride {
        /// `incx` or `incy`
        name: &'static str,
    },

    /// A buffer is shorter than the elements its descriptor addresses.
    #[error("buffer {name} too short: length {len}, need at least {required}")]
    BufferTooShort {
        /// Operand name
        name: &'static str,
        /// Actual buffer length
        len: usize,
        /// Elements addressed by the descriptor
        required: usize,
    },
}

impl Error {
    /// The failure kind, without the offending parameter's details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            Error::InvalidFlag { .. } => ErrorKind::InvalidFlag,
            Error::InvalidLeadingDimension { .. } => ErrorKind::InvalidLeadingDimension,
            Error::InvalidStride { .. } => ErrorKind::InvalidStride,
            Error::BufferTooShort { .. } => ErrorKind::BufferTooShort,
        }
    }
}

/// Converts a raw signed count into a `usize`, rejecting negatives.
pub fn dimension(name: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        log::debug!("rejecting negative dimension {} = {}", name, value);
        Error::InvalidDimension {
            name,
            value: value as i64,
        }
    })
}

/// Rejects a leading dimension smaller than `required`.
pub fn leading_dimension(name: &'static str, value: usize, required: usize) -> Result<()> {
    if value < required {
        log::debug!("rejecting {} = {} (need {})", name, value, required);
        return Err(Error::InvalidLeadingDimension {
            name,
            value,
            required,
        });
    }
    Ok(())
}

/// Rejects a buffer shorter than `required` elements.
pub fn buffer_len(name: &'static str, len: usize, required: usize) -> Result<()> {
    if len < required {
        log::debug!("rejecting {}: length {} < {}", name, len, required);
        return Err(Error::BufferTooShort {
            name,
            len,
            required,
        });
    }
    Ok(())
}
