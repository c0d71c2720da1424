// BLAS functions match CBLAS signatures, so many parameters are inherent to the API.
// Numeric kernels use index loops on packed arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # refblas
//!
//! Reference double-precision BLAS Level-2 kernels in pure Rust.
//!
//! No FFI, no SIMD, no blocking. Each routine is the straightforward
//! loop nest over one storage scheme, written to be the correctness
//! baseline that tuned implementations are compared against.
//!
//! ## Routines
//!
//! - **General**: `dgemv`, `dgbmv` (banded), `dger`
//! - **Symmetric**: `dsymv`, `dsbmv` (banded), `dspmv` (packed),
//!   `dsyr`, `dspr`, `dsyr2`, `dspr2`
//! - **Triangular**: `dtrmv`, `dtbmv`, `dtpmv`, `dtrsv`, `dtbsv`, `dtpsv`
//!
//! ## Memory Layout
//!
//! Row-major storage is native. Column-major is accepted via the CBLAS
//! `Layout` argument and resolved at entry. The [`cblas`] module exposes
//! the same routines with C-style `i32` arguments and flag codes.
//!
//! ```
//! use refblas::level2;
//! use refblas::{Layout, Transpose};
//!
//! // y := 2 * A * x + y
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let x = [1.0, 0.0, -1.0];
//! let mut y = [1.0, 1.0];
//! level2::dgemv(Layout::RowMajor, Transpose::NoTrans, 2, 3,
//!               2.0, &a, 3, &x, 1, 1.0, &mut y, 1).unwrap();
//! assert_eq!(y, [-3.0, -3.0]);
//! ```

pub mod cblas;
pub mod level1;
pub mod level2;

// Re-export flag and error types for convenience
pub use refblas_core::{Diag, Error, ErrorKind, Layout, Result, Transpose, Uplo};
