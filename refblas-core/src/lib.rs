//! # refblas-core
//!
//! Shared building blocks for the refblas kernels.
//!
//! This crate provides:
//! - **CBLAS flag types**: `Layout`, `Transpose`, `Uplo`, `Diag` with their
//!   integer codes.
//! - **Errors**: the closed set of precondition failures every kernel reports.
//! - **Stride walking**: offsets of a strided vector, forward or backward.
//! - **Storage adapters**: dense, band and packed row layouts behind one
//!   `RowStorage` trait.

pub mod error;
pub mod layout;
pub mod storage;
pub mod stride;

pub use error::{Error, ErrorKind, Result};
pub use layout::{Diag, Layout, Transpose, Uplo};
pub use storage::{Band, Dense, DenseTriangle, Packed, RowSpan, RowStorage};
pub use stride::StrideWalker;
