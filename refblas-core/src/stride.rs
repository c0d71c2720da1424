//! Strided vector traversal.
//!
//! A vector of logical length `L` with stride `s` occupies the positions
//! `origin + i*s` for `i in 0..L`. A negative stride starts at the far end,
//! `origin = (L-1)*|s|`, so both signs cover the same buffer range and
//! logical element 0 of a backward walk is the last stored slot.
//!
//! A walk whose extent does not fit in `isize` cannot address any real
//! buffer and is rejected when the walker is built.

use crate::error::{buffer_len, Error, Result};

/// Offset generator for one strided vector operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideWalker {
    origin: usize,
    inc: isize,
    len: usize,
}

impl StrideWalker {
    /// Builds the walker for `len` logical elements spaced `inc` apart.
    ///
    /// A zero stride, or one whose walk overflows the address space, is
    /// rejected with [`Error::InvalidStride`].
    pub fn new(name: &'static str, len: usize, inc: isize) -> Result<Self> {
        if inc == 0 {
            log::debug!("rejecting zero stride {}", name);
            return Err(Error::InvalidStride { name });
        }
        let extent = match Self::required(len, inc) {
            Some(span) if span <= isize::MAX as usize => span.saturating_sub(1),
            _ => {
                log::debug!("rejecting stride {} = {} over {} elements", name, inc, len);
                return Err(Error::InvalidStride { name });
            }
        };
        let origin = if inc > 0 { 0 } else { extent };
        Ok(Self { origin, inc, len })
    }

    /// Like [`StrideWalker::new`], additionally checking that `buf` can hold
    /// every position the walk touches.
    ///
    /// The buffer is checked first, so an oversized but non-zero stride
    /// reports [`Error::BufferTooShort`].
    pub fn over(name: &'static str, len: usize, inc: isize, buf: usize) -> Result<Self> {
        if inc != 0 {
            buffer_len(name, buf, Self::required(len, inc).unwrap_or(usize::MAX))?;
        }
        Self::new(name, len, inc)
    }

    /// Buffer length a walk needs, `None` if it overflows `usize`.
    fn required(len: usize, inc: isize) -> Option<usize> {
        match len {
            0 => Some(0),
            _ => (len - 1).checked_mul(inc.unsigned_abs())?.checked_add(1),
        }
    }

    /// Buffer offset of logical element `i`.
    #[inline(always)]
    pub fn at(&self, i: usize) -> usize {
        debug_assert!(i < self.len);
        (self.origin as isize + i as isize * self.inc) as usize
    }

    /// The signed stride.
    #[inline(always)]
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Number of logical elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest buffer length that holds the whole walk.
    pub fn span(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.len - 1) * self.inc.unsigned_abs() + 1
        }
    }

    /// Offsets of logical elements `0..len` in order.
    pub fn offsets(self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
        (0..self.len).map(move |i| self.at(i))
    }
}
