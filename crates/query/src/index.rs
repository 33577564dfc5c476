//! Indices and ranges that may count from the end of a sequence.

use core::fmt;
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use valuekit_core::{QueryError, QueryResult};

/// A position in a sequence, counted from the front or from the back.
///
/// `FromEnd(1)` is the last element; `FromEnd(0)` is one past it, which is a
/// valid range bound but never a valid element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Index {
    FromStart(usize),
    FromEnd(usize),
}

impl Index {
    pub const START: Index = Index::FromStart(0);
    pub const END: Index = Index::FromEnd(0);

    pub fn from_start(offset: usize) -> Self {
        Self::FromStart(offset)
    }

    pub fn from_end(offset: usize) -> Self {
        Self::FromEnd(offset)
    }

    /// Offset from the front for a sequence of `len` elements.
    ///
    /// Accepts `0..=len`, so the result is usable as a range bound.
    pub fn offset(self, len: usize) -> QueryResult<usize> {
        let resolved = match self {
            Index::FromStart(i) => Some(i),
            Index::FromEnd(n) => len.checked_sub(n),
        };
        match resolved {
            Some(i) if i <= len => Ok(i),
            _ => Err(QueryError::out_of_range(self, len)),
        }
    }
}

impl From<usize> for Index {
    fn from(offset: usize) -> Self {
        Index::FromStart(offset)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::FromStart(i) => write!(f, "{i}"),
            Index::FromEnd(n) => write!(f, "^{n}"),
        }
    }
}

/// Half-open range whose bounds are [`Index`]es.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub start: Index,
    pub end: Index,
}

impl IndexRange {
    pub fn new(start: Index, end: Index) -> Self {
        Self { start, end }
    }

    /// Concrete `start..end` offsets for a sequence of `len` elements.
    pub fn offsets(self, len: usize) -> QueryResult<Range<usize>> {
        let start = self.start.offset(len)?;
        let end = self.end.offset(len)?;
        if start > end {
            return Err(QueryError::out_of_range(self, len));
        }
        Ok(start..end)
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Range<Index>> for IndexRange {
    fn from(range: Range<Index>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<RangeFrom<Index>> for IndexRange {
    fn from(range: RangeFrom<Index>) -> Self {
        Self::new(range.start, Index::END)
    }
}

impl From<RangeTo<Index>> for IndexRange {
    fn from(range: RangeTo<Index>) -> Self {
        Self::new(Index::START, range.end)
    }
}

impl From<RangeFull> for IndexRange {
    fn from(_: RangeFull) -> Self {
        Self::new(Index::START, Index::END)
    }
}

/// Element at `index`.
pub fn element_at<T>(items: &[T], index: Index) -> QueryResult<&T> {
    let offset = index.offset(items.len())?;
    items.get(offset).ok_or_else(|| {
        tracing::debug!(%index, len = items.len(), "element index past the last element");
        QueryError::out_of_range(index, items.len())
    })
}

/// Element `n` positions from the end; `1` is the last element.
pub fn element_from_end<T>(items: &[T], n: usize) -> QueryResult<&T> {
    element_at(items, Index::FromEnd(n))
}

/// Contiguous sub-slice described by `range`.
pub fn slice<T>(items: &[T], range: impl Into<IndexRange>) -> QueryResult<&[T]> {
    let range = range.into();
    let offsets = range.offsets(items.len()).inspect_err(|_| {
        tracing::debug!(%range, len = items.len(), "range does not fit the sequence");
    })?;
    Ok(&items[offsets])
}

/// The last `n` elements.
pub fn slice_from_end<T>(items: &[T], n: usize) -> QueryResult<&[T]> {
    slice(items, Index::FromEnd(n)..)
}
