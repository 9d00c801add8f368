//! Half-open offset ranges into a document's text.
//!
//! A [`Span`] is immutable once created and always satisfies `begin <= end`.
//! Spans order by `(begin, end)`, which is the order used for "preceding",
//! "following" and "covered" queries throughout the crate.
//!
//! # Examples
//!
//! ```
//! use spanfeat::span::Span;
//!
//! let sentence = Span::new(0, 20).unwrap();
//! let word = Span::new(4, 7).unwrap();
//!
//! assert!(sentence.contains(&word));
//! assert!(Span::new(7, 3).is_err());
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SpanfeatError};

/// A half-open `[begin, end)` offset range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    begin: usize,
    end: usize,
}

impl Span {
    /// Create a new span, rejecting `begin > end`.
    pub fn new(begin: usize, end: usize) -> Result<Self> {
        if begin > end {
            return Err(SpanfeatError::invalid_argument(format!(
                "span begin {begin} is greater than end {end}"
            )));
        }
        Ok(Span { begin, end })
    }

    /// Create an empty span at the given offset.
    pub fn empty(offset: usize) -> Self {
        Span {
            begin: offset,
            end: offset,
        }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Whether this span ends at or before `other` begins.
    pub fn precedes(&self, other: &Span) -> bool {
        self.end <= other.begin
    }

    /// Whether this span begins at or after `other` ends.
    pub fn follows(&self, other: &Span) -> bool {
        self.begin >= other.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.begin < other.end && other.begin < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
