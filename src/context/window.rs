//! Half-open windows of annotation positions.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SpanfeatError};

/// A half-open `[begin, end)` range of positions, counted in annotations
/// outward from a context's anchor.
///
/// Position 0 is the annotation immediately adjacent to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    begin: usize,
    end: usize,
}

impl Window {
    /// Largest accepted window end. Every position of a window is scanned and
    /// may emit a placeholder, so the end bounds the work of one extraction.
    pub const MAX_END: usize = 4096;

    /// Create a new window, rejecting `begin > end` and ends above
    /// [`Window::MAX_END`].
    pub fn new(begin: usize, end: usize) -> Result<Self> {
        let window = Window { begin, end };
        window.validate()?;
        Ok(window)
    }

    /// The window `[0, end)`.
    ///
    /// Not validated here; a context holding it is checked when a
    /// [`ContextualExtractor`](crate::contextual::ContextualExtractor) is built.
    pub fn upto(end: usize) -> Self {
        Window { begin: 0, end }
    }

    /// Check the window bounds.
    pub fn validate(&self) -> Result<()> {
        if self.begin > self.end {
            return Err(SpanfeatError::invalid_config(format!(
                "window begin {} is greater than end {}",
                self.begin, self.end
            )));
        }
        if self.end > Self::MAX_END {
            return Err(SpanfeatError::invalid_config(format!(
                "window end {} exceeds the maximum of {}",
                self.end,
                Self::MAX_END
            )));
        }
        Ok(())
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
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.begin, self.end)
    }
}
