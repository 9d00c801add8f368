//! Restrictions on which candidate annotations a context may see.

use crate::span::Span;

/// A pure predicate over candidate spans.
///
/// Candidates rejected by the bounds are treated exactly like candidates that
/// do not exist: positional contexts emit out-of-bounds placeholders for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Bounds {
    /// Every candidate is visible
    #[default]
    Unrestricted,
    /// Only candidates lying entirely inside the span are visible
    Within(Span),
}

impl Bounds {
    pub fn unrestricted() -> Self {
        Bounds::Unrestricted
    }

    pub fn within(span: Span) -> Self {
        Bounds::Within(span)
    }

    /// Whether a candidate with this span is visible.
    pub fn contains(&self, candidate: &Span) -> bool {
        match self {
            Bounds::Unrestricted => true,
            Bounds::Within(span) => span.contains(candidate),
        }
    }
}
