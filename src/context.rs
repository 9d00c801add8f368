//! Context strategies: where to look around a focus annotation.
//!
//! A [`Context`] is immutable configuration. It knows how to locate candidate
//! annotations relative to a focus (before it, after it, inside it) and how to
//! name the features extracted from them. The same context is reapplied to
//! every focus; it holds no per-document state.
//!
//! # Strategies
//!
//! Positional strategies select annotations of the search type:
//!
//! - `Focus` - the focus annotation itself
//! - `Preceding(w)` / `Following(w)` - annotations before/after the focus
//! - `Covered` - every annotation inside the focus
//! - `FirstCovered(w)` / `LastCovered(w)` - inside the focus, counted from its
//!   first/last annotation
//!
//! Windowed strategies emit one `OOB<k>` placeholder for every position that
//! has no visible annotation, so that "nothing there" is itself a feature.
//!
//! Aggregating strategies re-interpret the output of their children:
//!
//! - `Bag` - drops positions, keeping only which values occurred
//! - `Count` - counts occurrences of each value
//! - `Ngram` - joins every value into one feature
//! - `Ngrams` - joins every sliding window of `n` values
//!
//! # Feature Names
//!
//! ```text
//! Preceding_0_3_2_pos     strategy name, position, extractor name
//! Focus                   strategy name (unnamed extractor)
//! Bag_Preceding_0_3_pos   wrapper name, child names, extractor name
//! ```
//!
//! # Examples
//!
//! ```
//! use spanfeat::context::Context;
//!
//! let context = Context::ngram(vec![Context::preceding(2), Context::following(2)]).unwrap();
//! assert_eq!(context.name(), "Ngram_Preceding_0_2_Following_0_2");
//!
//! assert!(Context::preceding_range(3, 1).is_err());
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{Result, SpanfeatError};
use crate::feature::Feature;

pub(crate) mod evaluate;
pub mod window;

pub use window::Window;

/// A context strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Context {
    /// The focus annotation itself
    Focus,
    /// Annotations before the focus, nearest first
    Preceding(Window),
    /// Annotations after the focus, nearest first
    Following(Window),
    /// Every annotation inside the focus
    Covered,
    /// Annotations inside the focus, counted from the first
    FirstCovered(Window),
    /// Annotations inside the focus, counted from the last
    LastCovered(Window),
    /// Position-free union of the children's features
    Bag(Vec<Context>),
    /// Occurrence counts of the children's feature values
    Count(Vec<Context>),
    /// All of the children's values joined into one feature
    Ngram(Vec<Context>),
    /// Every run of `n` consecutive values of the children joined into a feature
    Ngrams {
        n: NonZeroUsize,
        children: Vec<Context>,
    },
}

impl Context {
    pub fn focus() -> Self {
        Context::Focus
    }

    pub fn covered() -> Self {
        Context::Covered
    }

    /// The `end` nearest preceding annotations.
    pub fn preceding(end: usize) -> Self {
        Context::Preceding(Window::upto(end))
    }

    /// Preceding annotations at positions `[begin, end)`.
    pub fn preceding_range(begin: usize, end: usize) -> Result<Self> {
        Ok(Context::Preceding(Window::new(begin, end)?))
    }

    /// The `end` nearest following annotations.
    pub fn following(end: usize) -> Self {
        Context::Following(Window::upto(end))
    }

    /// Following annotations at positions `[begin, end)`.
    pub fn following_range(begin: usize, end: usize) -> Result<Self> {
        Ok(Context::Following(Window::new(begin, end)?))
    }

    /// The first `end` covered annotations.
    pub fn first_covered(end: usize) -> Self {
        Context::FirstCovered(Window::upto(end))
    }

    /// Covered annotations at positions `[begin, end)` from the first.
    pub fn first_covered_range(begin: usize, end: usize) -> Result<Self> {
        Ok(Context::FirstCovered(Window::new(begin, end)?))
    }

    /// The last `end` covered annotations.
    pub fn last_covered(end: usize) -> Self {
        Context::LastCovered(Window::upto(end))
    }

    /// Covered annotations at positions `[begin, end)` from the last.
    pub fn last_covered_range(begin: usize, end: usize) -> Result<Self> {
        Ok(Context::LastCovered(Window::new(begin, end)?))
    }

    /// Wrap children in a `Bag`.
    pub fn bag(children: Vec<Context>) -> Result<Self> {
        Ok(Context::Bag(Self::check_children("Bag", children)?))
    }

    /// Wrap children in a `Count`.
    pub fn count(children: Vec<Context>) -> Result<Self> {
        Ok(Context::Count(Self::check_children("Count", children)?))
    }

    /// Wrap children in an `Ngram`.
    pub fn ngram(children: Vec<Context>) -> Result<Self> {
        Ok(Context::Ngram(Self::check_children("Ngram", children)?))
    }

    /// Wrap children in `Ngrams` of size `n`.
    pub fn ngrams(n: usize, children: Vec<Context>) -> Result<Self> {
        let n = NonZeroUsize::new(n)
            .ok_or_else(|| SpanfeatError::invalid_config("Ngrams size must be at least 1"))?;
        Ok(Context::Ngrams {
            n,
            children: Self::check_children("Ngrams", children)?,
        })
    }

    fn check_children(wrapper: &str, children: Vec<Context>) -> Result<Vec<Context>> {
        if children.is_empty() {
            return Err(SpanfeatError::invalid_config(format!(
                "{wrapper} requires at least one child context"
            )));
        }
        Ok(children)
    }

    /// The display name used as the prefix of every feature this context
    /// produces.
    pub fn name(&self) -> String {
        match self {
            Context::Focus => "Focus".to_string(),
            Context::Covered => "Covered".to_string(),
            Context::Preceding(window) => format!("Preceding_{window}"),
            Context::Following(window) => format!("Following_{window}"),
            Context::FirstCovered(window) => format!("FirstCovered_{window}"),
            Context::LastCovered(window) => format!("LastCovered_{window}"),
            Context::Bag(children) => Self::wrapper_name("Bag", None, children),
            Context::Count(children) => Self::wrapper_name("Count", None, children),
            Context::Ngram(children) => Self::wrapper_name("Ngram", None, children),
            Context::Ngrams { n, children } => {
                Self::wrapper_name("Ngrams", Some(&n.to_string()), children)
            }
        }
    }

    fn wrapper_name(wrapper: &str, size: Option<&str>, children: &[Context]) -> String {
        let child_names: Vec<String> = children.iter().map(Context::name).collect();
        Feature::create_name(
            [Some(wrapper), size]
                .into_iter()
                .chain(child_names.iter().map(|name| Some(name.as_str()))),
        )
    }

    /// Check every window in this context and its children.
    ///
    /// The `*_range` constructors validate eagerly; this also
    /// covers windows built with the infallible `preceding(end)` family.
    pub fn validate(&self) -> Result<()> {
        match self {
            Context::Focus | Context::Covered => Ok(()),
            Context::Preceding(window)
            | Context::Following(window)
            | Context::FirstCovered(window)
            | Context::LastCovered(window) => window.validate(),
            Context::Bag(children)
            | Context::Count(children)
            | Context::Ngram(children)
            | Context::Ngrams { children, .. } => {
                children.iter().try_for_each(Context::validate)
            }
        }
    }

    /// Whether this context wraps other contexts.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Context::Bag(_) | Context::Count(_) | Context::Ngram(_) | Context::Ngrams { .. }
        )
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
