//! # spanfeat
//!
//! Contextual feature extraction over annotated spans of text.
//!
//! Given a focus annotation inside a document and a declarative description
//! of where to look around it, spanfeat produces a flat, deterministic list of
//! named features for machine-learned classifiers.
//!
//! ## Features
//!
//! - Positional contexts: preceding, following, covered, first/last covered
//! - Out-of-bounds placeholders when a context runs off the document or
//!   outside a bounding span
//! - Aggregating contexts: bag, count, n-gram, sliding n-grams
//! - Pluggable base extractors with resolved naming
//! - JSON configuration and parallel batch extraction

pub mod analysis;
pub mod bounds;
pub mod cli;
pub mod config;
pub mod context;
pub mod contextual;
pub mod document;
pub mod error;
pub mod extractor;
pub mod feature;
pub mod span;

pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::context::{Context, Window};
    pub use crate::contextual::ContextualExtractor;
    pub use crate::document::{Annotation, Document, SpanIndex};
    pub use crate::error::{Result, SpanfeatError};
    pub use crate::extractor::{BaseExtractor, Extractor, NamedExtractor};
    pub use crate::feature::{Feature, FeatureValue};
    pub use crate::span::Span;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
