//! Base extractors: the atomic "one annotation in, features out" step.
//!
//! Context strategies locate annotations; a base extractor turns each located
//! annotation into zero or more [`Feature`]s. Extractors are caller-supplied
//! capabilities, so the crate only fixes their contract:
//!
//! - [`Extractor`] - deterministic, read-only extraction
//! - [`NamedExtractor`] - an extractor that also exposes one logical feature
//!   name, used by aggregating strategies to build composite names
//!
//! Whether an extractor is named is decided once, when it is wrapped in a
//! [`BaseExtractor`], rather than checked on every call.
//!
//! # Available Extractors
//!
//! - [`text::CoveredTextExtractor`] - The annotation's covered text
//! - [`text::LowercaseTextExtractor`] - The covered text, lowercased
//! - [`attribute::AttributeExtractor`] - One annotation attribute
//! - [`combined::CombinedExtractor`] - Several extractors concatenated
//! - [`function::FnExtractor`] - Any closure
//! - [`function::NamedFnExtractor`] - Any closure with a logical name
//!
//! # Examples
//!
//! ```
//! use spanfeat::extractor::BaseExtractor;
//! use spanfeat::extractor::attribute::AttributeExtractor;
//! use spanfeat::extractor::text::CoveredTextExtractor;
//!
//! let text = BaseExtractor::unnamed(CoveredTextExtractor::new());
//! assert_eq!(text.feature_name(), None);
//!
//! let pos = BaseExtractor::named(AttributeExtractor::new("pos"));
//! assert_eq!(pos.feature_name(), Some("pos"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::Result;
use crate::feature::Feature;

pub mod attribute;
pub mod combined;
pub mod function;
pub mod text;

/// Trait for extracting features from a single annotation.
///
/// Implementations must be deterministic and must not mutate the document or
/// the annotation. The trait requires `Send + Sync` so that one extractor can
/// serve concurrent extraction calls.
pub trait Extractor: Send + Sync {
    /// Extract features from the annotation.
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>>;
}

/// An extractor whose features share one logical name.
pub trait NamedExtractor: Extractor {
    /// The logical feature name.
    fn feature_name(&self) -> &str;
}

/// A base extractor with its naming capability resolved.
#[derive(Clone)]
pub enum BaseExtractor {
    /// An extractor without a logical feature name
    Unnamed(Arc<dyn Extractor>),
    /// An extractor exposing a logical feature name
    Named(Arc<dyn NamedExtractor>),
}

impl BaseExtractor {
    /// Wrap an extractor without a logical name.
    pub fn unnamed<E: Extractor + 'static>(extractor: E) -> Self {
        BaseExtractor::Unnamed(Arc::new(extractor))
    }

    /// Wrap an extractor that exposes a logical name.
    pub fn named<E: NamedExtractor + 'static>(extractor: E) -> Self {
        BaseExtractor::Named(Arc::new(extractor))
    }

    /// The logical feature name, if the extractor has one.
    pub fn feature_name(&self) -> Option<&str> {
        match self {
            BaseExtractor::Unnamed(_) => None,
            BaseExtractor::Named(extractor) => Some(extractor.feature_name()),
        }
    }

    /// Extract features from the annotation.
    pub fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        match self {
            BaseExtractor::Unnamed(extractor) => extractor.extract(document, annotation),
            BaseExtractor::Named(extractor) => extractor.extract(document, annotation),
        }
    }
}

impl Extractor for BaseExtractor {
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        BaseExtractor::extract(self, document, annotation)
    }
}

impl fmt::Debug for BaseExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseExtractor::Unnamed(_) => f.write_str("BaseExtractor::Unnamed"),
            BaseExtractor::Named(extractor) => {
                write!(f, "BaseExtractor::Named({:?})", extractor.feature_name())
            }
        }
    }
}
