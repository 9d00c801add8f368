//! Extractor reading a single annotation attribute.

use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::{Result, SpanfeatError};
use crate::extractor::{Extractor, NamedExtractor};
use crate::feature::Feature;

/// Extracts one attribute, named after the attribute.
///
/// An annotation without the attribute yields no features, unless the
/// extractor is strict, in which case it is an extraction error.
#[derive(Clone, Debug)]
pub struct AttributeExtractor {
    attribute: String,
    strict: bool,
}

impl AttributeExtractor {
    /// Create a new attribute extractor.
    pub fn new<S: Into<String>>(attribute: S) -> Self {
        AttributeExtractor {
            attribute: attribute.into(),
            strict: false,
        }
    }

    /// Fail instead of skipping annotations that lack the attribute.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Extractor for AttributeExtractor {
    fn extract(&self, _document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        match annotation.attribute(&self.attribute) {
            Some(value) => Ok(vec![Feature::new(self.attribute.clone(), value.clone())]),
            None if self.strict => Err(SpanfeatError::extraction(format!(
                "{} annotation at {} has no attribute '{}'",
                annotation.kind(),
                annotation.span(),
                self.attribute
            ))),
            None => Ok(Vec::new()),
        }
    }
}

impl NamedExtractor for AttributeExtractor {
    fn feature_name(&self) -> &str {
        &self.attribute
    }
}
