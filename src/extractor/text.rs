//! Extractors reading an annotation's covered text.

use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::Result;
use crate::extractor::{Extractor, NamedExtractor};
use crate::feature::Feature;

/// Extracts the covered text as one unnamed feature.
#[derive(Clone, Debug, Default)]
pub struct CoveredTextExtractor;

impl CoveredTextExtractor {
    /// Create a new covered text extractor.
    pub fn new() -> Self {
        CoveredTextExtractor
    }
}

impl Extractor for CoveredTextExtractor {
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        Ok(vec![Feature::unnamed(document.covered_text(annotation))])
    }
}

/// Extracts the lowercased covered text as a feature named `lower`.
#[derive(Clone, Debug)]
pub struct LowercaseTextExtractor {
    name: String,
}

impl LowercaseTextExtractor {
    /// Create a new lowercase text extractor.
    pub fn new() -> Self {
        LowercaseTextExtractor {
            name: "lower".to_string(),
        }
    }

    /// Set a custom feature name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for LowercaseTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for LowercaseTextExtractor {
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        Ok(vec![Feature::new(
            self.name.clone(),
            document.covered_text(annotation).to_lowercase(),
        )])
    }
}

impl NamedExtractor for LowercaseTextExtractor {
    fn feature_name(&self) -> &str {
        &self.name
    }
}
