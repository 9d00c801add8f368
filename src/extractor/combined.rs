//! Extractor concatenating the output of several extractors.

use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::Result;
use crate::extractor::{BaseExtractor, Extractor};
use crate::feature::Feature;

/// Runs each extractor in order and concatenates their features.
///
/// The combination has no single logical name, so it is always unnamed; the
/// individual features keep the names their extractors gave them.
#[derive(Clone, Debug, Default)]
pub struct CombinedExtractor {
    extractors: Vec<BaseExtractor>,
}

impl CombinedExtractor {
    /// Create a new combined extractor.
    pub fn new(extractors: Vec<BaseExtractor>) -> Self {
        CombinedExtractor { extractors }
    }

    /// Add an extractor.
    pub fn add_extractor(mut self, extractor: BaseExtractor) -> Self {
        self.extractors.push(extractor);
        self
    }

    pub fn extractors(&self) -> &[BaseExtractor] {
        &self.extractors
    }
}

impl Extractor for CombinedExtractor {
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        let mut features = Vec::new();
        for extractor in &self.extractors {
            features.extend(extractor.extract(document, annotation)?);
        }
        Ok(features)
    }
}
