//! The contextual extractor: one search type, one base extractor, and an
//! ordered list of context strategies.
//!
//! A [`ContextualExtractor`] is built once and reused for every focus in every
//! document. It keeps no mutable state, so concurrent calls on the same
//! extractor and the same read-only document are safe;
//! [`ContextualExtractor::extract_all`] uses that to fan out over many foci.
//!
//! # Examples
//!
//! ```
//! use spanfeat::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use spanfeat::context::Context;
//! use spanfeat::contextual::ContextualExtractor;
//! use spanfeat::document::Document;
//! use spanfeat::extractor::BaseExtractor;
//! use spanfeat::extractor::text::CoveredTextExtractor;
//! use spanfeat::feature::Feature;
//!
//! let doc = Document::builder("The man walked to the store .")
//!     .tokenize(&WhitespaceTokenizer::new())
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let extractor = ContextualExtractor::new(
//!     "token",
//!     BaseExtractor::unnamed(CoveredTextExtractor::new()),
//!     vec![Context::preceding(2)],
//! )
//! .unwrap();
//!
//! let walked = &doc.annotations("token")[2];
//! let features = extractor.extract(&doc, walked).unwrap();
//! assert_eq!(
//!     features,
//!     vec![
//!         Feature::new("Preceding_0_2_1", "The"),
//!         Feature::new("Preceding_0_2_0", "man"),
//!     ]
//! );
//! ```

use log::{debug, warn};
use rayon::prelude::*;

use crate::bounds::Bounds;
use crate::context::Context;
use crate::context::evaluate::{ContextFeature, Scope};
use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::{Result, SpanfeatError};
use crate::extractor::BaseExtractor;
use crate::feature::Feature;
use crate::span::Span;

/// Annotation type given to the synthetic focus built by
/// [`ContextualExtractor::extract_between`].
pub const GAP_TYPE: &str = "gap";

/// Extracts features from annotations around a focus.
#[derive(Clone, Debug)]
pub struct ContextualExtractor {
    annotation_type: String,
    extractor: BaseExtractor,
    feature_name: Option<String>,
    contexts: Vec<Context>,
}

impl ContextualExtractor {
    /// Create a new contextual extractor.
    ///
    /// `annotation_type` is the type of the annotations the contexts search
    /// for. At least one context is required.
    pub fn new<S: Into<String>>(
        annotation_type: S,
        extractor: BaseExtractor,
        contexts: Vec<Context>,
    ) -> Result<Self> {
        let annotation_type = annotation_type.into();
        if contexts.is_empty() {
            return Err(SpanfeatError::invalid_config(
                "a contextual extractor requires at least one context",
            ));
        }
        contexts.iter().try_for_each(Context::validate)?;

        let feature_name = extractor.feature_name().map(str::to_string);
        debug!(
            "contextual extractor over '{}' with contexts [{}]",
            annotation_type,
            contexts
                .iter()
                .map(Context::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ContextualExtractor {
            annotation_type,
            extractor,
            feature_name,
            contexts,
        })
    }

    /// The annotation type the contexts search for.
    pub fn annotation_type(&self) -> &str {
        &self.annotation_type
    }

    /// The logical name of the base extractor, if it has one.
    pub fn feature_name(&self) -> Option<&str> {
        self.feature_name.as_deref()
    }

    pub fn extractor(&self) -> &BaseExtractor {
        &self.extractor
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    /// Extract features around the focus, with every annotation visible.
    pub fn extract(&self, document: &Document, focus: &Annotation) -> Result<Vec<Feature>> {
        self.extract_with_bounds(document, focus, Bounds::Unrestricted)
    }

    /// Extract features around the focus, seeing only annotations inside the
    /// bounds annotation.
    pub fn extract_within(
        &self,
        document: &Document,
        focus: &Annotation,
        bounds: &Annotation,
    ) -> Result<Vec<Feature>> {
        if !bounds.span().contains(focus.span()) {
            warn!(
                "bounds {} do not contain the focus {}",
                bounds.span(),
                focus.span()
            );
        }
        self.extract_with_bounds(document, focus, Bounds::within(*bounds.span()))
    }

    /// Extract features over the gap between two annotations.
    ///
    /// The focus is a synthetic annotation spanning `[first.end, second.begin)`.
    /// A zero-width gap is valid; `first` ending after `second` begins is an
    /// error.
    pub fn extract_between(
        &self,
        document: &Document,
        first: &Annotation,
        second: &Annotation,
    ) -> Result<Vec<Feature>> {
        if first.end() > second.begin() {
            return Err(SpanfeatError::invalid_argument(format!(
                "cannot extract between {} and {}: the first annotation must end before the second begins",
                first.span(),
                second.span()
            )));
        }
        let gap = Annotation::new(GAP_TYPE, Span::new(first.end(), second.begin())?);
        self.extract_with_bounds(document, &gap, Bounds::Unrestricted)
    }

    /// Extract features for many foci in parallel.
    ///
    /// Results are returned in the order of `foci`. The first failing focus
    /// fails the whole batch.
    pub fn extract_all(
        &self,
        document: &Document,
        foci: &[Annotation],
    ) -> Result<Vec<Vec<Feature>>> {
        foci.par_iter()
            .map(|focus| self.extract(document, focus))
            .collect()
    }

    /// Apply every context under the given bounds, concatenating their
    /// features in configured order.
    pub fn extract_with_bounds(
        &self,
        document: &Document,
        focus: &Annotation,
        bounds: Bounds,
    ) -> Result<Vec<Feature>> {
        let scope = Scope {
            document,
            focus,
            bounds,
            kind: &self.annotation_type,
            extractor: &self.extractor,
            feature_name: self.feature_name.as_deref(),
        };

        let mut features = Vec::new();
        for context in &self.contexts {
            features.extend(
                context
                    .evaluate(&scope)?
                    .into_iter()
                    .map(ContextFeature::into_feature),
            );
        }
        Ok(features)
    }
}
