//! Extractors backed by closures.

use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::Result;
use crate::extractor::{Extractor, NamedExtractor};
use crate::feature::Feature;

/// An unnamed extractor backed by a closure.
///
/// # Examples
///
/// ```
/// use spanfeat::document::{Annotation, Document};
/// use spanfeat::extractor::BaseExtractor;
/// use spanfeat::extractor::function::FnExtractor;
/// use spanfeat::feature::Feature;
///
/// let length = FnExtractor::named("length", |doc: &Document, ann: &Annotation| {
///     Ok(vec![Feature::new("length", doc.covered_text(ann).chars().count())])
/// });
/// let base = BaseExtractor::named(length);
/// assert_eq!(base.feature_name(), Some("length"));
/// ```
///
/// Only closures given a name can be wrapped as named:
///
/// ```compile_fail
/// use spanfeat::document::{Annotation, Document};
/// use spanfeat::extractor::BaseExtractor;
/// use spanfeat::extractor::function::FnExtractor;
///
/// let anonymous = FnExtractor::new(|_: &Document, _: &Annotation| Ok(Vec::new()));
/// BaseExtractor::named(anonymous);
/// ```
pub struct FnExtractor<F> {
    function: F,
}

impl<F> FnExtractor<F>
where
    F: Fn(&Document, &Annotation) -> Result<Vec<Feature>> + Send + Sync,
{
    /// Create an unnamed closure extractor.
    pub fn new(function: F) -> Self {
        FnExtractor { function }
    }

    /// Create a closure extractor with a logical name.
    pub fn named<S: Into<String>>(name: S, function: F) -> NamedFnExtractor<F> {
        NamedFnExtractor {
            name: name.into(),
            function,
        }
    }
}

impl<F> Extractor for FnExtractor<F>
where
    F: Fn(&Document, &Annotation) -> Result<Vec<Feature>> + Send + Sync,
{
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        (self.function)(document, annotation)
    }
}

/// A closure extractor carrying a logical feature name.
///
/// Built with [`FnExtractor::named`].
pub struct NamedFnExtractor<F> {
    name: String,
    function: F,
}

impl<F> Extractor for NamedFnExtractor<F>
where
    F: Fn(&Document, &Annotation) -> Result<Vec<Feature>> + Send + Sync,
{
    fn extract(&self, document: &Document, annotation: &Annotation) -> Result<Vec<Feature>> {
        (self.function)(document, annotation)
    }
}

impl<F> NamedExtractor for NamedFnExtractor<F>
where
    F: Fn(&Document, &Annotation) -> Result<Vec<Feature>> + Send + Sync,
{
    fn feature_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpanfeatError;
    use crate::extractor::BaseExtractor;
    use crate::span::Span;

    #[test]
    fn test_fn_extractor() {
        let doc = Document::builder("Walked")
            .add_annotation(Annotation::new("token", Span::new(0, 6).unwrap()))
            .build()
            .unwrap();
        let token = &doc.annotations("token")[0];

        let capitalized = FnExtractor::named("cap", |doc: &Document, ann: &Annotation| {
            let text = doc.covered_text(ann);
            Ok(vec![Feature::new(
                "cap",
                text.chars().next().is_some_and(char::is_uppercase),
            )])
        });
        assert_eq!(capitalized.feature_name(), "cap");
        assert_eq!(
            capitalized.extract(&doc, token).unwrap(),
            vec![Feature::new("cap", true)]
        );
    }

    #[test]
    fn test_fn_extractor_errors_propagate() {
        let doc = Document::new("x");
        let ann = Annotation::new("token", Span::new(0, 1).unwrap());

        let failing = FnExtractor::new(|_: &Document, _: &Annotation| {
            Err(SpanfeatError::extraction("lexicon unavailable"))
        });
        assert!(matches!(
            failing.extract(&doc, &ann),
            Err(SpanfeatError::Extraction(_))
        ));
    }

    #[test]
    fn test_unnamed_closure_has_no_feature_name() {
        let upper = BaseExtractor::unnamed(FnExtractor::new(|doc: &Document, ann: &Annotation| {
            Ok(vec![Feature::unnamed(doc.covered_text(ann).to_uppercase())])
        }));
        assert_eq!(upper.feature_name(), None);

        let named = BaseExtractor::named(FnExtractor::named("upper", |_: &Document, _: &Annotation| {
            Ok(Vec::new())
        }));
        assert_eq!(named.feature_name(), Some("upper"));
    }
}
