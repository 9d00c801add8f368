//! Typed spans with attributes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::feature::FeatureValue;
use crate::span::Span;

/// A span of a document tagged with a type and optional attributes.
///
/// Annotations of one type are totally ordered by their span's
/// `(begin, end)`. Attributes hold type-specific data (a part-of-speech tag,
/// a lemma, ...) that base extractors read.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation {
    kind: String,
    span: Span,
    attributes: BTreeMap<String, FeatureValue>,
}

impl Annotation {
    /// Create a new annotation of the given type.
    pub fn new<S: Into<String>>(kind: S, span: Span) -> Self {
        Annotation {
            kind: kind.into(),
            span,
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute to this annotation.
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FeatureValue>,
    {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Clone this annotation under a different type.
    pub fn with_kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn begin(&self) -> usize {
        self.span.begin()
    }

    pub fn end(&self) -> usize {
        self.span.end()
    }

    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&FeatureValue> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &BTreeMap<String, FeatureValue> {
        &self.attributes
    }

    /// Whether `other` is the same annotation: same type over the same span.
    pub(crate) fn is_same(&self, other: &Annotation) -> bool {
        self.span == other.span && self.kind == other.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_attributes() {
        let token = Annotation::new("token", Span::new(4, 7).unwrap())
            .with_attribute("pos", "NN")
            .with_attribute("length", 3_i64);

        assert_eq!(token.kind(), "token");
        assert_eq!(token.begin(), 4);
        assert_eq!(token.end(), 7);
        assert_eq!(token.attribute("pos"), Some(&FeatureValue::from("NN")));
        assert_eq!(token.attribute("length"), Some(&FeatureValue::Integer(3)));
        assert_eq!(token.attribute("lemma"), None);
    }

    #[test]
    fn test_is_same_ignores_attributes() {
        let span = Span::new(0, 3).unwrap();
        let plain = Annotation::new("token", span);
        let tagged = Annotation::new("token", span).with_attribute("pos", "DT");
        let chunk = Annotation::new("chunk", span);

        assert!(plain.is_same(&tagged));
        assert!(!plain.is_same(&chunk));
    }
}
