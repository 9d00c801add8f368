//! Document structure holding text and annotation layers.

use ahash::AHashMap;

use crate::analysis::tokenizer::{TOKEN_TYPE, Tokenizer};
use crate::document::annotation::Annotation;
use crate::error::{Result, SpanfeatError};
use crate::span::Span;

/// A document: its text plus every annotation layer laid over it.
///
/// Each layer holds the annotations of one type, kept sorted by
/// `(begin, end)` so that positional queries can scan in document order.
#[derive(Clone, Debug, Default)]
pub struct Document {
    text: String,
    layers: AHashMap<String, Vec<Annotation>>,
}

impl Document {
    /// Create a new document without annotations.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document {
            text: text.into(),
            layers: AHashMap::new(),
        }
    }

    /// Create a document builder.
    pub fn builder<S: Into<String>>(text: S) -> DocumentBuilder {
        DocumentBuilder::new(text)
    }

    /// Get the document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Add an annotation, keeping its layer sorted.
    ///
    /// The annotation's span must lie inside the text on character
    /// boundaries.
    pub fn add(&mut self, annotation: Annotation) -> Result<()> {
        self.check_span(annotation.span())?;

        let layer = self.layers.entry(annotation.kind().to_string()).or_default();
        let index = layer.partition_point(|existing| existing.span() <= annotation.span());
        layer.insert(index, annotation);
        Ok(())
    }

    /// Get all annotations of a type in document order.
    pub fn annotations(&self, kind: &str) -> &[Annotation] {
        self.layers.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the annotation types present in this document.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.layers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Get the text covered by an annotation.
    pub fn covered_text(&self, annotation: &Annotation) -> &str {
        self.span_text(annotation.span())
    }

    /// Get the text covered by a span, or an empty string if the span does not
    /// fit the text.
    pub fn span_text(&self, span: &Span) -> &str {
        self.text.get(span.begin()..span.end()).unwrap_or("")
    }

    fn check_span(&self, span: &Span) -> Result<()> {
        if span.end() > self.text.len() {
            return Err(SpanfeatError::invalid_argument(format!(
                "span {span} exceeds document length {}",
                self.text.len()
            )));
        }
        if !self.text.is_char_boundary(span.begin()) || !self.text.is_char_boundary(span.end()) {
            return Err(SpanfeatError::invalid_argument(format!(
                "span {span} does not fall on character boundaries"
            )));
        }
        Ok(())
    }
}

/// Builder for creating documents.
#[derive(Debug)]
pub struct DocumentBuilder {
    text: String,
    annotations: Vec<Annotation>,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new<S: Into<String>>(text: S) -> Self {
        DocumentBuilder {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Add an annotation.
    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add several annotations.
    pub fn add_annotations<I>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = Annotation>,
    {
        self.annotations.extend(annotations);
        self
    }

    /// Tokenize the text and add the tokens as `token` annotations.
    pub fn tokenize(self, tokenizer: &dyn Tokenizer) -> Result<Self> {
        self.segment(TOKEN_TYPE, tokenizer)
    }

    /// Run a tokenizer over the text and add its output under the given type.
    ///
    /// This is how coarser layers are built, e.g. sentences from a regex
    /// tokenizer splitting on line breaks.
    pub fn segment<S: Into<String>>(mut self, kind: S, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let kind = kind.into();
        let segments = tokenizer.tokenize(&self.text)?;
        self.annotations
            .extend(segments.into_iter().map(|segment| segment.with_kind(kind.clone())));
        Ok(self)
    }

    /// Build the document, validating every annotation's span.
    pub fn build(self) -> Result<Document> {
        let mut document = Document::new(self.text);
        for annotation in self.annotations {
            document.add(annotation)?;
        }
        Ok(document)
    }
}
