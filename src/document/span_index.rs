//! Positional queries over annotation layers.

use crate::document::annotation::Annotation;
use crate::document::document::Document;
use crate::error::Result;

/// Lookup of annotations relative to a focus annotation.
///
/// Every query returns annotations of the requested type in document order
/// (sorted by `(begin, end)`) and never includes the focus annotation itself.
pub trait SpanIndex {
    /// The `count` annotations nearest to the focus that end at or before its
    /// beginning, in document order.
    fn select_preceding(
        &self,
        kind: &str,
        focus: &Annotation,
        count: usize,
    ) -> Result<Vec<&Annotation>>;

    /// The `count` annotations nearest to the focus that begin at or after its
    /// end, in document order.
    fn select_following(
        &self,
        kind: &str,
        focus: &Annotation,
        count: usize,
    ) -> Result<Vec<&Annotation>>;

    /// All annotations lying inside the focus span, in document order.
    fn select_covered(&self, kind: &str, focus: &Annotation) -> Result<Vec<&Annotation>>;
}

impl SpanIndex for Document {
    fn select_preceding(
        &self,
        kind: &str,
        focus: &Annotation,
        count: usize,
    ) -> Result<Vec<&Annotation>> {
        let layer = self.annotations(kind);
        let upto = layer.partition_point(|a| a.begin() <= focus.begin());

        let mut preceding: Vec<&Annotation> = layer[..upto]
            .iter()
            .rev()
            .filter(|a| a.span().precedes(focus.span()) && !a.is_same(focus))
            .take(count)
            .collect();
        preceding.reverse();
        Ok(preceding)
    }

    fn select_following(
        &self,
        kind: &str,
        focus: &Annotation,
        count: usize,
    ) -> Result<Vec<&Annotation>> {
        let layer = self.annotations(kind);
        let from = layer.partition_point(|a| a.begin() < focus.end());

        Ok(layer[from..]
            .iter()
            .filter(|a| !a.is_same(focus))
            .take(count)
            .collect())
    }

    fn select_covered(&self, kind: &str, focus: &Annotation) -> Result<Vec<&Annotation>> {
        let layer = self.annotations(kind);
        let from = layer.partition_point(|a| a.begin() < focus.begin());

        Ok(layer[from..]
            .iter()
            .take_while(|a| a.begin() <= focus.end())
            .filter(|a| focus.span().contains(a.span()) && !a.is_same(focus))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn span(begin: usize, end: usize) -> Span {
        Span::new(begin, end).unwrap()
    }

    /// "The man walked to the store ." with one sentence and a chunk.
    fn document() -> Document {
        let text = "The man walked to the store .";
        let mut builder = Document::builder(text);
        let mut offset = 0;
        for word in text.split(' ') {
            builder = builder.add_annotation(Annotation::new(
                "token",
                span(offset, offset + word.len()),
            ));
            offset += word.len() + 1;
        }
        builder
            .add_annotation(Annotation::new("sentence", span(0, text.len())))
            .add_annotation(Annotation::new("chunk", span(15, 27)))
            .build()
            .unwrap()
    }

    fn texts<'a>(doc: &'a Document, annotations: &[&Annotation]) -> Vec<&'a str> {
        annotations.iter().map(|a| doc.covered_text(a)).collect()
    }

    #[test]
    fn test_select_preceding() {
        let doc = document();
        let walked = &doc.annotations("token")[2];

        let preceding = doc.select_preceding("token", walked, 5).unwrap();
        assert_eq!(texts(&doc, &preceding), vec!["The", "man"]);

        let preceding = doc.select_preceding("token", walked, 1).unwrap();
        assert_eq!(texts(&doc, &preceding), vec!["man"]);

        let the = &doc.annotations("token")[0];
        assert!(doc.select_preceding("token", the, 3).unwrap().is_empty());
    }

    #[test]
    fn test_select_following() {
        let doc = document();
        let walked = &doc.annotations("token")[2];

        let following = doc.select_following("token", walked, 2).unwrap();
        assert_eq!(texts(&doc, &following), vec!["to", "the"]);

        let period = &doc.annotations("token")[6];
        assert!(doc.select_following("token", period, 2).unwrap().is_empty());
    }

    #[test]
    fn test_select_covered() {
        let doc = document();
        let chunk = &doc.annotations("chunk")[0];

        let covered = doc.select_covered("token", chunk).unwrap();
        assert_eq!(texts(&doc, &covered), vec!["to", "the", "store"]);
    }

    #[test]
    fn test_select_excludes_focus_itself() {
        let doc = document();
        let man = &doc.annotations("token")[1];

        assert!(doc.select_covered("token", man).unwrap().is_empty());

        // A same-span annotation of another type is not the focus.
        let as_chunk = Annotation::new("chunk", *man.span());
        let covered = doc.select_covered("token", &as_chunk).unwrap();
        assert_eq!(texts(&doc, &covered), vec!["man"]);
    }

    #[test]
    fn test_select_around_multi_token_focus() {
        let doc = document();
        let chunk = &doc.annotations("chunk")[0];

        let preceding = doc.select_preceding("token", chunk, 2).unwrap();
        assert_eq!(texts(&doc, &preceding), vec!["man", "walked"]);

        let following = doc.select_following("token", chunk, 3).unwrap();
        assert_eq!(texts(&doc, &following), vec!["."]);
    }
}
