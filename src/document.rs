//! Documents and the annotations laid over them.
//!
//! A [`document::Document`] owns its text and every annotation layer produced
//! upstream (tokens, sentences, predicates, ...). Extraction only ever reads a
//! document; nothing in this crate mutates one after it is built.
//!
//! # Core Components
//!
//! - [`annotation::Annotation`] - A typed span with attributes
//! - [`document::Document`] - Text plus annotation layers, sorted per type
//! - [`span_index::SpanIndex`] - Preceding/following/covered queries
//!
//! # Examples
//!
//! ```
//! use spanfeat::document::annotation::Annotation;
//! use spanfeat::document::document::Document;
//! use spanfeat::document::span_index::SpanIndex;
//! use spanfeat::span::Span;
//!
//! let doc = Document::builder("The man walked")
//!     .add_annotation(Annotation::new("token", Span::new(0, 3).unwrap()))
//!     .add_annotation(Annotation::new("token", Span::new(4, 7).unwrap()))
//!     .add_annotation(Annotation::new("token", Span::new(8, 14).unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let walked = &doc.annotations("token")[2];
//! let preceding = doc.select_preceding("token", walked, 5).unwrap();
//! assert_eq!(preceding.len(), 2);
//! assert_eq!(doc.covered_text(preceding[1]), "man");
//! ```

pub mod annotation;
#[allow(clippy::module_inception)]
pub mod document;
pub mod span_index;

pub use annotation::Annotation;
pub use document::{Document, DocumentBuilder};
pub use span_index::SpanIndex;
