//! Text analysis for building annotated documents.
//!
//! Extraction runs over annotations produced upstream. This module provides
//! the minimal upstream step: tokenizers that split raw text into token
//! annotations (or coarser segments such as lines) for a
//! [`Document`](crate::document::Document).

pub mod tokenizer;
