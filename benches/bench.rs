//! Criterion benchmarks for spanfeat.
//!
//! Covers tokenization into a document and contextual extraction with
//! windowed and aggregating contexts, sequentially and in parallel.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spanfeat::analysis::tokenizer::{RegexTokenizer, TOKEN_TYPE, WhitespaceTokenizer};
use spanfeat::extractor::text::LowercaseTextExtractor;
use spanfeat::prelude::*;
use std::hint::black_box;

/// Generate a test text of `length` words.
fn generate_text(length: usize) -> String {
    let words = [
        "the", "man", "walked", "to", "store", "and", "bought", "some", "bread", "before",
        "heading", "home", ".", "she", "said", "that", "it", "was", "late", ",",
    ];

    let mut text = Vec::with_capacity(length);
    for i in 0..length {
        text.push(words[(i * 7 + i / 3) % words.len()]);
    }
    text.join(" ")
}

fn extractor() -> ContextualExtractor {
    let contexts = vec![
        Context::preceding(3),
        Context::following(3),
        Context::bag(vec![Context::preceding(5), Context::following(5)]).unwrap(),
        Context::count(vec![Context::preceding(10)]).unwrap(),
        Context::ngrams(2, vec![Context::preceding(2), Context::focus()]).unwrap(),
    ];
    ContextualExtractor::new(
        TOKEN_TYPE,
        BaseExtractor::named(LowercaseTextExtractor::new()),
        contexts,
    )
    .unwrap()
}

/// Benchmark building token documents.
fn bench_document_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_building");
    let text = generate_text(1000);

    group.throughput(Throughput::Elements(1000));
    group.bench_function("whitespace_tokenize", |b| {
        b.iter(|| {
            let doc = Document::builder(black_box(text.as_str()))
                .tokenize(&WhitespaceTokenizer::new())
                .unwrap()
                .build()
                .unwrap();
            black_box(doc)
        })
    });

    let regex = RegexTokenizer::new().unwrap();
    group.bench_function("regex_tokenize", |b| {
        b.iter(|| {
            let doc = Document::builder(black_box(text.as_str()))
                .tokenize(&regex)
                .unwrap()
                .build()
                .unwrap();
            black_box(doc)
        })
    });

    group.finish();
}

/// Benchmark contextual extraction.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let extractor = extractor();

    for length in [100, 1000] {
        let doc = Document::builder(generate_text(length))
            .tokenize(&WhitespaceTokenizer::new())
            .unwrap()
            .build()
            .unwrap();
        let tokens = doc.annotations(TOKEN_TYPE);

        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::new("sequential", length), &doc, |b, doc| {
            b.iter(|| {
                for token in tokens {
                    let features = extractor.extract(doc, black_box(token)).unwrap();
                    black_box(features);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("parallel", length), &doc, |b, doc| {
            b.iter(|| black_box(extractor.extract_all(doc, black_box(tokens)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_document_building, bench_extraction);

criterion_main!(benches);
