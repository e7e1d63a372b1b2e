//! Criterion benchmarks for kgsolr.
//!
//! Covers building URI documents with multi-valued, boosted fields and
//! rendering them into update request bodies.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use kgsolr::document::uri_document::UriDocument;
use kgsolr::update::UpdateRequest;
use std::hint::black_box;

/// Generate resource names for benchmarking.
fn generate_labels(count: usize) -> Vec<String> {
    let words = [
        "city", "river", "person", "album", "species", "company", "film", "mountain",
    ];
    (0..count)
        .map(|i| format!("{} {}", words[i % words.len()], i))
        .collect()
}

fn build_document(i: usize, labels: &[String]) -> UriDocument {
    let mut doc = UriDocument::new(format!("http://dbpedia.org/resource/R{i}"));
    doc.add_field_with_boost("label", labels[i % labels.len()].as_str(), 2.0);
    doc.add_field_values_with_boost("type", labels.iter().take(8).map(String::as_str), 1.5);

    let mut child = UriDocument::new(format!("http://dbpedia.org/resource/R{i}/part"));
    child.add_field("label", "part");
    doc.add_child_document(&child);
    doc
}

fn bench_document_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_building");
    let labels = generate_labels(1000);

    group.bench_function("build_single_document", |b| {
        b.iter(|| black_box(build_document(black_box(0), &labels)))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("build_batch_documents", |b| {
        b.iter(|| {
            for i in 0..100 {
                let _ = black_box(build_document(i, &labels));
            }
        })
    });

    group.finish();
}

fn bench_update_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_rendering");
    let labels = generate_labels(1000);

    let mut request = UpdateRequest::new();
    for i in 0..500 {
        request.add(&build_document(i, &labels));
    }

    group.throughput(Throughput::Elements(500));
    group.bench_function("render_update_body", |b| {
        b.iter(|| black_box(request.to_json_string(false)))
    });

    group.finish();
}

criterion_group!(benches, bench_document_building, bench_update_rendering);
criterion_main!(benches);
