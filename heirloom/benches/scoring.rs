//! Scorer and pipeline throughput
//!
//! Run with: cargo bench --bench scoring

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use heirloom::prelude::*;

const MEMORY_TEXT: &str = "One shows my mother, aged 24, sitting on the grass beside a \
    traditional carrycot. Another photograph from the same period shows my mother standing \
    with her sister-in-law, Yvonne Stiles, each holding a baby of similar age. In this photo, \
    Peter Elgar is smiling beside the old Austin outside the house in Battle.";

const DESCRIPTIONS: &[&str] = &[
    "mother carrycot grass",
    "two women holding babies in the garden",
    "peter elgar with the austin",
    "street party with bunting",
    "beach huts at bexhill",
];

fn candidate(id: i64) -> MediaRecord {
    let description = DESCRIPTIONS[id as usize % DESCRIPTIONS.len()];
    MediaRecord::image(id, format!("photo_{id}.jpg"))
        .with_title(format!("Family photo {id}"))
        .with_description(description)
        .with_year(1950 + (id % 20) as i32)
}

fn bench_score_photo_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_photo_match");
    let scorer = MatchScorer::default();

    group.bench_function("single_candidate", |b| {
        let photo = candidate(0).metadata();
        b.iter(|| scorer.score_photo_match(black_box(MEMORY_TEXT), Some(1960), black_box(&photo)));
    });

    group.bench_function("empty_metadata", |b| {
        let photo = PhotoMetadata::default();
        b.iter(|| scorer.score_photo_match(black_box(MEMORY_TEXT), None, black_box(&photo)));
    });

    group.finish();
}

fn bench_suggestion_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_photos_for_memory");
    let rt = tokio::runtime::Runtime::new().unwrap();

    for count in [10, 100, 1000].iter() {
        let store = Arc::new(InMemoryStore::new());
        rt.block_on(async {
            store
                .insert_memory(Memory::builder(1, MEMORY_TEXT).year(1960).build())
                .await;
            for id in 0..*count {
                store.insert_media(candidate(id)).await;
            }
        });
        let pipeline =
            SuggestionPipeline::new(store, MatchScorer::default(), MatchingConfig::default());

        group.bench_with_input(BenchmarkId::new("candidates", count), count, |b, _| {
            b.iter(|| rt.block_on(pipeline.suggest_photos_for_memory(1, Some(0))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_photo_match, bench_suggestion_batch);
criterion_main!(benches);
