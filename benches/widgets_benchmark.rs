use std::{fs, sync::LazyLock, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tapspan::{GapStrategy, MatchEngine, MatchFilter, PatternRule};

const LINE: &str = "\u{1F600} @alice shared #rust# at https://example.com/a?b=1, \
    call 555-123-4567 or 13345678910 before paying $12.50 to @bob_2. ";

static RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/benches/rules.json");
    let file = fs::File::open(path).unwrap();
    serde_json::from_reader(file).unwrap()
});

static INPUT: LazyLock<String> = LazyLock::new(|| LINE.repeat(200));

static ENGINE: LazyLock<MatchEngine> = LazyLock::new(MatchEngine::new);

static TEXTUAL_ENGINE: LazyLock<MatchEngine> = LazyLock::new(|| {
    MatchEngine::builder()
        .gap_strategy(GapStrategy::Textual)
        .build()
        .unwrap()
});

fn match_all_benchmark(c: &mut Criterion) {
    c.bench_function("match_all_benchmark", |b| {
        b.iter(|| {
            black_box(
                ENGINE
                    .match_all(&RULES, &INPUT, &MatchFilter::new())
                    .unwrap(),
            );
        });
    });
}

fn widgets_benchmark(c: &mut Criterion) {
    c.bench_function("widgets_benchmark", |b| {
        b.iter(|| {
            black_box(ENGINE.widgets(&RULES, &INPUT, &MatchFilter::new()).unwrap());
        });
    });
}

fn textual_widgets_benchmark(c: &mut Criterion) {
    c.bench_function("textual_widgets_benchmark", |b| {
        b.iter(|| {
            black_box(
                TEXTUAL_ENGINE
                    .widgets(&RULES, &INPUT, &MatchFilter::new())
                    .unwrap(),
            );
        });
    });
}

fn cold_cache_benchmark(c: &mut Criterion) {
    c.bench_function("cold_cache_benchmark", |b| {
        b.iter(|| {
            // Every iteration compiles the expressions again
            let engine = MatchEngine::builder().private_cache().build().unwrap();
            black_box(engine.widgets(&RULES, LINE, &MatchFilter::new()).unwrap());
        });
    });
}

criterion_group! {
    name = benches_widgets;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = match_all_benchmark, widgets_benchmark, textual_widgets_benchmark
}

criterion_group! {
    name = benches_cache;
    config = Criterion::default();
    targets = cold_cache_benchmark
}

criterion_main!(benches_widgets, benches_cache);
