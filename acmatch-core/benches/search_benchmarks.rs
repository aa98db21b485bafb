//! Build and search throughput for English and CJK keyword sets

use acmatch_core::{Automaton, SearchOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const ENGLISH_WORDS: &[&str] = &[
    "he", "she", "his", "hers", "us", "usher", "her", "ship", "shirt", "apple", "hello", "world",
    "rust", "search", "shear",
];

const CHINESE_WORDS: &[&str] = &[
    "阿拉伯", "埃及", "阿根廷", "中国", "足球", "风格", "美国", "巴西", "意大利", "西班牙",
    "日本", "法国", "德国", "人民", "世界杯",
];

/// Generate text by cycling through sample sentences
fn generate_text(samples: &[&str], repeats: usize) -> Vec<char> {
    samples
        .iter()
        .cycle()
        .take(samples.len() * repeats)
        .flat_map(|s| s.chars())
        .collect()
}

fn english_text(repeats: usize) -> Vec<char> {
    generate_text(
        &[
            "The usher showed her the ship. ",
            "Hello world, she said while searching for a shirt. ",
            "Rust apples are not a thing, his friend insisted. ",
        ],
        repeats,
    )
}

fn chinese_text(repeats: usize) -> Vec<char> {
    generate_text(
        &[
            "你不会想到阿拉伯人会踢出阿根廷风格的足球更何况是埃及风格。",
            "阿拉1伯埃32及3阿2根q廷的球迷在世界杯上相遇。",
            "中国人民喜欢意大利和西班牙的足球。",
        ],
        repeats,
    )
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (name, words) in [("english", ENGLISH_WORDS), ("chinese", CHINESE_WORDS)] {
        group.bench_function(name, |b| {
            b.iter(|| Automaton::from_words(black_box(words)).unwrap());
        });
    }

    // Large alphabet: 1536 three-symbol CJK keywords
    let cjk: Vec<char> = ('\u{4e00}'..='\u{5fff}').collect();
    let large: Vec<Vec<char>> = cjk.chunks_exact(3).map(|c| c.to_vec()).collect();
    group.bench_function("cjk_large", |b| {
        b.iter(|| Automaton::build(black_box(&large)).unwrap());
    });

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let english = Automaton::from_words(ENGLISH_WORDS).unwrap();
    let chinese = Automaton::from_words(CHINESE_WORDS).unwrap();

    for (name, automaton, make_text) in [
        ("english", &english, english_text as fn(usize) -> Vec<char>),
        ("chinese", &chinese, chinese_text as fn(usize) -> Vec<char>),
    ] {
        let mut group = c.benchmark_group(format!("search_{name}"));

        for repeats in [10, 100, 1000] {
            let text = make_text(repeats);
            group.throughput(Throughput::Elements(text.len() as u64));

            for gap in [0, 1, 3] {
                group.bench_with_input(
                    BenchmarkId::new(format!("gap_{gap}"), repeats),
                    &text,
                    |b, text| {
                        let options = SearchOptions::default().with_gap_budget(gap);
                        b.iter(|| automaton.multi_pattern_search(black_box(text), options).len());
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, benchmark_build, benchmark_search);
criterion_main!(benches);
