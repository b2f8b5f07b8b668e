use autocompaste_engine::{segment_sentences, Index};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PASSAGE: &str = "\
It was the best of times, it was the worst of times. It was the age of wisdom, \
it was the age of foolishness! Was it the epoch of belief, or the epoch of incredulity? \
It was the season of Light, it was the season of Darkness...\n\n\
We had everything before us, we had nothing before us. We were all going direct to Heaven, \
we were all going direct the other way.\n";

fn corpus(copies: usize) -> String {
    PASSAGE.repeat(copies)
}

fn segment_passage(c: &mut Criterion) {
    let text = corpus(50);

    c.bench_function("segment_sentences_50_passages", |b| {
        b.iter(|| segment_sentences(black_box(&text)))
    });
}

fn index_documents(c: &mut Criterion) {
    let text = corpus(10);

    c.bench_function("add_to_index_20_documents", |b| {
        b.iter(|| {
            let mut index = Index::new();
            for i in 0..20 {
                index.add_to_index(format!("doc-{}", i), black_box(text.as_str()));
            }
            index
        })
    });
}

fn search_index(c: &mut Criterion) {
    let mut index = Index::new();
    for i in 0..20 {
        index.add_to_index(format!("doc-{}", i), corpus(10));
    }

    c.bench_function("search_common_phrase", |b| {
        b.iter(|| index.search(black_box("it was the")))
    });

    c.bench_function("search_miss", |b| {
        b.iter(|| index.search(black_box("no such phrase")))
    });
}

criterion_group!(benches, segment_passage, index_documents, search_index);
criterion_main!(benches);
