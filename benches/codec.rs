use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kcg_deckcode::cards::{CardCatalog, CardIdentifier, CatalogEntry};
use kcg_deckcode::codec::{CompactCodec, DelimitedCodec};

const EXPANSIONS: [&str; 20] = [
    "ex", "A", "B", "C", "D", "E", "F", "G", "H", "I", "prm", "J", "K", "L", "M", "N", "O", "P",
    "Q", "R",
];
const KINDS: [&str; 4] = ["A", "S", "M", "D"];

/// A deck of `distinct` cards with 1-4 copies each.
fn make_deck(distinct: usize) -> Vec<CardIdentifier> {
    (0..distinct)
        .flat_map(|i| {
            let raw = format!(
                "{}{}-{}",
                EXPANSIONS[i % EXPANSIONS.len()],
                KINDS[(i / EXPANSIONS.len()) % KINDS.len()],
                i % 50 + 1
            );
            let id = CardIdentifier::parse(&raw).unwrap();
            std::iter::repeat(id).take(i % 4 + 1)
        })
        .collect()
}

fn bench_compact(c: &mut Criterion) {
    let codec = CompactCodec::default();
    let mut group = c.benchmark_group("compact");

    for distinct in [8, 20, 40].iter() {
        let deck = make_deck(*distinct);
        let code = codec.encode(&deck).unwrap();
        group.throughput(Throughput::Elements(deck.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", distinct), &deck, |b, deck| {
            b.iter(|| codec.encode(black_box(deck)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", distinct), &code, |b, code| {
            b.iter(|| codec.decode(black_box(code)).unwrap());
        });
    }
    group.finish();
}

fn bench_delimited(c: &mut Criterion) {
    let codec = DelimitedCodec::default();
    let mut group = c.benchmark_group("delimited");

    for distinct in [8, 20, 40].iter() {
        let deck = make_deck(*distinct);
        let catalog: CardCatalog = deck
            .iter()
            .map(|id| CatalogEntry::new(id.clone(), id.to_string()))
            .collect();
        let code = codec.encode(&deck);
        group.throughput(Throughput::Elements(deck.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode", distinct), &code, |b, code| {
            b.iter(|| codec.decode(black_box(code), &catalog).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compact, bench_delimited);
criterion_main!(benches);
