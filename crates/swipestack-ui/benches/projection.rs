use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipestack_core::Runtime;
use swipestack_ui::{
    project_card, Color, DeckConfig, Extrapolation, ImageRef, Item, ProjectionParams, SwipeDeck,
};

const REFERENCE_WIDTH: f32 = 375.0;
const DECK_SIZES: &[u64] = &[3, 16, 64];

fn params() -> ProjectionParams {
    ProjectionParams {
        reference_width: REFERENCE_WIDTH,
        max_visible_depth: 3,
        rotation_extrapolation: Extrapolation::Extend,
    }
}

fn bench_project_card(c: &mut Criterion) {
    let params = params();
    let offsets: Vec<f32> = (-60..=60).map(|step| step as f32 * 12.5).collect();
    c.bench_function("project_card/sweep", |b| {
        b.iter(|| {
            for &offset in &offsets {
                for position in 0..4 {
                    black_box(project_card(position, black_box(offset), &params));
                }
            }
        })
    });
}

fn bench_deck_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_frame");
    for &size in DECK_SIZES {
        let runtime = Runtime::default();
        let items = (1..=size)
            .map(|id| Item::new(id, format!("card {id}"), Color::WHITE, ImageRef::new("bench")))
            .collect();
        let deck = match SwipeDeck::new(items, DeckConfig::new(REFERENCE_WIDTH), runtime.handle()) {
            Ok(deck) => deck,
            Err(err) => panic!("bench deck rejected: {err}"),
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &deck, |b, deck| {
            b.iter(|| black_box(deck.frame()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_project_card, bench_deck_frame);
criterion_main!(benches);
