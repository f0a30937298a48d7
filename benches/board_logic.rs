use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shelf_match::autoplay::template_pool;
use shelf_match::core::{Game, GameConfig, ItemFactory, ItemTemplate, NullPresenter, Shelf, SimpleRng};
use shelf_match::types::{ShelfId, SlotId};

fn bench_match_check(c: &mut Criterion) {
    let template = ItemTemplate::new("A");
    let mut factory = ItemFactory::new();

    c.bench_function("check_for_matches_full_row", |b| {
        b.iter(|| {
            let mut shelf = Shelf::empty(ShelfId(0), 0.6, &mut NullPresenter).unwrap();
            for index in 0..3 {
                let item = factory.instantiate(&template);
                shelf
                    .slot_mut(index)
                    .unwrap()
                    .place_item(Some(item), &mut NullPresenter);
            }
            black_box(shelf.check_for_matches(&mut NullPresenter))
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    let templates = [ItemTemplate::new("B"), ItemTemplate::new("C"), ItemTemplate::new("D")];
    let mut factory = ItemFactory::new();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("cascade_three_promotions", |b| {
        b.iter(|| {
            let mut shelf = Shelf::empty(ShelfId(0), 0.6, &mut NullPresenter).unwrap();
            for (offset, template) in templates.iter().enumerate() {
                let item = factory.instantiate(template);
                shelf
                    .slot_mut(3 + offset)
                    .unwrap()
                    .place_item(Some(item), &mut NullPresenter);
            }
            for promotion in shelf.plan_promotions(&mut rng) {
                shelf.promote(promotion, &mut NullPresenter);
            }
            black_box(shelf.item_count())
        })
    });
}

fn bench_distribution(c: &mut Criterion) {
    let pool = template_pool(5);
    let mut game = Game::new(GameConfig::default(), NullPresenter);

    c.bench_function("initialize_level_5", |b| {
        b.iter(|| {
            game.initialize(black_box(5), &pool).unwrap();
        })
    });
}

fn bench_move_chain(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), NullPresenter);
    game.initialize(1, &template_pool(1)).unwrap();
    game.board_mut().clear(&mut NullPresenter);
    let template = ItemTemplate::new("A");
    let slot = |shelf: usize, index: usize| SlotId::new(ShelfId(shelf), index);

    c.bench_function("move_completing_match", |b| {
        b.iter(|| {
            for (shelf, index) in [(0, 0), (0, 1), (1, 0)] {
                let item = game.instantiate(&template);
                game.board_mut()
                    .slot_mut(slot(shelf, index))
                    .unwrap()
                    .place_item(Some(item), &mut NullPresenter);
            }
            black_box(game.move_item(slot(1, 0), slot(0, 2)))
        })
    });
}

criterion_group!(
    benches,
    bench_match_check,
    bench_cascade,
    bench_distribution,
    bench_move_chain
);
criterion_main!(benches);
