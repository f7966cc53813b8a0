use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ccg_catalog::cards::{CardInSet, Edition, EditionType, Editions, Rarity, RuleDefinition};
use ccg_catalog::catalog::{ArtPreference, CatalogState};
use ccg_catalog::core::CatalogConfig;

const CARDS: usize = 500;
const EDITIONS: i32 = 20;

fn editions() -> Editions {
    let editions = (0..EDITIONS).map(|year| {
        let date = NaiveDate::from_ymd_opt(1995 + year, 1, 1).unwrap();
        let kind = if year % 5 == 4 { EditionType::Promo } else { EditionType::Expansion };
        let mut edition = Edition::new(format!("E{year:02}"), date, kind);
        for card in (year as usize..CARDS).step_by(3) {
            edition = edition.with_card(CardInSet::new(format!("Card {card}"), Rarity::Common));
        }
        edition
    });
    Editions::new(editions).unwrap()
}

fn catalog() -> CatalogState {
    let mut state = CatalogState::new(
        (0..CARDS).map(|i| RuleDefinition::new(format!("Card {i}"))),
        editions(),
        CatalogConfig::default().with_today(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
    )
    .with_image_source(|_: &str, edition: &str, _: u32| !edition.ends_with('3'));
    state.rebuild();
    state
}

fn bench_rebuild(c: &mut Criterion) {
    let mut state = catalog();
    c.bench_function("rebuild", |b| b.iter(|| black_box(state.rebuild())));
}

fn bench_exact_edition(c: &mut Criterion) {
    let state = catalog();
    c.bench_function("get_card_exact_edition", |b| {
        b.iter(|| state.get_card(black_box("Card 42|E06")))
    });
}

fn bench_cross_edition(c: &mut Criterion) {
    let state = catalog();
    let mut group = c.benchmark_group("get_card_from_editions");
    for policy in ArtPreference::ALL {
        group.bench_function(policy.id(), |b| {
            b.iter(|| state.get_card_from_editions(black_box("Card 42"), Some(policy), None, None))
        });
    }
    group.finish();
}

fn bench_predicate(c: &mut Criterion) {
    let state = catalog();
    let membership = state.printed_in_editions(&["E01", "E07"]);
    let printings = state.unique_printings();
    c.bench_function("edition_membership_matches", |b| {
        b.iter(|| printings.iter().filter(|p| membership.matches(p)).count())
    });
}

criterion_group!(
    benches,
    bench_rebuild,
    bench_exact_edition,
    bench_cross_edition,
    bench_predicate
);
criterion_main!(benches);
