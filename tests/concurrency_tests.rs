//! Shared catalog integration tests.
//!
//! Readers on many threads must always see a complete catalog while a
//! writer edits it.

use std::sync::Arc;
use std::thread;

use ccg_catalog::cards::{CardInSet, Edition, EditionType, Editions, Rarity, RuleDefinition};
use ccg_catalog::catalog::{ArtPreference, Catalog};
use ccg_catalog::core::CatalogConfig;
use chrono::NaiveDate;

fn catalog() -> Catalog {
    let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
    let mut m10 = Edition::new("M10", date(2009), EditionType::Core);
    let mut m11 = Edition::new("M11", date(2010), EditionType::Core);
    for i in 0..50 {
        m10 = m10.with_card(CardInSet::new(format!("Card {i}"), Rarity::Common));
        m11 = m11.with_card(CardInSet::new(format!("Card {i}"), Rarity::Uncommon));
    }
    Catalog::build(
        (0..50).map(|i| RuleDefinition::new(format!("Card {i}"))),
        Editions::new(vec![m10, m11]).unwrap(),
        CatalogConfig::default().with_today(date(2020)),
    )
}

#[test]
fn test_readers_see_complete_lists_during_batches() {
    let catalog = Arc::new(catalog());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for round in 0..200 {
                    let name = format!("Card {}", round % 50);
                    assert_eq!(catalog.all_printings(&name).len(), 2);
                    assert!(catalog.get_card(&name).is_some());
                }
            })
        })
        .collect();

    let writer = {
        let catalog = Arc::clone(&catalog);
        thread::spawn(move || {
            for round in 0..10 {
                let mut batch = catalog.batch();
                batch.put_card(RuleDefinition::new(format!("Extra {round}")), None);
                batch.put_card(RuleDefinition::new("Card 0").with_text("Updated."), None);
                batch.commit();
            }
        })
    };

    for reader in readers {
        reader.join().unwrap();
    }
    writer.join().unwrap();

    assert_eq!(catalog.unique_printings().len(), 60);
    assert_eq!(
        catalog.get_card("Card 0").unwrap().rules().read().main.text,
        "Updated."
    );
}

#[test]
fn test_snapshot_outlives_writes() {
    let catalog = catalog();
    let snapshot = catalog.all_printings("Card 1");

    catalog.rebuild();
    catalog.put_card(RuleDefinition::new("Card 1").with_text("Changed."), None);

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].rules().read().main.text, "Changed.");
}

#[test]
fn test_preference_switch_visible_to_all_threads() {
    let catalog = Arc::new(catalog());
    assert_eq!(catalog.get_card("Card 3").unwrap().edition(), "M11");

    let switched = catalog.set_art_preference("OldArtAllEditions");
    assert_eq!(switched, ArtPreference::OldArtAllEditions);

    let reader = {
        let catalog = Arc::clone(&catalog);
        thread::spawn(move || catalog.get_card("Card 3").map(|p| p.edition().to_string()))
    };
    assert_eq!(reader.join().unwrap().as_deref(), Some("M10"));
}
