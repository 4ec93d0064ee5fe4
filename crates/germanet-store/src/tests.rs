//! Store indexing and shared-store tests

use super::*;
use germanet_ingest::{load_ili_reader, load_wiktionary_reader, IliXmlConfig, WiktionaryXmlConfig};
use std::thread;

fn ili(lex_unit_id: LexUnitId, relation: EwnRel, word: &str) -> IliRecord {
    IliRecord {
        pwn_word: Some(word.to_string()),
        ..IliRecord::new(lex_unit_id, relation)
    }
}

fn paraphrase(lex_unit_id: LexUnitId, sense: &str) -> WiktionaryParaphrase {
    WiktionaryParaphrase {
        lex_unit_id,
        wiktionary_id: 1,
        wiktionary_sense_id: 1,
        wiktionary_sense: sense.to_string(),
        edited: false,
    }
}

#[test]
fn test_records_are_indexed_by_lex_unit() {
    let mut store = LexicalStore::new();
    store.register_ili_record(ili(10, EwnRel::Synonym, "cat"));
    store.register_ili_record(ili(11, EwnRel::HasHypernym, "tom"));
    store.register_ili_record(ili(10, EwnRel::NearSynonym, "kitty"));
    store.register_wiktionary_paraphrase(paraphrase(12, "Haus"));

    let words: Vec<_> = store
        .ili_records_for(10)
        .iter()
        .map(|r| r.pwn_word.as_deref().unwrap())
        .collect();
    assert_eq!(words, ["cat", "kitty"]);
    assert!(store.ili_records_for(12).is_empty());
    assert_eq!(store.wiktionary_paraphrases_for(12)[0].wiktionary_sense, "Haus");
    assert_eq!(store.lex_unit_ids(), [10, 11, 12]);
    assert_eq!(store.ili_record_count(), 3);
    assert_eq!(store.wiktionary_paraphrase_count(), 1);
}

#[test]
fn test_duplicates_are_kept_in_registration_order() {
    let mut store = LexicalStore::new();
    store.register_wiktionary_paraphrase(paraphrase(1, "a"));
    store.register_wiktionary_paraphrase(paraphrase(1, "a"));
    assert_eq!(store.wiktionary_paraphrases_for(1).len(), 2);
    assert_eq!(store.wiktionary_paraphrases().len(), 2);
}

#[test]
fn test_relation_and_word_filters() {
    let mut store = LexicalStore::new();
    store.register_ili_record(ili(1, EwnRel::Synonym, "cat"));
    store.register_ili_record(ili(2, EwnRel::Synonym, "dog"));
    store.register_ili_record(ili(3, EwnRel::HasHyponym, "cat"));

    assert_eq!(store.ili_records_with_relation(EwnRel::Synonym).len(), 2);
    assert!(store.ili_records_with_relation(EwnRel::Causes).is_empty());
    let ids: Vec<_> = store
        .ili_records_for_pwn_word("cat")
        .iter()
        .map(|r| r.lex_unit_id)
        .collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn test_failed_load_leaves_store_untouched() {
    let mut store = LexicalStore::new();
    let xml = r#"<r>
        <iliRecord lexUnitId="l1" ewnRelation="synonym"/>
        <iliRecord lexUnitId="l2" ewnRelation="not_a_relation"/>
    </r>"#;
    assert!(load_ili_reader(xml.as_bytes(), "ili.xml", &IliXmlConfig::default(), &mut store).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_shared_store_serializes_concurrent_loads() {
    let shared = SharedLexicalStore::default();

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let mut sink = shared.clone();
            thread::spawn(move || {
                let xml = format!(
                    r#"<r><wiktionaryParaphrase lexUnitId="l{n}" wiktionaryId="w{n}" wiktionarySenseId="{n}" wiktionarySense="s{n}" edited="no"/></r>"#
                );
                load_wiktionary_reader(
                    xml.as_bytes(),
                    "shared.xml",
                    &WiktionaryXmlConfig::default(),
                    &mut sink,
                )
                .unwrap()
            })
        })
        .collect();

    let loaded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(loaded, 4);

    let store = shared.read();
    assert_eq!(store.wiktionary_paraphrase_count(), 4);
    assert_eq!(store.lex_unit_ids(), [0, 1, 2, 3]);
    drop(store);
    assert_eq!(shared.snapshot().wiktionary_paraphrase_count(), 4);
}
