//! In-memory GermaNet record store.
//!
//! `LexicalStore` is the `RecordSink` the loaders write into. Records are
//! kept in registration order and indexed by lexical-unit id; duplicates are
//! kept as they arrive.
//!
//! `SharedLexicalStore` wraps a store in `Arc<RwLock<_>>` for callers that
//! register from more than one thread. It serializes writers and nothing
//! else: file order across concurrent loads is whatever the threads make it.

#[cfg(test)]
mod tests;

use germanet_ingest::RecordSink;
use germanet_model::{EwnRel, IliRecord, LexUnitId, WiktionaryParaphrase};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LexicalStore {
    ili_records: Vec<IliRecord>,
    wiktionary_paraphrases: Vec<WiktionaryParaphrase>,
    ili_by_lex_unit: HashMap<LexUnitId, Vec<usize>>,
    wiktionary_by_lex_unit: HashMap<LexUnitId, Vec<usize>>,
}

impl LexicalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All ILI records, in registration order.
    pub fn ili_records(&self) -> &[IliRecord] {
        &self.ili_records
    }

    /// All Wiktionary paraphrases, in registration order.
    pub fn wiktionary_paraphrases(&self) -> &[WiktionaryParaphrase] {
        &self.wiktionary_paraphrases
    }

    pub fn ili_records_for(&self, lex_unit_id: LexUnitId) -> Vec<&IliRecord> {
        Self::lookup(&self.ili_by_lex_unit, &self.ili_records, lex_unit_id)
    }

    pub fn wiktionary_paraphrases_for(&self, lex_unit_id: LexUnitId) -> Vec<&WiktionaryParaphrase> {
        Self::lookup(
            &self.wiktionary_by_lex_unit,
            &self.wiktionary_paraphrases,
            lex_unit_id,
        )
    }

    pub fn ili_records_with_relation(&self, relation: EwnRel) -> Vec<&IliRecord> {
        self.ili_records
            .iter()
            .filter(|record| record.ewn_relation == relation)
            .collect()
    }

    /// ILI records whose Princeton WordNet headword is `word` (exact match).
    pub fn ili_records_for_pwn_word(&self, word: &str) -> Vec<&IliRecord> {
        self.ili_records
            .iter()
            .filter(|record| record.pwn_word.as_deref() == Some(word))
            .collect()
    }

    /// Lexical units with at least one record of either kind, ascending.
    pub fn lex_unit_ids(&self) -> Vec<LexUnitId> {
        self.ili_by_lex_unit
            .keys()
            .chain(self.wiktionary_by_lex_unit.keys())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn ili_record_count(&self) -> usize {
        self.ili_records.len()
    }

    pub fn wiktionary_paraphrase_count(&self) -> usize {
        self.wiktionary_paraphrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ili_records.is_empty() && self.wiktionary_paraphrases.is_empty()
    }

    fn lookup<'a, T>(
        index: &HashMap<LexUnitId, Vec<usize>>,
        records: &'a [T],
        lex_unit_id: LexUnitId,
    ) -> Vec<&'a T> {
        index
            .get(&lex_unit_id)
            .map(|positions| positions.iter().map(|&i| &records[i]).collect())
            .unwrap_or_default()
    }
}

impl RecordSink for LexicalStore {
    fn register_ili_record(&mut self, record: IliRecord) {
        tracing::trace!(lex_unit_id = record.lex_unit_id, "register ILI record");
        self.ili_by_lex_unit
            .entry(record.lex_unit_id)
            .or_default()
            .push(self.ili_records.len());
        self.ili_records.push(record);
    }

    fn register_wiktionary_paraphrase(&mut self, paraphrase: WiktionaryParaphrase) {
        tracing::trace!(
            lex_unit_id = paraphrase.lex_unit_id,
            "register Wiktionary paraphrase"
        );
        self.wiktionary_by_lex_unit
            .entry(paraphrase.lex_unit_id)
            .or_default()
            .push(self.wiktionary_paraphrases.len());
        self.wiktionary_paraphrases.push(paraphrase);
    }
}

/// Cloneable handle to a store behind a read/write lock.
#[derive(Debug, Clone, Default)]
pub struct SharedLexicalStore {
    inner: Arc<RwLock<LexicalStore>>,
}

impl SharedLexicalStore {
    pub fn new(store: LexicalStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, LexicalStore> {
        self.inner.read()
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> LexicalStore {
        self.inner.read().clone()
    }
}

impl RecordSink for SharedLexicalStore {
    fn register_ili_record(&mut self, record: IliRecord) {
        self.inner.write().register_ili_record(record);
    }

    fn register_wiktionary_paraphrase(&mut self, paraphrase: WiktionaryParaphrase) {
        self.inner.write().register_wiktionary_paraphrase(paraphrase);
    }
}
