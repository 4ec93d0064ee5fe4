//! Records loaded from GermaNet resource files.

use crate::{EwnRel, LexUnitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inter-lingual index entry: links a GermaNet lexical unit to a Princeton
/// WordNet sense.
///
/// `lex_unit_id` and `ewn_relation` are always present. The remaining
/// scalar fields mirror optional attributes of the source element and stay
/// `None` when the attribute is absent. `english_synonyms` keeps document
/// order and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IliRecord {
    pub lex_unit_id: LexUnitId,
    pub ewn_relation: EwnRel,
    pub pwn_word: Option<String>,
    pub pwn20_id: Option<String>,
    pub pwn30_id: Option<String>,
    pub pwn20_paraphrase: Option<String>,
    pub source: Option<String>,
    pub english_synonyms: Vec<String>,
}

impl IliRecord {
    /// Record with no optional fields and no synonyms.
    pub fn new(lex_unit_id: LexUnitId, ewn_relation: EwnRel) -> Self {
        Self {
            lex_unit_id,
            ewn_relation,
            pwn_word: None,
            pwn20_id: None,
            pwn30_id: None,
            pwn20_paraphrase: None,
            source: None,
            english_synonyms: Vec::new(),
        }
    }
}

impl fmt::Display for IliRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        write!(
            f,
            "LexUnit ID: {}, EWN relation: {}, PWN word: {}, PWN 2.0 ID: {}, PWN 3.0 ID: {}, \
             PWN 2.0 paraphrase: {}, source: {}, English synonyms: [{}]",
            self.lex_unit_id,
            self.ewn_relation,
            opt(&self.pwn_word),
            opt(&self.pwn20_id),
            opt(&self.pwn30_id),
            opt(&self.pwn20_paraphrase),
            opt(&self.source),
            self.english_synonyms.join(", ")
        )
    }
}

/// Sense description of a lexical unit taken from Wiktionary.
///
/// All five fields are mandatory in the source schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WiktionaryParaphrase {
    pub lex_unit_id: LexUnitId,
    pub wiktionary_id: i32,
    pub wiktionary_sense_id: i32,
    pub wiktionary_sense: String,
    /// Paraphrase was edited by hand after import.
    pub edited: bool,
}

impl fmt::Display for WiktionaryParaphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LexUnit ID: {}, Wiktionary ID: {}, Wiktionary sense ID: {}, Wiktionary sense: {}, edited: {}",
            self.lex_unit_id,
            self.wiktionary_id,
            self.wiktionary_sense_id,
            self.wiktionary_sense,
            self.edited
        )
    }
}
