//! Element and attribute names of the resource formats.
//!
//! Defaults are the names used by the GermaNet distribution. Every field
//! can be overridden from JSON; fields left out keep their default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub ili: IliXmlConfig,
    pub wiktionary: WiktionaryXmlConfig,
}

/// Names used by the inter-lingual index file (`interLingualIndex_DE-EN.xml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IliXmlConfig {
    /// One record per element with this local name.
    pub record_tag: String,
    /// Nested element holding one English synonym as its text.
    pub synonym_tag: String,
    pub lex_unit_id_attr: String,
    pub relation_attr: String,
    pub pwn_word_attr: String,
    pub pwn20_id_attr: String,
    pub pwn30_id_attr: String,
    pub pwn20_paraphrase_attr: String,
    pub source_attr: String,
}

impl Default for IliXmlConfig {
    fn default() -> Self {
        Self {
            record_tag: "iliRecord".to_string(),
            synonym_tag: "pwn20Synonym".to_string(),
            lex_unit_id_attr: "lexUnitId".to_string(),
            relation_attr: "ewnRelation".to_string(),
            pwn_word_attr: "pwnWord".to_string(),
            pwn20_id_attr: "pwn20Id".to_string(),
            pwn30_id_attr: "pwn30Id".to_string(),
            pwn20_paraphrase_attr: "pwn20paraphrase".to_string(),
            source_attr: "source".to_string(),
        }
    }
}

/// Names used by the Wiktionary paraphrase files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiktionaryXmlConfig {
    pub record_tag: String,
    pub lex_unit_id_attr: String,
    pub wiktionary_id_attr: String,
    pub sense_id_attr: String,
    pub sense_attr: String,
    pub edited_attr: String,
    /// Value of `edited_attr` that means `true`; anything else is `false`.
    pub yes_token: String,
    /// Directory loading only picks files whose names start with this...
    pub file_prefix: String,
    /// ...and end with this.
    pub file_suffix: String,
}

impl Default for WiktionaryXmlConfig {
    fn default() -> Self {
        Self {
            record_tag: "wiktionaryParaphrase".to_string(),
            lex_unit_id_attr: "lexUnitId".to_string(),
            wiktionary_id_attr: "wiktionaryId".to_string(),
            sense_id_attr: "wiktionarySenseId".to_string(),
            sense_attr: "wiktionarySense".to_string(),
            edited_attr: "edited".to_string(),
            yes_token: "yes".to_string(),
            file_prefix: "wiktionaryParaphrases".to_string(),
            file_suffix: ".xml".to_string(),
        }
    }
}

impl WiktionaryXmlConfig {
    pub fn matches_file_name(&self, name: &str) -> bool {
        name.starts_with(&self.file_prefix) && name.ends_with(&self.file_suffix)
    }
}
