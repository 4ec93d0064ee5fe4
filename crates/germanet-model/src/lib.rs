//! GermaNet record model
//!
//! Value types shared by the ingestion and store crates:
//!
//! - `id`: the identifier codec (`"l42"` → `42`)
//! - `relation`: closed relation-kind enumerations (`EwnRel`, `LexRel`)
//! - `records`: ILI records and Wiktionary paraphrases
//! - `lcs`: least-common-subsumer results
//!
//! Everything here is immutable once constructed. How records are read from
//! XML lives in `germanet-ingest`; where they are kept lives in
//! `germanet-store`.

pub mod error;
pub mod id;
pub mod lcs;
pub mod records;
pub mod relation;

pub use error::ModelError;
pub use id::{parse_plain_id, parse_prefixed_id, LexUnitId};
pub use lcs::LeastCommonSubsumer;
pub use records::{IliRecord, WiktionaryParaphrase};
pub use relation::{EwnRel, LexRel, RelationKind};
