//! Streaming XML ingestion for GermaNet resources.
//!
//! Each loader makes a single forward pass over its input:
//!
//! ```text
//! bytes ──► quick-xml events ──► RecordBuilder (one element) ──► record ──► RecordSink
//! ```
//!
//! - `ili`: the inter-lingual index (`IliRecord`)
//! - `wiktionary`: Wiktionary paraphrases, one directory of files (`WiktionaryParaphrase`)
//!
//! Loads are all-or-nothing: the first structural problem (malformed XML, a
//! missing attribute, a bad identifier, an unknown relation name) aborts the
//! whole call and nothing reaches the sink.

pub mod config;
pub mod error;
pub mod ili;
pub mod reader;
pub mod sink;
pub mod wiktionary;
pub mod xml;

pub use config::{IliXmlConfig, LoaderConfig, WiktionaryXmlConfig};
pub use error::{IngestError, Result};
pub use ili::{load_ili_file, load_ili_reader, read_ili_records, IliRecordBuilder};
pub use reader::{RecordBuilder, RecordReader};
pub use sink::{CollectedRecords, RecordSink};
pub use wiktionary::{
    discover_wiktionary_files, load_wiktionary_dir, load_wiktionary_file, load_wiktionary_reader,
    read_wiktionary_paraphrases, WiktionaryParaphraseBuilder,
};
pub use xml::{Children, DocumentNamespace, ElementContext, StartTag};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub(crate) fn open_input(path: &Path) -> Result<BufReader<File>> {
    if path.is_dir() {
        return Err(IngestError::ResourceNotFound {
            path: path.to_path_buf(),
            reason: "expected a file, found a directory".to_string(),
        });
    }
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| IngestError::open(path.to_path_buf(), err))
}
