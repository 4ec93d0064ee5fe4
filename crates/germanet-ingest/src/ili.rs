//! Inter-lingual index loader.
//!
//! ```xml
//! <iliRecord lexUnitId="l10" ewnRelation="synonym" pwnWord="cat" ...>
//!   <pwn20Synonyms>
//!     <pwn20Synonym>cat</pwn20Synonym>
//!     <pwn20Synonym>feline</pwn20Synonym>
//!   </pwn20Synonyms>
//! </iliRecord>
//! ```

use crate::config::IliXmlConfig;
use crate::reader::{RecordBuilder, RecordReader};
use crate::xml::{Children, ElementContext};
use crate::{open_input, RecordSink, Result};
use germanet_model::{EwnRel, IliRecord};
use std::io::BufRead;
use std::path::Path;

pub struct IliRecordBuilder<'a> {
    config: &'a IliXmlConfig,
}

impl<'a> IliRecordBuilder<'a> {
    pub fn new(config: &'a IliXmlConfig) -> Self {
        Self { config }
    }
}

impl RecordBuilder for IliRecordBuilder<'_> {
    type Record = IliRecord;

    fn element_name(&self) -> &str {
        &self.config.record_tag
    }

    fn build<R: BufRead>(
        &self,
        element: &ElementContext<'_>,
        children: &mut Children<'_, R>,
    ) -> Result<IliRecord> {
        let cfg = self.config;
        let lex_unit_id = element.required_prefixed_id(&cfg.lex_unit_id_attr)?;
        let ewn_relation = element.required_relation::<EwnRel>(&cfg.relation_attr)?;
        let pwn_word = element.optional_str(&cfg.pwn_word_attr);
        let pwn20_id = element.optional_str(&cfg.pwn20_id_attr);
        let pwn30_id = element.optional_str(&cfg.pwn30_id_attr);
        let pwn20_paraphrase = element.optional_str(&cfg.pwn20_paraphrase_attr);
        let source = element.optional_str(&cfg.source_attr);

        let mut english_synonyms = Vec::new();
        while let Some(name) = children.next_start()? {
            if name == cfg.synonym_tag {
                english_synonyms.push(children.read_text()?);
            }
        }

        Ok(IliRecord {
            lex_unit_id,
            ewn_relation,
            pwn_word,
            pwn20_id,
            pwn30_id,
            pwn20_paraphrase,
            source,
            english_synonyms,
        })
    }
}

/// Lazily read ILI records from a stream.
pub fn read_ili_records<'a, R: BufRead>(
    input: R,
    source_name: &str,
    config: &'a IliXmlConfig,
) -> RecordReader<R, IliRecordBuilder<'a>> {
    RecordReader::new(input, source_name, IliRecordBuilder::new(config))
}

/// Load every ILI record of `input` into `sink`.
///
/// Nothing is registered unless the whole stream parses. Returns the number
/// of records registered.
pub fn load_ili_reader<R, S>(
    input: R,
    source_name: &str,
    config: &IliXmlConfig,
    sink: &mut S,
) -> Result<usize>
where
    R: BufRead,
    S: RecordSink + ?Sized,
{
    tracing::info!(source = source_name, "loading ILI records");
    let records = read_ili_records(input, source_name, config).collect::<Result<Vec<_>>>()?;
    let count = records.len();
    for record in records {
        sink.register_ili_record(record);
    }
    tracing::info!(source = source_name, records = count, "done loading ILI records");
    Ok(count)
}

pub fn load_ili_file<S>(path: impl AsRef<Path>, config: &IliXmlConfig, sink: &mut S) -> Result<usize>
where
    S: RecordSink + ?Sized,
{
    let path = path.as_ref();
    let input = open_input(path)?;
    load_ili_reader(input, &path.display().to_string(), config, sink)
}
