//! Wiktionary paraphrase loader.
//!
//! Paraphrases are spread over several files in one directory
//! (`wiktionaryParaphrases-nomen.xml`, `wiktionaryParaphrases-verben.xml`,
//! ...), one empty element per paraphrase:
//!
//! ```xml
//! <wiktionaryParaphrase lexUnitId="l42" wiktionaryId="w7" wiktionarySenseId="3"
//!                       wiktionarySense="Beispiel" edited="yes"/>
//! ```

use crate::config::WiktionaryXmlConfig;
use crate::reader::{RecordBuilder, RecordReader};
use crate::xml::{Children, ElementContext};
use crate::{open_input, IngestError, RecordSink, Result};
use germanet_model::WiktionaryParaphrase;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct WiktionaryParaphraseBuilder<'a> {
    config: &'a WiktionaryXmlConfig,
}

impl<'a> WiktionaryParaphraseBuilder<'a> {
    pub fn new(config: &'a WiktionaryXmlConfig) -> Self {
        Self { config }
    }
}

impl RecordBuilder for WiktionaryParaphraseBuilder<'_> {
    type Record = WiktionaryParaphrase;

    fn element_name(&self) -> &str {
        &self.config.record_tag
    }

    fn build<R: BufRead>(
        &self,
        element: &ElementContext<'_>,
        _children: &mut Children<'_, R>,
    ) -> Result<WiktionaryParaphrase> {
        let cfg = self.config;
        Ok(WiktionaryParaphrase {
            lex_unit_id: element.required_prefixed_id(&cfg.lex_unit_id_attr)?,
            wiktionary_id: element.required_prefixed_id(&cfg.wiktionary_id_attr)?,
            wiktionary_sense_id: element.required_plain_id(&cfg.sense_id_attr)?,
            wiktionary_sense: element.required_str(&cfg.sense_attr)?,
            edited: element.required_flag(&cfg.edited_attr, &cfg.yes_token)?,
        })
    }
}

pub fn read_wiktionary_paraphrases<'a, R: BufRead>(
    input: R,
    source_name: &str,
    config: &'a WiktionaryXmlConfig,
) -> RecordReader<R, WiktionaryParaphraseBuilder<'a>> {
    RecordReader::new(input, source_name, WiktionaryParaphraseBuilder::new(config))
}

/// Load every paraphrase of `input` into `sink`; all-or-nothing.
pub fn load_wiktionary_reader<R, S>(
    input: R,
    source_name: &str,
    config: &WiktionaryXmlConfig,
    sink: &mut S,
) -> Result<usize>
where
    R: BufRead,
    S: RecordSink + ?Sized,
{
    let paraphrases = parse_stream(input, source_name, config)?;
    let count = register(paraphrases, sink);
    tracing::info!(source = source_name, records = count, "done loading Wiktionary paraphrases");
    Ok(count)
}

pub fn load_wiktionary_file<S>(
    path: impl AsRef<Path>,
    config: &WiktionaryXmlConfig,
    sink: &mut S,
) -> Result<usize>
where
    S: RecordSink + ?Sized,
{
    let path = path.as_ref();
    let paraphrases = parse_file(path, config)?;
    let count = register(paraphrases, sink);
    tracing::info!(
        source = %path.display(),
        records = count,
        "done loading Wiktionary paraphrases"
    );
    Ok(count)
}

/// Files in `dir` (not recursive) whose names match the configured prefix
/// and suffix, sorted by name.
pub fn discover_wiktionary_files(
    dir: impl AsRef<Path>,
    config: &WiktionaryXmlConfig,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(IngestError::ResourceNotFound {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| IngestError::Io {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if config.matches_file_name(&entry.file_name().to_string_lossy()) {
            tracing::debug!(file = %entry.path().display(), "found Wiktionary file");
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(IngestError::ResourceNotFound {
            path: dir.to_path_buf(),
            reason: format!(
                "no files matching {}*{}",
                config.file_prefix, config.file_suffix
            ),
        });
    }
    Ok(files)
}

/// Load all Wiktionary files of `dir`.
///
/// Every file is parsed before anything is registered, so one bad file
/// leaves the sink untouched.
pub fn load_wiktionary_dir<S>(
    dir: impl AsRef<Path>,
    config: &WiktionaryXmlConfig,
    sink: &mut S,
) -> Result<usize>
where
    S: RecordSink + ?Sized,
{
    let files = discover_wiktionary_files(dir.as_ref(), config)?;
    let mut batch = Vec::new();
    for file in &files {
        batch.extend(parse_file(file, config)?);
    }
    let count = register(batch, sink);
    tracing::info!(
        dir = %dir.as_ref().display(),
        files = files.len(),
        records = count,
        "done loading Wiktionary paraphrases"
    );
    Ok(count)
}

fn parse_file(path: &Path, config: &WiktionaryXmlConfig) -> Result<Vec<WiktionaryParaphrase>> {
    let input = open_input(path)?;
    parse_stream(input, &path.display().to_string(), config)
}

fn parse_stream<R: BufRead>(
    input: R,
    source_name: &str,
    config: &WiktionaryXmlConfig,
) -> Result<Vec<WiktionaryParaphrase>> {
    tracing::info!(source = source_name, "loading Wiktionary paraphrases");
    let paraphrases = read_wiktionary_paraphrases(input, source_name, config)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(source = source_name, records = paraphrases.len(), "parsed");
    Ok(paraphrases)
}

fn register<S: RecordSink + ?Sized>(paraphrases: Vec<WiktionaryParaphrase>, sink: &mut S) -> usize {
    let count = paraphrases.len();
    for paraphrase in paraphrases {
        sink.register_wiktionary_paraphrase(paraphrase);
    }
    count
}
