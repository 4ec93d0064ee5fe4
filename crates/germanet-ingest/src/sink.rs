use germanet_model::{IliRecord, WiktionaryParaphrase};

/// Receiver of completed records.
///
/// Indexing and any uniqueness policy belong to the implementation; loaders
/// hand records over in document order and never read them back.
pub trait RecordSink {
    fn register_ili_record(&mut self, record: IliRecord);

    fn register_wiktionary_paraphrase(&mut self, paraphrase: WiktionaryParaphrase);
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn register_ili_record(&mut self, record: IliRecord) {
        (**self).register_ili_record(record)
    }

    fn register_wiktionary_paraphrase(&mut self, paraphrase: WiktionaryParaphrase) {
        (**self).register_wiktionary_paraphrase(paraphrase)
    }
}

/// Sink that only keeps records in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedRecords {
    pub ili_records: Vec<IliRecord>,
    pub wiktionary_paraphrases: Vec<WiktionaryParaphrase>,
}

impl CollectedRecords {
    pub fn is_empty(&self) -> bool {
        self.ili_records.is_empty() && self.wiktionary_paraphrases.is_empty()
    }
}

impl RecordSink for CollectedRecords {
    fn register_ili_record(&mut self, record: IliRecord) {
        self.ili_records.push(record);
    }

    fn register_wiktionary_paraphrase(&mut self, paraphrase: WiktionaryParaphrase) {
        self.wiktionary_paraphrases.push(paraphrase);
    }
}
