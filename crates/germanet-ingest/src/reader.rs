//! Forward-only record extraction.
//!
//! `RecordReader` drives the parser over a whole document, hands every start
//! tag matching the builder's element name to the builder, and yields the
//! finished records in document order. The first error ends the iteration.
//!
//! Text is never trimmed: element text comes back exactly as written.

use crate::xml::{Children, DocumentNamespace, ElementContext, StartTag};
use crate::{IngestError, Result};
use quick_xml::events::Event;
use quick_xml::NsReader;
use std::io::BufRead;

/// Builds one record from one element.
pub trait RecordBuilder {
    type Record;

    /// Local name of the elements this builder consumes.
    fn element_name(&self) -> &str;

    /// Called right after the element's start tag. `children` is positioned
    /// inside the element; anything the builder leaves unread is skipped.
    fn build<R: BufRead>(
        &self,
        element: &ElementContext<'_>,
        children: &mut Children<'_, R>,
    ) -> Result<Self::Record>;
}

pub struct RecordReader<R, B> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    builder: B,
    source_name: String,
    namespace: Option<DocumentNamespace>,
    depth: usize,
    root_closed: bool,
    finished: bool,
}

impl<R: BufRead, B: RecordBuilder> RecordReader<R, B> {
    pub fn new(input: R, source_name: impl Into<String>, builder: B) -> Self {
        let mut reader = NsReader::from_reader(input);
        reader.expand_empty_elements(true);
        Self {
            reader,
            buf: Vec::new(),
            builder,
            source_name: source_name.into(),
            namespace: None,
            depth: 0,
            root_closed: false,
            finished: false,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Namespace of the document, known once its root element was read.
    pub fn namespace(&self) -> Option<&DocumentNamespace> {
        self.namespace.as_ref()
    }

    fn next_record(&mut self) -> Result<Option<B::Record>> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(err) => {
                    return Err(IngestError::malformed(
                        &self.source_name,
                        self.reader.buffer_position(),
                        err.to_string(),
                    ))
                }
            };

            let start = match event {
                Event::Start(start) => start,
                Event::End(_) => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.depth == 0 {
                        self.root_closed = true;
                    }
                    continue;
                }
                Event::Text(text)
                    if self.root_closed && !text.iter().all(u8::is_ascii_whitespace) =>
                {
                    return Err(IngestError::malformed(
                        &self.source_name,
                        self.reader.buffer_position(),
                        "text after the root element",
                    ));
                }
                Event::Eof => {
                    let position = self.reader.buffer_position();
                    if self.namespace.is_none() {
                        return Err(IngestError::malformed(
                            &self.source_name,
                            position,
                            "document has no root element",
                        ));
                    }
                    if self.depth > 0 {
                        return Err(IngestError::malformed(
                            &self.source_name,
                            position,
                            "unexpected end of document",
                        ));
                    }
                    return Ok(None);
                }
                _ => continue,
            };

            let position = self.reader.buffer_position();
            if self.root_closed {
                return Err(IngestError::malformed(
                    &self.source_name,
                    position,
                    "more than one root element",
                ));
            }
            if self.namespace.is_none() {
                let (resolved, _) = self.reader.resolve_element(start.name());
                let namespace = DocumentNamespace::from_resolved(resolved)
                    .map_err(|msg| IngestError::malformed(&self.source_name, position, msg))?;
                self.namespace = Some(namespace);
            }

            if start.local_name().as_ref() != self.builder.element_name().as_bytes() {
                self.depth += 1;
                continue;
            }

            let tag = StartTag::read(&self.reader, &start)
                .map_err(|msg| IngestError::malformed(&self.source_name, position, msg))?;
            let namespace = self.namespace.as_ref().cloned().unwrap_or_default();
            let element = ElementContext::new(&tag, &namespace, &self.source_name);
            let mut children =
                Children::new(&mut self.reader, &mut self.buf, &self.source_name, tag.name());
            let built = self.builder.build(&element, &mut children);
            // Drain a rejected element too, so a truncated document reports
            // `MalformedDocument` rather than the record error.
            let record = match built {
                Ok(record) => record,
                Err(err @ IngestError::MalformedDocument { .. }) => return Err(err),
                Err(err) => {
                    children.skip_rest()?;
                    return Err(err);
                }
            };
            children.skip_rest()?;
            if self.depth == 0 {
                self.root_closed = true;
            }
            return Ok(Some(record));
        }
    }
}

impl<R: BufRead, B: RecordBuilder> Iterator for RecordReader<R, B> {
    type Item = Result<B::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
