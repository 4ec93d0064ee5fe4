//! Typed access to the streaming parser.
//!
//! `StartTag` snapshots the attributes of a record's start tag so the
//! parser buffer can be reused while the record's children are read.
//! `ElementContext` turns those attributes into ids, flags and relation
//! kinds, and `Children` walks the element's descendants up to its
//! matching end tag.

use crate::{IngestError, Result};
use germanet_model::{parse_plain_id, parse_prefixed_id, RelationKind};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use std::io::BufRead;

/// Namespace of a document, captured once from its root element and passed
/// to every attribute lookup in that document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentNamespace(Option<String>);

impl DocumentNamespace {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new(uri: impl Into<String>) -> Self {
        Self(Some(uri.into()))
    }

    pub fn uri(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub(crate) fn from_resolved(resolved: ResolveResult<'_>) -> std::result::Result<Self, String> {
        Ok(Self(resolve_to_string(resolved)?))
    }

    /// Unprefixed attributes always belong to their element. A prefixed one
    /// must be in the document namespace, unless the document has none.
    fn admits(&self, attribute_ns: Option<&str>) -> bool {
        match (self.uri(), attribute_ns) {
            (_, None) | (None, _) => true,
            (Some(doc), Some(attr)) => doc == attr,
        }
    }
}

fn resolve_to_string(resolved: ResolveResult<'_>) -> std::result::Result<Option<String>, String> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.as_ref()).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(format!(
            "unbound namespace prefix `{}`",
            String::from_utf8_lossy(&prefix)
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    namespace: Option<String>,
    local_name: String,
    value: String,
}

/// Owned copy of a start tag: local name plus resolved attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    name: String,
    attributes: Vec<Attribute>,
}

impl StartTag {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value of the attribute `name`, or `None` when absent.
    pub fn attribute(&self, namespace: &DocumentNamespace, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.local_name == name && namespace.admits(attr.namespace.as_deref()))
            .map(|attr| attr.value.as_str())
    }

    pub(crate) fn read<R>(reader: &NsReader<R>, start: &BytesStart<'_>) -> std::result::Result<Self, String> {
        let name = utf8(start.local_name().as_ref())?;
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|err| err.to_string())?;
            let (resolved, local) = reader.resolve_attribute(attr.key);
            let namespace = resolve_to_string(resolved)?;
            let local_name = utf8(local.as_ref())?;
            let value = attr
                .unescape_value()
                .map_err(|err| err.to_string())?
                .into_owned();
            attributes.push(Attribute {
                namespace,
                local_name,
                value,
            });
        }
        Ok(Self { name, attributes })
    }
}

pub(crate) fn utf8(bytes: &[u8]) -> std::result::Result<String, String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|err| format!("invalid UTF-8 in name: {err}"))
}

/// Typed attribute accessors for the record element being built.
///
/// Failures carry the source name, the element and the attribute.
#[derive(Debug, Clone, Copy)]
pub struct ElementContext<'a> {
    tag: &'a StartTag,
    namespace: &'a DocumentNamespace,
    source_name: &'a str,
}

impl<'a> ElementContext<'a> {
    pub fn new(tag: &'a StartTag, namespace: &'a DocumentNamespace, source_name: &'a str) -> Self {
        Self {
            tag,
            namespace,
            source_name,
        }
    }

    pub fn tag(&self) -> &'a StartTag {
        self.tag
    }

    pub fn source_name(&self) -> &'a str {
        self.source_name
    }

    pub fn optional_str(&self, attribute: &str) -> Option<String> {
        self.tag
            .attribute(self.namespace, attribute)
            .map(str::to_string)
    }

    pub fn required_str(&self, attribute: &str) -> Result<String> {
        self.optional_str(attribute)
            .ok_or_else(|| IngestError::MissingRequiredAttribute {
                source_name: self.source_name.to_string(),
                element: self.tag.name.clone(),
                attribute: attribute.to_string(),
            })
    }

    /// `l42` → `42`.
    pub fn required_prefixed_id(&self, attribute: &str) -> Result<i32> {
        let raw = self.required_str(attribute)?;
        parse_prefixed_id(&raw).map_err(|source| self.malformed_id(attribute, source))
    }

    pub fn required_plain_id(&self, attribute: &str) -> Result<i32> {
        let raw = self.required_str(attribute)?;
        parse_plain_id(&raw).map_err(|source| self.malformed_id(attribute, source))
    }

    /// `true` only when the value equals `yes_token` exactly.
    pub fn required_flag(&self, attribute: &str, yes_token: &str) -> Result<bool> {
        Ok(self.required_str(attribute)? == yes_token)
    }

    pub fn required_relation<K: RelationKind>(&self, attribute: &str) -> Result<K> {
        let raw = self.required_str(attribute)?;
        K::lookup(&raw).map_err(|source| IngestError::InvalidRelation {
            source_name: self.source_name.to_string(),
            attribute: attribute.to_string(),
            source,
        })
    }

    fn malformed_id(&self, attribute: &str, source: germanet_model::ModelError) -> IngestError {
        IngestError::MalformedIdentifier {
            source_name: self.source_name.to_string(),
            attribute: attribute.to_string(),
            source,
        }
    }
}

enum Step {
    Start(Vec<u8>),
    End,
    Text(std::result::Result<String, String>),
    Eof,
    Other,
    Error(String),
}

/// Bounded walk over the descendants of one record element.
///
/// Created right after the record's start tag; finished once the matching
/// end tag has been consumed.
pub struct Children<'r, R> {
    reader: &'r mut NsReader<R>,
    buf: &'r mut Vec<u8>,
    source_name: &'r str,
    element: &'r str,
    depth: usize,
    at_start: bool,
    finished: bool,
}

impl<'r, R: BufRead> Children<'r, R> {
    pub(crate) fn new(
        reader: &'r mut NsReader<R>,
        buf: &'r mut Vec<u8>,
        source_name: &'r str,
        element: &'r str,
    ) -> Self {
        Self {
            reader,
            buf,
            source_name,
            element,
            depth: 1,
            at_start: false,
            finished: false,
        }
    }

    /// Local name of the next nested start tag at any depth, or `None` once
    /// the record's end tag is reached.
    pub fn next_start(&mut self) -> Result<Option<String>> {
        while !self.finished {
            match self.step() {
                Step::Start(name) => {
                    self.depth += 1;
                    self.at_start = true;
                    let name = utf8(&name).map_err(|msg| self.malformed(msg))?;
                    return Ok(Some(name));
                }
                Step::End => {
                    self.depth -= 1;
                    self.at_start = false;
                    if self.depth == 0 {
                        self.finished = true;
                    }
                }
                Step::Eof => return Err(self.unexpected_eof()),
                Step::Error(msg) => return Err(self.malformed(msg)),
                // whitespace between children, or mixed content we don't read
                Step::Text(_) | Step::Other => self.at_start = false,
            }
        }
        Ok(None)
    }

    /// Text content of the element whose start tag `next_start` just
    /// returned, exactly as written: no trimming, entities unescaped, CDATA
    /// sections joined with the text around them. The element must hold
    /// text only.
    pub fn read_text(&mut self) -> Result<String> {
        debug_assert!(self.at_start, "read_text must follow next_start");
        self.at_start = false;
        let mut text = String::new();
        loop {
            match self.step() {
                Step::Text(Ok(chunk)) => text.push_str(&chunk),
                Step::Text(Err(msg)) | Step::Error(msg) => return Err(self.malformed(msg)),
                Step::End => {
                    self.depth -= 1;
                    return Ok(text);
                }
                Step::Start(name) => {
                    let name = String::from_utf8_lossy(&name).into_owned();
                    return Err(self.malformed(format!(
                        "expected text only, found nested <{name}>"
                    )));
                }
                Step::Eof => return Err(self.unexpected_eof()),
                Step::Other => {}
            }
        }
    }

    /// Consume whatever is left of the record element.
    pub fn skip_rest(&mut self) -> Result<()> {
        while self.next_start()?.is_some() {}
        Ok(())
    }

    fn step(&mut self) -> Step {
        self.buf.clear();
        match self.reader.read_event_into(self.buf) {
            Ok(Event::Start(start)) => Step::Start(start.local_name().as_ref().to_vec()),
            Ok(Event::End(_)) => Step::End,
            Ok(Event::Text(text)) => {
                Step::Text(text.unescape().map(|t| t.into_owned()).map_err(|e| e.to_string()))
            }
            Ok(Event::CData(cdata)) => Step::Text(
                String::from_utf8(cdata.into_inner().into_owned()).map_err(|e| e.to_string()),
            ),
            Ok(Event::Eof) => Step::Eof,
            Ok(_) => Step::Other,
            Err(err) => Step::Error(err.to_string()),
        }
    }

    fn malformed(&self, message: impl Into<String>) -> IngestError {
        IngestError::malformed(self.source_name, self.reader.buffer_position(), message)
    }

    fn unexpected_eof(&self) -> IngestError {
        self.malformed(format!("unexpected end of document inside <{}>", self.element))
    }
}
