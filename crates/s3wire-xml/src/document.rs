//! Generic decoding of S3 XML bodies into an element tree.
//!
//! S3 responses are small, shallow documents, so they are decoded eagerly into
//! [`XmlElement`] nodes. Callers then look fields up by slash-separated paths
//! relative to the root (for example `Owner/ID`).

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;

/// A decoded XML element.
///
/// `text` holds the character data of a leaf element, with entity and
/// character references resolved. For elements with children the whitespace
/// between them is discarded and `text` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local name, without any namespace prefix.
    pub name: String,
    /// Text content.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element with the given local name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true if the element has no child elements.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First child with the given local name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given local name.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First descendant at a slash-separated path relative to this element.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Every descendant matching a slash-separated path, in document order.
    ///
    /// Each segment may match several siblings, so `Buckets/Bucket` returns
    /// every `<Bucket>` under every `<Buckets>`.
    #[must_use]
    pub fn find_all(&self, path: &str) -> Vec<&XmlElement> {
        let mut current = vec![self];
        for segment in path.split('/') {
            current = current
                .into_iter()
                .flat_map(|e| e.children_named(segment))
                .collect();
        }
        current
    }

    /// Text at a path, treating an empty element as absent.
    #[must_use]
    pub fn text_at(&self, path: &str) -> Option<&str> {
        self.find(path)
            .map(|e| e.text.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Flatten all non-empty leaf descendants into `(relative path, text)` pairs.
    #[must_use]
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_leaves(&child.name, &mut out);
        }
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a str)>) {
        if self.is_leaf() {
            if !self.text.is_empty() {
                out.push((prefix.to_owned(), self.text.as_str()));
            }
            return;
        }
        for child in &self.children {
            child.collect_leaves(&format!("{prefix}/{}", child.name), out);
        }
    }
}

/// Decode an XML document into its root element.
///
/// The XML declaration, comments, processing instructions and anything after
/// the root element are ignored.
///
/// # Errors
///
/// Returns `XmlError` if the input is not well-formed XML or has no root element.
pub fn parse_document(xml: &[u8]) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_reader(xml);
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(XmlElement::new(local_name(&e)?)),
            Event::Empty(e) => {
                let element = XmlElement::new(local_name(&e)?);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    current.text.push_str(&decoded);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(std::str::from_utf8(&e)?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    push_reference(&mut current.text, &name)?;
                }
            }
            Event::End(_) => {
                let Some(mut element) = stack.pop() else {
                    return Err(XmlError::UnexpectedElement(
                        "closing tag without matching start".to_owned(),
                    ));
                };
                if !element.is_leaf() {
                    element.text.clear();
                }
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Eof => {
                return Err(if stack.is_empty() {
                    XmlError::MissingElement("root element".to_owned())
                } else {
                    XmlError::UnexpectedElement(
                        "unexpected EOF while reading element".to_owned(),
                    )
                });
            }
            // Skip declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }
}

fn local_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let name = start.local_name();
    Ok(std::str::from_utf8(name.as_ref())?.to_owned())
}

/// Resolve an entity or character reference (the part between `&` and `;`).
fn push_reference(text: &mut String, name: &str) -> Result<(), XmlError> {
    if let Some(code) = name.strip_prefix('#') {
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => code.parse::<u32>(),
        };
        let ch = parsed
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| XmlError::ParseError(format!("invalid character reference &{name};")))?;
        text.push(ch);
        return Ok(());
    }

    let resolved = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "apos" => '\'',
        "quot" => '"',
        _ => {
            return Err(XmlError::ParseError(format!(
                "unknown entity reference &{name};"
            )));
        }
    };
    text.push(resolved);
    Ok(())
}
