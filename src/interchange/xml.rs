//! Minimal XML element tree.
//!
//! Both backends need random access to a document (the Ecore reader
//! resolves references after parsing, the scanner looks at every
//! descendant), so the quick-xml event stream is folded into a small owned
//! tree first. Text content is dropped; Ecore documents carry everything
//! in attributes.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::InterchangeError;

/// One element with its attributes in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified tag name, e.g. `ecore:EPackage` or `eClassifiers`.
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Attribute value by qualified name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First non-empty value among `keys`.
    pub fn first_attr(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.attr(key))
            .find(|value| !value.is_empty())
    }

    /// The `xsi:type` / `xmi:type` value, if any.
    pub fn type_attr(&self) -> Option<&str> {
        self.first_attr(&["xsi:type", "xmi:type"])
    }

    /// Tag name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.tag.rsplit(':').next().unwrap_or(&self.tag)
    }

    /// Whether this is an `xmi:XMI` wrapper holding several roots.
    pub fn is_xmi_wrapper(&self) -> bool {
        self.local_name() == "XMI"
    }

    /// All descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&XmlElement> = self.children.iter().rev().collect();
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(element.children.iter().rev());
        }
        out
    }
}

/// Parse a document and return its root element.
pub fn parse_document(input: &[u8]) -> Result<XmlElement, InterchangeError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(element_from_start(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                // Self-closing element - handle as start + end
                let element = element_from_start(e)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| InterchangeError::xml("unexpected closing tag"))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(InterchangeError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(InterchangeError::xml(format!(
            "unclosed element `{}`",
            open.tag
        )));
    }
    root.ok_or_else(|| InterchangeError::missing_element("document root"))
}

fn element_from_start(e: &BytesStart<'_>) -> Result<XmlElement, InterchangeError> {
    let tag = std::str::from_utf8(e.name().as_ref())
        .map_err(|e| InterchangeError::xml(format!("Invalid tag name: {e}")))?
        .to_string();

    let mut element = XmlElement::new(tag);
    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| InterchangeError::xml(format!("Attribute key error: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))?
            .to_string();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), InterchangeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(InterchangeError::invalid_element(format!(
                "second document root `{}`",
                element.tag
            )));
        }
    }
    Ok(())
}
