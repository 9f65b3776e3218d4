//! Parsing XML text into an owned [`Element`] tree with quick-xml

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use thiserror::Error;

use super::namespace::XML_NS;
use super::{Attribute, Element, Node, QName};

/// Reasons a document is not well-formed
#[derive(Debug, Error)]
pub enum XmlError {
    /// Tokenizer or escaping error
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("{0}")]
    Attribute(#[from] AttrError),

    /// A prefix is used without a namespace declaration
    #[error("unbound namespace prefix {0:?}")]
    UnboundPrefix(String),

    /// No root element
    #[error("document has no root element")]
    NoRoot,

    /// More than one top-level element
    #[error("document has more than one root element")]
    MultipleRoots,

    /// Element not closed before end of input
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// End tag without a matching start tag
    #[error("unexpected end tag")]
    UnexpectedEnd,

    /// Character data outside the root element
    #[error("text outside the root element")]
    TextOutsideRoot,
}

/// Parse a complete document and return its root element
///
/// Comments, processing instructions and the doctype outside the root are
/// dropped. `xmlns` declarations are consumed into the resolved names.
pub fn parse_document(source: &str) -> Result<Element, XmlError> {
    let mut reader = NsReader::from_str(source);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(open_element(&reader, &start)?);
            },
            Event::Empty(start) => {
                let element = open_element(&reader, &start)?;
                close_element(&mut stack, &mut root, element)?;
            },
            Event::End(_) => {
                let element = stack.pop().ok_or(XmlError::UnexpectedEnd)?;
                close_element(&mut stack, &mut root, element)?;
            },
            Event::Text(text) => {
                let text = text.unescape()?;
                match stack.last_mut() {
                    Some(parent) => push_text(parent, &text),
                    None if text.trim().is_empty() => {},
                    None => return Err(XmlError::TextOutsideRoot),
                }
            },
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata).into_owned();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::CData(text)),
                    None => return Err(XmlError::TextOutsideRoot),
                }
            },
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&comment).into_owned();
                    parent.children.push(Node::Comment(text));
                }
            },
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {},
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unclosed(open.name.local.clone()));
    }
    root.ok_or(XmlError::NoRoot)
}

fn open_element(reader: &NsReader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let (ns, local) = reader.resolve_element(start.name());
    let name = make_name(ns, local.as_ref())?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let (ns, local) = reader.resolve_attribute(attr.key);
        let name = make_name(ns, local.as_ref())?;
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push(Attribute { name, value });
    }

    Ok(element)
}

fn make_name(ns: ResolveResult<'_>, local: &[u8]) -> Result<QName, XmlError> {
    let local = String::from_utf8_lossy(local).into_owned();
    match ns {
        ResolveResult::Bound(uri) => {
            Ok(QName::qualified(String::from_utf8_lossy(uri.as_ref()).into_owned(), local))
        },
        ResolveResult::Unbound => Ok(QName::local(local)),
        ResolveResult::Unknown(prefix) if prefix == b"xml" => Ok(QName::qualified(XML_NS, local)),
        ResolveResult::Unknown(prefix) => {
            Err(XmlError::UnboundPrefix(String::from_utf8_lossy(&prefix).into_owned()))
        },
    }
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_element(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::MultipleRoots);
    }
    *root = Some(element);
    Ok(())
}

/// Append text, merging with a preceding text node
fn push_text(parent: &mut Element, text: &str) {
    if let Some(Node::Text(last)) = parent.children.last_mut() {
        last.push_str(text);
    } else {
        parent.children.push(Node::Text(text.to_string()));
    }
}
