//! Serializing an [`Element`] tree back to XML text
//!
//! All namespaces used anywhere in the tree are declared once on the root
//! element, sorted by prefix.

use std::borrow::Cow;
use std::collections::BTreeMap;

use quick_xml::escape::{escape, partial_escape};

use super::namespace::{NamespaceRegistry, XML_NS};
use super::{Element, Node, QName};

/// Declaration written at the top of every document
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

/// Serialize `root` as a complete UTF-8 document with an XML declaration
#[must_use]
pub fn to_string(root: &Element, registry: &NamespaceRegistry) -> String {
    let prefixes = assign_prefixes(root, registry);

    let mut out = String::from(XML_DECLARATION);
    write_element(&mut out, root, &prefixes, true);
    out
}

/// Map every namespace URI used in the tree to the prefix it will be written with
fn assign_prefixes(root: &Element, registry: &NamespaceRegistry) -> BTreeMap<String, String> {
    let mut uris = Vec::new();
    collect_namespaces(root, &mut uris);

    let mut prefixes = BTreeMap::new();
    let mut next_alias = 0_usize;
    for uri in uris {
        let prefix = if let Some(prefix) = registry.prefix_for(&uri) {
            prefix.to_string()
        } else {
            loop {
                let alias = format!("ns{next_alias}");
                next_alias += 1;
                if !registry.is_registered_prefix(&alias) {
                    break alias;
                }
            }
        };
        prefixes.insert(uri, prefix);
    }
    prefixes
}

/// Namespace URIs in first-use order, excluding the implicit `xml` namespace
fn collect_namespaces(element: &Element, uris: &mut Vec<String>) {
    let names =
        std::iter::once(&element.name).chain(element.attributes.iter().map(|a| &a.name));
    for name in names {
        if let Some(uri) = &name.namespace
            && uri != XML_NS
            && !uris.contains(uri)
        {
            uris.push(uri.clone());
        }
    }
    for child in element.elements() {
        collect_namespaces(child, uris);
    }
}

fn qualified<'a>(name: &'a QName, prefixes: &BTreeMap<String, String>) -> Cow<'a, str> {
    match &name.namespace {
        None => Cow::Borrowed(name.local.as_str()),
        Some(uri) if uri == XML_NS => Cow::Owned(format!("xml:{}", name.local)),
        Some(uri) => match prefixes.get(uri) {
            Some(prefix) => Cow::Owned(format!("{prefix}:{}", name.local)),
            None => Cow::Borrowed(name.local.as_str()),
        },
    }
}

fn write_element(
    out: &mut String,
    element: &Element,
    prefixes: &BTreeMap<String, String>,
    is_root: bool,
) {
    let tag = qualified(&element.name, prefixes);
    out.push('<');
    out.push_str(&tag);

    if is_root {
        let mut declarations: Vec<(&String, &String)> =
            prefixes.iter().map(|(uri, prefix)| (prefix, uri)).collect();
        declarations.sort();
        for (prefix, uri) in declarations {
            push_attribute(out, &format!("xmlns:{prefix}"), uri);
        }
    }

    for attr in &element.attributes {
        push_attribute(out, &qualified(&attr.name, prefixes), &attr.value);
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(out, e, prefixes, false),
            Node::Text(text) => out.push_str(&partial_escape(text.as_str())),
            Node::CData(text) => {
                out.push_str("<![CDATA[");
                out.push_str(text);
                out.push_str("]]>");
            },
            Node::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            },
        }
    }
    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(
        &escape(value)
            .replace('\n', "&#10;")
            .replace('\r', "&#13;")
            .replace('\t', "&#9;"),
    );
    out.push('"');
}
