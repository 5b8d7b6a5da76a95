// crates/sbml-pkg/src/node.rs

//! A generic XML element tree.
//!
//! `XmlNode` is the parse tree handed to the element readers, the tree the
//! element writers produce, and the storage for raw XML content such as
//! `<notes>`, `<annotation>`, `<mess>` or SED-ML `<newXML>`.
//!
//! Content is kept in document order, so text interleaved with child
//! elements (XHTML in notes, for instance) survives a round trip.

use crate::attributes::XmlAttributes;
use alloc::string::String;
use alloc::vec::Vec;

/// An XML namespace declaration (`xmlns` or `xmlns:prefix`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    /// `None` for the default namespace.
    pub prefix: Option<String>,
    pub uri: String,
}

/// One item of an element's content.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlContent {
    Element(XmlNode),
    Text(String),
}

/// One XML element with its attributes, namespace declarations and content.
#[derive(Debug, Clone, Default)]
pub struct XmlNode {
    prefix: Option<String>,
    name: String,
    attributes: XmlAttributes,
    namespaces: Vec<NamespaceDecl>,
    content: Vec<XmlContent>,
    line: u32,
    column: u32,
}

// Source positions are not part of a node's identity.
impl PartialEq for XmlNode {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
            && self.name == other.name
            && self.attributes == other.attributes
            && self.namespaces == other.namespaces
            && self.content == other.content
    }
}

impl XmlNode {
    /// Creates an element with a local name and no prefix.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates an element from a possibly prefixed name (`"fbc:and"`).
    pub fn from_qualified_name(qname: &str) -> Self {
        let mut node = Self::default();
        match qname.split_once(':') {
            Some((prefix, local)) => {
                node.prefix = Some(prefix.into());
                node.name = local.into();
            }
            None => node.name = qname.into(),
        }
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn set_prefix(&mut self, prefix: Option<&str>) {
        self.prefix = prefix.map(String::from);
    }

    /// The name as written in XML, `prefix:name` or `name`.
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(p) => {
                let mut s = String::with_capacity(p.len() + 1 + self.name.len());
                s.push_str(p);
                s.push(':');
                s.push_str(&self.name);
                s
            }
            None => self.name.clone(),
        }
    }

    pub fn attributes(&self) -> &XmlAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut XmlAttributes {
        &mut self.attributes
    }

    pub fn namespaces(&self) -> &[NamespaceDecl] {
        &self.namespaces
    }

    /// Declares a namespace on this element, replacing an earlier declaration
    /// of the same prefix.
    pub fn add_namespace(&mut self, prefix: Option<&str>, uri: impl Into<String>) {
        let uri = uri.into();
        if let Some(existing) = self
            .namespaces
            .iter_mut()
            .find(|ns| ns.prefix.as_deref() == prefix)
        {
            existing.uri = uri;
        } else {
            self.namespaces.push(NamespaceDecl {
                prefix: prefix.map(String::from),
                uri,
            });
        }
    }

    /// Looks up the URI declared for `prefix` on this element (not its ancestors).
    pub fn namespace_uri(&self, prefix: Option<&str>) -> Option<&str> {
        self.namespaces
            .iter()
            .find(|ns| ns.prefix.as_deref() == prefix)
            .map(|ns| ns.uri.as_str())
    }

    /// Child elements and text runs in document order.
    pub fn content(&self) -> &[XmlContent] {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Vec<XmlContent> {
        &mut self.content
    }

    /// Child elements in document order, skipping text.
    pub fn children(&self) -> impl Iterator<Item = &XmlNode> + '_ {
        self.content.iter().filter_map(|item| match item {
            XmlContent::Element(node) => Some(node),
            XmlContent::Text(_) => None,
        })
    }

    pub fn num_children(&self) -> usize {
        self.children().count()
    }

    /// The `n`th child element, not counting text runs.
    pub fn nth_child(&self, n: usize) -> Option<&XmlNode> {
        self.children().nth(n)
    }

    pub fn add_child(&mut self, child: XmlNode) {
        self.content.push(XmlContent::Element(child));
    }

    /// The first child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children().find(|c| c.name == name)
    }

    /// `true` if any text run, whitespace included, sits directly in this element.
    pub fn has_text(&self) -> bool {
        self.content.iter().any(|item| matches!(item, XmlContent::Text(_)))
    }

    /// The concatenated text runs directly inside this element.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|item| match item {
                XmlContent::Text(t) => Some(t.as_str()),
                XmlContent::Element(_) => None,
            })
            .collect()
    }

    /// Replaces every text run with `text`, placed after the child elements.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content.retain(|item| matches!(item, XmlContent::Element(_)));
        let text = text.into();
        if !text.is_empty() {
            self.content.push(XmlContent::Text(text));
        }
    }

    /// Appends text after the current content, merging with a trailing run.
    pub fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.content.last_mut() {
            Some(XmlContent::Text(last)) => last.push_str(text),
            _ => self.content.push(XmlContent::Text(text.into())),
        }
    }

    /// 1-based source line, `0` when the node was not parsed from text.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based source column, `0` when the node was not parsed from text.
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn set_position(&mut self, line: u32, column: u32) {
        self.line = line;
        self.column = column;
    }
}
