// crates/sbml-pkg-xml/src/parser.rs

use crate::error::XmlError;
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use sbml_pkg::{XmlContent, XmlNode};
use std::str;

/// Parses XML text into an element tree.
///
/// Namespace declarations are kept on the element that makes them and
/// entity and character references are resolved. Text is kept in document
/// order next to child elements. Line breaks with indentation between the
/// children of an element that holds no other text are layout and are
/// dropped. Every element records the line and column of its start tag.
///
/// # Errors
/// Returns [`XmlError::Parsing`] for text that is not well formed and
/// [`XmlError::EmptyDocument`] if there is no root element.
pub fn parse_xml_node(text: &str) -> Result<XmlNode, XmlError> {
    let lines = LineIndex::new(text);
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let start = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                let (line, column) = lines.position(reader.error_position() as usize);
                log::warn!("XML parsing failed at {}:{}: {}", line, column, e);
                return Err(XmlError::Parsing {
                    line,
                    column,
                    message: e.to_string(),
                });
            }
        };
        match event {
            Event::Start(ref e) => {
                let node = start_node(e, &lines, start)?;
                stack.push(node);
            }
            Event::Empty(ref e) => {
                let node = start_node(e, &lines, start)?;
                close_node(node, &mut stack, &mut root, &lines, start)?;
            }
            Event::End(_) => {
                // quick-xml has already matched the end tag against its start.
                if let Some(node) = stack.pop() {
                    close_node(node, &mut stack, &mut root, &lines, start)?;
                }
            }
            Event::Text(ref t) => {
                let raw = str::from_utf8(t).map_err(|_| XmlError::Utf8)?;
                let value = unescape(raw).map_err(|e| parse_error(&lines, start, e))?;
                append_text(&mut stack, &value);
            }
            Event::CData(ref c) => {
                let raw = str::from_utf8(c).map_err(|_| XmlError::Utf8)?;
                append_text(&mut stack, raw);
            }
            Event::GeneralRef(ref r) => {
                let name = str::from_utf8(r).map_err(|_| XmlError::Utf8)?;
                let resolved = match r.resolve_char_ref().map_err(|e| parse_error(&lines, start, e))? {
                    Some(ch) => ch.to_string(),
                    None => resolve_predefined_entity(name)
                        .ok_or_else(|| parse_error(&lines, start, format!("unknown entity '&{};'", name)))?
                        .to_string(),
                };
                append_text(&mut stack, &resolved);
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no content.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        let (line, column) = lines.position(text.len());
        return Err(XmlError::Parsing {
            line,
            column,
            message: format!("unclosed element <{}>", open.qualified_name()),
        });
    }
    root.ok_or(XmlError::EmptyDocument)
}

fn start_node(e: &BytesStart<'_>, lines: &LineIndex, start: usize) -> Result<XmlNode, XmlError> {
    let qname = str::from_utf8(e.name().as_ref())
        .map_err(|_| XmlError::Utf8)?
        .to_string();
    let mut node = XmlNode::from_qualified_name(&qname);
    let (line, column) = lines.position(start);
    node.set_position(line, column);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| parse_error(lines, start, err))?;
        let key = str::from_utf8(attr.key.as_ref()).map_err(|_| XmlError::Utf8)?;
        let raw = str::from_utf8(&attr.value).map_err(|_| XmlError::Utf8)?;
        let value = unescape(raw).map_err(|err| parse_error(lines, start, err))?;
        match key.strip_prefix("xmlns") {
            Some("") => node.add_namespace(None, value.into_owned()),
            Some(rest) if rest.starts_with(':') => node.add_namespace(Some(&rest[1..]), value.into_owned()),
            _ => node.attributes_mut().add_qualified(key, value.into_owned()),
        }
    }
    Ok(node)
}

fn close_node(
    mut node: XmlNode,
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    lines: &LineIndex,
    start: usize,
) -> Result<(), XmlError> {
    drop_layout(&mut node);
    match stack.last_mut() {
        Some(parent) => parent.add_child(node),
        None if root.is_none() => *root = Some(node),
        None => {
            return Err(parse_error(
                lines,
                start,
                format!("second root element <{}>", node.qualified_name()),
            ));
        }
    }
    Ok(())
}

fn append_text(stack: &mut [XmlNode], text: &str) {
    // Text outside the root element is not content.
    if let Some(node) = stack.last_mut() {
        node.append_text(text);
    }
}

/// Removes indentation from element-only content. A run without a line
/// break, such as the space in `<b>a</b> <i>c</i>`, makes the content mixed
/// and everything is kept.
fn drop_layout(node: &mut XmlNode) {
    let is_layout = |item: &XmlContent| match item {
        XmlContent::Element(_) => true,
        XmlContent::Text(t) => t.trim().is_empty() && t.contains('\n'),
    };
    if node.num_children() > 0 && node.content().iter().all(is_layout) {
        node.content_mut().retain(|item| matches!(item, XmlContent::Element(_)));
    }
}

fn parse_error(lines: &LineIndex, offset: usize, message: impl ToString) -> XmlError {
    let (line, column) = lines.position(offset);
    XmlError::Parsing {
        line,
        column,
        message: message.to_string(),
    }
}

/// Maps byte offsets to 1-based line and column numbers.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts }
    }

    fn position(&self, offset: usize) -> (u32, u32) {
        let line = self.starts.partition_point(|&s| s <= offset).max(1);
        let column = offset - self.starts[line - 1] + 1;
        (line as u32, column as u32)
    }
}
