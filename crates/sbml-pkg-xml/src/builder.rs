// crates/sbml-pkg-xml/src/builder.rs

use crate::config::WriterOptions;
use crate::error::XmlError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sbml_pkg::{XmlContent, XmlNode};

/// Serializes an element tree into XML text.
///
/// Namespace declarations are written before the element's attributes.
/// Elements without content are written as empty tags. Indentation is only
/// added between the children of elements that hold no text, so mixed
/// content comes out exactly as stored.
///
/// # Errors
/// Returns an `XmlError` if the underlying writer fails.
pub fn write_xml_node(node: &XmlNode, options: &WriterOptions) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());
    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if options.indent.is_some() {
            writer.write_event(Event::Text(BytesText::new("\n")))?;
        }
    }
    write_node(&mut writer, node, options.indent, 0)?;

    let mut bytes = writer.into_inner();
    if options.indent.is_some() {
        bytes.push(b'\n');
    }
    Ok(String::from_utf8(bytes)?)
}

fn write_node(
    writer: &mut Writer<Vec<u8>>,
    node: &XmlNode,
    indent: Option<usize>,
    depth: usize,
) -> Result<(), XmlError> {
    let qname = node.qualified_name();
    let mut start = BytesStart::new(qname.as_str());
    for decl in node.namespaces() {
        let key = match &decl.prefix {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        start.push_attribute((key.as_str(), decl.uri.as_str()));
    }
    for attr in node.attributes().iter() {
        let key = attr.qualified_name();
        start.push_attribute((key.as_str(), attr.value.as_str()));
    }

    if node.content().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;

    // No layout inside mixed content, at any depth.
    let indent = indent.filter(|_| !node.has_text());
    for item in node.content() {
        match item {
            XmlContent::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            XmlContent::Element(child) => {
                if let Some(width) = indent {
                    write_line_break(writer, width * (depth + 1))?;
                }
                write_node(writer, child, indent, depth + 1)?;
            }
        }
    }
    if let Some(width) = indent {
        write_line_break(writer, width * depth)?;
    }
    writer.write_event(Event::End(BytesEnd::new(qname.as_str())))?;
    Ok(())
}

fn write_line_break(writer: &mut Writer<Vec<u8>>, spaces: usize) -> Result<(), XmlError> {
    let layout = format!("\n{:spaces$}", "");
    writer.write_event(Event::Text(BytesText::new(&layout)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_xml_node;

    fn sample() -> XmlNode {
        let mut root = XmlNode::new("sbml");
        root.add_namespace(None, "urn:core");
        root.add_namespace(Some("vers"), "urn:vers");
        root.attributes_mut().add("level", "3");
        root.attributes_mut().add_prefixed("vers", "required", "false");
        let mut note = XmlNode::new("p");
        note.set_text("a < b & c");
        root.add_child(note);
        root
    }

    #[test]
    fn test_compact_output() {
        let text = write_xml_node(&sample(), &WriterOptions::compact()).unwrap();
        assert_eq!(
            text,
            "<sbml xmlns=\"urn:core\" xmlns:vers=\"urn:vers\" level=\"3\" vers:required=\"false\">\
             <p>a &lt; b &amp; c</p></sbml>"
        );
    }

    #[test]
    fn test_indented_layout() {
        let text = write_xml_node(&sample(), &WriterOptions::default()).unwrap();
        assert!(text.contains("vers:required=\"false\">\n  <p>a &lt; b &amp; c</p>\n</sbml>\n"));
    }

    #[test]
    fn test_mixed_content_is_not_indented() {
        let root = parse_xml_node("<notes><p>Hello <b>big</b> world</p></notes>").unwrap();
        let text = write_xml_node(&root, &WriterOptions::default()).unwrap();
        assert!(text.contains("<notes>\n  <p>Hello <b>big</b> world</p>\n</notes>"));
        assert_eq!(parse_xml_node(&text).unwrap(), root);

        let root = parse_xml_node("<p><b>a</b> <i>c</i></p>").unwrap();
        let text = write_xml_node(&root, &WriterOptions::compact()).unwrap();
        assert_eq!(text, "<p><b>a</b> <i>c</i></p>");
    }

    #[test]
    fn test_declaration_and_reparse() {
        let text = write_xml_node(&sample(), &WriterOptions::default()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.ends_with("</sbml>\n"));
        assert_eq!(parse_xml_node(&text).unwrap(), sample());
    }
}
