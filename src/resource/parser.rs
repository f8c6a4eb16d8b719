//! Streaming parser for `strings.xml` resource files.
//!
//! Only the shape the pipeline needs is modeled: a `<resources>` root,
//! `<string>` entries, and inline content mixing plain text with
//! sub-elements. Whitespace inside entry content is significant and kept;
//! whitespace between entries is dropped.

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{Content, ResourceDocument, StringEntry};

/// Parses a resource document from its XML text.
///
/// # Errors
///
/// Returns an error if the XML is not well-formed or the root element is
/// not `<resources>`.
pub fn parse_document(xml: &str) -> Result<ResourceDocument> {
    let mut reader = Reader::from_str(xml);

    let mut doc = ResourceDocument::default();
    let mut seen_root = false;
    // Set while inside a <string> element.
    let mut entry: Option<StringEntry> = None;
    // Set while inside a sub-element of a <string> (tag name, attrs, text).
    let mut sub: Option<(String, Vec<(String, String)>, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e);
                if !seen_root {
                    if name != "resources" {
                        bail!("Expected <resources> root element, found <{name}>");
                    }
                    doc.attrs = read_attrs(e)?;
                    seen_root = true;
                } else if entry.is_none() {
                    if name != "string" {
                        bail!("Unexpected element <{name}> inside <resources>");
                    }
                    entry = Some(StringEntry {
                        attrs: read_attrs(e)?,
                        contents: Vec::new(),
                    });
                } else if sub.is_none() {
                    sub = Some((name, read_attrs(e)?, String::new()));
                } else {
                    bail!("Nested sub-elements are not supported in <string> content");
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e);
                if let Some(ref mut current) = entry {
                    current
                        .contents
                        .push(Content::tagged(name, read_attrs(e)?, ""));
                } else if !seen_root && name == "resources" {
                    // Self-closing empty document.
                    doc.attrs = read_attrs(e)?;
                    seen_root = true;
                } else if seen_root {
                    bail!("Unexpected element <{name}> inside <resources>");
                } else {
                    bail!("Expected <resources> root element, found <{name}>");
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .context("Failed to unescape text content")?
                    .into_owned();
                if let Some((_, _, ref mut sub_text)) = sub {
                    sub_text.push_str(&text);
                } else if let Some(ref mut current) = entry {
                    if !text.is_empty() {
                        current.contents.push(Content::text(text));
                    }
                }
                // Whitespace between elements is ignored.
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e).into_owned();
                if let Some((_, _, ref mut sub_text)) = sub {
                    sub_text.push_str(&text);
                } else if let Some(ref mut current) = entry {
                    current.contents.push(Content::text(text));
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if let Some((tag, attrs, text)) = sub.take_if(|(tag, ..)| *tag == name) {
                    if let Some(ref mut current) = entry {
                        current.contents.push(Content::tagged(tag, attrs, text));
                    }
                } else if name == "string" {
                    if let Some(finished) = entry.take() {
                        doc.entries.push(finished);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("XML parse error at position {}", reader.buffer_position())
                });
            }
            // Declarations, comments, processing instructions.
            Ok(_) => {}
        }
    }

    if !seen_root {
        bail!("Document has no <resources> root element");
    }
    Ok(doc)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn read_attrs(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.context("Malformed attribute")?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .context("Failed to unescape attribute value")?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse_document(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <resources>\n\
             \t<string name=\"app_name\">Demo</string>\n\
             </resources>",
        )
        .unwrap();
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].name(), "app_name");
        assert_eq!(doc.entries[0].contents, vec![Content::text("Demo")]);
    }

    #[test]
    fn test_parse_root_attributes_ordered() {
        let doc = parse_document(
            "<resources xmlns:xliff=\"urn:oasis:names:tc:xliff:document:1.2\" foo=\"bar\"/>",
        )
        .unwrap();
        assert_eq!(doc.attrs[0].0, "xmlns:xliff");
        assert_eq!(doc.attrs[1], ("foo".to_string(), "bar".to_string()));
    }

    #[test]
    fn test_parse_placeholder_becomes_ignore_span() {
        let doc = parse_document(
            "<resources>\
             <string name=\"welcome\">Hello <xliff:g id=\"name\" example=\"Bob\">%1$s</xliff:g>!</string>\
             </resources>",
        )
        .unwrap();
        let entry = &doc.entries[0];
        assert_eq!(entry.contents.len(), 3);
        assert_eq!(entry.contents[0], Content::text("Hello "));
        let placeholder = &entry.contents[1];
        assert!(placeholder.ignore);
        assert_eq!(placeholder.tag_name.as_deref(), Some("xliff:g"));
        assert_eq!(
            placeholder.attrs,
            vec![
                ("id".to_string(), "name".to_string()),
                ("example".to_string(), "Bob".to_string()),
            ]
        );
        assert_eq!(placeholder.text, "%1$s");
        assert_eq!(entry.contents[2], Content::text("!"));
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let doc = parse_document(
            "<resources><string name=\"x\">Drag &amp; drop</string></resources>",
        )
        .unwrap();
        assert_eq!(doc.entries[0].contents[0].text, "Drag & drop");
    }

    #[test]
    fn test_parse_translatable_attribute_kept() {
        let doc = parse_document(
            "<resources><string name=\"key\" translatable=\"false\">v1</string></resources>",
        )
        .unwrap();
        assert!(!doc.entries[0].is_translatable());
        assert_eq!(doc.entries[0].attrs.len(), 2);
    }

    #[test]
    fn test_parse_empty_placeholder() {
        let doc = parse_document(
            "<resources><string name=\"x\">a<br/>b</string></resources>",
        )
        .unwrap();
        let entry = &doc.entries[0];
        assert_eq!(entry.contents.len(), 3);
        assert!(entry.contents[1].ignore);
        assert_eq!(entry.contents[1].tag_name.as_deref(), Some("br"));
        assert_eq!(entry.contents[1].text, "");
    }

    #[test]
    fn test_parse_rejects_wrong_root() {
        assert!(parse_document("<strings><string name=\"x\">v</string></strings>").is_err());
    }

    #[test]
    fn test_parse_rejects_truncated_document() {
        assert!(parse_document("<resources><string name=\"x\">v").is_err());
    }
}
