//! Renders a resource document back to its XML text form.
//!
//! Output mirrors the conventional Android `strings.xml` layout: declaration
//! line, root `<resources>` with its original attributes, one tab-indented
//! `<string>` per entry. Attribute order is preserved so a parse/render
//! round trip reproduces the source.

use std::fmt::Write as _;

use quick_xml::escape::escape;

use super::{Content, ResourceDocument};

/// Renders a document to XML text.
pub fn render_document(doc: &ResourceDocument) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<resources");
    write_attrs(&mut out, &doc.attrs);
    out.push_str(">\n");
    for entry in &doc.entries {
        out.push_str("\t<string");
        write_attrs(&mut out, &entry.attrs);
        out.push('>');
        for content in &entry.contents {
            write_content(&mut out, content);
        }
        out.push_str("</string>\n");
    }
    out.push_str("</resources>\n");
    out
}

fn write_attrs(out: &mut String, attrs: &[(String, String)]) {
    for (key, value) in attrs {
        // Infallible for String targets.
        let _ = write!(out, " {key}=\"{}\"", escape(value.as_str()));
    }
}

fn write_content(out: &mut String, content: &Content) {
    match content.tag_name.as_deref() {
        Some(tag) if !tag.trim().is_empty() => {
            out.push('<');
            out.push_str(tag);
            write_attrs(out, &content.attrs);
            out.push('>');
            out.push_str(&escape(content.text.as_str()));
            let _ = write!(out, "</{tag}>");
        }
        _ => out.push_str(&escape(content.text.as_str())),
    }
}
