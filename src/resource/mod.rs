//! In-memory model of an Android string resource file.
//!
//! A `strings.xml` document is a root `<resources>` element holding
//! `<string>` entries. Each entry mixes plain text with sub-elements
//! (e.g. `<xliff:g>` placeholders); sub-elements are kept as non-translatable
//! spans so their text passes through a translation run untouched.

mod parser;
mod serializer;

pub use parser::parse_document;
pub use serializer::render_document;

/// One span of text inside a string entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// The span's text, with XML entities unescaped.
    pub text: String,
    /// Never send this span to the translation backend.
    pub ignore: bool,
    /// Wrapping tag name if the span came from a sub-element.
    pub tag_name: Option<String>,
    /// Attributes of the wrapping tag, in document order.
    pub attrs: Vec<(String, String)>,
}

impl Content {
    /// A plain translatable text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ignore: false,
            tag_name: None,
            attrs: Vec::new(),
        }
    }

    /// A span wrapped in a sub-element, excluded from translation.
    pub fn tagged(
        tag_name: impl Into<String>,
        attrs: Vec<(String, String)>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            ignore: true,
            tag_name: Some(tag_name.into()),
            attrs,
        }
    }
}

/// One localizable `<string>` entry.
///
/// All attributes are kept in document order so a parse/render round trip
/// reproduces the source file. The `name` attribute is the entry's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    /// Entry attributes in document order, including `name`.
    pub attrs: Vec<(String, String)>,
    /// Ordered spans making up the entry's inline content.
    pub contents: Vec<Content>,
}

impl StringEntry {
    pub fn new(name: impl Into<String>, contents: Vec<Content>) -> Self {
        Self {
            attrs: vec![("name".to_string(), name.into())],
            contents,
        }
    }

    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The identity key (`name` attribute). Empty if the source was malformed.
    pub fn name(&self) -> &str {
        self.attr("name").unwrap_or_default()
    }

    /// `false` only when the entry carries `translatable="false"`.
    pub fn is_translatable(&self) -> bool {
        self.attr("translatable") != Some("false")
    }

    /// Indices of the spans that participate in translation.
    pub fn translatable_spans(&self) -> impl Iterator<Item = (usize, &Content)> {
        self.contents
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.ignore)
    }
}

/// A whole resource file: root attributes plus ordered entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDocument {
    /// Attributes on the `<resources>` root, in document order.
    pub attrs: Vec<(String, String)>,
    pub entries: Vec<StringEntry>,
}

impl ResourceDocument {
    /// Looks up an entry by its identity key.
    pub fn find(&self, name: &str) -> Option<&StringEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }
}
