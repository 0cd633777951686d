//! Layout parsing and serialization.
//!
//! The parser is tolerant of absent optional fields but strict about values
//! it cannot default: a zero-line spacer or a section without `type` is a
//! [`ParseError`]. An unrecognized alignment is dropped with a warning, so
//! the section falls back to its type's alignment and then LEFT.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{Layout, Section};
use crate::protocol::text::Alignment;

/// Text printed when the document has no `layout` key.
pub const NO_LAYOUT_MESSAGE: &str = "No layout found in JSON";

/// Errors from turning JSON text into a [`Layout`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document must be a JSON object")]
    NotAnObject,

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("layout has no sections array")]
    MissingSections,

    #[error("section {index}: {message}")]
    InvalidSection { index: usize, message: String },
}

#[derive(Serialize)]
struct Envelope<'a> {
    layout: &'a Layout,
}

impl Layout {
    /// Parse the designer's JSON DSL.
    ///
    /// A document without a `layout` key is valid and yields
    /// [`Layout::fallback`].
    ///
    /// ```
    /// use tillroll::layout::Layout;
    ///
    /// let layout = Layout::parse(r#"{"layout":{"sections":[{"type":"spacer","lines":2}]}}"#).unwrap();
    /// assert_eq!(layout.sections.len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Layout, ParseError> {
        Ok(Self::parse_document(text)?.unwrap_or_else(Self::fallback))
    }

    /// Parse the DSL, reporting a missing `layout` key as `None`.
    pub fn parse_document(text: &str) -> Result<Option<Layout>, ParseError> {
        let Value::Object(mut root) = serde_json::from_str::<Value>(text)? else {
            return Err(ParseError::NotAnObject);
        };
        root.remove("layout").map(Self::from_value).transpose()
    }

    /// The single-section layout used when a document has no `layout`.
    pub fn fallback() -> Layout {
        Layout::new(vec![
            Section::new("text")
                .content(NO_LAYOUT_MESSAGE)
                .align(Alignment::Center),
        ])
    }

    /// Serialize back to the DSL, wrapped in `{"layout": ...}`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Envelope { layout: self })
    }

    fn from_value(value: Value) -> Result<Layout, ParseError> {
        let Value::Object(mut map) = value else {
            return Err(ParseError::InvalidLayout("expected an object".into()));
        };

        if let Some(value) = take_unknown_alignment(&mut map) {
            tracing::warn!(alignment = %value, "ignoring unknown layout alignment");
        }
        let alignment = match map.remove("alignment") {
            None | Some(Value::Null) => None,
            Some(v) => serde_json::from_value::<Alignment>(v).ok(),
        };

        let items = match map.remove("sections") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => return Err(ParseError::MissingSections),
            Some(_) => return Err(ParseError::InvalidLayout("sections must be an array".into())),
        };

        let sections = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_section(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Layout {
            alignment,
            sections,
        })
    }
}

fn parse_section(index: usize, mut item: Value) -> Result<Section, ParseError> {
    if let Some(value) = item.as_object_mut().and_then(take_unknown_alignment) {
        tracing::warn!(index, alignment = %value, "ignoring unknown section alignment");
    }
    let section: Section =
        serde_json::from_value(item).map_err(|e| ParseError::InvalidSection {
            index,
            message: e.to_string(),
        })?;
    if section.line_count == Some(0) {
        return Err(ParseError::InvalidSection {
            index,
            message: "lines must be at least 1".into(),
        });
    }
    Ok(section)
}

/// Remove an `alignment` value that is not LEFT, CENTER or RIGHT.
fn take_unknown_alignment(map: &mut Map<String, Value>) -> Option<Value> {
    let value = map.get("alignment")?;
    if value.is_null() || serde_json::from_value::<Alignment>(value.clone()).is_ok() {
        return None;
    }
    map.remove("alignment")
}
