//! Section and layout types for the receipt DSL.
//!
//! All types derive `Serialize + Deserialize` so the same values work for
//! Rust construction and for the JSON the receipt designer produces.

use serde::{Deserialize, Serialize};

use crate::ir::TextSize;
use crate::protocol::text::Alignment;

/// Optional emphasis carried by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
}

/// One addressable unit of a layout.
///
/// Every field except `type` is optional; absent values are resolved
/// against the section type's rule when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Blank lines to feed; only meaningful for spacers.
    #[serde(default, rename = "lines", skip_serializing_if = "Option::is_none")]
    pub line_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<SectionStyle>,
}

impl Section {
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            content: None,
            alignment: None,
            line_count: None,
            style: None,
        }
    }

    /// A spacer feeding `lines` blank lines.
    pub fn spacer(lines: u32) -> Self {
        Self::new("spacer").lines(lines)
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn lines(mut self, lines: u32) -> Self {
        self.line_count = Some(lines);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.get_or_insert_with(SectionStyle::default).bold = Some(bold);
        self
    }

    pub fn size(mut self, size: TextSize) -> Self {
        self.style.get_or_insert_with(SectionStyle::default).size = Some(size);
        self
    }
}

/// A parsed receipt layout: sections in print order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Document-level alignment written by the designer. Kept for
    /// round-tripping; sections do not inherit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    pub sections: Vec<Section>,
}

impl Layout {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            alignment: None,
            sections,
        }
    }
}
