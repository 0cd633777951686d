//! # Render Configuration
//!
//! Dialect switches for the renderer, and an optional config file that
//! carries them together with section-type overrides.
//!
//! ## Config File
//!
//! ```json
//! {
//!   "auto_feed": true,
//!   "unknown_sections": "error",
//!   "line_width": 42,
//!   "section_types": {
//!     "footer": { "alignment": "CENTER", "content": "Powered by tillroll" },
//!     "total": { "emphasis": "always_bold", "size": "LARGE", "binding": "total" }
//!   }
//! }
//! ```
//!
//! Every key is optional. `section_types` entries add to, or replace, rules
//! in the standard registry.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TillrollError;
use crate::layout::{Registry, SectionRule};

/// What the renderer does with a section whose `type` is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSectionPolicy {
    /// Emit nothing for the section and continue.
    #[default]
    Skip,
    /// Fail the run with `RenderError::UnknownSectionType`.
    Error,
}

/// Per-dialect renderer switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Feed one line after every single-line text section.
    pub auto_feed: bool,
    /// Resolve `{token}` placeholders in section content.
    pub placeholders: bool,
    pub unknown_sections: UnknownSectionPolicy,
    /// Columns available for order lines (label/value padding, item rows).
    pub line_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            auto_feed: false,
            placeholders: true,
            unknown_sections: UnknownSectionPolicy::Skip,
            line_width: 32,
        }
    }
}

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    #[serde(flatten)]
    pub options: RenderOptions,
    pub section_types: BTreeMap<String, SectionRule>,
}

impl RenderConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TillrollError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TillrollError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| TillrollError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The standard registry with this config's `section_types` applied.
    pub fn registry(&self) -> Registry {
        self.section_types
            .iter()
            .fold(Registry::standard(), |registry, (tag, rule)| {
                registry.with_rule(tag.clone(), rule.clone())
            })
    }
}
