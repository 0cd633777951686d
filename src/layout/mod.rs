//! # Receipt Layout DSL
//!
//! The JSON vocabulary the receipt designer produces: a layout is an ordered
//! list of typed sections.
//!
//! ```json
//! { "layout": { "alignment": "CENTER", "sections": [
//!     { "type": "header", "content": "BYTE BURGERS", "alignment": "CENTER" },
//!     { "type": "spacer", "lines": 2 },
//!     { "type": "total", "content": "TOTAL: $30.19" }
//! ] } }
//! ```
//!
//! - [`Layout::parse`] turns JSON text into a [`Layout`]
//! - [`registry`] maps each section `type` to its rendering rule

mod parse;
pub mod registry;
mod types;

pub use crate::ir::TextSize;
pub use crate::protocol::text::Alignment;
pub use parse::{NO_LAYOUT_MESSAGE, ParseError};
pub use registry::{Emphasis, Registry, SectionKind, SectionRule};
pub use types::{Layout, Section, SectionStyle};
