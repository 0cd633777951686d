//! # Tillroll - Receipt Layout Interpreter
//!
//! Tillroll turns a receipt designer's JSON layout into thermal printer
//! instructions. It provides:
//!
//! - **Layout DSL**: typed sections (`header`, `itemList`, `total`, `spacer`, ...)
//! - **Section type registry**: per-type defaults as data, editable per dialect
//! - **Order merge**: live order figures in place of template text
//! - **Error boundary**: every run ends in a feed and a cut, even on failure
//! - **Protocol implementation**: StarPRNT bytes for Star Micronics printers
//!
//! ## Quick Start
//!
//! ```
//! use tillroll::interpreter::interpret;
//! use tillroll::ir::Op;
//!
//! let json = r#"{
//!   "layout": { "sections": [
//!     { "type": "header", "content": "{store_name}", "alignment": "CENTER" },
//!     { "type": "separator" },
//!     { "type": "itemList" },
//!     { "type": "total", "content": "TOTAL: $30.19" }
//!   ] }
//! }"#;
//!
//! let program = interpret(json, None);
//! assert_eq!(program.lines()[0], "BYTE BURGERS");
//! assert_eq!(program.lines().last(), Some(&"TOTAL: $30.19"));
//! assert_eq!(program.ops.last(), Some(&Op::Cut));
//!
//! // StarPRNT bytes, ready for a transport
//! let bytes = program.to_bytes();
//! assert!(!bytes.is_empty());
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`layout`] | DSL types, parser, section type registry |
//! | [`order`] | Order context and amount formatting |
//! | [`tokens`] | `{token}` placeholder resolution |
//! | [`render`] | Section renderer |
//! | [`interpreter`] | Parse + render + finalize, with error recovery |
//! | [`config`] | Dialect options and config files |
//! | [`ir`] | Printer primitives as data |
//! | [`protocol`] | StarPRNT command builders |
//! | [`preview`] | Plain-text receipt preview |
//! | [`transport`] | Printer device output |
//! | [`error`] | Error types |

pub mod config;
pub mod error;
pub mod interpreter;
pub mod ir;
pub mod layout;
pub mod order;
pub mod preview;
pub mod protocol;
pub mod render;
pub mod tokens;
pub mod transport;

// Re-exports for convenience
pub use config::{RenderConfig, RenderOptions};
pub use error::TillrollError;
pub use interpreter::{Interpreter, interpret};
pub use layout::{Layout, Registry, Section};
pub use order::Order;
