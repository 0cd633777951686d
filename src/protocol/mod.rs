//! # StarPRNT Protocol Implementation
//!
//! Low-level command builders for the StarPRNT protocol used by Star
//! Micronics thermal receipt printers. Only the commands needed to print
//! styled text lines, feed and cut are implemented.
//!
//! ## Module Structure
//!
//! - [`commands`]: Initialization, line feed, cutter
//! - [`text`]: Alignment, emphasis, character size, code page
//! - [`cp437`]: Unicode → CP437 text encoding
//!
//! ## Usage Example
//!
//! ```
//! use tillroll::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold_off());
//! data.extend(commands::feed_lines(2));
//! data.extend(commands::cut_full_feed());
//! ```
//!
//! ## Protocol Reference
//!
//! "StarPRNT Command Specifications Rev. 4.10" by Star Micronics Co., Ltd.

pub mod commands;
pub mod cp437;
pub mod text;
