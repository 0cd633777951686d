//! # StarPRNT Text Styling Commands
//!
//! Alignment, emphasis, character size and code page selection.
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```
//!
//! Alignment is printer state: once set it applies to every following line
//! until changed or until the printer is re-initialized.

use serde::{Deserialize, Serialize};

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options.
///
/// Serialized as `"LEFT"`, `"CENTER"` or `"RIGHT"`; lowercase spellings are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alignment {
    #[default]
    #[serde(alias = "left")]
    Left = 0,
    #[serde(alias = "center")]
    Center = 1,
    #[serde(alias = "right")]
    Right = 2,
}

/// # Set Text Alignment (ESC GS a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS a n |
/// | Hex     | 1B 1D 61 n |
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// Takes effect at the start of the next line.
///
/// ## Example
///
/// ```
/// use tillroll::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x1D, 0x61, 0x01]);
/// ```
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.4
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, GS, b'a', alignment as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Enable Bold/Emphasis (ESC E)
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.3
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Disable Bold/Emphasis (ESC F)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (ESC i n1 n2)
///
/// `height_mult` / `width_mult`: 0 = 1x, 1 = 2x, ... 5 = 6x. Values above
/// the printer maximum are clamped.
///
/// ## Example
///
/// ```
/// use tillroll::protocol::text::size;
///
/// assert_eq!(size(1, 1), vec![0x1B, 0x69, 0x01, 0x01]);
/// ```
pub fn size(height_mult: u8, width_mult: u8) -> Vec<u8> {
    vec![ESC, b'i', height_mult.min(5), width_mult.min(5)]
}

/// Reset to normal size (1x1)
#[inline]
pub fn size_normal() -> Vec<u8> {
    size(0, 0)
}

/// Double size (2x2)
#[inline]
pub fn size_double() -> Vec<u8> {
    size(1, 1)
}

// ============================================================================
// CODE PAGE
// ============================================================================

/// # Select Code Page 437 (ESC GS t 1)
///
/// Text is sent CP437-encoded (see [`super::cp437`]), so the printer must be
/// switched to that table before the first line.
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.2
#[inline]
pub fn codepage_cp437() -> Vec<u8> {
    vec![ESC, GS, b't', 1]
}
