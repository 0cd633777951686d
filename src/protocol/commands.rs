//! # StarPRNT Protocol Commands
//!
//! Paper-handling commands for Star Micronics thermal receipt printers
//! (TSP650II, TSP700II, TSP800II, etc.).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - With parameters: `ESC a n`, `ESC d n`
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix, used as `ESC GS ...`
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets alignment, emphasis and character
/// size to power-on defaults.
///
/// ## Example
///
/// ```
/// use tillroll::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.4.1
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Feed n Lines (ESC a n)
///
/// Prints the line buffer and feeds paper forward by `n` lines at the
/// current line spacing.
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC a n   |
/// | Hex     | 1B 61 n   |
///
/// ## Example
///
/// ```
/// use tillroll::protocol::commands;
///
/// assert_eq!(commands::feed_lines(2), vec![0x1B, 0x61, 2]);
/// ```
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.5
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'a', n]
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Feed to Cut Position, Then Full Cut (ESC d 2)
///
/// Feeds the last printed line past the cutter blade and performs a full
/// cut. Terminal command of every receipt.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d 2  |
/// | Hex     | 1B 64 02 |
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.9
#[inline]
pub fn cut_full_feed() -> Vec<u8> {
    vec![ESC, b'd', 2]
}
