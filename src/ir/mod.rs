//! # Intermediate Representation (IR)
//!
//! The IR is the printer-primitive sequence produced by an interpretation
//! run. It sits between the layout renderer and the device.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │   Layout    │ ──► │     IR      │ ──► │  Printer  │  or │ Codegen  │
//! │   (JSON)    │     │  (Vec<Op>)  │     │  (trait)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Atomic output**: a run is buffered whole, so a failure mid-layout
//!    never leaves half a receipt on the device
//! 2. **Testable**: assert exact primitive sequences without a printer
//! 3. **Replayable**: the same program drives a device, a preview, or bytes
//!
//! ## Example
//!
//! ```
//! use tillroll::ir::{Op, Program, TextStyle};
//! use tillroll::protocol::text::Alignment;
//!
//! let mut program = Program::new();
//! program.push(Op::SetAlign(Alignment::Center));
//! program.push(Op::Text { content: "HELLO".into(), style: Some(TextStyle::BOLD) });
//! program.push(Op::Feed { lines: 2 });
//! program.push(Op::Cut);
//!
//! let bytes = program.to_bytes();
//! assert!(!bytes.is_empty());
//! ```

mod codegen;
mod ops;

// Re-export the ops types (codegen adds methods to Program via impl)
pub use ops::*;
