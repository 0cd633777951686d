//! # IR Opcodes
//!
//! The intermediate representation for receipt printing: one opcode per
//! printer primitive. The renderer fills a [`Program`]; nothing reaches a
//! device until the program is complete.
//!
//! ```text
//! Layout → Renderer → Program (inspectable) → Printer / Codegen → Bytes
//! ```

use serde::{Deserialize, Serialize};

use crate::protocol::text::Alignment;

/// Character size of an emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextSize {
    #[default]
    #[serde(alias = "normal")]
    Normal,
    /// Double height and width.
    #[serde(alias = "large")]
    Large,
}

/// Emphasis attached to one `Text` op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub size: TextSize,
}

impl TextStyle {
    /// Bold, normal size.
    pub const BOLD: TextStyle = TextStyle {
        bold: true,
        size: TextSize::Normal,
    };

    /// `None` for plain text, so unstyled lines carry no style at all.
    pub fn non_plain(self) -> Option<TextStyle> {
        if self == TextStyle::default() {
            None
        } else {
            Some(self)
        }
    }
}

/// IR opcodes, one per printer primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Set the alignment register for following lines.
    SetAlign(Alignment),

    /// Print one line and advance the print head.
    Text {
        content: String,
        style: Option<TextStyle>,
    },

    /// Advance paper without printing.
    Feed { lines: u8 },

    /// Cut the paper. Terminal op of every program.
    Cut,
}

/// The device-facing primitive interface.
///
/// Implementations must execute calls in the order they arrive.
pub trait Printer {
    fn set_alignment(&mut self, alignment: Alignment);
    fn emit_text(&mut self, text: &str, style: Option<TextStyle>);
    fn feed_lines(&mut self, lines: u8);
    fn cut_paper(&mut self);
}

/// A recorded sequence of printer primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Append every op of another program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Text of every `Text` op, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Issue every op to a printer, in order.
    pub fn replay<P: Printer + ?Sized>(&self, printer: &mut P) {
        for op in &self.ops {
            match op {
                Op::SetAlign(alignment) => printer.set_alignment(*alignment),
                Op::Text { content, style } => printer.emit_text(content, *style),
                Op::Feed { lines } => printer.feed_lines(*lines),
                Op::Cut => printer.cut_paper(),
            }
        }
    }
}

impl Printer for Program {
    fn set_alignment(&mut self, alignment: Alignment) {
        self.push(Op::SetAlign(alignment));
    }

    fn emit_text(&mut self, text: &str, style: Option<TextStyle>) {
        self.push(Op::Text {
            content: text.to_string(),
            style,
        });
    }

    fn feed_lines(&mut self, lines: u8) {
        self.push(Op::Feed { lines });
    }

    fn cut_paper(&mut self) {
        self.push(Op::Cut);
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
