//! # Text Preview
//!
//! A [`Printer`] that lays receipt lines out as plain text, for the CLI and
//! for eyeballing fixtures.
//!
//! ```text
//! Program (IR) → TextPreview → String
//!                    ↓
//!              - Track the alignment register
//!              - Pad each line to the paper width
//!              - Wrap lines wider than the paper
//!              - Double-width text takes two columns per character
//! ```
//!
//! Bold has no plain-text rendering and is not shown.

use crate::ir::{Printer, Program, TextSize, TextStyle};
use crate::layout::Alignment;

/// Plain-text receipt renderer.
#[derive(Debug, Clone)]
pub struct TextPreview {
    width: usize,
    alignment: Alignment,
    lines: Vec<String>,
}

impl TextPreview {
    /// A preview of a paper roll `width` characters wide.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            alignment: Alignment::Left,
            lines: Vec::new(),
        }
    }

    /// Render a whole program.
    ///
    /// ```
    /// use tillroll::interpreter::interpret;
    /// use tillroll::preview::TextPreview;
    ///
    /// let program = interpret(r#"{"layout":{"sections":[{"type":"thanks"}]}}"#, None);
    /// let text = TextPreview::render(&program, 20);
    /// assert!(text.starts_with("     Thank you!\n"));
    /// ```
    pub fn render(program: &Program, width: usize) -> String {
        let mut preview = Self::new(width);
        program.replay(&mut preview);
        preview.into_string()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_string(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn push_aligned(&mut self, text: &str, columns: usize) {
        let padding = match self.alignment {
            Alignment::Left => 0,
            Alignment::Center => self.width.saturating_sub(columns) / 2,
            Alignment::Right => self.width.saturating_sub(columns),
        };
        let line = format!("{}{}", " ".repeat(padding), text);
        self.lines.push(line.trim_end().to_string());
    }
}

impl Printer for TextPreview {
    fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    fn emit_text(&mut self, text: &str, style: Option<TextStyle>) {
        let scale = match style.map(|s| s.size) {
            Some(TextSize::Large) => 2,
            _ => 1,
        };
        let per_line = (self.width / scale).max(1);

        for line in text.split('\n') {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                self.lines.push(String::new());
                continue;
            }
            for chunk in chars.chunks(per_line) {
                let rendered: String = if scale == 2 {
                    chunk.iter().flat_map(|c| [*c, ' ']).collect()
                } else {
                    chunk.iter().collect()
                };
                self.push_aligned(&rendered, chunk.len() * scale);
            }
        }
    }

    fn feed_lines(&mut self, lines: u8) {
        for _ in 0..lines {
            self.lines.push(String::new());
        }
    }

    fn cut_paper(&mut self) {
        let label = " cut ";
        let side = self.width.saturating_sub(label.len()) / 2;
        let mut line = format!("{}{}", "-".repeat(side), label);
        line.push_str(&"-".repeat(self.width.saturating_sub(side + label.len())));
        self.lines.push(line);
    }
}
