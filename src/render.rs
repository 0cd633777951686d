//! # Renderer
//!
//! Walks a [`Layout`] in document order, resolves each section against the
//! [`Registry`], and records printer primitives into a [`Program`].
//!
//! ## Resolution
//!
//! Every effective value is layered: explicit section value, else the type's
//! rule default, else the global default.
//!
//! | Value | Explicit | Rule | Global |
//! |-------|----------|------|--------|
//! | alignment | `section.alignment` | `rule.alignment` | `LEFT` |
//! | content | `section.content` | `rule.content` | `""` |
//! | bold | `style.bold` | `rule.emphasis` | off |
//! | size | `style.size` | `rule.size` | `NORMAL` |
//!
//! `AlwaysBold` ignores `style.bold`. Order-bound types take their text from
//! the [`Order`] when one is supplied (see [`Renderer::with_order`]).
//!
//! The renderer only produces the body of a receipt. The trailing feed and
//! cut are added once per run by [`finalize`], which the interpreter calls on
//! both its success and recovery paths.

use std::borrow::Cow;

use thiserror::Error;

use crate::config::{RenderOptions, UnknownSectionPolicy};
use crate::ir::{Printer, Program, TextStyle};
use crate::layout::{Alignment, Emphasis, Layout, Registry, Section, SectionKind, SectionRule};
use crate::order::{Order, OrderField};
use crate::tokens;

/// Lines fed before the final cut.
pub const FINAL_FEED_LINES: u8 = 2;

/// Errors raised while formatting section content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("order has no {field}")]
    MissingOrderField { field: &'static str },

    #[error("invalid amount for {field}: {amount}")]
    InvalidAmount { field: &'static str, amount: f64 },

    #[error("unknown section type: {0}")]
    UnknownSectionType(String),
}

/// Finish a receipt: feed past the tear bar, then cut.
pub fn finalize<P: Printer + ?Sized>(printer: &mut P) {
    printer.feed_lines(FINAL_FEED_LINES);
    printer.cut_paper();
}

/// Section-by-section emitter for one receipt.
pub struct Renderer<'a> {
    registry: &'a Registry,
    options: RenderOptions,
    order: Option<&'a Order>,
    /// Alignment register: the value most recently sent to the printer.
    alignment: Alignment,
    program: Program,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a Registry, options: RenderOptions) -> Self {
        Self {
            registry,
            options,
            order: None,
            alignment: Alignment::Left,
            program: Program::new(),
        }
    }

    /// Source order-bound sections from live order data.
    pub fn with_order(mut self, order: Option<&'a Order>) -> Self {
        self.order = order;
        self
    }

    /// Render every section of `layout` and return the body program.
    pub fn render(mut self, layout: &Layout) -> Result<Program, RenderError> {
        for section in &layout.sections {
            self.push_section(section)?;
        }
        Ok(self.finish())
    }

    /// Current value of the alignment register.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Render one section.
    pub fn push_section(&mut self, section: &Section) -> Result<(), RenderError> {
        let registry = self.registry;
        let Some(rule) = registry.lookup(&section.type_tag) else {
            return match self.options.unknown_sections {
                UnknownSectionPolicy::Skip => {
                    tracing::debug!(type_tag = %section.type_tag, "skipping unknown section");
                    Ok(())
                }
                UnknownSectionPolicy::Error => {
                    Err(RenderError::UnknownSectionType(section.type_tag.clone()))
                }
            };
        };

        match rule.kind {
            SectionKind::Spacer => self.feed(section.line_count.unwrap_or(1)),
            SectionKind::Text => self.push_text(section, rule)?,
        }

        tracing::debug!(
            type_tag = %section.type_tag,
            alignment = ?self.alignment,
            ops = self.program.len(),
            "rendered section"
        );
        Ok(())
    }

    /// The program recorded so far.
    pub fn finish(self) -> Program {
        self.program
    }

    fn push_text(&mut self, section: &Section, rule: &SectionRule) -> Result<(), RenderError> {
        let alignment = section
            .alignment
            .or(rule.alignment)
            .unwrap_or(Alignment::Left);
        self.set_alignment(alignment);

        let content = self.content(section, rule)?;
        let style = effective_style(section, rule);

        if rule.multiline {
            for line in content.split('\n') {
                let line = line.strip_suffix('\r').unwrap_or(line);
                self.program.emit_text(line, style);
                self.program.feed_lines(1);
            }
        } else {
            self.program.emit_text(&content, style);
            if self.options.auto_feed {
                self.program.feed_lines(1);
            }
        }
        Ok(())
    }

    /// A single feed command moves at most 255 lines.
    fn feed(&mut self, mut lines: u32) {
        while lines > 0 {
            let chunk = u8::try_from(lines).unwrap_or(u8::MAX);
            self.program.feed_lines(chunk);
            lines -= u32::from(chunk);
        }
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
        self.program.set_alignment(alignment);
    }

    /// Order-bound types format order data; everything else is static text,
    /// optionally with placeholder tokens resolved.
    fn content<'s>(
        &self,
        section: &'s Section,
        rule: &'s SectionRule,
    ) -> Result<Cow<'s, str>, RenderError> {
        let written = section.content.as_deref().or(rule.content.as_deref());
        match rule.binding {
            Some(field) => self.order_content(field, written),
            None => Ok(self.template(written.unwrap_or(""))),
        }
    }

    /// Live order first; without one, the designer's text, then sample figures.
    fn order_content<'s>(
        &self,
        field: OrderField,
        written: Option<&'s str>,
    ) -> Result<Cow<'s, str>, RenderError> {
        let width = self.options.line_width;
        match (self.order, written) {
            (Some(order), _) => order.format(field, width).map(Cow::Owned),
            (None, Some(text)) => Ok(self.template(text)),
            (None, None) => Order::sample().format(field, width).map(Cow::Owned),
        }
    }

    fn template<'s>(&self, text: &'s str) -> Cow<'s, str> {
        if self.options.placeholders {
            tokens::resolve(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn effective_style(section: &Section, rule: &SectionRule) -> Option<TextStyle> {
    let explicit = section.style.unwrap_or_default();
    let bold = match rule.emphasis {
        Emphasis::AlwaysBold => true,
        Emphasis::Bold => explicit.bold.unwrap_or(true),
        Emphasis::Plain => explicit.bold.unwrap_or(false),
    };
    TextStyle {
        bold,
        size: explicit.size.unwrap_or(rule.size),
    }
    .non_plain()
}
