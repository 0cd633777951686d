//! # Interpreter
//!
//! One interpretation call: parse, render, finalize. The whole pipeline runs
//! inside a single boundary, so every call yields a complete program that
//! ends in exactly one feed and one cut.
//!
//! ```text
//! JSON text ─► Layout::parse ─► Renderer ─► body ─┐
//!                    │              │              ├─► finalize (feed 2, cut)
//!                    └── error / panic ─► recovery ┘
//! ```
//!
//! On failure nothing from the partial body survives; the recovery body is a
//! centered bold `ERROR: <message>` line.
//!
//! ```
//! use tillroll::interpreter::interpret;
//! use tillroll::ir::Op;
//!
//! let program = interpret("{not json", None);
//! assert!(program.lines()[0].starts_with("ERROR: invalid JSON"));
//! assert_eq!(program.ops.last(), Some(&Op::Cut));
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::{RenderConfig, RenderOptions};
use crate::error::TillrollError;
use crate::ir::{Printer, Program, TextStyle};
use crate::layout::{Alignment, Layout, NO_LAYOUT_MESSAGE, Registry};
use crate::order::Order;
use crate::render::{Renderer, finalize};

/// Prefix of the recovery line.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// A configured layout interpreter.
///
/// Holds no per-call state; one value can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    registry: Registry,
    options: RenderOptions,
}

impl Interpreter {
    /// Standard vocabulary with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            registry: Registry::standard(),
            options,
        }
    }

    /// Options and section types from a config file.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            registry: config.registry(),
            options: config.options,
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Parse and render the body of a receipt, without the final feed/cut.
    ///
    /// This is the unguarded pipeline; errors are returned, not printed.
    ///
    /// A document without a `layout` key renders the fixed notice from
    /// [`no_layout`], whatever the registry holds.
    pub fn try_render(&self, json: &str, order: Option<&Order>) -> Result<Program, TillrollError> {
        match Layout::parse_document(json)? {
            Some(layout) => self.try_render_layout(&layout, order),
            None => Ok(no_layout()),
        }
    }

    /// Render the body of an already-parsed layout.
    pub fn try_render_layout(
        &self,
        layout: &Layout,
        order: Option<&Order>,
    ) -> Result<Program, TillrollError> {
        let program = Renderer::new(&self.registry, self.options)
            .with_order(order)
            .render(layout)?;
        Ok(program)
    }

    /// Interpret JSON layout text into a complete, finalized program.
    ///
    /// Never fails: any error, or a panic inside the pipeline, is replaced by
    /// the recovery receipt.
    pub fn interpret(&self, json: &str, order: Option<&Order>) -> Program {
        guarded(|| self.try_render(json, order))
    }

    /// [`Interpreter::interpret`] for a layout built in code.
    pub fn interpret_layout(&self, layout: &Layout, order: Option<&Order>) -> Program {
        guarded(|| self.try_render_layout(layout, order))
    }

    /// Interpret and replay the result on a printer.
    ///
    /// The printer sees nothing until the program is complete.
    pub fn print<P: Printer + ?Sized>(&self, json: &str, order: Option<&Order>, printer: &mut P) {
        self.interpret(json, order).replay(printer);
    }
}

/// Interpret with the standard vocabulary and default options.
pub fn interpret(json: &str, order: Option<&Order>) -> Program {
    Interpreter::default().interpret(json, order)
}

/// The body printed for a document without a `layout`.
pub fn no_layout() -> Program {
    let mut program = Program::new();
    program.set_alignment(Alignment::Center);
    program.emit_text(NO_LAYOUT_MESSAGE, None);
    program
}

/// The body printed in place of a failed run.
pub fn recovery(error: &TillrollError) -> Program {
    let mut program = Program::new();
    program.set_alignment(Alignment::Center);
    program.emit_text(&format!("{}{}", ERROR_PREFIX, error), Some(TextStyle::BOLD));
    program
}

fn guarded<F>(run: F) -> Program
where
    F: FnOnce() -> Result<Program, TillrollError>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(run))
        .unwrap_or_else(|payload| Err(TillrollError::Internal(panic_message(payload.as_ref()))));

    let mut program = match outcome {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(%error, "layout failed, printing recovery receipt");
            recovery(&error)
        }
    };
    finalize(&mut program);
    program
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}
