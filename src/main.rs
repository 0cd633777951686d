//! # Tillroll CLI
//!
//! Command-line interface for the receipt layout interpreter.
//!
//! ## Usage
//!
//! ```bash
//! # Preview a layout as text
//! tillroll print tests/fixtures/round1.json
//!
//! # Merge a live order and send to the printer
//! tillroll print layout.json --order order.json --device /dev/usb/lp0
//!
//! # Dump the printer primitives
//! tillroll print layout.json --ops
//!
//! # Stricter dialect: unknown section types fail the receipt
//! tillroll print layout.json --strict --auto-feed
//!
//! # List the section types
//! tillroll types
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `tillroll=info`).

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tillroll::{
    Interpreter, Order, RenderConfig, TillrollError,
    config::UnknownSectionPolicy,
    layout::{Registry, SectionKind},
    preview::TextPreview,
    transport::DeviceTransport,
};

/// Tillroll - receipt layout interpreter
#[derive(Parser, Debug)]
#[command(name = "tillroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpret a layout and print it
    Print {
        /// Layout JSON file ("-" reads stdin)
        layout: PathBuf,

        /// Order JSON file merged into order-bound sections
        #[arg(long, value_name = "FILE")]
        order: Option<PathBuf>,

        /// Config file with options and section type overrides
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Feed one line after every single-line section
        #[arg(long)]
        auto_feed: bool,

        /// Fail the receipt on unknown section types
        #[arg(long)]
        strict: bool,

        /// Print {token} placeholders verbatim
        #[arg(long)]
        no_placeholders: bool,

        /// Line width in characters
        #[arg(long)]
        width: Option<usize>,

        /// Printer device path; without it the receipt is previewed
        #[arg(long, value_name = "PATH")]
        device: Option<PathBuf>,

        /// Show a text preview (also when sending to a device)
        #[arg(long)]
        preview: bool,

        /// Dump printer primitives
        #[arg(long)]
        ops: bool,
    },

    /// List the known section types
    Types {
        /// Config file with section type overrides
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TillrollError> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            layout,
            order,
            config,
            auto_feed,
            strict,
            no_placeholders,
            width,
            device,
            preview,
            ops,
        } => {
            let mut config = load_config(config.as_deref())?;
            let options = &mut config.options;
            options.auto_feed |= auto_feed;
            options.placeholders &= !no_placeholders;
            if strict {
                options.unknown_sections = UnknownSectionPolicy::Error;
            }
            if let Some(width) = width {
                options.line_width = width;
            }

            let json = read_layout(&layout)?;
            let order = order.map(Order::load).transpose()?;

            let interpreter = Interpreter::from_config(&config);
            let program = interpreter.interpret(&json, order.as_ref());

            if ops {
                for op in &program {
                    println!("{:?}", op);
                }
            }

            if preview || (device.is_none() && !ops) {
                print!("{}", TextPreview::render(&program, config.options.line_width));
            }

            if let Some(device) = device {
                let mut transport = DeviceTransport::open(&device)?;
                transport.send(&program)?;
                tracing::info!(device = %device.display(), "printed");
            }

            Ok(())
        }

        Commands::Types { config } => {
            let config = load_config(config.as_deref())?;
            print_types(&config.registry());
            Ok(())
        }
    }
}

fn init_logging() -> Result<(), TillrollError> {
    let directive = "tillroll=info"
        .parse::<Directive>()
        .map_err(|e| TillrollError::Config(e.to_string()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, TillrollError> {
    match path {
        Some(path) => RenderConfig::load(path),
        None => Ok(RenderConfig::default()),
    }
}

fn read_layout(path: &Path) -> Result<String, TillrollError> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn print_types(registry: &Registry) {
    println!("Section types ({}):", registry.len());
    for tag in registry.type_tags() {
        let Some(rule) = registry.lookup(tag) else {
            continue;
        };
        let mut notes = Vec::new();
        if rule.kind == SectionKind::Spacer {
            notes.push("spacer".to_string());
        }
        if let Some(alignment) = rule.alignment {
            notes.push(format!("{:?}", alignment).to_lowercase());
        }
        if rule.emphasis != Default::default() {
            notes.push(format!("{:?}", rule.emphasis).to_lowercase());
        }
        if rule.multiline {
            notes.push("multiline".to_string());
        }
        if let Some(field) = rule.binding {
            notes.push(format!("order:{}", field.key()));
        }
        println!("  {:<22} {}", tag, notes.join(", "));
    }
}
