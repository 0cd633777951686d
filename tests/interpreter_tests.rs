//! # Interpreter Tests
//!
//! End-to-end runs over the receipt designer's templates (`tests/fixtures/`)
//! and the guarantees every interpretation call makes: document order,
//! silent skipping of unknown sections, and exactly one feed + cut at the
//! end, whether the layout rendered or failed.

use pretty_assertions::assert_eq;
use tillroll::config::{RenderConfig, RenderOptions, UnknownSectionPolicy};
use tillroll::interpreter::{Interpreter, interpret};
use tillroll::ir::{Op, Program, TextSize, TextStyle};
use tillroll::layout::{Alignment, Layout, NO_LAYOUT_MESSAGE, Section};
use tillroll::order::Order;
use tillroll::preview::TextPreview;
use tillroll::protocol::commands;

const ROUND1: &str = include_str!("fixtures/round1.json");
const ROUND2: &str = include_str!("fixtures/round2.json");
const ROUND3: &str = include_str!("fixtures/round3.json");

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn text(content: &str) -> Op {
    Op::Text {
        content: content.into(),
        style: None,
    }
}

fn bold(content: &str) -> Op {
    Op::Text {
        content: content.into(),
        style: Some(TextStyle::BOLD),
    }
}

fn assert_finalized_once(program: &Program) {
    let n = program.len();
    assert!(n >= 2);
    assert_eq!(&program.ops[n - 2..], &[Op::Feed { lines: 2 }, Op::Cut]);
    assert_eq!(program.iter().filter(|op| **op == Op::Cut).count(), 1);
}

// ============================================================================
// OUTPUT CONTRACT
// ============================================================================

#[test]
fn test_total_example() {
    let program = interpret(
        r#"{"layout":{"sections":[{"type":"total","content":"TOTAL: $30.19"}]}}"#,
        None,
    );
    assert_eq!(
        program.ops,
        vec![
            Op::SetAlign(Alignment::Left),
            bold("TOTAL: $30.19"),
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
    );
}

#[test]
fn test_no_layout_key() {
    let program = interpret(r#"{"printer": "kitchen"}"#, None);
    assert_eq!(
        program.ops,
        vec![
            Op::SetAlign(Alignment::Center),
            text(NO_LAYOUT_MESSAGE),
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
    );
}

#[test]
fn test_malformed_json_recovery() {
    let program = interpret(r#"{"layout": {"sections": [}"#, None);
    assert_eq!(program.len(), 4);
    assert_eq!(program.ops[0], Op::SetAlign(Alignment::Center));
    match &program.ops[1] {
        Op::Text { content, style } => {
            assert!(content.starts_with("ERROR: invalid JSON"), "{content}");
            assert_eq!(*style, Some(TextStyle::BOLD));
        }
        other => panic!("expected error text, got {other:?}"),
    }
    assert_finalized_once(&program);
}

#[test]
fn test_spacer_lines() {
    let program = interpret(r#"{"layout":{"sections":[{"type":"spacer","lines":3}]}}"#, None);
    assert_eq!(
        program.ops,
        vec![Op::Feed { lines: 3 }, Op::Feed { lines: 2 }, Op::Cut]
    );
}

#[test]
fn test_large_spacer_keeps_the_receipt() {
    let program = interpret(
        r#"{"layout":{"sections":[{"type":"text","content":"hi"},{"type":"spacer","lines":300}]}}"#,
        None,
    );
    assert_eq!(
        program.ops,
        vec![
            Op::SetAlign(Alignment::Left),
            text("hi"),
            Op::Feed { lines: 255 },
            Op::Feed { lines: 45 },
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
    );
}

#[test]
fn test_unknown_alignment_falls_back_to_type_default() {
    let program = interpret(
        r#"{"layout":{"sections":[
            {"type":"header","content":"BYTE BURGERS","alignment":"MIDDLE"},
            {"type":"thanks","alignment":"SIDEWAYS"},
            {"type":"total","content":"TOTAL: $30.19"}
        ]}}"#,
        None,
    );
    assert_eq!(
        program.ops,
        vec![
            Op::SetAlign(Alignment::Left),
            bold("BYTE BURGERS"),
            Op::SetAlign(Alignment::Center),
            text("Thank you!"),
            Op::Feed { lines: 1 },
            Op::SetAlign(Alignment::Left),
            bold("TOTAL: $30.19"),
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
    );
}

#[test]
fn test_multiline_thanks() {
    let program = interpret(
        r#"{"layout":{"sections":[{"type":"thanks","content":"Thank you!\nHave a great day!"}]}}"#,
        None,
    );
    assert_eq!(
        program.ops,
        vec![
            Op::SetAlign(Alignment::Center),
            text("Thank you!"),
            Op::Feed { lines: 1 },
            text("Have a great day!"),
            Op::Feed { lines: 1 },
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
    );
}

#[test]
fn test_unknown_sections_leave_no_gap() {
    let with_unknown = interpret(
        r#"{"layout":{"sections":[
            {"type":"header","content":"A"},
            {"type":"qrCode","content":"https://example.com"},
            {"type":"text","content":"B"},
            {"type":"confetti"}
        ]}}"#,
        None,
    );
    let without = interpret(
        r#"{"layout":{"sections":[
            {"type":"header","content":"A"},
            {"type":"text","content":"B"}
        ]}}"#,
        None,
    );
    assert_eq!(with_unknown, without);
}

#[test]
fn test_every_fixture_is_finalized_once() {
    for json in [ROUND1, ROUND2, ROUND3, "{}", "", "null", r#"{"layout":{"sections":[]}}"#] {
        assert_finalized_once(&interpret(json, None));
    }
}

// ============================================================================
// DESIGNER TEMPLATES
// ============================================================================

#[test]
fn test_round1_structure() {
    let program = interpret(ROUND1, None);
    // 19 single-line sections, 2 two-op thanks lines, 2 spacers, finalize
    assert_eq!(program.len(), 19 * 2 + 2 * 3 + 2 + 2);

    let lines = program.lines();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "================================");
    assert_eq!(lines[1], "BYTE BURGERS");
    assert_eq!(lines[4], "Order #A-0042   Date: 12/04/2024");
    assert_eq!(lines[16], "TOTAL:                  $30.19");

    assert_eq!(program.ops[2], Op::SetAlign(Alignment::Center));
    assert_eq!(program.ops[3], bold("BYTE BURGERS"));
}

#[test]
fn test_round1_preview() {
    let program = interpret(ROUND1, None);
    let preview = TextPreview::render(&program, 32);
    let lines: Vec<&str> = preview.lines().collect();
    assert_eq!(lines[0], "================================");
    assert_eq!(lines[1], "          BYTE BURGERS");
    assert_eq!(lines[2], "           Store #001");
    assert_eq!(lines.last(), Some(&"------------- cut --------------"));
}

#[test]
fn test_round2_with_live_order() {
    let order = Order::load(fixture_path("order_b1337.json")).unwrap();
    let program = interpret(ROUND2, Some(&order));
    let lines = program.lines();

    assert!(lines.contains(&"Order #B-1337   Date: 12/04/2024"));
    assert!(lines.contains(&"Subtotal:                 $28.97"));
    assert!(lines.contains(&"Tax (8.75%):               $2.53"));
    // item lines are static template text, not order-bound
    assert!(lines.contains(&"Chocolate Croissant     x2  $9.00"));
    assert!(lines.contains(&"Discounts:               -$3.00"));

    let total = program
        .iter()
        .find(|op| matches!(op, Op::Text { content, .. } if content.starts_with("TOTAL:")))
        .unwrap();
    assert_eq!(*total, bold("TOTAL:                    $26.50"));
}

#[test]
fn test_item_list_from_live_order() {
    let order = Order::load(fixture_path("order_b1337.json")).unwrap();
    let program = interpret(r#"{"layout":{"sections":[{"type":"itemList"}]}}"#, Some(&order));
    assert_eq!(
        program.lines(),
        vec![
            "Large Latte             x2 $11.98",
            "Chocolate Croissant     x2  $9.00",
            "Breakfast Sandwich      x1  $7.99",
        ]
    );
}

#[test]
fn test_round3_bytes() {
    let program = interpret(ROUND3, None);
    let bytes = program.to_bytes();

    let mut tail = commands::feed_lines(2);
    tail.extend(commands::cut_full_feed());
    assert!(bytes.ends_with(&tail));

    let needle = b"PIZZA PALACE\n";
    assert!(bytes.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn test_fixtures_round_trip() {
    for json in [ROUND1, ROUND2, ROUND3] {
        let layout = Layout::parse(json).unwrap();
        let reparsed = Layout::parse(&layout.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, layout);
    }
}

#[test]
fn test_layout_alignment_is_not_a_section_default() {
    let layout = Layout::parse(ROUND1).unwrap();
    assert_eq!(layout.alignment, Some(Alignment::Center));

    let program = interpret(
        r#"{"layout":{"alignment":"CENTER","sections":[{"type":"text","content":"x"}]}}"#,
        None,
    );
    assert_eq!(program.ops[0], Op::SetAlign(Alignment::Left));
}

// ============================================================================
// DIALECTS
// ============================================================================

#[test]
fn test_dialect_config() {
    let config = RenderConfig::load(fixture_path("dialect.json")).unwrap();
    assert!(config.options.auto_feed);
    assert_eq!(config.options.unknown_sections, UnknownSectionPolicy::Error);

    let interpreter = Interpreter::from_config(&config);
    let program = interpreter.interpret(ROUND1, None);
    // auto-feed adds one feed after each of the 19 single-line sections
    assert_eq!(program.len(), 19 * 3 + 2 * 3 + 2 + 2);

    let total = program
        .iter()
        .find(|op| matches!(op, Op::Text { content, .. } if content.starts_with("TOTAL:")))
        .unwrap();
    assert_eq!(
        *total,
        Op::Text {
            content: "TOTAL:                  $30.19".into(),
            style: Some(TextStyle {
                bold: true,
                size: TextSize::Large
            }),
        }
    );
}

#[test]
fn test_dialect_footer_and_strict_unknowns() {
    let config = RenderConfig::load(fixture_path("dialect.json")).unwrap();
    let interpreter = Interpreter::from_config(&config);

    let footer = interpreter.interpret_layout(&Layout::new(vec![Section::new("footer")]), None);
    assert_eq!(
        footer.ops,
        vec![
            Op::SetAlign(Alignment::Center),
            text("Powered by tillroll"),
            Op::Feed { lines: 1 },
            Op::Feed { lines: 2 },
            Op::Cut,
        ]
    );

    let renamed = ROUND1.replace("\"itemHeader\"", "\"itemHeading\"");
    let strict = interpreter.interpret(&renamed, None);
    assert_eq!(strict.lines(), vec!["ERROR: unknown section type: itemHeading"]);
    assert_finalized_once(&strict);
}

#[test]
fn test_options_without_placeholders() {
    let interpreter = Interpreter::new(RenderOptions {
        placeholders: false,
        ..Default::default()
    });
    let program = interpreter.interpret(
        r#"{"layout":{"sections":[{"type":"header","content":"{store_name}"}]}}"#,
        None,
    );
    assert_eq!(program.lines(), vec!["{store_name}"]);
}
