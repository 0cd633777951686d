//! # Placeholder Tokens
//!
//! Template content may carry `{token}` placeholders, e.g.
//! `"Welcome to {store_name}!"`. Known tokens resolve to fixed sample values
//! (consistent with [`crate::order::Order::sample`]); anything else, unknown
//! names and stray braces included, is printed verbatim.

use std::borrow::Cow;

/// Known tokens and their sample values.
pub const SAMPLE_TOKENS: &[(&str, &str)] = &[
    ("store_name", "BYTE BURGERS"),
    ("store_number", "Store #001"),
    ("order_number", "A-0042"),
    ("date", "12/04/2024"),
    ("time", "12:30 PM"),
    ("item_count", "5"),
    ("subtotal", "$27.95"),
    ("tax_rate", "8.0%"),
    ("tax", "$2.24"),
    ("total", "$30.19"),
    ("customer_name", "John Doe"),
    ("customer_id", "CUST-8826"),
    ("member_status", "GOLD"),
    ("member_since", "2019-03-15"),
    ("loyalty_points", "1,247"),
    ("points_earned", "40"),
    ("payment_method", "VISA ****1234"),
];

/// Look up a single token name (without braces).
pub fn lookup(name: &str) -> Option<&'static str> {
    SAMPLE_TOKENS
        .iter()
        .find(|(token, _)| *token == name)
        .map(|(_, value)| *value)
}

/// Replace every known `{token}` in `text`.
///
/// Borrows when nothing was replaced.
///
/// ```
/// use tillroll::tokens::resolve;
///
/// assert_eq!(resolve("Order #{order_number}"), "Order #A-0042");
/// assert_eq!(resolve("{unknown} stays"), "{unknown} stays");
/// ```
pub fn resolve(text: &str) -> Cow<'_, str> {
    if !text.contains('{') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut replaced = false;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_token_name(&after[..close]) => match lookup(&after[..close]) {
                Some(value) => {
                    out.push_str(value);
                    replaced = true;
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..open + close + 2]);
                    rest = &after[close + 1..];
                }
            },
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if replaced {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
