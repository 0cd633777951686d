//! # Order Context
//!
//! Live transaction data merged into order-bound sections (`orderInfo`,
//! `itemList`, `subtotal`, `tax`, `total`). The interpreter never computes
//! figures itself; it formats what the point-of-sale hands over.
//!
//! Orders deserialize from the camelCase JSON used by the POS:
//!
//! ```
//! use tillroll::order::{Order, OrderField};
//!
//! let order: Order = serde_json::from_str(r#"{
//!     "orderId": "B-1337",
//!     "items": [{"name": "Large Latte", "quantity": 2, "unitPrice": 5.99, "totalPrice": 11.98}],
//!     "subtotal": 11.98, "taxAmount": 1.05, "totalAmount": 13.03
//! }"#).unwrap();
//!
//! assert_eq!(order.format(OrderField::Total, 32).unwrap(), "TOTAL:                    $13.03");
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TillrollError;
use crate::render::RenderError;

/// Column reserved for `x<qty>` plus the right-aligned price on item lines.
const ITEM_PRICE_COLUMNS: usize = 8;

/// Order fields a section type can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    OrderInfo,
    ItemList,
    Subtotal,
    Tax,
    Total,
}

impl OrderField {
    /// JSON name of the order field, used in error messages.
    pub fn key(self) -> &'static str {
        match self {
            OrderField::OrderInfo => "orderId",
            OrderField::ItemList => "items",
            OrderField::Subtotal => "subtotal",
            OrderField::Tax => "taxAmount",
            OrderField::Total => "totalAmount",
        }
    }
}

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64, total_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            total_price,
        }
    }
}

/// Live order data for one receipt.
///
/// Scalar fields are optional so that a partially filled order can still be
/// parsed; a bound section whose field is missing fails at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    /// Percentage shown in the tax label, e.g. `8.0`.
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub tax_amount: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl Order {
    /// The illustrative order printed when no live order is supplied.
    pub fn sample() -> Order {
        Order {
            order_id: Some("A-0042".into()),
            date: NaiveDate::from_ymd_opt(2024, 12, 4),
            items: vec![
                OrderItem::new("Cheeseburger", 2, 8.99, 17.98),
                OrderItem::new("French Fries", 1, 3.99, 3.99),
                OrderItem::new("Soft Drink", 2, 2.99, 5.98),
            ],
            subtotal: Some(27.95),
            tax_rate: Some(8.0),
            tax_amount: Some(2.24),
            total_amount: Some(30.19),
        }
    }

    /// Read an order from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Order, TillrollError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TillrollError::Order(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| TillrollError::Order(format!("{}: {}", path.display(), e)))
    }

    /// Render one bound field as receipt text for a `width`-column line.
    ///
    /// `ItemList` yields one line per item, joined with `\n`.
    pub fn format(&self, field: OrderField, width: usize) -> Result<String, RenderError> {
        match field {
            OrderField::OrderInfo => {
                let id = self.require(field, self.order_id.as_deref())?;
                Ok(match self.date {
                    Some(date) => format!("Order #{}   Date: {}", id, date.format("%m/%d/%Y")),
                    None => format!("Order #{}", id),
                })
            }
            OrderField::ItemList => {
                let lines = self
                    .items
                    .iter()
                    .map(|item| item_line(item, width))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(lines.join("\n"))
            }
            OrderField::Subtotal => {
                let amount = self.require(field, self.subtotal)?;
                Ok(columns("Subtotal:", &money(field, amount)?, width))
            }
            OrderField::Tax => {
                let amount = self.require(field, self.tax_amount)?;
                let label = match self.tax_rate {
                    Some(rate) => format!("Tax ({}%):", format_rate(rate)),
                    None => "Tax:".to_string(),
                };
                Ok(columns(&label, &money(field, amount)?, width))
            }
            OrderField::Total => {
                let amount = self.require(field, self.total_amount)?;
                Ok(columns("TOTAL:", &money(field, amount)?, width))
            }
        }
    }

    fn require<T>(&self, field: OrderField, value: Option<T>) -> Result<T, RenderError> {
        value.ok_or(RenderError::MissingOrderField { field: field.key() })
    }
}

/// Format a currency amount with exactly two fraction digits.
///
/// Negative amounts print as `-$3.00`.
pub fn format_money(amount: f64) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }
    let cents = (amount.abs() * 100.0).round() / 100.0;
    if amount < 0.0 && cents > 0.0 {
        Some(format!("-${:.2}", cents))
    } else {
        Some(format!("${:.2}", cents))
    }
}

/// `8.0`, `8.75`: at least one and at most two fraction digits.
fn format_rate(rate: f64) -> String {
    let mut text = format!("{:.2}", rate);
    if text.ends_with('0') {
        text.pop();
    }
    text
}

fn money(field: OrderField, amount: f64) -> Result<String, RenderError> {
    format_money(amount).ok_or(RenderError::InvalidAmount {
        field: field.key(),
        amount,
    })
}

/// Left label, right value, padded to `width` columns.
///
/// Never truncates: when both sides don't fit they are separated by one space.
pub fn columns(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(padding), right)
}

/// `Cheeseburger            x2 $17.98`
fn item_line(item: &OrderItem, width: usize) -> Result<String, RenderError> {
    let price = money(OrderField::ItemList, item.total_price)?;
    let name_width = width.saturating_sub(ITEM_PRICE_COLUMNS).max(1);
    let name: String = item.name.chars().take(name_width - 1).collect();
    Ok(format!(
        "{:<name_width$}x{}{:>7}",
        name,
        item.quantity,
        price,
        name_width = name_width
    ))
}
