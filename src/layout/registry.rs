//! # Section Type Registry
//!
//! Maps a section's `type` tag to its [`SectionRule`]: default alignment,
//! default content, emphasis, multiline expansion and order binding.
//!
//! The vocabulary is data, not control flow. The standard table below groups
//! tags that share a rule; a dialect that needs different behaviour edits or
//! extends the table ([`Registry::with_rule`], or `section_types` in a
//! config file) instead of adding branches to the renderer.
//!
//! ```
//! use tillroll::layout::registry::{Emphasis, Registry};
//!
//! let registry = Registry::standard();
//! assert_eq!(registry.lookup("total").unwrap().emphasis, Emphasis::AlwaysBold);
//! assert!(registry.lookup("hologram").is_none());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ir::TextSize;
use crate::order::OrderField;
use crate::protocol::text::Alignment;

/// How a section is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Alignment, then one or more text lines.
    #[default]
    Text,
    /// Blank-line feed only.
    Spacer,
}

/// Default emphasis of a section type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    Plain,
    /// Bold unless the section's style says otherwise.
    Bold,
    /// Bold regardless of the section's style.
    AlwaysBold,
}

/// Rendering rule for one section type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionRule {
    pub kind: SectionKind,
    pub alignment: Option<Alignment>,
    /// Printed when the section has no `content`.
    pub content: Option<String>,
    pub emphasis: Emphasis,
    pub size: TextSize,
    /// Split content on newlines, one text line and one feed per line.
    pub multiline: bool,
    /// Order field that replaces the section's content when an order is supplied.
    pub binding: Option<OrderField>,
}

/// Const form of a rule, for the built-in table.
#[derive(Clone, Copy)]
struct RuleSpec {
    kind: SectionKind,
    alignment: Option<Alignment>,
    content: Option<&'static str>,
    emphasis: Emphasis,
    multiline: bool,
    binding: Option<OrderField>,
}

impl RuleSpec {
    const LINE: RuleSpec = RuleSpec {
        kind: SectionKind::Text,
        alignment: None,
        content: None,
        emphasis: Emphasis::Plain,
        multiline: false,
        binding: None,
    };

    const SPACER: RuleSpec = RuleSpec {
        kind: SectionKind::Spacer,
        ..RuleSpec::LINE
    };

    const fn center(self) -> Self {
        RuleSpec {
            alignment: Some(Alignment::Center),
            ..self
        }
    }

    const fn content(self, content: &'static str) -> Self {
        RuleSpec {
            content: Some(content),
            ..self
        }
    }

    const fn emphasis(self, emphasis: Emphasis) -> Self {
        RuleSpec { emphasis, ..self }
    }

    const fn multiline(self) -> Self {
        RuleSpec {
            multiline: true,
            ..self
        }
    }

    const fn bind(self, field: OrderField) -> Self {
        RuleSpec {
            binding: Some(field),
            ..self
        }
    }
}

impl From<RuleSpec> for SectionRule {
    fn from(spec: RuleSpec) -> Self {
        SectionRule {
            kind: spec.kind,
            alignment: spec.alignment,
            content: spec.content.map(str::to_string),
            emphasis: spec.emphasis,
            size: TextSize::Normal,
            multiline: spec.multiline,
            binding: spec.binding,
        }
    }
}

// ============================================================================
// STANDARD VOCABULARY
// ============================================================================

const SEPARATOR: &str = "================================";

/// Plain label/value lines: store, customer, loyalty, payment and split-bill
/// fields. Written by the designer with their final text.
const LEAF_LINES: &[&str] = &[
    "item",
    "itemPrice",
    "itemPromotion",
    "discounts",
    "promotion",
    "subtotalAfter",
    "loyalty",
    "customerName",
    "memberStatus",
    "customerId",
    "loyaltyPoints",
    "memberSince",
    "paymentMethod",
    "pointsEarned",
    "totalPoints",
    "membershipStatus",
    "customerProfile",
    "itemSubtotal",
    "itemDiscounts",
    "memberAppreciation",
    "appDiscount",
    "subtotalAfterAll",
    "paymentType",
    "pointsEarnedToday",
    "newBalance",
    "nextReward",
    "personalizedThanks",
    "tableInfo",
    "guestInfo",
    "groupId",
    "itemModifier",
    "payerName",
    "payingFor",
    "payerItem",
    "tip",
    "payerTotal",
    "totalTips",
    "grandTotal",
    "vipThanks",
];

/// Headings that open a block of lines.
const BLOCK_HEADERS: &[&str] = &[
    "itemHeader",
    "promotionHeader",
    "customerHeader",
    "loyaltyRewardsHeader",
    "platinumMember",
    "orderItemsHeader",
    "categoryHeader",
    "orderPromotionHeader",
    "rewardsSummary",
    "vipGroup",
    "orderDetails",
    "entreeHeader",
    "appetizerHeader",
    "dessertHeader",
    "beverageHeader",
    "splitPaymentHeader",
    "paymentSummaryHeader",
];

/// The standard table: (type tags, shared rule).
const STANDARD_RULES: &[(&[&str], RuleSpec)] = &[
    (&["header", "storeHeader"], RuleSpec::LINE.emphasis(Emphasis::Bold)),
    (&["separator"], RuleSpec::LINE.content(SEPARATOR)),
    (&["text"], RuleSpec::LINE),
    (LEAF_LINES, RuleSpec::LINE),
    (&["orderInfo"], RuleSpec::LINE.bind(OrderField::OrderInfo)),
    (
        &["itemList"],
        RuleSpec::LINE.multiline().bind(OrderField::ItemList),
    ),
    (&["subtotal"], RuleSpec::LINE.bind(OrderField::Subtotal)),
    (&["tax"], RuleSpec::LINE.bind(OrderField::Tax)),
    (
        &["total"],
        RuleSpec::LINE
            .emphasis(Emphasis::AlwaysBold)
            .bind(OrderField::Total),
    ),
    (BLOCK_HEADERS, RuleSpec::LINE),
    (
        &["thankYou", "thanks"],
        RuleSpec::LINE.center().content("Thank you!").multiline(),
    ),
    (&["spacer"], RuleSpec::SPACER),
];

// ============================================================================
// REGISTRY
// ============================================================================

/// Section type vocabulary.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: HashMap<String, SectionRule>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Registry {
    /// An empty registry: every section is unknown.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// The standard receipt-designer vocabulary.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for (tags, spec) in STANDARD_RULES {
            for tag in *tags {
                registry.insert(*tag, SectionRule::from(*spec));
            }
        }
        registry
    }

    /// Rule for a type tag. `None` means the section is unknown.
    pub fn lookup(&self, type_tag: &str) -> Option<&SectionRule> {
        self.rules.get(type_tag)
    }

    /// Add or replace a rule.
    pub fn insert(&mut self, type_tag: impl Into<String>, rule: SectionRule) {
        self.rules.insert(type_tag.into(), rule);
    }

    /// Builder form of [`Registry::insert`].
    pub fn with_rule(mut self, type_tag: impl Into<String>, rule: SectionRule) -> Self {
        self.insert(type_tag, rule);
        self
    }

    /// All known type tags, sorted.
    pub fn type_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_vocabulary_size() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 68);
        assert_eq!(registry.type_tags().len(), 68);
    }

    #[test]
    fn test_no_tag_is_listed_twice() {
        let mut seen = std::collections::HashSet::new();
        for (tags, _) in STANDARD_RULES {
            for tag in *tags {
                assert!(seen.insert(*tag), "duplicate tag {tag}");
            }
        }
    }

    #[test]
    fn test_amount_lines_share_a_plain_rule() {
        let registry = Registry::standard();
        let item_price = registry.lookup("itemPrice").unwrap();
        assert_eq!(item_price, registry.lookup("discounts").unwrap());
        assert_eq!(item_price.emphasis, Emphasis::Plain);
        assert_eq!(item_price.alignment, None);
    }

    #[test]
    fn test_total_is_always_bold_and_bound() {
        let total = Registry::standard().lookup("total").cloned().unwrap();
        assert_eq!(total.emphasis, Emphasis::AlwaysBold);
        assert_eq!(total.binding, Some(OrderField::Total));
    }

    #[test]
    fn test_thanks_defaults() {
        let registry = Registry::standard();
        let thanks = registry.lookup("thanks").unwrap();
        assert_eq!(thanks.alignment, Some(Alignment::Center));
        assert_eq!(thanks.content.as_deref(), Some("Thank you!"));
        assert!(thanks.multiline);
        assert_eq!(thanks, registry.lookup("thankYou").unwrap());
    }

    #[test]
    fn test_separator_default_content() {
        let registry = Registry::standard();
        let separator = registry.lookup("separator").unwrap();
        assert_eq!(separator.content.as_deref(), Some(SEPARATOR));
        assert_eq!(SEPARATOR.len(), 32);
    }

    #[test]
    fn test_spacer_kind() {
        assert_eq!(
            Registry::standard().lookup("spacer").unwrap().kind,
            SectionKind::Spacer
        );
    }

    #[test]
    fn test_with_rule_adds_a_type() {
        let registry = Registry::standard().with_rule(
            "footer",
            SectionRule {
                alignment: Some(Alignment::Right),
                content: Some("Powered by tillroll".into()),
                ..Default::default()
            },
        );
        assert_eq!(registry.len(), 69);
        assert_eq!(
            registry.lookup("footer").unwrap().alignment,
            Some(Alignment::Right)
        );
    }

    #[test]
    fn test_rule_deserializes_with_defaults() {
        let rule: SectionRule =
            serde_json::from_str(r#"{"alignment": "CENTER", "emphasis": "always_bold", "binding": "total"}"#)
                .unwrap();
        assert_eq!(rule.kind, SectionKind::Text);
        assert_eq!(rule.emphasis, Emphasis::AlwaysBold);
        assert_eq!(rule.binding, Some(OrderField::Total));
        assert!(!rule.multiline);
    }
}
