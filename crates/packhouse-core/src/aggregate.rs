//! # Order Aggregator
//!
//! Folds per-line packing results into order-level totals, and offers
//! the batch convenience that resolves + calculates + folds a whole
//! order in one call.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Calculation                               │
//! │                                                                         │
//! │  (product, quantity, overrides) ──► resolve_config ──► calculate_line  │
//! │  (product, quantity, overrides) ──► resolve_config ──► calculate_line  │
//! │  (product, quantity, overrides) ──► resolve_config ──► calculate_line  │
//! │                                                              │          │
//! │                                                              ▼          │
//! │                                              aggregate ──► OrderTotals │
//! │                                                                         │
//! │  Pure left-fold: no branching logic of its own, no failure modes.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::{calculate_line, LineResult, Quantity};
use crate::config::{resolve_config, LineOverrides};
use crate::error::CoreResult;
use crate::rules::find_rule;
use crate::types::{CustomerPackagingRule, ProductDefinition};
use crate::weight::{TrayCount, Weight};

// =============================================================================
// Order Totals
// =============================================================================

/// Order-level packing totals, derived purely by summation.
///
/// No independent invariants beyond "equals the sum of the line
/// results that produced it". `item_count` counts LINES, not units:
/// a zero-quantity line still represents an item on the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Total actual packed weight.
    pub weight: Weight,

    /// Total trays across all lines.
    pub trays: TrayCount,

    /// Total tubs across all lines.
    pub tubs: u32,

    /// Total shipping boxes across all lines.
    pub boxes: u32,

    /// Number of line items (including unfilled ones).
    pub item_count: u32,
}

impl OrderTotals {
    /// Labels to print for this order: one per tray, tub and box.
    /// A partial tray under the exact rounding policy still gets its
    /// own label.
    pub fn label_count(&self) -> i64 {
        self.trays.ceil_whole() + self.tubs as i64 + self.boxes as i64
    }
}

/// Sums line results into order totals. Empty input yields all-zero
/// totals; callers wishing to exclude unfilled lines from the item
/// count must filter before aggregating.
pub fn aggregate(lines: &[LineResult]) -> OrderTotals {
    lines.iter().fold(OrderTotals::default(), |mut totals, line| {
        totals.weight += line.weight;
        totals.trays += line.trays;
        totals.tubs += line.tubs;
        totals.boxes += line.boxes;
        totals.item_count += 1;
        totals
    })
}

// =============================================================================
// Batch Calculation
// =============================================================================

/// One order line awaiting calculation.
#[derive(Debug, Clone)]
pub struct OrderItemInput<'a> {
    pub product: &'a ProductDefinition,
    pub quantity: Quantity,
    pub overrides: LineOverrides,
}

/// A fully calculated order: every line plus the fold of all lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderCalculation {
    pub lines: Vec<LineResult>,
    pub totals: OrderTotals,
}

/// Resolves, calculates and aggregates a whole order for one customer.
///
/// Each line looks up the customer's rule for its product (exact
/// product rule first, then the customer-level default) and resolves
/// its own effective config, so different lines of the same order can
/// legitimately pack differently.
///
/// Each line resolves against the unit its quantity is actually
/// expressed in, so the piece-ordering legality check in
/// [`resolve_config`] sees the real unit (a piece order against a
/// tub-packed sausage fails here instead of silently taking the tray
/// path).
///
/// Fails fast on the first line whose configuration cannot be
/// resolved; a partial order would mislabel the load.
pub fn calculate_order(
    customer_id: &str,
    items: &[OrderItemInput<'_>],
    rules: &[CustomerPackagingRule],
) -> CoreResult<OrderCalculation> {
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let rule = find_rule(customer_id, &item.product.id, rules);
        let mut overrides = item.overrides.clone();
        if overrides.order_unit.is_none() {
            overrides.order_unit = Some(item.quantity.unit());
        }
        let config = resolve_config(item.product, rule, &overrides)?;
        lines.push(calculate_line(&config, item.quantity));
    }

    let totals = aggregate(&lines);
    Ok(OrderCalculation { lines, totals })
}

// =============================================================================
// Unit Tests
// =============================================================================
