//! # Packaging Config Builder
//!
//! Merges product defaults with an optional customer rule and optional
//! per-line overrides into the effective config the calculator runs on.
//!
//! ## Resolution Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Field Resolution (highest precedence first)                │
//! │                                                                         │
//! │  (a) Line override   - user toggled pack type / tub size for one item  │
//! │        │ absent?                                                        │
//! │        ▼                                                                │
//! │  (b) Customer rule   - the customer's standing packaging agreement     │
//! │        │ absent?                                                        │
//! │        ▼                                                                │
//! │  (c) Product default - catalog packaging attributes                    │
//! │        │ absent?                                                        │
//! │        ▼                                                                │
//! │  (d) System default  - hard-coded constants (0.4 kg trays, 20/box...)  │
//! │                                                                         │
//! │  A field that resolves to zero/negative from ANY source is a           │
//! │  ConfigError - never a silent zero (zero tray weight = division by     │
//! │  zero downstream).                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function over immutable inputs: no side effects, no caching.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ConfigError, CoreResult, UnitMismatchError};
use crate::types::{
    CustomerPackagingRule, OrderUnit, PackType, ProductCategory, ProductDefinition,
    RoundingPolicy, TubSize,
};
use crate::weight::Weight;
use crate::{
    DEFAULT_BURGER_TRAYS_PER_BOX, DEFAULT_DEEP_TUBS_PER_BOX, DEFAULT_PATTIES_PER_TRAY,
    DEFAULT_PATTY_WEIGHT, DEFAULT_SHALLOW_TUBS_PER_BOX, DEFAULT_TRAYS_PER_BOX,
    DEFAULT_TRAY_WEIGHT,
};

// =============================================================================
// Line Overrides
// =============================================================================

/// Per-line caller selections that take precedence over stored rules
/// for a single calculation (the pack-type / tub-size / use-boxes
/// toggles on the order screen).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineOverrides {
    /// Pack this line in trays or tubs, regardless of the stored rule.
    pub pack_type: Option<PackType>,

    /// Interpret the quantity in this unit.
    pub order_unit: Option<OrderUnit>,

    /// Tub size for this line.
    pub tub_size: Option<TubSize>,

    /// Skip shipping boxes for this line.
    pub skip_boxes: Option<bool>,
}

impl LineOverrides {
    /// No overrides: resolution starts at the customer rule.
    pub fn none() -> Self {
        LineOverrides::default()
    }
}

// =============================================================================
// Effective Config
// =============================================================================

/// The resolved, calculation-ready packaging parameters for one line.
///
/// Ephemeral: recomputed per calculation call, never persisted as-is.
/// Callers persist a snapshot of the RESULT, not of this struct.
///
/// ## Invariants (enforced by [`resolve_config`])
/// - `tray_weight` and `tub_weight` are strictly positive
/// - `trays_per_box`, `tubs_per_box` and `round_to_multiple` are >= 1
/// - `count_per_tub` is `Some` only for meatball products, and positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    /// Product identity snapshot, carried into the result.
    pub product_id: String,
    pub product_name: String,
    pub category: ProductCategory,

    pub pack_type: PackType,
    pub order_unit: OrderUnit,
    pub tub_size: TubSize,

    pub tray_weight: Weight,
    pub trays_per_box: u32,

    /// Fill weight of one tub of the effective size.
    pub tub_weight: Weight,
    pub tubs_per_box: u32,

    /// Pieces per tub; present only for meatballs.
    pub count_per_tub: Option<u32>,

    pub rounding: RoundingPolicy,
    /// Always >= 1; only consulted by the `Down` policy.
    pub round_to_multiple: u32,

    pub skip_boxes: bool,
}

// =============================================================================
// System Defaults (per category)
// =============================================================================

/// System-default tray weight. Burger trays are patty-based:
/// 10 patties × 0.1 kg = 1.0 kg per tray. Everything else packs the
/// standard 0.4 kg sausage tray.
fn system_tray_weight(category: ProductCategory) -> Weight {
    match category {
        ProductCategory::Burger => DEFAULT_PATTY_WEIGHT * DEFAULT_PATTIES_PER_TRAY,
        _ => DEFAULT_TRAY_WEIGHT,
    }
}

/// System-default trays per box. Burger trays are heavier, so fewer
/// fit a box.
fn system_trays_per_box(category: ProductCategory) -> u32 {
    match category {
        ProductCategory::Burger => DEFAULT_BURGER_TRAYS_PER_BOX,
        _ => DEFAULT_TRAYS_PER_BOX,
    }
}

/// System-default tubs per box: deep tubs pack 3, shallow tubs pack 7.
fn system_tubs_per_box(size: TubSize) -> u32 {
    if size.is_deep() {
        DEFAULT_DEEP_TUBS_PER_BOX
    } else {
        DEFAULT_SHALLOW_TUBS_PER_BOX
    }
}

// =============================================================================
// Resolution
// =============================================================================

fn positive_weight(product_id: &str, field: &str, value: Weight) -> Result<Weight, ConfigError> {
    if value.is_positive() {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive {
            product_id: product_id.to_string(),
            field: field.to_string(),
            value: value.grams(),
        })
    }
}

fn positive_count(product_id: &str, field: &str, value: u32) -> Result<u32, ConfigError> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive {
            product_id: product_id.to_string(),
            field: field.to_string(),
            value: value as i64,
        })
    }
}

/// Resolves the effective packaging config for one order line.
///
/// `rule` is the customer's rule for this product (or their
/// customer-level default) as returned by [`crate::rules::find_rule`];
/// `None` falls straight through to product/system defaults.
///
/// ## Errors
/// - [`ConfigError`] when a required numeric parameter is missing from
///   every source or resolves non-positive
/// - [`UnitMismatchError`] when the effective order unit cannot apply
///   to the product's packaging (piece ordering against a tub-packed
///   product with no per-piece packaging)
pub fn resolve_config(
    product: &ProductDefinition,
    rule: Option<&CustomerPackagingRule>,
    overrides: &LineOverrides,
) -> CoreResult<EffectiveConfig> {
    let id = product.id.as_str();

    let pack_type = overrides
        .pack_type
        .or_else(|| rule.and_then(|r| r.pack_type))
        .unwrap_or_default();

    let order_unit = overrides
        .order_unit
        .or_else(|| rule.and_then(|r| r.order_unit))
        .unwrap_or_default();

    let tub_size = overrides
        .tub_size
        .or_else(|| rule.and_then(|r| r.tub_size))
        .unwrap_or_default();

    let skip_boxes = overrides
        .skip_boxes
        .or_else(|| rule.and_then(|r| r.skip_boxes))
        .unwrap_or(false);

    let rounding = rule.and_then(|r| r.rounding).unwrap_or_default();

    let round_to_multiple = match rule.and_then(|r| r.round_to_multiple) {
        Some(m) => positive_count(id, "round_to_multiple", m)?,
        None => 1,
    };

    let tray_weight = positive_weight(
        id,
        "tray_weight",
        product
            .tray_weight
            .unwrap_or_else(|| system_tray_weight(product.category)),
    )?;

    let trays_per_box = positive_count(
        id,
        "trays_per_box",
        rule.and_then(|r| r.trays_per_box)
            .or(product.trays_per_box)
            .unwrap_or_else(|| system_trays_per_box(product.category)),
    )?;

    let tub_weight = positive_weight(
        id,
        "tub_weight",
        product
            .tub_weight(tub_size)
            .unwrap_or_else(|| tub_size.nominal_weight()),
    )?;

    let tubs_per_box = positive_count(
        id,
        "tubs_per_box",
        rule.and_then(|r| r.tubs_per_box(tub_size))
            .or_else(|| product.tubs_per_box(tub_size))
            .unwrap_or_else(|| system_tubs_per_box(tub_size)),
    )?;

    // Per-piece packaging is a catalog property of meatballs. There is
    // no system default: a meatball with no count anywhere cannot be
    // piece-ordered.
    let count_per_tub = match (product.category, product.count_per_tub) {
        (ProductCategory::Meatball, Some(count)) => {
            Some(positive_count(id, "count_per_tub", count)?)
        }
        (ProductCategory::Meatball, None) => None,
        _ => None,
    };

    if order_unit == OrderUnit::Pieces {
        match product.category {
            ProductCategory::Meatball => {
                if count_per_tub.is_none() {
                    return Err(ConfigError::Missing {
                        product_id: id.to_string(),
                        field: "count_per_tub".to_string(),
                    }
                    .into());
                }
            }
            // Piece ordering on tray goods means packet count (one
            // piece = one tray) - only valid when the line packs in
            // trays.
            _ => {
                if pack_type == PackType::Tub {
                    return Err(UnitMismatchError {
                        product_id: id.to_string(),
                        category: product.category.label().to_string(),
                        pack_type: pack_type.label().to_string(),
                        order_unit: order_unit.label().to_string(),
                    }
                    .into());
                }
            }
        }
    }

    Ok(EffectiveConfig {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        category: product.category,
        pack_type,
        order_unit,
        tub_size,
        tray_weight,
        trays_per_box,
        tub_weight,
        tubs_per_box,
        count_per_tub,
        rounding,
        round_to_multiple,
        skip_boxes,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
