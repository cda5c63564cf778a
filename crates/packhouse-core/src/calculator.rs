//! # Packing Calculator
//!
//! Converts one resolved config plus an ordered quantity into the
//! trays, tubs and boxes the packing floor has to produce.
//!
//! ## Calculation Paths (dispatch priority, top first)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     calculate_line dispatch                             │
//! │                                                                         │
//! │  Quantity::Trays(n) ───────────────► whole trays, weight = n × tray    │
//! │                                                                         │
//! │  Quantity::Pieces(n), meatball ────► tubs = ⌈n / count_per_tub⌉,       │
//! │                                      weight ≈ tubs × tub weight        │
//! │                                                                         │
//! │  Quantity::Pieces(n), tray goods ──► same as Trays(n): one piece       │
//! │                                      = one packet = one tray           │
//! │                                                                         │
//! │  Quantity::Weight(q), pack = tub ──► tubs = ⌈q / tub weight⌉,          │
//! │                                      weight = q (literal)              │
//! │                                                                         │
//! │  Quantity::Weight(q), pack = tray ─► rounding policy:                  │
//! │                                      up:   trays = ⌈q / w⌉, weight = q │
//! │                                      down: floor ⌈q / w⌉ to multiple,  │
//! │                                            weight recomputed (may      │
//! │                                            UNDER-deliver, by design);  │
//! │                                            no multiple → same as up    │
//! │                                      none: exact quotient, weight = q  │
//! │                                                                         │
//! │  Then: boxes = skip_boxes ? 0 : ⌈units / units_per_box⌉                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator never fails at runtime: every divisor is guaranteed
//! positive by the config builder, and a non-positive quantity is a
//! valid unfilled line, not an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::EffectiveConfig;
use crate::types::{OrderUnit, PackType, TubSize};
use crate::weight::{TrayCount, Weight};

// =============================================================================
// Quantity
// =============================================================================

/// An ordered amount in its native unit.
///
/// The unit travels with the number, so a tray count can never be
/// mistaken for kilograms anywhere in the engine - the dispatch below
/// is a total match, not a chain of flag checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Ordered by weight.
    Weight(Weight),
    /// Ordered by whole tray count.
    Trays(u32),
    /// Ordered by individual piece count (or packet count for tray
    /// goods).
    Pieces(u32),
}

impl Quantity {
    /// Convenience constructor for weight orders given in kilograms.
    pub fn from_kg(kg: f64) -> Self {
        Quantity::Weight(Weight::from_kg(kg))
    }

    /// The unit this quantity is expressed in.
    pub const fn unit(&self) -> OrderUnit {
        match self {
            Quantity::Weight(_) => OrderUnit::Weight,
            Quantity::Trays(_) => OrderUnit::Trays,
            Quantity::Pieces(_) => OrderUnit::Pieces,
        }
    }

    /// An unfilled line has nothing to pack.
    pub const fn is_positive(&self) -> bool {
        match self {
            Quantity::Weight(w) => w.is_positive(),
            Quantity::Trays(n) => *n > 0,
            Quantity::Pieces(n) => *n > 0,
        }
    }

    /// The zero quantity in the same unit.
    pub const fn zeroed(&self) -> Self {
        match self {
            Quantity::Weight(_) => Quantity::Weight(Weight::zero()),
            Quantity::Trays(_) => Quantity::Trays(0),
            Quantity::Pieces(_) => Quantity::Pieces(0),
        }
    }
}

// =============================================================================
// Line Result
// =============================================================================

/// The packing requirements for a single order line.
///
/// ## Invariants
/// - Exactly one of `trays` / `tubs` is non-zero for a non-empty line
/// - `boxes` is 0 whenever the config says skip-boxes, regardless of
///   trays/tubs
/// - `weight` is the ACTUAL packed weight, which under the `down`
///   rounding policy may be less than ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    pub product_id: String,
    pub product_name: String,

    /// Pack type actually used (tray paths report `Tray` even when the
    /// stored rule said tubs, and vice versa for meatball piece orders).
    pub pack_type: PackType,

    /// Unit the input quantity was expressed in.
    pub order_unit: OrderUnit,

    /// The input quantity in its native unit (zeroed for empty lines).
    pub input_quantity: Quantity,

    /// Actual packed weight.
    pub weight: Weight,

    /// Trays needed. Fractional only under the `none` rounding policy.
    pub trays: TrayCount,

    /// Tubs needed.
    pub tubs: u32,

    /// Shipping boxes needed; 0 when skip-boxes.
    pub boxes: u32,

    /// Tub size used (relevant to tub lines).
    pub tub_size: TubSize,
}

impl LineResult {
    /// All-zero result for an unfilled line. Still a line item on the
    /// order: it counts towards the aggregate item count.
    fn empty(config: &EffectiveConfig, quantity: Quantity) -> Self {
        LineResult {
            product_id: config.product_id.clone(),
            product_name: config.product_name.clone(),
            pack_type: config.pack_type,
            order_unit: quantity.unit(),
            input_quantity: quantity.zeroed(),
            weight: Weight::zero(),
            trays: TrayCount::zero(),
            tubs: 0,
            boxes: 0,
            tub_size: config.tub_size,
        }
    }
}

// =============================================================================
// Calculation
// =============================================================================

fn boxes_for_units(units: u32, per_box: u32, skip_boxes: bool) -> u32 {
    if skip_boxes || units == 0 {
        0
    } else {
        units.div_ceil(per_box)
    }
}

/// Calculates the packing requirements for a single order line.
///
/// Deterministic and total for any config produced by
/// [`crate::config::resolve_config`]: identical inputs always yield the
/// identical result, and no input can make it fail or divide by zero.
///
/// Dispatch follows the quantity's own unit, not `config.order_unit`
/// (which records the customer's ordering convention). The legality of
/// that unit against the product's packaging is checked during
/// resolution, so callers should resolve with the quantity's unit as
/// the order-unit override - [`crate::aggregate::calculate_order`]
/// does this per line.
pub fn calculate_line(config: &EffectiveConfig, quantity: Quantity) -> LineResult {
    if !quantity.is_positive() {
        return LineResult::empty(config, quantity);
    }

    match quantity {
        Quantity::Trays(n) => tray_count_line(config, n, OrderUnit::Trays),

        Quantity::Pieces(n) => match config.count_per_tub {
            // Meatballs: pieces fill tubs
            Some(count_per_tub) => piece_tub_line(config, n, count_per_tub),
            // Tray goods: one piece = one packet = one tray
            None => tray_count_line(config, n, OrderUnit::Pieces),
        },

        Quantity::Weight(q) => match config.pack_type {
            PackType::Tub => tub_weight_line(config, q),
            PackType::Tray => tray_weight_line(config, q),
        },
    }
}

/// Paths 1 and 3: the caller already speaks in whole trays.
fn tray_count_line(config: &EffectiveConfig, trays: u32, unit: OrderUnit) -> LineResult {
    let input = match unit {
        OrderUnit::Pieces => Quantity::Pieces(trays),
        _ => Quantity::Trays(trays),
    };

    LineResult {
        product_id: config.product_id.clone(),
        product_name: config.product_name.clone(),
        pack_type: PackType::Tray,
        order_unit: unit,
        input_quantity: input,
        weight: config.tray_weight * trays,
        trays: TrayCount::from_whole(trays),
        tubs: 0,
        boxes: boxes_for_units(trays, config.trays_per_box, config.skip_boxes),
        tub_size: config.tub_size,
    }
}

/// Path 2: meatballs ordered by piece count fill tubs. Partial tubs
/// round up to whole tubs, so the weight is approximate by design.
fn piece_tub_line(config: &EffectiveConfig, pieces: u32, count_per_tub: u32) -> LineResult {
    let tubs = pieces.div_ceil(count_per_tub);

    LineResult {
        product_id: config.product_id.clone(),
        product_name: config.product_name.clone(),
        pack_type: PackType::Tub,
        order_unit: OrderUnit::Pieces,
        input_quantity: Quantity::Pieces(pieces),
        weight: config.tub_weight * tubs,
        trays: TrayCount::zero(),
        tubs,
        boxes: boxes_for_units(tubs, config.tubs_per_box, config.skip_boxes),
        tub_size: config.tub_size,
    }
}

/// Path 4: tub packing by weight. The recorded weight is the literal
/// ordered weight - the last tub simply isn't full.
fn tub_weight_line(config: &EffectiveConfig, quantity: Weight) -> LineResult {
    let tubs = quantity.div_ceil_by(config.tub_weight);

    LineResult {
        product_id: config.product_id.clone(),
        product_name: config.product_name.clone(),
        pack_type: PackType::Tub,
        order_unit: OrderUnit::Weight,
        input_quantity: Quantity::Weight(quantity),
        weight: quantity,
        trays: TrayCount::zero(),
        tubs,
        boxes: boxes_for_units(tubs, config.tubs_per_box, config.skip_boxes),
        tub_size: config.tub_size,
    }
}

/// Path 5 (default): tray packing by weight under the rounding policy.
fn tray_weight_line(config: &EffectiveConfig, quantity: Weight) -> LineResult {
    use crate::types::RoundingPolicy;

    let (trays, weight) = match config.rounding {
        // Exact quotient, non-integer trays permitted.
        RoundingPolicy::None => (
            TrayCount::from_ratio(quantity, config.tray_weight),
            quantity,
        ),

        // Round up, then floor to the customer's multiple; the packed
        // weight is what those trays actually hold. Without a multiple
        // (m = 1) there is nothing to floor away and the line behaves
        // exactly as `up`: ordered weight delivered and recorded.
        RoundingPolicy::Down => {
            let raw = quantity.div_ceil_by(config.tray_weight);
            let m = config.round_to_multiple;
            if m <= 1 {
                (TrayCount::from_whole(raw), quantity)
            } else {
                let floored = raw / m * m;
                (TrayCount::from_whole(floored), config.tray_weight * floored)
            }
        }

        // Default: round up to whole trays, deliver the ordered weight.
        RoundingPolicy::Up => (
            TrayCount::from_whole(quantity.div_ceil_by(config.tray_weight)),
            quantity,
        ),
    };

    let boxes = if config.skip_boxes {
        0
    } else {
        trays.boxes_for(config.trays_per_box)
    };

    LineResult {
        product_id: config.product_id.clone(),
        product_name: config.product_name.clone(),
        pack_type: PackType::Tray,
        order_unit: OrderUnit::Weight,
        input_quantity: Quantity::Weight(quantity),
        weight,
        trays,
        tubs: 0,
        boxes,
        tub_size: config.tub_size,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
