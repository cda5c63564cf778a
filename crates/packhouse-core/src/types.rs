//! # Domain Types
//!
//! Core domain types used throughout Packhouse.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌──────────────────────┐                    │
//! │  │  ProductDefinition  │   │ CustomerPackagingRule│                    │
//! │  │  ─────────────────  │   │  ──────────────────  │                    │
//! │  │  id (slug/UUID)     │   │  customer_id         │                    │
//! │  │  category           │   │  product_id (opt)    │                    │
//! │  │  tray/tub packaging │   │  per-field overrides │                    │
//! │  └─────────────────────┘   └──────────────────────┘                    │
//! │                                                                         │
//! │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────────────┐          │
//! │  │ PackType  │ │ OrderUnit │ │  TubSize  │ │ RoundingPolicy │          │
//! │  │  Tray     │ │  Weight   │ │  1kg/2kg  │ │  Up (default)  │          │
//! │  │  Tub      │ │  Trays    │ │  (shallow)│ │  Down          │          │
//! │  └───────────┘ │  Pieces   │ │  5kg(deep)│ │  None (exact)  │          │
//! │                └───────────┘ └───────────┘ └────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Discipline
//! The catalog and the customer rule book are read-only snapshots
//! passed into every call. The engine never caches them between calls
//! and tolerates being handed a fresh snapshot each time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::weight::Weight;

// =============================================================================
// Product Category
// =============================================================================

/// What kind of product this is. Drives which calculation paths apply:
/// only meatballs can be ordered by individual piece count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Sausage,
    Burger,
    Meatball,
}

impl ProductCategory {
    /// Lowercase label as used on packing sheets and in stored rows.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductCategory::Sausage => "sausage",
            ProductCategory::Burger => "burger",
            ProductCategory::Meatball => "meatball",
        }
    }
}

// =============================================================================
// Meat & Spice Type (informational)
// =============================================================================

/// Meat type - used for reporting and labels, never for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MeatType {
    Chicken,
    Beef,
    Lamb,
    Veal,
    Mixed,
}

/// Spice type - used for reporting and labels, never for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SpiceType {
    Mild,
    Normal,
    None,
}

// =============================================================================
// Pack Type
// =============================================================================

/// Physical packing unit for a line: fixed-weight flat trays or tubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    Tray,
    Tub,
}

impl PackType {
    pub const fn label(&self) -> &'static str {
        match self {
            PackType::Tray => "tray",
            PackType::Tub => "tub",
        }
    }
}

impl Default for PackType {
    fn default() -> Self {
        PackType::Tray
    }
}

// =============================================================================
// Order Unit
// =============================================================================

/// The unit a customer orders in.
///
/// Wire names match the stored rows and the TS clients: `kg`, `trays`,
/// `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderUnit {
    /// Ordered by weight in kilograms (the common case).
    #[serde(rename = "kg")]
    Weight,
    /// Ordered by whole tray count (e.g., "30 trays of beef sausage").
    #[serde(rename = "trays")]
    Trays,
    /// Ordered by individual piece count (meatballs), or packet count
    /// for tray goods.
    #[serde(rename = "count")]
    Pieces,
}

impl OrderUnit {
    pub const fn label(&self) -> &'static str {
        match self {
            OrderUnit::Weight => "kg",
            OrderUnit::Trays => "trays",
            OrderUnit::Pieces => "count",
        }
    }
}

impl Default for OrderUnit {
    fn default() -> Self {
        OrderUnit::Weight
    }
}

// =============================================================================
// Tub Size
// =============================================================================

/// Tub sizes: 1 kg and 2 kg use shallow tubs, 5 kg uses deep tubs.
/// Shallow and deep tubs have different box-fill counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TubSize {
    #[serde(rename = "1kg")]
    Kg1,
    #[serde(rename = "2kg")]
    Kg2,
    #[serde(rename = "5kg")]
    Kg5,
}

impl TubSize {
    /// The nominal fill weight of a tub of this size.
    pub const fn nominal_weight(&self) -> Weight {
        match self {
            TubSize::Kg1 => Weight::from_grams(1_000),
            TubSize::Kg2 => Weight::from_grams(2_000),
            TubSize::Kg5 => Weight::from_grams(5_000),
        }
    }

    /// Deep tubs (5 kg) pack fewer to a box than shallow tubs (1-2 kg).
    pub const fn is_deep(&self) -> bool {
        matches!(self, TubSize::Kg5)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            TubSize::Kg1 => "1kg",
            TubSize::Kg2 => "2kg",
            TubSize::Kg5 => "5kg",
        }
    }
}

impl Default for TubSize {
    fn default() -> Self {
        TubSize::Kg5
    }
}

// =============================================================================
// Rounding Policy
// =============================================================================

/// How a non-integer tray count derived from a weight is resolved to a
/// packable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Round up to whole trays; deliver at least the ordered weight.
    /// The system-wide default.
    Up,
    /// Round up to whole trays, then floor to the nearest lower
    /// multiple of the rule's `round_to_multiple`. The packed weight is
    /// recomputed from the floored tray count and may be LESS than
    /// ordered - that under-delivery is the customer's explicit
    /// preference, not a bug. Without a configured multiple there is
    /// nothing to floor and the line behaves as `Up`.
    Down,
    /// No rounding: the exact quotient is carried through, non-integer
    /// trays permitted. Used when a customer's own unit accounting
    /// already guarantees whole trays.
    None,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        RoundingPolicy::Up
    }
}

// =============================================================================
// Product Definition
// =============================================================================

/// A product in the catalog with its default packaging attributes.
///
/// Packaging attributes are optional: an absent attribute falls
/// through to the hard-coded system default at config-resolution time.
/// Created/edited by catalog management (out of scope), read-only to
/// the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDefinition {
    /// Unique identifier (slug or UUID - opaque to the engine).
    pub id: String,

    /// Display name shown on orders and packing sheets.
    pub name: String,

    /// Product category; drives calculation-path eligibility.
    pub category: ProductCategory,

    /// Meat type (informational).
    pub meat_type: MeatType,

    /// Spice type (informational).
    pub spice_type: SpiceType,

    /// Weight of one filled tray.
    pub tray_weight: Option<Weight>,

    /// Trays per shipping box.
    pub trays_per_box: Option<u32>,

    /// Fill weight of a 5 kg (deep) tub for this product.
    pub tub_weight_5kg: Option<Weight>,

    /// Fill weight of a 2 kg (shallow) tub for this product.
    pub tub_weight_2kg: Option<Weight>,

    /// Fill weight of a 1 kg (shallow) tub for this product.
    pub tub_weight_1kg: Option<Weight>,

    /// 5 kg tubs per shipping box.
    pub tubs_per_box_5kg: Option<u32>,

    /// 2 kg tubs per shipping box.
    pub tubs_per_box_2kg: Option<u32>,

    /// 1 kg tubs per shipping box.
    pub tubs_per_box_1kg: Option<u32>,

    /// Individual pieces per tub. Meaningful only for meatballs.
    pub count_per_tub: Option<u32>,

    /// Whether the product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl ProductDefinition {
    /// Per-size tub fill weight, if the catalog defines one.
    pub fn tub_weight(&self, size: TubSize) -> Option<Weight> {
        match size {
            TubSize::Kg1 => self.tub_weight_1kg,
            TubSize::Kg2 => self.tub_weight_2kg,
            TubSize::Kg5 => self.tub_weight_5kg,
        }
    }

    /// Per-size tubs-per-box count, if the catalog defines one.
    pub fn tubs_per_box(&self, size: TubSize) -> Option<u32> {
        match size {
            TubSize::Kg1 => self.tubs_per_box_1kg,
            TubSize::Kg2 => self.tubs_per_box_2kg,
            TubSize::Kg5 => self.tubs_per_box_5kg,
        }
    }
}

// =============================================================================
// Customer Packaging Rule
// =============================================================================

/// A customer's packaging overrides for one product, or for all of
/// that customer's products when `product_id` is absent.
///
/// Every field is optional: absence means "use the product default,
/// else the system default". Configured once per customer relationship
/// and rarely mutated; read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPackagingRule {
    /// Customer this rule belongs to. Matching is case-sensitive.
    pub customer_id: String,

    /// Product this rule applies to; `None` = customer-level default.
    pub product_id: Option<String>,

    /// The customer's preferred pack type for this product.
    pub pack_type: Option<PackType>,

    /// The customer's ordering convention (kg / trays / count).
    pub order_unit: Option<OrderUnit>,

    /// Default tub size when packing in tubs.
    pub tub_size: Option<TubSize>,

    /// Override: trays per shipping box.
    pub trays_per_box: Option<u32>,

    /// Override: 5 kg tubs per shipping box.
    pub tubs_per_box_5kg: Option<u32>,

    /// Override: 2 kg tubs per shipping box.
    pub tubs_per_box_2kg: Option<u32>,

    /// Override: 1 kg tubs per shipping box.
    pub tubs_per_box_1kg: Option<u32>,

    /// Rounding policy for weight-ordered tray goods.
    pub rounding: Option<RoundingPolicy>,

    /// Floor the rounded-up tray count to a multiple of this (>= 1).
    /// Only has effect when `rounding` is `Down`.
    pub round_to_multiple: Option<u32>,

    /// The customer takes loose trays/tubs - never pack boxes.
    pub skip_boxes: Option<bool>,

    /// When the rule was created.
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the rule was last updated.
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CustomerPackagingRule {
    /// Per-size tubs-per-box override, if the rule carries one.
    pub fn tubs_per_box(&self, size: TubSize) -> Option<u32> {
        match size {
            TubSize::Kg1 => self.tubs_per_box_1kg,
            TubSize::Kg2 => self.tubs_per_box_2kg,
            TubSize::Kg5 => self.tubs_per_box_5kg,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tub_size_nominal_weight() {
        assert_eq!(TubSize::Kg1.nominal_weight().grams(), 1_000);
        assert_eq!(TubSize::Kg2.nominal_weight().grams(), 2_000);
        assert_eq!(TubSize::Kg5.nominal_weight().grams(), 5_000);
    }

    #[test]
    fn test_tub_size_depth() {
        assert!(TubSize::Kg5.is_deep());
        assert!(!TubSize::Kg2.is_deep());
        assert!(!TubSize::Kg1.is_deep());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PackType::default(), PackType::Tray);
        assert_eq!(OrderUnit::default(), OrderUnit::Weight);
        assert_eq!(TubSize::default(), TubSize::Kg5);
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::Up);
    }

    #[test]
    fn test_wire_names_match_stored_rows() {
        assert_eq!(
            serde_json::to_string(&OrderUnit::Weight).unwrap(),
            "\"kg\""
        );
        assert_eq!(
            serde_json::to_string(&OrderUnit::Pieces).unwrap(),
            "\"count\""
        );
        assert_eq!(serde_json::to_string(&TubSize::Kg5).unwrap(), "\"5kg\"");
        assert_eq!(
            serde_json::to_string(&ProductCategory::Meatball).unwrap(),
            "\"meatball\""
        );
        assert_eq!(
            serde_json::to_string(&RoundingPolicy::Down).unwrap(),
            "\"down\""
        );
    }
}
