//! # Customer Rule Selection & Seed Data
//!
//! Rule lookup for the config builder, plus the well-known production
//! catalog and customer rule book as pure constructor functions.
//!
//! ## No Ambient State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The catalog and rule book are SNAPSHOTS, not globals.                  │
//! │                                                                         │
//! │  Storage layer ──► Vec<ProductDefinition> ─┐                            │
//! │                                            ├──► engine call            │
//! │  Storage layer ──► Vec<CustomerPackagingRule> ┘                         │
//! │                                                                         │
//! │  The engine holds no memory of prior calls and tolerates a fresh       │
//! │  snapshot on every call. seed_catalog()/seed_rule_book() exist so      │
//! │  a storage layer (and the tests) can start from the real data the      │
//! │  business runs on today.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;

use crate::types::{
    CustomerPackagingRule, MeatType, OrderUnit, PackType, ProductCategory, ProductDefinition,
    RoundingPolicy, SpiceType, TubSize,
};
use crate::weight::Weight;

// =============================================================================
// Rule Selection
// =============================================================================

/// Finds the customer's packaging rule for a product.
///
/// Lookup is case-sensitive exact match on (customer, product). A rule
/// without a product id is the customer-level default and applies to
/// any of that customer's products that lack a product-specific rule.
/// Absent both, the caller proceeds with `None` and the config builder
/// falls through to product/system defaults.
///
/// Name-based fallback (matching by display name when an id is
/// unknown) is a caller concern: resolve to a concrete customer id
/// before calling this.
pub fn find_rule<'a>(
    customer_id: &str,
    product_id: &str,
    rules: &'a [CustomerPackagingRule],
) -> Option<&'a CustomerPackagingRule> {
    rules
        .iter()
        .find(|r| r.customer_id == customer_id && r.product_id.as_deref() == Some(product_id))
        .or_else(|| {
            rules
                .iter()
                .find(|r| r.customer_id == customer_id && r.product_id.is_none())
        })
}

// =============================================================================
// Seed Catalog
// =============================================================================

/// Standard sausage packaging: 0.4 kg trays (20/box), 5 kg deep tubs
/// (3/box), 2 kg and 1 kg shallow tubs (7/box).
fn sausage(id: &str, name: &str, meat_type: MeatType, spice_type: SpiceType) -> ProductDefinition {
    ProductDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category: ProductCategory::Sausage,
        meat_type,
        spice_type,
        tray_weight: Some(Weight::from_grams(400)),
        trays_per_box: Some(20),
        tub_weight_5kg: Some(Weight::from_grams(5_000)),
        tub_weight_2kg: Some(Weight::from_grams(2_000)),
        tub_weight_1kg: Some(Weight::from_grams(1_000)),
        tubs_per_box_5kg: Some(3),
        tubs_per_box_2kg: Some(7),
        tubs_per_box_1kg: Some(7),
        count_per_tub: None,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Burger packaging: 1 kg trays of 10 patties, 10 trays per box.
fn burger(id: &str, name: &str, meat_type: MeatType) -> ProductDefinition {
    ProductDefinition {
        category: ProductCategory::Burger,
        tray_weight: Some(Weight::from_grams(1_000)),
        trays_per_box: Some(10),
        ..sausage(id, name, meat_type, SpiceType::None)
    }
}

/// Meatball packaging: tubs of 20 pieces; tray fallback as burgers.
fn meatball(id: &str, name: &str, meat_type: MeatType, count_per_tub: u32) -> ProductDefinition {
    ProductDefinition {
        category: ProductCategory::Meatball,
        count_per_tub: Some(count_per_tub),
        ..burger(id, name, meat_type)
    }
}

/// The production catalog as currently run by the business.
///
/// Returned as an owned snapshot; callers thread it through engine
/// calls explicitly.
pub fn seed_catalog() -> Vec<ProductDefinition> {
    vec![
        // Sausages
        sausage(
            "chicken-sausage",
            "Chicken Sausage",
            MeatType::Chicken,
            SpiceType::Normal,
        ),
        sausage(
            "chicken-sausage-50g",
            "Chicken Sausage (50g)",
            MeatType::Chicken,
            SpiceType::Normal,
        ),
        sausage(
            "chicken-sausage-30g",
            "Chicken Sausage (30g)",
            MeatType::Chicken,
            SpiceType::Mild,
        ),
        sausage(
            "chicken-sausage-60g",
            "Chicken Sausage (60g)",
            MeatType::Chicken,
            SpiceType::Normal,
        ),
        sausage(
            "beef-sausage",
            "Beef Sausage",
            MeatType::Beef,
            SpiceType::Normal,
        ),
        sausage(
            "lamb-sausage",
            "Lamb Sausage",
            MeatType::Lamb,
            SpiceType::Normal,
        ),
        sausage(
            "veal-sausage",
            "Veal Sausage",
            MeatType::Veal,
            SpiceType::Normal,
        ),
        // Burgers
        burger("beef-burger", "Beef Burger", MeatType::Beef),
        burger("lamb-kofte", "Lamb Kofte", MeatType::Lamb),
        burger("beef-cj", "Beef C&J", MeatType::Beef),
        // Meatballs
        meatball("beef-meatballs", "Beef Meatballs", MeatType::Beef, 20),
    ]
}

// =============================================================================
// Seed Rule Book
// =============================================================================

/// The standing packaging agreements with the named customers.
///
/// Each is a customer-level rule (no product id) unless a product
/// needs its own treatment.
pub fn seed_rule_book() -> Vec<CustomerPackagingRule> {
    vec![
        // Haji Baba: sealed trays in bulk, 20 per box, and the tray
        // count rounded DOWN to a multiple of 20. Short delivery on the
        // remainder is their explicit preference.
        CustomerPackagingRule {
            customer_id: "haji-baba".to_string(),
            pack_type: Some(PackType::Tray),
            order_unit: Some(OrderUnit::Weight),
            trays_per_box: Some(20),
            rounding: Some(RoundingPolicy::Down),
            round_to_multiple: Some(20),
            ..Default::default()
        },
        // LMC: everything in tubs - 5 kg deep tubs 3/box, 2 kg shallow
        // tubs 7/box. Veal can go out in either size.
        CustomerPackagingRule {
            customer_id: "lmc".to_string(),
            pack_type: Some(PackType::Tub),
            order_unit: Some(OrderUnit::Weight),
            tub_size: Some(TubSize::Kg5),
            tubs_per_box_5kg: Some(3),
            tubs_per_box_2kg: Some(7),
            rounding: Some(RoundingPolicy::Up),
            ..Default::default()
        },
        // LMC meatballs are ordered by piece count, 20 per shallow tub.
        CustomerPackagingRule {
            customer_id: "lmc".to_string(),
            product_id: Some("beef-meatballs".to_string()),
            pack_type: Some(PackType::Tub),
            order_unit: Some(OrderUnit::Pieces),
            tub_size: Some(TubSize::Kg5),
            tubs_per_box_5kg: Some(3),
            ..Default::default()
        },
        // Halalnivore: 5 kg tubs, 3 per box. (An earlier agreement
        // grouped a leftover tub into a box of 4; the current one is a
        // plain round-up fill.)
        CustomerPackagingRule {
            customer_id: "halalnivore".to_string(),
            pack_type: Some(PackType::Tub),
            order_unit: Some(OrderUnit::Weight),
            tub_size: Some(TubSize::Kg5),
            tubs_per_box_5kg: Some(3),
            rounding: Some(RoundingPolicy::Up),
            ..Default::default()
        },
        // Saffron: orders by tray count, takes loose trays - NO boxes.
        CustomerPackagingRule {
            customer_id: "saffron".to_string(),
            pack_type: Some(PackType::Tray),
            order_unit: Some(OrderUnit::Trays),
            skip_boxes: Some(true),
            ..Default::default()
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
