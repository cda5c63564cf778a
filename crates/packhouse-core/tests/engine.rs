//! End-to-end engine tests against the seed catalog and rule book.
//!
//! These drive the full pipeline (rule lookup → config resolution →
//! line calculation → aggregation) exactly as a storage layer would,
//! using the real customer agreements.

use packhouse_core::aggregate::{calculate_order, OrderItemInput};
use packhouse_core::calculator::{calculate_line, Quantity};
use packhouse_core::config::{resolve_config, LineOverrides};
use packhouse_core::error::CoreError;
use packhouse_core::rules::{find_rule, seed_catalog, seed_rule_book};
use packhouse_core::types::{OrderUnit, PackType, ProductDefinition, TubSize};
use packhouse_core::weight::{TrayCount, Weight};

fn product<'a>(catalog: &'a [ProductDefinition], id: &str) -> &'a ProductDefinition {
    catalog
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("seed catalog is missing {id}"))
}

fn line_for(customer_id: &str, product_id: &str, quantity: Quantity) -> packhouse_core::LineResult {
    let catalog = seed_catalog();
    let rules = seed_rule_book();
    let product = product(&catalog, product_id);
    let rule = find_rule(customer_id, product_id, &rules);
    let config = resolve_config(product, rule, &LineOverrides::none()).unwrap();
    calculate_line(&config, quantity)
}

// =============================================================================
// Per-customer scenarios
// =============================================================================

#[test]
fn walk_in_customer_packs_default_trays() {
    // No rule anywhere: 8.3 kg of sausage at 0.4 kg/tray rounds up to
    // 21 trays, which takes 2 boxes of 20
    let result = line_for("walk-in", "chicken-sausage", Quantity::from_kg(8.3));

    assert_eq!(result.pack_type, PackType::Tray);
    assert_eq!(result.trays, TrayCount::from_whole(21));
    assert_eq!(result.tubs, 0);
    assert_eq!(result.boxes, 2);
    assert_eq!(result.weight, Weight::from_kg(8.3));
}

#[test]
fn haji_baba_rounds_down_to_full_boxes() {
    // Same 8.3 kg, but their agreement floors the tray count to a
    // multiple of 20: 20 trays, 1 box, and only 8.0 kg actually packed
    let result = line_for("haji-baba", "chicken-sausage", Quantity::from_kg(8.3));

    assert_eq!(result.trays, TrayCount::from_whole(20));
    assert_eq!(result.boxes, 1);
    assert_eq!(result.weight, Weight::from_kg(8.0));
}

#[test]
fn haji_baba_below_one_box_packs_nothing() {
    let result = line_for("haji-baba", "chicken-sausage", Quantity::from_kg(7.0));

    assert_eq!(result.trays, TrayCount::zero());
    assert_eq!(result.boxes, 0);
    assert_eq!(result.weight, Weight::zero());
}

#[test]
fn lmc_packs_sausages_in_deep_tubs() {
    // 13 kg in 5 kg tubs → 3 tubs, 1 box of 3; the third tub is light
    // and the recorded weight stays the literal 13 kg
    let result = line_for("lmc", "beef-sausage", Quantity::from_kg(13.0));

    assert_eq!(result.pack_type, PackType::Tub);
    assert_eq!(result.tub_size, TubSize::Kg5);
    assert_eq!(result.tubs, 3);
    assert_eq!(result.trays, TrayCount::zero());
    assert_eq!(result.boxes, 1);
    assert_eq!(result.weight, Weight::from_kg(13.0));
}

#[test]
fn lmc_shallow_tubs_pack_seven_per_box() {
    let catalog = seed_catalog();
    let rules = seed_rule_book();
    let product = product(&catalog, "veal-sausage");
    let rule = find_rule("lmc", "veal-sausage", &rules);
    let overrides = LineOverrides {
        tub_size: Some(TubSize::Kg2),
        ..Default::default()
    };
    let config = resolve_config(product, rule, &overrides).unwrap();
    let result = calculate_line(&config, Quantity::from_kg(16.0));

    // 16 kg in 2 kg tubs → 8 tubs → 2 boxes of 7
    assert_eq!(result.tubs, 8);
    assert_eq!(result.boxes, 2);
}

#[test]
fn lmc_meatballs_by_piece_count() {
    // 45 meatballs at 20/tub → 3 tubs, weight approximated from tubs
    let result = line_for("lmc", "beef-meatballs", Quantity::Pieces(45));

    assert_eq!(result.order_unit, OrderUnit::Pieces);
    assert_eq!(result.tubs, 3);
    assert_eq!(result.boxes, 1);
    assert_eq!(result.weight, Weight::from_kg(15.0));
}

#[test]
fn halalnivore_tubs_round_up_plainly() {
    // 28 kg → 6 tubs of 5 kg → 2 boxes of 3
    let result = line_for("halalnivore", "lamb-sausage", Quantity::from_kg(28.0));

    assert_eq!(result.tubs, 6);
    assert_eq!(result.boxes, 2);

    // A lone leftover tub gets its own box (no grouping into a box
    // of 4 - that agreement is retired)
    let result = line_for("halalnivore", "lamb-sausage", Quantity::from_kg(17.0));
    assert_eq!(result.tubs, 4);
    assert_eq!(result.boxes, 2);
}

#[test]
fn saffron_orders_by_trays_and_takes_no_boxes() {
    let result = line_for("saffron", "chicken-sausage", Quantity::Trays(21));

    assert_eq!(result.order_unit, OrderUnit::Trays);
    assert_eq!(result.trays, TrayCount::from_whole(21));
    assert_eq!(result.boxes, 0);
    assert_eq!(result.weight, Weight::from_kg(8.4)); // 21 × 0.4 kg
}

#[test]
fn burgers_pack_heavier_trays() {
    // 5 kg of burgers at 1 kg/tray → 5 trays, 1 box of 10
    let result = line_for("walk-in", "beef-burger", Quantity::from_kg(5.0));

    assert_eq!(result.trays, TrayCount::from_whole(5));
    assert_eq!(result.boxes, 1);
}

// =============================================================================
// Whole-order calculation
// =============================================================================

#[test]
fn lmc_order_aggregates_across_pack_types() {
    let catalog = seed_catalog();
    let rules = seed_rule_book();

    let items = vec![
        OrderItemInput {
            product: product(&catalog, "beef-sausage"),
            quantity: Quantity::from_kg(13.0),
            overrides: LineOverrides::none(),
        },
        OrderItemInput {
            product: product(&catalog, "beef-meatballs"),
            quantity: Quantity::Pieces(45),
            overrides: LineOverrides::none(),
        },
        OrderItemInput {
            product: product(&catalog, "chicken-sausage"),
            quantity: Quantity::Weight(Weight::zero()),
            overrides: LineOverrides::none(),
        },
    ];

    let order = calculate_order("lmc", &items, &rules).unwrap();

    assert_eq!(order.lines.len(), 3);
    assert_eq!(order.totals.item_count, 3);
    assert_eq!(order.totals.tubs, 3 + 3);
    assert_eq!(order.totals.trays, TrayCount::zero());
    assert_eq!(order.totals.boxes, 2);
    assert_eq!(order.totals.weight, Weight::from_kg(13.0 + 15.0));
    assert_eq!(order.totals.label_count(), 6 + 2);

    // The unfilled line contributed nothing but its presence
    assert_eq!(order.lines[2].weight, Weight::zero());
    assert_eq!(order.lines[2].tubs, 0);
}

#[test]
fn down_rule_without_multiple_keeps_ordered_weight() {
    // A customer on round-down who never configured a multiple gets
    // plain round-up behavior: 8.3 kg → 21 trays and the ordered
    // weight recorded, never 21 × 0.4 = 8.4 kg
    use packhouse_core::types::{CustomerPackagingRule, RoundingPolicy};

    let catalog = seed_catalog();
    let rule = CustomerPackagingRule {
        customer_id: "new-shop".to_string(),
        rounding: Some(RoundingPolicy::Down),
        ..Default::default()
    };
    let product = product(&catalog, "chicken-sausage");
    let config = resolve_config(product, Some(&rule), &LineOverrides::none()).unwrap();
    let result = calculate_line(&config, Quantity::from_kg(8.3));

    assert_eq!(result.trays, TrayCount::from_whole(21));
    assert_eq!(result.weight, Weight::from_kg(8.3));
}

#[test]
fn piece_order_against_tub_packed_goods_is_rejected() {
    // LMC tubs everything; a piece order on their sausages cannot fall
    // back to the tray path and must be refused
    let catalog = seed_catalog();
    let rules = seed_rule_book();

    let items = vec![OrderItemInput {
        product: product(&catalog, "beef-sausage"),
        quantity: Quantity::Pieces(30),
        overrides: LineOverrides::none(),
    }];

    let err = calculate_order("lmc", &items, &rules).unwrap_err();
    assert!(matches!(err, CoreError::UnitMismatch(_)));

    // Meatball piece orders still go through: they have per-tub counts
    let items = vec![OrderItemInput {
        product: product(&catalog, "beef-meatballs"),
        quantity: Quantity::Pieces(45),
        overrides: LineOverrides::none(),
    }];
    let order = calculate_order("lmc", &items, &rules).unwrap();
    assert_eq!(order.lines[0].tubs, 3);
}

#[test]
fn order_fails_fast_on_unresolvable_line() {
    let catalog = seed_catalog();
    let rules = seed_rule_book();

    let mut broken = product(&catalog, "beef-meatballs").clone();
    broken.count_per_tub = None;

    let items = vec![OrderItemInput {
        product: &broken,
        quantity: Quantity::Pieces(45),
        overrides: LineOverrides::none(),
    }];

    let err = calculate_order("lmc", &items, &rules).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn line_overrides_beat_the_customer_rule() {
    let catalog = seed_catalog();
    let rules = seed_rule_book();

    // LMC normally tubs everything; the override flips one line to trays
    let items = vec![OrderItemInput {
        product: product(&catalog, "beef-sausage"),
        quantity: Quantity::from_kg(8.3),
        overrides: LineOverrides {
            pack_type: Some(PackType::Tray),
            ..Default::default()
        },
    }];

    let order = calculate_order("lmc", &items, &rules).unwrap();
    assert_eq!(order.lines[0].pack_type, PackType::Tray);
    assert_eq!(order.lines[0].trays, TrayCount::from_whole(21));
    assert_eq!(order.lines[0].tubs, 0);
}

#[test]
fn recalculating_an_order_changes_nothing() {
    let catalog = seed_catalog();
    let rules = seed_rule_book();

    let items = vec![
        OrderItemInput {
            product: product(&catalog, "chicken-sausage"),
            quantity: Quantity::from_kg(8.3),
            overrides: LineOverrides::none(),
        },
        OrderItemInput {
            product: product(&catalog, "beef-burger"),
            quantity: Quantity::from_kg(5.0),
            overrides: LineOverrides::none(),
        },
    ];

    let first = calculate_order("haji-baba", &items, &rules).unwrap();
    let second = calculate_order("haji-baba", &items, &rules).unwrap();
    assert_eq!(first, second);
}
