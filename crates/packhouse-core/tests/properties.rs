//! Property-based tests for the packing calculator.
//!
//! These use proptest to generate quantities and packaging parameters
//! across the full operational range and verify the rounding laws the
//! packing floor relies on:
//! 1. Round-up never under-delivers and never adds a spare tray
//! 2. Round-down always lands on the customer's multiple
//! 3. Box counts cover the units exactly
//! 4. Totals are field-wise sums
//!
//! This complements engine.rs, which pins the concrete customer
//! scenarios.

use packhouse_core::aggregate::aggregate;
use packhouse_core::calculator::{calculate_line, Quantity};
use packhouse_core::config::EffectiveConfig;
use packhouse_core::types::{OrderUnit, PackType, ProductCategory, RoundingPolicy, TubSize};
use packhouse_core::weight::{TrayCount, Weight};
use proptest::prelude::*;

fn config(
    pack_type: PackType,
    tray_weight: i64,
    trays_per_box: u32,
    tub_weight: i64,
    tubs_per_box: u32,
    rounding: RoundingPolicy,
    round_to_multiple: u32,
    skip_boxes: bool,
) -> EffectiveConfig {
    EffectiveConfig {
        product_id: "prop-product".to_string(),
        product_name: "Prop Product".to_string(),
        category: ProductCategory::Sausage,
        pack_type,
        order_unit: OrderUnit::Weight,
        tub_size: TubSize::Kg5,
        tray_weight: Weight::from_grams(tray_weight),
        trays_per_box,
        tub_weight: Weight::from_grams(tub_weight),
        tubs_per_box,
        count_per_tub: None,
        rounding,
        round_to_multiple,
        skip_boxes,
    }
}

fn tray_config(tray_weight: i64, trays_per_box: u32) -> EffectiveConfig {
    config(
        PackType::Tray,
        tray_weight,
        trays_per_box,
        5_000,
        3,
        RoundingPolicy::Up,
        1,
        false,
    )
}

proptest! {
    // -- Round-up law --------------------------------------------------------

    /// The trays cover the ordered weight, and one tray fewer would not.
    #[test]
    fn round_up_is_tight(
        grams in 1i64..=10_000_000,
        tray_weight in 10i64..=50_000,
        trays_per_box in 1u32..=100,
    ) {
        let cfg = tray_config(tray_weight, trays_per_box);
        let result = calculate_line(&cfg, Quantity::Weight(Weight::from_grams(grams)));

        let trays = result.trays.ceil_whole();
        prop_assert!(trays >= 1);
        prop_assert!(trays * tray_weight >= grams);
        prop_assert!((trays - 1) * tray_weight < grams);
        // Round-up delivers the ordered weight as recorded
        prop_assert_eq!(result.weight, Weight::from_grams(grams));
    }

    /// Ordering more weight never needs fewer trays.
    #[test]
    fn round_up_is_monotonic(
        grams in 1i64..=1_000_000,
        extra in 0i64..=1_000_000,
        tray_weight in 10i64..=50_000,
    ) {
        let cfg = tray_config(tray_weight, 20);
        let small = calculate_line(&cfg, Quantity::Weight(Weight::from_grams(grams)));
        let large = calculate_line(&cfg, Quantity::Weight(Weight::from_grams(grams + extra)));

        prop_assert!(large.trays >= small.trays);
        prop_assert!(large.boxes >= small.boxes);
    }

    // -- Round-down law ------------------------------------------------------

    /// Round-down lands exactly on the multiple, never exceeds the
    /// round-up count, and records the weight those trays actually hold.
    #[test]
    fn round_down_lands_on_multiple(
        grams in 1i64..=10_000_000,
        tray_weight in 10i64..=50_000,
        multiple in 2u32..=50,
    ) {
        let cfg = config(
            PackType::Tray, tray_weight, 20, 5_000, 3,
            RoundingPolicy::Down, multiple, false,
        );
        let result = calculate_line(&cfg, Quantity::Weight(Weight::from_grams(grams)));

        let trays = result.trays.ceil_whole();
        prop_assert!(result.trays.is_whole());
        prop_assert_eq!(trays % multiple as i64, 0);

        let raw = Weight::from_grams(grams).div_ceil_by(Weight::from_grams(tray_weight)) as i64;
        prop_assert!(trays <= raw);
        prop_assert!(trays + multiple as i64 > raw);

        prop_assert_eq!(result.weight, Weight::from_grams(tray_weight) * trays);
    }

    /// Round-down with no multiple configured is indistinguishable
    /// from round-up: same trays, same recorded weight, same boxes.
    #[test]
    fn round_down_without_multiple_matches_round_up(
        grams in 1i64..=10_000_000,
        tray_weight in 10i64..=50_000,
    ) {
        let up = tray_config(tray_weight, 20);
        let down = config(
            PackType::Tray, tray_weight, 20, 5_000, 3,
            RoundingPolicy::Down, 1, false,
        );
        let quantity = Quantity::Weight(Weight::from_grams(grams));

        let up_line = calculate_line(&up, quantity);
        let down_line = calculate_line(&down, quantity);

        prop_assert_eq!(up_line.trays, down_line.trays);
        prop_assert_eq!(up_line.weight, down_line.weight);
        prop_assert_eq!(up_line.boxes, down_line.boxes);
    }

    // -- Box law -------------------------------------------------------------

    /// Boxes cover the units exactly; skip-boxes forces zero.
    #[test]
    fn boxes_cover_units(
        grams in 1i64..=10_000_000,
        tub_weight in 10i64..=50_000,
        tubs_per_box in 1u32..=100,
        skip in any::<bool>(),
    ) {
        let cfg = config(
            PackType::Tub, 400, 20, tub_weight, tubs_per_box,
            RoundingPolicy::Up, 1, skip,
        );
        let result = calculate_line(&cfg, Quantity::Weight(Weight::from_grams(grams)));

        if skip {
            prop_assert_eq!(result.boxes, 0);
        } else {
            prop_assert_eq!(result.boxes, result.tubs.div_ceil(tubs_per_box));
        }
    }

    // -- Meatball conversion -------------------------------------------------

    /// Piece counts fill whole tubs, last tub partial.
    #[test]
    fn pieces_fill_whole_tubs(
        pieces in 1u32..=100_000,
        count_per_tub in 1u32..=500,
    ) {
        let mut cfg = config(
            PackType::Tub, 400, 20, 5_000, 3,
            RoundingPolicy::Up, 1, false,
        );
        cfg.category = ProductCategory::Meatball;
        cfg.count_per_tub = Some(count_per_tub);

        let result = calculate_line(&cfg, Quantity::Pieces(pieces));

        prop_assert_eq!(result.tubs, pieces.div_ceil(count_per_tub));
        prop_assert!(result.tubs as u64 * count_per_tub as u64 >= pieces as u64);
        prop_assert_eq!(result.trays, TrayCount::zero());
    }

    // -- Determinism ---------------------------------------------------------

    /// Same config + same quantity = same result, always.
    #[test]
    fn calculation_is_deterministic(
        grams in 0i64..=10_000_000,
        tray_weight in 10i64..=50_000,
    ) {
        let cfg = tray_config(tray_weight, 20);
        let quantity = Quantity::Weight(Weight::from_grams(grams));
        prop_assert_eq!(
            calculate_line(&cfg, quantity),
            calculate_line(&cfg, quantity)
        );
    }

    // -- Aggregation law -----------------------------------------------------

    /// Totals are field-wise sums over the lines, in any order.
    #[test]
    fn totals_are_sums(weights in prop::collection::vec(0i64..=100_000, 0..20)) {
        let cfg = tray_config(400, 20);
        let lines: Vec<_> = weights
            .iter()
            .map(|&g| calculate_line(&cfg, Quantity::Weight(Weight::from_grams(g))))
            .collect();

        let totals = aggregate(&lines);

        let mut weight = Weight::zero();
        let mut trays = TrayCount::zero();
        let mut boxes = 0u32;
        for line in &lines {
            weight += line.weight;
            trays += line.trays;
            boxes += line.boxes;
        }

        prop_assert_eq!(totals.weight, weight);
        prop_assert_eq!(totals.trays, trays);
        prop_assert_eq!(totals.boxes, boxes);
        prop_assert_eq!(totals.item_count as usize, lines.len());

        // Order independence
        let mut reversed = lines.clone();
        reversed.reverse();
        let reversed_totals = aggregate(&reversed);
        prop_assert_eq!(totals.weight, reversed_totals.weight);
        prop_assert_eq!(totals.trays, reversed_totals.trays);
        prop_assert_eq!(totals.tubs, reversed_totals.tubs);
        prop_assert_eq!(totals.boxes, reversed_totals.boxes);
    }
}
