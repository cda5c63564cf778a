//! # packhouse-core: Pure Packing Logic for Packhouse
//!
//! This crate is the **heart** of Packhouse. It converts ordered
//! quantities into physical packing requirements (trays, tubs, boxes)
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Packhouse Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Order Entry Frontend                          │   │
//! │  │    Product picker ──► Quantity entry ──► Packing summary        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Request / Storage Layer                       │   │
//! │  │    loads catalog + customer rules, persists orders              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ packhouse-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │  weight   │  │ calculator │  │   rules   │ │   │
//! │  │   │  Product  │  │  Weight   │  │ LineResult │  │ find_rule │ │   │
//! │  │   │   Rule    │  │ TrayCount │  │  dispatch  │  │   seeds   │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘ │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐                │   │
//! │  │   │  config   │  │ aggregate │  │ validation │                │   │
//! │  │   │ resolve   │  │  totals   │  │   checks   │                │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductDefinition, CustomerPackagingRule, enums)
//! - [`weight`] - Weight and TrayCount with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`config`] - Effective-config resolution (override → rule → product → default)
//! - [`calculator`] - Per-line packing calculation
//! - [`aggregate`] - Order-level totals
//! - [`rules`] - Customer rule lookup and seed data
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Weights**: All weights are in grams (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use packhouse_core::calculator::{calculate_line, Quantity};
//! use packhouse_core::config::{resolve_config, LineOverrides};
//! use packhouse_core::rules::{find_rule, seed_catalog, seed_rule_book};
//!
//! let catalog = seed_catalog();
//! let rules = seed_rule_book();
//! let product = catalog.iter().find(|p| p.id == "chicken-sausage").unwrap();
//!
//! // Walk-in customer, 8.3 kg of sausages in 0.4 kg trays:
//! let rule = find_rule("walk-in", &product.id, &rules);
//! let config = resolve_config(product, rule, &LineOverrides::none()).unwrap();
//! let line = calculate_line(&config, Quantity::from_kg(8.3));
//!
//! // 8.3 / 0.4 = 20.75 → 21 trays, 21 trays → 2 boxes of 20
//! assert_eq!(line.trays.ceil_whole(), 21);
//! assert_eq!(line.boxes, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod error;
pub mod rules;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use packhouse_core::Weight` instead of
// `use packhouse_core::weight::Weight`

pub use aggregate::{aggregate, calculate_order, OrderCalculation, OrderItemInput, OrderTotals};
pub use calculator::{calculate_line, LineResult, Quantity};
pub use config::{resolve_config, EffectiveConfig, LineOverrides};
pub use error::{ConfigError, CoreError, CoreResult, UnitMismatchError, ValidationError};
pub use rules::find_rule;
pub use types::*;
pub use weight::{TrayCount, Weight};

// =============================================================================
// System Packaging Defaults
// =============================================================================
// Last-resort fallbacks when neither a line override, a customer rule
// nor the product definition supplies a value. There is deliberately
// NO default for count_per_tub: a per-tub piece count is a product
// property, and guessing one would mislabel real stock.

/// Default tray weight: 0.4 kg of sausages per sealed tray.
pub const DEFAULT_TRAY_WEIGHT: Weight = Weight::from_grams(400);

/// Default trays per shipping box.
pub const DEFAULT_TRAYS_PER_BOX: u32 = 20;

/// Default burger patty weight: 0.1 kg each.
pub const DEFAULT_PATTY_WEIGHT: Weight = Weight::from_grams(100);

/// Default patties per burger tray (a 1 kg tray).
pub const DEFAULT_PATTIES_PER_TRAY: u32 = 10;

/// Default burger trays per shipping box. Burger trays are heavier
/// than sausage trays, so fewer fit a box.
pub const DEFAULT_BURGER_TRAYS_PER_BOX: u32 = 10;

/// Default deep (5 kg) tubs per shipping box.
pub const DEFAULT_DEEP_TUBS_PER_BOX: u32 = 3;

/// Default shallow (1 kg / 2 kg) tubs per shipping box.
pub const DEFAULT_SHALLOW_TUBS_PER_BOX: u32 = 7;

// =============================================================================
// Operational Limits
// =============================================================================

/// Maximum ordered weight per line: 10 tonnes.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 100).
pub const MAX_ORDER_WEIGHT: Weight = Weight::from_grams(10_000_000);

/// Minimum per-unit container weight: 10 g.
pub const MIN_UNIT_WEIGHT: Weight = Weight::from_grams(10);

/// Maximum per-unit container weight: 50 kg.
pub const MAX_UNIT_WEIGHT: Weight = Weight::from_grams(50_000);

/// Maximum units (trays or tubs) per shipping box.
pub const MAX_UNITS_PER_BOX: u32 = 100;
