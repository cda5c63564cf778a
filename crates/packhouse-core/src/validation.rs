//! # Validation Module
//!
//! Input validation utilities for order entry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Order entry UI                                                │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                        │
//! │  ├── Quantities within sane operational bounds                         │
//! │  └── Identifiers well-formed                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Config resolution (config.rs)                                 │
//! │  └── Every divisor strictly positive before any arithmetic             │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use packhouse_core::validation::{validate_product_id, validate_order_weight};
//! use packhouse_core::weight::Weight;
//!
//! validate_product_id("chicken-sausage").unwrap();
//! validate_order_weight(Weight::from_kg(8.3)).unwrap();
//! ```

use crate::error::ValidationError;
use crate::weight::Weight;
use crate::{MAX_ORDER_WEIGHT, MAX_UNITS_PER_BOX, MAX_UNIT_WEIGHT, MIN_UNIT_WEIGHT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Maximum identifier length. Catalog and customer ids are slugs like
/// `chicken-sausage-50g` or `haji-baba`; anything longer is a paste
/// error.
const MAX_ID_LEN: usize = 64;

/// Maximum display-name length. Names go on physical packing labels,
/// which truncate well before this.
const MAX_NAME_LEN: usize = 120;

/// Validates a product identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
/// - Slug characters only: letters, numbers, hyphens, underscores
///
/// ## Example
/// ```rust
/// use packhouse_core::validation::validate_product_id;
///
/// assert!(validate_product_id("chicken-sausage-50g").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("a".repeat(100).as_str()).is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    validate_id(id, "product_id")
}

/// Validates a customer identifier. Same shape rules as product ids.
pub fn validate_customer_id(id: &str) -> ValidationResult<()> {
    validate_id(id, "customer_id")
}

fn validate_id(id: &str, field: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    let is_slug_char = |c: char| c.is_alphanumeric() || c == '-' || c == '_';
    if !id.chars().all(is_slug_char) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a slug: letters, numbers, hyphens and underscores only".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 120 characters (names print on packing labels)
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates an ordered weight.
///
/// ## Rules
/// - Must not be negative (zero is allowed: an unfilled line)
/// - Must not exceed MAX_ORDER_WEIGHT (10 tonnes per line)
pub fn validate_order_weight(weight: Weight) -> ValidationResult<()> {
    if weight.grams() < 0 || weight > MAX_ORDER_WEIGHT {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ORDER_WEIGHT.grams(),
        });
    }

    Ok(())
}

/// Validates an ordered unit count (trays or pieces).
///
/// Zero is allowed for the same reason as weight: order lines start
/// unfilled and calculate to all-zero results.
pub fn validate_order_count(count: u32) -> ValidationResult<()> {
    if count > 100_000 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: 100_000,
        });
    }

    Ok(())
}

// =============================================================================
// Packaging Parameter Validators
// =============================================================================

/// Validates a per-unit container weight (tray or tub).
///
/// ## Rules
/// - Must be between MIN_UNIT_WEIGHT (10 g) and MAX_UNIT_WEIGHT (50 kg)
///
/// ## Example
/// ```rust
/// use packhouse_core::validation::validate_unit_weight;
/// use packhouse_core::weight::Weight;
///
/// assert!(validate_unit_weight(Weight::from_grams(400)).is_ok());
/// assert!(validate_unit_weight(Weight::zero()).is_err());
/// ```
pub fn validate_unit_weight(weight: Weight) -> ValidationResult<()> {
    if weight < MIN_UNIT_WEIGHT || weight > MAX_UNIT_WEIGHT {
        return Err(ValidationError::OutOfRange {
            field: "unit weight".to_string(),
            min: MIN_UNIT_WEIGHT.grams(),
            max: MAX_UNIT_WEIGHT.grams(),
        });
    }

    Ok(())
}

/// Validates a units-per-box capacity (trays or tubs per box).
///
/// ## Rules
/// - Must be between 1 and MAX_UNITS_PER_BOX (100)
pub fn validate_units_per_box(units: u32) -> ValidationResult<()> {
    if units == 0 {
        return Err(ValidationError::MustBePositive {
            field: "units per box".to_string(),
        });
    }

    if units > MAX_UNITS_PER_BOX {
        return Err(ValidationError::OutOfRange {
            field: "units per box".to_string(),
            min: 1,
            max: MAX_UNITS_PER_BOX as i64,
        });
    }

    Ok(())
}

/// Validates a rounding multiple.
///
/// ## Rules
/// - Must be positive; 1 means no multiple constraint
pub fn validate_round_to_multiple(multiple: u32) -> ValidationResult<()> {
    if multiple == 0 {
        return Err(ValidationError::MustBePositive {
            field: "round to multiple".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
