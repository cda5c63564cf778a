//! # Error Types
//!
//! Domain-specific error types for packhouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  packhouse-core errors (this file)                                      │
//! │  ├── ConfigError       - A packaging parameter could not be resolved   │
//! │  ├── UnitMismatchError - Order unit unsupported by product packaging   │
//! │  └── ValidationError   - Input validation failures                     │
//! │                                                                         │
//! │  Outer layers (storage / request handling, separate crates)            │
//! │  └── translate CoreError into their own error surface                  │
//! │                                                                         │
//! │  Flow: ValidationError / ConfigError → CoreError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name, value)
//! 3. Errors are enum variants, never String
//! 4. No error is retried - the engine is a pure computation, retrying
//!    with the same inputs changes nothing

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// A required packaging parameter could not be resolved.
///
/// Resolution walks line override → customer rule → product default →
/// system default. If every source is absent for a required numeric
/// field, or the winning source carries a non-positive value, the line
/// cannot be calculated: substituting zero would cause a division by
/// zero downstream, so we fail loudly instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No source (override, rule, product, system default) provided a
    /// value for a required field.
    ///
    /// ## When This Occurs
    /// - A meatball product ordered by piece count has no
    ///   `count_per_tub` anywhere (there is deliberately no system
    ///   default for it - the per-tub count is a product property)
    #[error("product {product_id}: no value for required parameter '{field}'")]
    Missing { product_id: String, field: String },

    /// A source provided a value, but it is zero or negative.
    ///
    /// ## When This Occurs
    /// - Catalog data with a 0 kg tray weight slipped past upstream
    ///   validation
    /// - A customer rule with `trays_per_box: 0`
    /// - A rounding multiple of 0 (must be >= 1)
    #[error("product {product_id}: parameter '{field}' resolved to non-positive value {value}")]
    NonPositive {
        product_id: String,
        field: String,
        value: i64,
    },
}

// =============================================================================
// Unit Mismatch Error
// =============================================================================

/// The requested order-by unit is unsupported by the product's packaging.
///
/// ## When This Occurs
/// - A tub-packed product without piece packaging is ordered by piece
///   count. Sausages and burgers ordered by pieces are interpreted as
///   packet (tray) counts, which only works when they pack into trays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("product {product_id}: cannot order a {category} packed as {pack_type} by {order_unit}")]
pub struct UnitMismatchError {
    pub product_id: String,
    pub category: String,
    pub pack_type: String,
    pub order_unit: String,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied input doesn't meet
/// requirements. Used by the request layer for early validation before
/// the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad characters in an identifier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for the engine.
///
/// Callers decide whether to reject the whole order, prompt the user,
/// or skip the offending line - nothing is recoverable inside the
/// engine itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Packaging configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Order unit unsupported by the product's packaging.
    #[error("unit mismatch: {0}")]
    UnitMismatch(#[from] UnitMismatchError),

    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
