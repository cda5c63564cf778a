//! # Weight Module
//!
//! Provides the `Weight` and `TrayCount` fixed-point types used by all
//! packing arithmetic.
//!
//! ## Why Integer Weights?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    8.3 / 0.4 = 20.749999999999996  ❌ ceil() still saves us, but...    │
//! │    0.1 + 0.2 = 0.30000000000000004 ❌ totals drift                     │
//! │                                                                         │
//! │  A packing sheet drives physical labelling and loading: the same       │
//! │  order must ALWAYS re-calculate to the same tray/tub/box numbers.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Grams                                            │
//! │    8300 g / 400 g = 20 rem 300 → 21 trays, exactly, every time         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use packhouse_core::weight::Weight;
//!
//! // Create from grams (preferred)
//! let ordered = Weight::from_grams(8_300); // 8.3 kg
//! let tray = Weight::from_grams(400);      // 0.4 kg tray
//!
//! // Whole trays needed, rounding up
//! assert_eq!(ordered.div_ceil_by(tray), 21);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Weight Type
// =============================================================================

/// A weight in grams (the smallest unit we pack by).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows representing corrections/adjustments from
///   outer layers; the engine itself treats non-positive as "empty line"
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Kilogram floats exist only at the UI edge; they are converted to
/// grams on the way in and back to a display string on the way out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Weight(i64);

impl Weight {
    /// Creates a Weight from grams.
    ///
    /// ## Example
    /// ```rust
    /// use packhouse_core::weight::Weight;
    ///
    /// let tray = Weight::from_grams(400);
    /// assert_eq!(tray.grams(), 400);
    /// ```
    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Creates a Weight from kilograms, rounding to the nearest gram.
    ///
    /// This is the conversion for caller-supplied quantities ("13 kg of
    /// beef sausage"). Gram precision is far finer than any scale on
    /// the packing floor, so the rounding is lossless in practice.
    ///
    /// ## Example
    /// ```rust
    /// use packhouse_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_kg(8.3).grams(), 8_300);
    /// assert_eq!(Weight::from_kg(0.4).grams(), 400);
    /// ```
    #[inline]
    pub fn from_kg(kg: f64) -> Self {
        Weight((kg * 1000.0).round() as i64)
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Returns the weight in kilograms (for display only).
    #[inline]
    pub fn kg(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Checks if the weight is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the weight is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Whole packing units of size `unit` needed to hold this weight,
    /// rounding any remainder up to a full unit.
    ///
    /// Callers must guarantee `unit` is positive; the config builder
    /// enforces this before any calculation runs.
    ///
    /// ## Example
    /// ```rust
    /// use packhouse_core::weight::Weight;
    ///
    /// let ordered = Weight::from_grams(13_000); // 13 kg
    /// let tub = Weight::from_grams(5_000);      // 5 kg tub
    /// assert_eq!(ordered.div_ceil_by(tub), 3);
    /// ```
    #[inline]
    pub const fn div_ceil_by(&self, unit: Weight) -> u32 {
        if self.0 <= 0 {
            return 0;
        }
        ((self.0 + unit.0 - 1) / unit.0) as u32
    }
}

/// Display implementation shows the weight in kilograms.
///
/// ## Note
/// This is for debugging and packing sheets. Frontend formatting
/// handles localization separately.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let grams = self.0.abs();
        write!(f, "{}{}.{:03} kg", sign, grams / 1000, grams % 1000)
    }
}

impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Weight {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Weight(self.0 - other.0)
    }
}

impl SubAssign for Weight {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count (e.g., tray weight × trays packed).
impl Mul<u32> for Weight {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Weight(self.0 * count as i64)
    }
}

impl Mul<i64> for Weight {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Weight(self.0 * count)
    }
}

// =============================================================================
// TrayCount Type
// =============================================================================

/// A tray count in centitrays (hundredths of a tray).
///
/// ## Why Fixed-Point Trays?
/// Every rounding policy except `none` produces whole trays. Under the
/// `none` policy a customer's own unit accounting guarantees whole
/// trays, but the engine must still carry the exact quotient of
/// weight ÷ tray weight without inventing rounding. Hundredths of a
/// tray sum exactly, compare exactly, and serialize exactly - the same
/// integer discipline as [`Weight`].
///
/// ## Usage
/// ```rust
/// use packhouse_core::weight::{TrayCount, Weight};
///
/// let whole = TrayCount::from_whole(21);
/// assert!(whole.is_whole());
///
/// let exact = TrayCount::from_ratio(Weight::from_grams(8_300), Weight::from_grams(400));
/// assert_eq!(exact.centitrays(), 2_075); // 20.75 trays
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct TrayCount(i64);

/// Centitrays per tray.
const CENTI: i64 = 100;

impl TrayCount {
    /// Creates a count of whole trays.
    #[inline]
    pub const fn from_whole(trays: u32) -> Self {
        TrayCount(trays as i64 * CENTI)
    }

    /// Creates a count from raw centitrays.
    #[inline]
    pub const fn from_centitrays(centitrays: i64) -> Self {
        TrayCount(centitrays)
    }

    /// Exact quotient `quantity / per_tray` to centitray precision,
    /// rounding to the nearest centitray.
    ///
    /// Used only by the `none` rounding policy, where non-integer tray
    /// counts are permitted by design.
    #[inline]
    pub const fn from_ratio(quantity: Weight, per_tray: Weight) -> Self {
        if quantity.grams() <= 0 {
            return TrayCount(0);
        }
        let numerator = quantity.grams() * CENTI;
        let divisor = per_tray.grams();
        TrayCount((numerator + divisor / 2) / divisor)
    }

    /// Returns the raw centitray value.
    #[inline]
    pub const fn centitrays(&self) -> i64 {
        self.0
    }

    /// Returns the count as f64 (for display only).
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / CENTI as f64
    }

    /// Checks if the count is a whole number of trays.
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % CENTI == 0
    }

    /// Smallest whole tray count that covers this count.
    ///
    /// A partial tray is still a physical tray on the floor (and gets
    /// its own label).
    #[inline]
    pub const fn ceil_whole(&self) -> i64 {
        (self.0 + CENTI - 1) / CENTI
    }

    /// Boxes needed to hold this many trays at `per_box` trays per box,
    /// rounding any remainder up to a full box.
    #[inline]
    pub const fn boxes_for(&self, per_box: u32) -> u32 {
        if self.0 <= 0 {
            return 0;
        }
        let per_box_centi = per_box as i64 * CENTI;
        ((self.0 + per_box_centi - 1) / per_box_centi) as u32
    }

    /// Zero trays.
    #[inline]
    pub const fn zero() -> Self {
        TrayCount(0)
    }

    /// Checks if the count is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Display trims insignificant zeros: "21", "20.5" or "20.75".
impl fmt::Display for TrayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / CENTI;
        let frac = (self.0 % CENTI).abs();
        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

impl Add for TrayCount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TrayCount(self.0 + other.0)
    }
}

impl AddAssign for TrayCount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
