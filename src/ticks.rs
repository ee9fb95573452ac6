//! Fixed-point measurements in units of 1/10000 inch.
//!
//! A [`Ticks`] value is the integer the wire format stores. Converting from a
//! decimal inch value rounds to the nearest tick, so anything finer than four
//! decimal digits is lost at that point and only there: encoding and decoding
//! move integers around and never touch floating point.
//!
//! ```
//! use framelink::Ticks;
//! let ticks = Ticks::from_inches(0.375).unwrap();
//! assert_eq!(ticks.count(), 3750);
//! assert_eq!(ticks.inches(), 0.375);
//! assert_eq!(ticks.to_string(), "0.3750");
//! // precision beyond 1/10000 inch is rounded away
//! assert_eq!(Ticks::from_inches(0.123_46).unwrap().count(), 1235);
//! ```

use crate::units::Unit;

/// Number of ticks in one inch.
pub const TICKS_PER_INCH: u32 = 10_000;

/// A nonnegative measurement counted in 1/10000 inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticks(u32);

impl Ticks {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// The raw tick count.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0
    }

    /// Rounds a decimal inch value to the nearest tick, halves rounding up.
    ///
    /// # Errors
    ///
    /// [`InvalidTicks::NotAMeasurement`] for negative, NaN or infinite input,
    /// [`InvalidTicks::TooLarge`] for values too large to count in a `u32`.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_inches(inches: f64) -> Result<Self, InvalidTicks> {
        if !inches.is_finite() || inches < 0.0 {
            return Err(InvalidTicks::NotAMeasurement);
        }
        let scaled = inches * f64::from(TICKS_PER_INCH) + 0.5;
        if scaled >= f64::from(u32::MAX) + 1.0 {
            return Err(InvalidTicks::TooLarge);
        }
        Ok(Self(scaled as u32))
    }

    /// Like [`Ticks::from_inches`], for a value expressed in `unit`.
    ///
    /// # Errors
    ///
    /// See [`Ticks::from_inches`].
    pub fn from_unit(value: f64, unit: Unit) -> Result<Self, InvalidTicks> {
        Self::from_inches(unit.to_inches(value))
    }

    #[must_use]
    pub fn inches(self) -> f64 {
        f64::from(self.0) / f64::from(TICKS_PER_INCH)
    }

    /// The measurement expressed in `unit`.
    #[must_use]
    pub fn in_unit(self, unit: Unit) -> f64 {
        unit.to_display(self.inches())
    }
}

impl From<u32> for Ticks {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

/// Why a value has no tick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTicks {
    /// Negative, NaN, infinite or not a number at all.
    NotAMeasurement,
    /// More ticks than a `u32` holds.
    TooLarge,
}

impl core::fmt::Display for InvalidTicks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotAMeasurement => write!(f, "not a nonnegative inch measurement"),
            Self::TooLarge => write!(f, "measurement too large"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidTicks {}

impl core::str::FromStr for Ticks {
    type Err = InvalidTicks;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inches: f64 = s.trim().parse().map_err(|_| InvalidTicks::NotAMeasurement)?;
        Self::from_inches(inches)
    }
}

impl core::fmt::Display for Ticks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}.{:04}",
            self.0 / TICKS_PER_INCH,
            self.0 % TICKS_PER_INCH
        )
    }
}
