//! Display units.
//!
//! Every measurement travels as canonical inches. A [`Unit`] only describes
//! how a user interface presents those inches.
//!
//! ```
//! use framelink::units::Unit;
//! assert_eq!(Unit::Millimeters.to_display(2.0), 50.8);
//! assert_eq!("mm".parse::<Unit>().unwrap(), Unit::Millimeters);
//! ```

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// The unit a user interface displays measurements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Inches,
    Millimeters,
}

/// Returned when parsing an unknown unit name.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownUnit;

impl core::fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown unit, expected \"inches\" or \"mm\"")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownUnit {}

impl Unit {
    /// The name used for the persisted unit preference.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inches => "inches",
            Self::Millimeters => "mm",
        }
    }

    /// Converts a value in inches into this unit.
    #[must_use]
    pub fn to_display(self, inches: f64) -> f64 {
        match self {
            Self::Inches => inches,
            Self::Millimeters => inches * MM_PER_INCH,
        }
    }

    /// Converts a value expressed in this unit back into inches.
    #[must_use]
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Self::Inches => value,
            Self::Millimeters => value / MM_PER_INCH,
        }
    }
}

impl core::str::FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inches" | "in" => Ok(Self::Inches),
            "mm" | "millimeters" => Ok(Self::Millimeters),
            _ => Err(UnknownUnit),
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
