use crate::field::Field;

/// A measurement that cannot be represented on the wire.
///
/// Encoding rejects rather than truncates, so a link is either exact or not
/// produced at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The tick count does not fit the field's wire slot. Counts beyond a
    /// `u32` are reported as `u32::MAX`.
    OutOfRange { field: Field, ticks: u32, max: u32 },
    /// The value is negative, NaN, infinite, or not a number at all.
    InvalidMeasurement { field: Field },
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { field, ticks, max } => write!(
                f,
                "{field} is too large to share ({ticks} ticks, max {max})"
            ),
            Self::InvalidMeasurement { field } => {
                write!(f, "{field} is not a valid measurement")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// A token that does not decode to a frame configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The token is not base64 in either alphabet.
    InvalidBase64,
    /// The token decodes to the wrong number of bytes.
    InvalidLength(usize),
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBase64 => write!(f, "invalid base64"),
            Self::InvalidLength(len) => write!(
                f,
                "invalid length ({len} bytes, expected {})",
                crate::codec::ENCODED_LEN
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}
