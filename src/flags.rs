//! The trailing flags byte.
//!
//! Bit 0 records whether the design includes a mat, bit 1 whether the sender
//! displayed millimeters. Bits 2 to 7 are reserved and always written as zero.

const INCLUDE_MAT: u8 = 0b0000_0001;
const UNIT_MM: u8 = 0b0000_0010;
const KNOWN: u8 = INCLUDE_MAT | UNIT_MM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    #[must_use]
    pub const fn new(include_mat: bool, unit_is_millimeters: bool) -> Self {
        let mut bits = 0;
        if include_mat {
            bits |= INCLUDE_MAT;
        }
        if unit_is_millimeters {
            bits |= UNIT_MM;
        }
        Self(bits)
    }

    /// Reads a flags byte off the wire. Reserved bits are dropped.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte & KNOWN)
    }

    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn include_mat(self) -> bool {
        self.0 & INCLUDE_MAT != 0
    }

    #[must_use]
    pub const fn unit_is_millimeters(self) -> bool {
        self.0 & UNIT_MM != 0
    }
}
