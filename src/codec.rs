//! The fixed 28-byte binary layout.
//!
//! ```text
//! offset  len  content
//!      0   15  5 × u24 BE: height, width, mat width, frame width, frame depth
//!     15   12  6 × u16 BE: glazing, matboard, artwork, backing, rabbet depth, blade width
//!     27    1  flags: bit 0 include mat, bit 1 millimeter display, bits 2-7 zero
//! ```
//!
//! Every measurement is a tick count in 1/10000 inch.
//!
//! ```
//! use framelink::{codec, FrameConfiguration};
//! let config = FrameConfiguration::default();
//! let bytes = codec::encode(&config).unwrap();
//! assert_eq!(bytes.len(), codec::ENCODED_LEN);
//! assert_eq!(codec::decode(&bytes).unwrap(), config);
//! ```

use crate::error::{FormatError, RangeError};
use crate::field::{Field, Slot};
use crate::flags::Flags;
use crate::ticks::Ticks;
use crate::FrameConfiguration;

/// Size of an encoded configuration in bytes.
pub const ENCODED_LEN: usize = 28;

const FLAGS_OFFSET: usize = ENCODED_LEN - 1;

/// Packs a configuration into its wire form.
///
/// # Errors
///
/// Fails with [`RangeError::OutOfRange`] for the first field, in wire order,
/// whose tick count exceeds its slot.
pub fn encode(config: &FrameConfiguration) -> Result<[u8; ENCODED_LEN], RangeError> {
    config.validate()?;
    let mut out = [0_u8; ENCODED_LEN];
    let mut offset = 0;
    for field in Field::ALL {
        let len = field.slot().byte_len();
        // big-endian, keeping the low `len` bytes
        let be = config.get(field).count().to_be_bytes();
        out[offset..offset + len].copy_from_slice(&be[4 - len..]);
        offset += len;
    }
    out[FLAGS_OFFSET] = config.flags().byte();
    Ok(out)
}

/// Unpacks a configuration from its wire form.
///
/// Reserved flag bits are ignored.
///
/// # Errors
///
/// Fails with [`FormatError::InvalidLength`] unless `bytes` is exactly
/// [`ENCODED_LEN`] long.
pub fn decode(bytes: &[u8]) -> Result<FrameConfiguration, FormatError> {
    if bytes.len() != ENCODED_LEN {
        return Err(FormatError::InvalidLength(bytes.len()));
    }
    let mut config = FrameConfiguration::default();
    let mut offset = 0;
    for field in Field::ALL {
        let len = field.slot().byte_len();
        config.set(field, read_uint(&bytes[offset..offset + len]));
        offset += len;
    }
    config.set_flags(Flags::from_byte(bytes[FLAGS_OFFSET]));
    Ok(config)
}

fn read_uint(bytes: &[u8]) -> Ticks {
    Ticks::new(
        bytes
            .iter()
            .fold(0_u32, |acc, &b| (acc << 8) | u32::from(b)),
    )
}

// Keeps the layout table above honest.
const _: () = {
    let mut total = 0;
    let mut i = 0;
    while i < Field::ALL.len() {
        total += Field::ALL[i].slot().byte_len();
        i += 1;
    }
    assert!(total == FLAGS_OFFSET);
    assert!(matches!(Field::ALL[4].slot(), Slot::U24));
};
