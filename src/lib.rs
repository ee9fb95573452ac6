//! `framelink` packs a complete picture frame design into a short token that
//! travels in a URL query parameter or a QR code. Nothing is stored on a
//! server: the link itself is the design.
//!
//! # Encode a design
//! ```
//! use framelink::{Field, FrameConfiguration};
//! let mut config = FrameConfiguration::default();
//! config.set_inches(Field::Height, 10.0).unwrap();
//! let token = framelink::token::encode(&config).unwrap();
//! assert_eq!(token.len(), 38);
//! assert_eq!(framelink::token::decode(&token).unwrap(), config);
//! ```
//!
//! # Reject what cannot be shared exactly
//!
//! Every measurement is stored as whole 1/10000 inch ticks in a 24-bit or a
//! 16-bit slot. Values that overflow their slot are refused rather than
//! truncated.
//! ```
//! use framelink::{Field, FrameConfiguration, RangeError};
//! let mut config = FrameConfiguration::default();
//! config.set_inches(Field::GlazingThickness, 6.5536).unwrap();
//! assert!(matches!(
//!     framelink::token::encode(&config),
//!     Err(RangeError::OutOfRange { field: Field::GlazingThickness, .. })
//! ));
//! ```
//!
//! # Share and restore a link
//! ```
//! use framelink::share::{Loaded, ShareConfig};
//! use framelink::FrameConfiguration;
//! let share = ShareConfig::default();
//! let url = share.share_url(&FrameConfiguration::default()).unwrap();
//! assert!(url.starts_with("https://glarue.github.io/ReferenceFrame/?d="));
//!
//! let loaded = share.load(&url, &|| None::<FrameConfiguration>, &mut |_: &str| {});
//! assert!(loaded.is_from_url());
//! ```

pub mod codec;
pub mod config;
mod error;
pub mod field;
pub mod flags;
pub mod share;
pub mod ticks;
pub mod token;
pub mod units;

pub use self::config::FrameConfiguration;
pub use self::error::{FormatError, RangeError};
pub use self::field::Field;
pub use self::flags::Flags;
pub use self::ticks::Ticks;
pub use self::units::Unit;
