//! URL-safe text tokens.
//!
//! A token is the base64 form of the 28 wire bytes with `+` and `/` replaced
//! by `-` and `_` and the trailing `=` padding removed, which makes it safe to
//! drop straight into a query string.
//!
//! ```
//! use framelink::{token, FrameConfiguration};
//! let config = FrameConfiguration::default();
//! let encoded = token::encode(&config).unwrap();
//! assert_eq!(encoded, "AehIAtxsAE4gAB1MAB1MA6ICJgBQBOIOpgTiAQ");
//! assert_eq!(token::decode(&encoded).unwrap(), config);
//! // hand-edited tokens degrade to an error, never a panic
//! assert!(token::decode("not a token").is_err());
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::codec::ENCODED_LEN;
use crate::error::{FormatError, RangeError};
use crate::FrameConfiguration;

/// Longest token that can hold [`ENCODED_LEN`] bytes, padding included.
pub const MAX_TOKEN_LEN: usize = 4 * ENCODED_LEN.div_ceil(3);

/// Encodes a configuration into a URL-safe token.
///
/// # Errors
///
/// Fails with [`RangeError::OutOfRange`] when a field does not fit its wire
/// slot. Nothing is truncated.
pub fn encode(config: &FrameConfiguration) -> Result<String, RangeError> {
    let bytes = crate::codec::encode(config)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decodes a token produced by [`encode`].
///
/// Padded and unpadded tokens are accepted, in either base64 alphabet.
///
/// # Errors
///
/// Fails with [`FormatError::InvalidBase64`] for text that is not base64 and
/// with [`FormatError::InvalidLength`] when it does not hold exactly
/// [`ENCODED_LEN`] bytes. Text longer than [`MAX_TOKEN_LEN`] is refused
/// before decoding and reports the byte length it would decode to.
pub fn decode(token: &str) -> Result<FrameConfiguration, FormatError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(FormatError::InvalidLength(token.len() / 4 * 3));
    }
    crate::codec::decode(&decode_bytes(token)?)
}

/// Reverses the URL-safe substitutions, restores padding and decodes the
/// raw bytes without checking their length.
///
/// # Errors
///
/// Fails with [`FormatError::InvalidBase64`] for text that is not base64.
pub fn decode_bytes(token: &str) -> Result<Vec<u8>, FormatError> {
    let mut standard: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }
    STANDARD
        .decode(standard)
        .map_err(|_| FormatError::InvalidBase64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_utils::{make_configs, scenario};
    use crate::{Field, Ticks};

    #[test]
    fn test_scenario_token() {
        let encoded = encode(&scenario()).unwrap();
        assert_eq!(encoded, "AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ");
        assert_eq!(encoded.len(), 38);
        assert_eq!(decode(&encoded).unwrap(), scenario());
    }

    #[test]
    fn test_url_safe_alphabet() {
        let mut config = scenario();
        config.set_inches(Field::Height, 1677.7215).unwrap();
        config.set_inches(Field::GlazingThickness, 6.5535).unwrap();
        config.unit_is_millimeters = true;
        let encoded = encode(&config).unwrap();
        assert!(encoded.starts_with("____"));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.ends_with('='));
        assert_eq!(decode(&encoded).unwrap(), config);
    }

    #[test]
    fn test_seeded_tokens_are_url_safe() {
        for config in make_configs(7, 200) {
            let encoded = encode(&config).unwrap();
            assert!(encoded
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
            assert_eq!(decode(&encoded).unwrap(), config);
        }
    }

    #[test]
    fn test_padded_and_standard_forms() {
        let padded = "AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ==";
        assert_eq!(decode(padded).unwrap(), scenario());

        let mut config = scenario();
        config.set(Field::Height, Ticks::new(0x00FF_FFFF));
        let url_safe = encode(&config).unwrap();
        let standard = url_safe.replace('_', "/").replace('-', "+");
        assert_ne!(url_safe, standard);
        assert_eq!(decode(&standard).unwrap(), config);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode("").unwrap_err(), FormatError::InvalidLength(0));
        // 27 zero bytes
        assert_eq!(
            decode("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap_err(),
            FormatError::InvalidLength(27)
        );
        assert_eq!(decode("!!not*base64!!").unwrap_err(), FormatError::InvalidBase64);
        assert_eq!(decode("₿₿₿₿").unwrap_err(), FormatError::InvalidBase64);
        assert_eq!(decode("A").unwrap_err(), FormatError::InvalidBase64);
        assert_eq!(decode("AYag=ATi").unwrap_err(), FormatError::InvalidBase64);
    }

    #[test]
    fn test_oversized_token_is_refused_early() {
        assert_eq!(MAX_TOKEN_LEN, 40);
        let padded = "AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ==";
        assert_eq!(padded.len(), MAX_TOKEN_LEN);
        assert_eq!(decode(padded).unwrap(), scenario());

        let huge = "A".repeat(4_000_000);
        assert_eq!(
            decode(&huge).unwrap_err(),
            FormatError::InvalidLength(3_000_000)
        );
        assert_eq!(
            decode(&"A".repeat(44)).unwrap_err(),
            FormatError::InvalidLength(33)
        );
    }

    #[test]
    fn test_truncated_token() {
        let encoded = encode(&scenario()).unwrap();
        assert!(decode(&encoded[..encoded.len() - 2]).is_err());
        assert!(decode(&encoded[..encoded.len() - 4]).is_err());
    }
}
