//! Shareable links and startup precedence.
//!
//! A share link is the application URL with the token in a single query
//! parameter. The same string is the QR payload. At startup a valid token in
//! the page URL wins over whatever was persisted locally; a missing or broken
//! one falls back to storage without bothering the user.
//!
//! ```
//! use framelink::share::{Loaded, ShareConfig};
//! use framelink::FrameConfiguration;
//!
//! let share = ShareConfig::default();
//! let url = share.share_url(&FrameConfiguration::default()).unwrap();
//!
//! let mut visible = String::new();
//! let loaded = share.load(&url, &|| None::<FrameConfiguration>, &mut |clean: &str| visible = clean.to_owned());
//! assert_eq!(loaded, Loaded::FromUrl(FrameConfiguration::default()));
//! assert_eq!(visible, share.base_url);
//! ```

extern crate alloc;
use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RangeError;
use crate::FrameConfiguration;

/// Where the deployed application lives.
pub const DEFAULT_BASE_URL: &str = "https://glarue.github.io/ReferenceFrame/";

/// Query parameter carrying the token.
pub const DEFAULT_PARAM: &str = "d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// URL the token is appended to.
    pub base_url: String,
    /// Name of the query parameter holding the token.
    pub param: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            param: DEFAULT_PARAM.to_owned(),
        }
    }
}

/// Source of a previously persisted configuration.
pub trait Storage {
    fn load(&self) -> Option<FrameConfiguration>;
}

impl<F> Storage for F
where
    F: Fn() -> Option<FrameConfiguration>,
{
    fn load(&self) -> Option<FrameConfiguration> {
        self()
    }
}

/// The address bar. `replace` swaps the visible URL without a reload or a
/// new history entry.
pub trait History {
    fn replace(&mut self, url: &str);
}

impl<F> History for F
where
    F: FnMut(&str),
{
    fn replace(&mut self, url: &str) {
        self(url);
    }
}

/// Which configuration source won at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loaded {
    FromUrl(FrameConfiguration),
    FromStorage(FrameConfiguration),
    None,
}

impl Loaded {
    #[must_use]
    pub const fn config(&self) -> Option<&FrameConfiguration> {
        match self {
            Self::FromUrl(config) | Self::FromStorage(config) => Some(config),
            Self::None => None,
        }
    }

    #[must_use]
    pub const fn is_from_url(&self) -> bool {
        matches!(self, Self::FromUrl(_))
    }
}

impl ShareConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builds the shareable URL, which doubles as the QR payload.
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::OutOfRange`] when the design cannot be
    /// encoded exactly. Callers should tell the user instead of sharing.
    pub fn share_url(&self, config: &FrameConfiguration) -> Result<String, RangeError> {
        let token = crate::token::encode(config)?;
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{separator}{}={token}", self.base_url, self.param))
    }

    /// Finds the token in `url`'s query string.
    ///
    /// Percent-encoded padding is dropped since tokens decode without it.
    #[must_use]
    pub fn token_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let (_, query) = split_fragment(url).0.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (key, mut value) = pair.split_once('=').unwrap_or((pair, ""));
            if key != self.param {
                return None;
            }
            while let Some(rest) = value
                .strip_suffix("%3D")
                .or_else(|| value.strip_suffix("%3d"))
            {
                value = rest;
            }
            Some(value)
        })
    }

    /// Decodes the configuration carried by `url`, if any.
    ///
    /// A broken token is logged and treated as absent.
    #[must_use]
    pub fn decode_url(&self, url: &str) -> Option<FrameConfiguration> {
        let token = self.token_from_url(url)?;
        match crate::token::decode(token) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::debug!(param = %self.param, error = %err, "ignoring shared configuration");
                None
            }
        }
    }

    /// `url` without the token parameter. Other parameters and the fragment
    /// are kept.
    #[must_use]
    pub fn strip_param(&self, url: &str) -> String {
        let (before, fragment) = split_fragment(url);
        let Some((path, query)) = before.split_once('?') else {
            return url.to_owned();
        };
        let kept: Vec<&str> = query
            .split('&')
            .filter(|pair| {
                !pair.is_empty() && pair.split_once('=').map_or(*pair, |(k, _)| k) != self.param
            })
            .collect();

        let mut out = String::from(path);
        if !kept.is_empty() {
            out.push('?');
            out.push_str(&kept.join("&"));
        }
        if let Some(fragment) = fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    /// Picks the startup configuration for the page at `location`.
    ///
    /// A valid token wins; the visible URL is then replaced by the stripped
    /// one so a reload or bookmark does not apply the link again. Otherwise
    /// `storage` is consulted. Decoding failures never surface.
    pub fn load<S, H>(&self, location: &str, storage: &S, history: &mut H) -> Loaded
    where
        S: Storage + ?Sized,
        H: History + ?Sized,
    {
        if let Some(config) = self.decode_url(location) {
            tracing::debug!("configuration loaded from shared link");
            history.replace(&self.strip_param(location));
            return Loaded::FromUrl(config);
        }
        match storage.load() {
            Some(config) => {
                tracing::debug!("configuration restored from storage");
                Loaded::FromStorage(config)
            }
            None => Loaded::None,
        }
    }
}

// The fragment starts at the first `#`; a `?` after it is not a query.
fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (url, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_utils::scenario;
    use crate::{Field, Ticks};
    use qrcode::{EcLevel, QrCode, Version};

    const SCENARIO_URL: &str =
        "https://glarue.github.io/ReferenceFrame/?d=AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ";

    fn stored() -> FrameConfiguration {
        FrameConfiguration {
            include_mat: false,
            ..FrameConfiguration::default()
        }
    }

    #[test]
    fn test_share_url() {
        let share = ShareConfig::default();
        let url = share.share_url(&scenario()).unwrap();
        assert_eq!(url, SCENARIO_URL);
        assert_eq!(url.len(), 81);

        let share = ShareConfig::new("http://localhost:8000/?lang=en");
        assert_eq!(
            share.share_url(&scenario()).unwrap(),
            "http://localhost:8000/?lang=en&d=AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ"
        );
    }

    #[test]
    fn test_share_url_rejects_out_of_range() {
        let mut config = scenario();
        config.set(Field::BladeWidth, Ticks::new(70_000));
        assert!(matches!(
            ShareConfig::default().share_url(&config),
            Err(RangeError::OutOfRange {
                field: Field::BladeWidth,
                ..
            })
        ));
    }

    #[test]
    fn test_token_from_url() {
        let share = ShareConfig::default();
        assert_eq!(
            share.token_from_url("https://x/?a=1&d=abc&b=2#top"),
            Some("abc")
        );
        assert_eq!(share.token_from_url("https://x/?d=abc%3D%3D"), Some("abc"));
        assert_eq!(share.token_from_url("https://x/?d=abc%3D%3d"), Some("abc"));
        assert_eq!(share.token_from_url("https://x/?d=abc%3d%3D"), Some("abc"));
        assert_eq!(
            share.token_from_url(
                "https://x/#section?d=AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ"
            ),
            None
        );
        assert_eq!(share.token_from_url("https://x/?a=1#x?d=abc"), None);
        assert_eq!(share.token_from_url("https://x/?data=abc"), None);
        assert_eq!(share.token_from_url("https://x/#d=abc"), None);
        assert_eq!(share.token_from_url("https://x/"), None);
        assert_eq!(share.token_from_url("https://x/?d"), Some(""));
    }

    #[test]
    fn test_strip_param() {
        let share = ShareConfig::default();
        assert_eq!(
            share.strip_param(SCENARIO_URL),
            "https://glarue.github.io/ReferenceFrame/"
        );
        assert_eq!(
            share.strip_param("https://x/?a=1&d=abc&b=2#top"),
            "https://x/?a=1&b=2#top"
        );
        assert_eq!(share.strip_param("https://x/?d=abc#top"), "https://x/#top");
        assert_eq!(share.strip_param("https://x/page"), "https://x/page");
        assert_eq!(
            share.strip_param("https://x/#section?d=abc"),
            "https://x/#section?d=abc"
        );
        assert_eq!(
            share.strip_param("https://x/?d=abc#section?d=abc"),
            "https://x/#section?d=abc"
        );
    }

    #[test]
    fn test_url_wins_over_storage() {
        let share = ShareConfig::default();
        let mut replaced = Vec::new();
        let loaded = share.load(SCENARIO_URL, &|| Some(stored()), &mut |url: &str| {
            replaced.push(url.to_owned());
        });
        assert_eq!(loaded, Loaded::FromUrl(scenario()));
        assert!(loaded.is_from_url());
        assert_eq!(replaced, ["https://glarue.github.io/ReferenceFrame/"]);
    }

    #[test]
    fn test_invalid_token_falls_back_to_storage() {
        let share = ShareConfig::default();
        let mut replaced = Vec::new();
        for location in [
            "https://glarue.github.io/ReferenceFrame/?d=garbage!",
            "https://glarue.github.io/ReferenceFrame/?d=AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
            "https://glarue.github.io/ReferenceFrame/?d=",
            "https://glarue.github.io/ReferenceFrame/#s?d=AYagATiAAGGoADDUAB1MA4QCWABkASwOpgFeAQ",
            "https://glarue.github.io/ReferenceFrame/",
        ] {
            let loaded = share.load(location, &|| Some(stored()), &mut |url: &str| {
                replaced.push(url.to_owned());
            });
            assert_eq!(loaded, Loaded::FromStorage(stored()));
            assert_eq!(loaded.config(), Some(&stored()));
        }
        assert!(replaced.is_empty());
    }

    #[test]
    fn test_nothing_to_load() {
        let share = ShareConfig::default();
        let loaded = share.load("https://x/?d=%%%", &|| None::<FrameConfiguration>, &mut |_: &str| {});
        assert_eq!(loaded, Loaded::None);
        assert_eq!(loaded.config(), None);
    }

    #[test]
    fn test_millimeter_sender() {
        let share = ShareConfig::default();
        let sent = FrameConfiguration {
            unit_is_millimeters: true,
            ..scenario()
        };
        let url = share.share_url(&sent).unwrap();
        let received = share.decode_url(&url).unwrap();
        assert_eq!(received.display_unit(), crate::Unit::Millimeters);
        assert_eq!(received.width.inches(), 8.0);
        assert_eq!(received.display_value(Field::Width), 8.0 * 25.4);
    }

    #[test]
    fn test_fits_medium_qr() {
        let url = ShareConfig::default()
            .share_url(&FrameConfiguration::default())
            .unwrap();
        let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M).unwrap();
        assert_eq!(code.error_correction_level(), EcLevel::M);
        assert!(matches!(code.version(), Version::Normal(v) if v <= 5));
    }
}
