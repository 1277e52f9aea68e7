//! Locales with known list-formatting rules.

use std::convert::Infallible;
use std::str::FromStr;

/// Language selected for list formatting, keyed by primary subtag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// `en`, also the default.
    #[default]
    English,
    /// `fr`.
    French,
    /// `de`.
    German,
    /// `es`.
    Spanish,
    /// `it`.
    Italian,
    /// `nl`.
    Dutch,
    /// `pt`.
    Portuguese,
    /// Any language without built-in rules.
    Unsupported,
}

impl Locale {
    /// Parse a BCP-47 tag such as `fr-CA` or `pt_BR`.
    ///
    /// Only the primary language subtag is considered; unknown languages
    /// map to [`Locale::Unsupported`].
    ///
    /// # Examples
    /// ```
    /// use client::formatting::Locale;
    ///
    /// assert_eq!(Locale::from_tag("fr-CA"), Locale::French);
    /// assert_eq!(Locale::from_tag("pt_BR"), Locale::Portuguese);
    /// assert_eq!(Locale::from_tag("oc"), Locale::Unsupported);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Self::English,
            "fr" => Self::French,
            "de" => Self::German,
            "es" => Self::Spanish,
            "it" => Self::Italian,
            "nl" => Self::Dutch,
            "pt" => Self::Portuguese,
            _ => Self::Unsupported,
        }
    }

    /// Primary subtag, `None` for [`Locale::Unsupported`].
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::English => Some("en"),
            Self::French => Some("fr"),
            Self::German => Some("de"),
            Self::Spanish => Some("es"),
            Self::Italian => Some("it"),
            Self::Dutch => Some("nl"),
            Self::Portuguese => Some("pt"),
            Self::Unsupported => None,
        }
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(tag))
    }
}
