// SPDX-License-Identifier: MPL-2.0
//! Supported UI languages.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// One of the three languages the UI ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    /// Every supported language, in the order shown by the language menu.
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// Language used when a translation is missing in the current one.
    pub const FALLBACK: Language = Language::Pt;

    /// Two-letter code used in settings and bundle file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Pt => "Português",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Parses a language code. Region suffixes such as `pt-BR` are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let langid: LanguageIdentifier = code.trim().parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|lang| langid.language.as_str() == lang.code())
    }

    /// Locale identifier handed to the Fluent bundle.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        // The codes are static and well-formed.
        match self.code().parse() {
            Ok(id) => id,
            Err(_) => LanguageIdentifier::default(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn region_subtags_are_ignored() {
        assert_eq!(Language::from_code("pt-BR"), Some(Language::Pt));
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn default_is_portuguese() {
        assert_eq!(Language::default(), Language::Pt);
        assert_eq!(Language::default().langid().to_string(), "pt");
    }
}
