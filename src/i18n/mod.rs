// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` bundles embedded at build time, one per
//! [`Language`]. The active language is chosen at startup from the CLI,
//! then `settings.toml`, then Portuguese.

pub mod fluent;
pub mod language;

pub use fluent::I18n;
pub use language::Language;

/// Picks the startup language.
///
/// The first recognised code wins: `cli_lang`, then `config_lang`. Anything
/// else falls back to the default language.
#[must_use]
pub fn resolve_language(cli_lang: Option<&str>, config_lang: Option<&str>) -> Language {
    [cli_lang, config_lang]
        .into_iter()
        .flatten()
        .find_map(Language::from_code)
        .unwrap_or_default()
}
