// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation lookup.
//!
//! Lookup order for a key: current language, then Portuguese, then the raw
//! key itself (logged as a warning).

use super::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("bundles", &self.bundles.len())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl I18n {
    /// Loads every embedded bundle and selects `language`.
    pub fn new(language: Language) -> Self {
        let mut bundles = HashMap::new();

        for lang in Language::ALL {
            let file_name = format!("{}.ftl", lang.code());
            let Some(file) = Asset::get(&file_name) else {
                log::error!("missing translation bundle {file_name}");
                continue;
            };

            let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::warn!("{file_name}: {} syntax error(s) skipped", errors.len());
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![lang.langid()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{file_name}: {} duplicate message(s)", errors.len());
            }
            bundles.insert(lang, bundle);
        }

        Self {
            bundles,
            current: language,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Translates `key` in the current language.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let candidates = [self.current, Language::FALLBACK];
        for lang in candidates {
            if let Some(value) = self.format(lang, key, args) {
                return value;
            }
        }
        log::warn!("missing translation for key: {key}");
        key.to_string()
    }

    fn format(&self, lang: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            log::warn!("formatting {key} in {}: {errors:?}", lang.code());
        }
        Some(value.into_owned())
    }

    /// Whether `lang` defines `key` without falling back.
    #[must_use]
    pub fn has_key(&self, lang: Language, key: &str) -> bool {
        self.bundles
            .get(&lang)
            .is_some_and(|bundle| bundle.has_message(key))
    }
}
