// SPDX-License-Identifier: MPL-2.0
//! Preference and state persistence.
//!
//! Language and theme go to `settings.toml`; the last upload directory goes
//! to the CBOR state file. Failures are reported as warning toasts and never
//! interrupt the user.

use crate::app::persisted_state::AppState;
use crate::config;
use crate::i18n::Language;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::theming::ThemeMode;

/// Writes the current language and theme mode to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the config functions directly.
pub fn persist_preferences(language: Language, theme_mode: ThemeMode, notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(language.code().to_string());
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg) {
        log::error!("failed to save config: {error}");
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}

/// Writes the application state file.
pub fn persist_app_state(state: &AppState, notifications: &mut Manager) {
    if cfg!(test) {
        return;
    }

    if let Some(key) = state.save() {
        notifications.push(Notification::warning(key));
    }
}
