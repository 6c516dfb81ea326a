// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::StoreError;
use crate::ui::banner_form;
use crate::ui::banner_list;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::slider;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    BannerList(banner_list::Message),
    BannerForm(banner_form::Message),
    Slider(slider::Message),
    Notification(notifications::NotificationMessage),
    /// Result of downloading a banner image for display.
    MediaLoaded {
        url: String,
        result: Result<Vec<u8>, StoreError>,
    },
    Tick(Instant), // Periodic tick for toast expiry
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (`pt`, `en` or `es`).
    pub lang: Option<String>,
    /// Start on the admin panel instead of the user panel.
    pub admin: bool,
    /// Use an in-memory store seeded with sample banners.
    pub demo: bool,
    /// Optional data directory override (for state files).
    /// Takes precedence over `BANNERBOARD_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BANNERBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
