// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Slider**: Autoplay cadence
//! - **Notifications**: Toast lifetimes
//! - **Media**: Upload hints shown in the banner form
//! - **Store**: Environment variables carrying the backend credentials

use std::time::Duration;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Delay between two automatic slide advances.
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// [`AUTOPLAY_INTERVAL_MS`] as a [`Duration`].
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(AUTOPLAY_INTERVAL_MS);

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How often visible toasts are checked for expiry.
pub const NOTIFICATION_TICK_MS: u64 = 100;

/// Auto-dismiss delay for success and info toasts.
pub const TOAST_DURATION_SECS: u64 = 3;

/// Auto-dismiss delay for warning toasts.
pub const TOAST_WARNING_DURATION_SECS: u64 = 5;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Recommended banner width in pixels, shown under the image picker.
pub const RECOMMENDED_BANNER_WIDTH: u32 = 1920;

/// Recommended banner height in pixels, shown under the image picker.
pub const RECOMMENDED_BANNER_HEIGHT: u32 = 1080;

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Environment variable holding the backend base URL.
pub const ENV_STORE_URL: &str = "BANNERBOARD_STORE_URL";

/// Environment variable holding the backend anonymous key.
pub const ENV_STORE_KEY: &str = "BANNERBOARD_STORE_KEY";

/// User agent sent with every store request.
pub const STORE_USER_AGENT: &str = concat!("Bannerboard/", env!("CARGO_PKG_VERSION"));

/// Maximum redirects followed by the store client.
pub const STORE_MAX_REDIRECTS: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_interval_is_five_seconds() {
        assert_eq!(AUTOPLAY_INTERVAL, Duration::from_secs(5));
    }

    #[test]
    fn warnings_stay_longer_than_success_toasts() {
        assert!(TOAST_WARNING_DURATION_SECS > TOAST_DURATION_SECS);
    }
}
