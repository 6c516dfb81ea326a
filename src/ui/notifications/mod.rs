// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`Notification`]: i18n key + severity
//! - [`Manager`]: queueing, expiry and dismissal
//! - [`Toast`]: rendering
//!
//! Durations: ~3s for success/info, ~5s for warnings, manual dismiss for
//! errors. At most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
