// SPDX-License-Identifier: MPL-2.0
//! Banner records as stored in the remote `banners` table.
//!
//! The front end only ever holds transient copies of these records. The
//! store assigns `id` and `created_at`; `updated_at` is stamped by the
//! client on every write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order index used for banners created without an explicit position.
pub const DEFAULT_ORDER_INDEX: i32 = 0;

/// Opaque identifier assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(String);

impl BannerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of media a banner displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    /// Returns the i18n key used to label this media type.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MediaType::Image => "media-image",
            MediaType::Video => "media-video",
        }
    }
}

/// Where a video banner's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSource {
    /// The video file is uploaded to object storage.
    #[default]
    Upload,
    /// The banner points at an external video link.
    Link,
}

/// A banner as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_url: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub video_url: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// URL the slider should play or show for this banner.
    ///
    /// Video banners prefer the external link and fall back to the
    /// uploaded media.
    #[must_use]
    pub fn display_url(&self) -> &str {
        match self.media_type {
            MediaType::Image => &self.media_url,
            MediaType::Video => self
                .video_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .unwrap_or(self.media_url.as_str()),
        }
    }

    /// Video source mode implied by the stored record.
    #[must_use]
    pub fn video_source(&self) -> VideoSource {
        if self.video_url.as_deref().is_some_and(|url| !url.is_empty()) {
            VideoSource::Link
        } else {
            VideoSource::Upload
        }
    }

    /// Whether the title/description overlay should be drawn.
    #[must_use]
    pub fn has_caption(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
            || self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Full write payload produced by the banner form.
///
/// Optional fields serialize as explicit `null` so an update clears them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_url: String,
    pub media_type: MediaType,
    pub video_url: Option<String>,
    pub is_active: bool,
    pub order_index: i32,
    pub updated_at: DateTime<Utc>,
}

/// Partial update sent to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BannerPatch {
    Record(BannerRecord),
    SetActive {
        is_active: bool,
        updated_at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "2f1c",
            "title": "Promo",
            "description": null,
            "media_url": "https://cdn.example/banners/a.png",
            "media_type": "image",
            "video_url": null,
            "is_active": true,
            "order_index": 3,
            "created_at": "2024-05-01T10:00:00+00:00",
            "updated_at": "2024-05-02T08:30:00.123456+00:00"
        }"#
    }

    fn video_banner(video_url: Option<&str>) -> Banner {
        let mut banner: Banner = serde_json::from_str(sample_json()).expect("valid banner");
        banner.media_type = MediaType::Video;
        banner.media_url = "https://cdn.example/banners/poster.mp4".into();
        banner.video_url = video_url.map(String::from);
        banner
    }

    #[test]
    fn deserializes_store_rows() {
        let banner: Banner = serde_json::from_str(sample_json()).expect("valid banner");
        assert_eq!(banner.id.as_str(), "2f1c");
        assert_eq!(banner.title.as_deref(), Some("Promo"));
        assert!(banner.description.is_none());
        assert_eq!(banner.media_type, MediaType::Image);
        assert_eq!(banner.order_index, 3);
    }

    #[test]
    fn media_type_uses_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&MediaType::Video).unwrap(), "\"video\"");
        let parsed: MediaType = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(parsed, MediaType::Image);
    }

    #[test]
    fn video_prefers_external_link() {
        let banner = video_banner(Some("https://videos.example/watch?v=1"));
        assert_eq!(banner.display_url(), "https://videos.example/watch?v=1");
        assert_eq!(banner.video_source(), VideoSource::Link);
    }

    #[test]
    fn video_without_link_falls_back_to_media() {
        let banner = video_banner(None);
        assert_eq!(banner.display_url(), "https://cdn.example/banners/poster.mp4");
        assert_eq!(banner.video_source(), VideoSource::Upload);

        let empty_link = video_banner(Some(""));
        assert_eq!(empty_link.video_source(), VideoSource::Upload);
    }

    #[test]
    fn record_serializes_absent_optionals_as_null() {
        let record = BannerRecord {
            title: None,
            description: Some("Summer".into()),
            media_url: String::new(),
            media_type: MediaType::Image,
            video_url: None,
            is_active: true,
            order_index: 0,
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(BannerPatch::Record(record)).unwrap();
        assert!(value["title"].is_null());
        assert!(value["video_url"].is_null());
        assert_eq!(value["description"], "Summer");
    }

    #[test]
    fn set_active_patch_carries_flag_and_timestamp() {
        let updated_at = DateTime::parse_from_rfc3339("2024-05-03T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = serde_json::to_value(BannerPatch::SetActive {
            is_active: false,
            updated_at,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "is_active": false, "updated_at": "2024-05-03T09:00:00Z" })
        );
    }

    #[test]
    fn caption_requires_non_empty_text() {
        let mut banner: Banner = serde_json::from_str(sample_json()).unwrap();
        assert!(banner.has_caption());
        banner.title = Some(String::new());
        assert!(!banner.has_caption());
        banner.description = Some("Details".into());
        assert!(banner.has_caption());
    }
}
