// SPDX-License-Identifier: MPL-2.0
//! Downloaded banner images keyed by their public URL.
//!
//! Iced renders image widgets from in-memory handles, so remote media is
//! fetched once through the store and kept for the rest of the session.
//! Failed downloads are retried when their banners are requested again.

use crate::application::port::StoreError;
use crate::domain::{Banner, MediaType};
use iced::widget::image::Handle;
use std::collections::HashMap;

/// State of one cached URL.
#[derive(Debug, Clone)]
pub enum MediaSlot {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct MediaCache {
    slots: HashMap<String, MediaSlot>,
}

impl MediaCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&MediaSlot> {
        self.slots.get(url)
    }

    /// Returns the image handle for `url` once downloaded.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slots.get(url) {
            Some(MediaSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Marks the image URLs of `banners` that are not cached yet as loading
    /// and returns them so the caller can start their downloads. Failed
    /// downloads are requested again.
    pub fn request<'a>(&mut self, banners: impl IntoIterator<Item = &'a Banner>) -> Vec<String> {
        let mut pending = Vec::new();
        for banner in banners {
            if banner.media_type != MediaType::Image || banner.media_url.is_empty() {
                continue;
            }
            if matches!(
                self.slots.get(&banner.media_url),
                Some(MediaSlot::Loading | MediaSlot::Ready(_))
            ) {
                continue;
            }
            self.slots
                .insert(banner.media_url.clone(), MediaSlot::Loading);
            pending.push(banner.media_url.clone());
        }
        pending
    }

    /// Stores the outcome of a download started by [`request`](Self::request).
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>, StoreError>) {
        let slot = match result {
            Ok(bytes) => MediaSlot::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("could not download {url}: {err}");
                MediaSlot::Failed
            }
        };
        self.slots.insert(url, slot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
