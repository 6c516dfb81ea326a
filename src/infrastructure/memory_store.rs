// SPDX-License-Identifier: MPL-2.0
//! In-process [`BannerStore`] used by `--demo` and by tests.
//!
//! Rows and uploaded objects live behind a shared mutex, so clones observe
//! the same data. Public URLs use a `memory://<bucket>/<path>` scheme that
//! [`BannerStore::download`] resolves back to the stored bytes.
//!
//! [`BannerStore`]: crate::application::port::BannerStore

use crate::application::port::{BannerQuery, BannerStore, StoreError, MEDIA_BUCKET};
use crate::domain::{Banner, BannerId, BannerPatch, BannerRecord, MediaType};
use chrono::{Duration, Utc};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

const URL_SCHEME: &str = "memory://";

#[derive(RustEmbed)]
#[folder = "assets/demo/"]
struct DemoAssets;

/// Number of calls seen per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub insert: usize,
    pub update: usize,
    pub delete: usize,
    pub upload: usize,
}

#[derive(Debug, Default)]
struct Inner {
    banners: Vec<Banner>,
    objects: HashMap<String, Vec<u8>>,
    next_id: u64,
    calls: CallCounts,
    fail_next: Option<StoreError>,
}

/// Shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a few sample banners.
    #[must_use]
    pub fn with_demo_content() -> Self {
        let store = Self::new();
        let samples = [
            ("Bem-vindo", Some("Conheça as novidades da semana"), true, 0),
            ("Promoção de verão", None, true, 1),
            ("Rascunho", Some("Ainda não publicado"), false, 2),
        ];
        for (title, description, is_active, order_index) in samples {
            let file_name = format!("demo-{order_index}.png");
            let path = format!("banners/{file_name}");
            if let Some(file) = DemoAssets::get(&file_name) {
                store.seed_object(MEDIA_BUCKET, &path, file.data.into_owned());
            }
            let media_url = store.public_url(MEDIA_BUCKET, &path);
            store.seed(BannerRecord {
                title: Some(title.to_string()),
                description: description.map(String::from),
                media_url,
                media_type: MediaType::Image,
                video_url: None,
                is_active,
                order_index,
                updated_at: Utc::now(),
            });
        }
        store
    }

    /// Inserts `record` directly, bypassing counters and failure injection.
    pub fn seed(&self, record: BannerRecord) -> Banner {
        let mut inner = self.lock();
        let banner = inner.materialize(record);
        inner.banners.push(banner.clone());
        banner
    }

    /// Stores object bytes directly.
    pub fn seed_object(&self, bucket: &str, path: &str, bytes: Vec<u8>) {
        self.lock().objects.insert(object_key(bucket, path), bytes);
    }

    /// Makes the next store call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        self.lock().fail_next = Some(error);
    }

    /// Snapshot of every stored row, in insertion order.
    #[must_use]
    pub fn banners(&self) -> Vec<Banner> {
        self.lock().banners.clone()
    }

    /// Bytes stored under `bucket`/`path`.
    #[must_use]
    pub fn object(&self, bucket: &str, path: &str) -> Option<Vec<u8>> {
        self.lock().objects.get(&object_key(bucket, path)).cloned()
    }

    /// Number of stored objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.lock().objects.len()
    }

    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.lock().calls
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Inner {
    fn take_failure(&mut self) -> Result<(), StoreError> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn materialize(&mut self, record: BannerRecord) -> Banner {
        self.next_id += 1;
        // Distinct creation times keep ordering ties deterministic.
        let created_at = Utc::now() + Duration::milliseconds(self.next_id as i64);
        Banner {
            id: BannerId::new(format!("mem-{}", self.next_id)),
            title: record.title,
            description: record.description,
            media_url: record.media_url,
            media_type: record.media_type,
            video_url: record.video_url,
            is_active: record.is_active,
            order_index: record.order_index,
            created_at,
            updated_at: record.updated_at,
        }
    }
}

fn object_key(bucket: &str, path: &str) -> String {
    format!("{bucket}/{path}")
}

impl BannerStore for MemoryStore {
    async fn list(&self, query: &BannerQuery) -> Result<Vec<Banner>, StoreError> {
        let mut inner = self.lock();
        inner.calls.list += 1;
        inner.take_failure()?;

        let mut rows: Vec<Banner> = inner
            .banners
            .iter()
            .filter(|b| !query.only_active || b.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            let ordering = match query.order_by.column {
                "created_at" => a.created_at.cmp(&b.created_at),
                "updated_at" => a.updated_at.cmp(&b.updated_at),
                _ => a.order_index.cmp(&b.order_index),
            };
            if query.order_by.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
        Ok(rows)
    }

    async fn insert(&self, record: &BannerRecord) -> Result<Banner, StoreError> {
        let mut inner = self.lock();
        inner.calls.insert += 1;
        inner.take_failure()?;

        let banner = inner.materialize(record.clone());
        inner.banners.push(banner.clone());
        Ok(banner)
    }

    async fn update(&self, id: &BannerId, patch: &BannerPatch) -> Result<Banner, StoreError> {
        let mut inner = self.lock();
        inner.calls.update += 1;
        inner.take_failure()?;

        let banner = inner
            .banners
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or(StoreError::NotFound)?;
        match patch {
            BannerPatch::Record(record) => {
                banner.title = record.title.clone();
                banner.description = record.description.clone();
                banner.media_url = record.media_url.clone();
                banner.media_type = record.media_type;
                banner.video_url = record.video_url.clone();
                banner.is_active = record.is_active;
                banner.order_index = record.order_index;
                banner.updated_at = record.updated_at;
            }
            BannerPatch::SetActive {
                is_active,
                updated_at,
            } => {
                banner.is_active = *is_active;
                banner.updated_at = *updated_at;
            }
        }
        Ok(banner.clone())
    }

    async fn delete(&self, id: &BannerId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.calls.delete += 1;
        inner.take_failure()?;

        let before = inner.banners.len();
        inner.banners.retain(|b| &b.id != id);
        if inner.banners.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.calls.upload += 1;
        inner.take_failure()?;

        inner.objects.insert(object_key(bucket, path), bytes);
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{URL_SCHEME}{bucket}/{path}")
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, StoreError> {
        let mut inner = self.lock();
        inner.take_failure()?;

        let key = url.strip_prefix(URL_SCHEME).ok_or(StoreError::NotFound)?;
        inner.objects.get(key).cloned().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, order_index: i32, is_active: bool) -> BannerRecord {
        BannerRecord {
            title: Some(title.into()),
            description: None,
            media_url: "memory://media/banners/x.png".into(),
            media_type: MediaType::Image,
            video_url: None,
            is_active,
            order_index,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_orders_by_index_and_filters_active() {
        let store = MemoryStore::new();
        store.seed(record("c", 2, true));
        store.seed(record("a", 0, false));
        store.seed(record("b", 1, true));

        let all = store.list(&BannerQuery::all()).await.expect("list");
        let titles: Vec<_> = all.iter().filter_map(|b| b.title.as_deref()).collect();
        assert_eq!(titles, ["a", "b", "c"]);

        let active = store.list(&BannerQuery::active()).await.expect("list");
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|b| b.is_active));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone.insert(&record("shared", 0, true)).await.expect("insert");
        assert_eq!(store.banners().len(), 1);
    }

    #[tokio::test]
    async fn injected_failure_affects_one_call() {
        let store = MemoryStore::new();
        store.fail_next(StoreError::Network("offline".into()));

        assert!(store.list(&BannerQuery::all()).await.is_err());
        assert!(store.list(&BannerQuery::all()).await.is_ok());
        assert_eq!(store.calls().list, 2);
    }

    #[tokio::test]
    async fn uploaded_objects_download_through_public_url() {
        let store = MemoryStore::new();
        store
            .upload_object(MEDIA_BUCKET, "banners/a.png", vec![1, 2, 3], "image/png")
            .await
            .expect("upload");

        let url = store.public_url(MEDIA_BUCKET, "banners/a.png");
        assert_eq!(url, "memory://media/banners/a.png");
        assert_eq!(store.download(&url).await.expect("download"), vec![1, 2, 3]);
        assert_eq!(
            store.download("https://elsewhere/x.png").await,
            Err(StoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_report_not_found() {
        let store = MemoryStore::new();
        let id = BannerId::new("missing");
        assert_eq!(
            store
                .update(
                    &id,
                    &BannerPatch::SetActive {
                        is_active: true,
                        updated_at: Utc::now(),
                    }
                )
                .await,
            Err(StoreError::NotFound)
        );
        assert_eq!(store.delete(&id).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn demo_content_has_downloadable_media() {
        let store = MemoryStore::with_demo_content();
        let banners = store.banners();
        assert_eq!(banners.len(), 3);
        assert!(banners.iter().any(|b| !b.is_active));

        let bytes = store.download(&banners[0].media_url).await.expect("demo image");
        assert!(bytes.starts_with(b"\x89PNG"));
    }
}
