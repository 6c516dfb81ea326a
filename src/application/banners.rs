// SPDX-License-Identifier: MPL-2.0
//! Banner use cases.
//!
//! Each function performs a single pass against the store: no retries, no
//! compensation. A failed upload aborts the save before any row is written;
//! a failed row write after a successful upload leaves the object orphaned.

use crate::application::port::{BannerQuery, BannerStore, StoreError, MEDIA_BUCKET};
use crate::domain::{Banner, BannerId, BannerPatch, BannerRecord};
use crate::media;
use chrono::Utc;
use std::fmt;
use std::path::PathBuf;

/// Errors raised while saving a banner.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveError {
    /// The picked file could not be read from disk.
    Read(String),
    /// The store rejected the upload or the row write.
    Store(StoreError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Read(msg) => write!(f, "Cannot read media file: {msg}"),
            SaveError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<StoreError> for SaveError {
    fn from(err: StoreError) -> Self {
        SaveError::Store(err)
    }
}

/// Whether a save creates a new row or overwrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(BannerId),
}

/// Everything needed to persist one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub target: SaveTarget,
    /// Local file to upload first. Its public URL replaces `record.media_url`.
    pub upload: Option<PathBuf>,
    pub record: BannerRecord,
}

/// Lists banners ordered by `order_index`, optionally only the active ones.
pub async fn load_banners<S: BannerStore>(
    store: &S,
    only_active: bool,
) -> Result<Vec<Banner>, StoreError> {
    let query = if only_active {
        BannerQuery::active()
    } else {
        BannerQuery::all()
    };
    store.list(&query).await
}

/// Uploads the picked file (if any) then inserts or updates the row.
///
/// Exactly one row write happens on success.
pub async fn save_banner<S: BannerStore>(
    store: &S,
    request: SaveRequest,
) -> Result<Banner, SaveError> {
    let SaveRequest {
        target,
        upload,
        mut record,
    } = request;

    if let Some(file) = upload {
        let bytes = tokio::fs::read(&file)
            .await
            .map_err(|e| SaveError::Read(format!("{}: {e}", file.display())))?;
        let path = media::upload_path(&file);
        store
            .upload_object(MEDIA_BUCKET, &path, bytes, media::content_type(&file))
            .await?;
        record.media_url = store.public_url(MEDIA_BUCKET, &path);
        log::info!("uploaded {} as {path}", file.display());
    }

    let banner = match target {
        SaveTarget::Create => store.insert(&record).await?,
        SaveTarget::Update(id) => store.update(&id, &BannerPatch::Record(record)).await?,
    };
    Ok(banner)
}

/// Flips a banner's visibility in the public slider.
pub async fn set_active<S: BannerStore>(
    store: &S,
    id: BannerId,
    is_active: bool,
) -> Result<Banner, StoreError> {
    let patch = BannerPatch::SetActive {
        is_active,
        updated_at: Utc::now(),
    };
    store.update(&id, &patch).await
}

/// Permanently deletes a banner. Uploaded media is left in the bucket.
pub async fn delete_banner<S: BannerStore>(store: &S, id: BannerId) -> Result<(), StoreError> {
    store.delete(&id).await
}
