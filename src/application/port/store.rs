// SPDX-License-Identifier: MPL-2.0
//! Banner store port definition.
//!
//! The [`BannerStore`] trait is the abstract contract the front end consumes
//! from the hosted backend: a `banners` table plus a `media` object bucket.
//! Adapters live in `crate::infrastructure`.

use crate::domain::{Banner, BannerId, BannerPatch, BannerRecord};
use std::fmt;
use std::future::Future;

/// Table holding banner records.
pub const BANNERS_TABLE: &str = "banners";

/// Bucket holding uploaded banner media.
pub const MEDIA_BUCKET: &str = "media";

// =============================================================================
// StoreError
// =============================================================================

/// Errors reported by a banner store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The request never reached the store or the connection dropped.
    Network(String),

    /// The store answered with a non-success status.
    Status {
        /// HTTP-like status code.
        code: u16,
        /// Body returned by the store, if any.
        message: String,
    },

    /// The response body could not be decoded.
    Decode(String),

    /// A write that should return the affected row returned nothing.
    EmptyResponse,

    /// The addressed record or object does not exist.
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "Network error: {msg}"),
            StoreError::Status { code, message } => {
                write!(f, "Store returned status {code}: {message}")
            }
            StoreError::Decode(msg) => write!(f, "Invalid store response: {msg}"),
            StoreError::EmptyResponse => write!(f, "Store returned no rows"),
            StoreError::NotFound => write!(f, "Record not found"),
        }
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// BannerQuery
// =============================================================================

/// Ordering applied to a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    /// Ascending `order_index`, the rendering order everywhere in the app.
    pub const ORDER_INDEX_ASC: OrderBy = OrderBy {
        column: "order_index",
        ascending: true,
    };
}

/// Filter and ordering for listing banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerQuery {
    /// Restrict the result to `is_active = true`.
    pub only_active: bool,
    pub order_by: OrderBy,
}

impl BannerQuery {
    /// Every banner, as shown in the admin list.
    #[must_use]
    pub fn all() -> Self {
        Self {
            only_active: false,
            order_by: OrderBy::ORDER_INDEX_ASC,
        }
    }

    /// Active banners only, as shown in the public slider.
    #[must_use]
    pub fn active() -> Self {
        Self {
            only_active: true,
            order_by: OrderBy::ORDER_INDEX_ASC,
        }
    }

    /// Renders the query as PostgREST-style query parameters.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let direction = if self.order_by.ascending { "asc" } else { "desc" };
        let mut query = format!("select=*&order={}.{direction}", self.order_by.column);
        if self.only_active {
            query.push_str("&is_active=eq.true");
        }
        query
    }
}

// =============================================================================
// BannerStore Trait
// =============================================================================

/// Remote CRUD + object storage consumed by the banner views.
///
/// Every call is fire-once: implementations do not retry and callers do not
/// reconcile local state on failure.
pub trait BannerStore: Clone + Send + Sync + 'static {
    /// Lists banners matching `query`, in the requested order.
    fn list(
        &self,
        query: &BannerQuery,
    ) -> impl Future<Output = Result<Vec<Banner>, StoreError>> + Send;

    /// Inserts a new banner and returns the stored row.
    fn insert(
        &self,
        record: &BannerRecord,
    ) -> impl Future<Output = Result<Banner, StoreError>> + Send;

    /// Applies `patch` to the banner with `id` and returns the stored row.
    fn update(
        &self,
        id: &BannerId,
        patch: &BannerPatch,
    ) -> impl Future<Output = Result<Banner, StoreError>> + Send;

    /// Deletes the banner with `id`.
    fn delete(&self, id: &BannerId) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Stores `bytes` at `path` inside `bucket`.
    fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Public URL of an uploaded object. Never fails; the object need not exist.
    fn public_url(&self, bucket: &str, path: &str) -> String;

    /// Downloads the bytes behind a media URL, for thumbnails and slides.
    fn download(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_query_lists_everything_by_order_index() {
        assert_eq!(
            BannerQuery::all().to_query_string(),
            "select=*&order=order_index.asc"
        );
    }

    #[test]
    fn slider_query_filters_active_rows() {
        assert_eq!(
            BannerQuery::active().to_query_string(),
            "select=*&order=order_index.asc&is_active=eq.true"
        );
    }

    #[test]
    fn descending_order_is_rendered() {
        let query = BannerQuery {
            only_active: false,
            order_by: OrderBy {
                column: "created_at",
                ascending: false,
            },
        };
        assert_eq!(query.to_query_string(), "select=*&order=created_at.desc");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = StoreError::Status {
            code: 404,
            message: "relation does not exist".into(),
        };
        assert!(err.to_string().contains("404"));
    }
}
