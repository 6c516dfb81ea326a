// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interface that store adapters implement.
//! The trait uses only domain types, so the use cases and the UI never see
//! HTTP or storage details.
//!
//! # Available Ports
//!
//! - [`store`]: Banner CRUD and media object storage
//!
//! # Design Notes
//!
//! - Methods return `Send` futures so callers can hand them to `Task::perform`
//! - Errors are reported as [`StoreError`] and never retried
//!
//! # Example
//!
//! ```ignore
//! use bannerboard::application::port::{BannerQuery, BannerStore, StoreError};
//! use bannerboard::domain::Banner;
//!
//! async fn active(store: &impl BannerStore) -> Result<Vec<Banner>, StoreError> {
//!     store.list(&BannerQuery::active()).await
//! }
//! ```

pub mod store;

pub use store::{BannerQuery, BannerStore, OrderBy, StoreError, BANNERS_TABLE, MEDIA_BUCKET};
