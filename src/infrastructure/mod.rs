// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the [`BannerStore`] port.
//!
//! # Available Adapters
//!
//! - [`rest_store`]: Hosted table + object storage over HTTP
//! - [`memory_store`]: In-process store for `--demo` and tests
//!
//! [`AnyStore`] lets the application pick an adapter at startup while the
//! use cases stay generic.
//!
//! [`BannerStore`]: crate::application::port::BannerStore

pub mod memory_store;
pub mod rest_store;

pub use memory_store::MemoryStore;
pub use rest_store::RestStore;

use crate::application::port::{BannerQuery, BannerStore, StoreError};
use crate::domain::{Banner, BannerId, BannerPatch, BannerRecord};

/// Store selected at startup.
#[derive(Debug, Clone)]
pub enum AnyStore {
    Rest(RestStore),
    Memory(MemoryStore),
}

impl From<RestStore> for AnyStore {
    fn from(store: RestStore) -> Self {
        AnyStore::Rest(store)
    }
}

impl From<MemoryStore> for AnyStore {
    fn from(store: MemoryStore) -> Self {
        AnyStore::Memory(store)
    }
}

impl BannerStore for AnyStore {
    async fn list(&self, query: &BannerQuery) -> Result<Vec<Banner>, StoreError> {
        match self {
            AnyStore::Rest(store) => store.list(query).await,
            AnyStore::Memory(store) => store.list(query).await,
        }
    }

    async fn insert(&self, record: &BannerRecord) -> Result<Banner, StoreError> {
        match self {
            AnyStore::Rest(store) => store.insert(record).await,
            AnyStore::Memory(store) => store.insert(record).await,
        }
    }

    async fn update(&self, id: &BannerId, patch: &BannerPatch) -> Result<Banner, StoreError> {
        match self {
            AnyStore::Rest(store) => store.update(id, patch).await,
            AnyStore::Memory(store) => store.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &BannerId) -> Result<(), StoreError> {
        match self {
            AnyStore::Rest(store) => store.delete(id).await,
            AnyStore::Memory(store) => store.delete(id).await,
        }
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        match self {
            AnyStore::Rest(store) => store.upload_object(bucket, path, bytes, content_type).await,
            AnyStore::Memory(store) => {
                store
                    .upload_object(bucket, path, bytes, content_type)
                    .await
            }
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        match self {
            AnyStore::Rest(store) => store.public_url(bucket, path),
            AnyStore::Memory(store) => store.public_url(bucket, path),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, StoreError> {
        match self {
            AnyStore::Rest(store) => store.download(url).await,
            AnyStore::Memory(store) => store.download(url).await,
        }
    }
}
