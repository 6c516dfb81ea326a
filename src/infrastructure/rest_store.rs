// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter implementing [`BannerStore`] against a PostgREST-style
//! table API plus an object-storage API.
//!
//! Every request carries the anonymous key both as `apikey` and as a bearer
//! token. Writes ask for `Prefer: return=representation` so the stored row
//! comes back in the response.
//!
//! [`BannerStore`]: crate::application::port::BannerStore

use crate::application::port::{BannerQuery, BannerStore, StoreError, BANNERS_TABLE};
use crate::config::{StoreConfig, STORE_MAX_REDIRECTS, STORE_USER_AGENT};
use crate::domain::{Banner, BannerId, BannerPatch, BannerRecord};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Store backed by the hosted REST endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    endpoint: Arc<str>,
}

impl RestStore {
    /// Builds a client for `config`.
    ///
    /// Empty credentials are accepted; requests then fail when issued.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        if !config.anon_key.is_empty() {
            let key = HeaderValue::from_str(&config.anon_key)
                .map_err(|e| StoreError::Network(format!("invalid store key: {e}")))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
                .map_err(|e| StoreError::Network(format!("invalid store key: {e}")))?;
            headers.insert("apikey", key);
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(STORE_MAX_REDIRECTS))
            .user_agent(STORE_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: Arc::from(config.url.trim_end_matches('/')),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{BANNERS_TABLE}", self.endpoint)
    }

    fn list_url(&self, query: &BannerQuery) -> String {
        format!("{}?{}", self.table_url(), query.to_query_string())
    }

    fn row_url(&self, id: &BannerId) -> String {
        format!("{}?id=eq.{}", self.table_url(), encode_path_segment(id.as_str()))
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{bucket}/{}",
            self.endpoint,
            encode_object_path(path)
        )
    }

    fn public_object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{}",
            self.endpoint,
            encode_object_path(path)
        )
    }
}

/// Sends `request` and maps transport failures and non-success statuses.
async fn send(request: RequestBuilder) -> Result<Response, StoreError> {
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == reqwest::StatusCode::NOT_FOUND && message.is_empty() {
        return Err(StoreError::NotFound);
    }
    Err(StoreError::Status {
        code: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| StoreError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Writes return the affected rows as an array; exactly one is expected.
async fn single_row(response: Response) -> Result<Banner, StoreError> {
    let rows: Vec<Banner> = decode(response).await?;
    rows.into_iter().next().ok_or(StoreError::EmptyResponse)
}

impl BannerStore for RestStore {
    async fn list(&self, query: &BannerQuery) -> Result<Vec<Banner>, StoreError> {
        let response = send(self.client.get(self.list_url(query))).await?;
        decode(response).await
    }

    async fn insert(&self, record: &BannerRecord) -> Result<Banner, StoreError> {
        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&[record]);
        single_row(send(request).await?).await
    }

    async fn update(&self, id: &BannerId, patch: &BannerPatch) -> Result<Banner, StoreError> {
        let request = self
            .client
            .patch(self.row_url(id))
            .header("Prefer", "return=representation")
            .json(patch);
        single_row(send(request).await?).await
    }

    async fn delete(&self, id: &BannerId) -> Result<(), StoreError> {
        send(self.client.delete(self.row_url(id))).await?;
        Ok(())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        let request = self
            .client
            .post(self.object_url(bucket, path))
            .header(CONTENT_TYPE, content_type)
            .body(bytes);
        send(request).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        self.public_object_url(bucket, path)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, StoreError> {
        let response = send(self.client.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Everything outside the RFC 3986 unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Encodes each `/`-separated segment of an object path.
fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MEDIA_BUCKET;

    fn store() -> RestStore {
        RestStore::new(&StoreConfig {
            url: "https://project.example.co/".into(),
            anon_key: "anon".into(),
        })
        .expect("client builds")
    }

    #[test]
    fn list_url_targets_banners_table() {
        assert_eq!(
            store().list_url(&BannerQuery::active()),
            "https://project.example.co/rest/v1/banners?select=*&order=order_index.asc&is_active=eq.true"
        );
    }

    #[test]
    fn row_url_filters_by_id() {
        let id = BannerId::new("6f0e-11");
        assert_eq!(
            store().row_url(&id),
            "https://project.example.co/rest/v1/banners?id=eq.6f0e-11"
        );
    }

    #[test]
    fn upload_and_public_urls_share_object_path() {
        let store = store();
        assert_eq!(
            store.object_url(MEDIA_BUCKET, "banners/abc.png"),
            "https://project.example.co/storage/v1/object/media/banners/abc.png"
        );
        assert_eq!(
            store.public_url(MEDIA_BUCKET, "banners/abc.png"),
            "https://project.example.co/storage/v1/object/public/media/banners/abc.png"
        );
    }

    #[test]
    fn object_paths_are_percent_encoded() {
        assert_eq!(encode_object_path("banners/a b+c.png"), "banners/a%20b%2Bc.png");
    }

    #[test]
    fn unreserved_characters_and_separators_survive_encoding() {
        assert_eq!(
            encode_object_path("banners/Promo_2024-v1.~x.PNG"),
            "banners/Promo_2024-v1.~x.PNG"
        );
        assert_eq!(encode_object_path("banners/café#1"), "banners/caf%C3%A9%231");
    }

    #[test]
    fn empty_credentials_still_build_a_client() {
        let store = RestStore::new(&StoreConfig::default()).expect("client builds");
        assert_eq!(store.table_url(), "/rest/v1/banners");
    }

    #[test]
    fn control_characters_in_key_are_rejected() {
        let result = RestStore::new(&StoreConfig {
            url: "https://project.example.co".into(),
            anon_key: "bad\nkey".into(),
        });
        assert!(matches!(result, Err(StoreError::Network(_))));
    }
}
