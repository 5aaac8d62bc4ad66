//! HTTP implementation of [`ItemsApi`] on top of reqwest.
//!
//! On wasm32 reqwest drives the browser's `fetch`; on the host it uses hyper,
//! which is what the integration tests exercise.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::{ApiError, ItemsApi};
use crate::models::{ItemDraft, Page, SearchResults};

/// Characters escaped by JavaScript's `encodeURIComponent`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Items API client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpItemsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self, page: u32, limit: u32) -> String {
        format!("{}/api/items?page={page}&limit={limit}", self.base_url)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/items/search?q={}",
            self.base_url,
            utf8_percent_encode(query, URI_COMPONENT)
        )
    }

    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    pub fn item_url(&self, id: u64) -> String {
        format!("{}/api/items/{id}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = check_status(self.http.get(url).send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, ApiError> {
        let page: Page = self.get_json(&self.list_url(page, limit)).await?;
        page.validate().map_err(ApiError::InvalidPayload)?;
        Ok(page)
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<(), ApiError> {
        let response = self.http.post(self.items_url()).json(draft).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn search_items(&self, query: &str) -> Result<SearchResults, ApiError> {
        self.get_json(&self.search_url(query)).await
    }

    async fn delete_item(&self, id: u64) -> Result<(), ApiError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Map any non-2xx status to [`ApiError::Http`], keeping the body for the log.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status: status.as_u16(),
        body,
    })
}
