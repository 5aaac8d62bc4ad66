//! Items API
//!
//! Thin wrappers around the items REST endpoints, organized by concern.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::{ItemDraft, Page, SearchResults};

pub use client::{HttpItemsApi, URI_COMPONENT};
pub use error::ApiError;

/// Operations the list controller needs from the backend.
///
/// Futures are not `Send` because the browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// `GET /api/items?page=&limit=`
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, ApiError>;

    /// `POST /api/items`; the response body is not used.
    async fn create_item(&self, draft: &ItemDraft) -> Result<(), ApiError>;

    /// `GET /api/items/search?q=`
    async fn search_items(&self, query: &str) -> Result<SearchResults, ApiError>;

    /// `DELETE /api/items/{id}`
    async fn delete_item(&self, id: u64) -> Result<(), ApiError>;
}
