//! In-memory items backend speaking the `/api/items` REST contract.
//!
//! Mirrors the production service's observable behaviour closely enough for
//! the front end's integration tests: lenient paging parameters, empty-bodied
//! writes, and case-insensitive substring search.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
struct ListItemsResponse {
    items: Vec<Item>,
    total: u64,
    page: usize,
    limit: usize,
}

#[derive(Serialize)]
struct SearchItemsResponse {
    items: Vec<Item>,
    total: u64,
}

#[derive(Deserialize)]
struct ListParams {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Debug)]
pub struct Store {
    next_id: u64,
    items: BTreeMap<u64, Item>,
    items_per_page: usize,
    search_limit: usize,
}

impl Store {
    pub fn new(items_per_page: usize, search_limit: usize) -> Self {
        Self {
            next_id: 1,
            items: BTreeMap::new(),
            items_per_page,
            search_limit,
        }
    }

    pub fn insert(&mut self, name: &str, description: &str) -> Item {
        let item = Item {
            id: self.next_id,
            name: name.to_string(),
            description: description.to_string(),
        };
        self.next_id += 1;
        self.items.insert(item.id, item.clone());
        item
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE, DEFAULT_SEARCH_LIMIT)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/search", get(search_items))
        .route("/api/items/{id}", get(get_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

/// Positive integer or nothing; anything else falls back to the default.
fn positive(param: Option<&str>) -> Option<usize> {
    param.and_then(|p| p.parse::<usize>().ok()).filter(|n| *n > 0)
}

async fn list_items(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<ListItemsResponse> {
    let store = db.read().await;
    let page = positive(params.page.as_deref()).unwrap_or(1);
    let limit = positive(params.limit.as_deref()).unwrap_or(store.items_per_page);
    let offset = (page - 1).saturating_mul(limit);

    Json(ListItemsResponse {
        items: store.items.values().skip(offset).take(limit).cloned().collect(),
        total: store.items.len() as u64,
        page,
        limit,
    })
}

async fn create_item(State(db): State<Db>, Json(input): Json<CreateItem>) -> StatusCode {
    db.write().await.insert(&input.name, &input.description);
    StatusCode::OK
}

async fn search_items(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchItemsResponse>, (StatusCode, &'static str)> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "search query required"));
    }

    let needle = query.to_lowercase();
    let store = db.read().await;
    let matches: Vec<&Item> = store
        .items
        .values()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect();

    Ok(Json(SearchItemsResponse {
        total: matches.len() as u64,
        items: matches.into_iter().take(store.search_limit).cloned().collect(),
    }))
}

/// Mirrors the production route; the front end itself never fetches single items.
async fn get_item(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Item>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_item(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    db.write().await.items.remove(&id);
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn seeded(count: u64) -> Store {
        let mut store = Store::default();
        for n in 1..=count {
            store.insert(&format!("item {n}"), "");
        }
        store
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn list_pages_with_offset() {
        let (status, body) = get_json(app_with(seeded(25)), "/api/items?page=3&limit=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 25);
        assert_eq!(body["page"], 3);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);
        assert_eq!(body["items"][0]["id"], 21);
    }

    #[tokio::test]
    async fn list_falls_back_on_bad_params() {
        let (_, body) = get_json(app_with(seeded(3)), "/api/items?page=zero&limit=-4").await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_replies_with_empty_body() {
        let app = app();
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Lamp","description":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());

        let (_, body) = get_json(app, "/api/items").await;
        assert_eq!(body["items"][0]["name"], "Lamp");
        assert_eq!(body["items"][0]["id"], 1);
    }

    #[tokio::test]
    async fn search_requires_query() {
        let (status, _) = get_json(app_with(seeded(2)), "/api/items/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let mut store = Store::new(10, 1);
        store.insert("Desk Lamp", "");
        store.insert("Chair", "goes with the lamp");
        store.insert("Table", "");

        let (status, body) = get_json(app_with(store), "/api/items/search?q=LAMP").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_and_delete_item() {
        let app = app_with(seeded(1));
        let (status, body) = get_json(app.clone(), "/api/items/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "item 1");

        let response = app
            .clone()
            .oneshot(Request::delete("/api/items/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, _) = get_json(app, "/api/items/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
