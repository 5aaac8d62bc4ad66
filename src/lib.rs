//! Item List Frontend
//!
//! Browser UI for the items REST resource: paginated listing, text search,
//! creation and deletion, built with Leptos (client-side rendering).

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod logging;
pub mod models;
pub mod render;
pub mod view_state;
