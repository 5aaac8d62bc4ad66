//! Application Configuration
//!
//! Resolved once at start-up from `data-*` attributes on the host page's `<body>`.

use std::str::FromStr;

use log::LevelFilter;

use crate::view_state::DEFAULT_PAGE_SIZE;

pub const API_BASE_ATTR: &str = "data-api-base";
pub const PAGE_SIZE_ATTR: &str = "data-page-size";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

const FALLBACK_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin the `/api/items` routes hang off, without trailing slash.
    pub api_base: String,
    pub page_size: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read the host document. Only callable in the browser.
    pub fn from_document() -> Self {
        let origin = leptos::prelude::window().location().origin().ok();
        let body = leptos::prelude::document().body();
        let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));

        Self::resolve(
            origin.as_deref(),
            attr(API_BASE_ATTR).as_deref(),
            attr(PAGE_SIZE_ATTR).as_deref(),
            attr(LOG_LEVEL_ATTR).as_deref(),
        )
    }

    pub fn resolve(
        origin: Option<&str>,
        api_base: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .or(origin)
            .unwrap_or(FALLBACK_ORIGIN)
            .trim_end_matches('/')
            .to_string();

        let page_size = page_size
            .and_then(|size| size.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base,
            page_size,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None)
    }
}
