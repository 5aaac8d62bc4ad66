//! Item List Controller
//!
//! The user-facing actions (load, search, create, delete) as async transitions:
//! current [`ViewState`] in, next state plus what to render out. Errors are
//! returned untouched so the caller can log them and keep the stale view.

use crate::api::{ApiError, ItemsApi};
use crate::models::{ItemDraft, Page};
use crate::render::{render_items, PaginationView};
use crate::view_state::{ListMode, LoadSequencer, RequestTicket, SearchAction, ViewState};

/// What the list area shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    /// Escaped markup for `#items`.
    pub items_html: String,
    /// `None` hides `#pagination`.
    pub pagination: Option<PaginationView>,
}

impl ListView {
    fn from_page(page: &Page) -> Self {
        Self {
            items_html: render_items(&page.items),
            pagination: PaginationView::from_page(page),
        }
    }
}

/// Result of a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub view: ListView,
}

/// Load one page of the full listing.
pub async fn load_page<A>(api: &A, state: &ViewState, page: u32) -> Result<Transition, ApiError>
where
    A: ItemsApi + ?Sized,
{
    let loaded = api.fetch_page(page, state.limit).await?;
    Ok(Transition {
        state: state.with_page_loaded(loaded.page),
        view: ListView::from_page(&loaded),
    })
}

/// Handle a search-form submission.
pub async fn submit_search<A>(api: &A, state: &ViewState, input: &str) -> Result<Transition, ApiError>
where
    A: ItemsApi + ?Sized,
{
    match SearchAction::from_input(input) {
        SearchAction::ShowFirstPage => load_page(api, state, 1).await,
        SearchAction::Search(query) => {
            let results = api.search_items(&query).await?;
            Ok(Transition {
                state: state.with_search(query),
                view: ListView {
                    items_html: render_items(&results.items),
                    pagination: None,
                },
            })
        }
    }
}

/// Create an item, then reload the page that was active when it was submitted.
pub async fn submit_create<A>(api: &A, state: &ViewState, draft: &ItemDraft) -> Result<Transition, ApiError>
where
    A: ItemsApi + ?Sized,
{
    api.create_item(draft).await?;
    load_page(api, state, state.page).await
}

/// Delete an item, then refresh whatever the list is showing.
pub async fn delete_item<A>(api: &A, state: &ViewState, id: u64) -> Result<Transition, ApiError>
where
    A: ItemsApi + ?Sized,
{
    api.delete_item(id).await?;
    match &state.mode {
        ListMode::Browse => reload_within_bounds(api, state).await,
        ListMode::Search { query } => submit_search(api, state, query).await,
    }
}

/// Reload the current page, stepping back to the new last page if it vanished.
async fn reload_within_bounds<A>(api: &A, state: &ViewState) -> Result<Transition, ApiError>
where
    A: ItemsApi + ?Sized,
{
    let loaded = api.fetch_page(state.page, state.limit).await?;
    let last = loaded.total_pages();
    if loaded.items.is_empty() && last >= 1 && loaded.page > last {
        return load_page(api, state, last).await;
    }
    Ok(Transition {
        state: state.with_page_loaded(loaded.page),
        view: ListView::from_page(&loaded),
    })
}

/// Decide whether a finished action may touch the view.
///
/// Failures and responses to superseded requests yield `None`, leaving the
/// previous state and render in place.
pub fn settle(
    sequencer: &LoadSequencer,
    ticket: RequestTicket,
    action: &str,
    outcome: Result<Transition, ApiError>,
) -> Option<Transition> {
    if !sequencer.is_current(ticket) {
        log::debug!("[ItemList] Dropping superseded response while {}", action);
        return None;
    }
    match outcome {
        Ok(transition) => {
            log::debug!("[ItemList] {} done, page {}", action, transition.state.page);
            Some(transition)
        }
        Err(e) => {
            log::error!("[ItemList] Error {}: {}", action, e);
            None
        }
    }
}
