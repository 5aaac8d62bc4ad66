//! Item List App
//!
//! Root component: fixed layout with search, create form, list and pagination.

use leptos::prelude::*;

use crate::api::HttpItemsApi;
use crate::components::{CreateItemForm, ItemList, PaginationControls, SearchForm};
use crate::config::AppConfig;
use crate::context::ListContext;
use crate::view_state::ViewState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = ListContext::new(
        HttpItemsApi::new(&config.api_base),
        ViewState::new(config.page_size),
    );
    provide_context(ctx);

    // Initial load; tracks nothing, so it runs once on mount.
    Effect::new(move |_| {
        log::info!("[App] Loading first page from {}", config.api_base);
        ctx.load_page(1);
    });

    view! {
        <main class="item-list-app">
            <h1>"Items"</h1>

            <section class="toolbar">
                <SearchForm />
                <CreateItemForm />
            </section>

            <ItemList />
            <PaginationControls />
        </main>
    }
}
