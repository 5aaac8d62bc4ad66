//! Search Form Component

use leptos::prelude::*;

use crate::context::use_list_context;

/// Text search over item names and descriptions.
///
/// Submitting an empty box returns to the first page of the full listing.
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_list_context();
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.search(query.get_untracked());
    };

    view! {
        <form id="searchForm" class="search-form" on:submit=on_submit>
            <input
                id="searchInput"
                type="search"
                placeholder="Search items..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
