//! Pagination Controls Component

use leptos::prelude::*;

use crate::context::use_list_context;

/// Previous/Next buttons with a "Page X of Y" label.
///
/// Hidden while the listing fits on one page and during search.
#[component]
pub fn PaginationControls() -> impl IntoView {
    let ctx = use_list_context();
    let pagination = move || ctx.view.get().pagination;

    view! {
        <div
            id="pagination"
            class="pagination"
            style:display=move || if pagination().is_some() { "block" } else { "none" }
        >
            {move || pagination().map(|p| view! {
                <button
                    type="button"
                    disabled={!p.has_previous()}
                    on:click=move |_| ctx.load_page(p.previous_page())
                >
                    "Previous"
                </button>
                <span class="page-label">{p.label()}</span>
                <button
                    type="button"
                    disabled={!p.has_next()}
                    on:click=move |_| ctx.load_page(p.next_page())
                >
                    "Next"
                </button>
            })}
        </div>
    }
}
