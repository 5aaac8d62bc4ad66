//! Item List Component
//!
//! Mounts the escaped item markup and handles clicks on its delete triggers.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_list_context;
use crate::render::DELETE_ID_ATTR;

/// Container for the rendered item blocks
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_list_context();

    // Item blocks come from a string fragment, so clicks are delegated here.
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(id) = delete_target(&ev) else {
            return;
        };
        let confirmed = window()
            .confirm_with_message("Delete this item?")
            .unwrap_or(false);
        if confirmed {
            ctx.delete(id);
        }
    };

    view! {
        <div
            id="items"
            class="items"
            inner_html=move || ctx.view.get().items_html
            on:click=on_click
        ></div>
    }
}

/// Id of the item whose delete trigger was clicked, if any.
fn delete_target(ev: &web_sys::MouseEvent) -> Option<u64> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let trigger = target.closest(&format!("[{}]", DELETE_ID_ATTR)).ok()??;
    match trigger.get_attribute(DELETE_ID_ATTR)?.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("[ItemList] Ignoring delete trigger with bad id: {}", e);
            None
        }
    }
}
