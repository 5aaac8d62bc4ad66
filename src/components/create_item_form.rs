//! Create Item Form Component
//!
//! Form for adding a new item to the list.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::models::ItemDraft;

/// Form for creating new items
#[component]
pub fn CreateItemForm() -> impl IntoView {
    let ctx = use_list_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(name.get_untracked(), description.get_untracked());
        ctx.create(draft);
        // Cleared right away; the request carries its own copy.
        set_name.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form id="createForm" class="create-form" on:submit=create_item>
            <input
                id="nameInput"
                type="text"
                placeholder="Name"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                id="descriptionInput"
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
