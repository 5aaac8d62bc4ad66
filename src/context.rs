//! List Context
//!
//! Signals for the list view, provided via Leptos Context API, plus the
//! dispatch helpers the components call.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, HttpItemsApi};
use crate::controller::{self, ListView, Transition};
use crate::models::ItemDraft;
use crate::view_state::{LoadSequencer, ViewState};

#[derive(Clone, Copy)]
pub struct ListContext {
    /// Current view state - read
    pub state: ReadSignal<ViewState>,
    /// Current view state - write
    set_state: WriteSignal<ViewState>,
    /// Rendered list - read
    pub view: ReadSignal<ListView>,
    /// Rendered list - write
    set_view: WriteSignal<ListView>,
    api: StoredValue<HttpItemsApi, LocalStorage>,
    sequencer: StoredValue<LoadSequencer>,
}

impl ListContext {
    pub fn new(api: HttpItemsApi, initial: ViewState) -> Self {
        let (state, set_state) = signal(initial);
        let (view, set_view) = signal(ListView::default());
        Self {
            state,
            set_state,
            view,
            set_view,
            api: StoredValue::new_local(api),
            sequencer: StoredValue::new(LoadSequencer::default()),
        }
    }

    pub fn load_page(&self, page: u32) {
        self.dispatch("loading items", move |api, state| async move {
            controller::load_page(&api, &state, page).await
        });
    }

    pub fn search(&self, input: String) {
        self.dispatch("searching items", move |api, state| async move {
            controller::submit_search(&api, &state, &input).await
        });
    }

    pub fn create(&self, draft: ItemDraft) {
        self.dispatch("creating item", move |api, state| async move {
            controller::submit_create(&api, &state, &draft).await
        });
    }

    pub fn delete(&self, id: u64) {
        self.dispatch("deleting item", move |api, state| async move {
            controller::delete_item(&api, &state, id).await
        });
    }

    /// Run one action; only the most recently issued one may update the view.
    fn dispatch<F, Fut>(&self, action: &'static str, op: F)
    where
        F: FnOnce(HttpItemsApi, ViewState) -> Fut + 'static,
        Fut: Future<Output = Result<Transition, ApiError>> + 'static,
    {
        let ctx = *self;
        let api = self.api.get_value();
        let state = self.state.get_untracked();
        let mut ticket = None;
        self.sequencer.update_value(|s| ticket = Some(s.begin()));

        spawn_local(async move {
            let outcome = op(api, state).await;
            let Some(ticket) = ticket else {
                return;
            };
            let settled = ctx
                .sequencer
                .with_value(|s| controller::settle(s, ticket, action, outcome));
            if let Some(transition) = settled {
                ctx.set_view.set(transition.view);
                ctx.set_state.set(transition.state);
            }
        });
    }
}

/// Get the list context provided by `App`
pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
