//! List View State
//!
//! Immutable record of what the list is showing. Handlers receive the current
//! value and hand back the next one; nothing is mutated in place.

/// Items requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What the item list is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMode {
    /// Paginated full listing
    Browse,
    /// Unpaginated results for a query
    Search { query: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Last successfully loaded list page (1-based).
    pub page: u32,
    pub limit: u32,
    pub mode: ListMode,
}

impl ViewState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            mode: ListMode::Browse,
        }
    }

    pub fn with_page_loaded(&self, page: u32) -> Self {
        Self {
            page,
            limit: self.limit,
            mode: ListMode::Browse,
        }
    }

    /// Search results leave the remembered list page alone.
    pub fn with_search(&self, query: impl Into<String>) -> Self {
        Self {
            page: self.page,
            limit: self.limit,
            mode: ListMode::Search {
                query: query.into(),
            },
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// What a search-form submission turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Search(String),
    /// A cleared search box goes back to the unfiltered first page.
    ShowFirstPage,
}

impl SearchAction {
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            SearchAction::ShowFirstPage
        } else {
            SearchAction::Search(input.to_string())
        }
    }
}

/// Identifies one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Orders overlapping requests: only the most recently issued one may render.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: u64,
}

impl LoadSequencer {
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page_browsing() {
        let state = ViewState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(state.mode, ListMode::Browse);
    }

    #[test]
    fn transitions_return_new_values() {
        let initial = ViewState::new(5);
        let loaded = initial.with_page_loaded(3);
        assert_eq!(initial.page, 1);
        assert_eq!(loaded, ViewState { page: 3, limit: 5, mode: ListMode::Browse });

        let searched = loaded.with_search("lamp");
        assert_eq!(searched.page, 3);
        assert_eq!(searched.mode, ListMode::Search { query: "lamp".into() });

        let back = searched.with_page_loaded(1);
        assert_eq!(back.mode, ListMode::Browse);
    }

    #[test]
    fn empty_search_input_shows_first_page() {
        assert_eq!(SearchAction::from_input(""), SearchAction::ShowFirstPage);
        assert_eq!(
            SearchAction::from_input("  "),
            SearchAction::Search("  ".to_string())
        );
        assert_eq!(
            SearchAction::from_input("lamp"),
            SearchAction::Search("lamp".to_string())
        );
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut sequencer = LoadSequencer::default();
        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}
