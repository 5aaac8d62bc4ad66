//! Item List Rendering
//!
//! Turns API payloads into the HTML fragment mounted in `#items` and the view
//! model behind the pagination controls. All interpolated text goes through
//! [`escape_html`].

use crate::models::{Item, Page};

/// Shown instead of item blocks when a list or search comes back empty.
pub const EMPTY_PLACEHOLDER: &str = "<p>No items found</p>";

/// Attribute on the delete trigger holding the item id.
pub const DELETE_ID_ATTR: &str = "data-delete-id";

/// Escape text for use inside element content or quoted attribute values.
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the item blocks, or the placeholder when there are none.
pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    items.iter().map(render_item).collect()
}

fn render_item(item: &Item) -> String {
    format!(
        r#"<div class="item" data-item-id="{id}"><h3>{name}</h3><p>{description}</p><button type="button" class="delete-btn" {DELETE_ID_ATTR}="{id}">Delete</button></div>"#,
        id = item.id,
        name = escape_html(&item.name),
        description = escape_html(item.description_text()),
    )
}

/// Previous/Next state for a multi-page listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
}

impl PaginationView {
    /// `None` when everything fits on one page and the control is hidden.
    pub fn from_page(page: &Page) -> Option<Self> {
        let total_pages = page.total_pages();
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            page: page.page,
            total_pages,
        })
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: u64, name: &str, description: Option<&str>) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn page(total: u64, page: u32, limit: u32) -> Page {
        Page { items: vec![], total, page, limit }
    }

    fn unescape(escaped: &str) -> String {
        escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#039;y&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_does_not_double_decode_entities() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(unescape(&escape_html("&lt;")), "&lt;");
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_raw_markup(s in any::<String>()) {
            let escaped = escape_html(&s);
            prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
            // Every ampersand left must start one of the entities we emit.
            for (idx, _) in escaped.match_indices('&') {
                let rest = &escaped[idx..];
                prop_assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"].iter().any(|e| rest.starts_with(e))
                );
            }
            prop_assert_eq!(unescape(&escaped), s);
        }
    }

    #[test]
    fn empty_list_renders_only_placeholder() {
        assert_eq!(render_items(&[]), "<p>No items found</p>");
    }

    #[test]
    fn items_render_in_order_with_escaped_text() {
        let html = render_items(&[
            item(1, "<b>first</b>", Some("a & b")),
            item(2, "second", None),
        ]);
        assert_eq!(html.matches(r#"<div class="item""#).count(), 2);
        assert!(html.contains("<h3>&lt;b&gt;first&lt;/b&gt;</h3>"));
        assert!(html.contains("<p>a &amp; b</p>"));
        assert!(html.contains("<h3>second</h3><p></p>"));
        assert!(html.contains(r#"data-delete-id="2""#));
        assert!(!html.contains(EMPTY_PLACEHOLDER));
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn pagination_middle_page() {
        let view = PaginationView::from_page(&page(25, 2, 10)).unwrap();
        assert_eq!(view.label(), "Page 2 of 3");
        assert!(view.has_previous());
        assert!(view.has_next());
        assert_eq!(view.previous_page(), 1);
        assert_eq!(view.next_page(), 3);
    }

    #[test]
    fn pagination_hidden_for_single_page() {
        assert_eq!(PaginationView::from_page(&page(5, 1, 10)), None);
        assert_eq!(PaginationView::from_page(&page(10, 1, 10)), None);
        assert_eq!(PaginationView::from_page(&page(0, 1, 10)), None);
    }

    #[test]
    fn pagination_edges_disable_buttons() {
        let first = PaginationView::from_page(&page(11, 1, 10)).unwrap();
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = PaginationView::from_page(&page(11, 2, 10)).unwrap();
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    proptest! {
        #[test]
        fn pagination_hidden_iff_single_page(total in 0u64..500, limit in 1u32..50, p in 1u32..20) {
            let hidden = PaginationView::from_page(&page(total, p, limit)).is_none();
            prop_assert_eq!(hidden, total.div_ceil(u64::from(limit)) <= 1);
        }
    }
}
