//! Frontend Models
//!
//! Data structures matching the items REST API, validated at the boundary.

use serde::{Deserialize, Deserializer, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned, never edited client-side.
    #[serde(alias = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Description as displayed; missing means empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One page of the item listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl Page {
    /// Number of pages needed to show `total` items, `limit` at a time.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Reject pages the pagination logic cannot make sense of.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 {
            return Err("page limit must be positive".to_string());
        }
        if self.page == 0 {
            return Err("page number must start at 1".to_string());
        }
        Ok(())
    }
}

/// Search response; pagination fields are ignored if the server sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

// The backend may encode an empty result set as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}
