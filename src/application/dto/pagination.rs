use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u32>,
    pub has_more: bool,
}

impl<T> OffsetPage<T> {
    #[must_use]
    pub fn new(items: Vec<T>, limit: u32, offset: u32, has_more: bool) -> Self {
        let next_offset = has_more.then(|| offset.saturating_add(limit));
        Self {
            items,
            limit,
            offset,
            next_offset,
            has_more,
        }
    }
}
