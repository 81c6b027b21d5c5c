use serde::{Deserialize, Serialize};

/// A note as it is stored in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Missing only on items created by an update of an unknown id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
