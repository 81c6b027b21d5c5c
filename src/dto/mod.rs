use serde::{Deserialize, Serialize};

use std::collections::{BTreeMap, HashMap};

/// The subset of an API Gateway proxy event the handler reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    /// HTTP verb, e.g. `GET`
    pub http_method: Option<String>,
    /// Route parameters, `id` for `/notes/{id}`
    pub path_parameters: Option<HashMap<String, String>>,
    /// JSON-encoded request body
    pub body: Option<String>,
}

impl NoteEvent {
    /// The `id` path parameter, treating an empty string as absent.
    pub fn path_id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get("id"))
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

/// Body of create and update requests. Absent keys stay `None`.
///
/// `title` and `content` must be strings or `null`; any other JSON type fails
/// the request instead of being stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    /// Note title
    pub title: Option<String>,
    /// Note content
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response envelope handed back to API Gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}
