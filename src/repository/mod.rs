mod dynamo;
#[cfg(test)]
pub mod memory;

pub use dynamo::DynamoRepository;

use async_trait::async_trait;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DynamoDB request failed: {0}")]
    Dynamo(#[from] aws_sdk_dynamodb::Error),

    #[error("Malformed note item: {0}")]
    MalformedItem(String),
}

/// Item store holding notes keyed by `id`.
///
/// Every call maps onto exactly one store operation (a scan may span several
/// pages). Nothing is cached between calls.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Writes the whole item, replacing anything stored under the same id.
    async fn put_note(&self, note: &Note) -> Result<(), StoreError>;

    async fn get_note(&self, id: &str) -> Result<Option<Note>, StoreError>;

    /// Overwrites `title` and `content` and returns every attribute of the
    /// resulting item. An unknown id yields a new item without `created_at`.
    async fn update_note(
        &self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Note>, StoreError>;

    /// Succeeds whether or not the id existed.
    async fn delete_note(&self, id: &str) -> Result<(), StoreError>;

    async fn scan_notes(&self) -> Result<Vec<Note>, StoreError>;
}
