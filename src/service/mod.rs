use chrono::Utc;
use uuid::Uuid;

use std::sync::Arc;

use crate::{
    dto::NoteFields,
    models::Note,
    repository::{NoteStore, StoreError},
};

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteStore>,
}

impl NoteService {
    pub const fn new(repo: Arc<dyn NoteStore>) -> Self {
        Self { repo }
    }

    pub async fn create_note(&self, request: NoteFields) -> Result<Note, StoreError> {
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            content: request.content,
            created_at: Some(created_timestamp()),
        };

        self.repo.put_note(&note).await?;

        Ok(note)
    }

    pub async fn get_one_note(&self, id: &str) -> Result<Option<Note>, StoreError> {
        self.repo.get_note(id).await
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, StoreError> {
        self.repo.scan_notes().await
    }

    pub async fn update_note(
        &self,
        id: &str,
        request: NoteFields,
    ) -> Result<Option<Note>, StoreError> {
        let note = self
            .repo
            .update_note(id, request.title, request.content)
            .await?;

        if note.as_ref().is_some_and(|note| note.created_at.is_none()) {
            tracing::warn!("Update of unknown note {id} created a new item without created_at");
        }

        Ok(note)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), StoreError> {
        self.repo.delete_note(id).await
    }
}

/// Naive UTC timestamp with microseconds, e.g. `2024-05-01T10:00:00.123456`.
fn created_timestamp() -> String {
    Utc::now()
        .naive_utc()
        .format(CREATED_AT_FORMAT)
        .to_string()
}

const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
