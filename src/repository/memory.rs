use async_trait::async_trait;

use std::collections::HashMap;

use crate::models::Note;

use super::{NoteStore, StoreError};

/// Table stand-in for tests. Update on an unknown id creates the item, as
/// DynamoDB does.
#[derive(Default)]
pub struct InMemoryRepository {
    items: tokio::sync::Mutex<HashMap<String, Note>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }
}

#[async_trait]
impl NoteStore for InMemoryRepository {
    async fn put_note(&self, note: &Note) -> Result<(), StoreError> {
        self.items
            .lock()
            .await
            .insert(note.id.clone(), note.clone());
        Ok(())
    }

    async fn get_note(&self, id: &str) -> Result<Option<Note>, StoreError> {
        Ok(self.items.lock().await.get(id).cloned())
    }

    async fn update_note(
        &self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Note>, StoreError> {
        let mut items = self.items.lock().await;
        let note = items.entry(id.to_string()).or_insert_with(|| Note {
            id: id.to_string(),
            title: None,
            content: None,
            created_at: None,
        });
        note.title = title;
        note.content = content;
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, id: &str) -> Result<(), StoreError> {
        self.items.lock().await.remove(id);
        Ok(())
    }

    async fn scan_notes(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.items.lock().await.values().cloned().collect())
    }
}
