use async_trait::async_trait;
use aws_sdk_dynamodb::{
    Client,
    types::{AttributeValue, ReturnValue},
};

use std::collections::HashMap;

use crate::models::Note;

use super::{NoteStore, StoreError};

type Item = HashMap<String, AttributeValue>;

pub struct DynamoRepository {
    client: Client,
    table_name: String,
}

impl DynamoRepository {
    pub const fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl NoteStore for DynamoRepository {
    async fn put_note(&self, note: &Note) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(note_to_item(note)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        tracing::info!("Stored note {} in {}", note.id, self.table_name);

        Ok(())
    }

    async fn get_note(&self, id: &str) -> Result<Option<Note>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", Self::key(id))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        output.item().map(note_from_item).transpose()
    }

    async fn update_note(
        &self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Note>, StoreError> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", Self::key(id))
            .update_expression("SET #title = :title, #content = :content")
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#content", "content")
            .expression_attribute_values(":title", string_or_null(title))
            .expression_attribute_values(":content", string_or_null(content))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        output.attributes().map(note_from_item).transpose()
    }

    async fn delete_note(&self, id: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", Self::key(id))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }

    async fn scan_notes(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(aws_sdk_dynamodb::Error::from)?;

            for item in output.items() {
                notes.push(note_from_item(item)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::info!("Scanned {} notes from {}", notes.len(), self.table_name);

        Ok(notes)
    }
}

fn string_or_null(value: Option<String>) -> AttributeValue {
    value.map_or(AttributeValue::Null(true), AttributeValue::S)
}

pub fn note_to_item(note: &Note) -> Item {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(note.id.clone()));
    item.insert("title".to_string(), string_or_null(note.title.clone()));
    item.insert("content".to_string(), string_or_null(note.content.clone()));
    if let Some(created_at) = &note.created_at {
        item.insert(
            "created_at".to_string(),
            AttributeValue::S(created_at.clone()),
        );
    }
    item
}

pub fn note_from_item(item: &Item) -> Result<Note, StoreError> {
    let id = optional_string(item, "id")?
        .ok_or_else(|| StoreError::MalformedItem("missing 'id' attribute".to_string()))?;

    Ok(Note {
        id,
        title: optional_string(item, "title")?,
        content: optional_string(item, "content")?,
        created_at: optional_string(item, "created_at")?,
    })
}

fn optional_string(item: &Item, name: &str) -> Result<Option<String>, StoreError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
        Some(other) => Err(StoreError::MalformedItem(format!(
            "attribute '{name}' is not a string: {other:?}"
        ))),
    }
}
