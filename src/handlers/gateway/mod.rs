mod response;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::{
    dto::{ApiResponse, MessageResponse, NoteEvent, NoteFields},
    repository::StoreError,
    service::NoteService,
};

pub use response::respond;

pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const NOTE_DELETED: &str = "Note deleted successfully";
pub const UNSUPPORTED_METHOD: &str = "Unsupported method";

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0} request is missing the 'id' path parameter")]
    MissingId(&'static str),

    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Request body does not describe a note: {0}")]
    InvalidFields(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Lambda entry point: one API Gateway event in, one envelope out.
///
/// Only "not found" and "unsupported method" become crafted responses. Every
/// other failure is returned as an invocation error.
pub async fn function_handler(
    service: &NoteService,
    event: LambdaEvent<NoteEvent>,
) -> Result<ApiResponse, Error> {
    let (payload, context) = event.into_parts();

    tracing::info!(
        "Request {}: {} id={:?}",
        context.request_id,
        payload.http_method.as_deref().unwrap_or("<none>"),
        payload.path_id()
    );

    dispatch(service, &payload).await.map_err(|e| {
        tracing::error!("Request {} failed: {e}", context.request_id);
        e.into()
    })
}

pub async fn dispatch(
    service: &NoteService,
    event: &NoteEvent,
) -> Result<ApiResponse, HandlerError> {
    let body = parse_body(event.body.as_deref())?;
    let method = event.http_method.as_deref().unwrap_or_default();

    match (method, event.path_id()) {
        ("GET", Some(id)) => get_one_note(service, id).await,
        ("GET", None) => get_all_notes(service).await,
        ("POST", _) => create_note(service, note_fields(body)?).await,
        ("PUT", id) => {
            let id = id.ok_or(HandlerError::MissingId("PUT"))?;
            update_note(service, id, note_fields(body)?).await
        }
        ("DELETE", id) => {
            let id = id.ok_or(HandlerError::MissingId("DELETE"))?;
            delete_note(service, id).await
        }
        _ => Ok(respond(400, &MessageResponse::new(UNSUPPORTED_METHOD))?),
    }
}

/// An absent or empty body is not an error; anything else must be JSON.
fn parse_body(body: Option<&str>) -> Result<Option<Value>, HandlerError> {
    match body {
        Some(text) if !text.is_empty() => serde_json::from_str(text)
            .map(Some)
            .map_err(HandlerError::MalformedBody),
        _ => Ok(None),
    }
}

fn note_fields(body: Option<Value>) -> Result<NoteFields, HandlerError> {
    body.map_or_else(
        || Ok(NoteFields::default()),
        |value| serde_json::from_value(value).map_err(HandlerError::InvalidFields),
    )
}

async fn create_note(
    service: &NoteService,
    payload: NoteFields,
) -> Result<ApiResponse, HandlerError> {
    let note = service.create_note(payload).await?;
    tracing::info!("Created note {}", note.id);
    Ok(respond(201, &note)?)
}

async fn get_one_note(service: &NoteService, id: &str) -> Result<ApiResponse, HandlerError> {
    match service.get_one_note(id).await? {
        Some(note) => Ok(respond(200, &note)?),
        None => Ok(respond(404, &MessageResponse::new(NOTE_NOT_FOUND))?),
    }
}

async fn get_all_notes(service: &NoteService) -> Result<ApiResponse, HandlerError> {
    let notes = service.get_all_notes().await?;
    Ok(respond(200, &notes)?)
}

async fn update_note(
    service: &NoteService,
    id: &str,
    payload: NoteFields,
) -> Result<ApiResponse, HandlerError> {
    let note = service.update_note(id, payload).await?;
    tracing::info!("Updated note {id}");
    Ok(respond(200, &note)?)
}

async fn delete_note(service: &NoteService, id: &str) -> Result<ApiResponse, HandlerError> {
    service.delete_note(id).await?;
    tracing::info!("Deleted note {id}");
    Ok(respond(204, &MessageResponse::new(NOTE_DELETED))?)
}
