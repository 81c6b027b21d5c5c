mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use tracing_subscriber::EnvFilter;

use std::sync::Arc;

use dto::NoteEvent;
use handlers::gateway;
use repository::DynamoRepository;
use service::NoteService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Log setup, CloudWatch adds its own timestamps
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    // Fetch env variables
    let cfg = config::load_config().map_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
        e
    })?;
    tracing::info!("Serving notes from table {}", cfg.table_name);

    // Store client is built once and shared by every invocation
    let client = config::dynamodb_client(&cfg).await;
    let repo = Arc::new(DynamoRepository::new(client, cfg.table_name));
    let service = NoteService::new(repo);

    run(service_fn(|event: LambdaEvent<NoteEvent>| {
        gateway::function_handler(&service, event)
    }))
    .await
}
