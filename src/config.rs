use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// DynamoDB table holding the notes (`TABLE_NAME`)
    pub table_name: String,
    /// Endpoint override for DynamoDB Local and emulators (`DYNAMODB_ENDPOINT_URL`)
    #[serde(default)]
    pub dynamodb_endpoint_url: Option<String>,
}

pub fn load_config() -> Result<Config, envy::Error> {
    envy::from_env::<Config>()
}

/// Builds the DynamoDB client once per process; every invocation reuses it.
pub async fn dynamodb_client(config: &Config) -> aws_sdk_dynamodb::Client {
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.dynamodb_endpoint_url {
        tracing::info!("Using DynamoDB endpoint override {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    aws_sdk_dynamodb::Client::from_conf(builder.build())
}
