use ferramentas::api::{ApiState, handler};
use ferramentas::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ferramentas::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Config error: {}", e);
        Error::from(e)
    })?;
    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; requests will fail until it is configured");
    }

    let state = ApiState::from_config(config).map_err(Error::from)?;
    let state = &state;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(state, event).await
    }))
    .await
}
