use chatpilot::api::{Dispatcher, handler};
use chatpilot::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    chatpilot::setup_logging();

    // Clients are built once per cold start and shared by every invocation.
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    let dispatcher = Dispatcher::from_config(&config).await;

    lambda_runtime::run(lambda_runtime::service_fn(|event| handler(event, &dispatcher))).await
}
