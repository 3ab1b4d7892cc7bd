use anyhow::Context;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sagemaker_studio::{StudioUrlClient, DOMAIN_ID_ENV};
use tracing::info;

use studio_redirect::telemetry::init_tracing;
use studio_redirect::{function_handler, RedirectRequest, StudioConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = StudioConfig::from_env().context("Failed to load configuration")?;
    let client = StudioUrlClient::new().await;

    info!(
        domain_id = ?config.domain_id,
        source = DOMAIN_ID_ENV,
        "Studio redirect function starting"
    );

    let client = &client;
    let config = &config;
    run(service_fn(move |event: LambdaEvent<RedirectRequest>| async move {
        function_handler(client, config, event).await
    }))
    .await
}
