use std::sync::Arc;

use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use handler::handler;
use ingest_entrypoint::IngestEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use model::IncomingEvent;
use service::IngestService;

mod config;
mod error;
mod handler;
mod model;
mod ports;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = IngestEntrypoint::default().init();

    tracing::trace!(environment=%entrypoint.environment(), "initiating lambda");

    let config = config::Config::from_env().context("failed to load config")?;
    tracing::trace!("initialized config");

    let region = RegionProviderChain::default_provider().or_else(config::DEFAULT_REGION);
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let dynamodb_client = dynamodb_client::DynamodbClient::new(&aws_config, &config.table_name);
    tracing::trace!(table=%config.table_name, "initialized dynamodb client");

    let service = Arc::new(IngestService::new(
        s3_client,
        dynamodb_client.registrations,
    ));

    let func = service_fn(move |event: LambdaEvent<IncomingEvent>| {
        let service = service.clone();
        async move { handler(&*service, event).await }
    });

    run(func).await
}
