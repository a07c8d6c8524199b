use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    model::{IncomingEvent, response::IngestResponse},
    ports::{ObjectStore, RegistrationTable},
    service::IngestService,
};

/// Processes the object created notification.
/// Errors are logged and returned so the runtime reports the invocation as failed.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<S, T>(
    service: &IngestService<S, T>,
    event: LambdaEvent<IncomingEvent>,
) -> Result<IngestResponse, Error>
where
    S: ObjectStore,
    T: RegistrationTable,
{
    tracing::trace!(event=?event.payload, "handler invoked");

    let location = event.payload.object_location().map_err(|e| {
        tracing::error!(error=?e, "unable to resolve object from event");
        e
    })?;

    service.ingest(&location).await.map_err(|e| {
        tracing::error!(
            error=?e,
            bucket=%location.bucket,
            key=%location.key,
            "unable to ingest registration"
        );
        e
    })?;

    Ok(IngestResponse::saved())
}
