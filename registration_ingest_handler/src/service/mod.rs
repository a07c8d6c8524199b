use lambda_runtime::tracing;

use crate::{
    error::IngestError,
    model::{ObjectLocation, registration::Registration},
    ports::{ObjectStore, RegistrationTable},
};

#[cfg(test)]
mod memory;
#[cfg(test)]
mod tests;

/// Turns an uploaded document into a stored registration.
/// Built once per cold start, the clients it holds are only ever read.
#[derive(Clone)]
pub struct IngestService<S, T> {
    objects: S,
    table: T,
}

impl<S, T> IngestService<S, T>
where
    S: ObjectStore,
    T: RegistrationTable,
{
    pub fn new(objects: S, table: T) -> Self {
        IngestService { objects, table }
    }

    /// Fetches, decodes, parses and validates the object, then writes it to the table.
    /// Nothing is written unless every earlier step succeeded.
    #[tracing::instrument(skip(self))]
    pub async fn ingest(&self, location: &ObjectLocation) -> Result<Registration, IngestError> {
        let bytes = self
            .objects
            .get_object(location)
            .await
            .map_err(|source| IngestError::Fetch {
                bucket: location.bucket.clone(),
                key: location.key.clone(),
                source,
            })?;
        tracing::trace!(size = bytes.len(), "fetched object");

        let text = String::from_utf8(bytes)?;
        let document: serde_json::Value = serde_json::from_str(&text)?;
        let registration = Registration::try_from(document)?;
        tracing::trace!(id = %registration.id, "parsed registration");

        self.table
            .put_registration(&registration)
            .await
            .map_err(|source| IngestError::Write {
                id: registration.id.clone(),
                source,
            })?;
        tracing::info!(id = %registration.id, "registration saved");

        Ok(registration)
    }
}
