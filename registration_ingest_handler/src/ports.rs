//! Outbound dependencies of the ingest service and their AWS backed implementations

use crate::model::{ObjectLocation, registration::Registration};

/// Read access to uploaded objects
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStore: Send + Sync + 'static {
    /// fetch the full content of the object
    fn get_object(
        &self,
        location: &ObjectLocation,
    ) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;
}

/// Write access to the registrations table
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationTable: Send + Sync + 'static {
    /// write the registration, replacing any existing entry with the same id
    fn put_registration(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl ObjectStore for s3_client::S3 {
    async fn get_object(&self, location: &ObjectLocation) -> anyhow::Result<Vec<u8>> {
        self.get(&location.bucket, &location.key).await
    }
}

impl RegistrationTable for dynamodb_client::Registrations {
    async fn put_registration(&self, registration: &Registration) -> anyhow::Result<()> {
        dynamodb_client::Registrations::put_registration(
            self,
            &registration.id,
            &registration.name,
            &registration.email,
            &registration.registration_date,
        )
        .await
    }
}
