use aws_lambda_events::eventbridge::EventBridgeEvent;
use lambda_runtime::tracing;
use serde::Deserialize;

use crate::error::IngestError;

pub mod registration;
pub mod response;

/// The lambda is subscribed either directly to bucket notifications or to the
/// EventBridge "Object Created" rule for the bucket.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IncomingEvent {
    S3Notification(S3Notification),
    EventBridgeEvent(EventBridgeEvent),
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Notification {
    #[serde(rename = "Records")]
    pub records: Vec<S3NotificationRecord>,
}

/// Only the parts of the record we read, every other field is ignored
#[derive(Debug, Clone, Deserialize)]
pub struct S3NotificationRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    #[serde(default)]
    pub key: Option<String>,
}

/// The bucket and decoded key of the object that triggered the invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl IncomingEvent {
    /// Resolves the object to ingest. Only the first notification record is considered.
    #[tracing::instrument(skip(self))]
    pub fn object_location(&self) -> Result<ObjectLocation, IngestError> {
        let (bucket, key) = match self {
            IncomingEvent::S3Notification(notification) => {
                let (first, rest) = notification
                    .records
                    .split_first()
                    .ok_or(IngestError::MissingRecord)?;

                if !rest.is_empty() {
                    tracing::warn!(ignored = rest.len(), "only the first record is processed");
                }

                (
                    first.s3.bucket.name.as_deref(),
                    first.s3.object.key.as_deref(),
                )
            }
            IncomingEvent::EventBridgeEvent(event) => {
                let detail = &event.detail;
                let bucket = detail
                    .get("bucket")
                    .and_then(|bucket| bucket.get("name"))
                    .and_then(|name| name.as_str());
                let key = detail
                    .get("object")
                    .and_then(|object| object.get("key"))
                    .and_then(|key| key.as_str());
                (bucket, key)
            }
        };

        let bucket = bucket
            .filter(|bucket| !bucket.is_empty())
            .ok_or(IngestError::MissingBucket)?;
        let key = key
            .filter(|key| !key.is_empty())
            .ok_or(IngestError::MissingKey)?;

        Ok(ObjectLocation {
            bucket: bucket.to_string(),
            key: decode_key(key)?,
        })
    }
}

/// Notification keys are form encoded, spaces arrive as `+`
fn decode_key(key: &str) -> Result<String, IngestError> {
    let unplussed = key.replace('+', " ");
    urlencoding::decode(&unplussed)
        .map(|decoded| decoded.into_owned())
        .map_err(|source| IngestError::InvalidKey {
            key: key.to_string(),
            source,
        })
}
