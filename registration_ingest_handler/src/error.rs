use std::string::FromUtf8Error;

use thiserror::Error;

use crate::model::registration::RegistrationError;

/// Every way a single ingestion can fail. None of these are recovered locally,
/// they are logged and handed back to the lambda runtime.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("notification event contains no records")]
    MissingRecord,
    #[error("notification record has no bucket name")]
    MissingBucket,
    #[error("notification record has no object key")]
    MissingKey,
    #[error("object key {key} does not decode to utf-8")]
    InvalidKey {
        key: String,
        #[source]
        source: FromUtf8Error,
    },
    #[error("could not fetch object {key} from bucket {bucket}")]
    Fetch {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("object content is not valid utf-8")]
    Decode(#[from] FromUtf8Error),
    #[error("object content is not valid json")]
    Parse(#[from] serde_json::Error),
    #[error("object content is not a valid registration")]
    Registration(#[from] RegistrationError),
    #[error("could not write registration {id}")]
    Write {
        id: String,
        #[source]
        source: anyhow::Error,
    },
}
