use serde::{Deserialize, Serialize};

pub const SAVED_MESSAGE: &str = "Data saved successfully.";

/// Returned once the registration is written. Failures never produce a response,
/// the error is surfaced to the runtime instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub status_code: u16,
    pub body: String,
}

impl IngestResponse {
    pub fn saved() -> Self {
        Self {
            status_code: 200,
            body: SAVED_MESSAGE.to_string(),
        }
    }
}
