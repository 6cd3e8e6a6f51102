use crate::domain::a002_context_file::ProcessingStatus;
use serde::{Deserialize, Serialize};

/// Path prefix of the generation status endpoint; the encoded file name follows.
pub const ENDPOINT: &str = "/response_status/";

/// Progress of the answer to the last question about a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStatusResponse {
    pub status: ProcessingStatus,
    /// Empty or null until `status` is completed.
    #[serde(default)]
    pub response: Option<String>,
}

impl GenerationStatusResponse {
    pub fn answer(&self) -> Option<&str> {
        if self.status.is_completed() {
            Some(self.response.as_deref().unwrap_or_default())
        } else {
            None
        }
    }
}
