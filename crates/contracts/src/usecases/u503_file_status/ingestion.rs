use crate::domain::a002_context_file::ProcessingStatus;
use serde::{Deserialize, Serialize};

/// Path prefix of the ingestion status endpoint; the encoded file name follows.
pub const ENDPOINT: &str = "/upload_status/";

/// Ingestion status body: a bare status string, or an object holding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngestionStatus {
    Bare(ProcessingStatus),
    Wrapped { status: ProcessingStatus },
}

impl IngestionStatus {
    pub fn status(&self) -> ProcessingStatus {
        match self {
            IngestionStatus::Bare(status) | IngestionStatus::Wrapped { status } => *status,
        }
    }
}
