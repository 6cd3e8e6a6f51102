use serde::{Deserialize, Serialize};
use std::fmt;

/// The document questions are currently asked about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextFile {
    pub name: String,
}

impl ContextFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for ContextFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Server-side progress of ingestion or answer generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    #[default]
    Processing,
    Completed,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Processing => "processing",
            ProcessingStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ProcessingStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: ProcessingStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(status, ProcessingStatus::Completed);
        assert_eq!(
            serde_json::to_string(&ProcessingStatus::Processing).unwrap(),
            r#""processing""#
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(serde_json::from_str::<ProcessingStatus>(r#""queued""#).is_err());
    }
}
