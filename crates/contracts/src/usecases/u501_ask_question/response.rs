use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success body of the question endpoint.
///
/// Any JSON value other than a string is an acceptance; the answer itself
/// arrives through the generation status endpoint. A string body is the
/// backend's error message and is left to `BackendPayload::Message`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AskQuestionAccepted(pub Value);

impl<'de> Deserialize<'de> for AskQuestionAccepted {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(_) => Err(de::Error::custom("text payload is an error message")),
            other => Ok(Self(other)),
        }
    }
}
