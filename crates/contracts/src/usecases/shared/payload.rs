use serde::{Deserialize, Serialize};

/// Body of a backend response: either the expected data or a bare text message.
///
/// The backend reports logical errors by returning a JSON string where an
/// object is expected, so a text-typed body is always an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendPayload<T> {
    Data(T),
    Message(String),
}

impl<T> BackendPayload<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            BackendPayload::Data(data) => Ok(data),
            BackendPayload::Message(message) => Err(message),
        }
    }
}
