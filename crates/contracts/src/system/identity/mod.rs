use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Random client id generated once per browser profile.
///
/// It is never validated: whatever string is already stored is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionIdentity(String);

impl SessionIdentity {
    /// A fresh UUID v4 identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Restore a previously stored identity; an empty value counts as absent.
    pub fn from_stored(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
