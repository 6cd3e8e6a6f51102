use crate::shared::storage::KeyValueStore;
use contracts::system::identity::SessionIdentity;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    identity: SessionIdentity,
    is_new: bool,
}

impl SessionContext {
    /// Read the identity stored under `key`, generating and saving one if absent.
    pub fn initialize(store: &impl KeyValueStore, key: &str) -> Self {
        if let Some(identity) = store
            .get_item(key)
            .and_then(|raw| SessionIdentity::from_stored(&raw))
        {
            return Self {
                identity,
                is_new: false,
            };
        }

        let identity = SessionIdentity::generate();
        if let Err(e) = store.set_item(key, identity.as_str()) {
            // still usable for this page load
            log::warn!("Could not persist session identity: {}", e);
        }
        Self {
            identity,
            is_new: true,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

/// Hook to access the session identity
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided")
}
