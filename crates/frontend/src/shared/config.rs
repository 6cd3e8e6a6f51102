use crate::shared::storage::KeyValueStore;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    pub api: ApiConfig,
    pub polling: PollingConfig,
    pub session: SessionConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full backend URL; empty means "page host on `port`".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PollingConfig {
    pub interval_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    pub identity_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UploadConfig {
    pub accept: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8000

[polling]
interval_ms = 7000

[session]
identity_key = "user_id"

[upload]
accept = ".pdf"
"#;

/// localStorage key holding a TOML document merged over the defaults
pub const OVERRIDE_KEY: &str = "chat_config";

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 8000,
            },
            polling: PollingConfig { interval_ms: 7000 },
            session: SessionConfig {
                identity_key: "user_id".to_string(),
            },
            upload: UploadConfig {
                accept: ".pdf".to_string(),
            },
        }
    }
}

/// Parse an override document and merge it key by key over the defaults.
pub fn parse_with_override(raw: &str) -> Result<ChatConfig, toml::de::Error> {
    let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overlay: toml::Table = toml::from_str(raw)?;
    merge_tables(&mut base, overlay);
    toml::Value::Table(base).try_into()
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, nested);
                    continue;
                }
                base.insert(key, toml::Value::Table(nested));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. TOML override stored under [`OVERRIDE_KEY`]
/// 2. Falls back to the embedded defaults
pub fn load_config(store: &impl KeyValueStore) -> ChatConfig {
    let Some(raw) = store.get_item(OVERRIDE_KEY) else {
        log::info!("Using default embedded configuration");
        return ChatConfig::default();
    };

    match parse_with_override(&raw) {
        Ok(config) => {
            log::info!("Loaded configuration override from '{}'", OVERRIDE_KEY);
            config
        }
        Err(e) => {
            log::warn!("Ignoring malformed '{}' override: {}", OVERRIDE_KEY, e);
            ChatConfig::default()
        }
    }
}
