//! The `config.json` document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::AppError;
use crate::domain::config::Storage;
use crate::domain::config::storage::object_or_default;

/// Job configuration written by the platform into the data directory.
///
/// Unknown top-level keys are kept in `extra` so the document can be
/// written back without losing anything the platform added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Application-defined parameters. Anything other than an object reads as empty.
    #[serde(default, deserialize_with = "object_or_empty")]
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub authorization: Map<String, Value>,
    #[serde(default, deserialize_with = "object_or_default")]
    pub storage: Storage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    /// `authorization.oauth_api.credentials`, when every level is an object.
    pub fn oauth_credentials(&self) -> Option<&Map<String, Value>> {
        self.authorization.get("oauth_api")?.get("credentials")?.as_object()
    }

    fn credential_str(&self, key: &str) -> String {
        self.oauth_credentials()
            .and_then(|credentials| credentials.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// OAuth payload from `credentials.#data`.
    ///
    /// The platform stores it as a JSON string inside the JSON document, so
    /// the string is decoded a second time. An object stored directly is
    /// returned as is.
    pub fn oauth_data(&self) -> Result<Map<String, Value>, AppError> {
        let Some(data) = self.oauth_credentials().and_then(|credentials| credentials.get("#data"))
        else {
            return Ok(Map::new());
        };
        match data {
            Value::String(encoded) => {
                serde_json::from_str(encoded).map_err(|err| AppError::ParseError {
                    what: "oauth_api.credentials.#data".to_string(),
                    details: err.to_string(),
                })
            }
            Value::Object(map) => Ok(map.clone()),
            _ => Ok(Map::new()),
        }
    }

    pub fn oauth_app_secret(&self) -> String {
        self.credential_str("#appSecret")
    }

    pub fn oauth_app_key(&self) -> String {
        self.credential_str("appKey")
    }
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
