use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend-assigned identifier. The backend may hand out integers or strings;
/// either is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Int(n) => write!(f, "{}", n),
            RequestId::Text(s) => f.write_str(s),
        }
    }
}

/// Kind of credential being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    #[default]
    Database,
    Api,
    Ssh,
}

impl SecretType {
    /// Selection order used by the form controls.
    pub const ALL: [SecretType; 3] = [SecretType::Database, SecretType::Api, SecretType::Ssh];

    /// Wire value, as sent in the `secret_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretType::Database => "database",
            SecretType::Api => "api",
            SecretType::Ssh => "ssh",
        }
    }

    /// Human label shown next to the option.
    pub fn label(&self) -> &'static str {
        match self {
            SecretType::Database => "Database",
            SecretType::Api => "API Key",
            SecretType::Ssh => "SSH Key",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SecretType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "database" => Ok(SecretType::Database),
            "api" => Ok(SecretType::Api),
            "ssh" => Ok(SecretType::Ssh),
            other => anyhow::bail!(
                "unknown secret type '{}' (expected one of: database, api, ssh)",
                other
            ),
        }
    }
}

/// A secret request as returned by `GET /api/secret-requests`.
///
/// `secret_type`, `status` and `created_at` are kept as the raw strings the
/// backend sent: they are displayed, never interpreted, and a value this
/// client does not know must not fail the whole listing.
///
/// Missing, `null` or non-string values decode to a display string (empty for
/// missing/`null`), so one odd record still shows up in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretRequest {
    pub id: RequestId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub secret_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub secret_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub justification: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// In-progress creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub secret_name: String,
    pub secret_type: SecretType,
    pub justification: String,
}

impl Draft {
    /// Snapshot of the draft as a `POST` body.
    pub fn to_body(&self) -> NewSecretRequest {
        NewSecretRequest {
            secret_name: self.secret_name.clone(),
            secret_type: self.secret_type,
            justification: self.justification.clone(),
        }
    }
}

/// Body of `POST /api/secret-requests`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSecretRequest {
    pub secret_name: String,
    pub secret_type: SecretType,
    pub justification: String,
}
