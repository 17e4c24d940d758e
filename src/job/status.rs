// src/job/status.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-assigned job id. Servers answer with either a string or a number;
/// both end up here as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) if !s.trim().is_empty() => Some(JobId(s.trim().to_string())),
            Value::Number(n) => Some(JobId(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn de_opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<JobId>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(JobId::from_value(&v))
}

/// Body of `GET /api/v1/jobs/{id}` (and of a successful POST).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<JobId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl JobStatus {
    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    /// A result counts once it is present and non-empty
    /// (`null`, `""`, `[]`, `{}`, `0` and `false` don't).
    pub fn has_result(&self) -> bool {
        self.result.as_ref().is_some_and(is_truthy)
    }

    pub fn is_failed(&self) -> bool {
        self.status.as_deref().is_some_and(|s| s.trim().eq_ignore_ascii_case("failed"))
    }

    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
