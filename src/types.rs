use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

// GitHub API response structures

/// Public profile returned by `GET /users/{username}`.
///
/// Nothing here is validated. Missing, `null` or oddly typed values are
/// accepted and kept as whatever the card can still show, so a strange
/// response renders partially instead of failing the fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_text")]
    pub login: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub public_repos: Option<Number>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub followers: Option<Number>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub following: Option<Number>,
}

impl Profile {
    /// The user's name, or their login when the name is absent or empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

/// Strings and numbers as text; everything else renders as nothing.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Numbers as-is, numeric strings parsed, anything else dropped.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n),
        Value::String(s) => s.trim().parse::<Number>().ok(),
        _ => None,
    })
}
