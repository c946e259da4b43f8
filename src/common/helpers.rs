// Helper functions for request decoding

use serde::{de, Deserialize, Deserializer};

/// Parses the loose boolean spellings HTML forms send ("true", "on", "1", "")
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Deserializes a referral flag from a JSON boolean, 0/1, or a form string
///
/// A missing or null value is treated as `false`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagRepr>::deserialize(deserializer)? {
        None => Ok(false),
        Some(FlagRepr::Bool(b)) => Ok(b),
        Some(FlagRepr::Int(0)) => Ok(false),
        Some(FlagRepr::Int(1)) => Ok(true),
        Some(FlagRepr::Int(n)) => Err(de::Error::custom(format!(
            "invalid boolean value: {}",
            n
        ))),
        Some(FlagRepr::Text(s)) => parse_flag(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid boolean value: {:?}", s))),
    }
}

/// Trims an optional text field and turns blank input into `None`
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(non_blank(value))
}

/// Trims a required text field; blank values are rejected later by the validator
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()).unwrap_or_default())
}

pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
