use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::ids::StorageId;
use crate::{Error, Result};

/// A persisted recipe entry.
///
/// Records written by older clients are frequently incomplete, so decoding is
/// lenient field by field (see [`Recipe::from_value`]). Keys this type does not
/// know about are kept in `extra` and written back unchanged on save.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "id")]
    pub storage_id: StorageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const KNOWN_KEYS: &[&str] = &[
    "id",
    "storageId",
    "createdAt",
    "title",
    "source",
    "date",
    "url",
    "ingredients",
    "steps",
    "tags",
    "image",
];

impl Recipe {
    pub fn new(storage_id: impl Into<StorageId>) -> Self {
        Self {
            storage_id: storage_id.into(),
            created_at: None,
            title: String::new(),
            source: String::new(),
            date: String::new(),
            url: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            tags: Vec::new(),
            image: None,
            extra: Map::new(),
        }
    }

    /// Decode a persisted record, degrading malformed fields instead of failing.
    ///
    /// Only a non-object value is rejected. Missing or mistyped sequences become
    /// empty, scalar text fields become empty strings (numbers are stringified),
    /// and a non-finite `createdAt` is dropped. Tags are kept as stored.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(Error::MalformedRecord(format!(
                "expected a JSON object, found {}",
                kind_of(&value)
            )));
        };

        let storage_id = map
            .get("id")
            .or_else(|| map.get("storageId"))
            .map(text_of)
            .unwrap_or_default();

        let created_at = map.get("createdAt").and_then(timestamp_of);

        let image = match map.get("image") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        let recipe = Self {
            storage_id: StorageId::new(storage_id),
            created_at,
            title: map.get("title").map(text_of).unwrap_or_default(),
            source: map.get("source").map(text_of).unwrap_or_default(),
            date: map.get("date").map(text_of).unwrap_or_default(),
            url: map.get("url").map(text_of).unwrap_or_default(),
            ingredients: lines_of(map.get("ingredients")),
            steps: lines_of(map.get("steps")),
            tags: lines_of(map.get("tags")),
            image,
            extra: Map::new(),
        };

        for key in KNOWN_KEYS {
            map.remove(*key);
        }

        Ok(Self { extra: map, ..recipe })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Recipe::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn timestamp_of(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number as i64)
}

fn lines_of(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
