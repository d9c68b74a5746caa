use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The five columns a collection can be filtered and sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewField {
    Id,
    DateAdded,
    Name,
    Source,
    Tags,
}

impl ViewField {
    pub const ALL: [ViewField; 5] = [
        ViewField::Id,
        ViewField::DateAdded,
        ViewField::Name,
        ViewField::Source,
        ViewField::Tags,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ViewField::Id => "id",
            ViewField::DateAdded => "dateAdded",
            ViewField::Name => "name",
            ViewField::Source => "source",
            ViewField::Tags => "tags",
        }
    }
}

impl Default for ViewField {
    fn default() -> Self {
        Self::DateAdded
    }
}

impl fmt::Display for ViewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ViewField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(ViewField::Id),
            "dateadded" | "date_added" | "date-added" | "date" => Ok(ViewField::DateAdded),
            "name" | "title" => Ok(ViewField::Name),
            "source" => Ok(ViewField::Source),
            "tags" | "tag" => Ok(ViewField::Tags),
            _ => Err(Error::UnknownVariant {
                kind: "column",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow used by renderers next to the active column header.
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(Error::UnknownVariant {
                kind: "sort direction",
                value: s.to_string(),
            }),
        }
    }
}

/// How a page of rows is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    Card,
    Table,
}

impl PresentationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationMode::Card => "card",
            PresentationMode::Table => "table",
        }
    }

    /// Read a persisted mode, falling back to `Card` for anything unrecognized.
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl Default for PresentationMode {
    fn default() -> Self {
        Self::Card
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PresentationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" | "cards" => Ok(PresentationMode::Card),
            "table" => Ok(PresentationMode::Table),
            _ => Err(Error::UnknownVariant {
                kind: "presentation mode",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip() {
        for field in ViewField::ALL {
            assert_eq!(field.key().parse::<ViewField>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_serializes_as_key() {
        let json = serde_json::to_string(&ViewField::DateAdded).unwrap();
        assert_eq!(json, "\"dateAdded\"");
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = "rating".parse::<ViewField>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown column: 'rating'");
    }

    #[test]
    fn test_stored_mode_defaults_to_card() {
        assert_eq!(PresentationMode::from_stored(None), PresentationMode::Card);
        assert_eq!(
            PresentationMode::from_stored(Some("grid")),
            PresentationMode::Card
        );
        assert_eq!(
            PresentationMode::from_stored(Some("table")),
            PresentationMode::Table
        );
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }
}
