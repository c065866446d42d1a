//! Layer-set domain types and their JSON wire shape.
//!
//! Field names on the wire are the ones the presentation layer reads
//! (`armers`, `type`, `color0`, `createdAt`), so several Rust fields carry
//! a serde rename.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::EquipmentCatalog;
use crate::error::CoreError;

/// Number of tags a layer set carries, inclusive bounds.
pub const MIN_TAGS: usize = 3;
pub const MAX_TAGS: usize = 5;

// ---------------------------------------------------------------------------
// Category / Gender
// ---------------------------------------------------------------------------

/// Body slot an equipment piece occupies.
///
/// Declaration order is the canonical slot order of a layer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Head,
    Chest,
    Arms,
    Waist,
    Legs,
}

impl Category {
    /// All categories in slot order.
    pub const ALL: [Category; 5] = [
        Category::Head,
        Category::Chest,
        Category::Arms,
        Category::Waist,
        Category::Legs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Head => "head",
            Category::Chest => "chest",
            Category::Arms => "arms",
            Category::Waist => "waist",
            Category::Legs => "legs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive; the armor database reports kinds as e.g. `"Head"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "head" => Ok(Category::Head),
            "chest" => Ok(Category::Chest),
            "arms" => Ok(Category::Arms),
            "waist" => Ok(Category::Waist),
            "legs" => Ok(Category::Legs),
            other => Err(CoreError::Validation(format!("unknown category: {other}"))),
        }
    }
}

/// Gender variant of an equipment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "w")]
    Female,
}

// ---------------------------------------------------------------------------
// Armer / LayerSet
// ---------------------------------------------------------------------------

/// A single equipped piece inside a layer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armer {
    /// Equipment id, drawn from the catalog list of `category`.
    pub id: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub gender: Gender,
    /// `#RRGGBB`, upper-case hex.
    #[serde(rename = "color0")]
    pub primary_color: String,
    #[serde(rename = "color1")]
    pub secondary_color: String,
}

/// A cosmetic combination of five pieces plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSet {
    /// Stringified sequence index within one generation run.
    pub id: String,
    pub name: String,
    /// Exactly one piece per [`Category`], in [`Category::ALL`] order.
    pub armers: Vec<Armer>,
    pub description: String,
    /// Relative image paths.
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl LayerSet {
    /// Check the structural invariants of a synthesized set against the
    /// catalog it was built from.
    pub fn validate(&self, catalog: &EquipmentCatalog) -> Result<(), CoreError> {
        if self.armers.len() != Category::ALL.len() {
            return Err(CoreError::Validation(format!(
                "layer set {} has {} armers, expected {}",
                self.id,
                self.armers.len(),
                Category::ALL.len()
            )));
        }

        for (armer, expected) in self.armers.iter().zip(Category::ALL) {
            if armer.category != expected {
                return Err(CoreError::Validation(format!(
                    "layer set {} has {} in the {} slot",
                    self.id, armer.category, expected
                )));
            }
            if !catalog.contains(armer.category, &armer.id) {
                return Err(CoreError::Validation(format!(
                    "layer set {}: {} is not a known {} id",
                    self.id, armer.id, armer.category
                )));
            }
            for color in [&armer.primary_color, &armer.secondary_color] {
                if !is_hex_color(color) {
                    return Err(CoreError::Validation(format!(
                        "layer set {}: invalid color {color}",
                        self.id
                    )));
                }
            }
        }

        if !(MIN_TAGS..=MAX_TAGS).contains(&self.tags.len()) {
            return Err(CoreError::Validation(format!(
                "layer set {} has {} tags",
                self.id,
                self.tags.len()
            )));
        }

        let unique: HashSet<&str> = self.tags.iter().map(String::as_str).collect();
        if unique.len() != self.tags.len() {
            return Err(CoreError::Validation(format!(
                "layer set {} has duplicate tags",
                self.id
            )));
        }

        Ok(())
    }
}

/// Whether `s` matches `#[0-9A-F]{6}`.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Head".parse::<Category>().unwrap(), Category::Head);
        assert_eq!("LEGS".parse::<Category>().unwrap(), Category::Legs);
        assert!("feet".parse::<Category>().is_err());
    }

    #[test]
    fn category_order_matches_slot_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["head", "chest", "arms", "waist", "legs"]);
    }

    #[test]
    fn armer_uses_wire_field_names() {
        let armer = Armer {
            id: "alloy-helm".to_string(),
            category: Category::Head,
            gender: Gender::Female,
            primary_color: "#00FF00".to_string(),
            secondary_color: "#ABCDEF".to_string(),
        };

        let json = serde_json::to_value(&armer).unwrap();
        assert_eq!(json["type"], "head");
        assert_eq!(json["gender"], "w");
        assert_eq!(json["color0"], "#00FF00");
        assert_eq!(json["color1"], "#ABCDEF");
    }

    #[test]
    fn hex_color_rejects_lowercase_and_short_values() {
        assert!(is_hex_color("#0A1B2C"));
        assert!(!is_hex_color("#0a1b2c"));
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("0A1B2C0"));
    }
}
