//! Per-category lists of valid equipment ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Mapping from [`Category`] to the equipment ids synthesis may reference.
///
/// Every category is always present as a key; a category the source knew
/// nothing about maps to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentCatalog {
    ids: BTreeMap<Category, Vec<String>>,
}

impl EquipmentCatalog {
    /// A catalog with every category present and empty.
    pub fn empty() -> Self {
        Self {
            ids: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// The built-in catalog used whenever the armor database is unavailable.
    pub fn fallback() -> Self {
        let mut catalog = Self::empty();
        for (category, ids) in FALLBACK_IDS {
            for id in ids {
                catalog.push(category, id.to_string());
            }
        }
        catalog
    }

    pub fn push(&mut self, category: Category, id: String) {
        self.ids.entry(category).or_default().push(id);
    }

    /// Ids for `category`, in insertion order.
    pub fn ids(&self, category: Category) -> &[String] {
        self.ids.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.ids(category).iter().any(|known| known == id)
    }

    /// Categories with no ids at all, in slot order.
    pub fn empty_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.ids(*c).is_empty())
            .collect()
    }
}

impl Default for EquipmentCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

const FALLBACK_IDS: [(Category, [&str; 5]); 5] = [
    (
        Category::Head,
        [
            "blood-malice-helm",
            "demon-conqueror-helm",
            "kamura-head-scarf",
            "leather-headgear",
            "alloy-helm",
        ],
    ),
    (
        Category::Chest,
        [
            "blood-malice-mail",
            "demon-conqueror-mail",
            "kamura-garb",
            "leather-vest",
            "alloy-mail",
        ],
    ),
    (
        Category::Arms,
        [
            "blood-malice-braces",
            "demon-conqueror-braces",
            "kamura-braces",
            "leather-gloves",
            "alloy-vambraces",
        ],
    ),
    (
        Category::Waist,
        [
            "blood-malice-tassets",
            "demon-conqueror-tassets",
            "kamura-tasset",
            "leather-belt",
            "alloy-coil",
        ],
    ),
    (
        Category::Legs,
        [
            "blood-malice-greaves",
            "demon-conqueror-greaves",
            "kamura-leggings",
            "leather-pants",
            "alloy-greaves",
        ],
    ),
];
