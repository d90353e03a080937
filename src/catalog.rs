//! Static reference data for the registration form.
//!
//! The sport catalog maps each sport category to the sports offered under it.
//! It is built once at startup and only read afterwards, so a single instance
//! can be shared freely between threads.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Provinces (and the capital) a registrant can belong to.
pub const PROVINCES: [&str; 25] = [
    "Phnom Penh",
    "Banteay Meanchey",
    "Battambang",
    "Kampong Cham",
    "Kampong Chhnang",
    "Kampong Speu",
    "Kampong Thom",
    "Kampot",
    "Kandal",
    "Kep",
    "Koh Kong",
    "Kratie",
    "Mondulkiri",
    "Oddar Meanchey",
    "Pailin",
    "Preah Vihear",
    "Prey Veng",
    "Pursat",
    "Ratanakiri",
    "Siem Reap",
    "Preah Sihanouk",
    "Stung Treng",
    "Svay Rieng",
    "Takeo",
    "Tbong Khmum",
];

/// Departments offered as an alternative to a province.
pub const DEPARTMENTS: [&str; 3] = ["Department 1", "Department 2", "Department 3"];

pub const EVENT_TYPES: [&str; 3] = ["Event Type 1", "Event Type 2", "Event Type 3"];

/// Built-in categories and their sports, in display order.
const DEFAULT_CATALOG: [(&str, [&str; 4]); 5] = [
    (
        "Traditional Cambodian Sports & Games",
        ["Bokator", "Pradal Serey", "Chol Chhoung", "Teanh Prot"],
    ),
    (
        "Ball Games",
        ["Football", "Volleyball", "Basketball", "Sepak Takraw"],
    ),
    (
        "Martial Arts & Combat Sports",
        ["Karate", "Taekwondo", "Boxing", "Judo"],
    ),
    (
        "Athletics & Outdoor Sports",
        ["Running", "Cycling", "Swimming", "Archery"],
    ),
    (
        "Indoor & Recreational Sports",
        ["Table Tennis", "Badminton", "Chess", "E-sports"],
    ),
];

/// Errors raised while building a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read sport catalog from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sport catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("sport category name must not be empty")]
    EmptyCategory,

    #[error("duplicate sport category: '{0}'")]
    DuplicateCategory(String),
}

/// One category and its sports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportCategory {
    pub category: String,
    pub sports: Vec<String>,
}

/// Ordered category → sports lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SportCatalog {
    categories: Vec<SportCategory>,
}

impl SportCatalog {
    /// Build a catalog, rejecting empty or duplicate category names.
    pub fn new(categories: Vec<SportCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &categories {
            if entry.category.trim().is_empty() {
                return Err(CatalogError::EmptyCategory);
            }
            if !seen.insert(entry.category.as_str()) {
                return Err(CatalogError::DuplicateCategory(entry.category.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Parse a JSON array of `{ "category": ..., "sports": [...] }` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<SportCategory> = serde_json::from_str(json)?;
        let catalog = Self::new(categories)?;
        debug!("Parsed sport catalog with {} categories", catalog.len());
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded sport catalog with {} categories from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Sports listed under a category, or `None` for an unknown category.
    pub fn sports(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.sports.as_slice())
    }

    /// Whether `sport` is offered under `category`.
    pub fn contains(&self, category: &str, sport: &str) -> bool {
        self.sports(category)
            .map(|sports| sports.iter().any(|s| s == sport))
            .unwrap_or(false)
    }

    /// First sport of a category; the form preselects it when a category is picked.
    pub fn first_sport(&self, category: &str) -> Option<&str> {
        self.sports(category)
            .and_then(|sports| sports.first())
            .map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|entry| entry.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for SportCatalog {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATALOG
                .iter()
                .map(|(category, sports)| SportCategory {
                    category: category.to_string(),
                    sports: sports.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }
}
