//! Loading the three fixture collections.
//!
//! A default set is compiled into the crate. A directory holding
//! `directories.json`, `categories.json` and `items.json` can be used instead.

use crate::error::{DirhubError, Result};
use crate::model::{Category, Directory, Item};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

pub const DIRECTORIES_FILE: &str = "directories.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const ITEMS_FILE: &str = "items.json";

const EMBEDDED_DIRECTORIES: &str = include_str!("../../fixtures/directories.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../../fixtures/categories.json");
const EMBEDDED_ITEMS: &str = include_str!("../../fixtures/items.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub directories: Vec<Directory>,
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
}

impl Fixtures {
    pub fn new(directories: Vec<Directory>, categories: Vec<Category>, items: Vec<Item>) -> Self {
        Self {
            directories,
            categories,
            items,
        }
    }

    /// The fixture set compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DIRECTORIES, EMBEDDED_CATEGORIES, EMBEDDED_ITEMS)
    }

    /// Parse the three collections from JSON text.
    pub fn from_json(directories: &str, categories: &str, items: &str) -> Result<Self> {
        Ok(Self::new(
            parse_collection(DIRECTORIES_FILE, directories)?,
            parse_collection(CATEGORIES_FILE, categories)?,
            parse_collection(ITEMS_FILE, items)?,
        ))
    }

    /// Read the three fixture files from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| {
                DirhubError::Fixture(format!("cannot read {}: {}", path.display(), e))
            })
        };
        Self::from_json(
            &read(DIRECTORIES_FILE)?,
            &read(CATEGORIES_FILE)?,
            &read(ITEMS_FILE)?,
        )
    }

    /// Load from `dir` when given, otherwise the embedded set.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let fixtures = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::embedded()?,
        };
        let source = dir
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "embedded".to_string());
        info!(
            directories = fixtures.directories.len(),
            categories = fixtures.categories.len(),
            items = fixtures.items.len(),
            %source,
            "fixtures loaded"
        );
        for slug in fixtures.duplicate_slugs() {
            warn!(%slug, "duplicate directory slug; lookups return the first match");
        }
        Ok(fixtures)
    }

    /// Slugs shared by more than one directory, in first-seen order.
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for dir in &self.directories {
            if !seen.insert(dir.slug.as_str()) && !dupes.contains(&dir.slug) {
                dupes.push(dir.slug.clone());
            }
        }
        dupes
    }
}

fn parse_collection<T: DeserializeOwned>(name: &str, text: &str) -> Result<Vec<T>> {
    serde_json::from_str(text).map_err(|e| DirhubError::Fixture(format!("{}: {}", name, e)))
}
