//! # Domain Model
//!
//! The three fixture collections and the derived shapes the service hands out.
//!
//! ## Stored Records
//!
//! - [`Directory`]: a named, sluggable collection with a lifecycle [`DirectoryStatus`].
//! - [`Category`]: a named grouping scoped to one directory, ranked by `order`.
//! - [`Item`]: a single listing. Its `category_id` is a weak reference: it may be
//!   missing or point at nothing, which is not an error.
//!
//! ## Derived Records
//!
//! Reads never hand out stored records directly. They return owned, annotated copies:
//!
//! - [`DirectoryRecord`]: a directory plus `itemCount`, recomputed on every read.
//! - [`ItemRecord`]: an item plus `categoryName`, falling back to [`UNCATEGORIZED`].
//! - [`DirectoryStats`] / [`DashboardStats`]: aggregates, also recomputed per read.
//!
//! ## Wire Shape
//!
//! Field names follow the fixture JSON: `Id`, `directoryId`, `createdAt`,
//! `customFields` and so on. Derived records flatten the stored record and add
//! their extra field, so a `DirectoryRecord` serializes as the directory object
//! with an `itemCount` key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub type DirectoryId = u64;
pub type CategoryId = u64;
pub type ItemId = u64;

/// Label used when an item's category does not resolve.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryStatus {
    Active,
    Draft,
    Inactive,
}

impl DirectoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryStatus::Active => "active",
            DirectoryStatus::Draft => "draft",
            DirectoryStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for DirectoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DirectoryStatus::Active),
            "draft" => Ok(DirectoryStatus::Draft),
            "inactive" => Ok(DirectoryStatus::Inactive),
            other => Err(format!(
                "unknown status '{}' (expected active, draft or inactive)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    #[serde(rename = "Id")]
    pub id: DirectoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub status: DirectoryStatus,
    #[serde(default)]
    pub views: u64,
    pub created_at: NaiveDate,
    /// Topic key used by the browse page (e.g. "business", "restaurant").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub directory_id: DirectoryId,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "Id")]
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub directory_id: DirectoryId,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

/// A directory as returned by reads: the stored record plus its live item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    #[serde(flatten)]
    pub directory: Directory,
    pub item_count: usize,
}

/// An item as returned by reads: the stored record plus its resolved category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(flatten)]
    pub item: Item,
    pub category_name: String,
}

/// Caller-supplied fields for a new directory. Everything else is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDirectory {
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update for a directory. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub status: Option<DirectoryStatus>,
    pub views: Option<u64>,
    pub category: Option<String>,
}

impl DirectoryPatch {
    pub fn is_empty(&self) -> bool {
        self == &DirectoryPatch::default()
    }

    /// Merge the present fields onto `directory`, returning the merged copy.
    pub fn apply(&self, directory: &Directory) -> Directory {
        let mut merged = directory.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            merged.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(views) = self.views {
            merged.views = views;
        }
        if let Some(category) = &self.category {
            merged.category = Some(category.clone());
        }
        merged
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_items: usize,
    pub total_views: u64,
    pub featured_items: usize,
    pub total_categories: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_directories: usize,
    pub total_items: usize,
    pub total_views: u64,
    pub featured_items: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}
