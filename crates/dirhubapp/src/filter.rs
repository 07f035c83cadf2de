//! # View-State Filters
//!
//! Pure functions that narrow and order an already-loaded collection. They
//! never touch the service, never mutate their input and always return a new
//! `Vec`, so a view can recompute its visible subset on every selection change.
//!
//! ## Predicates
//!
//! A record is visible when **all** of these hold:
//!
//! - **Free text**: the query is empty, or it is a case-insensitive substring
//!   of the record's label (directory name, item title) or its description.
//! - **Category**: the selection is [`Selection::All`], or it equals the
//!   record's category exactly.
//! - **Status** (directories only): same rule as category.
//!
//! The `"all"` sentinel used by selection widgets maps to [`Selection::All`]
//! through [`Selection::from_param`].
//!
//! ## Sorting
//!
//! [`SortKey`] orders by creation date, views or label. Sorting is stable: ties
//! keep their original collection order. Records without a creation date
//! (items) compare equal under the date keys.

use crate::model::{CategoryId, DirectoryRecord, DirectoryStatus, ItemRecord};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The value a selection widget reports when nothing specific is chosen.
pub const ALL: &str = "all";

/// An equality filter that is either unset or pinned to one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// Like [`Selection::accepts`], for fields that may be missing. A missing
    /// value only passes an unset selection.
    pub fn accepts_opt(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(wanted), Some(value)) => wanted == value,
            (Selection::Only(_), None) => false,
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parse a widget value; empty or `"all"` means no selection.
    pub fn from_param(raw: Option<&str>) -> Result<Self, T::Err> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Selection::All),
            Some(v) if v.eq_ignore_ascii_case(ALL) => Ok(Selection::All),
            Some(v) => v.parse().map(Selection::Only),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Alphabetical,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "popular" => Ok(SortKey::Popular),
            "alphabetical" | "a-z" => Ok(SortKey::Alphabetical),
            other => Err(format!(
                "unknown sort '{}' (expected newest, oldest, popular or alphabetical)",
                other
            )),
        }
    }
}

/// Common view of the records the filters work on.
pub trait Listing {
    fn label(&self) -> &str;
    fn description(&self) -> &str;
    fn created_on(&self) -> Option<NaiveDate>;
    fn view_count(&self) -> u64;
}

impl Listing for DirectoryRecord {
    fn label(&self) -> &str {
        &self.directory.name
    }

    fn description(&self) -> &str {
        &self.directory.description
    }

    fn created_on(&self) -> Option<NaiveDate> {
        Some(self.directory.created_at)
    }

    fn view_count(&self) -> u64 {
        self.directory.views
    }
}

impl Listing for ItemRecord {
    fn label(&self) -> &str {
        &self.item.title
    }

    fn description(&self) -> &str {
        &self.item.description
    }

    fn created_on(&self) -> Option<NaiveDate> {
        None
    }

    fn view_count(&self) -> u64 {
        self.item.views
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub query: String,
    /// Topic key, e.g. "restaurant".
    pub category: Selection<String>,
    pub status: Selection<DirectoryStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub query: String,
    pub category: Selection<CategoryId>,
}

/// Whitespace in `query` is significant; only the empty string matches everything.
pub fn matches_query<L: Listing + ?Sized>(record: &L, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.label().to_lowercase().contains(&needle)
        || record.description().to_lowercase().contains(&needle)
}

impl DirectoryFilter {
    pub fn matches(&self, record: &DirectoryRecord) -> bool {
        matches_query(record, &self.query)
            && self
                .category
                .accepts_opt(record.directory.category.as_ref())
            && self.status.accepts(&record.directory.status)
    }
}

impl ItemFilter {
    pub fn matches(&self, record: &ItemRecord) -> bool {
        matches_query(record, &self.query)
            && self.category.accepts_opt(record.item.category_id.as_ref())
    }
}

pub fn filter_directories(
    records: &[DirectoryRecord],
    filter: &DirectoryFilter,
) -> Vec<DirectoryRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

pub fn filter_items(records: &[ItemRecord], filter: &ItemFilter) -> Vec<ItemRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Label order: case-insensitive first, raw text as the tiebreak.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn compare<L: Listing>(key: SortKey, a: &L, b: &L) -> Ordering {
    match key {
        SortKey::Newest => b.created_on().cmp(&a.created_on()),
        SortKey::Oldest => a.created_on().cmp(&b.created_on()),
        SortKey::Popular => b.view_count().cmp(&a.view_count()),
        SortKey::Alphabetical => compare_labels(a.label(), b.label()),
    }
}

/// A sorted copy of `records`. Stable: ties keep input order.
pub fn sort_listings<L: Listing + Clone>(records: &[L], key: SortKey) -> Vec<L> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(key, a, b));
    sorted
}

/// Filter then sort, as the browse page does.
pub fn browse(
    records: &[DirectoryRecord],
    filter: &DirectoryFilter,
    sort: SortKey,
) -> Vec<DirectoryRecord> {
    sort_listings(&filter_directories(records, filter), sort)
}
