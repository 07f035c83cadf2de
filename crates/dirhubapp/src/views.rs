//! # View Loaders
//!
//! One loader per page of the client. Each loader issues the service calls its
//! page needs, concurrently where they are independent, and joins them with
//! `tokio::try_join!`. The join is fail-fast: if any call fails the whole load
//! fails with that error and no partial data is returned. Callers usually feed
//! a loader into [`Query::run`](crate::query::Query::run).
//!
//! | Loader | Calls |
//! |--------|-------|
//! | [`load_dashboard`] | all directories ‖ dashboard stats |
//! | [`load_browse`] | public directories |
//! | [`load_directory_page`] | directory by slug, then stats ‖ items ‖ categories |
//! | [`load_item_detail`] | item ‖ directory by slug |
//! | [`load_editor`] | directory ‖ categories |
//!
//! The mutation helpers at the bottom wrap create/update/delete and report the
//! outcome through a [`Notifier`].

use crate::api::DirectoryService;
use crate::error::Result;
use crate::filter::{self, DirectoryFilter, ItemFilter, SortKey};
use crate::model::{
    Category, CategoryId, DashboardStats, DeleteAck, Directory, DirectoryId, DirectoryPatch,
    DirectoryRecord, DirectoryStats, ItemId, ItemRecord, NewDirectory,
};
use crate::notify::{Notice, Notifier};
use crate::store::DataStore;
use serde::Serialize;
use tracing::{debug, warn};

/// Directories shown in the dashboard's recent list.
pub const DASHBOARD_RECENT: usize = 6;

/// Directories shown in the browse page's featured strip.
pub const BROWSE_FEATURED: usize = 3;

/// Topic keys offered by the browse page, with their display names.
pub const BROWSE_CATEGORIES: [(&str, &str); 5] = [
    ("business", "Business"),
    ("restaurant", "Restaurants"),
    ("services", "Services"),
    ("tech", "Technology"),
    ("health", "Health & Wellness"),
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub directories: Vec<DirectoryRecord>,
    pub stats: DashboardStats,
}

impl DashboardView {
    pub fn recent(&self) -> &[DirectoryRecord] {
        &self.directories[..self.directories.len().min(DASHBOARD_RECENT)]
    }
}

pub async fn load_dashboard<S: DataStore>(service: &DirectoryService<S>) -> Result<DashboardView> {
    let (directories, stats) = tokio::try_join!(
        service.list_directories(),
        service.get_dashboard_stats()
    )?;
    Ok(DashboardView { directories, stats })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseView {
    pub directories: Vec<DirectoryRecord>,
}

impl BrowseView {
    /// The first few public directories, in collection order.
    pub fn featured(&self) -> &[DirectoryRecord] {
        &self.directories[..self.directories.len().min(BROWSE_FEATURED)]
    }

    /// Per-topic counts over the loaded directories, led by an `all` bucket.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let mut counts = vec![CategoryCount {
            id: filter::ALL.to_string(),
            name: "All Categories".to_string(),
            count: self.directories.len(),
        }];
        counts.extend(BROWSE_CATEGORIES.iter().map(|(id, name)| CategoryCount {
            id: id.to_string(),
            name: name.to_string(),
            count: self
                .directories
                .iter()
                .filter(|d| d.directory.category.as_deref() == Some(*id))
                .count(),
        }));
        counts
    }

    pub fn visible(&self, filter: &DirectoryFilter, sort: SortKey) -> Vec<DirectoryRecord> {
        filter::browse(&self.directories, filter, sort)
    }
}

pub async fn load_browse<S: DataStore>(service: &DirectoryService<S>) -> Result<BrowseView> {
    let directories = service.list_public_directories().await?;
    Ok(BrowseView { directories })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    pub directory: DirectoryRecord,
    pub stats: DirectoryStats,
    pub items: Vec<ItemRecord>,
    pub categories: Vec<Category>,
}

impl DirectoryPage {
    pub fn featured_items(&self) -> Vec<&ItemRecord> {
        self.items.iter().filter(|i| i.item.featured).collect()
    }

    pub fn visible_items(&self, filter: &ItemFilter) -> Vec<ItemRecord> {
        filter::filter_items(&self.items, filter)
    }
}

/// The public page of one directory.
///
/// The slug lookup runs first; the rest is keyed by the resolved id.
pub async fn load_directory_page<S: DataStore>(
    service: &DirectoryService<S>,
    slug: &str,
) -> Result<DirectoryPage> {
    let directory = service.get_directory_by_slug(slug).await?;
    let id = directory.directory.id;
    let (stats, items, categories) = tokio::try_join!(
        service.get_directory_stats(id),
        service.list_items(id),
        service.list_categories(id)
    )?;
    debug!(slug, items = items.len(), "directory page loaded");
    Ok(DirectoryPage {
        directory,
        stats,
        items,
        categories,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub item: ItemRecord,
    pub directory: DirectoryRecord,
}

pub async fn load_item_detail<S: DataStore>(
    service: &DirectoryService<S>,
    slug: &str,
    item_id: ItemId,
) -> Result<ItemDetail> {
    let (item, directory) = tokio::try_join!(
        service.get_item(item_id),
        service.get_directory_by_slug(slug)
    )?;
    if item.item.directory_id != directory.directory.id {
        warn!(
            item_id,
            slug, "item belongs to a different directory than the one requested"
        );
    }
    Ok(ItemDetail { item, directory })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub directory: DirectoryRecord,
    pub categories: Vec<Category>,
}

/// Placeholder name for a category added in the editor.
pub const NEW_CATEGORY_NAME: &str = "New Category";
pub const CATEGORY_DELETED: &str = "Category deleted successfully!";

impl EditorView {
    /// Append a placeholder category to the editor's working list.
    ///
    /// The list is local to the editor; nothing reaches the store.
    pub fn add_category(&mut self) -> &Category {
        let id = self.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let order = u32::try_from(self.categories.len()).unwrap_or(u32::MAX);
        self.categories.push(Category {
            id,
            name: NEW_CATEGORY_NAME.to_string(),
            slug: "new-category".to_string(),
            directory_id: self.directory.directory.id,
            order,
        });
        &self.categories[self.categories.len() - 1]
    }

    /// Drop a category from the working list, reporting the removal.
    pub fn remove_category<N: Notifier + ?Sized>(
        &mut self,
        notifier: &N,
        id: CategoryId,
    ) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id);
        match index {
            Some(index) => {
                let removed = self.categories.remove(index);
                notifier.notify(Notice::success(CATEGORY_DELETED));
                Some(removed)
            }
            None => {
                debug!(category = id, "no such category in editor");
                None
            }
        }
    }
}

pub async fn load_editor<S: DataStore>(
    service: &DirectoryService<S>,
    id: DirectoryId,
) -> Result<EditorView> {
    let (directory, categories) =
        tokio::try_join!(service.get_directory(id), service.list_categories(id))?;
    Ok(EditorView {
        directory,
        categories,
    })
}

pub const CREATED: &str = "Directory created successfully!";
pub const CREATE_FAILED: &str = "Failed to create directory. Please try again.";
pub const UPDATED: &str = "Directory updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update directory.";
pub const DELETED: &str = "Directory deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete directory.";

fn report<T, N: Notifier + ?Sized>(
    notifier: &N,
    outcome: Result<T>,
    success: &str,
    failure: &str,
) -> Result<T> {
    match &outcome {
        Ok(_) => notifier.notify(Notice::success(success)),
        Err(err) => {
            debug!(error = %err, "mutation failed");
            notifier.notify(Notice::error(failure));
        }
    }
    outcome
}

pub async fn create_directory<S: DataStore, N: Notifier + ?Sized>(
    service: &DirectoryService<S>,
    notifier: &N,
    fields: NewDirectory,
) -> Result<Directory> {
    let outcome = service.create_directory(fields).await;
    report(notifier, outcome, CREATED, CREATE_FAILED)
}

pub async fn update_directory<S: DataStore, N: Notifier + ?Sized>(
    service: &DirectoryService<S>,
    notifier: &N,
    id: DirectoryId,
    patch: &DirectoryPatch,
) -> Result<Directory> {
    let outcome = service.update_directory(id, patch).await;
    report(notifier, outcome, UPDATED, UPDATE_FAILED)
}

pub async fn delete_directory<S: DataStore, N: Notifier + ?Sized>(
    service: &DirectoryService<S>,
    notifier: &N,
    id: DirectoryId,
) -> Result<DeleteAck> {
    let outcome = service.delete_directory(id).await;
    report(notifier, outcome, DELETED, DELETE_FAILED)
}
