use super::annotate;
use crate::error::{DirhubError, Result};
use crate::model::{
    DeleteAck, Directory, DirectoryId, DirectoryPatch, DirectoryRecord, DirectoryStatus,
    NewDirectory,
};
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::debug;

pub fn list<S: DataStore>(store: &S) -> Result<Vec<DirectoryRecord>> {
    let items = store.items()?;
    let records: Vec<DirectoryRecord> = store
        .directories()?
        .into_iter()
        .map(|dir| annotate(dir, &items))
        .collect();
    debug!(count = records.len(), "listed directories");
    Ok(records)
}

pub fn get<S: DataStore>(store: &S, id: DirectoryId) -> Result<DirectoryRecord> {
    let directory = find(store, id)?;
    Ok(annotate(directory, &store.items()?))
}

/// First directory whose slug is `slug`.
pub fn get_by_slug<S: DataStore>(store: &S, slug: &str) -> Result<DirectoryRecord> {
    let directory = store
        .directories()?
        .into_iter()
        .find(|d| d.slug == slug)
        .ok_or_else(|| DirhubError::SlugNotFound(slug.to_string()))?;
    Ok(annotate(directory, &store.items()?))
}

/// Active directories, in collection order.
pub fn list_public<S: DataStore>(store: &S) -> Result<Vec<DirectoryRecord>> {
    let items = store.items()?;
    let records: Vec<DirectoryRecord> = store
        .directories()?
        .into_iter()
        .filter(|d| d.status == DirectoryStatus::Active)
        .map(|dir| annotate(dir, &items))
        .collect();
    debug!(count = records.len(), "listed public directories");
    Ok(records)
}

/// Build a new draft directory and hand it to the store.
///
/// The id is one past the largest existing id (1 for an empty collection).
/// Whether the record is kept depends on the store's write mode.
pub fn create<S: DataStore>(store: &S, fields: NewDirectory, today: NaiveDate) -> Result<Directory> {
    let next_id = store
        .directories()?
        .iter()
        .map(|d| d.id)
        .max()
        .map_or(1, |max| max + 1);

    let directory = Directory {
        id: next_id,
        name: fields.name,
        slug: fields.slug,
        description: fields.description,
        status: DirectoryStatus::Draft,
        views: 0,
        created_at: today,
        category: fields.category,
    };
    store.insert_directory(&directory)?;
    debug!(id = directory.id, slug = %directory.slug, mode = %store.write_mode(), "created directory");
    Ok(directory)
}

/// Merge `patch` onto directory `id` and hand the result to the store.
pub fn update<S: DataStore>(store: &S, id: DirectoryId, patch: &DirectoryPatch) -> Result<Directory> {
    let merged = patch.apply(&find(store, id)?);
    store.replace_directory(&merged)?;
    debug!(id, mode = %store.write_mode(), "updated directory");
    Ok(merged)
}

pub fn delete<S: DataStore>(store: &S, id: DirectoryId) -> Result<DeleteAck> {
    find(store, id)?;
    store.remove_directory(id)?;
    debug!(id, mode = %store.write_mode(), "deleted directory");
    Ok(DeleteAck { success: true })
}

fn find<S: DataStore>(store: &S, id: DirectoryId) -> Result<Directory> {
    store
        .directories()?
        .into_iter()
        .find(|d| d.id == id)
        .ok_or(DirhubError::DirectoryNotFound(id))
}
