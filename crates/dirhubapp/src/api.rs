//! # API Facade
//!
//! The API layer is a **thin async facade** over the command layer. It is the
//! Aggregation Service: the single entry point for every directory, category,
//! item and statistics query, regardless of which client is asking.
//!
//! ## Role and Responsibilities
//!
//! For each operation the facade:
//! - **Suspends** for the operation's simulated latency (see [`crate::latency`])
//! - **Dispatches** to the matching command function
//! - **Returns owned data**: nothing handed out aliases the store
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Display filtering**: see [`crate::filter`]
//! - **I/O or presentation**: returns data structures, not strings
//!
//! ## Concurrency
//!
//! Operations are `async` and only ever suspend on the runtime timer. Several
//! calls may be in flight at once on one thread (see [`crate::views`], which
//! joins them with `tokio::try_join!`). The service is not `Sync`; it is meant
//! for a current-thread runtime.
//!
//! ## Generic Over DataStore
//!
//! `DirectoryService<S: DataStore>` is generic over the storage backend:
//! - Default: `DirectoryService<FixtureStore>`, writes discarded
//! - In-memory writes: `DirectoryService<MemoryStore>`
//! - From configuration: `DirectoryService<Box<dyn DataStore>>`

use crate::commands;
use crate::config::DirhubConfig;
use crate::error::Result;
use crate::latency::{Latency, Operation};
use crate::model::{
    Category, DashboardStats, DeleteAck, Directory, DirectoryId, DirectoryPatch,
    DirectoryRecord, DirectoryStats, ItemId, ItemRecord, NewDirectory,
};
use crate::store::{open_store, DataStore, FixtureStore, Fixtures, WriteMode};
use chrono::Utc;

/// The Aggregation Service.
pub struct DirectoryService<S: DataStore> {
    store: S,
    latency: Latency,
}

impl DirectoryService<FixtureStore> {
    /// Embedded fixtures, writes discarded, default latency.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(FixtureStore::embedded()?, Latency::default()))
    }
}

impl DirectoryService<Box<dyn DataStore>> {
    /// Build a service from loaded configuration.
    pub fn from_config(config: &DirhubConfig) -> Result<Self> {
        config.validate()?;
        let fixtures = Fixtures::load(config.fixtures_dir.as_deref())?;
        Ok(Self::new(
            open_store(fixtures, config.write_mode),
            Latency::from_config(config),
        ))
    }
}

impl<S: DataStore> DirectoryService<S> {
    pub fn new(store: S, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn write_mode(&self) -> WriteMode {
        self.store.write_mode()
    }

    pub async fn list_directories(&self) -> Result<Vec<DirectoryRecord>> {
        self.latency.pause(Operation::ListDirectories).await;
        commands::directories::list(&self.store)
    }

    pub async fn get_directory(&self, id: DirectoryId) -> Result<DirectoryRecord> {
        self.latency.pause(Operation::GetDirectory).await;
        commands::directories::get(&self.store, id)
    }

    pub async fn get_directory_by_slug(&self, slug: &str) -> Result<DirectoryRecord> {
        self.latency.pause(Operation::GetDirectoryBySlug).await;
        commands::directories::get_by_slug(&self.store, slug)
    }

    pub async fn create_directory(&self, fields: NewDirectory) -> Result<Directory> {
        self.latency.pause(Operation::CreateDirectory).await;
        commands::directories::create(&self.store, fields, Utc::now().date_naive())
    }

    pub async fn update_directory(
        &self,
        id: DirectoryId,
        patch: &DirectoryPatch,
    ) -> Result<Directory> {
        self.latency.pause(Operation::UpdateDirectory).await;
        commands::directories::update(&self.store, id, patch)
    }

    pub async fn delete_directory(&self, id: DirectoryId) -> Result<DeleteAck> {
        self.latency.pause(Operation::DeleteDirectory).await;
        commands::directories::delete(&self.store, id)
    }

    pub async fn list_categories(&self, directory_id: DirectoryId) -> Result<Vec<Category>> {
        self.latency.pause(Operation::ListCategories).await;
        commands::categories::list(&self.store, directory_id)
    }

    pub async fn list_items(&self, directory_id: DirectoryId) -> Result<Vec<ItemRecord>> {
        self.latency.pause(Operation::ListItems).await;
        commands::items::list(&self.store, directory_id)
    }

    pub async fn get_item(&self, id: ItemId) -> Result<ItemRecord> {
        self.latency.pause(Operation::GetItem).await;
        commands::items::get(&self.store, id)
    }

    pub async fn get_directory_stats(&self, directory_id: DirectoryId) -> Result<DirectoryStats> {
        self.latency.pause(Operation::DirectoryStats).await;
        commands::stats::directory(&self.store, directory_id)
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.latency.pause(Operation::DashboardStats).await;
        commands::stats::dashboard(&self.store)
    }

    pub async fn list_public_directories(&self) -> Result<Vec<DirectoryRecord>> {
        self.latency.pause(Operation::ListPublicDirectories).await;
        commands::directories::list_public(&self.store)
    }
}
