//! Simulated service latency.
//!
//! Every service operation suspends for a fixed, operation-dependent delay
//! before doing its work. The delay can be switched off or scaled through
//! configuration; tests run on a paused tokio clock so it costs no wall time.

use crate::config::DirhubConfig;
use std::fmt;
use std::time::Duration;
use tracing::trace;

/// The service operations, each with its own base delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListDirectories,
    GetDirectory,
    GetDirectoryBySlug,
    CreateDirectory,
    UpdateDirectory,
    DeleteDirectory,
    ListCategories,
    ListItems,
    GetItem,
    DirectoryStats,
    DashboardStats,
    ListPublicDirectories,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::ListDirectories,
        Operation::GetDirectory,
        Operation::GetDirectoryBySlug,
        Operation::CreateDirectory,
        Operation::UpdateDirectory,
        Operation::DeleteDirectory,
        Operation::ListCategories,
        Operation::ListItems,
        Operation::GetItem,
        Operation::DirectoryStats,
        Operation::DashboardStats,
        Operation::ListPublicDirectories,
    ];

    /// Unscaled delay in milliseconds.
    pub fn base_millis(self) -> u64 {
        match self {
            Operation::ListDirectories => 300,
            Operation::GetDirectory => 200,
            Operation::GetDirectoryBySlug => 200,
            Operation::CreateDirectory => 400,
            Operation::UpdateDirectory => 300,
            Operation::DeleteDirectory => 300,
            Operation::ListCategories => 200,
            Operation::ListItems => 250,
            Operation::GetItem => 200,
            Operation::DirectoryStats => 300,
            Operation::DashboardStats => 350,
            Operation::ListPublicDirectories => 300,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::ListDirectories => "listDirectories",
            Operation::GetDirectory => "getDirectory",
            Operation::GetDirectoryBySlug => "getDirectoryBySlug",
            Operation::CreateDirectory => "createDirectory",
            Operation::UpdateDirectory => "updateDirectory",
            Operation::DeleteDirectory => "deleteDirectory",
            Operation::ListCategories => "listCategories",
            Operation::ListItems => "listItems",
            Operation::GetItem => "getItem",
            Operation::DirectoryStats => "getDirectoryStats",
            Operation::DashboardStats => "getDashboardStats",
            Operation::ListPublicDirectories => "listPublicDirectories",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    enabled: bool,
    scale: f64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 1.0,
        }
    }
}

impl Latency {
    /// `scale` is clamped to a finite, non-negative factor.
    pub fn new(enabled: bool, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale >= 0.0 {
            scale
        } else {
            1.0
        };
        Self { enabled, scale }
    }

    /// No simulated delay at all.
    pub fn none() -> Self {
        Self::new(false, 1.0)
    }

    pub fn from_config(config: &DirhubConfig) -> Self {
        Self::new(config.simulate_latency, config.latency_scale)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The delay `op` will suspend for.
    pub fn delay(&self, op: Operation) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let micros = (op.base_millis() as f64 * self.scale * 1000.0).round();
        Duration::from_micros(micros as u64)
    }

    pub async fn pause(&self, op: Operation) {
        let delay = self.delay(op);
        if delay.is_zero() {
            return;
        }
        trace!(op = %op, ?delay, "simulating latency");
        tokio::time::sleep(delay).await;
    }
}
