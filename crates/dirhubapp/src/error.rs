use crate::model::{DirectoryId, ItemId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirhubError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(DirectoryId),

    #[error("Directory not found: no directory with slug '{0}'")]
    SlugNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DirhubError {
    /// True for the lookup failures the service raises when a key does not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DirhubError::DirectoryNotFound(_)
                | DirhubError::SlugNotFound(_)
                | DirhubError::ItemNotFound(_)
        )
    }
}

impl From<confique::Error> for DirhubError {
    fn from(err: confique::Error) -> Self {
        DirhubError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DirhubError>;
