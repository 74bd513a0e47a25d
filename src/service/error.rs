use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

use crate::{error::HttpError, service::storage::ArtifactKind};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create {} directory {}: {source}", .kind.dir_name(), .dir.display())]
    CreateDir {
        kind: ArtifactKind,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Message returned to the client. Keeps filesystem paths out of the body.
    pub fn client_message(&self) -> String {
        match self {
            StorageError::CreateDir { kind, .. } => {
                format!("Failed to create {} directory", kind.dir_name())
            }
            StorageError::Write { kind, source, .. } => {
                format!("Failed to save {}: {}", kind.label(), source)
            }
        }
    }
}

impl From<StorageError> for HttpError {
    fn from(error: StorageError) -> Self {
        tracing::debug!("{}", error);
        HttpError::new(error.client_message(), error.status_code())
    }
}
