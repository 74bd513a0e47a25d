use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use crate::{service::error::StorageError, utils::naming::unique_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Avatar,
    File,
}

impl ArtifactKind {
    /// Subdirectory under the storage root, and the public URL prefix.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ArtifactKind::Avatar => "avatars",
            ArtifactKind::File => "file",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Avatar => "avatar",
            ArtifactKind::File => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub path: PathBuf,
}

impl StoredArtifact {
    /// URL path the static server resolves back to `path`. The file name
    /// carries a client-chosen extension, so it is percent-encoded.
    pub fn public_path(&self) -> String {
        format!(
            "/{}/{}",
            self.kind.dir_name(),
            urlencoding::encode(&self.file_name)
        )
    }
}

/// Append-only artifact tree rooted at a configured directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ArtifactStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir_for(&self, kind: ArtifactKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    pub async fn save(
        &self,
        kind: ArtifactKind,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StoredArtifact, StorageError> {
        let dir = self.dir_for(kind);
        ensure_dir(&dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                kind,
                dir: dir.clone(),
                source,
            })?;

        let file_name = format!("{}{}", unique_name(), extension);
        let path = dir.join(&file_name);
        tracing::debug!("Saving to: {}", path.display());

        write_new(&path, bytes)
            .await
            .map_err(|source| StorageError::Write {
                kind,
                path: path.clone(),
                source,
            })?;

        Ok(StoredArtifact {
            kind,
            file_name,
            path,
        })
    }
}

async fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir).await
}

async fn write_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(path).await?;
    file.write_all(bytes).await?;
    file.flush().await
}
