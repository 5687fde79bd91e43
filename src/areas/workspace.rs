use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};

/// Working directory the repository tracks files from
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a user-supplied path against the workspace root
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        }
    }

    pub fn read_file(&self, file_path: &Path) -> RepositoryResult<Bytes> {
        let absolute_path = self.resolve(file_path);

        std::fs::read(&absolute_path)
            .map(Bytes::from)
            .map_err(|source| RepositoryError::FileRead {
                path: file_path.to_path_buf(),
                source,
            })
    }

    /// Name under which a file is recorded in the index
    ///
    /// Files inside the workspace are recorded relative to its root with `/`
    /// separators; anything else is recorded as given.
    pub fn entry_name(&self, file_path: &Path) -> String {
        let absolute_path = normalize(&self.resolve(file_path));

        match absolute_path.strip_prefix(&self.path) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            _ => file_path.to_string_lossy().to_string(),
        }
    }
}

/// Lexically drop `.` and fold `..` without touching the file system
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
