use crate::areas::database::{Database, ObjectStore};
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::{RepositoryError, RepositoryResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the metadata directory at the repository root
pub const REPOSITORY_DIR: &str = ".crookie";

/// Handle on one repository's persisted state
///
/// Every operation goes through this handle: the object store, the staging
/// index, HEAD and the output writer are all injected here rather than
/// reached as globals.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Box<dyn ObjectStore>,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`, which must be an existing directory
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> RepositoryResult<Self> {
        let path = Self::canonical_root(path)?;
        let database = Database::new(path.join(REPOSITORY_DIR).join("objects").into_boxed_path());

        Ok(Self::assemble(path.into_boxed_path(), writer, Box::new(database)))
    }

    /// Like [`Repository::new`], creating the root directory first if needed
    pub fn create(path: &str, writer: Box<dyn std::io::Write>) -> RepositoryResult<Self> {
        std::fs::create_dir_all(path)?;

        Self::new(path, writer)
    }

    /// Build a repository whose objects live in the given store
    pub fn with_database(
        path: &str,
        writer: Box<dyn std::io::Write>,
        database: Box<dyn ObjectStore>,
    ) -> RepositoryResult<Self> {
        let path = Self::canonical_root(path)?;

        Ok(Self::assemble(path.into_boxed_path(), writer, database))
    }

    fn canonical_root(path: &str) -> RepositoryResult<std::path::PathBuf> {
        let path = Path::new(path);
        if !path.is_dir() {
            return Err(RepositoryError::NotARepository {
                path: path.join(REPOSITORY_DIR),
            });
        }

        Ok(path.canonicalize()?)
    }

    fn assemble(
        path: Box<Path>,
        writer: Box<dyn std::io::Write>,
        database: Box<dyn ObjectStore>,
    ) -> Self {
        let metadata_path = path.join(REPOSITORY_DIR);
        let index = Index::new(metadata_path.join("index").into_boxed_path());
        let refs = Refs::new(metadata_path.into_boxed_path());
        let workspace = Workspace::new(path.clone());

        Repository {
            path,
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        }
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> RepositoryResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotARepository {
                path: self.metadata_path().into(),
            })
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &dyn ObjectStore {
        self.database.as_ref()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
