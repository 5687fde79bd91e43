use crate::areas::repository::Repository;
use crate::errors::{RepositoryError, RepositoryResult};
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        match self.create_layout().await {
            Ok(()) => {
                writeln!(
                    self.writer(),
                    "Initialized empty crookie repository in {}",
                    self.metadata_path().display()
                )?;
            }
            Err(e) if e.is_benign() => {
                // existing state is left untouched
                tracing::info!("{e}");
                writeln!(self.writer(), "{e}")?;
            }
            Err(e) => return Err(e).context("Failed to initialize repository"),
        }

        Ok(())
    }

    async fn create_layout(&self) -> RepositoryResult<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized {
                path: self.metadata_path().into(),
            });
        }

        fs::create_dir_all(self.metadata_path().join("objects"))?;
        self.refs().create_head()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.clear();
        index.write_updates()
    }
}
