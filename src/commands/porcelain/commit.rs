use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let message = message.trim().to_string();
        let (commit_id, commit) = self.write_commit(message).await?;

        let is_root = match commit.parent() {
            Some(_) => "",
            None => "(root-commit) ",
        };

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
