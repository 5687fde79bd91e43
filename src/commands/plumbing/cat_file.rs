use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn cat_file(&mut self, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = Self::parse_object_id(object_id)?;
        let object_data = self.database().get(&object_id)?;

        self.writer().write_all(&object_data)?;

        Ok(())
    }
}
