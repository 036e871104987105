use crate::model::{Category, StorageError};
use crate::utils::{date_dir_name, ids_file_name};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// Date-stamped output layout for one run:
/// `<store>/<YYYY-MM-DD>/html/<file>` and `<store>/<YYYY-MM-DD>/project_ids_<name>.txt`.
#[derive(Debug, Clone)]
pub struct RunContext {
    date: String,
    store_dir: PathBuf,
    today_dir: PathBuf,
    html_dir: PathBuf,
}

impl RunContext {
    pub fn new(store_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        let store_dir = store_dir.into();
        let date = date_dir_name(date);
        let today_dir = store_dir.join(&date);
        let html_dir = today_dir.join("html");

        Self {
            date,
            store_dir,
            today_dir,
            html_dir,
        }
    }

    pub fn for_today(store_dir: impl Into<PathBuf>) -> Self {
        Self::new(store_dir, Local::now().date_naive())
    }

    /// Creates the store, date and html directories if absent.
    pub fn ensure_dirs(&self) -> Result<(), StorageError> {
        for dir in [&self.store_dir, &self.today_dir, &self.html_dir] {
            fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
        }
        Ok(())
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn today_dir(&self) -> &Path {
        &self.today_dir
    }

    pub fn html_dir(&self) -> &Path {
        &self.html_dir
    }

    pub fn html_path(&self, category: &Category) -> PathBuf {
        self.html_dir.join(&category.filename)
    }

    pub fn ids_path(&self, category: &Category) -> PathBuf {
        self.today_dir.join(ids_file_name(&category.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(root: &Path) -> RunContext {
        RunContext::new(root.join("store"), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn paths_follow_date_layout() {
        let root = TempDir::new().unwrap();
        let ctx = context(root.path());
        let category = Category::new("https://example.com/project/skill/3/", "java.html");

        assert_eq!(ctx.date(), "2024-05-01");
        assert_eq!(
            ctx.html_path(&category),
            root.path().join("store/2024-05-01/html/java.html")
        );
        assert_eq!(
            ctx.ids_path(&category),
            root.path().join("store/2024-05-01/project_ids_java.txt")
        );
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let root = TempDir::new().unwrap();
        let ctx = context(root.path());

        ctx.ensure_dirs().unwrap();
        ctx.ensure_dirs().unwrap();
        assert!(ctx.html_dir().is_dir());
        assert!(ctx.today_dir().is_dir());
    }

    #[test]
    fn ensure_dirs_fails_when_store_is_a_file() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("store"), "not a dir").unwrap();
        assert!(context(root.path()).ensure_dirs().is_err());
    }
}
