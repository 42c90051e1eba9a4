//! Dashboard persistence.
//!
//! The whole category list is stored as JSON in a single file and fully
//! overwritten on every save. On load, missing or unreadable data falls
//! back to the seed dashboard; a broken file never reaches the user as an
//! error.
//!
//! # Storage Location
//!
//! The default file is:
//! - Linux: `~/.local/share/lazydash/dashboard.json`
//! - macOS: `~/Library/Application Support/lazydash/dashboard.json`
//! - Windows: `%APPDATA%/lazydash/dashboard.json`
//!
//! A different path can be supplied with the `--data` CLI flag.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;

use super::seed::seed_categories;
use crate::constants::{APP_NAME, STORAGE_FILE};
use crate::domain::{Category, DashboardError};

// ============================================================================
// Storage
// ============================================================================

/// Handle to the persisted dashboard file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage handle for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a storage handle at the platform default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or
    /// created.
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Returns the default storage file path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined
    /// or created.
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::data_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine data directory. Expected XDG_DATA_HOME or ~/.local/share on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(STORAGE_FILE);
        Ok(path)
    }

    /// Returns the path of the storage file.
    #[must_use]
    #[allow(dead_code)] // Part of the storage API
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted category list, falling back to the seed
    /// dashboard if the file is missing or unreadable.
    ///
    /// `now_ms` is used for seed widget timestamps when the fallback is
    /// taken.
    #[must_use]
    pub fn load_or_seed(&self, now_ms: i64) -> Vec<Category> {
        match self.try_load() {
            Ok(categories) => categories,
            Err(DashboardError::Storage(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no dashboard file at {}, seeding", self.path.display());
                seed_categories(now_ms)
            }
            Err(err) => {
                tracing::warn!(
                    "failed to load dashboard from {}: {err}; using seed data",
                    self.path.display()
                );
                seed_categories(now_ms)
            }
        }
    }

    /// Attempts to load the persisted category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its JSON content
    /// cannot be parsed.
    pub fn try_load(&self) -> Result<Vec<Category>, DashboardError> {
        let content = fs::read_to_string(&self.path)?;
        let categories: Vec<Category> = serde_json::from_str(&content)?;
        Ok(categories)
    }

    /// Saves the full category list, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the categories cannot be serialized or the file
    /// cannot be written.
    pub fn save(&self, categories: &[Category]) -> Result<(), DashboardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(categories)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Widget, WidgetKind};
    use crate::test_utils::CategoryMother;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("dashboard.json"));
        (dir, storage)
    }

    #[test]
    fn test_save_then_load_reproduces_categories() {
        let (_dir, storage) = temp_storage();
        let categories = seed_categories(1_700_000_000_000);

        storage.save(&categories).unwrap();
        let loaded = storage.try_load().unwrap();

        assert_eq!(categories, loaded);
    }

    #[test]
    fn test_missing_file_falls_back_to_seed() {
        let (_dir, storage) = temp_storage();

        let loaded = storage.load_or_seed(42);
        assert_eq!(loaded.len(), 3);
        assert!(loaded.iter().flat_map(|c| c.widgets.iter()).all(|w| w.timestamp == 42));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_seed() {
        let (_dir, storage) = temp_storage();
        fs::write(storage.path(), "{this is not json").unwrap();

        let loaded = storage.load_or_seed(0);
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn test_wrong_shape_falls_back_to_seed() {
        let (_dir, storage) = temp_storage();
        fs::write(storage.path(), r#"{"category": "not a list"}"#).unwrap();

        let loaded = storage.load_or_seed(0);
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (_dir, storage) = temp_storage();

        storage.save(&seed_categories(0)).unwrap();
        let one = vec![CategoryMother::empty("X")];
        storage.save(&one).unwrap();

        let loaded = storage.try_load().unwrap();
        assert_eq!(loaded, one);
    }

    #[test]
    fn test_persisted_field_names() {
        let (_dir, storage) = temp_storage();
        let mut cat = CategoryMother::empty("Risk Dashboard");
        cat.widgets.push(Widget::new(
            "Total Risks",
            7,
            WidgetKind::Stat {
                value: 102.0,
                description: "Combined risk items".to_string(),
            },
        ));
        storage.save(&[cat]).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["category"], "Risk Dashboard");
        assert_eq!(json[0]["widgets"][0]["type"], "stat");
        assert_eq!(json[0]["widgets"][0]["value"], 102.0);
        assert!(json[0]["widgets"][0]["id"].is_string());
        assert_eq!(json[0]["widgets"][0]["timestamp"], 7);
    }
}
