use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::ViewMode;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StudentConnectConfig {
    pub startup_view: Option<String>,
    pub storage_path: Option<String>,
    pub seed_profiles: Option<bool>,
}

impl StudentConnectConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("student-connect").join("config.toml"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Could not read config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn startup_view(&self) -> ViewMode {
        match self.startup_view.as_deref() {
            Some("table") => ViewMode::Table,
            _ => ViewMode::Cards,
        }
    }

    /// User-supplied store location with `~` and environment variables expanded.
    pub fn storage_path(&self) -> Option<PathBuf> {
        let raw = self.storage_path.as_deref()?;
        let expanded = match shellexpand::full(raw) {
            Ok(expanded) => expanded.into_owned(),
            Err(e) => {
                log::warn!("Could not expand storage path {raw}: {e}");
                raw.to_string()
            }
        };
        Some(PathBuf::from(expanded))
    }

    pub fn seed_profiles(&self) -> bool {
        self.seed_profiles.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = StudentConnectConfig::load_from(&dir.path().join("config.toml"));

        assert_eq!(config, StudentConnectConfig::default());
        assert_eq!(config.startup_view(), ViewMode::Cards);
        assert!(config.seed_profiles());
        assert_eq!(config.storage_path(), None);
    }

    #[test]
    fn reads_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "startup_view = \"table\"\nstorage_path = \"/tmp/students.json\"\nseed_profiles = false\n",
        )
        .unwrap();

        let config = StudentConnectConfig::load_from(&path);
        assert_eq!(config.startup_view(), ViewMode::Table);
        assert!(!config.seed_profiles());
        assert_eq!(
            config.storage_path(),
            Some(PathBuf::from("/tmp/students.json"))
        );
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "startup_view = [").unwrap();

        assert_eq!(
            StudentConnectConfig::load_from(&path),
            StudentConnectConfig::default()
        );
    }

    #[test]
    fn unreadable_path_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();

        // a directory can't be read as a file
        assert_eq!(
            StudentConnectConfig::load_from(dir.path()),
            StudentConnectConfig::default()
        );
    }

    #[test]
    fn unknown_view_falls_back_to_cards() {
        let config = StudentConnectConfig {
            startup_view: Some("grid".into()),
            ..Default::default()
        };
        assert_eq!(config.startup_view(), ViewMode::Cards);
    }
}
