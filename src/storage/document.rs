//! JSON documents on disk
//!
//! Only small configuration documents such as `config.json` go through here.
//! Cabinet records stay in the session's [`RecordStore`](super::RecordStore).

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CabinetError, CabinetResult};

/// Load a document, or `None` when the file is absent
pub fn load_document<T: DeserializeOwned>(path: &Path) -> CabinetResult<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(CabinetError::Io(format!("{}: {}", path.display(), e))),
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| CabinetError::Json(format!("{}: {}", path.display(), e)))
}

/// Replace a document in one step
///
/// The new content goes to `<name>.partial` beside the target and is renamed
/// over it once synced, so readers see either the old or the new document.
pub fn save_document<T: Serialize>(path: &Path, document: &T) -> CabinetResult<()> {
    let mut content = serde_json::to_vec_pretty(document)
        .map_err(|e| CabinetError::Json(format!("{}: {}", path.display(), e)))?;
    content.push(b'\n');

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| CabinetError::Io(format!("{}: {}", dir.display(), e)))?;
    }

    let staging = staging_path(path);
    let staged = File::create(&staging).and_then(|mut file| {
        file.write_all(&content)?;
        file.sync_all()
    });

    if let Err(e) = staged.and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(CabinetError::Storage(format!(
            "could not replace {}: {}",
            path.display(),
            e
        )));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::export::ExportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_absent_document_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Option<Settings> =
            load_document(&temp_dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut settings = Settings::default();
        settings.currency_symbol = "a much longer currency label".into();
        save_document(&path, &settings).unwrap();

        settings.currency_symbol = "$".into();
        settings.export.default_format = ExportFormat::Yaml;
        save_document(&path, &settings).unwrap();

        let loaded: Settings = load_document(&path).unwrap().unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.export.default_format, ExportFormat::Yaml);
        assert!(!temp_dir.path().join("config.json.partial").exists());
        assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
    }

    #[test]
    fn test_save_creates_config_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cabinet-stats").join("config.json");

        save_document(&path, &Settings::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_document_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "currency_symbol = $").unwrap();

        let result: CabinetResult<Option<Settings>> = load_document(&path);
        match result {
            Err(CabinetError::Json(message)) => assert!(message.contains("config.json")),
            other => panic!("expected JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_replace_keeps_target() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the target path cannot be renamed over
        let path = temp_dir.path().join("config.json");
        fs::create_dir(&path).unwrap();

        let result = save_document(&path, &Settings::default());
        assert!(matches!(result, Err(CabinetError::Storage(_))));
        assert!(path.is_dir());
        assert!(!temp_dir.path().join("config.json.partial").exists());
    }
}
