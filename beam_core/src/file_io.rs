//! # File I/O Module
//!
//! Reads and writes case files:
//! - **Atomic saves**: Write to `<name>.tmp`, sync, rename over the target
//! - **Version validation**: Refuse files written by an incompatible schema
//! - **Appending**: Add a case to an existing file, or start a new one
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::case_file::CaseFile;
//! use beam_core::file_io::{load_case_file, save_case_file};
//! use std::path::Path;
//!
//! let file = CaseFile::new();
//! save_case_file(&file, Path::new("cases.json"))?;
//!
//! let loaded = load_case_file(Path::new("cases.json"))?;
//! assert_eq!(loaded.cases.len(), 0);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::calculations::BeamCase;
use crate::case_file::{CaseFile, SCHEMA_VERSION};
use crate::errors::{BeamError, BeamResult};

/// Path of the temporary file used while saving `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Save a case file with atomic write semantics.
///
/// The file is serialized, written to a temporary sibling, synced and then
/// renamed over `path`, so an interrupted save never leaves a truncated file.
pub fn save_case_file(file: &CaseFile, path: &Path) -> BeamResult<()> {
    let json = serde_json::to_string_pretty(file).map_err(|e| BeamError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BeamError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        BeamError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BeamError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BeamError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("saved {} case(s) to {}", file.cases.len(), path.display());
    Ok(())
}

/// Load a case file.
///
/// # Returns
///
/// * `Ok(CaseFile)` - Successfully loaded
/// * `Err(BeamError::VersionMismatch)` - File version is incompatible
/// * `Err(BeamError::SerializationError)` - Invalid JSON
/// * `Err(BeamError::FileError)` - I/O error
pub fn load_case_file(path: &Path) -> BeamResult<CaseFile> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))?;

    let file: CaseFile =
        serde_json::from_str(&contents).map_err(|e| BeamError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&file.version)?;

    debug!("loaded {} case(s) from {}", file.cases.len(), path.display());
    Ok(file)
}

/// Append a case to the file at `path`, creating the file if it is missing.
///
/// Existing settings and cases are kept; the modified stamp is refreshed.
/// Returns the file as saved.
pub fn append_case(path: &Path, case: BeamCase) -> BeamResult<CaseFile> {
    let mut file = if path.exists() {
        load_case_file(path)?
    } else {
        debug!("{} not found, starting a new case file", path.display());
        CaseFile::new()
    };

    file.add_case(case);
    save_case_file(&file, path)?;
    Ok(file)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> BeamResult<()> {
    let mismatch = || BeamError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AnalysisSettings;
    use std::env::temp_dir;

    fn temp_case_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}.json", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/cases.json"));
        assert_eq!(tmp, Path::new("/path/to/cases.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_case_path("roundtrip");

        let mut file = CaseFile::new().with_settings(AnalysisSettings {
            display_decimals: 3,
            ..AnalysisSettings::default()
        });
        file.add_case(BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0).with_label("B-1").at(2.0));
        save_case_file(&file, &path).unwrap();

        let loaded = load_case_file(&path).unwrap();
        assert_eq!(loaded, file);
        assert_eq!(loaded.settings.display_decimals, 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_case_path("atomic");
        let tmp_path = tmp_path_for(&path);

        save_case_file(&CaseFile::new(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_hand_written_file() {
        let path = temp_case_path("hand_written");
        fs::write(
            &path,
            r#"{
                "version": "0.1.0",
                "modified": "2026-01-05T09:30:00Z",
                "cases": [
                    {"span_m": 6.0, "load1_kn": 4.0, "load2_kn": 3.0, "spacing_m": 2.0, "offset_m": 1.0}
                ]
            }"#,
        )
        .unwrap();

        let loaded = load_case_file(&path).unwrap();
        assert_eq!(loaded.settings, AnalysisSettings::default());
        assert_eq!(loaded.cases[0].eval_x_m, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_case_file(&temp_case_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let path = temp_case_path("bad_json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_case_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_creates_then_extends() {
        let path = temp_case_path("append");
        let _ = fs::remove_file(&path);

        let first = append_case(&path, BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0)).unwrap();
        assert_eq!(first.cases.len(), 1);

        let second =
            append_case(&path, BeamCase::new(6.0, 4.0, 3.0, 2.0, 3.0).with_label("moved")).unwrap();
        assert_eq!(second.cases.len(), 2);
        assert!(second.modified >= first.modified);

        let loaded = load_case_file(&path).unwrap();
        assert_eq!(loaded.cases, second.cases);
        assert_eq!(loaded.cases[1].label, "moved");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_keeps_settings() {
        let path = temp_case_path("append_settings");
        let file = CaseFile::new().with_settings(AnalysisSettings::unchecked());
        save_case_file(&file, &path).unwrap();

        let saved = append_case(&path, BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0)).unwrap();
        assert!(!saved.settings.is_strict());
        assert!(!load_case_file(&path).unwrap().settings.is_strict());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_refuses_unreadable_file() {
        let path = temp_case_path("append_bad_json");
        fs::write(&path, "{ not json").unwrap();

        let err = append_case(&path, BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        // Left untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("latest").is_err());
    }
}
