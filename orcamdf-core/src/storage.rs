//! JSON storage for projects and price book settings.
//!
//! Plain serde JSON files — one project per file, one settings file per
//! shop. The storage format is the serialized data model itself; no schema
//! beyond that.

use std::fs;
use std::path::Path;

use crate::error::{QuoteError, Result};
use crate::model::{Project, Settings};

/// Load a project from a JSON file.
pub fn load_project(path: &Path) -> Result<Project> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| QuoteError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a project as pretty-printed JSON.
pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    let json = serde_json::to_string_pretty(project)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from a JSON file. Missing fields take the shipped defaults.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| QuoteError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings, falling back to the shipped defaults when the file does
/// not exist yet. Malformed files still fail.
pub fn load_settings_or_default(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    load_settings(path)
}

/// Save settings as pretty-printed JSON.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, ModuleSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_round_trip() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("project.json");

        let project = Project {
            id: "p1".to_string(),
            project_name: "Cozinha Silva".to_string(),
            client_name: "Maria".to_string(),
            modules: vec![ModuleSpec {
                name: "Armário aéreo".to_string(),
                dimensions: Dimensions {
                    width_mm: 800.0,
                    height_mm: 700.0,
                    depth_mm: 350.0,
                },
                ..Default::default()
            }],
            ..Default::default()
        };

        save_project(&path, &project).expect("Should save");
        let loaded = load_project(&path).expect("Should load");
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.labor_hourly_rate = 95.0;
        save_settings(&path, &settings).expect("Should save");

        let loaded = load_settings(&path).expect("Should load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_project_fails() {
        let result = load_project(Path::new("/nonexistent/project.json"));
        assert!(matches!(result, Err(QuoteError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_settings_or_default_missing_file() {
        let settings = load_settings_or_default(Path::new("/nonexistent/settings.json"))
            .expect("Should fall back to defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_settings_fail() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").expect("Should write");

        let result = load_settings_or_default(&path);
        assert!(matches!(result, Err(QuoteError::InvalidJson { .. })));
    }
}
