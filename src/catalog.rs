//! Extension records and the catalog that seeds the store.
//!
//! The built-in catalog is compiled in. A JSON file with the same shape can
//! replace it through `[catalog] path` in the config.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{ManagerError, ManagerResult};

/// Opaque identifier of an extension, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionId(pub u32);

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single browser extension entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub id: ExtensionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Path to the logo image, relative to the working directory
    #[serde(default)]
    pub logo: String,
    pub is_active: bool,
}

impl Extension {
    pub fn new(id: u32, name: &str, description: &str, logo: &str, is_active: bool) -> Self {
        Self {
            id: ExtensionId(id),
            name: name.to_string(),
            description: description.to_string(),
            logo: logo.to_string(),
            is_active,
        }
    }

    /// First letter of the name, shown when the logo file is missing.
    pub fn monogram(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// The compiled-in catalog.
pub fn builtin() -> Vec<Extension> {
    vec![
        Extension::new(
            1,
            "DevLens",
            "Quickly inspect page layouts and visualize element boundaries.",
            "assets/images/logo-devlens.svg",
            true,
        ),
        Extension::new(
            2,
            "StyleSpy",
            "Instantly analyze and copy CSS from any webpage element.",
            "assets/images/logo-style-spy.svg",
            true,
        ),
        Extension::new(
            3,
            "SpeedBoost",
            "Optimizes browser resource usage to accelerate page loading.",
            "assets/images/logo-speed-boost.svg",
            false,
        ),
        Extension::new(
            4,
            "JSONWizard",
            "Formats, validates, and prettifies JSON responses in-browser.",
            "assets/images/logo-json-wizard.svg",
            true,
        ),
        Extension::new(
            5,
            "TabMaster Pro",
            "Organizes browser tabs into groups and sessions.",
            "assets/images/logo-tab-master-pro.svg",
            true,
        ),
        Extension::new(
            6,
            "ViewportBuddy",
            "Simulates various screen resolutions directly within the browser.",
            "assets/images/logo-viewport-buddy.svg",
            false,
        ),
        Extension::new(
            7,
            "Markup Notes",
            "Enables annotation and notes directly onto webpages for collaborative debugging.",
            "assets/images/logo-markup-notes.svg",
            true,
        ),
        Extension::new(
            8,
            "GridGuides",
            "Overlay customizable grids and alignment guides on any webpage.",
            "assets/images/logo-grid-guides.svg",
            false,
        ),
        Extension::new(
            9,
            "Palette Picker",
            "Instantly extracts color palettes from any webpage.",
            "assets/images/logo-palette-picker.svg",
            true,
        ),
        Extension::new(
            10,
            "LinkChecker",
            "Scans and highlights broken links on any page.",
            "assets/images/logo-link-checker.svg",
            true,
        ),
        Extension::new(
            11,
            "DOM Snapshot",
            "Capture and export DOM structures quickly.",
            "assets/images/logo-dom-snapshot.svg",
            false,
        ),
        Extension::new(
            12,
            "ConsolePlus",
            "Enhanced developer console with advanced filtering and logging.",
            "assets/images/logo-console-plus.svg",
            true,
        ),
    ]
}

/// Load a catalog from a JSON array of extensions.
pub fn load(path: &Path) -> ManagerResult<Vec<Extension>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse a JSON catalog and check id uniqueness.
pub fn parse(json: &str) -> ManagerResult<Vec<Extension>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ManagerError::Catalog(
            "expected a JSON array of extensions".to_string(),
        ));
    }

    let extensions: Vec<Extension> = serde_json::from_value(value)?;
    validate(&extensions)?;
    Ok(extensions)
}

/// Reject catalogs where two entries share an id.
pub fn validate(extensions: &[Extension]) -> ManagerResult<()> {
    let mut seen = HashSet::with_capacity(extensions.len());
    for ext in extensions {
        if !seen.insert(ext.id) {
            return Err(ManagerError::DuplicateId(ext.id));
        }
    }
    Ok(())
}

/// Pick the catalog for this session: the configured file if it loads, the
/// built-in one otherwise.
pub fn from_config(config: &Config) -> Vec<Extension> {
    let Some(path) = config.catalog_path() else {
        return builtin();
    };

    match load(&path) {
        Ok(extensions) => {
            log::info!(
                "Loaded {} extensions from {}",
                extensions.len(),
                path.display()
            );
            extensions
        }
        Err(e) => {
            log::warn!(
                "Failed to load catalog {}: {}, using built-in catalog",
                path.display(),
                e
            );
            builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = builtin();
        assert_eq!(catalog.len(), 12);
        assert!(validate(&catalog).is_ok());
    }

    #[test]
    fn test_builtin_has_both_states() {
        let catalog = builtin();
        assert!(catalog.iter().any(|e| e.is_active));
        assert!(catalog.iter().any(|e| !e.is_active));
    }

    #[test]
    fn test_parse_camel_case() {
        let json = r#"[
            {"id": 7, "name": "A", "description": "first", "logo": "a.svg", "isActive": true},
            {"id": 9, "name": "B", "isActive": false}
        ]"#;

        let catalog = parse(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, ExtensionId(7));
        assert!(catalog[0].is_active);
        assert_eq!(catalog[1].description, "");
        assert!(!catalog[1].is_active);
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "name": "A", "isActive": true},
            {"id": 1, "name": "B", "isActive": false}
        ]"#;

        match parse(json) {
            Err(ManagerError::DuplicateId(id)) => assert_eq!(id, ExtensionId(1)),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse(r#"{"id": 1, "name": "A", "isActive": true}"#);
        assert!(matches!(result, Err(ManagerError::Catalog(_))));
    }

    #[test]
    fn test_parse_empty_catalog() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 3, "name": "Solo", "isActive": true}}]"#
        )
        .unwrap();

        let catalog = load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Solo");
    }

    #[test]
    fn test_from_config_falls_back_on_missing_file() {
        let mut config = Config::default();
        config.catalog.path = Some("/nonexistent/catalog.json".to_string());

        assert_eq!(from_config(&config), builtin());
    }

    #[test]
    fn test_monogram() {
        let ext = Extension::new(1, "devLens", "", "", true);
        assert_eq!(ext.monogram(), "D");
        let unnamed = Extension::new(2, "", "", "", true);
        assert_eq!(unnamed.monogram(), "");
    }
}
