// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Package descriptor parsing

use crate::error::{AutoloadError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed package descriptor (`package.json`)
///
/// Only the fields the loading system consumes are modeled; everything else
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageDescriptor {
    /// Package name
    pub name: Option<String>,

    /// Package version
    pub version: Option<String>,

    /// Entry point, relative to the package root
    pub main: Option<String>,

    /// Module system selector ("commonjs" or "module")
    #[serde(rename = "type")]
    pub module_type: Option<String>,

    /// Declared runtime dependencies
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageDescriptor {
    /// Read and parse the descriptor at `path`
    ///
    /// Read failures surface as filesystem errors; a descriptor that exists
    /// but does not parse is reported with its path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| AutoloadError::InvalidDescriptor {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_descriptor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{
                "name": "demo-app",
                "version": "1.2.3",
                "main": "lib/index.js",
                "type": "commonjs",
                "dependencies": { "chai": "^4.0.0" },
                "scripts": { "test": "mocha" }
            }"#,
        )
        .unwrap();

        let descriptor = PackageDescriptor::load(&path).unwrap();
        assert_eq!(descriptor.name.as_deref(), Some("demo-app"));
        assert_eq!(descriptor.version.as_deref(), Some("1.2.3"));
        assert_eq!(descriptor.main.as_deref(), Some("lib/index.js"));
        assert_eq!(descriptor.module_type.as_deref(), Some("commonjs"));
        assert_eq!(descriptor.dependencies.get("chai").map(String::as_str), Some("^4.0.0"));
    }

    #[test]
    fn test_load_minimal_descriptor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{}").unwrap();

        let descriptor = PackageDescriptor::load(&path).unwrap();
        assert!(descriptor.name.is_none());
        assert!(descriptor.dependencies.is_empty());
    }

    #[test]
    fn test_load_invalid_descriptor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "not json").unwrap();

        let err = PackageDescriptor::load(&path).unwrap_err();
        assert!(matches!(err, AutoloadError::InvalidDescriptor { path: p, .. } if p == path));
    }

    #[test]
    fn test_load_missing_descriptor_is_fs_error() {
        let dir = tempdir().unwrap();
        let err = PackageDescriptor::load(&dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, AutoloadError::Fs(_)));
    }
}
