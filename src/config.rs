// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Project layout conventions

/// File whose presence marks a directory as a project root
pub const DESCRIPTOR_FILENAME: &str = "package.json";

/// Directory holding installed dependency packages
pub const MODULES_DIR: &str = "node_modules";

/// Extension appended when resolving an extensionless specifier
pub const DEFAULT_EXTENSION: &str = ".js";

/// Layout conventions used by [`Finder`](crate::Finder)
///
/// The defaults match the Node.js ecosystem; embedders with different
/// conventions can override any of the three.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Package descriptor filename
    pub descriptor_filename: String,
    /// Dependency folder name
    pub modules_dir: String,
    /// Default source file extension, including the leading dot
    pub default_extension: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            descriptor_filename: DESCRIPTOR_FILENAME.to_string(),
            modules_dir: MODULES_DIR.to_string(),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}
