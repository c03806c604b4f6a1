// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the autoloader

use std::path::PathBuf;
use thiserror::Error;

/// Result type for autoloader operations
pub type Result<T> = std::result::Result<T, AutoloadError>;

/// Errors that can occur while resolving module-loading metadata
#[derive(Debug, Error)]
pub enum AutoloadError {
    /// No package descriptor in any ancestor directory
    #[error("Project root not found starting from {0}")]
    RootNotFound(PathBuf),

    /// File system error
    #[error("File system error: {0}")]
    Fs(#[from] std::io::Error),

    /// Package descriptor exists but cannot be parsed
    #[error("Invalid package descriptor at {path}: {source}")]
    InvalidDescriptor {
        /// Path of the offending descriptor
        path: PathBuf,
        /// Underlying parse failure
        source: serde_json::Error,
    },
}
