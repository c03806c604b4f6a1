// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Project root discovery and installed-module enumeration
//!
//! The finder answers three questions for the module system:
//!
//! - where is the project root? (`find_root`)
//! - which dependency packages are visible from here? (`list_modules`)
//! - does this specifier name a real file or directory? (`find`)
//!
//! A path that does not exist is an expected outcome at every step and is
//! handled locally; every other filesystem failure propagates to the caller
//! untouched.

use crate::config::FinderConfig;
use crate::context::LoadingContext;
use crate::error::{AutoloadError, Result};
use crate::filesystem::{FileSystem, FsError, StdFs};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Parent directory of `dir`, or `None` once the walk stops making
/// progress (filesystem root reached)
fn parent_dir(dir: &Path) -> Option<PathBuf> {
    match dir.parent() {
        Some(parent) if parent != dir => Some(parent.to_path_buf()),
        _ => None,
    }
}

/// Result of a single-path resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Resolved path
    pub filename: PathBuf,
    /// Whether the resolved path is a directory
    pub directory: bool,
}

/// One installed dependency package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Package directory name
    pub name: String,
    /// Canonical (symlink-resolved) path of the package directory
    pub path: PathBuf,
}

/// Resolves module-loading metadata from the filesystem
///
/// Generic over the [`FileSystem`] capability so embedders and tests can
/// substitute their own implementation; [`Finder::new`] uses [`StdFs`].
pub struct Finder<F: FileSystem = StdFs> {
    fs: F,
    config: FinderConfig,
    context: Arc<LoadingContext>,
    root: Mutex<Option<PathBuf>>,
}

impl Finder<StdFs> {
    /// Create a finder over the real filesystem
    pub fn new(context: Arc<LoadingContext>) -> Self {
        Self::with_fs(StdFs, context)
    }
}

impl<F: FileSystem> Finder<F> {
    /// Create a finder over a custom filesystem implementation
    pub fn with_fs(fs: F, context: Arc<LoadingContext>) -> Self {
        Self {
            fs,
            config: FinderConfig::default(),
            context,
            root: Mutex::new(None),
        }
    }

    /// Replace the layout conventions
    pub fn with_config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Find the nearest ancestor directory containing the package
    /// descriptor, starting from the outermost loading context's file
    ///
    /// The descriptor qualifies whether it is a file or a directory. The
    /// result is computed once per finder; subsequent calls return the
    /// cached path without touching the filesystem. Returns
    /// [`AutoloadError::RootNotFound`] when the walk reaches the filesystem
    /// root without finding a descriptor.
    pub fn find_root(&self) -> Result<PathBuf> {
        let mut cached = self.root.lock();
        if let Some(root) = cached.as_ref() {
            trace!("project root cache hit: {}", root.display());
            return Ok(root.clone());
        }

        let origin = self.context.origin().filename().to_path_buf();
        let mut dir = match origin.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Err(AutoloadError::RootNotFound(origin)),
        };

        loop {
            if self.find(&dir, &self.config.descriptor_filename)?.is_some() {
                debug!("project root found at {}", dir.display());
                *cached = Some(dir.clone());
                return Ok(dir);
            }

            match parent_dir(&dir) {
                Some(next) => dir = next,
                None => return Err(AutoloadError::RootNotFound(origin)),
            }
        }
    }

    /// Enumerate installed dependency packages visible from `start`
    /// (defaults to the discovered project root)
    ///
    /// Dependency folders are collected closest-ancestor first and merged by
    /// name: the first occurrence of a name wins, so a package installed
    /// near the project shadows a same-named package installed further up.
    /// Hidden entries (leading dot) are skipped. Each recorded entry carries
    /// its canonical path.
    pub fn list_modules(&self, start: Option<&Path>) -> Result<Vec<ModuleEntry>> {
        let start = match start {
            Some(dir) => dir.to_path_buf(),
            None => self.find_root()?,
        };

        // Locate the closest ancestor whose dependency folder exists as a
        // directory. Levels where it is absent or not a directory are
        // below the installed tree and are skipped.
        let mut dir = start;
        loop {
            let folder = dir.join(&self.config.modules_dir);
            match self.fs.stat(&folder) {
                Ok(stat) if stat.directory => break,
                Ok(_) | Err(FsError::NotFound) => {
                    trace!("no dependency folder at {}", dir.display());
                }
                Err(err) => return Err(err.into()),
            }

            match parent_dir(&dir) {
                Some(next) => dir = next,
                None => return Ok(Vec::new()),
            }
        }

        // Harvest that level and every ancestor above it. A missing folder
        // is the top of the installed tree, not an error.
        let mut seen = HashSet::new();
        let mut modules = Vec::new();
        loop {
            let folder = dir.join(&self.config.modules_dir);
            let entries = match self.fs.read_dir(&folder) {
                Ok(entries) => entries,
                Err(FsError::NotFound) => break,
                Err(err) => return Err(err.into()),
            };

            for name in entries {
                if name.starts_with('.') || seen.contains(&name) {
                    continue;
                }

                let path = self.fs.real_path(&folder.join(&name))?;
                seen.insert(name.clone());
                modules.push(ModuleEntry { name, path });
            }

            match parent_dir(&dir) {
                Some(next) => dir = next,
                None => break,
            }
        }

        debug!("{} installed module(s) visible", modules.len());
        Ok(modules)
    }

    /// Resolve `specifier` against `base` to a concrete file or directory
    ///
    /// When the joined path does not exist and the specifier's final segment
    /// has no extension, the default extension is tried; a fallback hit is
    /// always reported as a file. Returns `Ok(None)` when neither candidate
    /// exists. Results are never cached.
    pub fn find(&self, base: &Path, specifier: &str) -> Result<Option<PathEntry>> {
        let candidate = base.join(specifier);

        match self.fs.stat(&candidate) {
            Ok(stat) => {
                return Ok(Some(PathEntry {
                    filename: candidate,
                    directory: stat.directory,
                }));
            }
            Err(FsError::NotFound) => {}
            Err(err) => return Err(err.into()),
        }

        // A leading-dot-only final segment counts as extensionless.
        if candidate.extension().is_some() {
            return Ok(None);
        }

        let mut fallback = candidate.into_os_string();
        fallback.push(&self.config.default_extension);
        let fallback = PathBuf::from(fallback);

        match self.fs.stat(&fallback) {
            Ok(_) => Ok(Some(PathEntry {
                filename: fallback,
                directory: false,
            })),
            Err(FsError::NotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
