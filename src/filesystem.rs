// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Blocking filesystem capabilities consumed by the finder
//!
//! Failures are split into the one recoverable kind (`NotFound`) and
//! everything else, so callers handle the two cases exhaustively instead of
//! inspecting error codes at every site.

use crate::error::AutoloadError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for raw filesystem capability calls
pub type FsResult<T> = std::result::Result<T, FsError>;

/// A filesystem failure, discriminated by kind
#[derive(Debug, Error)]
pub enum FsError {
    /// The path does not exist
    #[error("no such file or directory")]
    NotFound,

    /// Any other failure (permission denied, I/O error, ...)
    #[error(transparent)]
    Io(io::Error),
}

impl FsError {
    /// Recover the underlying I/O error
    pub fn into_io(self) -> io::Error {
        match self {
            FsError::NotFound => io::Error::from(io::ErrorKind::NotFound),
            FsError::Io(err) => err,
        }
    }
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            FsError::NotFound
        } else {
            FsError::Io(err)
        }
    }
}

impl From<FsError> for AutoloadError {
    fn from(err: FsError) -> Self {
        AutoloadError::Fs(err.into_io())
    }
}

/// Stat result for a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Whether the path is a directory
    pub directory: bool,
}

/// Blocking filesystem access
///
/// Implemented by [`StdFs`] for production use; embedders and tests can
/// substitute their own implementation.
pub trait FileSystem {
    /// Stat a path
    fn stat(&self, path: &Path) -> FsResult<FileStat>;

    /// List the entry names directly inside a directory, in the order the
    /// filesystem reports them
    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Resolve a path to its canonical, symlink-free form
    fn real_path(&self, path: &Path) -> FsResult<PathBuf>;
}

/// Production [`FileSystem`] over `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn stat(&self, path: &Path) -> FsResult<FileStat> {
        let metadata = fs::metadata(path)?;
        Ok(FileStat {
            directory: metadata.is_dir(),
        })
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn real_path(&self, path: &Path) -> FsResult<PathBuf> {
        Ok(fs::canonicalize(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stat_file_and_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"x").unwrap();

        let stat = StdFs.stat(&file).unwrap();
        assert!(!stat.directory);

        let stat = StdFs.stat(dir.path()).unwrap();
        assert!(stat.directory);
    }

    #[test]
    fn test_stat_missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let err = StdFs.stat(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, FsError::NotFound));
    }

    #[test]
    fn test_read_dir_lists_entries() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a"), b"").unwrap();
        std::fs::create_dir(dir.path().join("b")).unwrap();

        let mut names = StdFs.read_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_read_dir_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = StdFs.read_dir(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, FsError::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_path_resolves_symlinks() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        std::fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let resolved = StdFs.real_path(&link).unwrap();
        assert_eq!(resolved, std::fs::canonicalize(&target).unwrap());
    }

    #[test]
    fn test_not_found_io_round_trip() {
        let err = FsError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, FsError::NotFound));

        let err = FsError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(&err, FsError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied));
        assert_eq!(err.into_io().kind(), io::ErrorKind::PermissionDenied);
    }
}
