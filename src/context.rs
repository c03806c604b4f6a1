// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Loading-context chain
//!
//! Every loaded module gets a context frame recording its source file and
//! the frame that requested it. The chain is created and owned by the module
//! system; the finder only reads it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One frame in the chain of "who loaded what"
#[derive(Debug)]
pub struct LoadingContext {
    /// Source file associated with this frame
    filename: PathBuf,
    /// Frame that requested this one; `None` for the chain head
    parent: Option<Arc<LoadingContext>>,
}

impl LoadingContext {
    /// Create a chain head with no parent
    pub fn new(filename: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            filename: filename.into(),
            parent: None,
        })
    }

    /// Create a frame loaded on behalf of `parent`
    pub fn child_of(parent: &Arc<LoadingContext>, filename: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            filename: filename.into(),
            parent: Some(Arc::clone(parent)),
        })
    }

    /// Source file associated with this frame
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// The frame that requested this one, if any
    pub fn parent(&self) -> Option<&Arc<LoadingContext>> {
        self.parent.as_ref()
    }

    /// Walk the chain to its outermost frame, the one that first triggered
    /// module loading
    pub fn origin(&self) -> &LoadingContext {
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            current = parent;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_walks_to_outermost_frame() {
        let app = LoadingContext::new("/var/node/foo/bar/app.js");
        let lib = LoadingContext::child_of(&app, "/var/node/foo/bar/lib/index.js");
        let leaf = LoadingContext::child_of(&lib, "/var/node/foo/bar/lib/util.js");

        assert_eq!(
            leaf.origin().filename(),
            Path::new("/var/node/foo/bar/app.js")
        );
        assert_eq!(leaf.parent().unwrap().filename(), lib.filename());
    }

    #[test]
    fn test_origin_of_chain_head_is_itself() {
        let app = LoadingContext::new("/srv/app.js");
        assert_eq!(app.origin().filename(), Path::new("/srv/app.js"));
        assert!(app.parent().is_none());
    }
}
