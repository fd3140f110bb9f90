// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CgateError, GitError, Result};
use git2::{Delta, DiffOptions, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CgateError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CgateError::Git(GitError::NotARepository)
            } else {
                CgateError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or(CgateError::Git(GitError::BareRepository))?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Repository-relative paths of the staged changes.
    ///
    /// The index is compared against `HEAD`; with no commits yet it is
    /// compared against the empty tree. Deleted files report their old path.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        let head_tree = self
            .inner
            .head()
            .ok()
            .and_then(|head| head.peel_to_tree().ok());

        let mut opts = DiffOptions::new();
        opts.include_typechange(true);

        let diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), None, Some(&mut opts))
            .map_err(|e| {
                CgateError::Git(GitError::DiffFailed {
                    message: e.message().to_string(),
                })
            })?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let file = if delta.status() == Delta::Deleted {
                delta.old_file()
            } else {
                delta.new_file()
            };
            if let Some(path) = file.path() {
                files.push(path.to_string_lossy().replace('\\', "/"));
            }
        }

        tracing::debug!("{} staged file(s)", files.len());
        Ok(files)
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Staged files of the repository containing the current directory.
pub fn staged_files() -> Result<Vec<String>> {
    Repository::open_current()?.staged_files()
}
