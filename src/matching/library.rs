//! Candidate library enumeration

use crate::io::error::{Result, file_system_error};
use std::path::{Path, PathBuf};

/// Ordering applied to directory entries when building a library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LibraryOrder {
    /// Lexicographic path order, making tie-breaks reproducible
    #[default]
    Sorted,
    /// Whatever order the file system listing yields
    Listing,
}

/// Ordered, immutable set of candidate image paths
///
/// Entries are not filtered by extension or content; a non-image entry fails
/// when it is decoded during matching.
#[derive(Debug, Clone, Default)]
pub struct CandidateLibrary {
    directory: Option<PathBuf>,
    paths: Vec<PathBuf>,
}

impl CandidateLibrary {
    /// Enumerate the immediate entries of `directory`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or one of its entries cannot be read
    pub fn from_directory(directory: &Path, order: LibraryOrder) -> Result<Self> {
        let entries = std::fs::read_dir(directory)
            .map_err(|e| file_system_error(directory, "read directory", e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| file_system_error(directory, "read directory entry", e))?;
            paths.push(entry.path());
        }

        if order == LibraryOrder::Sorted {
            paths.sort();
        }

        tracing::debug!(
            directory = %directory.display(),
            candidates = paths.len(),
            ?order,
            "enumerated candidate library"
        );

        Ok(Self {
            directory: Some(directory.to_path_buf()),
            paths,
        })
    }

    /// Build a library from an explicit list, keeping the given order
    pub const fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            directory: None,
            paths,
        }
    }

    /// Candidate paths in matching order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Directory the library was enumerated from, if any
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the library has no candidates
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
