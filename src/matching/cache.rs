use crate::color::Color;
use crate::io::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Memoization cache for candidate average colors
///
/// Lives for a single mosaic build so each candidate is decoded at most once
/// instead of once per tile.
#[derive(Default)]
pub struct ColorCache {
    /// Candidate path to average color mapping
    colors: HashMap<PathBuf, Color>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl ColorCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached color or compute and store a new one
    ///
    /// A failed computation is not cached.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `compute_fn`
    pub fn get_or_compute<F>(&mut self, path: &Path, compute_fn: F) -> Result<&Color>
    where
        F: FnOnce() -> Result<Color>,
    {
        use std::collections::hash_map::Entry;

        match self.colors.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Ok(entry.insert(compute_fn()?))
            }
        }
    }

    /// Number of memoized colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colors have been memoized
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
