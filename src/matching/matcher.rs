//! Closest-candidate search by average color
//!
//! Candidates are scanned in library order and compared with the L1 distance
//! between average colors. The first candidate reaching the minimum distance
//! wins, so ties resolve to the earliest library entry.
//!
//! Without memoization every call decodes the whole library, which makes a full
//! build cost `tiles x library` decodes. [`CachePolicy::Memoize`] reduces that to
//! one decode per candidate per build.

use crate::color::{Color, average_color};
use crate::io::error::{MosaicError, Result};
use crate::io::image::decode_image;
use crate::matching::cache::{CacheStats, ColorCache};
use crate::matching::library::CandidateLibrary;
use std::path::Path;

/// Whether candidate colors are remembered between queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Decode each candidate once per matcher
    #[default]
    Memoize,
    /// Decode every candidate on every query
    Disabled,
}

/// Winning candidate of a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'a> {
    /// Path of the selected candidate
    pub path: &'a Path,
    /// Position of the candidate in the library
    pub index: usize,
    /// L1 distance between the candidate and the target color
    pub distance: u32,
}

/// Finds the library entry whose average color is closest to a target
pub struct CandidateMatcher<'a> {
    library: &'a CandidateLibrary,
    policy: CachePolicy,
    cache: ColorCache,
    decodes: usize,
}

impl<'a> CandidateMatcher<'a> {
    /// Create a matcher over `library`
    pub fn new(library: &'a CandidateLibrary, policy: CachePolicy) -> Self {
        Self {
            library,
            policy,
            cache: ColorCache::new(),
            decodes: 0,
        }
    }

    /// Find the candidate closest to `target`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The library is empty
    /// - Any candidate examined cannot be decoded or has no pixels
    pub fn find_best_match(&mut self, target: &Color) -> Result<BestMatch<'a>> {
        let library = self.library;
        if library.is_empty() {
            return Err(MosaicError::EmptyLibrary {
                directory: library.directory().map(Path::to_path_buf),
            });
        }

        let mut best: Option<BestMatch<'a>> = None;
        for (index, path) in library.paths().iter().enumerate() {
            let distance = self.candidate_color(path)?.distance(target);
            tracing::trace!(candidate = %path.display(), distance, "candidate distance");

            if best.is_none_or(|current| distance < current.distance) {
                best = Some(BestMatch {
                    path,
                    index,
                    distance,
                });
            }
        }

        best.ok_or_else(|| MosaicError::EmptyLibrary {
            directory: library.directory().map(Path::to_path_buf),
        })
    }

    /// Number of candidate images decoded so far
    pub const fn decodes(&self) -> usize {
        self.decodes
    }

    /// Hit and miss counts of the color cache
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats
    }

    fn candidate_color(&mut self, path: &Path) -> Result<Color> {
        let decodes = &mut self.decodes;
        let mut compute = || {
            *decodes += 1;
            average_color(&decode_image(path)?)
        };

        match self.policy {
            CachePolicy::Memoize => self.cache.get_or_compute(path, compute).cloned(),
            CachePolicy::Disabled => compute(),
        }
    }
}

/// Find the candidate closest to `target`, decoding every entry
///
/// This is the uncached form of [`CandidateMatcher::find_best_match`].
///
/// # Errors
///
/// Returns an error if the library is empty or any candidate cannot be decoded
pub fn find_best_match<'a>(target: &Color, library: &'a CandidateLibrary) -> Result<&'a Path> {
    CandidateMatcher::new(library, CachePolicy::Disabled)
        .find_best_match(target)
        .map(|found| found.path)
}
