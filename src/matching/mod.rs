//! Candidate library handling and closest-color matching
//!
//! This module contains matching functionality including:
//! - Candidate library enumeration and ordering
//! - Per-build memoization of candidate colors
//! - Best-match search by color distance

/// Per-build candidate color cache
pub mod cache;
/// Candidate library enumeration
pub mod library;
/// Best-match search over a candidate library
pub mod matcher;

pub use library::{CandidateLibrary, LibraryOrder};
pub use matcher::{CachePolicy, CandidateMatcher, find_best_match};
