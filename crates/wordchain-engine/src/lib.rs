//! Anagram derivation chain search engine.
//!
//! Finds, within a word list, the longest chains of words where each word is
//! the previous word's letters plus exactly one inserted character, and
//! enumerates every chain of maximum length from a chosen starting word (or
//! any of its anagrams).
//!
//! # Architecture
//!
//! - [`index`] -- Open-addressed hash index from canonical signature to
//!   anagram group
//! - [`dictionary`] -- Dictionary table construction (filter, sort, group)
//! - [`solver`] -- Memoized depth-first search for longest chains
//! - [`enumerate`] -- Reconstruction of all maximum-length chains
//! - [`search`] -- [`ChainFinder`] facade tying the pieces together
//!
//! The transition "insert one character" strictly increases word length, so
//! the derivation relation is a DAG by construction and the solver needs no
//! cycle detection.

pub mod dictionary;
pub mod enumerate;
pub mod index;
pub mod search;
pub mod solver;

pub use dictionary::{BuildStats, DictionaryTable};
pub use index::{AnagramGroup, AnagramIndex};
pub use search::{ChainFinder, SearchResult};
pub use solver::ChainSolver;

/// Error type for dictionary construction.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Every input word was filtered out (empty or over the length limit).
    #[error("dictionary contains no valid words")]
    NoValidWords,

    /// The anagram index ran out of slots. The index capacity must be
    /// configured well above the number of distinct signatures in the
    /// input; this is a sizing error, not a recoverable condition.
    #[error("anagram index full: capacity {capacity} cannot hold another group")]
    IndexFull {
        /// Configured slot count of the index.
        capacity: usize,
    },
}
