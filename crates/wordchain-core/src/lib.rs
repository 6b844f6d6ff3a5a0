//! Shared primitive types for the wordchain anagram derivation engine.
//!
//! This crate holds the small, I/O-free building blocks used by
//! `wordchain-engine`:
//!
//! - [`signature`] -- Canonical signatures (sorted byte strings)
//! - [`entry`] -- Dictionary word entries and ids
//! - [`config`] -- Engine configuration limits

pub mod config;
pub mod entry;
pub mod signature;

pub use config::EngineConfig;
pub use entry::{WordEntry, WordId};
pub use signature::Signature;
