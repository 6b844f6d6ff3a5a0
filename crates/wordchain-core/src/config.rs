// Engine configuration limits.
//
// All bounds are sanity limits sized from expected input, not fixed memory
// layouts; containers grow from actual input up to these caps.

use std::ops::RangeInclusive;

/// Default maximum word length in bytes.
pub const DEFAULT_MAX_WORD_LEN: usize = 255;

/// Default maximum number of dictionary entries; input beyond this is
/// truncated (with a warning from the caller, see `BuildStats`).
pub const DEFAULT_MAX_DICT_SIZE: usize = 1_000_000;

/// Default anagram index capacity. Prime, and comfortably larger than the
/// expected number of distinct signatures, to keep linear-probing clusters
/// short. The index must never be filled to capacity.
pub const DEFAULT_INDEX_CAPACITY: usize = 1_000_003;

/// Default successor alphabet: every printable, non-whitespace single-byte
/// character (`!` through `~`).
pub const DEFAULT_ALPHABET: RangeInclusive<u8> = 0x21..=0x7E;

/// Default maximum number of tied best next-step words retained per word.
pub const DEFAULT_MAX_FANOUT: usize = 100;

/// Tunable limits for dictionary construction and chain search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Words longer than this many bytes are skipped during loading.
    pub max_word_len: usize,
    /// Input is truncated after this many accepted words.
    pub max_dict_size: usize,
    /// Slot count of the open-addressed anagram index. Should be prime and
    /// well above the number of distinct signatures in the input; filling
    /// the index is a fatal build error.
    pub index_capacity: usize,
    /// Byte range tried when generating one-character-insertion successors.
    pub alphabet: RangeInclusive<u8>,
    /// Maximum tied best next-step words kept per word. Ties beyond the cap
    /// are silently dropped, so enumeration is best-effort at this limit.
    pub max_fanout: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_dict_size: DEFAULT_MAX_DICT_SIZE,
            index_capacity: DEFAULT_INDEX_CAPACITY,
            alphabet: DEFAULT_ALPHABET,
            max_fanout: DEFAULT_MAX_FANOUT,
        }
    }
}
