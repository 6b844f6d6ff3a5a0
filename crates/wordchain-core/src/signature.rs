// Canonical signatures: the sorted byte string of a word.
//
// Two words are anagrams of each other iff their signatures are byte-equal.
// Words are treated as raw byte strings throughout; no case folding or
// Unicode normalization is applied.

/// Canonical signature of a word: its bytes sorted ascending.
///
/// Signatures order lexicographically (`Ord` on the underlying bytes), which
/// is what the dictionary table sorts by so that anagram groups form
/// contiguous runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(Box<[u8]>);

impl Signature {
    /// Compute the canonical signature of a word by sorting its bytes.
    ///
    /// Cost: O(L log L) for a word of L bytes.
    pub fn of(word: &str) -> Self {
        let mut bytes = word.as_bytes().to_vec();
        bytes.sort_unstable();
        Signature(bytes.into_boxed_slice())
    }

    /// Return a new signature with one extra byte inserted at its sorted
    /// position. Used by the solver to form the signature a successor word
    /// must have: the current letters plus exactly one more character.
    ///
    /// Cost: O(L), cheaper than re-sorting the extended string.
    pub fn with_byte(&self, extra: u8) -> Self {
        let pos = self.0.partition_point(|&b| b <= extra);
        let mut bytes = Vec::with_capacity(self.0.len() + 1);
        bytes.extend_from_slice(&self.0[..pos]);
        bytes.push(extra);
        bytes.extend_from_slice(&self.0[pos..]);
        Signature(bytes.into_boxed_slice())
    }

    /// The signature's bytes (sorted ascending).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the signature (equals the source word's byte length).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
