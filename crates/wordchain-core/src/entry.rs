// Dictionary word entries.

use crate::signature::Signature;

/// Index of a word in the sorted dictionary table.
///
/// Ids are assigned after sorting, so an id is simply the entry's position
/// and can be used to index the table directly.
pub type WordId = usize;

/// One dictionary word together with its canonical signature.
///
/// Entries are immutable once the dictionary table is built; all search
/// state (memoized chain lengths, best next steps) lives in the solver,
/// keyed by [`WordId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The literal word as read from the input.
    pub text: String,
    /// Canonical signature: the word's bytes sorted ascending.
    pub signature: Signature,
}

impl WordEntry {
    /// Build an entry, computing the signature from the text.
    pub fn new(text: String) -> Self {
        let signature = Signature::of(&text);
        WordEntry { text, signature }
    }

    /// Byte length of the word (equals the signature length).
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word is empty. Build filtering rejects empty words, so
    /// this is false for any entry inside a dictionary table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
