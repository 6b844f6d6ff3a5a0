// Anagram index: open-addressed hash table from canonical signature to the
// contiguous range of dictionary entries sharing that signature.
//
// The table has a fixed capacity chosen at construction (prime by default,
// see `EngineConfig::index_capacity`) and uses linear probing. It is built
// once while scanning the sorted dictionary table and is read-only
// afterwards; there is no delete or update.

use wordchain_core::Signature;

use crate::EngineError;

/// All dictionary entries sharing one canonical signature, as a contiguous
/// run `start..start + size` in the sorted dictionary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnagramGroup {
    /// First entry index of the run.
    pub start: usize,
    /// Number of entries in the run. Always >= 1 for a stored group.
    pub size: usize,
}

impl AnagramGroup {
    /// Iterate over the word ids in this group.
    #[inline]
    pub fn ids(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.size
    }
}

#[derive(Debug)]
struct Slot {
    signature: Signature,
    group: AnagramGroup,
}

/// Open-addressed signature-to-group index with linear probing.
#[derive(Debug)]
pub struct AnagramIndex {
    slots: Vec<Option<Slot>>,
    len: usize,
}

impl AnagramIndex {
    /// Create an empty index with the given slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        AnagramIndex { slots, len: 0 }
    }

    /// Number of groups stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot capacity of the index.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// DJB2-style multiplicative hash, reduced modulo the slot count.
    fn home_slot(&self, signature: &Signature) -> usize {
        let mut hash: u64 = 5381;
        for &b in signature.as_bytes() {
            hash = hash.wrapping_mul(33).wrapping_add(u64::from(b));
        }
        (hash % self.slots.len() as u64) as usize
    }

    /// Insert a group under its signature.
    ///
    /// The builder inserts each signature exactly once (one group per
    /// maximal run of the sorted table), so no overwrite handling is
    /// needed. Fails with [`EngineError::IndexFull`] when every slot is
    /// occupied.
    pub fn insert(
        &mut self,
        signature: Signature,
        start: usize,
        size: usize,
    ) -> Result<(), EngineError> {
        if self.len == self.slots.len() {
            return Err(EngineError::IndexFull {
                capacity: self.slots.len(),
            });
        }
        let mut i = self.home_slot(&signature);
        while self.slots[i].is_some() {
            i = (i + 1) % self.slots.len();
        }
        self.slots[i] = Some(Slot {
            signature,
            group: AnagramGroup { start, size },
        });
        self.len += 1;
        Ok(())
    }

    /// Look up the anagram group for a signature.
    ///
    /// Probes forward from the home slot, comparing full signatures, until
    /// a match or an empty slot ends the probe sequence.
    pub fn lookup(&self, signature: &Signature) -> Option<AnagramGroup> {
        if self.slots.is_empty() {
            return None;
        }
        let mut i = self.home_slot(signature);
        let mut probed = 0;
        while let Some(slot) = &self.slots[i] {
            if slot.signature == *signature {
                return Some(slot.group);
            }
            i = (i + 1) % self.slots.len();
            probed += 1;
            if probed == self.slots.len() {
                // Table is completely full and the signature is absent.
                return None;
            }
        }
        None
    }
}
