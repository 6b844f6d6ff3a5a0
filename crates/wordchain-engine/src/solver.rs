// Memoized depth-first search for longest derivation chains.
//
// For a word w, a successor is any dictionary word whose signature equals
// w's signature plus exactly one inserted byte. Each transition increases
// word length by one, so the successor relation is acyclic and memoization
// needs no cycle guard: 0 is a safe "unvisited" sentinel because every
// computed length is at least 1 (a word alone is a chain of length 1).

use wordchain_core::{EngineConfig, WordId};

use crate::dictionary::DictionaryTable;
use crate::index::AnagramIndex;

/// Longest-chain solver over a built dictionary table and index.
///
/// Owns the memo state (`chain_len`, `next_steps`) keyed by [`WordId`];
/// each word's slots are written exactly once, then read-only for the rest
/// of the run. The table and index are never mutated.
pub struct ChainSolver<'a> {
    table: &'a DictionaryTable,
    index: &'a AnagramIndex,
    alphabet: std::ops::RangeInclusive<u8>,
    max_fanout: usize,
    /// Memoized longest chain length per word; 0 = not yet computed.
    chain_len: Vec<u32>,
    /// Successors lying on some longest chain, capped at `max_fanout`.
    /// Ties beyond the cap are silently dropped.
    next_steps: Vec<Vec<WordId>>,
}

impl<'a> ChainSolver<'a> {
    /// Create a solver with all memo slots unvisited.
    pub fn new(table: &'a DictionaryTable, index: &'a AnagramIndex, config: &EngineConfig) -> Self {
        ChainSolver {
            table,
            index,
            alphabet: config.alphabet.clone(),
            max_fanout: config.max_fanout,
            chain_len: vec![0; table.len()],
            next_steps: vec![Vec::new(); table.len()],
        }
    }

    /// Length of the longest derivation chain starting at `id`, computing
    /// and memoizing it (and everything reachable from it) on first call.
    pub fn longest_chain(&mut self, id: WordId) -> u32 {
        if self.chain_len[id] != 0 {
            return self.chain_len[id];
        }

        let signature = self.table.entry(id).signature.clone();
        let mut best = 1u32;
        let mut next = Vec::new();

        for c in self.alphabet.clone() {
            let extended = signature.with_byte(c);
            let Some(group) = self.index.lookup(&extended) else {
                continue;
            };
            for succ in group.ids() {
                let through = 1 + self.longest_chain(succ);
                if through > best {
                    best = through;
                    next.clear();
                    next.push(succ);
                } else if through == best && next.len() < self.max_fanout {
                    next.push(succ);
                }
            }
        }

        // Distinct alphabet bytes yield distinct extended signatures, and
        // distinct signatures yield disjoint groups, so `next` holds no
        // duplicate ids.
        self.chain_len[id] = best;
        self.next_steps[id] = next;
        best
    }

    /// Memoized chain length for `id`; 0 if not yet computed.
    #[inline]
    pub fn chain_len(&self, id: WordId) -> u32 {
        self.chain_len[id]
    }

    /// Best next-step ids for `id` (empty until computed, and empty for a
    /// word that ends every one of its longest chains).
    #[inline]
    pub fn next_steps(&self, id: WordId) -> &[WordId] {
        &self.next_steps[id]
    }

    /// The dictionary table this solver searches over.
    #[inline]
    pub fn table(&self) -> &DictionaryTable {
        self.table
    }

    /// Replace the memo state with vectors from an earlier solver over the
    /// same table. Lets an owner keep memo results across solver instances
    /// (the solver borrows the table, so it cannot live inside the owner).
    ///
    /// # Panics
    ///
    /// Panics if the vector lengths do not match the table.
    pub fn restore(&mut self, chain_len: Vec<u32>, next_steps: Vec<Vec<WordId>>) {
        assert_eq!(chain_len.len(), self.table.len());
        assert_eq!(next_steps.len(), self.table.len());
        self.chain_len = chain_len;
        self.next_steps = next_steps;
    }

    /// Consume the solver, returning its memo state for a later [`restore`].
    ///
    /// [`restore`]: ChainSolver::restore
    pub fn into_memo(self) -> (Vec<u32>, Vec<Vec<WordId>>) {
        (self.chain_len, self.next_steps)
    }
}
