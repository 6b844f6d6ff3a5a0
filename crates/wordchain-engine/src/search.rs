// ChainFinder: top-level integration point for chain search.
//
// Owns the dictionary table, the anagram index, and the solver memo, and
// exposes the two-call API the outside world needs: build once, then search
// any number of starting words. The memo persists across searches (longest
// chain lengths are properties of the dictionary, not of the query).

use wordchain_core::{EngineConfig, Signature};

use crate::EngineError;
use crate::dictionary::{BuildStats, DictionaryTable};
use crate::enumerate::collect_chains;
use crate::index::AnagramIndex;
use crate::solver::ChainSolver;

/// Outcome of a successful lookup: the best chain length over all anagrams
/// of the starting word, plus every maximum-length chain when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Maximum chain length across the start word's whole anagram group.
    /// 1 means no derivation chain exists beyond the word itself.
    pub max_len: u32,
    /// All maximum-length chains, each first-to-last, from every word in
    /// the start group whose best length equals `max_len`. Empty when
    /// `max_len <= 1`.
    pub chains: Vec<Vec<String>>,
}

/// Owns all search components over one built dictionary.
#[derive(Debug)]
pub struct ChainFinder {
    table: DictionaryTable,
    index: AnagramIndex,
    config: EngineConfig,
    /// Memoized per-word chain lengths; persists across `search` calls.
    chain_len: Vec<u32>,
    next_steps: Vec<Vec<usize>>,
}

impl ChainFinder {
    /// Build a finder from raw words. Returns the finder together with the
    /// load statistics (skipped words, truncation) for the caller to report.
    pub fn build<I>(words: I, config: EngineConfig) -> Result<(Self, BuildStats), EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (table, index, stats) = DictionaryTable::build(words, &config)?;
        let len = table.len();
        Ok((
            ChainFinder {
                table,
                index,
                config,
                chain_len: vec![0; len],
                next_steps: vec![Vec::new(); len],
            },
            stats,
        ))
    }

    /// Number of dictionary entries loaded.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.table.len()
    }

    /// Search for the longest derivation chains starting from `start_word`
    /// or any of its anagrams.
    ///
    /// Returns `None` when no dictionary word is an anagram of the start
    /// word ("not found"); no search is performed in that case.
    pub fn search(&mut self, start_word: &str) -> Option<SearchResult> {
        let signature = Signature::of(start_word);
        let group = self.index.lookup(&signature)?;

        let mut solver = ChainSolver::new(&self.table, &self.index, &self.config);
        // Seed the solver with everything memoized so far.
        solver.restore(
            std::mem::take(&mut self.chain_len),
            std::mem::take(&mut self.next_steps),
        );

        let mut max_len = 0;
        for id in group.ids() {
            max_len = max_len.max(solver.longest_chain(id));
        }

        let mut chains = Vec::new();
        if max_len > 1 {
            for id in group.ids() {
                if solver.chain_len(id) == max_len {
                    chains.extend(collect_chains(&solver, id));
                }
            }
        }

        let (chain_len, next_steps) = solver.into_memo();
        self.chain_len = chain_len;
        self.next_steps = next_steps;

        Some(SearchResult { max_len, chains })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig {
            index_capacity: 101,
            ..EngineConfig::default()
        }
    }

    fn finder(words: &[&str]) -> ChainFinder {
        ChainFinder::build(words.iter().copied(), config()).unwrap().0
    }

    #[test]
    fn finds_all_longest_chains_from_a() {
        let mut finder = finder(&["a", "at", "ate", "ant", "tea"]);
        let result = finder.search("a").unwrap();
        assert_eq!(result.max_len, 3);
        // "at" has three tied successors: "ate"/"tea" (insert 'e') and
        // "ant" (insert 'n'); 'e' sorts before 'n' in the alphabet loop.
        assert_eq!(
            result.chains,
            vec![
                vec!["a".to_string(), "at".to_string(), "ate".to_string()],
                vec!["a".to_string(), "at".to_string(), "tea".to_string()],
                vec!["a".to_string(), "at".to_string(), "ant".to_string()],
            ]
        );
    }

    #[test]
    fn lone_word_reports_length_one_and_no_chains() {
        let mut finder = finder(&["cat"]);
        let result = finder.search("cat").unwrap();
        assert_eq!(result.max_len, 1);
        assert!(result.chains.is_empty());
    }

    #[test]
    fn unknown_start_word_is_not_found() {
        let mut finder = finder(&["cat", "at"]);
        assert!(finder.search("zzz").is_none());
    }

    #[test]
    fn anagram_of_dictionary_word_is_found() {
        // "tae" is no dictionary word, but shares a signature with "ate".
        let mut finder = finder(&["a", "at", "ate"]);
        let result = finder.search("tae").unwrap();
        assert_eq!(result.max_len, 1);
    }

    #[test]
    fn duplicate_start_words_chain_without_double_counting() {
        let mut finder = finder(&["eat", "eat", "meat"]);
        let result = finder.search("eat").unwrap();
        assert_eq!(result.max_len, 2);
        // Both duplicate entries reach the maximum, so both emit a chain.
        assert_eq!(
            result.chains,
            vec![
                vec!["eat".to_string(), "meat".to_string()],
                vec!["eat".to_string(), "meat".to_string()],
            ]
        );
    }

    #[test]
    fn search_starts_from_every_anagram_in_the_group() {
        // Derivation depends only on the letter multiset, so every anagram
        // of "team" can insert 'd' to reach "tamed"; each group member
        // contributes its own chain, in group (text-sorted) order.
        let mut finder = finder(&["meat", "tame", "team", "tamed"]);
        let result = finder.search("team").unwrap();
        assert_eq!(result.max_len, 2);
        assert_eq!(
            result.chains,
            vec![
                vec!["meat".to_string(), "tamed".to_string()],
                vec!["tame".to_string(), "tamed".to_string()],
                vec!["team".to_string(), "tamed".to_string()],
            ]
        );
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let mut finder = finder(&["a", "at", "ate", "tea", "ant", "rant"]);
        let first = finder.search("a").unwrap();
        let second = finder.search("a").unwrap();
        assert_eq!(first, second);

        // The memo persists; a different start word still answers correctly.
        // "ta" shares a signature with "at": at -> ant -> rant.
        let at = finder.search("ta").unwrap();
        assert_eq!(at.max_len, 3);
    }

    #[test]
    fn build_surfaces_empty_dictionary() {
        let err = ChainFinder::build(std::iter::empty::<&str>(), config()).unwrap_err();
        assert!(matches!(err, EngineError::NoValidWords));
    }
}
