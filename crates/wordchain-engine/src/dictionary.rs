// Dictionary table construction.
//
// Raw words are filtered, truncated to the configured size, sorted by
// (signature, text), and scanned once so that each maximal run of equal
// signatures becomes one anagram group in the index. Sorting by signature
// makes every group a contiguous range; the text tie-break makes the order
// inside a group, and therefore enumeration order, reproducible for
// identical input.

use wordchain_core::{EngineConfig, WordEntry, WordId};

use crate::EngineError;
use crate::index::AnagramIndex;

/// Counters from dictionary construction.
///
/// The engine never writes to the console; callers that want a truncation
/// warning or load summary print these themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Words accepted into the table.
    pub accepted: usize,
    /// Words skipped for being empty or over the length limit.
    pub skipped: usize,
    /// Whether input was cut off at `max_dict_size`.
    pub truncated: bool,
}

/// The sorted dictionary table. Immutable once built; ids are positions.
#[derive(Debug)]
pub struct DictionaryTable {
    entries: Vec<WordEntry>,
}

impl DictionaryTable {
    /// Build the table and its anagram index from raw words.
    ///
    /// Filtering is a silent per-item skip; an input with no surviving
    /// words is [`EngineError::NoValidWords`]. Duplicate identical words
    /// are kept as distinct entries within the same group.
    pub fn build<I>(
        words: I,
        config: &EngineConfig,
    ) -> Result<(DictionaryTable, AnagramIndex, BuildStats), EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut stats = BuildStats::default();
        let mut entries = Vec::new();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() || word.len() > config.max_word_len {
                stats.skipped += 1;
                continue;
            }
            if entries.len() == config.max_dict_size {
                stats.truncated = true;
                break;
            }
            entries.push(WordEntry::new(word.to_string()));
        }

        if entries.is_empty() {
            return Err(EngineError::NoValidWords);
        }
        stats.accepted = entries.len();

        entries.sort_unstable_by(|a, b| {
            a.signature
                .cmp(&b.signature)
                .then_with(|| a.text.cmp(&b.text))
        });

        let table = DictionaryTable { entries };
        let index = table.build_index(config.index_capacity)?;
        Ok((table, index, stats))
    }

    /// Scan the sorted table once, inserting one group per maximal run of
    /// equal signatures.
    fn build_index(&self, capacity: usize) -> Result<AnagramIndex, EngineError> {
        let mut index = AnagramIndex::with_capacity(capacity);
        let mut start = 0;
        while start < self.entries.len() {
            let signature = &self.entries[start].signature;
            let mut end = start + 1;
            while end < self.entries.len() && self.entries[end].signature == *signature {
                end += 1;
            }
            index.insert(signature.clone(), start, end - start)?;
            start = end;
        }
        Ok(index)
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty. `build` never returns an empty table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry with the given id.
    #[inline]
    pub fn entry(&self, id: WordId) -> &WordEntry {
        &self.entries[id]
    }

    /// All entries in sorted order.
    #[inline]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordchain_core::Signature;

    fn small_config() -> EngineConfig {
        EngineConfig {
            index_capacity: 101,
            ..EngineConfig::default()
        }
    }

    fn build(words: &[&str], config: &EngineConfig) -> (DictionaryTable, AnagramIndex, BuildStats) {
        DictionaryTable::build(words.iter().copied(), config).unwrap()
    }

    #[test]
    fn groups_are_contiguous_runs() {
        let (table, index, stats) =
            build(&["tea", "cat", "ate", "at", "act", "eat"], &small_config());
        assert_eq!(stats.accepted, 6);
        assert_eq!(index.len(), 3);

        let group = index.lookup(&Signature::of("eat")).unwrap();
        assert_eq!(group.size, 3);
        for id in group.ids() {
            assert_eq!(table.entry(id).signature, Signature::of("tea"));
        }

        // Every entry's signature equals its neighbors' within its group.
        for window in table.entries().windows(2) {
            if window[0].signature == window[1].signature {
                continue;
            }
            // Run boundary: the signature must never reappear later.
            let later = table
                .entries()
                .iter()
                .skip_while(|e| e.signature != window[1].signature)
                .filter(|e| e.signature == window[0].signature)
                .count();
            assert_eq!(later, 0);
        }
    }

    #[test]
    fn one_group_per_signature() {
        let (_, index, _) = build(&["pots", "stop", "tops", "opts"], &small_config());
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(&Signature::of("spot")).unwrap().size, 4);
    }

    #[test]
    fn filters_empty_and_oversized() {
        let config = EngineConfig {
            max_word_len: 4,
            index_capacity: 101,
            ..EngineConfig::default()
        };
        let (table, _, stats) = build(&["", "cat", "toolong", "at"], &config);
        assert_eq!(table.len(), 2);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.skipped, 2);
        assert!(!stats.truncated);
    }

    #[test]
    fn all_filtered_is_an_error() {
        let config = EngineConfig {
            max_word_len: 2,
            index_capacity: 101,
            ..EngineConfig::default()
        };
        let err = DictionaryTable::build(["", "toolong"], &config).unwrap_err();
        assert!(matches!(err, EngineError::NoValidWords));
    }

    #[test]
    fn truncates_at_max_dict_size() {
        let config = EngineConfig {
            max_dict_size: 2,
            index_capacity: 101,
            ..EngineConfig::default()
        };
        let (table, _, stats) = build(&["a", "b", "c", "d"], &config);
        assert_eq!(table.len(), 2);
        assert!(stats.truncated);
    }

    #[test]
    fn duplicate_words_stay_distinct() {
        let (table, index, _) = build(&["eat", "eat"], &small_config());
        assert_eq!(table.len(), 2);
        let group = index.lookup(&Signature::of("tea")).unwrap();
        assert_eq!(group.size, 2);
        let ids: Vec<_> = group.ids().collect();
        assert_eq!(table.entry(ids[0]).text, "eat");
        assert_eq!(table.entry(ids[1]).text, "eat");
    }

    #[test]
    fn order_within_group_is_text_sorted() {
        let (table, index, _) = build(&["tea", "eat", "ate"], &small_config());
        let group = index.lookup(&Signature::of("ate")).unwrap();
        let texts: Vec<_> = group.ids().map(|id| table.entry(id).text.as_str()).collect();
        assert_eq!(texts, vec!["ate", "eat", "tea"]);
    }

    #[test]
    fn index_capacity_too_small_is_fatal() {
        let config = EngineConfig {
            index_capacity: 2,
            ..EngineConfig::default()
        };
        let err = DictionaryTable::build(["a", "b", "c"], &config).unwrap_err();
        assert!(matches!(err, EngineError::IndexFull { capacity: 2 }));
    }
}
