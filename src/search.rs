//! Fuzzy match index over the flattened corpus.
//!
//! Built once at startup; only entry names are matched, hotkeys are not
//! searched. Total over any query string: empty query and no-match both
//! return an empty list.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32String};

use crate::corpus::{Corpus, EntryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHit {
    pub id: EntryId,
    pub is_title: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub normalization: Normalization,
    /// Bias scores toward matches near the start of the name.
    pub prefer_prefix: bool,
    /// Matches scoring below this are dropped. 0 keeps every match.
    pub score_cutoff: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            case_matching: CaseMatching::Smart,
            normalization: Normalization::Smart,
            prefer_prefix: false,
            score_cutoff: 0,
        }
    }
}

struct IndexedEntry {
    id: EntryId,
    is_title: bool,
    haystack: Utf32String,
}

pub struct MatchIndex {
    entries: Vec<IndexedEntry>,
    matcher: Matcher,
    case_matching: CaseMatching,
    normalization: Normalization,
    score_cutoff: u32,
}

impl MatchIndex {
    pub fn new(corpus: &Corpus, config: SearchConfig) -> Self {
        let entries = corpus
            .entries()
            .map(|entry| IndexedEntry {
                id: entry.id,
                is_title: entry.is_title,
                haystack: Utf32String::from(entry.name.as_str()),
            })
            .collect();

        let mut matcher_config = Config::DEFAULT;
        matcher_config.prefer_prefix = config.prefer_prefix;

        MatchIndex {
            entries,
            matcher: Matcher::new(matcher_config),
            case_matching: config.case_matching,
            normalization: config.normalization,
            score_cutoff: config.score_cutoff,
        }
    }

    /// Returns every entry whose name fuzzily matches `query`, best first.
    pub fn search(&mut self, query: &str) -> Vec<MatchHit> {
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::parse(query, self.case_matching, self.normalization);
        let matcher = &mut self.matcher;
        let cutoff = self.score_cutoff;

        let mut scored: Vec<(MatchHit, u32)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                pattern
                    .score(entry.haystack.slice(..), matcher)
                    .filter(|score| *score >= cutoff)
                    .map(|score| {
                        (
                            MatchHit {
                                id: entry.id,
                                is_title: entry.is_title,
                            },
                            score,
                        )
                    })
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(hit, _)| hit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{build_corpus, Corpus, Sheet, ShortcutDef};

    fn def(name: &str, hotkey: &str) -> ShortcutDef {
        ShortcutDef {
            name: name.to_string(),
            hotkey: hotkey.to_string(),
            unmapped: false,
        }
    }

    fn test_corpus() -> Corpus {
        let mut sheet = Sheet::new();
        sheet.insert(
            "Editing".to_string(),
            vec![def("Copy", "y"), def("Paste", "p")],
        );
        sheet.insert(
            "Navigation".to_string(),
            vec![def("Up", "k"), def("Down", "j")],
        );
        build_corpus(&sheet)
    }

    fn test_index() -> MatchIndex {
        MatchIndex::new(&test_corpus(), SearchConfig::default())
    }

    fn id_of(corpus: &Corpus, name: &str) -> crate::corpus::EntryId {
        corpus.entries().find(|e| e.name == name).unwrap().id
    }

    #[test]
    fn empty_query_returns_nothing() {
        let mut index = test_index();
        assert!(index.search("").is_empty());
    }

    #[test]
    fn no_match_returns_empty_list() {
        let mut index = test_index();
        assert!(index.search("zzz").is_empty());
    }

    #[test]
    fn matches_shortcut_names() {
        let corpus = test_corpus();
        let mut index = MatchIndex::new(&corpus, SearchConfig::default());

        let hits = index.search("copy");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id_of(&corpus, "Copy"));
        assert!(!hits[0].is_title);
    }

    #[test]
    fn titles_are_indexed_too() {
        let corpus = test_corpus();
        let mut index = MatchIndex::new(&corpus, SearchConfig::default());

        let hits = index.search("editing");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id_of(&corpus, "Editing"));
        assert!(hits[0].is_title);
    }

    #[test]
    fn hotkeys_are_not_searched() {
        // "kj" matches no entry name but is exactly the two hotkeys of
        // the Navigation block.
        let mut index = test_index();
        assert!(index.search("kj").is_empty());
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let mut index = test_index();

        let first = index.search("pa");
        let second = index.search("pa");

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
