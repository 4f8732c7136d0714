//! Turns a query into the set of entry ids that should be visible.
//!
//! A match on a category title reveals the whole block; an empty query
//! shows everything.

use std::collections::{HashMap, HashSet};

use crate::corpus::{Corpus, EntryId};
use crate::search::MatchIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    /// Show everything (empty query).
    All,
    Ids(HashSet<EntryId>),
}

impl Visibility {
    pub fn shows_all(&self) -> bool {
        matches!(self, Visibility::All)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Ids(ids) => ids.contains(&id),
        }
    }
}

pub struct FilterEngine {
    /// Title entry id -> index of its block, built once.
    title_block: HashMap<EntryId, usize>,
}

impl FilterEngine {
    pub fn new(corpus: &Corpus) -> Self {
        let title_block = corpus
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| (block.title().id, index))
            .collect();
        FilterEngine { title_block }
    }

    pub fn compute_visibility(
        &self,
        corpus: &Corpus,
        index: &mut MatchIndex,
        query: &str,
    ) -> Visibility {
        if query.is_empty() {
            return Visibility::All;
        }

        let mut visible = HashSet::new();
        for hit in index.search(query) {
            if hit.is_title {
                if let Some(&block_index) = self.title_block.get(&hit.id) {
                    visible.extend(corpus.blocks[block_index].entries.iter().map(|e| e.id));
                }
            }
            visible.insert(hit.id);
        }
        Visibility::Ids(visible)
    }
}
