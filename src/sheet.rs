//! Row model for the rendered sheet.
//!
//! `build_rows` is a full rebuild: the previous row list is discarded
//! wholesale on every filter cycle, never patched.

use crate::corpus::{Corpus, Entry};
use crate::filter::Visibility;

pub const UNMAPPED_MARKER: &str = "(unmapped)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetRow {
    Title(String),
    Shortcut { hotkey: String, label: String },
    Blank,
}

pub fn build_rows(corpus: &Corpus, visibility: &Visibility) -> Vec<SheetRow> {
    let mut rows = Vec::new();
    for block in &corpus.blocks {
        // Titles are always tentative candidates so the header survives
        // when only body entries match.
        let candidates: Vec<&Entry> = block
            .entries
            .iter()
            .filter(|entry| {
                visibility.shows_all() || entry.is_title || visibility.contains(entry.id)
            })
            .collect();

        // A block reduced to its bare header says nothing.
        if candidates.len() <= 1 {
            continue;
        }

        if !rows.is_empty() {
            rows.push(SheetRow::Blank);
        }
        for entry in candidates {
            if entry.is_title {
                rows.push(SheetRow::Title(entry.name.clone()));
            } else {
                let label = if entry.is_unmapped {
                    format!("{} {}", entry.name, UNMAPPED_MARKER)
                } else {
                    entry.name.clone()
                };
                rows.push(SheetRow::Shortcut {
                    hotkey: entry.hotkey.clone(),
                    label,
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{build_corpus, Corpus, EntryId, Sheet, ShortcutDef};
    use std::collections::HashSet;

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
        sheet.insert("Lone Title".to_string(), vec![]);
        build_corpus(&sheet)
    }

    fn id_of(corpus: &Corpus, name: &str) -> EntryId {
        corpus.entries().find(|e| e.name == name).unwrap().id
    }

    fn only(ids: &[EntryId]) -> Visibility {
        Visibility::Ids(ids.iter().copied().collect::<HashSet<_>>())
    }

    #[test]
    fn show_everything_renders_every_multi_entry_block_in_order() {
        let corpus = test_corpus();

        let rows = build_rows(&corpus, &Visibility::All);

        assert_eq!(
            rows,
            vec![
                SheetRow::Title("Editing".to_string()),
                SheetRow::Shortcut {
                    hotkey: "y".to_string(),
                    label: "Copy".to_string()
                },
                SheetRow::Shortcut {
                    hotkey: "p".to_string(),
                    label: "Paste".to_string()
                },
                SheetRow::Blank,
                SheetRow::Title("Navigation".to_string()),
                SheetRow::Shortcut {
                    hotkey: "k".to_string(),
                    label: "Up".to_string()
                },
                SheetRow::Shortcut {
                    hotkey: "j".to_string(),
                    label: "Down".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_visibility_renders_no_blocks() {
        let corpus = test_corpus();

        let rows = build_rows(&corpus, &only(&[]));

        assert!(rows.is_empty());
    }

    #[test]
    fn rebuilding_with_the_same_inputs_is_idempotent() {
        let corpus = test_corpus();
        let visibility = only(&[id_of(&corpus, "Copy")]);

        assert_eq!(
            build_rows(&corpus, &visibility),
            build_rows(&corpus, &visibility)
        );
    }

    #[test]
    fn body_match_keeps_the_title_and_drops_the_rest() {
        let corpus = test_corpus();

        let rows = build_rows(&corpus, &only(&[id_of(&corpus, "Copy")]));

        assert_eq!(
            rows,
            vec![
                SheetRow::Title("Editing".to_string()),
                SheetRow::Shortcut {
                    hotkey: "y".to_string(),
                    label: "Copy".to_string()
                },
            ]
        );
    }

    #[test]
    fn title_only_block_is_never_rendered() {
        let corpus = test_corpus();

        // Even when its title is explicitly visible.
        let rows = build_rows(&corpus, &only(&[id_of(&corpus, "Lone Title")]));
        assert!(rows.is_empty());

        let all = build_rows(&corpus, &Visibility::All);
        assert!(!all.contains(&SheetRow::Title("Lone Title".to_string())));
    }

    #[test]
    fn unknown_ids_have_no_effect() {
        let corpus = test_corpus();

        let rows = build_rows(&corpus, &only(&[9999]));

        assert!(rows.is_empty());
    }

    #[test]
    fn unmapped_entries_get_the_marker_label() {
        let mut sheet = Sheet::new();
        sheet.insert(
            "Misc".to_string(),
            vec![
                ShortcutDef {
                    name: "Start typing".to_string(),
                    hotkey: String::new(),
                    unmapped: true,
                },
                def("Quit", "q"),
            ],
        );
        let corpus = build_corpus(&sheet);

        let rows = build_rows(&corpus, &Visibility::All);

        match &rows[1] {
            SheetRow::Shortcut { hotkey, label } => {
                assert!(hotkey.is_empty());
                assert!(label.contains(UNMAPPED_MARKER));
                assert!(label.starts_with("Start typing"));
            }
            other => panic!("expected a shortcut row, got {other:?}"),
        }
        match &rows[2] {
            SheetRow::Shortcut { label, .. } => assert!(!label.contains(UNMAPPED_MARKER)),
            other => panic!("expected a shortcut row, got {other:?}"),
        }
    }

    #[test]
    fn single_body_match_renders_title_plus_entry() {
        // Corpus [[Nav, Up/k, Down/j]], visibility {Up}: candidate list is
        // [title, Up], length 2, not suppressed.
        let mut sheet = Sheet::new();
        sheet.insert(
            "Nav".to_string(),
            vec![def("Up", "k"), def("Down", "j")],
        );
        let corpus = build_corpus(&sheet);

        let rows = build_rows(&corpus, &only(&[id_of(&corpus, "Up")]));

        assert_eq!(
            rows,
            vec![
                SheetRow::Title("Nav".to_string()),
                SheetRow::Shortcut {
                    hotkey: "k".to_string(),
                    label: "Up".to_string()
                },
            ]
        );
    }
}
