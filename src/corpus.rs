use indexmap::IndexMap;
use serde::Deserialize;

pub type EntryId = u32;

/// One displayable item: either a category title or a shortcut.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub hotkey: String,
    pub is_title: bool,
    pub is_unmapped: bool,
}

/// A category group. Entry 0 is always the title entry.
#[derive(Debug, Clone)]
pub struct Block {
    pub entries: Vec<Entry>,
}

impl Block {
    pub fn title(&self) -> &Entry {
        &self.entries[0]
    }
}

/// The full sheet, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub blocks: Vec<Block>,
}

impl Corpus {
    /// All entries from all blocks, titles included, in corpus order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().flat_map(|block| block.entries.iter())
    }
}

// -- Corpus construction --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDef {
    pub name: String,
    #[serde(default)]
    pub hotkey: String,
    #[serde(default)]
    pub unmapped: bool,
}

/// Sheet definition as loaded from disk: category title -> shortcuts,
/// in file order.
pub type Sheet = IndexMap<String, Vec<ShortcutDef>>;

/// Builds the corpus from a sheet definition, assigning ids that are
/// unique across the whole corpus.
pub fn build_corpus(sheet: &Sheet) -> Corpus {
    let mut next_id: EntryId = 0;
    let mut blocks = Vec::with_capacity(sheet.len());
    for (category, shortcuts) in sheet {
        let mut entries = Vec::with_capacity(shortcuts.len() + 1);
        entries.push(Entry {
            id: next_id,
            name: category.clone(),
            hotkey: String::new(),
            is_title: true,
            is_unmapped: false,
        });
        next_id += 1;
        for def in shortcuts {
            entries.push(Entry {
                id: next_id,
                name: def.name.clone(),
                hotkey: def.hotkey.clone(),
                is_title: false,
                is_unmapped: def.unmapped,
            });
            next_id += 1;
        }
        blocks.push(Block { entries });
    }
    Corpus { blocks }
}
