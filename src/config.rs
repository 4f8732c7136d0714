use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::corpus::{Sheet, ShortcutDef};

fn default_sheet_path() -> PathBuf {
    dirs::home_dir()
        .expect("home directory not found")
        .join(".config/keysheet/sheet.json")
}

/// Loads the sheet definition.
///
/// An explicitly requested path must load; the default path falls back to
/// the built-in sheet when the file does not exist, but a file that exists
/// and fails to parse is still an error.
pub fn load_sheet(path: Option<&Path>) -> Result<Sheet> {
    match path {
        Some(path) => parse_sheet_file(path),
        None => {
            let path = default_sheet_path();
            if path.exists() {
                parse_sheet_file(&path)
            } else {
                Ok(builtin_sheet())
            }
        }
    }
}

fn parse_sheet_file(path: &Path) -> Result<Sheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading sheet {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing sheet {}", path.display()))
}

fn def(name: &str, hotkey: &str) -> ShortcutDef {
    ShortcutDef {
        name: name.to_string(),
        hotkey: hotkey.to_string(),
        unmapped: false,
    }
}

/// keysheet's own bindings, shown when no sheet file is present.
pub fn builtin_sheet() -> Sheet {
    let mut sheet = Sheet::new();
    sheet.insert(
        "Search".to_string(),
        vec![
            ShortcutDef {
                name: "Filter shortcuts".to_string(),
                hotkey: String::new(),
                unmapped: true,
            },
            def("Clear query", "esc"),
            def("Delete previous word", "ctrl+w"),
            def("Start of query", "ctrl+a"),
            def("End of query", "ctrl+e"),
        ],
    );
    sheet.insert(
        "Scrolling".to_string(),
        vec![
            def("Scroll down", "ctrl+j"),
            def("Scroll up", "ctrl+k"),
            def("Half page down", "ctrl+d"),
            def("Half page up", "ctrl+u"),
        ],
    );
    sheet.insert(
        "General".to_string(),
        vec![def("Quit", "ctrl+c"), def("Quit (empty query)", "esc")],
    );
    sheet
}
