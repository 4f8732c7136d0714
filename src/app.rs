use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use std::path::PathBuf;

use crate::config;
use crate::corpus::{build_corpus, Corpus};
use crate::filter::FilterEngine;
use crate::search::{MatchIndex, SearchConfig};
use crate::sheet::{build_rows, SheetRow};
use crate::ui;

const SCROLL_STEP: u16 = 2;

pub struct AppState {
    pub should_quit: bool,
    pub corpus: Corpus,
    pub match_index: MatchIndex,
    pub filter: FilterEngine,
    pub query: String,
    pub query_cursor: usize,
    pub rows: Vec<SheetRow>,
    pub scroll_offset: u16,
    pub sheet_content_height: u16,
    pub sheet_area_height: u16,
}

impl AppState {
    pub fn new(corpus: Corpus) -> Self {
        let match_index = MatchIndex::new(&corpus, SearchConfig::default());
        let filter = FilterEngine::new(&corpus);
        let mut state = AppState {
            should_quit: false,
            corpus,
            match_index,
            filter,
            query: String::new(),
            query_cursor: 0,
            rows: Vec::new(),
            scroll_offset: 0,
            sheet_content_height: 0,
            sheet_area_height: 0,
        };
        refresh_rows(&mut state);
        state
    }
}

pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    sheet_path: Option<PathBuf>,
) -> Result<()> {
    let sheet = config::load_sheet(sheet_path.as_deref())?;
    let mut state = AppState::new(build_corpus(&sheet));

    let mut event_stream = EventStream::new();

    // Initial render
    terminal.draw(|frame| ui::render(frame, &mut state))?;

    while let Some(Ok(event)) = event_stream.next().await {
        if let Event::Key(key) = event {
            handle_key_event(&mut state, key);
        }

        terminal.draw(|frame| ui::render(frame, &mut state))?;

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Recomputes visibility from the full current query and rebuilds the row
/// list from scratch. Runs synchronously on every query change.
pub fn refresh_rows(state: &mut AppState) {
    let visibility =
        state
            .filter
            .compute_visibility(&state.corpus, &mut state.match_index, &state.query);
    state.rows = build_rows(&state.corpus, &visibility);
    state.scroll_offset = 0;
}

pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        (KeyCode::Esc, _) => {
            if state.query.is_empty() {
                state.should_quit = true;
            } else {
                state.query.clear();
                state.query_cursor = 0;
                refresh_rows(state);
            }
        }

        // Scroll chords are consumed here and never reach the query.
        (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            scroll_down(state, SCROLL_STEP);
        }
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            scroll_up(state, SCROLL_STEP);
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            let amount = half_page(state);
            scroll_down(state, amount);
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let amount = half_page(state);
            scroll_up(state, amount);
        }

        (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
            state.query_cursor = 0;
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            state.query_cursor = state.query.chars().count();
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            if delete_word_back(state) {
                refresh_rows(state);
            }
        }
        (KeyCode::Left, _) => {
            if state.query_cursor > 0 {
                state.query_cursor -= 1;
            }
        }
        (KeyCode::Right, _) => {
            if state.query_cursor < state.query.chars().count() {
                state.query_cursor += 1;
            }
        }
        (KeyCode::Backspace, _) => {
            if delete_char_back(state) {
                refresh_rows(state);
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            insert_char(state, c);
            refresh_rows(state);
        }
        _ => {}
    }
}

// -- Query editing --

fn byte_offset(query: &str, char_pos: usize) -> usize {
    query
        .char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(query.len())
}

fn insert_char(state: &mut AppState, c: char) {
    let at = byte_offset(&state.query, state.query_cursor);
    state.query.insert(at, c);
    state.query_cursor += 1;
}

fn delete_char_back(state: &mut AppState) -> bool {
    if state.query_cursor == 0 {
        return false;
    }
    let start = byte_offset(&state.query, state.query_cursor - 1);
    let end = byte_offset(&state.query, state.query_cursor);
    state.query.drain(start..end);
    state.query_cursor -= 1;
    true
}

fn delete_word_back(state: &mut AppState) -> bool {
    let chars: Vec<char> = state.query.chars().collect();
    let mut pos = state.query_cursor;
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    if pos == state.query_cursor {
        return false;
    }
    let start = byte_offset(&state.query, pos);
    let end = byte_offset(&state.query, state.query_cursor);
    state.query.drain(start..end);
    state.query_cursor = pos;
    true
}

// -- Scrolling --

fn viewport_height(state: &AppState) -> u16 {
    // Sheet area minus its border rows.
    state.sheet_area_height.saturating_sub(2)
}

fn half_page(state: &AppState) -> u16 {
    (viewport_height(state) / 2).max(1)
}

fn scroll_down(state: &mut AppState, amount: u16) {
    let max = state
        .sheet_content_height
        .saturating_sub(viewport_height(state));
    state.scroll_offset = state.scroll_offset.saturating_add(amount).min(max);
}

fn scroll_up(state: &mut AppState, amount: u16) {
    state.scroll_offset = state.scroll_offset.saturating_sub(amount);
}
