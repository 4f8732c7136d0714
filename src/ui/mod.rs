use ratatui::prelude::*;

use crate::app::AppState;

pub mod block_list;
pub mod search_bar;

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(frame.area());
    search_bar::render(frame, chunks[0], state);
    block_list::render(frame, chunks[1], state);
}
