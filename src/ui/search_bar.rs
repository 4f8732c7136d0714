use ratatui::prelude::*;

use crate::app::AppState;

const PROMPT: Color = Color::Rgb(0x88, 0x88, 0x88);
const PLACEHOLDER: Color = Color::Rgb(0x66, 0x66, 0x66);

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans = if state.query.is_empty() {
        vec![
            Span::styled("/", Style::default().fg(PROMPT)),
            Span::styled("Type to filter shortcuts...", Style::default().fg(PLACEHOLDER)),
        ]
    } else {
        vec![
            Span::styled("/", Style::default().fg(PROMPT)),
            Span::styled(state.query.as_str(), Style::default().fg(Color::White)),
        ]
    };
    frame.render_widget(Line::from(spans), area);

    let cursor_x = area.x + 1 + state.query_cursor as u16;
    frame.set_cursor_position((cursor_x, area.y));
}
