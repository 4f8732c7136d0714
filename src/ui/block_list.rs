use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::app::AppState;
use crate::sheet::SheetRow;

const PRIMARY: Color = Color::Rgb(0xD9, 0x77, 0x57);
const DIM: Color = Color::Rgb(0x66, 0x66, 0x66);
const HOTKEY: Color = Color::Rgb(0xE5, 0xC0, 0x7B);
const TEXT: Color = Color::Rgb(0xCC, 0xCC, 0xCC);

const HOTKEY_COLUMN_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    state.sheet_area_height = area.height;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Shortcuts ")
        .border_style(Style::default().fg(PRIMARY));
    let inner = block.inner(area);

    if state.rows.is_empty() {
        state.sheet_content_height = 0;
        frame.render_widget(block, area);
        let text = Line::from(" No matching shortcuts").fg(DIM);
        frame.render_widget(text, inner);
        return;
    }

    let lines: Vec<Line> = state.rows.iter().map(row_line).collect();
    let content_height = lines.len() as u16;
    state.sheet_content_height = content_height;

    // Content may have shrunk since the offset was set.
    let max_scroll = content_height.saturating_sub(inner.height);
    state.scroll_offset = state.scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((state.scroll_offset, 0));
    frame.render_widget(paragraph, area);

    if content_height > inner.height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None);
        let mut scrollbar_state =
            ScrollbarState::new(content_height.saturating_sub(inner.height) as usize)
                .position(state.scroll_offset as usize);
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn row_line(row: &SheetRow) -> Line<'_> {
    match row {
        SheetRow::Title(name) => Line::from(Span::styled(
            name.as_str(),
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        )),
        SheetRow::Shortcut { hotkey, label } => Line::from(vec![
            Span::styled(
                format!("{:<width$}", hotkey, width = HOTKEY_COLUMN_WIDTH),
                Style::default().fg(HOTKEY),
            ),
            Span::styled(label.as_str(), Style::default().fg(TEXT)),
        ]),
        SheetRow::Blank => Line::from(""),
    }
}
