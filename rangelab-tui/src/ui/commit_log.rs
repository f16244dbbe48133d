//! Commit log — every `range-select` the host received, newest first.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use rangelab_core::RangeSelect;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" Commits ({}) [c]clear ", app.commits.len()))
        .title_style(theme::neutral());

    let items: Vec<ListItem> = app
        .commits
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    record.timestamp.format("%H:%M:%S").to_string(),
                    theme::muted(),
                ),
                Span::raw("  "),
                Span::styled(RangeSelect::NAME, theme::positive()),
                Span::raw("  "),
                Span::styled(
                    format!("from {}  to {}", record.event.from, record.event.to),
                    theme::text(),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
