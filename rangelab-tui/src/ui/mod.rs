//! Top-level UI layout — header, slider panel, commit log, status bar.

pub mod commit_log;
pub mod overlays;
pub mod slider_view;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use rangelab_core::TrackGeometry;

use crate::app::AppState;
use crate::theme;

/// Width reserved for each value label.
pub const LABEL_WIDTH: u16 = 12;

/// Screen regions. Shared by drawing and mouse hit-testing so both agree on
/// where the track is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub slider_panel: Rect,
    pub from_label: Rect,
    pub track: Rect,
    pub to_label: Rect,
    pub log: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    /// Track geometry in terminal cells. The last column is 100%.
    pub fn track_geometry(&self) -> TrackGeometry {
        TrackGeometry::new(
            f64::from(self.track.x),
            f64::from(self.track.width.saturating_sub(1)),
        )
    }

    pub fn on_track_row(&self, row: u16) -> bool {
        self.track.height > 0 && row == self.track.y
    }
}

/// Split `area` into the screen regions.
pub fn layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let slider_panel = rows[1];
    let inner = Block::default().borders(Borders::ALL).inner(slider_panel);
    let track_row = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: inner.height.min(1),
    };

    // [from label] gap [track] gap [to label]; labels shrink first on narrow screens.
    let label = LABEL_WIDTH.min(track_row.width.saturating_sub(3) / 2);
    let gaps = if label > 0 { 2 } else { 0 };
    let track_width = track_row.width.saturating_sub(label * 2 + gaps);
    let from_label = Rect { width: label, ..track_row };
    let track = Rect {
        x: track_row.x + label + gaps / 2,
        width: track_width,
        ..track_row
    };
    let to_label = Rect {
        x: track.x + track_width + gaps / 2,
        width: label,
        ..track_row
    };

    ScreenLayout {
        header: rows[0],
        slider_panel,
        from_label,
        track,
        to_label,
        log: rows[2],
        status: rows[3],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let screen = layout(area);

    let header = Line::from(vec![
        Span::styled(" RangeLab ", theme::accent_bold()),
        Span::styled("drag a thumb with the mouse", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(header), screen.header);

    slider_view::render(f, &screen, app);
    commit_log::render(f, screen.log, app);
    status_bar::render(f, screen.status, app);

    overlays::render_tooltip(f, area, &app.tooltip);
}
