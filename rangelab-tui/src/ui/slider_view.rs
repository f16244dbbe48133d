//! Slider panel — value labels on either side of a one-row track.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::surface::SliderView;
use crate::theme;
use crate::ui::ScreenLayout;

const THUMB: &str = "◆";
const PROGRESS: &str = "━";
const RAIL: &str = "─";

pub fn render(f: &mut Frame, screen: &ScreenLayout, app: &AppState) {
    let view = app.slider.as_ref().and_then(|s| s.renderer().view());
    let dragging = view.as_ref().is_some_and(|v| v.dragging);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(dragging))
        .title(" Range ")
        .title_style(theme::accent_bold());
    let inner = block.inner(screen.slider_panel);
    f.render_widget(block, screen.slider_panel);

    let Some(view) = view else {
        let msg = Paragraph::new(Span::styled(
            "No slider mounted. Press r to mount one.",
            theme::muted(),
        ))
        .alignment(Alignment::Center);
        f.render_widget(msg, inner);
        return;
    };

    f.render_widget(
        Paragraph::new(Span::styled(view.from_label.as_str(), theme::neutral()))
            .alignment(Alignment::Right),
        screen.from_label,
    );
    f.render_widget(
        Paragraph::new(Span::styled(view.to_label.as_str(), theme::neutral())),
        screen.to_label,
    );
    f.render_widget(
        Paragraph::new(track_line(&view, screen.track.width)),
        screen.track,
    );
}

/// Column of a percentage on a track `width` cells wide.
pub fn column_at(percent: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last = f64::from(width - 1);
    (percent.clamp(0.0, 100.0) / 100.0 * last).round() as u16
}

/// One row of track: rail, highlighted progress, and the two thumbs.
pub fn track_line(view: &SliderView, width: u16) -> Line<'static> {
    let left = column_at(view.thumb_left, width);
    let right = column_at(view.thumb_right, width);
    let progress_start = column_at(view.progress_left, width);
    let progress_end = column_at(100.0 - view.progress_right, width);

    let spans: Vec<Span<'static>> = (0..width)
        .map(|col| {
            if col == left || col == right {
                Span::styled(THUMB, theme::thumb(view.dragging))
            } else if col >= progress_start && col <= progress_end {
                Span::styled(PROGRESS, theme::accent())
            } else {
                Span::styled(RAIL, theme::muted())
            }
        })
        .collect();
    Line::from(spans)
}
