//! Overlays drawn above every panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph};

use rangelab_core::Tooltip;

use crate::theme;

/// Where a tooltip of `width` cells lands, kept inside `area`.
pub fn tooltip_rect(tooltip: &Tooltip, width: u16, area: Rect) -> Option<Rect> {
    let pos = tooltip.position()?;
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let width = width.min(area.width);
    let max_x = area.right().saturating_sub(width);
    let max_y = area.bottom().saturating_sub(1);
    let x = (pos.x.max(0.0) as u16).clamp(area.x, max_x);
    let y = (pos.y.max(0.0) as u16).clamp(area.y, max_y);
    Some(Rect::new(x, y, width, 1))
}

/// The shared tooltip, if visible and positioned.
pub fn render_tooltip(f: &mut Frame, area: Rect, tooltip: &Tooltip) {
    let Some(message) = tooltip.message() else {
        return;
    };
    let text = format!(" {message} ");
    let span = Span::styled(text, theme::tooltip());
    let Some(rect) = tooltip_rect(tooltip, span.width() as u16, area) else {
        return;
    };
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(span), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_tooltip_has_no_rect() {
        let t = Tooltip::new();
        assert_eq!(tooltip_rect(&t, 5, Rect::new(0, 0, 80, 24)), None);
    }

    #[test]
    fn rect_is_clamped_into_area() {
        let mut t = Tooltip::new();
        t.show("800 ₽");
        t.move_to(75.0, 20.0); // lands at (85, 30)
        let rect = tooltip_rect(&t, 7, Rect::new(0, 0, 80, 24)).unwrap();
        assert_eq!(rect, Rect::new(73, 23, 7, 1));
    }

    #[test]
    fn rect_follows_pointer_offset() {
        let mut t = Tooltip::new();
        t.show("x");
        t.move_to(3.0, 2.0);
        let rect = tooltip_rect(&t, 3, Rect::new(0, 0, 80, 24)).unwrap();
        assert_eq!(rect, Rect::new(13, 12, 3, 1));
    }
}
