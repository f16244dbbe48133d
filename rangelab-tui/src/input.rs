//! Input dispatch — keys drive the host, mouse events drive the slider.
//!
//! Mouse mapping onto the slider's pointer protocol:
//! - left press on a thumb → pointer down, with the track as laid out now
//! - left drag anywhere → pointer move
//! - left release anywhere → pointer up (the commit arrives on the host channel)
//!
//! Every mouse event also feeds the shared tooltip: hovering a thumb shows its
//! value, leaving hides it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::error;

use rangelab_core::{Thumb, TooltipEvent};

use crate::app::AppState;

/// How far from a thumb, in cells, a press still grabs it.
pub const THUMB_TOLERANCE: f64 = 1.0;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('r') => {
            if let Err(err) = app.mount_slider() {
                error!(%err, "remount failed");
                app.set_error(format!("Remount failed: {err}"));
            }
        }
        KeyCode::Char('x') => app.destroy_slider(),
        KeyCode::Char('c') => {
            app.commits.clear();
            app.set_status("Commit log cleared");
        }
        _ => {}
    }
}

/// Handle a mouse event.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let layout = app.layout();
    let geometry = layout.track_geometry();
    let x = f64::from(mouse.column);

    if let Some(slider) = app.slider.as_mut() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if layout.on_track_row(mouse.row) => {
                if let Some(thumb) = slider.thumb_at(x, &geometry, THUMB_TOLERANCE) {
                    slider.pointer_down(thumb, geometry);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                slider.pointer_move(x);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                slider.pointer_up();
            }
            _ => {}
        }
    }

    update_hover(app, mouse.column, mouse.row);
}

/// Thumb under the pointer. While dragging, the held thumb.
fn hovered_thumb(app: &AppState, column: u16, row: u16) -> Option<Thumb> {
    let slider = app.slider.as_ref()?;
    if let Some(thumb) = slider.active_thumb() {
        return Some(thumb);
    }
    let layout = app.layout();
    if !layout.on_track_row(row) {
        return None;
    }
    slider.thumb_at(f64::from(column), &layout.track_geometry(), 0.5)
}

fn update_hover(app: &mut AppState, column: u16, row: u16) {
    let target = hovered_thumb(app, column, row);
    let message = target.and_then(|t| app.thumb_tooltip(t));

    if target != app.hovered {
        if app.hovered.is_some() {
            let leaving = app.tooltip.message().map(str::to_owned);
            app.tooltip.handle(TooltipEvent::Out { message: leaving.as_deref() });
        }
        app.hovered = target;
        app.tooltip.handle(TooltipEvent::Over { message: message.as_deref() });
    } else if let Some(message) = message {
        // The value under a held thumb changes as it moves.
        app.tooltip.show(message);
    }

    app.tooltip.handle(TooltipEvent::Move {
        x: f64::from(column),
        y: f64::from(row),
    });
}
