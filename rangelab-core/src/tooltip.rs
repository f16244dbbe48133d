//! Tooltip — one shared instance, created by the host and passed explicitly.
//!
//! Targets carry an optional tooltip message. Pointer-over a target with a
//! message shows it, pointer-out hides it, and while visible the tooltip
//! follows the pointer at a fixed offset.

use tracing::debug;

/// Offset between the pointer and the tooltip's top-left corner.
pub const TOOLTIP_GAP: f64 = 10.0;

/// Pointer input relevant to the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipEvent<'a> {
    /// Pointer entered a target. `message` is the target's tooltip, if any.
    Over { message: Option<&'a str> },
    /// Pointer left a target.
    Out { message: Option<&'a str> },
    Move { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    message: Option<String>,
    position: Option<TooltipPosition>,
    destroyed: bool,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: TooltipEvent<'_>) {
        if self.destroyed {
            return;
        }
        match event {
            TooltipEvent::Over { message: Some(message) } => self.show(message),
            TooltipEvent::Out { message: Some(_) } => self.hide(),
            TooltipEvent::Move { x, y } => self.move_to(x, y),
            TooltipEvent::Over { message: None } | TooltipEvent::Out { message: None } => {}
        }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        if self.destroyed {
            return;
        }
        let message = message.into();
        debug!(%message, "tooltip shown");
        self.message = Some(message);
    }

    /// Clear the message and forget the last position.
    pub fn hide(&mut self) {
        self.message = None;
        self.position = None;
    }

    /// Follow the pointer. Only tracked while visible.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.message.is_some() {
            self.position = Some(TooltipPosition {
                x: x + TOOLTIP_GAP,
                y: y + TOOLTIP_GAP,
            });
        }
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn position(&self) -> Option<TooltipPosition> {
        self.position
    }

    /// Hide and stop reacting to events.
    pub fn destroy(&mut self) {
        self.hide();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
