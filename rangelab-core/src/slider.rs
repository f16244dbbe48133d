//! Range slider — the drag state machine.
//!
//! States:
//! - `Idle` — pointer moves and releases are ignored.
//! - `Dragging` — a thumb is held; the track geometry captured at press time
//!   converts every move into a value.
//!
//! Transitions:
//! - press on a thumb: `Idle → Dragging` (ignored while already dragging)
//! - move: `Dragging → Dragging`, selection updated and redrawn synchronously
//! - release: `Dragging → Idle`, one `RangeSelect` dispatched to the host
//!
//! The move/release handling lives in `DragState`, which only exists while a
//! drag is active; `destroy` drops it along with the mounted tree.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::{Formatter, SliderConfig};
use crate::domain::{Bounds, RangeSelect, Selection, SliderError, Thumb, TrackGeometry};
use crate::mapping::{css_percent, percent, value_at, Percents};
use crate::render::{Renderer, SliderPart, StyleProp};

/// Class on the root while a thumb is held.
pub const DRAGGING_CLASS: &str = "range-slider_dragging";

/// Per-drag state: the held thumb and the geometry measured at press time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub thumb: Thumb,
    pub geometry: TrackGeometry,
}

/// Where the slider is in its drag protocol.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Input delivered by the pointer surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press on `thumb`; `geometry` is the track as currently laid out.
    Down { thumb: Thumb, geometry: TrackGeometry },
    /// Pointer moved to absolute `x`.
    Move { x: f64 },
    Up,
}

/// Formatted `from` and `to` labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub from: String,
    pub to: String,
}

/// Two-thumb slider over `[min, max]`.
pub struct RangeSlider<R: Renderer> {
    bounds: Bounds,
    selection: Selection,
    format_value: Formatter,
    phase: DragPhase,
    renderer: R,
    destroyed: bool,
}

impl<R: Renderer> RangeSlider<R> {
    /// Validate `config`, mount the tree into `renderer` and draw the
    /// initial selection.
    pub fn new(config: SliderConfig, renderer: R) -> Result<Self, SliderError> {
        let bounds = Bounds::new(config.min, config.max)?;
        let selection = match config.selected {
            Some(s) => s.validate(&bounds)?,
            None => Selection::full(&bounds),
        };

        let mut slider = Self {
            bounds,
            selection,
            format_value: config.format_value,
            phase: DragPhase::Idle,
            renderer,
            destroyed: false,
        };
        slider.mount();
        slider.update();
        info!(
            min = bounds.min(),
            max = bounds.max(),
            from = selection.from,
            to = selection.to,
            "range slider mounted"
        );
        Ok(slider)
    }

    fn mount(&mut self) {
        self.renderer.mount(&SliderPart::ALL);
        for part in SliderPart::ALL {
            if let Some(class) = part.class() {
                self.renderer.add_class(part, class);
            }
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    pub fn active_thumb(&self) -> Option<Thumb> {
        match self.phase {
            DragPhase::Dragging(drag) => Some(drag.thumb),
            DragPhase::Idle => None,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn percents(&self) -> Percents {
        Percents::of(&self.bounds, &self.selection)
    }

    pub fn labels(&self) -> Labels {
        Labels {
            from: (self.format_value)(self.selection.from.floor()),
            to: (self.format_value)(self.selection.to.floor()),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    // ── Pointer protocol ───────────────────────────────────────────────

    /// Feed one pointer event. Returns the committed selection on release.
    pub fn handle(&mut self, event: PointerEvent) -> Option<RangeSelect> {
        match event {
            PointerEvent::Down { thumb, geometry } => {
                self.pointer_down(thumb, geometry);
                None
            }
            PointerEvent::Move { x } => {
                self.pointer_move(x);
                None
            }
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Start dragging `thumb`. Returns false if a drag is already active,
    /// the slider has been destroyed, or `geometry` is not finite.
    pub fn pointer_down(&mut self, thumb: Thumb, geometry: TrackGeometry) -> bool {
        if self.destroyed || self.is_dragging() {
            return false;
        }
        if !geometry.is_finite() {
            warn!(left = geometry.left, width = geometry.width, "press with non-finite track ignored");
            return false;
        }
        self.phase = DragPhase::Dragging(DragState { thumb, geometry });
        self.renderer.add_class(SliderPart::Root, DRAGGING_CLASS);
        debug!(thumb = thumb.label(), left = geometry.left, width = geometry.width, "drag started");
        true
    }

    /// Move the held thumb to absolute `x`. Returns false when idle or when
    /// `x` is NaN.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        let DragPhase::Dragging(drag) = self.phase else {
            return false;
        };
        if x.is_nan() {
            return false;
        }
        let value = value_at(&self.bounds, &drag.geometry, x);

        match drag.thumb {
            Thumb::Left => {
                self.selection.from = if value >= self.selection.to {
                    self.selection.to
                } else {
                    value
                };
            }
            Thumb::Right => {
                self.selection.to = if value <= self.selection.from {
                    self.selection.from
                } else {
                    value
                };
            }
        }

        self.update();
        true
    }

    /// Finish the drag and dispatch the committed selection.
    pub fn pointer_up(&mut self) -> Option<RangeSelect> {
        let DragPhase::Dragging(drag) = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;
        self.renderer.remove_class(SliderPart::Root, DRAGGING_CLASS);

        let event = RangeSelect::from(self.selection);
        self.renderer.dispatch(&event);
        info!(
            thumb = drag.thumb.label(),
            from = event.from,
            to = event.to,
            "{}",
            RangeSelect::NAME
        );
        Some(event)
    }

    /// Which thumb sits at absolute `x` on a track laid out as `geometry`,
    /// within `tolerance`.
    ///
    /// When both thumbs share a position the left one wins, unless the pointer
    /// is right of it or the pair is pinned to the left edge.
    pub fn thumb_at(&self, x: f64, geometry: &TrackGeometry, tolerance: f64) -> Option<Thumb> {
        let left_x = geometry.x_at_percent(percent(&self.bounds, self.selection.from));
        let right_x = geometry.x_at_percent(percent(&self.bounds, self.selection.to));
        let dl = (x - left_x).abs();
        let dr = (x - right_x).abs();

        if dl > tolerance && dr > tolerance {
            return None;
        }
        if dl < dr {
            Some(Thumb::Left)
        } else if dr < dl {
            Some(Thumb::Right)
        } else if x > left_x || self.selection.from <= self.bounds.min() {
            Some(Thumb::Right)
        } else {
            Some(Thumb::Left)
        }
    }

    // ── Display ────────────────────────────────────────────────────────

    /// Redraw labels, thumbs and progress from the current selection.
    pub fn update(&mut self) {
        let labels = self.labels();
        let p = self.percents();

        self.renderer.set_text(SliderPart::From, &labels.from);
        self.renderer.set_text(SliderPart::To, &labels.to);
        self.renderer
            .set_style(SliderPart::ThumbLeft, StyleProp::Left, &css_percent(p.thumb_left));
        self.renderer
            .set_style(SliderPart::ThumbRight, StyleProp::Left, &css_percent(p.thumb_right));
        self.renderer
            .set_style(SliderPart::Progress, StyleProp::Left, &css_percent(p.progress_left));
        self.renderer
            .set_style(SliderPart::Progress, StyleProp::Right, &css_percent(p.progress_right));
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Detach from the container and drop any active drag. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if self.is_dragging() {
            debug!("destroyed mid-drag, drag discarded");
        }
        self.phase = DragPhase::Idle;
        self.renderer.unmount();
        self.destroyed = true;
        info!("range slider destroyed");
    }
}

impl<R: Renderer + fmt::Debug> fmt::Debug for RangeSlider<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("bounds", &self.bounds)
            .field("selection", &self.selection)
            .field("phase", &self.phase)
            .field("destroyed", &self.destroyed)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
