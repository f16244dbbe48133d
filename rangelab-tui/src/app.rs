//! Application state — single-owner, main-thread only.
//!
//! The app is the slider's host container: it mounts and destroys the slider,
//! receives committed `range-select` events over a channel, and owns the one
//! shared tooltip.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{Local, NaiveDateTime};
use ratatui::layout::Rect;
use tracing::info;

use rangelab_core::{RangeSelect, RangeSlider, SliderError, SliderSettings, Thumb, Tooltip};

use crate::surface::TerminalSurface;
use crate::ui::{self, ScreenLayout};

/// Commit log capacity; oldest records are dropped first.
pub const MAX_COMMITS: usize = 200;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One committed selection, as received by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub timestamp: NaiveDateTime,
    pub event: RangeSelect,
}

pub struct AppState {
    pub settings: SliderSettings,
    pub slider: Option<RangeSlider<TerminalSurface>>,
    pub tooltip: Tooltip,
    /// Thumb under the pointer, for tooltip over/out tracking.
    pub hovered: Option<Thumb>,
    /// Newest first.
    pub commits: VecDeque<CommitRecord>,
    pub host_tx: Sender<RangeSelect>,
    pub host_rx: Receiver<RangeSelect>,
    pub status_message: Option<(String, StatusLevel)>,
    /// Last frame area, used to map mouse coordinates onto the layout.
    pub viewport: Rect,
    pub running: bool,
}

impl AppState {
    /// Build the host and mount a slider from `settings`.
    pub fn new(settings: SliderSettings, tooltip: Tooltip) -> Result<Self, SliderError> {
        let (host_tx, host_rx) = mpsc::channel();
        let mut app = Self {
            settings,
            slider: None,
            tooltip,
            hovered: None,
            commits: VecDeque::new(),
            host_tx,
            host_rx,
            status_message: None,
            viewport: Rect::default(),
            running: true,
        };
        app.mount_slider()?;
        Ok(app)
    }

    /// Destroy the current slider, if any, and mount a fresh one.
    pub fn mount_slider(&mut self) -> Result<(), SliderError> {
        self.destroy_slider();
        let surface = TerminalSurface::new(self.host_tx.clone());
        let slider = RangeSlider::new(self.settings.to_config(), surface)?;
        self.slider = Some(slider);
        self.set_status("Slider mounted");
        Ok(())
    }

    pub fn destroy_slider(&mut self) {
        if let Some(mut slider) = self.slider.take() {
            slider.destroy();
            self.hovered = None;
            self.tooltip.hide();
            self.set_warning("Slider destroyed — press r to remount");
        }
    }

    /// Pull committed events off the host channel into the log.
    pub fn drain_host_events(&mut self) {
        while let Ok(event) = self.host_rx.try_recv() {
            info!(from = event.from, to = event.to, "host received {}", RangeSelect::NAME);
            self.commits.push_front(CommitRecord {
                timestamp: Local::now().naive_local(),
                event,
            });
            self.commits.truncate(MAX_COMMITS);
            self.set_status(format!("Selected {:.0} – {:.0}", event.from.floor(), event.to.floor()));
        }
    }

    pub fn layout(&self) -> ScreenLayout {
        ui::layout(self.viewport)
    }

    /// Tooltip text for a thumb: its current formatted value.
    pub fn thumb_tooltip(&self, thumb: Thumb) -> Option<String> {
        let labels = self.slider.as_ref()?.labels();
        Some(match thumb {
            Thumb::Left => labels.from,
            Thumb::Right => labels.to,
        })
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
