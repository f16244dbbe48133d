//! Terminal surface — the `Renderer` the slider draws into.
//!
//! The slider writes text, percent styles and classes into an in-memory tree.
//! Each frame the UI reads that tree back as a `SliderView`. Dispatched events
//! travel to the host container (the app) over a channel.

use std::sync::mpsc::Sender;

use tracing::warn;

use rangelab_core::mapping::parse_css_percent;
use rangelab_core::slider::DRAGGING_CLASS;
use rangelab_core::{MemoryRenderer, RangeSelect, Renderer, SliderPart, StyleProp};

/// Everything the UI needs to draw one frame of the slider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderView {
    pub from_label: String,
    pub to_label: String,
    pub thumb_left: f64,
    pub thumb_right: f64,
    pub progress_left: f64,
    pub progress_right: f64,
    pub dragging: bool,
}

#[derive(Debug)]
pub struct TerminalSurface {
    tree: MemoryRenderer,
    host: Sender<RangeSelect>,
}

impl TerminalSurface {
    pub fn new(host: Sender<RangeSelect>) -> Self {
        Self {
            tree: MemoryRenderer::new(),
            host,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.tree.is_mounted()
    }

    fn percent(&self, part: SliderPart, prop: StyleProp) -> f64 {
        self.tree
            .style(part, prop)
            .and_then(parse_css_percent)
            .unwrap_or(0.0)
    }

    /// Read the rendered tree back. `None` once unmounted.
    pub fn view(&self) -> Option<SliderView> {
        if !self.tree.is_mounted() {
            return None;
        }
        Some(SliderView {
            from_label: self.tree.text(SliderPart::From).unwrap_or_default().to_string(),
            to_label: self.tree.text(SliderPart::To).unwrap_or_default().to_string(),
            thumb_left: self.percent(SliderPart::ThumbLeft, StyleProp::Left),
            thumb_right: self.percent(SliderPart::ThumbRight, StyleProp::Left),
            progress_left: self.percent(SliderPart::Progress, StyleProp::Left),
            progress_right: self.percent(SliderPart::Progress, StyleProp::Right),
            dragging: self.tree.has_class(SliderPart::Root, DRAGGING_CLASS),
        })
    }
}

impl Renderer for TerminalSurface {
    fn mount(&mut self, parts: &[SliderPart]) {
        self.tree.mount(parts);
    }

    fn set_text(&mut self, part: SliderPart, text: &str) {
        self.tree.set_text(part, text);
    }

    fn set_style(&mut self, part: SliderPart, prop: StyleProp, value: &str) {
        self.tree.set_style(part, prop, value);
    }

    fn add_class(&mut self, part: SliderPart, class: &str) {
        self.tree.add_class(part, class);
    }

    fn remove_class(&mut self, part: SliderPart, class: &str) {
        self.tree.remove_class(part, class);
    }

    fn dispatch(&mut self, event: &RangeSelect) {
        if !self.tree.is_mounted() {
            return;
        }
        if self.host.send(*event).is_err() {
            warn!(from = event.from, to = event.to, "host container gone, event dropped");
        }
    }

    fn unmount(&mut self) {
        self.tree.unmount();
    }
}
