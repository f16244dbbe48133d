//! Render capability — a named-part tree with text, style and class setters.
//!
//! The slider never touches a concrete surface. It drives a `Renderer`, which
//! a host implements for its own output (the terminal UI, a test fake, ...).
//! `MemoryRenderer` keeps the whole tree in memory and records dispatched
//! events; it is the reference implementation.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::RangeSelect;

/// Named parts of the slider tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SliderPart {
    Root,
    From,
    Inner,
    Progress,
    ThumbLeft,
    ThumbRight,
    To,
}

impl SliderPart {
    /// Every part, in document order.
    pub const ALL: [SliderPart; 7] = [
        SliderPart::Root,
        SliderPart::From,
        SliderPart::Inner,
        SliderPart::Progress,
        SliderPart::ThumbLeft,
        SliderPart::ThumbRight,
        SliderPart::To,
    ];

    /// Structural class applied at mount time.
    pub fn class(self) -> Option<&'static str> {
        match self {
            SliderPart::Root => Some("range-slider"),
            SliderPart::Inner => Some("range-slider__inner"),
            SliderPart::Progress => Some("range-slider__progress"),
            SliderPart::ThumbLeft => Some("range-slider__thumb-left"),
            SliderPart::ThumbRight => Some("range-slider__thumb-right"),
            SliderPart::From | SliderPart::To => None,
        }
    }
}

/// Style properties the slider sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProp {
    Left,
    Right,
}

impl StyleProp {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleProp::Left => "left",
            StyleProp::Right => "right",
        }
    }
}

/// Minimal surface the slider renders into.
pub trait Renderer {
    /// Build the given parts and attach the root to its container.
    fn mount(&mut self, parts: &[SliderPart]);

    fn set_text(&mut self, part: SliderPart, text: &str);

    fn set_style(&mut self, part: SliderPart, prop: StyleProp, value: &str);

    fn add_class(&mut self, part: SliderPart, class: &str);

    fn remove_class(&mut self, part: SliderPart, class: &str);

    /// Deliver an event from the root to the host container.
    fn dispatch(&mut self, event: &RangeSelect);

    /// Detach the root from its container.
    fn unmount(&mut self);
}

/// Rendered state of one part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeState {
    pub text: String,
    pub styles: BTreeMap<StyleProp, String>,
    pub classes: BTreeSet<String>,
}

/// In-memory renderer. Records the tree and every dispatched event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRenderer {
    mounted: bool,
    nodes: BTreeMap<SliderPart, NodeState>,
    dispatched: Vec<RangeSelect>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn nodes(&self) -> &BTreeMap<SliderPart, NodeState> {
        &self.nodes
    }

    pub fn node(&self, part: SliderPart) -> Option<&NodeState> {
        self.nodes.get(&part)
    }

    pub fn text(&self, part: SliderPart) -> Option<&str> {
        self.node(part).map(|n| n.text.as_str())
    }

    pub fn style(&self, part: SliderPart, prop: StyleProp) -> Option<&str> {
        self.node(part)
            .and_then(|n| n.styles.get(&prop))
            .map(String::as_str)
    }

    pub fn has_class(&self, part: SliderPart, class: &str) -> bool {
        self.node(part).is_some_and(|n| n.classes.contains(class))
    }

    /// Events dispatched so far, oldest first.
    pub fn dispatched(&self) -> &[RangeSelect] {
        &self.dispatched
    }

    pub fn take_dispatched(&mut self) -> Vec<RangeSelect> {
        std::mem::take(&mut self.dispatched)
    }

    fn node_mut(&mut self, part: SliderPart) -> &mut NodeState {
        self.nodes.entry(part).or_default()
    }
}

impl Renderer for MemoryRenderer {
    fn mount(&mut self, parts: &[SliderPart]) {
        self.nodes = parts.iter().map(|&p| (p, NodeState::default())).collect();
        self.mounted = true;
    }

    fn set_text(&mut self, part: SliderPart, text: &str) {
        let node = self.node_mut(part);
        node.text.clear();
        node.text.push_str(text);
    }

    fn set_style(&mut self, part: SliderPart, prop: StyleProp, value: &str) {
        self.node_mut(part).styles.insert(prop, value.to_string());
    }

    fn add_class(&mut self, part: SliderPart, class: &str) {
        self.node_mut(part).classes.insert(class.to_string());
    }

    fn remove_class(&mut self, part: SliderPart, class: &str) {
        if let Some(node) = self.nodes.get_mut(&part) {
            node.classes.remove(class);
        }
    }

    fn dispatch(&mut self, event: &RangeSelect) {
        // A detached root has no ancestors to reach.
        if self.mounted {
            self.dispatched.push(*event);
        }
    }

    fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_creates_all_parts() {
        let mut r = MemoryRenderer::new();
        r.mount(&SliderPart::ALL);
        assert!(r.is_mounted());
        assert_eq!(r.nodes().len(), 7);
        assert_eq!(r.text(SliderPart::From), Some(""));
    }

    #[test]
    fn classes_add_and_remove() {
        let mut r = MemoryRenderer::new();
        r.mount(&SliderPart::ALL);
        r.add_class(SliderPart::Root, "range-slider_dragging");
        assert!(r.has_class(SliderPart::Root, "range-slider_dragging"));
        r.remove_class(SliderPart::Root, "range-slider_dragging");
        assert!(!r.has_class(SliderPart::Root, "range-slider_dragging"));
    }

    #[test]
    fn dispatch_after_unmount_is_dropped() {
        let mut r = MemoryRenderer::new();
        r.mount(&SliderPart::ALL);
        r.dispatch(&RangeSelect { from: 1.0, to: 2.0 });
        r.unmount();
        r.dispatch(&RangeSelect { from: 3.0, to: 4.0 });
        assert_eq!(r.dispatched(), &[RangeSelect { from: 1.0, to: 2.0 }]);
        assert_eq!(r.take_dispatched().len(), 1);
        assert!(r.dispatched().is_empty());
    }

    #[test]
    fn style_overwrites() {
        let mut r = MemoryRenderer::new();
        r.mount(&SliderPart::ALL);
        r.set_style(SliderPart::Progress, StyleProp::Left, "10%");
        r.set_style(SliderPart::Progress, StyleProp::Left, "20%");
        assert_eq!(r.style(SliderPart::Progress, StyleProp::Left), Some("20%"));
        assert_eq!(r.style(SliderPart::Progress, StyleProp::Right), None);
    }
}
