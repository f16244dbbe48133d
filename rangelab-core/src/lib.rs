//! RangeLab Core — a headless dual-thumb range slider.
//!
//! This crate contains:
//! - Domain types (bounds, selection, thumbs, track geometry, committed event)
//! - Value ↔ percent mapping
//! - Render capability trait with an in-memory implementation
//! - Drag state machine (`Idle` / `Dragging`)
//! - Shared tooltip
//! - TOML-backed settings

pub mod config;
pub mod domain;
pub mod mapping;
pub mod render;
pub mod slider;
pub mod tooltip;

pub use config::{ConfigError, Formatter, SettingsOverrides, SliderConfig, SliderSettings};
pub use domain::{Bounds, RangeSelect, Selection, SliderError, Thumb, TrackGeometry};
pub use render::{MemoryRenderer, Renderer, SliderPart, StyleProp};
pub use slider::{DragPhase, DragState, Labels, PointerEvent, RangeSlider};
pub use tooltip::{Tooltip, TooltipEvent};
