//! RangeLab TUI — terminal host for the range slider.
//!
//! Provides:
//! - A `Renderer` backed by the terminal (`surface`)
//! - Mouse-to-pointer translation with thumb hit-testing (`input`)
//! - Slider panel, commit log, status bar and tooltip overlay (`ui`)

pub mod app;
pub mod input;
pub mod surface;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use surface::{SliderView, TerminalSurface};
pub use theme::Theme;
