//! Domain types — bounds, selection, thumbs, track geometry, committed event.
//!
//! All types are plain `Copy` values. The only mutable state in the system is
//! the `Selection` owned by a `RangeSlider`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound of a slider.
pub const DEFAULT_MIN: f64 = 320.0;

/// Default upper bound of a slider.
pub const DEFAULT_MAX: f64 = 980.0;

/// Errors raised when a slider is constructed from malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("invalid bounds: min ({min}) must be finite and strictly less than max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("inverted selection: from ({from}) is greater than to ({to})")]
    InvertedSelection { from: f64, to: f64 },

    #[error("selection [{from}, {to}] lies outside bounds [{min}, {max}]")]
    SelectionOutOfBounds { from: f64, to: f64, min: f64, max: f64 },
}

/// Immutable `(min, max)` pair with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Result<Self, SliderError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(SliderError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the value range. Always positive.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

/// The selected interval `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub from: f64,
    pub to: f64,
}

impl Selection {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Selection covering the whole bounds range.
    pub fn full(bounds: &Bounds) -> Self {
        Self {
            from: bounds.min(),
            to: bounds.max(),
        }
    }

    /// Check `from <= to` and that both ends lie within `bounds`.
    pub fn validate(self, bounds: &Bounds) -> Result<Self, SliderError> {
        if self.from.is_nan() || self.to.is_nan() || !bounds.contains(self.from) || !bounds.contains(self.to) {
            return Err(SliderError::SelectionOutOfBounds {
                from: self.from,
                to: self.to,
                min: bounds.min(),
                max: bounds.max(),
            });
        }
        if self.from > self.to {
            return Err(SliderError::InvertedSelection {
                from: self.from,
                to: self.to,
            });
        }
        Ok(self)
    }
}

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thumb {
    Left,
    Right,
}

impl Thumb {
    pub fn label(self) -> &'static str {
        match self {
            Thumb::Left => "left",
            Thumb::Right => "right",
        }
    }
}

/// Horizontal extent of the track as measured by the layout system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Absolute x of the track's left edge.
    pub left: f64,
    /// Track width in the same units as pointer coordinates.
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Both the edge and the width are real numbers.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.width.is_finite()
    }

    /// Absolute x of a point `percent` of the way along the track.
    pub fn x_at_percent(&self, percent: f64) -> f64 {
        self.left + self.width * percent / 100.0
    }
}

/// The committed selection, emitted once per completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelect {
    pub from: f64,
    pub to: f64,
}

impl RangeSelect {
    /// Event name seen by the host container.
    pub const NAME: &'static str = "range-select";
}

impl From<Selection> for RangeSelect {
    fn from(selection: Selection) -> Self {
        Self {
            from: selection.from,
            to: selection.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_degenerate_and_inverted() {
        assert!(Bounds::new(10.0, 10.0).is_err());
        assert!(Bounds::new(11.0, 10.0).is_err());
        assert!(Bounds::new(f64::NAN, 10.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
        assert!(Bounds::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn default_bounds() {
        let b = Bounds::default();
        assert_eq!(b.min(), 320.0);
        assert_eq!(b.max(), 980.0);
        assert_eq!(b.span(), 660.0);
    }

    #[test]
    fn selection_validation() {
        let b = Bounds::new(0.0, 100.0).unwrap();
        assert!(Selection::new(20.0, 80.0).validate(&b).is_ok());
        assert!(Selection::new(50.0, 50.0).validate(&b).is_ok());
        assert_eq!(
            Selection::new(80.0, 20.0).validate(&b),
            Err(SliderError::InvertedSelection { from: 80.0, to: 20.0 })
        );
        assert!(matches!(
            Selection::new(-1.0, 20.0).validate(&b),
            Err(SliderError::SelectionOutOfBounds { .. })
        ));
        assert!(matches!(
            Selection::new(10.0, 101.0).validate(&b),
            Err(SliderError::SelectionOutOfBounds { .. })
        ));
    }

    #[test]
    fn geometry_finiteness() {
        assert!(TrackGeometry::new(10.0, 0.0).is_finite());
        assert!(!TrackGeometry::new(f64::NAN, 100.0).is_finite());
        assert!(!TrackGeometry::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn range_select_serializes_as_from_to() {
        let event = RangeSelect::from(Selection::new(80.0, 80.0));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"from":80.0,"to":80.0}"#);
    }

    #[test]
    fn thumb_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Thumb::Left).unwrap(), "\"left\"");
        let t: Thumb = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(t, Thumb::Right);
    }
}
