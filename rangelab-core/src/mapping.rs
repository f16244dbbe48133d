//! Value ↔ percent mapping.
//!
//! `percent(v) = (v - min) / (max - min) * 100`. The inverse maps a pointer
//! x back into `[min, max]` after pinning it to the track.

use crate::domain::{Bounds, Selection, TrackGeometry};

/// Position of `value` along the bounds, in percent.
pub fn percent(bounds: &Bounds, value: f64) -> f64 {
    (value - bounds.min()) / bounds.span() * 100.0
}

/// Pin an offset relative to the track's left edge to `[0, width]`.
///
/// NaN offsets and widths pin to 0.
pub fn clamp_offset(offset: f64, width: f64) -> f64 {
    if width.is_nan() || offset.is_nan() || width <= 0.0 || offset < 0.0 {
        0.0
    } else if offset > width {
        width
    } else {
        offset
    }
}

/// Value under the absolute pointer x, given the track geometry.
///
/// A zero-width or non-finite track maps everything to `min`.
pub fn value_at(bounds: &Bounds, geometry: &TrackGeometry, x: f64) -> f64 {
    if !geometry.is_finite() || geometry.width <= 0.0 {
        return bounds.min();
    }
    let gap = clamp_offset(x - geometry.left, geometry.width);
    gap / geometry.width * bounds.span() + bounds.min()
}

/// Thumb and progress positions, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percents {
    pub thumb_left: f64,
    pub thumb_right: f64,
    pub progress_left: f64,
    /// Inset from the right edge: `100 - percent(to)`.
    pub progress_right: f64,
}

impl Percents {
    pub fn of(bounds: &Bounds, selection: &Selection) -> Self {
        let from = percent(bounds, selection.from);
        let to = percent(bounds, selection.to);
        Self {
            thumb_left: from,
            thumb_right: to,
            progress_left: from,
            progress_right: 100.0 - to,
        }
    }
}

/// Render a percentage as a style value, e.g. `20%`.
pub fn css_percent(value: f64) -> String {
    format!("{value}%")
}

/// Parse a style value produced by [`css_percent`].
pub fn parse_css_percent(value: &str) -> Option<f64> {
    value.trim().strip_suffix('%')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 100.0).unwrap()
    }

    #[test]
    fn percent_endpoints() {
        let b = Bounds::default();
        assert_eq!(percent(&b, b.min()), 0.0);
        assert_eq!(percent(&b, b.max()), 100.0);
        assert_eq!(percent(&b, 650.0), 50.0);
    }

    #[test]
    fn clamp_offset_pins_to_edges() {
        assert_eq!(clamp_offset(-5.0, 200.0), 0.0);
        assert_eq!(clamp_offset(250.0, 200.0), 200.0);
        assert_eq!(clamp_offset(120.0, 200.0), 120.0);
        assert_eq!(clamp_offset(10.0, 0.0), 0.0);
        assert_eq!(clamp_offset(f64::NAN, 200.0), 0.0);
        assert_eq!(clamp_offset(10.0, f64::NAN), 0.0);
        assert_eq!(clamp_offset(f64::INFINITY, 200.0), 200.0);
        assert_eq!(clamp_offset(f64::NEG_INFINITY, 200.0), 0.0);
    }

    #[test]
    fn value_at_inverts_percent() {
        let g = TrackGeometry::new(50.0, 200.0);
        assert_eq!(value_at(&bounds(), &g, 50.0), 0.0);
        assert_eq!(value_at(&bounds(), &g, 250.0), 100.0);
        assert_eq!(value_at(&bounds(), &g, 230.0), 90.0);
        assert_eq!(value_at(&bounds(), &g, -400.0), 0.0);
        assert_eq!(value_at(&bounds(), &g, 9000.0), 100.0);
    }

    #[test]
    fn zero_width_track_maps_to_min() {
        let g = TrackGeometry::new(10.0, 0.0);
        assert_eq!(value_at(&bounds(), &g, 500.0), 0.0);
    }

    #[test]
    fn non_finite_inputs_stay_in_bounds() {
        let g = TrackGeometry::new(50.0, 200.0);
        assert_eq!(value_at(&bounds(), &g, f64::NAN), 0.0);
        assert_eq!(value_at(&bounds(), &g, f64::INFINITY), 100.0);
        assert_eq!(value_at(&bounds(), &TrackGeometry::new(f64::NAN, 200.0), 90.0), 0.0);
        assert_eq!(value_at(&bounds(), &TrackGeometry::new(0.0, f64::NAN), 90.0), 0.0);
    }

    #[test]
    fn percents_of_selection() {
        let p = Percents::of(&bounds(), &Selection::new(20.0, 80.0));
        assert_eq!(p.thumb_left, 20.0);
        assert_eq!(p.thumb_right, 80.0);
        assert_eq!(p.progress_left, 20.0);
        assert!((p.progress_right - 20.0).abs() < 1e-9);
    }

    #[test]
    fn css_percent_formatting() {
        assert_eq!(css_percent(20.0), "20%");
        assert_eq!(css_percent(12.5), "12.5%");
        assert_eq!(parse_css_percent("12.5%"), Some(12.5));
        assert_eq!(parse_css_percent("12.5px"), None);
    }
}
