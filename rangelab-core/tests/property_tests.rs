//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Percent mapping — monotonic, 0 at min, 100 at max
//! 2. Ordering — `from <= to` and both within bounds after any drag sequence
//! 3. Edge pinning — offsets past either edge behave like the edge itself
//! 4. Idempotent redraw — refreshing twice leaves the tree unchanged

use proptest::prelude::*;
use rangelab_core::mapping::{percent, value_at};
use rangelab_core::{
    Bounds, MemoryRenderer, PointerEvent, RangeSlider, SliderConfig, Thumb, TrackGeometry,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (-1000.0..1000.0_f64, 1.0..5000.0_f64)
        .prop_map(|(min, span)| Bounds::new(min, min + span).unwrap())
}

fn arb_thumb() -> impl Strategy<Value = Thumb> {
    prop_oneof![Just(Thumb::Left), Just(Thumb::Right)]
}

fn arb_geometry() -> impl Strategy<Value = TrackGeometry> {
    (0.0..500.0_f64, 10.0..2000.0_f64).prop_map(|(left, width)| TrackGeometry::new(left, width))
}

/// A drag gesture: which thumb, the layout at press, and the pointer path.
fn arb_drag() -> impl Strategy<Value = (Thumb, TrackGeometry, Vec<f64>)> {
    (
        arb_thumb(),
        arb_geometry(),
        prop::collection::vec(-1000.0..3000.0_f64, 0..20),
    )
}

fn slider_in(bounds: Bounds, a: f64, b: f64) -> RangeSlider<MemoryRenderer> {
    let clamp = |v: f64| v.max(bounds.min()).min(bounds.max());
    let lo = clamp(bounds.min() + a.min(b) * bounds.span());
    let hi = clamp(bounds.min() + a.max(b) * bounds.span());
    let config = SliderConfig::new(bounds.min(), bounds.max()).with_selected(lo, hi);
    RangeSlider::new(config, MemoryRenderer::new()).unwrap()
}

// ── 1. Percent Mapping ───────────────────────────────────────────────

proptest! {
    #[test]
    fn percent_endpoints(bounds in arb_bounds()) {
        prop_assert_eq!(percent(&bounds, bounds.min()), 0.0);
        prop_assert!((percent(&bounds, bounds.max()) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percent_is_monotonic(bounds in arb_bounds(), a in 0.0..1.0_f64, b in 0.0..1.0_f64) {
        let va = bounds.min() + a * bounds.span();
        let vb = bounds.min() + b * bounds.span();
        let (lo, hi) = if va <= vb { (va, vb) } else { (vb, va) };
        prop_assert!(percent(&bounds, lo) <= percent(&bounds, hi));
    }

    #[test]
    fn value_at_stays_in_bounds(
        bounds in arb_bounds(),
        geometry in arb_geometry(),
        x in -5000.0..5000.0_f64,
    ) {
        let v = value_at(&bounds, &geometry, x);
        prop_assert!(v >= bounds.min() - 1e-9);
        prop_assert!(v <= bounds.max() + 1e-9);
    }
}

// ── 2. Ordering Invariant ────────────────────────────────────────────

proptest! {
    /// Any sequence of gestures keeps `min <= from <= to <= max`.
    #[test]
    fn selection_stays_ordered(
        bounds in arb_bounds(),
        a in 0.0..1.0_f64,
        b in 0.0..1.0_f64,
        drags in prop::collection::vec(arb_drag(), 1..6),
    ) {
        let mut slider = slider_in(bounds, a, b);

        for (thumb, geometry, path) in drags {
            slider.handle(PointerEvent::Down { thumb, geometry });
            for x in path {
                slider.handle(PointerEvent::Move { x });
                let s = slider.selection();
                prop_assert!(s.from <= s.to, "from {} > to {}", s.from, s.to);
                prop_assert!(s.from >= bounds.min() - 1e-9);
                prop_assert!(s.to <= bounds.max() + 1e-9);
            }
            slider.handle(PointerEvent::Up);
        }
    }

    /// Exactly one event per completed gesture, matching the final selection.
    #[test]
    fn one_commit_per_gesture(
        bounds in arb_bounds(),
        drags in prop::collection::vec(arb_drag(), 1..6),
    ) {
        let mut slider = slider_in(bounds, 0.0, 1.0);
        let count = drags.len();

        for (thumb, geometry, path) in drags {
            slider.handle(PointerEvent::Down { thumb, geometry });
            for x in path {
                slider.handle(PointerEvent::Move { x });
            }
            let committed = slider.handle(PointerEvent::Up);
            prop_assert_eq!(committed.map(|e| (e.from, e.to)),
                Some((slider.selection().from, slider.selection().to)));
        }
        prop_assert_eq!(slider.renderer().dispatched().len(), count);
    }
}

// ── 3. Edge Pinning ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn offsets_past_edges_match_edges(
        bounds in arb_bounds(),
        geometry in arb_geometry(),
        thumb in arb_thumb(),
        overshoot in 0.001..1000.0_f64,
    ) {
        let left_edge = geometry.left;
        let right_edge = geometry.left + geometry.width;

        for (edge, beyond) in [(left_edge, left_edge - overshoot), (right_edge, right_edge + overshoot)] {
            let mut at_edge = slider_in(bounds, 0.25, 0.75);
            let mut past_edge = slider_in(bounds, 0.25, 0.75);
            at_edge.pointer_down(thumb, geometry);
            past_edge.pointer_down(thumb, geometry);
            at_edge.pointer_move(edge);
            past_edge.pointer_move(beyond);
            // `left + width - left` may land an ulp short of `width`.
            let (a, b) = (at_edge.selection(), past_edge.selection());
            prop_assert!((a.from - b.from).abs() < 1e-6, "from {} vs {}", a.from, b.from);
            prop_assert!((a.to - b.to).abs() < 1e-6, "to {} vs {}", a.to, b.to);
        }
    }
}

// ── 4. Idempotent Redraw ─────────────────────────────────────────────

proptest! {
    #[test]
    fn redraw_is_idempotent(
        bounds in arb_bounds(),
        (thumb, geometry, path) in arb_drag(),
    ) {
        let mut slider = slider_in(bounds, 0.1, 0.9);
        slider.pointer_down(thumb, geometry);
        for x in path {
            slider.pointer_move(x);
        }

        slider.update();
        let first = slider.renderer().clone();
        slider.update();
        prop_assert_eq!(slider.renderer(), &first);
    }
}
