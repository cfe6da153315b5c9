//! Angle math for a wheel of equal segments.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. The pointer is
//! fixed at the top and the wheel turns clockwise, so a rotation of `r`
//! brings the wheel angle `360 - r` under the pointer.

use std::f64::consts::PI;

use crate::constants::FULL_TURN;

/// Folds any angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let folded = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if folded >= FULL_TURN {
        0.0
    } else {
        folded
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    segments: usize,
}

impl WheelGeometry {
    /// `segments` comes from a `Catalog`, which is never empty.
    pub fn new(segments: usize) -> Self {
        debug_assert!(segments > 0, "wheel needs at least one segment");
        Self { segments }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn segment_angle(&self) -> f64 {
        FULL_TURN / self.segments as f64
    }

    /// Start and end of segment `index`; the end is exclusive.
    pub fn segment_bounds(&self, index: usize) -> (f64, f64) {
        let angle = self.segment_angle();
        (index as f64 * angle, (index + 1) as f64 * angle)
    }

    pub fn segment_center(&self, index: usize) -> f64 {
        let angle = self.segment_angle();
        index as f64 * angle + angle / 2.0
    }

    /// Rotation in `[0, 360)` that puts the center of `index` under the pointer.
    pub fn target_stop_angle(&self, index: usize) -> f64 {
        normalize_degrees(FULL_TURN - self.segment_center(index))
    }

    /// Which segment sits under the pointer after the wheel has turned by
    /// `rotation` degrees, full turns included.
    pub fn segment_under_pointer(&self, rotation: f64) -> usize {
        let wheel_angle = normalize_degrees(FULL_TURN - normalize_degrees(rotation));
        let index = (wheel_angle / self.segment_angle()).floor() as usize;
        index.min(self.segments - 1)
    }

    /// SVG path for the pie slice of `index`, for a wheel drawn at
    /// `(center, center)` with the given radius.
    pub fn segment_path(&self, index: usize, center: f64, radius: f64) -> String {
        let (start, end) = self.segment_bounds(index);
        let (x1, y1) = polar_point(center, radius, start);
        let (x2, y2) = polar_point(center, radius, end);
        let large_arc = if end - start > 180.0 { 1 } else { 0 };

        format!(
            "M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z",
            c = center,
            r = radius,
            x1 = x1,
            y1 = y1,
            large_arc = large_arc,
            x2 = x2,
            y2 = y2,
        )
    }
}

/// Screen point at `angle` degrees clockwise from 12 o'clock.
pub fn polar_point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    let radians = PI * (angle - 90.0) / 180.0;
    (center + radius * radians.cos(), center + radius * radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_nine_segment_wheel() {
        let geometry = WheelGeometry::new(9);
        assert_eq!(geometry.segment_angle(), 40.0);
        assert_eq!(geometry.target_stop_angle(0), 340.0);
        assert_eq!(geometry.target_stop_angle(3), 220.0);
        assert_eq!(geometry.target_stop_angle(8), 20.0);
        assert_eq!(geometry.segment_bounds(2), (80.0, 120.0));
    }

    #[test]
    fn test_stop_angle_in_range_for_all_sizes() {
        for n in 1..=64 {
            let geometry = WheelGeometry::new(n);
            for i in 0..n {
                let stop = geometry.target_stop_angle(i);
                assert!((0.0..360.0).contains(&stop), "n={} i={} stop={}", n, i, stop);

                let expected = normalize_degrees(
                    360.0 - (i as f64 * 360.0 / n as f64 + 180.0 / n as f64),
                );
                assert!((stop - expected).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_single_segment_wheel() {
        let geometry = WheelGeometry::new(1);
        assert_eq!(geometry.target_stop_angle(0), 180.0);
        assert_eq!(geometry.segment_under_pointer(0.0), 0);
        assert_eq!(geometry.segment_under_pointer(359.9), 0);
    }

    #[test]
    fn test_pointer_lands_on_target_after_full_turns() {
        for n in 1..=24 {
            let geometry = WheelGeometry::new(n);
            for i in 0..n {
                for turns in [0.0, 1.0, 12.0, 17.0] {
                    let rotation = turns * 360.0 + geometry.target_stop_angle(i);
                    assert_eq!(geometry.segment_under_pointer(rotation), i);
                }
            }
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-20.0), 340.0);
        assert_eq!(normalize_degrees(4540.0), 220.0);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_segment_path_starts_at_top() {
        let geometry = WheelGeometry::new(4);
        let path = geometry.segment_path(0, 300.0, 220.0);
        assert!(path.starts_with("M 300 300 L 300 80 A 220 220 0 0 1 520 300"));
        assert!(path.ends_with(" Z"));
    }
}
