use crate::math::{near_zero, Vector3};

use super::Ray;

/// A finite line segment from `start` to `end`.
///
/// A segment with `start == end` is degenerate but valid: every query
/// treats it as the single point `start`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Vector3,
    pub end: Vector3,
}

impl Line {
    #[must_use]
    pub const fn new(start: Vector3, end: Vector3) -> Self {
        Self { start, end }
    }

    /// Unnormalized direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.direction().magnitude()
    }

    #[must_use]
    pub fn length_sq(&self) -> f32 {
        self.direction().magnitude_sq()
    }

    /// Parametric position of the projection of `point`, clamped to `[0, 1]`.
    ///
    /// Degenerate segments return 0.
    #[must_use]
    pub fn project_parameter(&self, point: Vector3) -> f32 {
        let dir = self.direction();
        let len_sq = dir.magnitude_sq();
        if len_sq == 0.0 {
            return 0.0;
        }
        ((point - self.start).dot(dir) / len_sq).clamp(0.0, 1.0)
    }

    /// Closest point on the segment to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let t = self.project_parameter(point);
        self.start + self.direction() * t
    }

    /// True when `point` lies on the segment (within tolerance).
    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        near_zero((self.closest_point(point) - point).magnitude_sq())
    }

    /// Ray starting at `start` pointing toward `end`.
    #[must_use]
    pub fn to_ray(&self) -> Ray {
        Ray::from_points(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_y() -> Line {
        Line::new(Vector3::ZERO, Vector3::Y)
    }

    #[test]
    fn length_of_unit_segment() {
        assert!((unit_y().length() - 1.0).abs() < f32::EPSILON);
        assert!((unit_y().length_sq() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn contains_points_on_segment_only() {
        let line = unit_y();
        assert!(line.contains(Vector3::new(0.0, 0.5, 0.0)));
        assert!(line.contains(Vector3::ZERO));
        assert!(line.contains(Vector3::Y));
        assert!(!line.contains(Vector3::new(0.0, 1.5, 0.0)));
        assert!(!line.contains(Vector3::new(0.0, -0.5, 0.0)));
        assert!(!line.contains(Vector3::new(0.1, 0.5, 0.0)));
    }

    #[test]
    fn closest_point_clamps_to_ends() {
        let line = unit_y();
        assert_eq!(line.closest_point(Vector3::new(3.0, 0.25, -1.0)), Vector3::new(0.0, 0.25, 0.0));
        assert_eq!(line.closest_point(Vector3::new(0.0, 9.0, 0.0)), Vector3::Y);
        assert_eq!(line.closest_point(Vector3::new(0.0, -9.0, 0.0)), Vector3::ZERO);
    }

    #[test]
    fn degenerate_segment_returns_start() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let line = Line::new(p, p);
        let closest = line.closest_point(Vector3::new(50.0, -4.0, 0.0));
        assert_eq!(closest, p);
        assert!(!closest.x.is_nan());
        assert!(line.contains(p));
        assert!(!line.contains(Vector3::ZERO));
    }
}
