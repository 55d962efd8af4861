use crate::math::Vector3;

/// Projection of a shape onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Projects a set of points onto `axis`.
    ///
    /// An empty set yields the empty interval `[+inf, -inf]`, which
    /// overlaps nothing.
    #[must_use]
    pub fn of_points(points: &[Vector3], axis: Vector3) -> Self {
        points.iter().fold(
            Self::new(f32::INFINITY, f32::NEG_INFINITY),
            |acc, p| {
                let d = axis.dot(*p);
                Self::new(acc.min.min(d), acc.max.max(d))
            },
        )
    }

    /// True when the closed intervals share at least one value.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        other.min <= self.max && self.min <= other.max
    }

    /// Length of the shared part, or a negative gap when disjoint.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> f32 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_points() {
        let pts = [Vector3::new(1.0, 5.0, 0.0), Vector3::new(-2.0, 0.0, 0.0)];
        let i = Interval::of_points(&pts, Vector3::X);
        assert_eq!(i, Interval::new(-2.0, 1.0));
    }

    #[test]
    fn touching_intervals_overlap() {
        let a = Interval::new(0.0, 1.0);
        assert!(a.overlaps(&Interval::new(1.0, 2.0)));
        assert!(!a.overlaps(&Interval::new(1.1, 2.0)));
        assert!((a.overlap(&Interval::new(0.5, 2.0)) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_overlaps_nothing() {
        let empty = Interval::of_points(&[], Vector3::X);
        assert!(!empty.overlaps(&Interval::new(-1.0, 1.0)));
    }
}
