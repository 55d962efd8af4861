use super::EPSILON;

/// Absolute + relative tolerance used for floating-point comparisons.
///
/// Two values `a` and `b` compare equal when
/// `|a - b| <= (epsilon + threshold) * max(1, max(|a|, |b|))`, so small
/// values are compared absolutely and large values relatively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Machine-level slack, normally [`f32::EPSILON`].
    pub epsilon: f32,
    /// Additional slack for accumulated rounding.
    pub threshold: f32,
}

impl Tolerance {
    /// Default threshold added on top of [`EPSILON`].
    pub const DEFAULT_THRESHOLD: f32 = 1e-5;

    /// Creates a tolerance with the given threshold on top of [`EPSILON`].
    #[must_use]
    pub const fn with_threshold(threshold: f32) -> Self {
        Self {
            epsilon: EPSILON,
            threshold,
        }
    }

    /// Compares two scalars with this tolerance.
    #[must_use]
    pub fn compare(&self, a: f32, b: f32) -> bool {
        let scale = 1.0_f32.max(a.abs().max(b.abs()));
        (a - b).abs() <= (self.epsilon + self.threshold) * scale
    }

    /// Returns true when `value` is within tolerance of zero.
    #[must_use]
    pub fn is_zero(&self, value: f32) -> bool {
        self.compare(value, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }
}

/// Compares two scalars with the default [`Tolerance`].
#[must_use]
pub fn compare(a: f32, b: f32) -> bool {
    Tolerance::default().compare(a, b)
}

/// Returns true when `value` is within the default tolerance of zero.
#[must_use]
pub fn near_zero(value: f32) -> bool {
    compare(value, 0.0)
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this does not panic when `min > max`; `max` wins.
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation: `a + (b - a) * t`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]. Returns 0 when `a == b`.
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if near_zero(span) {
        0.0
    } else {
        (value - a) / span
    }
}

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Returns true for 1, 2, 4, 8, ...
#[must_use]
pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// Smallest power of two `>= value`, or `None` when it does not fit in a `u32`.
#[must_use]
pub fn next_power_of_two(value: u32) -> Option<u32> {
    value.checked_next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_absolute_near_zero() {
        assert!(compare(0.0, 1e-6));
        assert!(!compare(0.0, 1e-3));
    }

    #[test]
    fn compare_is_relative_for_large_values() {
        // 1e6 * (eps + 1e-5) ~ 10.1
        assert!(compare(1_000_000.0, 1_000_005.0));
        assert!(!compare(1_000_000.0, 1_000_100.0));
    }

    #[test]
    fn custom_threshold() {
        let loose = Tolerance::with_threshold(1e-2);
        assert!(loose.compare(1.0, 1.005));
        assert!(!Tolerance::default().compare(1.0, 1.005));
    }

    #[test]
    fn clamp_and_lerp() {
        assert!((clamp(5.0, 0.0, 1.0) - 1.0).abs() < EPSILON);
        assert!((clamp(-5.0, 0.0, 1.0)).abs() < EPSILON);
        assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < EPSILON);
        assert!((inverse_lerp(2.0, 4.0, 3.0) - 0.5).abs() < EPSILON);
        assert!(inverse_lerp(2.0, 2.0, 3.0).abs() < EPSILON);
    }

    #[test]
    fn angle_conversion() {
        assert!(compare(deg_to_rad(180.0), std::f32::consts::PI));
        assert!(compare(rad_to_deg(std::f32::consts::FRAC_PI_2), 90.0));
    }

    #[test]
    fn powers_of_two() {
        assert!(is_power_of_two(64));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(65));
        assert_eq!(next_power_of_two(65), Some(128));
        assert_eq!(next_power_of_two(u32::MAX), None);
    }
}
