use crate::view::PropertyValue;

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for PropertyValue {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        match (from, to) {
            (PropertyValue::Float(a), PropertyValue::Float(b)) => {
                PropertyValue::Float(f32::lerp(a, b, t))
            }
            (PropertyValue::Color(a), PropertyValue::Color(b)) => {
                PropertyValue::Color(Animatable::lerp(a, b, t))
            }
            // Mismatched kinds cannot be blended; hold the start value.
            _ => *from,
        }
    }
}
