//! Timing functions (easing curves) for animations.
//!
//! A timing function maps the normalized elapsed time of one animation
//! iteration to a progress value, shaping acceleration and deceleration of the
//! animated property.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (quadratic acceleration)
//! - [`TimingFunction::AccelerateDecelerate`] - Cosine curve, the default
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```ignore
//! Animation::new(1000.0)
//!     .track(Track::to(star, Property::TranslationY, 300.0))
//!     .timing(TimingFunction::EaseIn)
//! ```

use std::f32::consts::PI;
use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Cosine-shaped acceleration then deceleration
    #[default]
    AccelerateDecelerate,
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor (custom curves may exceed [0, 1])
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::AccelerateDecelerate => accelerate_decelerate(t),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::AccelerateDecelerate => write!(f, "AccelerateDecelerate"),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

fn accelerate_decelerate(t: f32) -> f32 {
    // Clamped so rounding in cos() never leaves [0, 1]
    ((((t + 1.0) * PI).cos() / 2.0) + 0.5).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_is_quadratic() {
        assert_eq!(TimingFunction::EaseIn.evaluate(0.5), 0.25);
        assert_eq!(TimingFunction::EaseIn.evaluate(1.0), 1.0);
        assert_eq!(format!("{:?}", TimingFunction::EaseIn), "EaseIn");
    }

    #[test]
    fn test_accelerate_decelerate_shape() {
        let tf = TimingFunction::default();
        assert!(tf.evaluate(0.0).abs() < 1e-6);
        assert!((tf.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((tf.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!(tf.evaluate(0.25) < 0.25);
        assert!(tf.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_accelerate_decelerate_stays_in_unit_range() {
        let tf = TimingFunction::AccelerateDecelerate;
        let mut previous = 0.0;
        for step in 0..=1000 {
            let value = tf.evaluate(step as f32 / 1000.0);
            assert!((0.0..=1.0).contains(&value));
            assert!(value >= previous - 1e-6);
            previous = value;
        }
    }

    #[test]
    fn test_custom() {
        let step = TimingFunction::custom(|t| if t < 0.5 { 0.0 } else { 1.0 });
        assert_eq!(step.evaluate(0.4), 0.0);
        assert_eq!(step.evaluate(0.6), 1.0);
        assert_eq!(format!("{:?}", step), "Custom");
    }
}
