//! RGBA colors and perceptual interpolation between them.
//!
//! Channels are stored as straight (non-premultiplied) sRGB values in the
//! `0.0..=1.0` range. Interpolation happens in linear light so a transition
//! such as black to red brightens evenly instead of lingering in dark tones.

use crate::animation::Animatable;

/// Gamma used to approximate the sRGB transfer curve.
const GAMMA: f32 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into `0xAARRGGBB`, rounding each channel to 8 bits.
    pub fn to_argb(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn srgb_to_linear(v: f32) -> f32 {
    v.max(0.0).powf(GAMMA)
}

fn linear_to_srgb(v: f32) -> f32 {
    v.max(0.0).powf(1.0 / GAMMA)
}

impl Animatable for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| {
            let (a, b) = (srgb_to_linear(a), srgb_to_linear(b));
            linear_to_srgb(a + (b - a) * t)
        };
        Color {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: from.a + (to.a - from.a) * t,
        }
    }
}
