//! Scalar-to-color maps.

use super::color::{Hsv, Hsva, Rgb, Rgba};

/// A function mapping a scalar to a color.
pub type ColorMap<C> = Box<dyn Fn(f32) -> C + Send + Sync>;

/// Jet: `0` is dark blue, `0.5` green, `1` dark red. Input is clamped to `[0, 1]`.
pub fn jet(t: f32) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |center: f32| (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);
    Rgb::new(channel(3.0), channel(2.0), channel(1.0))
}

/// Jet color map producing [`Rgb`].
pub fn rgb_jet() -> ColorMap<Rgb> {
    Box::new(jet)
}

/// Jet color map producing opaque [`Rgba`].
pub fn rgba_jet() -> ColorMap<Rgba> {
    Box::new(|t| jet(t).with_alpha(1.0))
}

/// Jet color map producing [`Hsv`].
pub fn hsv_jet() -> ColorMap<Hsv> {
    Box::new(|t| Hsv::from(jet(t)))
}

/// Jet color map producing opaque [`Hsva`].
pub fn hsva_jet() -> ColorMap<Hsva> {
    Box::new(|t| Hsv::from(jet(t)).with_alpha(1.0))
}
