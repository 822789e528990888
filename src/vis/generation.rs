//! Fully saturated colors with random or evenly spaced hues.

use std::f32::consts::TAU;

use rand::Rng;

use super::color::{Hsv, Hsva, Rgb, Rgba};

/// A color with a hue drawn uniformly from `[0, 2π)`.
pub fn random_hue_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let hue = rng.gen_range(0.0..TAU);
    Rgb::from(Hsv::new(hue, 1.0, 1.0))
}

/// [`random_hue_rgb`] with an opaque alpha channel.
pub fn random_hue_rgba<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    random_hue_rgb(rng).with_alpha(1.0)
}

/// `count` random-hue colors from the thread-local generator.
pub fn random_hues_rgb(count: usize) -> Vec<Rgb> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_hue_rgb(&mut rng)).collect()
}

/// `count` random-hue opaque colors from the thread-local generator.
pub fn random_hues_rgba(count: usize) -> Vec<Rgba> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_hue_rgba(&mut rng)).collect()
}

/// `count` colors with hues `i * 2π / count`.
pub fn uniform_hues_rgb(count: usize) -> Vec<Rgb> {
    let step = TAU / count.max(1) as f32;
    (0..count)
        .map(|i| Rgb::from(Hsv::new(step * i as f32, 1.0, 1.0)))
        .collect()
}

/// `count` opaque colors with hues `i * 2π / count`.
pub fn uniform_hues_rgba(count: usize) -> Vec<Rgba> {
    let step = TAU / count.max(1) as f32;
    (0..count)
        .map(|i| Rgba::from(Hsva::new(step * i as f32, 1.0, 1.0, 1.0)))
        .collect()
}
