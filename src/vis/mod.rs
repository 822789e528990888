//! Color helpers for rendering graphs, e.g. one color per component.

pub mod color;
pub mod colormap;
pub mod generation;

pub use color::{Hsv, Hsva, Rgb, Rgba};
pub use colormap::{hsv_jet, hsva_jet, jet, rgb_jet, rgba_jet, ColorMap};
pub use generation::{
    random_hue_rgb, random_hue_rgba, random_hues_rgb, random_hues_rgba, uniform_hues_rgb,
    uniform_hues_rgba,
};

use crate::graph::Coloring;

/// One evenly spaced hue per component, indexed by component id.
pub fn component_palette(coloring: &Coloring) -> Vec<Rgb> {
    uniform_hues_rgb(coloring.count())
}
