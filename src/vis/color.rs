//! RGB(A) and HSV(A) colors and conversions between them.
//!
//! Channels are `f32` in `[0, 1]`; hue is in radians in `[0, 2π)`.

use std::f32::consts::{FRAC_PI_3, TAU};

use serde::Serialize;

/// Red, green, blue.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Red, green, blue, alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Hue (radians), saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Hue (radians), saturation, value, alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsva {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// `#rrggbb`, channels clamped to `[0, 1]`.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }
}

impl Rgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f32) -> Hsva {
        Hsva {
            h: self.h,
            s: self.s,
            v: self.v,
            a,
        }
    }
}

impl Hsva {
    pub fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    /// Drop the alpha channel.
    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.h, self.s, self.v)
    }
}

fn channel_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let sector = hsv.h / FRAC_PI_3;
        let c = sector.floor();
        let f = sector - c;
        let v = hsv.v;
        let p = v * (1.0 - hsv.s);
        let q = v * (1.0 - hsv.s * f);
        let t = v * (1.0 - hsv.s * (1.0 - f));

        match c as i32 {
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            5 => Rgb::new(v, p, q),
            _ => Rgb::new(v, t, p),
        }
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let max = rgb.r.max(rgb.g).max(rgb.b);

        let mut h = if min == max {
            0.0
        } else if max == rgb.r {
            FRAC_PI_3 * ((rgb.g - rgb.b) / (max - min))
        } else if max == rgb.g {
            FRAC_PI_3 * (2.0 + (rgb.b - rgb.r) / (max - min))
        } else {
            FRAC_PI_3 * (4.0 + (rgb.r - rgb.g) / (max - min))
        };
        if h < 0.0 {
            h += TAU;
        }

        let s = if max == 0.0 { 0.0 } else { (max - min) / max };

        Hsv::new(h, s, max)
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Self {
        Rgb::from(hsva.hsv()).with_alpha(hsva.a)
    }
}

impl From<Rgba> for Hsva {
    fn from(rgba: Rgba) -> Self {
        Hsv::from(rgba.rgb()).with_alpha(rgba.a)
    }
}
