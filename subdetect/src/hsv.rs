//! A clamped hue/saturation/value color triple.
//!
//! Components use the same integer ranges as 8-bit HSV video frames: hue in
//! `[0, 179]` (half-degrees), saturation and value in `[0, 255]`.  Setting a
//! component outside its range silently clamps to the nearest bound; this is
//! never an error.

use image::Rgba;
use palette::{FromColor, Srgb};

const MIN_HUE: i32 = 0;
const MAX_HUE: i32 = 179;

const MIN_SAT: i32 = 0;
const MAX_SAT: i32 = 255;

const MIN_VAL: i32 = 0;
const MAX_VAL: i32 = 255;

fn constrained(val: i32, min: i32, max: i32) -> i32 {
    val.clamp(min, max)
}

/// A color in HSV format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Hsv {
    hue: i32,
    sat: i32,
    val: i32,
}

impl Hsv {
    /// Create a color from hue, saturation and value, clamping each
    /// component to its range.
    pub fn new(h: i32, s: i32, v: i32) -> Hsv {
        let mut hsv = Hsv::default();
        hsv.set_hue(h);
        hsv.set_saturation(s);
        hsv.set_value(v);
        hsv
    }

    /// Convert an RGBA pixel to a clamped HSV triple.  The alpha channel is
    /// ignored.
    pub fn from_rgba(px: Rgba<u8>) -> Hsv {
        let rgb = Srgb::new(
            f32::from(px.0[0]) / 255.0,
            f32::from(px.0[1]) / 255.0,
            f32::from(px.0[2]) / 255.0,
        );
        let hsv: palette::Hsv = palette::Hsv::from_color(rgb);
        // These are all in [0.0, 360.0], so `as` cannot overflow.
        Hsv::new(
            (hsv.hue.into_positive_degrees() / 2.0).round() as i32,
            (hsv.saturation * 255.0).round() as i32,
            (hsv.value * 255.0).round() as i32,
        )
    }

    /// The hue component, in `[0, 179]`.
    pub fn hue(&self) -> i32 {
        self.hue
    }

    /// The saturation component, in `[0, 255]`.
    pub fn saturation(&self) -> i32 {
        self.sat
    }

    /// The value component, in `[0, 255]`.
    pub fn value(&self) -> i32 {
        self.val
    }

    /// Set the hue, clamping to `[0, 179]`.
    pub fn set_hue(&mut self, h: i32) {
        self.hue = constrained(h, MIN_HUE, MAX_HUE);
    }

    /// Set the saturation, clamping to `[0, 255]`.
    pub fn set_saturation(&mut self, s: i32) {
        self.sat = constrained(s, MIN_SAT, MAX_SAT);
    }

    /// Set the value, clamping to `[0, 255]`.
    pub fn set_value(&mut self, v: i32) {
        self.val = constrained(v, MIN_VAL, MAX_VAL);
    }

    /// Set all components to their minimum.
    pub fn to_min(&mut self) {
        self.hue = MIN_HUE;
        self.sat = MIN_SAT;
        self.val = MIN_VAL;
    }

    /// Set all components to their maximum.
    pub fn to_max(&mut self) {
        self.hue = MAX_HUE;
        self.sat = MAX_SAT;
        self.val = MAX_VAL;
    }

    /// Copy each component from `other` if it is smaller than the current
    /// one.
    pub fn save_minima(&mut self, other: &Hsv) {
        if self.hue > other.hue {
            self.hue = other.hue;
        }
        if self.sat > other.sat {
            self.sat = other.sat;
        }
        if self.val > other.val {
            self.val = other.val;
        }
    }

    /// Copy each component from `other` if it is greater than the current
    /// one.
    pub fn save_maxima(&mut self, other: &Hsv) {
        if self.hue < other.hue {
            self.hue = other.hue;
        }
        if self.sat < other.sat {
            self.sat = other.sat;
        }
        if self.val < other.val {
            self.val = other.val;
        }
    }
}

#[test]
fn default_is_all_minima() {
    let hsv = Hsv::default();
    assert_eq!(hsv.hue(), 0);
    assert_eq!(hsv.saturation(), 0);
    assert_eq!(hsv.value(), 0);
}

#[test]
fn construction_clamps_each_component() {
    assert_eq!(Hsv::new(0, 0, 0), Hsv::default());
    assert_eq!(Hsv::new(-1, -1, -1), Hsv::new(0, 0, 0));
    assert_eq!(Hsv::new(500, 500, 500), Hsv::new(179, 255, 255));
}

#[test]
fn minima_and_maxima_fold_component_wise() {
    let mut min = Hsv::new(10, 20, 30);
    let mut max = Hsv::new(10, 20, 30);
    let sample = Hsv::new(5, 25, 30);
    min.save_minima(&sample);
    max.save_maxima(&sample);
    assert_eq!(min, Hsv::new(5, 20, 30));
    assert_eq!(max, Hsv::new(10, 25, 30));
}

#[test]
fn rgba_conversion_matches_known_colors() {
    assert_eq!(Hsv::from_rgba(Rgba([0, 0, 0, 0xff])), Hsv::new(0, 0, 0));
    assert_eq!(Hsv::from_rgba(Rgba([255, 255, 255, 0xff])), Hsv::new(0, 0, 255));
    assert_eq!(Hsv::from_rgba(Rgba([255, 0, 0, 0xff])), Hsv::new(0, 255, 255));
    assert_eq!(Hsv::from_rgba(Rgba([0, 255, 0, 0xff])), Hsv::new(60, 255, 255));
    assert_eq!(Hsv::from_rgba(Rgba([0, 0, 255, 0xff])), Hsv::new(120, 255, 255));
    // A neutral gray keeps its value but has no hue or saturation.
    assert_eq!(Hsv::from_rgba(Rgba([128, 128, 128, 0xff])), Hsv::new(0, 0, 128));
}
