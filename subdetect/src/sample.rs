//! Sinks which turn a blob scan into useful output: a color profile of the
//! letter shape, or a clean cut-out of it.

use image::{Rgba, RgbaImage};

use crate::blob::{Blob, PixelSink};
use crate::geom::Point;
use crate::hsv::Hsv;
use crate::stats::median;

/// Collects the HSV color range and median of a blob's letter pixels.
///
/// After a scan, `min`/`max` hold the component-wise extremes over every
/// pixel inside the contour (holes excluded), and `median` holds the
/// representative color to threshold on when hunting for more text of the
/// same style.
#[derive(Clone, Debug, Default)]
pub struct HsvSampler {
    crop: Vec<Hsv>,
    crop_width: i32,
    running_min: Hsv,
    running_max: Hsv,
    samples: Vec<Hsv>,
    min: Hsv,
    max: Hsv,
    median: Hsv,
}

impl HsvSampler {
    /// Create a sampler with empty results.
    pub fn new() -> HsvSampler {
        HsvSampler::default()
    }

    /// The component-wise minimum over the sampled pixels.
    pub fn min(&self) -> Hsv {
        self.min
    }

    /// The component-wise maximum over the sampled pixels.
    pub fn max(&self) -> Hsv {
        self.max
    }

    /// The median of the sampled pixels, ordered by (hue, saturation,
    /// value).
    pub fn median(&self) -> Hsv {
        self.median
    }
}

impl PixelSink for HsvSampler {
    fn initialize(&mut self, blob: &Blob) {
        // One conversion pass over the crop, so the per-pixel hook only
        // has to index into it.
        let cropped = blob.cropped();
        self.crop = cropped.pixels().map(|px| Hsv::from_rgba(*px)).collect();
        self.crop_width = blob.bounding().width();
        self.running_min.to_max();
        self.running_max.to_min();
        self.samples.clear();
    }

    fn inside(&mut self, blob: &Blob, pixel: Point) {
        let local = blob.to_blob_origin(pixel);
        let sample = self.crop[(local.y * self.crop_width + local.x) as usize];
        self.running_min.save_minima(&sample);
        self.running_max.save_maxima(&sample);
        self.samples.push(sample);
    }

    fn finalize(&mut self, _blob: &Blob) {
        self.min = self.running_min;
        self.max = self.running_max;
        self.median = median(&self.samples);
    }
}

/// Paints a copy of a blob's crop with everything except the letter shape
/// replaced by a background color, isolating a clean sample of the blob.
#[derive(Clone, Debug)]
pub struct CutoutRenderer {
    background: Rgba<u8>,
    out: RgbaImage,
}

impl CutoutRenderer {
    /// Create a renderer with an opaque black background.
    pub fn new() -> CutoutRenderer {
        CutoutRenderer::with_background(Rgba([0, 0, 0, 0xff]))
    }

    /// Create a renderer painting `background` over non-letter pixels.
    pub fn with_background(background: Rgba<u8>) -> CutoutRenderer {
        CutoutRenderer {
            background,
            out: RgbaImage::new(0, 0),
        }
    }

    /// The configured background color.
    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// The rendered cut-out, valid after a scan.
    pub fn image(&self) -> &RgbaImage {
        &self.out
    }

    /// Consume the renderer, keeping only the rendered cut-out.
    pub fn into_image(self) -> RgbaImage {
        self.out
    }

    /// Paint one pixel with the background color.  The scan visits one
    /// pixel past the crop on each trailing edge; writes landing there are
    /// clipped.
    fn paint(&mut self, blob: &Blob, pixel: Point) {
        let local = blob.to_blob_origin(pixel);
        let (x, y) = (local.x as u32, local.y as u32);
        if x < self.out.width() && y < self.out.height() {
            self.out.put_pixel(x, y, self.background);
        }
    }
}

impl Default for CutoutRenderer {
    fn default() -> CutoutRenderer {
        CutoutRenderer::new()
    }
}

impl PixelSink for CutoutRenderer {
    fn initialize(&mut self, blob: &Blob) {
        self.out = blob.cropped();
    }

    fn in_hole(&mut self, blob: &Blob, pixel: Point) {
        self.paint(blob, pixel);
    }

    fn outside(&mut self, blob: &Blob, pixel: Point) {
        self.paint(blob, pixel);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::contour::Contour;
    use crate::geom::Rect;

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 0xff]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 0xff]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 0xff]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 0xff]);

    fn square(left: i32, top: i32, side: i32) -> Contour {
        vec![
            Point::new(left, top),
            Point::new(left + side, top),
            Point::new(left + side, top + side),
            Point::new(left, top + side),
        ]
    }

    /// A 12x12 blue frame holding a red square letter with a green hole.
    fn letter_frame() -> RgbaImage {
        let mut image = RgbaImage::from_pixel(12, 12, BLUE);
        for x in 2..=8 {
            for y in 2..=8 {
                image.put_pixel(x, y, RED);
            }
        }
        for x in 4..=6 {
            for y in 4..=6 {
                image.put_pixel(x, y, GREEN);
            }
        }
        image
    }

    #[test]
    fn sampler_sees_only_letter_pixels() {
        let image = letter_frame();
        let outer = square(2, 2, 6);
        let hole = square(4, 4, 2);
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &outer, vec![&hole]).unwrap();

        let mut sampler = HsvSampler::new();
        blob.scan(&mut sampler, None);

        // Every sampled pixel is red, so the range collapses.
        let red = Hsv::from_rgba(RED);
        assert_eq!(sampler.min(), red);
        assert_eq!(sampler.max(), red);
        assert_eq!(sampler.median(), red);
    }

    #[test]
    fn sampler_folds_mixed_colors() {
        let mut image = letter_frame();
        // Two letter pixels turn blue; the extremes now span both colors.
        image.put_pixel(3, 3, BLUE);
        image.put_pixel(7, 7, BLUE);
        let outer = square(2, 2, 6);
        let hole = square(4, 4, 2);
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &outer, vec![&hole]).unwrap();

        let mut sampler = HsvSampler::new();
        blob.scan(&mut sampler, None);

        let red = Hsv::from_rgba(RED);
        let blue = Hsv::from_rgba(BLUE);
        assert_eq!(sampler.min(), red);
        assert_eq!(sampler.max(), blue);
        // 14 red samples against 2 blue ones: the median stays red.
        assert_eq!(sampler.median(), red);
    }

    #[test]
    fn cutout_replaces_holes_and_outside_with_background() {
        let image = letter_frame();
        let outer = square(2, 2, 6);
        let hole = square(4, 4, 2);
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &outer, vec![&hole]).unwrap();

        let mut renderer = CutoutRenderer::new();
        blob.scan(&mut renderer, None);
        let out = renderer.into_image();

        assert_eq!(out.dimensions(), (6, 6));
        // The hole block is painted over...
        assert_eq!(*out.get_pixel(3, 3), BLACK);
        assert_eq!(*out.get_pixel(2, 2), BLACK);
        // ...letter pixels keep their color...
        assert_eq!(*out.get_pixel(1, 1), RED);
        assert_eq!(*out.get_pixel(5, 1), RED);
        // ...and so do boundary pixels, which trigger no hook.
        assert_eq!(*out.get_pixel(0, 0), RED);
    }

    #[test]
    fn cutout_clips_writes_past_the_crop() {
        let image = RgbaImage::from_pixel(12, 12, RED);
        // A diamond: the bounding rect's corners are outside it, and the
        // scan's trailing edges fall past the crop entirely.
        let diamond = vec![
            Point::new(5, 2),
            Point::new(8, 5),
            Point::new(5, 8),
            Point::new(2, 5),
        ];
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &diamond, vec![]).unwrap();

        let mut renderer = CutoutRenderer::new();
        blob.scan(&mut renderer, None);
        let out = renderer.into_image();

        assert_eq!(out.dimensions(), (6, 6));
        // Corners are outside the diamond.
        assert_eq!(*out.get_pixel(0, 0), BLACK);
        assert_eq!(*out.get_pixel(5, 5), BLACK);
        // The center is inside; the edge midpoints are on the boundary.
        assert_eq!(*out.get_pixel(3, 3), RED);
        assert_eq!(*out.get_pixel(3, 0), RED);
    }
}
