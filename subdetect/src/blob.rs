//! Pixel-by-pixel classification of one blob.
//!
//! A blob is a single selected contour plus the holes nested inside it.
//! `Blob::scan` walks every pixel of the blob's bounding rect, decides
//! whether the pixel is outside the contour, inside one of its holes, or
//! inside the letter shape itself, and dispatches to a caller-supplied
//! [`PixelSink`].  The sink decides what classification means: collecting
//! color statistics, painting a masked copy, or anything else.

use common_failures::prelude::*;
use image::{imageops, RgbaImage};

use crate::contour::{locate, Contour, Location};
use crate::errors::BoundsError;
use crate::geom::{Point, Rect};

/// Per-pixel behavior plugged into [`Blob::scan`].
///
/// Every method defaults to a no-op, so implementations only spell out the
/// classifications they care about.  Pixels arrive in original-frame
/// coordinates; use [`Blob::to_blob_origin`] for coordinates relative to
/// the blob's crop.
pub trait PixelSink {
    /// Called once before the walk starts.
    fn initialize(&mut self, _blob: &Blob) {}

    /// Called for each pixel inside the contour but not in any hole.
    fn inside(&mut self, _blob: &Blob, _pixel: Point) {}

    /// Called for each pixel contained in one of the contour's holes.
    fn in_hole(&mut self, _blob: &Blob, _pixel: Point) {}

    /// Called for each pixel outside the contour.
    fn outside(&mut self, _blob: &Blob, _pixel: Point) {}

    /// Called once after the walk completes.
    fn finalize(&mut self, _blob: &Blob) {}
}

/// One classification session: a frame, a bounding rect, the selected
/// contour, and the contour's holes.
///
/// A `Blob` only lives for the duration of one scan; it borrows its inputs
/// and is discarded once the sink has produced its output.
pub struct Blob<'a> {
    image: &'a RgbaImage,
    bounding: Rect,
    contour: &'a Contour,
    holes: Vec<&'a Contour>,
}

impl<'a> Blob<'a> {
    /// Create a classification session.
    ///
    /// `bounding` is the contour's bounding rect as delivered by the
    /// extraction collaborator; the contour and its holes are expected to
    /// lie within it.  Fails with [`BoundsError`] if `bounding` extends
    /// outside the frame.
    pub fn new(
        image: &'a RgbaImage,
        bounding: Rect,
        contour: &'a Contour,
        holes: Vec<&'a Contour>,
    ) -> Result<Blob<'a>> {
        if bounding.left() < 0
            || bounding.top() < 0
            || i64::from(bounding.right()) > i64::from(image.width())
            || i64::from(bounding.bottom()) > i64::from(image.height())
        {
            return Err(BoundsError {
                bounding,
                width: image.width(),
                height: image.height(),
            }
            .into());
        }
        Ok(Blob {
            image,
            bounding,
            contour,
            holes,
        })
    }

    /// The blob's bounding rect, in frame coordinates.
    pub fn bounding(&self) -> Rect {
        self.bounding
    }

    /// The blob's outer contour.
    pub fn contour(&self) -> &Contour {
        self.contour
    }

    /// The holes nested inside the contour.
    pub fn holes(&self) -> &[&'a Contour] {
        &self.holes
    }

    /// Copy the bounding rect's pixels out of the frame.
    pub fn cropped(&self) -> RgbaImage {
        // The casts cannot fail: `new` checked the rect against the frame.
        imageops::crop_imm(
            self.image,
            cast::u32(self.bounding.left()).expect("bounding checked at construction"),
            cast::u32(self.bounding.top()).expect("bounding checked at construction"),
            cast::u32(self.bounding.width()).expect("bounding checked at construction"),
            cast::u32(self.bounding.height()).expect("bounding checked at construction"),
        )
        .to_image()
    }

    /// Shift a point from frame coordinates to blob-crop coordinates.
    pub fn to_blob_origin(&self, p: Point) -> Point {
        Point::new(p.x - self.bounding.left(), p.y - self.bounding.top())
    }

    /// Shift a point from blob-crop coordinates back to frame coordinates.
    pub fn to_frame_origin(&self, p: Point) -> Point {
        Point::new(p.x + self.bounding.left(), p.y + self.bounding.top())
    }

    /// Walk every pixel of the bounding rect and classify it.
    ///
    /// The walk runs column by column, visiting `right()` and `bottom()`
    /// inclusive, one pixel past the rect's own extent on each trailing
    /// edge.  Pixels exactly on the contour's boundary trigger no sink
    /// method at all.  A pixel inside the contour counts as in a hole when
    /// any hole contains it, boundary included.  When `collected` is
    /// supplied, every `inside` pixel is appended to it in frame
    /// coordinates.
    ///
    /// A zero-sized frame makes the whole call a no-op: the sink is never
    /// invoked, not even to initialize.
    pub fn scan(&self, sink: &mut dyn PixelSink, mut collected: Option<&mut Vec<Point>>) {
        if self.image.width() == 0 || self.image.height() == 0 {
            return;
        }

        sink.initialize(self);

        for col in self.bounding.left()..=self.bounding.right() {
            for row in self.bounding.top()..=self.bounding.bottom() {
                let pixel = Point::new(col, row);
                match locate(self.contour, pixel) {
                    Location::Outside => sink.outside(self, pixel),
                    Location::OnBoundary => {}
                    Location::Inside => {
                        let in_hole = self
                            .holes
                            .iter()
                            .any(|hole| locate(hole, pixel) != Location::Outside);
                        if in_hole {
                            sink.in_hole(self, pixel);
                        } else {
                            if let Some(points) = collected.as_deref_mut() {
                                points.push(pixel);
                            }
                            sink.inside(self, pixel);
                        }
                    }
                }
            }
        }

        sink.finalize(self);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// A sink which tallies how often each classification fired.
    #[derive(Default)]
    struct Recorder {
        initialized: u32,
        finalized: u32,
        inside: u32,
        in_hole: u32,
        outside: u32,
    }

    impl PixelSink for Recorder {
        fn initialize(&mut self, _blob: &Blob) {
            self.initialized += 1;
        }
        fn inside(&mut self, _blob: &Blob, _pixel: Point) {
            self.inside += 1;
        }
        fn in_hole(&mut self, _blob: &Blob, _pixel: Point) {
            self.in_hole += 1;
        }
        fn outside(&mut self, _blob: &Blob, _pixel: Point) {
            self.outside += 1;
        }
        fn finalize(&mut self, _blob: &Blob) {
            self.finalized += 1;
        }
    }

    fn square(left: i32, top: i32, side: i32) -> Contour {
        vec![
            Point::new(left, top),
            Point::new(left + side, top),
            Point::new(left + side, top + side),
            Point::new(left, top + side),
        ]
    }

    #[test]
    fn scan_classifies_square_with_hole() {
        let image = RgbaImage::new(12, 12);
        let outer = square(2, 2, 6);
        let hole = square(4, 4, 2);
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &outer, vec![&hole]).unwrap();

        let mut recorder = Recorder::default();
        blob.scan(&mut recorder, None);

        assert_eq!(recorder.initialized, 1);
        assert_eq!(recorder.finalized, 1);
        // The hole contains its own boundary: a 3x3 block of pixels.
        assert_eq!(recorder.in_hole, 9);
        // Strictly inside the outer square (5x5) minus the hole block.
        assert_eq!(recorder.inside, 16);
        // The square's boundary covers the rest of the walk, and boundary
        // pixels trigger nothing.
        assert_eq!(recorder.outside, 0);
    }

    #[test]
    fn scan_visits_one_pixel_past_each_trailing_edge() {
        let image = RgbaImage::new(12, 12);
        // A diamond leaves the corners of its bounding rect uncovered.
        let diamond = vec![
            Point::new(5, 2),
            Point::new(8, 5),
            Point::new(5, 8),
            Point::new(2, 5),
        ];
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &diamond, vec![]).unwrap();

        let mut recorder = Recorder::default();
        blob.scan(&mut recorder, None);

        // The walk covers 7x7 pixels, not 6x6: 12 on the diamond's edges,
        // 13 inside it, and the remaining corners outside.
        assert_eq!(recorder.inside, 13);
        assert_eq!(recorder.outside, 49 - 12 - 13);
    }

    #[test]
    fn scan_collects_inside_pixels_in_frame_coordinates() {
        let image = RgbaImage::new(12, 12);
        let diamond = vec![
            Point::new(5, 2),
            Point::new(8, 5),
            Point::new(5, 8),
            Point::new(2, 5),
        ];
        let blob = Blob::new(&image, Rect::ltwh(2, 2, 6, 6), &diamond, vec![]).unwrap();

        let mut recorder = Recorder::default();
        let mut points = vec![];
        blob.scan(&mut recorder, Some(&mut points));

        assert_eq!(points.len(), 13);
        // Column-major walk: the leftmost inside pixel comes first.
        assert_eq!(points[0], Point::new(3, 5));
        assert!(points.contains(&Point::new(5, 5)));
    }

    #[test]
    fn scan_of_zero_sized_frame_is_a_no_op() {
        let image = RgbaImage::new(0, 0);
        let contour = square(0, 0, 0);
        let blob = Blob::new(&image, Rect::ltwh(0, 0, 0, 0), &contour, vec![]).unwrap();

        let mut recorder = Recorder::default();
        blob.scan(&mut recorder, None);

        assert_eq!(recorder.initialized, 0);
        assert_eq!(recorder.finalized, 0);
    }

    #[test]
    fn bounding_outside_the_frame_is_rejected() {
        let image = RgbaImage::new(12, 12);
        let contour = square(8, 8, 6);
        assert!(Blob::new(&image, Rect::ltwh(8, 8, 6, 6), &contour, vec![]).is_err());
        assert!(Blob::new(&image, Rect::ltwh(-1, 0, 4, 4), &contour, vec![]).is_err());
    }
}
