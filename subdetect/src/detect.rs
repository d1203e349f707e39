//! Detection parameters and the pointed-blob flow.
//!
//! The pieces in this module sit closest to the caller: a tuning structure
//! the caller owns, a cheap frame-similarity test for skipping work on
//! unchanged frames, and the glue which turns "the user pointed at this
//! pixel" into a [`Blob`](crate::blob::Blob)-ready selection.

use image::RgbaImage;
use log::{debug, trace};

use crate::contour::{children, ContourSet};
use crate::errors::PickError;
use crate::geom::{Point, Rect, Size};
use crate::hsv::Hsv;
use crate::lines::group_into_lines;
use crate::select::{select_at, Selection, SelectionBehavior};

/// A blob's bounding rect may not exceed this fraction of the frame in
/// either dimension; subtitles are small.
const MAX_BLOB_FRACTION: f64 = 0.20;

/// Detection tuning, owned by the caller.
///
/// The detection passes only ever read these values; persisting them
/// between runs is the caller's business.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Lower HSV bound of the subtitle color to hunt for.
    pub hsv_min: Hsv,
    /// Upper HSV bound of the subtitle color to hunt for.
    pub hsv_max: Hsv,
    /// The region of the frame where subtitles appear.
    pub zone: Rect,
    /// The largest outline that may count as a single character.
    pub char_max_size: Size,
    /// Binarization threshold handed to the contour extraction step.
    pub thresh: i32,
    /// Largest x distance between neighboring mass centers on one line.
    pub x_tolerance: i32,
    /// Largest y drift of a mass center from its line's first y.
    pub y_tolerance: i32,
    /// Two text zones closer than this (per pixel) count as the same
    /// text.  Between 0 and 1.
    pub match_ratio: f64,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            hsv_min: Hsv::default(),
            hsv_max: Hsv::default(),
            zone: Rect::ltwh(0, 0, 1, 1),
            char_max_size: Size::new(5, 5),
            thresh: 85,
            x_tolerance: 1,
            y_tolerance: 0,
            match_ratio: 0.05,
        }
    }
}

impl Params {
    /// Group a frame's extracted mass centers into text line rects using
    /// these parameters.  See [`group_into_lines`].
    pub fn line_rects(&self, set: &ContourSet) -> Vec<Rect> {
        group_into_lines(
            &set.mass_centers,
            &set.boundings,
            &self.zone,
            self.char_max_size,
            self.x_tolerance,
            self.y_tolerance,
        )
    }
}

/// Are two frames similar enough to be the same text?
///
/// Compares the L2 distance over all channels, normalized by pixel count,
/// against `match_ratio`.  Frames of different dimensions never match.
pub fn images_match(first: &RgbaImage, second: &RgbaImage, match_ratio: f64) -> bool {
    if first.dimensions() != second.dimensions() {
        debug!("images have different dimensions");
        return false;
    }
    let mut squared_sum: u64 = 0;
    for (a, b) in first.pixels().zip(second.pixels()) {
        for channel in 0..4 {
            let diff = i64::from(a.0[channel]) - i64::from(b.0[channel]);
            squared_sum += (diff * diff) as u64;
        }
    }
    let distance = cast::f64(squared_sum).sqrt();
    let pixels = cast::f64(first.width()) * cast::f64(first.height());
    let match_value = distance / pixels;
    trace!("distance: {}, match value: {}", distance, match_value);
    match_value < match_ratio
}

/// The contour picked for a queried point, ready to build a blob from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointedBlob {
    /// The winning contour's index in the [`ContourSet`].
    pub index: usize,
    /// Indices of the winning contour's holes, in sibling-chain order.
    pub holes: Vec<usize>,
}

/// Find the blob under `point`, rejecting implausible winners.
///
/// Runs [`select_at`] over the set, then applies the subtitle-sized sanity
/// check: a winner whose bounding rect is wider or taller than 20% of the
/// frame cannot be a letter shape, and comes back as
/// [`PickError::Inconsistent`].  The returned indices plug straight into
/// [`Blob::new`](crate::blob::Blob::new).
pub fn pointed_blob(
    image: &RgbaImage,
    set: &ContourSet,
    point: Point,
    behavior: SelectionBehavior,
) -> Result<PointedBlob, PickError> {
    let index = match select_at(point, set, behavior) {
        Selection::NotFound => return Err(PickError::NoCandidate),
        Selection::Ambiguous => return Err(PickError::Ambiguous),
        Selection::Picked(index) => index,
    };

    let bounding = set.boundings[index];
    debug!("picked contour {} with bounding {:?}", index, bounding);
    if cast::f64(bounding.width()) / cast::f64(image.width()) > MAX_BLOB_FRACTION
        || cast::f64(bounding.height()) / cast::f64(image.height()) > MAX_BLOB_FRACTION
    {
        return Err(PickError::Inconsistent);
    }

    Ok(PointedBlob {
        index,
        holes: children(&set.hierarchy, index),
    })
}
