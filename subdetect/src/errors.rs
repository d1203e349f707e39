//! Error types for the detection passes.
//!
//! Only genuinely fatal conditions become errors; an empty detection zone or
//! an input with nothing to find yields empty results instead.

use failure::Fail;

use crate::geom::Rect;

/// Why no blob could be handed back for a queried point.
#[derive(Clone, Copy, Debug, Eq, Fail, PartialEq)]
pub enum PickError {
    /// No contour contains the point.
    #[fail(display = "no blob found at the queried point")]
    NoCandidate,
    /// Several contours contain the point, and the caller expressed no
    /// preference for picking one.
    #[fail(display = "multiple blobs contain the queried point")]
    Ambiguous,
    /// The winning contour is too large to plausibly be part of a
    /// subtitle.
    #[fail(display = "blob at the queried point is implausibly large")]
    Inconsistent,
}

/// A bounding rect that does not fit inside its raster.  This is a
/// programming error at the call site: the extraction collaborator only
/// ever delivers rects within the frame they came from.
#[derive(Clone, Copy, Debug, Eq, Fail, PartialEq)]
#[fail(
    display = "bounding rect {:?} extends outside a {}x{} raster",
    bounding, width, height
)]
pub struct BoundsError {
    /// The offending rect.
    pub bounding: Rect,
    /// The raster's width.
    pub width: u32,
    /// The raster's height.
    pub height: u32,
}
