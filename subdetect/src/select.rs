//! Choosing the contour under a queried point.
//!
//! When the user points at a letter, several extracted contours may contain
//! the pixel: the letter itself, an enclosing outline, or a nested shape.
//! This pass narrows the candidates down with a cheap bounding-rect filter
//! followed by exact containment, then breaks remaining ties by how many
//! children each candidate has in the forest.

use log::debug;

use crate::contour::{child_count, locate, ContourSet, Location};
use crate::geom::Point;

/// How to decide between several contours containing the same point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionBehavior {
    /// Keep the candidate with the fewest children: the innermost shape.
    PreferInner,
    /// Keep the candidate with the most children: the outermost shape.
    PreferOuter,
    /// Don't decide; report the ambiguity to the caller.
    Undecided,
}

/// The outcome of a selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    /// The index of the single best candidate.
    Picked(usize),
    /// Several candidates remain and the behavior was `Undecided`.
    Ambiguous,
    /// No contour contains the point.
    NotFound,
}

/// Select the contour containing `point`, disambiguating with `behavior`.
///
/// Candidates are compared by their direct child count in the forest; a
/// candidate only displaces the running best when it is strictly better
/// under the chosen behavior, so the first-encountered candidate wins
/// ties.  Callers wanting a sanity check on the winner's size should apply
/// it to the returned index (see `detect::pointed_blob`).
pub fn select_at(point: Point, set: &ContourSet, behavior: SelectionBehavior) -> Selection {
    // First pass: cheap bounding-rect filter.
    let mut candidates: Vec<usize> = (0..set.contours.len())
        .filter(|&i| set.boundings[i].contains(point))
        .collect();
    debug!(
        "{} bounding rect(s) contain {:?}",
        candidates.len(),
        point
    );

    // Second pass: exact containment, boundary included.
    candidates.retain(|&i| locate(&set.contours[i], point) != Location::Outside);
    debug!("{} contour(s) contain {:?}", candidates.len(), point);

    if candidates.is_empty() {
        return Selection::NotFound;
    }
    if candidates.len() == 1 {
        return Selection::Picked(candidates[0]);
    }

    let prefer_inner = match behavior {
        SelectionBehavior::PreferInner => true,
        SelectionBehavior::PreferOuter => false,
        SelectionBehavior::Undecided => return Selection::Ambiguous,
    };

    let mut chosen = candidates[0];
    let mut best = child_count(&set.hierarchy, chosen);
    for &index in &candidates[1..] {
        let count = child_count(&set.hierarchy, index);
        let better = if prefer_inner {
            count < best
        } else {
            count > best
        };
        if better {
            best = count;
            chosen = index;
        }
    }
    debug!("chose contour {} with {} children", chosen, best);
    Selection::Picked(chosen)
}
