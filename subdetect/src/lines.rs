//! Grouping character candidates into subtitle lines.
//!
//! Subtitle text shows up in a contour extraction as a row of small
//! outlines whose mass centers share (almost) the same y coordinate.  This
//! pass finds the largest such alignment, folds the aligned outlines'
//! bounding rects into one line rect, and repeats until no candidates are
//! left.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::geom::{Point, Rect, Size};

/// Group mass centers into one bounding rect per detected text line.
///
/// `mass_centers` and `boundings` are parallel: entry `i` of each describes
/// the same extracted outline.  Only centers inside `zone` whose outline
/// fits within `char_max_size` take part.  `y_tolerance` bounds how far a
/// center's y may drift from the *first* y of its line (the reference never
/// slides), and `x_tolerance` bounds the spacing between neighboring
/// centers along the line: the first wider gap ends the line, even if a
/// center further right would have been close enough to a later neighbor.
///
/// Returns the detected line rects ordered top to bottom.  A degenerate
/// `zone` or an input with no valid alignment yields an empty list; this
/// function has no failure case.
pub fn group_into_lines(
    mass_centers: &[Point],
    boundings: &[Rect],
    zone: &Rect,
    char_max_size: Size,
    x_tolerance: i32,
    y_tolerance: i32,
) -> Vec<Rect> {
    let mut rects = vec![];

    if zone.is_empty() {
        debug!("degenerate detection zone, skipping line grouping");
        return rects;
    }

    // Keep only centers inside the zone whose outline could be a single
    // character.
    let mut survivors: Vec<(Point, Rect)> = vec![];
    for (center, bounding) in mass_centers.iter().zip(boundings) {
        if zone.contains(*center)
            && bounding.width() <= char_max_size.width
            && bounding.height() <= char_max_size.height
        {
            survivors.push((*center, *bounding));
        }
    }
    if survivors.is_empty() {
        debug!("no candidate centers inside the detection zone");
        return rects;
    }

    // Left-to-right scan order, ties broken by y.
    survivors.sort_by_key(|&(center, _)| (center.x, center.y));

    while !survivors.is_empty() {
        // Count the surviving centers at each distinct y.
        let mut alignment_counts: BTreeMap<i32, u32> = BTreeMap::new();
        for &(center, _) in &survivors {
            *alignment_counts.entry(center.y).or_insert(0) += 1;
        }
        trace!("alignment counts: {:?}", alignment_counts);

        // Search for the run of y keys holding the most centers.  Every
        // candidate window is measured from its own starting key, and only
        // a strictly larger total displaces the best, so the first window
        // to reach the maximum keeps it.
        let keys: Vec<i32> = alignment_counts.keys().copied().collect();
        let mut max_count = 0;
        let mut first_key = keys[0];
        let mut last_key = keys[0];
        for i in 0..keys.len() {
            let ref_y = keys[i];
            let mut count = alignment_counts[&ref_y];
            if count > max_count {
                max_count = count;
                first_key = ref_y;
                last_key = ref_y;
            }
            for &key in &keys[i + 1..] {
                if key - ref_y > y_tolerance {
                    break;
                }
                count += alignment_counts[&key];
                if count > max_count {
                    max_count = count;
                    first_key = ref_y;
                    last_key = key;
                }
            }
        }
        trace!(
            "best alignment [{}, {}] holds {} centers",
            first_key,
            last_key,
            max_count
        );

        if max_count == 1 {
            // An isolated center can't be part of a line.  Drop it and
            // start over.
            if let Some(pos) = survivors.iter().position(|&(c, _)| c.y == first_key) {
                survivors.remove(pos);
            }
            continue;
        }

        // Fold the aligned centers' bounding rects into one rect, left to
        // right, consuming each accepted center.
        let mut last_x: Option<i32> = None;
        let mut accepted: u32 = 0;
        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;

        let mut i = 0;
        'fold: while i < survivors.len() {
            let (center, bounding) = survivors[i];
            if center.y >= first_key && center.y <= last_key {
                match last_x {
                    Some(last) if center.x - last > x_tolerance => {
                        // This center is too far from the previous one,
                        // and everything further right is farther still.
                        trace!("gap of {} ends the line", center.x - last);
                        break 'fold;
                    }
                    _ => {
                        min_x = min_x.min(bounding.left());
                        min_y = min_y.min(bounding.top());
                        max_x = max_x.max(bounding.right());
                        max_y = max_y.max(bounding.bottom());
                        last_x = Some(center.x);
                        accepted += 1;
                        survivors.remove(i);
                        continue 'fold;
                    }
                }
            }
            i += 1;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        // A real text line holds several characters and has some extent.
        if accepted > 2 && width > x_tolerance * 3 && height >= y_tolerance / 10 {
            debug!(
                "valid line rect: count[{}] w[{}] h[{}]",
                accepted, width, height
            );
            rects.push(Rect::ltwh(min_x, min_y, width, height));
        } else {
            debug!(
                "invalid line rect: count[{}] w[{}] h[{}]",
                accepted, width, height
            );
        }
    }

    // Top of the frame first.
    rects.sort_by_key(|r| r.top());
    rects
}
