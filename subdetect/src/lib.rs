//! This crate finds subtitle text in video frames, and characterizes the
//! letter shapes it finds by color.
//!
//! It sits between a contour-extraction step and an OCR engine: given the
//! outlines, bounding rects and mass centers that extraction produces for a
//! thresholded frame, it can
//!
//! 1. group character-sized outlines into per-line bounding rects
//!    ([`lines::group_into_lines`]), ready to hand to OCR, and
//! 2. pick the outline under a queried pixel ([`select::select_at`],
//!    [`detect::pointed_blob`]) and walk every pixel of it
//!    ([`blob::Blob::scan`]), either sampling the letter's HSV color range
//!    ([`sample::HsvSampler`]) or rendering a clean cut-out of it with the
//!    surroundings masked away ([`sample::CutoutRenderer`]).
//!
//! The color range sampled from one letter is exactly what you need to
//! threshold the next frame with, so the two halves feed each other: point
//! at a subtitle once, then keep detecting text of the same style
//! automatically.
//!
//! ## What this crate does not do
//!
//! Contour extraction, OCR, configuration persistence and frame decoding
//! all stay outside: this crate only consumes their outputs.  See
//! [`contour::ContourSet`] for the shape of the extraction hand-off.
//!
//! ## Concurrency
//!
//! Everything here is a synchronous, pure function of its inputs.  No
//! global state exists, so independent calls may run on separate threads
//! without synchronization; input collections must simply not be mutated
//! while a call borrows them.

#![warn(missing_docs)]

pub mod blob;
pub mod contour;
pub mod detect;
mod errors;
pub mod geom;
pub mod hsv;
pub mod lines;
pub mod sample;
pub mod select;
pub mod stats;

pub use crate::errors::{BoundsError, PickError};
pub use common_failures::{Error, Result};
