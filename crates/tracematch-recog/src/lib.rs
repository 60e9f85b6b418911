//! Tracematch Recog - Nearest-prototype classification
//!
//! This crate scores grayscale intensity vectors against a fixed set of
//! labeled prototypes and selects the best match:
//!
//! - [`inner_product`] - Raw inner-product similarity of two vectors
//! - [`ReferenceSet`] - Insertion-ordered labeled prototype vectors
//! - [`Classifier`] - Raster-level orchestration (rasterize, score, argmax)
//! - [`ScoreReport`] - Per-reference scores, the winner, and text rendering
//!
//! Scoring is deliberately simple: a single unnormalized metric and no
//! training. The raster-to-vector conversion lives in `tracematch-core`.

pub mod classify;
pub mod error;
pub mod refset;
pub mod report;
pub mod score;

pub use classify::Classifier;
pub use error::{RecogError, RecogResult};
pub use refset::{ReferenceEntry, ReferenceSet};
pub use report::{ScoreEntry, ScoreReport};
pub use score::inner_product;
