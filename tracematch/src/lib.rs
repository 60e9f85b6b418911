//! Tracematch - grayscale template matching via trace inner products
//!
//! Tracematch classifies an image against a small set of labeled reference
//! images. Every image is reduced to a fixed-size grayscale intensity
//! vector (resample to an S x S grid, BT.601 luminance per pixel), and a
//! query is matched to the reference whose vector has the greatest inner
//! product with the query's. That score is the flattened form of the trace
//! product `tr(Aᵗ·B)` of the two images.
//!
//! This is a deliberately small nearest-prototype pipeline with a single,
//! unnormalized similarity metric and no training. Image decoding and
//! result presentation belong to the caller.
//!
//! # Example
//!
//! ```
//! use tracematch::{Raster, recog::Classifier};
//!
//! // Caller-decoded RGBA pixels: a white and a black 2x2 reference.
//! let white = Raster::from_rgba_data(2, 2, vec![255; 16]).unwrap();
//! let black = Raster::from_rgba_data(2, 2, vec![0, 0, 0, 255].repeat(4)).unwrap();
//!
//! let classifier =
//!     Classifier::from_labeled(&[("light", &white), ("dark", &black)], 2).unwrap();
//!
//! let report = classifier.classify(&white).unwrap();
//! assert_eq!(report.winner().label, "light");
//! println!("{report}");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tracematch_core::*;

// Re-export the classification crate as a module
pub use tracematch_recog as recog;
