//! Tracematch Core - Basic data structures for template matching
//!
//! This crate provides the data types shared by the tracematch workspace:
//!
//! - [`Raster`] - Decoded RGBA image container (caller-supplied pixels)
//! - [`IntensityVector`] - Flattened grayscale intensities of a square grid
//! - [`colorspace`] - BT.601 RGB-to-gray conversion
//!
//! The rasterization pipeline ([`Raster::intensity_vector`]) resamples a
//! raster to a fixed square grid and collapses each pixel to a luminance
//! scalar. Classification over the resulting vectors lives in the
//! `tracematch-recog` crate.
//!
//! # Examples
//!
//! ```
//! use tracematch_core::{DEFAULT_GRID_SIDE, Raster};
//!
//! let raster = Raster::from_rgba_data(4, 4, vec![128; 64]).unwrap();
//! let vector = raster.intensity_vector(DEFAULT_GRID_SIDE).unwrap();
//! assert_eq!(vector.len(), (DEFAULT_GRID_SIDE * DEFAULT_GRID_SIDE) as usize);
//! ```

pub mod colorspace;
pub mod error;
pub mod raster;
pub mod vector;

pub use error::{Error, Result};
pub use raster::{DEFAULT_GRID_SIDE, Raster};
pub use vector::IntensityVector;
