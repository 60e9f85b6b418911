//! Classifier - raster-level orchestration
//!
//! The `Classifier` ties the pipeline together: it owns the downsample
//! side and a [`ReferenceSet`] built from labeled reference rasters, and
//! classifies query rasters against it. Because the classifier rasterizes
//! references and queries with the same side, every vector it compares has
//! the same length by construction.
//!
//! The classifier is an explicit value owned by the caller; building it and
//! classifying against it are plain synchronous calls with no hidden state,
//! so any presentation layer (CLI, web handler, test harness) can drive it.

use tracematch_core::{DEFAULT_GRID_SIDE, Raster};

use crate::error::{RecogError, RecogResult};
use crate::refset::ReferenceSet;
use crate::report::ScoreReport;

/// Nearest-prototype classifier over grayscale intensity vectors
///
/// # Examples
///
/// ```
/// use tracematch_core::Raster;
/// use tracematch_recog::Classifier;
///
/// let white = Raster::from_rgba_data(2, 2, vec![255; 16]).unwrap();
/// let black = Raster::from_rgba_data(2, 2, vec![0, 0, 0, 255].repeat(4)).unwrap();
///
/// let classifier = Classifier::from_labeled(&[("light", &white), ("dark", &black)], 2).unwrap();
/// let report = classifier.classify(&white).unwrap();
/// assert_eq!(report.winner().label, "light");
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Downsample side used for references and queries alike
    side: u32,
    refs: ReferenceSet,
}

impl Classifier {
    /// Create an empty classifier with the given downsample side
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if `side` is 0.
    pub fn new(side: u32) -> RecogResult<Self> {
        if side == 0 {
            return Err(RecogError::InvalidParameter(
                "grid side must be at least 1".to_string(),
            ));
        }
        Ok(Classifier {
            side,
            refs: ReferenceSet::new(),
        })
    }

    /// Create an empty classifier with the default 50x50 grid.
    pub fn with_default_side() -> Self {
        Classifier {
            side: DEFAULT_GRID_SIDE,
            refs: ReferenceSet::new(),
        }
    }

    /// Create a classifier from labeled reference rasters
    ///
    /// References are rasterized and inserted in the given order, which
    /// fixes report ordering and the tie-break preference.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if `side` is 0,
    /// [`RecogError::DuplicateLabel`] if two entries share a label, and
    /// propagates rasterization failures as [`RecogError::Core`].
    pub fn from_labeled(items: &[(&str, &Raster)], side: u32) -> RecogResult<Self> {
        let mut classifier = Classifier::new(side)?;
        for &(label, raster) in items {
            classifier.add_reference(label, raster)?;
        }
        Ok(classifier)
    }

    /// Add a labeled reference raster
    ///
    /// The raster is converted once, at insertion; the classifier never
    /// touches it again.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::DuplicateLabel`] if the label is already
    /// present and propagates rasterization failures as
    /// [`RecogError::Core`].
    pub fn add_reference(&mut self, label: impl Into<String>, raster: &Raster) -> RecogResult<()> {
        let vector = raster.intensity_vector(self.side)?;
        self.refs.insert(label, vector)
    }

    /// Get the downsample side.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Get the reference set.
    #[inline]
    pub fn references(&self) -> &ReferenceSet {
        &self.refs
    }

    /// Classify a query raster against the references
    ///
    /// The query is rasterized with the classifier's side and scored
    /// against every reference in insertion order; the label with the
    /// greatest inner product wins, with ties resolving to the
    /// first-encountered label.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::EmptyReferenceSet`] if no references have been
    /// added, and propagates rasterization failures as
    /// [`RecogError::Core`].
    pub fn classify(&self, query: &Raster) -> RecogResult<ScoreReport> {
        if self.refs.is_empty() {
            return Err(RecogError::EmptyReferenceSet);
        }
        let vector = query.intensity_vector(self.side)?;
        self.refs.score(&vector)
    }
}
