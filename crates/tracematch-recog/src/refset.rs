//! ReferenceSet - labeled prototype vectors
//!
//! A `ReferenceSet` holds the intensity vectors a query is compared
//! against, one per label. Entries keep their insertion order: scoring
//! walks the set front to back, which makes report ordering and the
//! first-max tie-break deterministic and observable.

use tracematch_core::IntensityVector;

use crate::error::{RecogError, RecogResult};
use crate::report::{ScoreEntry, ScoreReport};
use crate::score::inner_product;

/// A single labeled reference
#[derive(Debug, Clone)]
pub struct ReferenceEntry {
    label: String,
    vector: IntensityVector,
}

impl ReferenceEntry {
    /// Get the label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the reference vector.
    #[inline]
    pub fn vector(&self) -> &IntensityVector {
        &self.vector
    }
}

/// Insertion-ordered collection of labeled reference vectors
///
/// Labels are unique and every vector in a set has the same length; both
/// invariants are enforced at insertion. Once populated the set is treated
/// as read-only: scoring takes `&self` and any number of queries can be
/// scored against the same set.
///
/// # Examples
///
/// ```
/// use tracematch_core::IntensityVector;
/// use tracematch_recog::ReferenceSet;
///
/// let mut refs = ReferenceSet::new();
/// refs.insert("A", IntensityVector::from_slice(&[1.0, 2.0])).unwrap();
/// refs.insert("B", IntensityVector::from_slice(&[2.0, 1.0])).unwrap();
///
/// let query = IntensityVector::from_slice(&[1.0, 0.0]);
/// let report = refs.score(&query).unwrap();
/// assert_eq!(report.winner().label, "B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceSet {
    /// Create a new empty ReferenceSet
    pub fn new() -> Self {
        ReferenceSet {
            entries: Vec::new(),
        }
    }

    /// Insert a labeled vector
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::DuplicateLabel`] if the label is already
    /// present, [`RecogError::InvalidParameter`] if the label is empty or
    /// the vector has no elements, and [`RecogError::DimensionMismatch`]
    /// if the vector's length differs from the length established by the
    /// first entry.
    pub fn insert(&mut self, label: impl Into<String>, vector: IntensityVector) -> RecogResult<()> {
        let label = label.into();
        if label.is_empty() {
            return Err(RecogError::InvalidParameter(
                "label cannot be empty".to_string(),
            ));
        }
        if vector.is_empty() {
            return Err(RecogError::InvalidParameter(
                "reference vector cannot be empty".to_string(),
            ));
        }
        if self.entries.iter().any(|e| e.label == label) {
            return Err(RecogError::DuplicateLabel(label));
        }
        if let Some(expected) = self.vector_len() {
            if vector.len() != expected {
                return Err(RecogError::DimensionMismatch {
                    left: expected,
                    right: vector.len(),
                });
            }
        }

        self.entries.push(ReferenceEntry { label, vector });
        Ok(())
    }

    /// Get the number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set has no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the common vector length, or `None` if the set is empty.
    pub fn vector_len(&self) -> Option<usize> {
        self.entries.first().map(|e| e.vector.len())
    }

    /// Look up a reference vector by label.
    pub fn get(&self, label: &str) -> Option<&IntensityVector> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.vector)
    }

    /// Iterate over the references in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    /// Score a query vector against every reference
    ///
    /// Computes the inner product of the query with each reference in
    /// insertion order and returns the full per-label score list together
    /// with the winner. The winner is the label with the strictly greatest
    /// score; on ties the first-encountered label wins.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::EmptyReferenceSet`] if no references are
    /// loaded, and [`RecogError::DimensionMismatch`] if the query's length
    /// differs from the references' (unreachable when both come from the
    /// same [`Classifier`], which rasterizes them identically).
    ///
    /// [`Classifier`]: crate::Classifier
    pub fn score(&self, query: &IntensityVector) -> RecogResult<ScoreReport> {
        if self.entries.is_empty() {
            return Err(RecogError::EmptyReferenceSet);
        }

        let mut scores = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let score = inner_product(query, &entry.vector)?;
            scores.push(ScoreEntry {
                label: entry.label.clone(),
                score,
            });
        }

        Ok(ScoreReport::new(scores))
    }
}
