//! Delegating Adapter

use crate::error::FitError;
use feature_matrix::{from_rows, transpose_view, MatrixShape, Orientation};
use ndarray::ArrayView2;
use rule_learner::RuleLearner;
use tracing::debug;

/// Wraps a rule learner so it can be fed features-as-rows matrices
///
/// The adapter has no configuration or state of its own. Construction
/// arguments go straight to the learner, and every error the learner raises
/// reaches the caller unchanged.
#[derive(Debug, Clone)]
pub struct Ripper<L> {
    learner: L,
}

impl<L: RuleLearner> Ripper<L> {
    /// Construct the wrapped learner from `config`
    pub fn new(config: L::Config) -> Result<Self, L::Error> {
        L::new(config).map(Self::from_learner)
    }

    /// Wrap a learner that has already been constructed
    pub fn from_learner(learner: L) -> Self {
        Self { learner }
    }

    /// Train on a features-as-rows matrix
    ///
    /// `x` has one row per feature and one column per sample. The learner
    /// receives a transposed view of it (no copy) along with `labels`,
    /// `feature_names` and `positive_class` exactly as given.
    pub fn fit(
        &mut self,
        x: ArrayView2<'_, f64>,
        labels: &[L::Label],
        feature_names: &[String],
        positive_class: &L::Label,
    ) -> Result<L::Output, L::Error> {
        let shape = MatrixShape::of(&x);
        debug!(
            features = shape.features(Orientation::FeaturesAsRows),
            samples = shape.samples(Orientation::FeaturesAsRows),
            "Delegating fit: {} -> {}",
            shape,
            shape.transposed()
        );

        self.learner
            .fit(transpose_view(x), labels, feature_names, positive_class)
    }

    /// Train on nested features-as-rows data
    ///
    /// The rows are copied into a contiguous matrix first; ragged input fails
    /// there, before the learner is called.
    pub fn fit_rows(
        &mut self,
        rows: &[Vec<f64>],
        labels: &[L::Label],
        feature_names: &[String],
        positive_class: &L::Label,
    ) -> Result<L::Output, FitError<L::Error>> {
        let x = from_rows(rows)?;
        self.fit(x.view(), labels, feature_names, positive_class)
            .map_err(FitError::Learner)
    }
}
