//! Learner Trait

use ndarray::ArrayView2;

/// A rule-induction learner that trains on a samples-as-rows matrix
///
/// Implementations own whatever trained state they keep; `fit` may mutate it.
/// The result type is whatever the engine hands back (typically a ruleset).
pub trait RuleLearner: Sized {
    /// Constructor arguments
    type Config;
    /// Class label type, shared by the label vector and the positive class
    type Label;
    /// Result of a successful `fit`
    type Output;
    type Error: std::error::Error;

    /// Construct a learner from its configuration
    fn new(config: Self::Config) -> Result<Self, Self::Error>;

    /// Train on `x`, one row per sample and one column per feature
    ///
    /// `labels` holds one entry per row of `x` and `feature_names` one entry
    /// per column. `positive_class` selects the label treated as positive.
    fn fit(
        &mut self,
        x: ArrayView2<'_, f64>,
        labels: &[Self::Label],
        feature_names: &[String],
        positive_class: &Self::Label,
    ) -> Result<Self::Output, Self::Error>;
}
