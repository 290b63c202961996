//! RIPPER Adapter
//!
//! Callers hold their data one row per feature; the wrapped rule learner wants
//! one row per sample. [`Ripper`] owns a learner, swaps the matrix axes and
//! forwards everything else untouched.
//!
//! ```ignore
//! let mut ripper = Ripper::<MyEngine>::new(RipperConfig::default())?;
//! let ruleset = ripper.fit(x.view(), &labels, &feature_names, &positive)?;
//! ```

mod adapter;
mod error;

pub use adapter::Ripper;
pub use error::FitError;

pub use feature_matrix::{MatrixError, MatrixShape, Orientation};
pub use rule_learner::{PruningMetric, RipperConfig, RuleLearner};
