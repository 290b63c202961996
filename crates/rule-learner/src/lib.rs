//! Rule Learner Interface
//!
//! Defines the contract a rule-induction engine offers to callers:
//! construction from a configuration value and a `fit` over a
//! samples-as-rows feature matrix. The engine itself lives elsewhere.

pub mod settings;
mod error;
mod learner;

pub use settings::{PruningMetric, RipperConfig};
pub use error::ConfigError;
pub use learner::RuleLearner;
