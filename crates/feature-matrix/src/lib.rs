//! Feature Matrix Axis Conventions
//!
//! Rule learners disagree on how a dataset is laid out: some take one row per
//! feature, others one row per sample. This crate names the two conventions and
//! converts between them, either as a zero-copy stride swap over an
//! [`ndarray`] view or as a copying transpose for nested `Vec<Vec<f64>>` rows.

mod error;
mod shape;
mod transpose;

pub use error::MatrixError;
pub use shape::{MatrixShape, Orientation};
pub use transpose::{from_rows, transpose_owned, transpose_rows, transpose_view};
