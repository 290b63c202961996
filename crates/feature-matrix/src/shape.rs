//! Matrix Shape and Orientation

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which axis of a two-dimensional feature matrix runs over features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// One row per feature, one column per sample
    FeaturesAsRows,
    /// One row per sample, one column per feature
    SamplesAsRows,
}

impl Orientation {
    /// The convention obtained by swapping the two axes
    pub fn transposed(self) -> Self {
        match self {
            Orientation::FeaturesAsRows => Orientation::SamplesAsRows,
            Orientation::SamplesAsRows => Orientation::FeaturesAsRows,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::FeaturesAsRows => "features_as_rows",
            Orientation::SamplesAsRows => "samples_as_rows",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row and column extents of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatrixShape {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of an existing view
    pub fn of<A>(view: &ArrayView2<'_, A>) -> Self {
        let (rows, cols) = view.dim();
        Self { rows, cols }
    }

    /// Shape after swapping the axes
    pub fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feature count under the given orientation
    pub fn features(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::FeaturesAsRows => self.rows,
            Orientation::SamplesAsRows => self.cols,
        }
    }

    /// Sample count under the given orientation
    pub fn samples(&self, orientation: Orientation) -> usize {
        self.features(orientation.transposed())
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
