//! Axis Swapping

use crate::error::MatrixError;
use ndarray::{Array2, ArrayView2};
use tracing::trace;

/// Swap the axes of a view without copying
///
/// Only the strides change, so the result aliases the caller's data and
/// element values are untouched.
pub fn transpose_view<A>(view: ArrayView2<'_, A>) -> ArrayView2<'_, A> {
    view.reversed_axes()
}

/// Copy a view into a new row-major array with the axes swapped
pub fn transpose_owned<A: Clone>(view: ArrayView2<'_, A>) -> Array2<A> {
    view.t().as_standard_layout().into_owned()
}

/// Build a row-major array from nested rows
///
/// Every row must be as wide as the first one. An empty slice yields a 0x0 array.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, MatrixError> {
    let cols = check_rectangular(rows)?;
    Ok(Array2::from_shape_fn((rows.len(), cols), |(i, j)| rows[i][j]))
}

/// Copying transpose of nested rows
pub fn transpose_rows(rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, MatrixError> {
    let cols = check_rectangular(rows)?;
    trace!("Transposing nested rows: {}x{}", rows.len(), cols);

    Ok((0..cols)
        .map(|j| rows.iter().map(|row| row[j]).collect())
        .collect())
}

fn check_rectangular(rows: &[Vec<f64>]) -> Result<usize, MatrixError> {
    let expected = rows.first().map_or(0, Vec::len);

    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(MatrixError::RaggedRows {
                row,
                expected,
                actual: values.len(),
            });
        }
    }

    Ok(expected)
}
