use ndarray::{Array2, ArrayD, Ix2};

use crate::error::{ArfError, ArfResult};

/// Promotes a 1-D array to a single-row matrix; 2-D input passes through.
pub fn to_matrix<T: Clone>(x: ArrayD<T>) -> ArfResult<Array2<T>> {
    match x.ndim() {
        1 => {
            let n = x.len();
            x.into_shape((1, n))
                .map_err(|e| ArfError::DimensionMismatch(e.to_string()))
        }
        2 => x
            .into_dimensionality::<Ix2>()
            .map_err(|e| ArfError::DimensionMismatch(e.to_string())),
        d => Err(ArfError::DimensionMismatch(format!(
            "expected 1 or 2 dimensions, got {d}"
        ))),
    }
}

pub fn to_row<T: Clone>(x: ArrayD<T>) -> ArfResult<Array2<T>> {
    to_matrix(x)
}

/// Promotes a 1-D array to a single-column matrix; 2-D input passes through.
pub fn to_column<T: Clone>(x: ArrayD<T>) -> ArfResult<Array2<T>> {
    match x.ndim() {
        1 => {
            let n = x.len();
            x.into_shape((n, 1))
                .map_err(|e| ArfError::DimensionMismatch(e.to_string()))
        }
        2 => x
            .into_dimensionality::<Ix2>()
            .map_err(|e| ArfError::DimensionMismatch(e.to_string())),
        d => Err(ArfError::DimensionMismatch(format!(
            "expected 1 or 2 dimensions, got {d}"
        ))),
    }
}
