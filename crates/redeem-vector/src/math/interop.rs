//! Conversions to and from `ndarray::Array1`.
use ndarray::Array1;

use crate::math::vector::Vector;

impl<T> From<Vector<T>> for Array1<T> {
    fn from(value: Vector<T>) -> Self {
        Array1::from_vec(Vec::from(value))
    }
}

/// Copies elements in logical order, so sliced, strided and reversed views
/// convert to what they display.
impl<T: Clone> From<Array1<T>> for Vector<T> {
    fn from(value: Array1<T>) -> Self {
        Vector::from_vec(value.iter().cloned().collect())
    }
}
