//! redeem-vector: a resizable numeric vector with amortized growth.
//!
//! The crate provides `Vector<T>`, an ordered container of numeric scalars
//! that tracks its logical length separately from its allocated capacity,
//! grows geometrically on append, and supports element-wise arithmetic
//! (addition, subtraction, scaling, dot product, division, negation and the
//! Euclidean norm).
//!
//! Every fallible operation validates its inputs before touching state, so a
//! failed call leaves the vector exactly as it was.
//!
//! ```
//! use redeem_vector::vector;
//!
//! let v = vector![1, 2, 3];
//! let w = vector![4, 5, 6];
//! assert_eq!(&v + &w, vector![5, 7, 9]);
//! assert_eq!(v.dot(&w).unwrap(), 32);
//! assert_eq!(v.to_string(), "(1, 2, 3)");
//! ```
pub mod config;
pub mod error;
pub mod math;

pub use config::{load_vector_config, VectorConfig, DEFAULT_MAX_SIZE};
pub use error::{Result, VectorError};
pub use math::{Operand, Product, Scalar, Vector};

/// Build a [`Vector`] from a list of elements, like `Vector(1, 2, 3)`.
///
/// ```
/// use redeem_vector::vector;
///
/// let v = vector![1.5, 2.5];
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.capacity(), 5);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::math::Vector::empty()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::math::Vector::new(::std::vec![$($elem),+])
    };
}
