//! The numeric vector and the pieces it is built from.
//!
//! `storage` owns the buffer and the growth policy, `validation` holds the
//! checks shared by mutation and arithmetic, `vector` defines the container and
//! its mutators, and `arithmetic` adds the element-wise operations and
//! operator impls.
pub mod arithmetic;
pub mod interop;
pub mod scalar;
mod storage;
pub mod validation;
pub mod vector;

pub use arithmetic::{Operand, Product};
pub use scalar::Scalar;
pub use vector::Vector;
