use std::error::Error;
use std::fmt;

/// Errors raised by `Vector` operations.
///
/// Every variant is returned before any state is changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Binary operation between sequences of unequal length.
    DimensionMismatch { expected: usize, found: usize },
    /// The operation would grow the vector past its maximum size, or the
    /// backing buffer could not be grown.
    CapacityOverflow { requested: u64, max_size: u64 },
    /// Index outside `0..bound` for the operation that received it.
    IndexOutOfRange { index: usize, bound: usize },
    /// `pop_back` on a vector with no elements.
    EmptyContainer,
    /// Operand the operation cannot accept: a zero divisor, an integer
    /// result that overflows, or a zero maximum size.
    InvalidOperand(String),
    /// `resize` growth without enough fill values.
    InsufficientFillValues { needed: usize, provided: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "Vectors have different dimensions: expected {}, found {}",
                expected, found
            ),
            VectorError::CapacityOverflow {
                requested,
                max_size,
            } => write!(
                f,
                "Cannot hold {} elements: max size {} exceeded",
                requested, max_size
            ),
            VectorError::IndexOutOfRange { index, bound } => {
                write!(f, "Index {} out of range for bound {}", index, bound)
            }
            VectorError::EmptyContainer => write!(f, "Cannot pop from an empty vector"),
            VectorError::InvalidOperand(reason) => write!(f, "Invalid operand: {}", reason),
            VectorError::InsufficientFillValues { needed, provided } => write!(
                f,
                "Not enough fill values to extend the vector: needed {}, provided {}",
                needed, provided
            ),
        }
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
