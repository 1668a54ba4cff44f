//! Element-wise arithmetic on [`Vector`].
//!
//! The named methods (`try_add`, `dot`, `divide`, ...) validate their operands
//! and return a `Result`. The `std::ops` impls call them and panic with the
//! error message on invalid operands, the way slice indexing does.
//!
//! Binary operations accept another `Vector` or any sequence that derefs to a
//! slice of the same element type and length.
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::{Result, VectorError};
use crate::math::scalar::Scalar;
use crate::math::validation::{check_dimensions, check_divisor};
use crate::math::vector::Vector;

/// Right-hand side of [`Vector::multiply`].
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    /// Scale every element.
    Scalar(T),
    /// Dot product with a sequence of the same length.
    Sequence(&'a [T]),
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(value: &'a Vector<T>) -> Self {
        Operand::Sequence(value.as_slice())
    }
}

impl<'a, T> From<&'a [T]> for Operand<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Operand::Sequence(value)
    }
}

impl<'a, T> From<&'a Vec<T>> for Operand<'a, T> {
    fn from(value: &'a Vec<T>) -> Self {
        Operand::Sequence(value.as_slice())
    }
}

/// Result of [`Vector::multiply`].
#[derive(Clone, PartialEq)]
pub enum Product<T> {
    Scaled(Vector<T>),
    Dot(T),
}

impl<T> Product<T> {
    pub fn into_vector(self) -> Option<Vector<T>> {
        match self {
            Product::Scaled(v) => Some(v),
            Product::Dot(_) => None,
        }
    }

    pub fn into_scalar(self) -> Option<T> {
        match self {
            Product::Scaled(_) => None,
            Product::Dot(value) => Some(value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Product<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Scaled(v) => write!(f, "Scaled({:?})", v),
            Product::Dot(value) => write!(f, "Dot({:?})", value),
        }
    }
}

fn overflow(op: &str) -> VectorError {
    VectorError::InvalidOperand(format!("integer overflow in {}", op))
}

impl<T: Scalar> Vector<T> {
    fn zip_with<R, F>(&self, rhs: &R, op: &str, f: F) -> Result<Vec<T>>
    where
        R: AsRef<[T]> + ?Sized,
        F: Fn(T, T) -> Option<T>,
    {
        let rhs = rhs.as_ref();
        check_dimensions(self.len(), rhs.len())?;
        self.iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| f(a, b))
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| overflow(op))
    }

    /// Overwrite every element with values computed in full beforehand.
    fn commit(&mut self, values: Vec<T>) {
        self.as_mut_slice().copy_from_slice(&values);
    }

    /// Element-wise sum as a new vector.
    pub fn try_add<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<T>> {
        let values = self.zip_with(rhs, "addition", T::checked_add)?;
        Ok(self.derived(values))
    }

    /// Element-wise difference as a new vector.
    pub fn try_sub<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<T>> {
        let values = self.zip_with(rhs, "subtraction", T::checked_sub)?;
        Ok(self.derived(values))
    }

    /// In-place element-wise sum. Length and capacity are unchanged.
    pub fn try_add_assign<R: AsRef<[T]> + ?Sized>(&mut self, rhs: &R) -> Result<()> {
        let values = self.zip_with(rhs, "addition", T::checked_add)?;
        self.commit(values);
        Ok(())
    }

    /// In-place element-wise difference. Length and capacity are unchanged.
    pub fn try_sub_assign<R: AsRef<[T]> + ?Sized>(&mut self, rhs: &R) -> Result<()> {
        let values = self.zip_with(rhs, "subtraction", T::checked_sub)?;
        self.commit(values);
        Ok(())
    }

    pub fn scale(&self, k: T) -> Result<Vector<T>> {
        let values = self
            .iter()
            .map(|&a| a.checked_mul(k))
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| overflow("scaling"))?;
        Ok(self.derived(values))
    }

    /// Sum of element-wise products.
    pub fn dot<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<T> {
        let rhs = rhs.as_ref();
        check_dimensions(self.len(), rhs.len())?;
        self.iter()
            .zip(rhs.iter())
            .try_fold(T::zero(), |acc, (&a, &b)| {
                a.checked_mul(b).and_then(|p| acc.checked_add(p))
            })
            .ok_or_else(|| overflow("dot product"))
    }

    /// Scale by a scalar or take the dot product with a sequence.
    ///
    /// ```
    /// use redeem_vector::{vector, Operand, Product};
    ///
    /// let v = vector![1, 2, 3];
    /// let w = vector![4, 5, 6];
    /// assert_eq!(v.multiply(Operand::Scalar(2)).unwrap(), Product::Scaled(vector![2, 4, 6]));
    /// assert_eq!(v.multiply((&w).into()).unwrap(), Product::Dot(32));
    /// ```
    pub fn multiply(&self, rhs: Operand<'_, T>) -> Result<Product<T>> {
        match rhs {
            Operand::Scalar(k) => self.scale(k).map(Product::Scaled),
            Operand::Sequence(values) => self.dot(values).map(Product::Dot),
        }
    }

    /// True division by a scalar, producing floating point elements.
    pub fn divide(&self, k: T) -> Result<Vector<f64>> {
        check_divisor(&k)?;
        let k = k.as_f64();
        Ok(self.mapv(|&a| a.as_f64() / k))
    }

    /// Division rounding each quotient toward negative infinity.
    pub fn floor_divide(&self, k: T) -> Result<Vector<T>> {
        check_divisor(&k)?;
        let values = self
            .iter()
            .map(|&a| a.floor_div(k))
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| {
                VectorError::InvalidOperand(format!("floor division by {} overflows", k))
            })?;
        Ok(self.derived(values))
    }

    pub fn negate(&self) -> Result<Vector<T>> {
        let values = self
            .iter()
            .map(|&a| a.checked_neg())
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| overflow("negation"))?;
        Ok(self.derived(values))
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.iter()
            .map(|&a| {
                let a = a.as_f64();
                a * a
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Element-wise equality over the logical range. Vectors of different
    /// length are unequal; capacity and max size are ignored.
    pub fn equals(&self, other: &Vector<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Vector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

fn or_panic<V>(result: Result<V>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! elementwise_op_impl {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $checked_assign:ident) => {
        /// # Panics
        ///
        /// Panics if the operands differ in length.
        impl<'a, 'b, T: Scalar> $trait_name<&'b Vector<T>> for &'a Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &'b Vector<T>) -> Self::Output {
                or_panic(self.$checked(rhs))
            }
        }

        impl<T: Scalar> $trait_name<Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<'a, 'b, T: Scalar> $trait_name<&'b [T]> for &'a Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &'b [T]) -> Self::Output {
                or_panic(self.$checked(rhs))
            }
        }

        impl<'b, T: Scalar> $assign_trait<&'b Vector<T>> for Vector<T> {
            fn $assign_method(&mut self, rhs: &'b Vector<T>) {
                or_panic(self.$checked_assign(rhs))
            }
        }

        impl<T: Scalar> $assign_trait<Vector<T>> for Vector<T> {
            fn $assign_method(&mut self, rhs: Vector<T>) {
                or_panic(self.$checked_assign(&rhs))
            }
        }

        impl<'b, T: Scalar> $assign_trait<&'b [T]> for Vector<T> {
            fn $assign_method(&mut self, rhs: &'b [T]) {
                or_panic(self.$checked_assign(rhs))
            }
        }
    };
}

elementwise_op_impl!(Add, add, AddAssign, add_assign, try_add, try_add_assign);
elementwise_op_impl!(Sub, sub, SubAssign, sub_assign, try_sub, try_sub_assign);

/// Dot product.
///
/// # Panics
///
/// Panics if the operands differ in length.
impl<'a, 'b, T: Scalar> Mul<&'b Vector<T>> for &'a Vector<T> {
    type Output = T;

    fn mul(self, rhs: &'b Vector<T>) -> Self::Output {
        or_panic(self.dot(rhs))
    }
}

impl<T: Scalar> Mul<Vector<T>> for Vector<T> {
    type Output = T;

    fn mul(self, rhs: Vector<T>) -> Self::Output {
        or_panic(self.dot(&rhs))
    }
}

// Scalar multiplication on both sides, one impl per primitive so that
// `k * v` is expressible. Panics on integer overflow.
macro_rules! scale_impl {
    ($($t:ty),*) => {
        $(
            impl<'a> Mul<$t> for &'a Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, k: $t) -> Self::Output {
                    or_panic(self.scale(k))
                }
            }

            impl Mul<$t> for Vector<$t> {
                type Output = Vector<$t>;

                fn mul(self, k: $t) -> Self::Output {
                    or_panic(self.scale(k))
                }
            }

            impl<'a> Mul<&'a Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, v: &'a Vector<$t>) -> Self::Output {
                    or_panic(v.scale(self))
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;

                fn mul(self, v: Vector<$t>) -> Self::Output {
                    or_panic(v.scale(self))
                }
            }
        )*
    };
}

scale_impl!(i8, i16, i32, i64, i128, isize, f32, f64);

/// True division.
///
/// # Panics
///
/// Panics on a zero divisor.
impl<'a, T: Scalar> Div<T> for &'a Vector<T> {
    type Output = Vector<f64>;

    fn div(self, k: T) -> Self::Output {
        or_panic(self.divide(k))
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Vector<f64>;

    fn div(self, k: T) -> Self::Output {
        or_panic(self.divide(k))
    }
}

/// # Panics
///
/// Panics if negating an integer element overflows.
impl<'a, T: Scalar> Neg for &'a Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        or_panic(self.negate())
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        or_panic(self.negate())
    }
}
