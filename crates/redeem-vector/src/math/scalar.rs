use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::Num;

/// Element types a `Vector` can hold: signed integers and floats.
///
/// Negation is part of the arithmetic surface, so unsigned integers are not
/// scalars.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Num
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn as_f64(self) -> f64;

    /// Quotient rounded toward negative infinity, or `None` for a zero
    /// divisor or an overflowing integer quotient.
    fn floor_div(self, rhs: Self) -> Option<Self>;

    /// `None` when an integer result overflows. Floats always succeed.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;
}

macro_rules! scalar_int_impl {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn floor_div(self, rhs: Self) -> Option<Self> {
                    let q = self.checked_div(rhs)?;
                    let r = self.checked_rem(rhs)?;
                    if r != 0 && ((r < 0) != (rhs < 0)) {
                        Some(q - 1)
                    } else {
                        Some(q)
                    }
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

macro_rules! scalar_float_impl {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn floor_div(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        return None;
                    }
                    Some((self / rhs).floor())
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                #[inline]
                fn checked_neg(self) -> Option<Self> {
                    Some(-self)
                }
            }
        )*
    };
}

scalar_int_impl!(i8, i16, i32, i64, i128, isize);
scalar_float_impl!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(7i32.floor_div(2), Some(3));
        assert_eq!((-7i32).floor_div(2), Some(-4));
        assert_eq!(7i32.floor_div(-2), Some(-4));
        assert_eq!((-7i32).floor_div(-2), Some(3));
        assert_eq!((-6i32).floor_div(2), Some(-3));
    }

    #[test]
    fn integer_floor_div_rejects_zero_and_overflow() {
        assert_eq!(5i64.floor_div(0), None);
        assert_eq!(i8::MIN.floor_div(-1), None);
    }

    #[test]
    fn integer_checked_ops_report_overflow() {
        assert_eq!(Scalar::checked_add(i32::MAX, 1), None);
        assert_eq!(Scalar::checked_sub(i8::MIN, 1), None);
        assert_eq!(Scalar::checked_mul(i64::MAX, 2), None);
        assert_eq!(Scalar::checked_neg(i64::MIN), None);
        assert_eq!(Scalar::checked_add(2i16, 3), Some(5));
    }

    #[test]
    fn float_checked_ops_always_succeed() {
        assert_eq!(Scalar::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
        assert_eq!(Scalar::checked_neg(1.5f32), Some(-1.5));
    }

    #[test]
    fn float_floor_div() {
        assert_eq!(7.5f64.floor_div(2.0), Some(3.0));
        assert_eq!((-7.5f64).floor_div(2.0), Some(-4.0));
        assert_eq!(1.0f32.floor_div(0.0), None);
    }
}
