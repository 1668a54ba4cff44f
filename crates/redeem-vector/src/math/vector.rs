use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use crate::config::{VectorConfig, DEFAULT_MAX_SIZE};
use crate::error::{Result, VectorError};
use crate::math::scalar::Scalar;
use crate::math::storage::Storage;
use crate::math::validation::{check_fill, check_index, check_size};

/// A resizable, ordered vector of numeric scalars.
///
/// The logical length (`len`) is tracked separately from the allocated
/// `capacity`, which starts at `2 * len + 1` and doubles whenever an append
/// needs more room. `capacity >= len` and `len <= max_size` hold after every
/// call, and fallible calls leave the vector untouched when they fail.
#[derive(Clone)]
pub struct Vector<T> {
    storage: Storage<T>,
    max_size: u64,
}

impl<T> Vector<T> {
    /// Build a vector from `data` with the default maximum size.
    ///
    /// Infallible: if `data` is longer than [`DEFAULT_MAX_SIZE`] the bound is
    /// raised to `data.len()` so `len <= max_size` still holds. `From` and
    /// `FromIterator` go through here. Use [`Vector::with_config`] to choose
    /// the bound and have it checked instead.
    pub fn new(data: Vec<T>) -> Self {
        Self::bounded(data, DEFAULT_MAX_SIZE)
    }

    pub(crate) fn bounded(data: Vec<T>, max_size: u64) -> Self {
        let max_size = max_size.max(data.len() as u64);
        Self {
            storage: Storage::from_vec(data),
            max_size,
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn with_config(data: Vec<T>, config: &VectorConfig) -> Result<Self> {
        config.validate()?;
        check_size(data.len(), config.max_size)?;
        Ok(Self {
            storage: Storage::from_vec(data),
            max_size: config.max_size,
        })
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Build a vector holding `data` that shares this vector's maximum size.
    pub(crate) fn derived<U>(&self, data: Vec<U>) -> Vector<U> {
        Vector::bounded(data, self.max_size)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when the vector holds at least one element.
    pub fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    /// Number of capacity doublings since construction or the last `clear`.
    pub fn growth_events(&self) -> usize {
        self.storage.growth_events()
    }

    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    pub fn mapv<U, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        self.derived(self.iter().map(f).collect())
    }

    /// Replace the maximum size.
    ///
    /// The new bound must be positive and no smaller than the current length.
    pub fn set_max_size(&mut self, max_size: u64) -> Result<()> {
        if max_size == 0 {
            return Err(VectorError::InvalidOperand(
                "max size must be positive".to_string(),
            ));
        }
        check_size(self.len(), max_size)?;
        self.max_size = max_size;
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T> {
        self.storage.pop().ok_or(VectorError::EmptyContainer)
    }

    /// Append `elem`, doubling the capacity if it is full.
    pub fn push_back(&mut self, elem: T) -> Result<()> {
        let new_len = self.len() + 1;
        check_size(new_len, self.max_size)?;
        self.storage.ensure_capacity(new_len)?;
        self.storage.push(elem);
        Ok(())
    }

    /// Insert `elem` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, elem: T) -> Result<()> {
        let new_len = self.len() + 1;
        check_index(index, new_len)?;
        check_size(new_len, self.max_size)?;
        self.storage.ensure_capacity(new_len)?;
        self.storage.insert(index, elem);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        Ok(self.storage.remove(index))
    }

    /// Exchange contents, length and capacity with `other` in O(1).
    ///
    /// Each vector keeps its own maximum size, so the swap fails if either
    /// length would exceed the bound of the vector receiving it.
    pub fn swap(&mut self, other: &mut Vector<T>) -> Result<()> {
        check_size(other.len(), self.max_size)?;
        check_size(self.len(), other.max_size)?;
        std::mem::swap(&mut self.storage, &mut other.storage);
        log::trace!(
            "Swapped vectors of length {} and {}",
            other.len(),
            self.len()
        );
        Ok(())
    }

    /// Drop every element and reset the capacity to a single slot.
    pub fn clear(&mut self) {
        log::trace!("Clearing vector of length {}", self.len());
        self.storage.reset();
    }
}

impl<T: Clone> Vector<T> {
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::new(vec![value; len])
    }

    /// Truncate to `new_size`, or extend it with the leading `new_size - len()`
    /// entries of `fill_values`.
    pub fn resize(&mut self, new_size: usize, fill_values: &[T]) -> Result<()> {
        let len = self.len();
        if new_size <= len {
            self.storage.truncate(new_size);
            return Ok(());
        }

        check_size(new_size, self.max_size)?;
        check_fill(len, new_size, fill_values.len())?;
        self.storage.ensure_capacity(new_size)?;
        self.storage.extend_from_slice(&fill_values[..new_size - len]);
        Ok(())
    }
}

impl<T: Scalar> Vector<T> {
    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, T::zero())
    }

    pub fn ones(len: usize) -> Self {
        Self::from_elem(len, T::one())
    }

    /// Element at `index`, or `IndexOutOfRange` past the end.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        Ok(self.as_slice()[index])
    }
}

impl<T: fmt::Debug> Vector<T> {
    /// Constructor-style rendering, e.g. `Vector(1, 2, 3)` or `Vector(1.0, 2.5)`.
    pub fn repr(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.storage.into_vec()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with an `IndexOutOfRange` message when `index >= len()`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.as_slice().get(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                VectorError::IndexOutOfRange {
                    index,
                    bound: self.len()
                }
            ),
        }
    }
}

fn write_elements<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (idx, value) in values.iter().enumerate() {
        write!(f, "{:?}", value)?;
        if idx + 1 != values.len() {
            write!(f, ", ")?;
        }
    }
    Ok(())
}

/// Tuple form: `(1, 2, 3)`, `(1,)` for one element and `()` when empty.
/// Elements use their `Debug` form, so floats keep a fractional part: `(1.0, 2.5)`.
impl<T: fmt::Debug> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_elements(f, self.as_slice())?;
        if self.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

/// Constructor form: `Vector(1, 2, 3)`.
impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        write_elements(f, self.as_slice())?;
        write!(f, ")")
    }
}
