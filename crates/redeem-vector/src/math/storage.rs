use crate::error::{Result, VectorError};

/// Backing buffer of a `Vector` together with its logical capacity.
///
/// `capacity` is the number of slots the vector accounts for and only
/// changes through [`Storage::ensure_capacity`] (doubling) and
/// [`Storage::reset`]. The physical `Vec` reservation is kept at least as
/// large as `capacity`.
#[derive(Clone, Debug)]
pub(crate) struct Storage<T> {
    buf: Vec<T>,
    capacity: usize,
    growth_events: usize,
}

impl<T> Storage<T> {
    /// Take ownership of `buf` with logical capacity `2 * len + 1`.
    ///
    /// Nothing is allocated here; `buf` is only reserved when growth needs
    /// room past its current allocation.
    pub(crate) fn from_vec(buf: Vec<T>) -> Self {
        let capacity = buf.len().saturating_mul(2).saturating_add(1);
        Self {
            buf,
            capacity,
            growth_events: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn growth_events(&self) -> usize {
        self.growth_events
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.buf
    }

    /// Double `capacity` until it reaches `min_capacity`.
    ///
    /// The target is computed and reserved before anything is recorded, so on
    /// error the storage is unchanged.
    pub(crate) fn ensure_capacity(&mut self, min_capacity: usize) -> Result<()> {
        if self.capacity >= min_capacity {
            return Ok(());
        }

        let overflow = || VectorError::CapacityOverflow {
            requested: min_capacity as u64,
            max_size: isize::MAX as u64,
        };

        let mut target = self.capacity.max(1);
        let mut doublings = 0usize;
        while target < min_capacity {
            target = target.checked_mul(2).ok_or_else(overflow)?;
            doublings += 1;
        }

        self.buf
            .try_reserve_exact(target - self.buf.len())
            .map_err(|_| overflow())?;

        log::trace!(
            "Growing vector capacity from {} to {} ({} doublings)",
            self.capacity,
            target,
            doublings
        );
        self.capacity = target;
        self.growth_events += doublings;
        Ok(())
    }

    /// Append without growing. Callers ensure capacity first.
    pub(crate) fn push(&mut self, elem: T) {
        debug_assert!(self.buf.len() < self.capacity);
        self.buf.push(elem);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Insert at `index <= len`. Callers ensure capacity first.
    pub(crate) fn insert(&mut self, index: usize, elem: T) {
        debug_assert!(self.buf.len() < self.capacity);
        self.buf.insert(index, elem);
    }

    /// Remove at `index < len`.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.buf.remove(index)
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Empty the buffer and drop back to a single slot.
    pub(crate) fn reset(&mut self) {
        self.buf.clear();
        self.buf.shrink_to(1);
        self.capacity = 1;
        self.growth_events = 0;
    }
}

impl<T: Clone> Storage<T> {
    /// Append `values`. Callers ensure capacity first.
    pub(crate) fn extend_from_slice(&mut self, values: &[T]) {
        debug_assert!(self.buf.len() + values.len() <= self.capacity);
        self.buf.extend_from_slice(values);
    }
}
