#![forbid(unsafe_code)]

//! The shared mutable sequence under sort.
//!
//! [`SequenceStore`] is a cloneable handle to the one array a run operates
//! on. Every element mutation flows through [`set`](SequenceStore::set) or
//! [`swap`](SequenceStore::swap) so the instrumentation layer can observe
//! each change; the length is fixed for the duration of a run and only
//! changes via [`replace`](SequenceStore::replace).
//!
//! Sharing is by design: the run controller keeps a handle for snapshot
//! queries while the worker thread holds another for mutation. The
//! at-most-one-run rule means there is never more than one writer.

use std::sync::{Arc, Mutex};

use crate::errors::EngineError;

/// Cloneable handle to the mutable sequence of values.
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    values: Arc<Mutex<Vec<u32>>>,
}

impl SequenceStore {
    /// Create a store over the given values.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `i`.
    pub fn get(&self, i: usize) -> Result<u32, EngineError> {
        let values = self.values.lock().unwrap();
        values
            .get(i)
            .copied()
            .ok_or(EngineError::IndexOutOfBounds { index: i, len: values.len() })
    }

    /// Write `value` at `i`.
    pub fn set(&self, i: usize, value: u32) -> Result<(), EngineError> {
        let mut values = self.values.lock().unwrap();
        let len = values.len();
        match values.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(EngineError::IndexOutOfBounds { index: i, len }),
        }
    }

    /// Exchange the elements at `i` and `j`.
    pub fn swap(&self, i: usize, j: usize) -> Result<(), EngineError> {
        let mut values = self.values.lock().unwrap();
        let len = values.len();
        if i >= len {
            return Err(EngineError::IndexOutOfBounds { index: i, len });
        }
        if j >= len {
            return Err(EngineError::IndexOutOfBounds { index: j, len });
        }
        values.swap(i, j);
        Ok(())
    }

    /// Copy of the current values, for renders and aux-array phases.
    pub fn snapshot(&self) -> Vec<u32> {
        self.values.lock().unwrap().clone()
    }

    /// Swap in a freshly generated sequence (regenerate).
    pub fn replace(&self, values: Vec<u32>) {
        *self.values.lock().unwrap() = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_swap_round_trip() {
        let store = SequenceStore::new(vec![5, 3, 8, 1]);
        assert_eq!(store.get(0), Ok(5));
        store.set(0, 7).unwrap();
        assert_eq!(store.get(0), Ok(7));
        store.swap(0, 3).unwrap();
        assert_eq!(store.snapshot(), vec![1, 3, 8, 7]);
    }

    #[test]
    fn out_of_bounds_is_reported_with_index_and_len() {
        let store = SequenceStore::new(vec![1, 2]);
        assert_eq!(
            store.get(2),
            Err(EngineError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            store.swap(0, 5),
            Err(EngineError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(
            store.set(9, 1),
            Err(EngineError::IndexOutOfBounds { index: 9, len: 2 })
        );
    }

    #[test]
    fn handles_share_one_array() {
        let store = SequenceStore::new(vec![1, 2, 3]);
        let other = store.clone();
        other.set(1, 9).unwrap();
        assert_eq!(store.snapshot(), vec![1, 9, 3]);
    }

    #[test]
    fn replace_resets_contents_and_length() {
        let store = SequenceStore::new(vec![1, 2, 3]);
        store.replace(vec![4, 5]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot(), vec![4, 5]);
    }
}
