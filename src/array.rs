//! Growable array of doubles used as a Modelica external object.
//!
//! Modelica arrays have a fixed size; models that record an unknown number of
//! samples during a run keep them in one of these instead.

use crate::error::{Result, try_grow};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowableArray {
    values: Vec<f64>,
}

impl GrowableArray {
    /// Creates an empty array without backing storage.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) -> Result<()> {
        try_grow(&mut self.values, 1, "growable array")?;
        self.values.push(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_array_is_empty_and_unallocated() {
        let arr = GrowableArray::new();
        assert!(arr.is_empty());
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.values.capacity(), 0);
    }

    #[test]
    fn test_push_and_clear() -> Result<()> {
        let mut arr = GrowableArray::new();
        for v in [1.5, -2.0, 3.25] {
            arr.push(v)?;
        }
        assert_eq!(arr.values(), &[1.5, -2.0, 3.25]);
        arr.clear();
        assert!(arr.is_empty());
        Ok(())
    }
}
