//! Base implementation of records.
use crate::error::RotorError;
use std::collections::HashMap;

/// A value stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, such as reward or distance.
    Scalar(f32),
}

/// Named metrics of a decision step.
///
/// # Examples
///
/// ```rust
/// use rotor_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("reward", 0.5);
/// record.insert("distance", RecordValue::Scalar(3.0));
///
/// assert_eq!(record.get_scalar("reward").unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair, overwriting any previous value of the key.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f32, RotorError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            None => Err(RotorError::RecordKeyError(k.to_string())),
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_scalar() {
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(0.25)),
            ("distance", RecordValue::Scalar(9.0)),
        ]);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get_scalar("reward"), Ok(0.25));
        assert_eq!(
            record.get_scalar("missing"),
            Err(RotorError::RecordKeyError("missing".to_string()))
        );
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = Record::from_scalar("reward", 1.0);
        record.insert("reward", RecordValue::Scalar(2.0));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get_scalar("reward"), Ok(2.0));
        assert!(Record::empty().is_empty());
    }
}
