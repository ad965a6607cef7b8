//! Value-type support for decoded instances.
//!
//! Decoded schema structs are plain owned values compared field by field.
//! `f64` has no `Eq`/`Hash` impls, so float-typed fields use the [`Float`]
//! wrapper, which provides total equality with a consistent hash. Treat
//! decoded instances as immutable once they are used as map or set keys;
//! mutating a keyed instance silently stales its hash.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A float with total, hash-consistent equality.
///
/// Equality follows `f64` with two adjustments that make it total:
/// `NaN == NaN` and (as in plain `f64`) `0.0 == -0.0`. Hashing uses the bit
/// pattern with both cases canonicalized, so equal values always hash
/// identically. NaN can only enter a document through literal `NaN` text.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct Float(pub f64);

impl Float {
    /// The wrapped value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else if self.0 == 0.0 {
            0
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        Float(value)
    }
}

impl From<Float> for f64 {
    fn from(value: Float) -> Self {
        value.0
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: Float) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_floats_hash_identically() {
        assert_eq!(Float(1.5), Float(1.5));
        assert_eq!(hash_of(Float(1.5)), hash_of(Float(1.5)));
    }

    #[test]
    fn test_negative_zero_hashes_like_zero() {
        assert_eq!(Float(0.0), Float(-0.0));
        assert_eq!(hash_of(Float(0.0)), hash_of(Float(-0.0)));
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        assert_eq!(Float(f64::NAN), Float(f64::NAN));
        assert_eq!(hash_of(Float(f64::NAN)), hash_of(Float(f64::NAN)));
    }

    #[test]
    fn test_distinct_values_compare_unequal() {
        assert_ne!(Float(1.0), Float(2.0));
        assert_ne!(Float(f64::NAN), Float(1.0));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Float::default(), Float(0.0));
    }

    #[test]
    fn test_conversions() {
        let f: Float = 2.5.into();
        assert_eq!(f.get(), 2.5);
        assert_eq!(f64::from(f), 2.5);
    }
}
