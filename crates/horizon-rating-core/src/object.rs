//! Object identity.
//!
//! Every widget and every icon view owns a process-unique [`ObjectId`]. Ids are
//! never reused, so comparing ids tells whether two handles refer to the same
//! underlying object or to a freshly allocated replacement.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a new, never before returned id.
    pub fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this id.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Base trait for identifiable objects.
pub trait Object {
    /// Get this object's unique id.
    fn object_id(&self) -> ObjectId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = ObjectId::next();
        let b = ObjectId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_display() {
        let id = ObjectId::next();
        assert_eq!(id.to_string(), format!("#{}", id.as_raw()));
    }
}
