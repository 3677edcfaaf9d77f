use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an element on the canvas.
///
/// Ids are handed out by the owning [`ElementStore`](crate::store::ElementStore)
/// from a monotonically increasing counter, so a later element always has a
/// larger id and an id is never reused for the lifetime of the store.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw counter value.
    pub const fn from_raw(raw: u64) -> Self {
        ElementId(raw)
    }

    /// The raw counter value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@el_{}", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@el_{}", self.0)
    }
}

/// Monotonic id source owned by a store.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id. Never returns the same id twice.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_are_unique_and_increasing() {
        let mut ids = IdAllocator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn display_uses_at_prefix() {
        assert_eq!(ElementId::from_raw(7).to_string(), "@el_7");
        assert_eq!(format!("{:?}", ElementId::from_raw(7)), "@el_7");
    }
}
