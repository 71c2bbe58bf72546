//! Id generation strategies for new items.

use crate::model::item::TodoId;
use uuid::Uuid;

/// Source of fresh item ids.
///
/// Implementations should never return the nil UUID.
pub trait IdGenerator {
    fn next_id(&mut self) -> TodoId;
}

/// Random UUID v4 ids. Default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> TodoId {
        Uuid::new_v4()
    }
}

/// Monotonic counter ids encoded as UUIDs (`...0001`, `...0002`, ...).
///
/// Used for deterministic runs and tests.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    last: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TodoId {
        self.last = self.last.wrapping_add(1);
        if self.last == 0 {
            // Skip nil after wrap-around.
            self.last = 1;
        }
        Uuid::from_u128(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
    use uuid::Uuid;

    #[test]
    fn sequential_ids_start_at_one_and_increase() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(), Uuid::from_u128(1));
        assert_eq!(ids.next_id(), Uuid::from_u128(2));
        assert_eq!(ids.next_id(), Uuid::from_u128(3));
    }

    #[test]
    fn random_ids_are_not_nil() {
        let mut ids = RandomIdGenerator;
        for _ in 0..32 {
            assert!(!ids.next_id().is_nil());
        }
    }
}
