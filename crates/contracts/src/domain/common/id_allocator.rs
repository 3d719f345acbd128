use std::fmt;

/// Assigns ids to newly added records
pub trait IdAllocator<Id> {
    /// Return an id that is not in `taken`, or `None` once the id space is
    /// used up
    fn allocate(&mut self, taken: &[Id]) -> Option<Id>;
}

/// Monotonic integer ids. A freed id is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    /// `None` after `u32::MAX` has been handed out
    next: Option<u32>,
}

impl SequentialIds {
    /// Start right after the largest id already in use (1 when none)
    pub fn after<I: IntoIterator<Item = u32>>(used: I) -> Self {
        let next = match used.into_iter().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    pub fn peek(&self) -> Option<u32> {
        self.next
    }
}

impl<Id> IdAllocator<Id> for SequentialIds
where
    Id: From<u32> + PartialEq,
{
    fn allocate(&mut self, taken: &[Id]) -> Option<Id> {
        while let Some(value) = self.next {
            self.next = value.checked_add(1);
            let candidate = Id::from(value);
            if !taken.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Source of random numbers for id generation
pub trait RandomSource: fmt::Debug {
    fn next_u32(&mut self) -> u32;
}

/// Random numbers drawn from v4 UUIDs (works in the browser through the
/// `js` feature of `uuid`)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRandom;

impl RandomSource for UuidRandom {
    fn next_u32(&mut self) -> u32 {
        uuid::Uuid::new_v4().as_u128() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_starts_after_max() {
        let mut ids = SequentialIds::after([1, 3, 2]);
        let id: Option<u32> = ids.allocate(&[1, 2, 3]);
        assert_eq!(id, Some(4));
        let id: Option<u32> = ids.allocate(&[1, 2, 3, 4]);
        assert_eq!(id, Some(5));
    }

    #[test]
    fn test_sequential_empty_starts_at_one() {
        let mut ids = SequentialIds::after(std::iter::empty());
        let id: Option<u32> = ids.allocate(&[]);
        assert_eq!(id, Some(1));
    }

    #[test]
    fn test_sequential_does_not_reuse_freed_ids() {
        let mut ids = SequentialIds::after([1, 2, 3]);
        // id 3 deleted, the counter still moves forward
        let id: Option<u32> = ids.allocate(&[1, 2]);
        assert_eq!(id, Some(4));
    }

    #[test]
    fn test_sequential_skips_taken() {
        let mut ids = SequentialIds::after([1]);
        let id: Option<u32> = ids.allocate(&[1, 2, 3]);
        assert_eq!(id, Some(4));
        assert_eq!(ids.peek(), Some(5));
    }

    #[test]
    fn test_sequential_stops_at_u32_max() {
        let mut ids = SequentialIds::after([u32::MAX - 1]);
        let id: Option<u32> = ids.allocate(&[u32::MAX - 1]);
        assert_eq!(id, Some(u32::MAX));
        assert_eq!(ids.peek(), None);
        let id: Option<u32> = ids.allocate(&[u32::MAX - 1, u32::MAX]);
        assert_eq!(id, None);
    }

    #[test]
    fn test_sequential_after_max_id_is_exhausted() {
        let mut ids = SequentialIds::after([u32::MAX]);
        let id: Option<u32> = ids.allocate(&[u32::MAX]);
        assert_eq!(id, None);
    }
}
