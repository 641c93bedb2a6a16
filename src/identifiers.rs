use crate::{BeverageId, IdentifierSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform pseudo-random identifier source over `BeverageId::MIN..=BeverageId::MAX`.
///
/// Every factory owns its own generator, so each beverage kind draws from an
/// independent stream.
#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    rng: StdRng,
}

impl IdentifierGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator that replays the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for IdentifierGenerator {
    fn next_id(&mut self) -> BeverageId {
        BeverageId::in_range(self.rng.gen_range(BeverageId::MIN..=BeverageId::MAX))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_stay_in_range() {
        let mut generator = IdentifierGenerator::new();
        for _ in 0..10_000 {
            let id = generator.next_id().get();
            assert!((1..=1000).contains(&id), "out of range: {}", id);
        }
    }

    #[test]
    fn test_ids_cover_both_ends_eventually() {
        let mut generator = IdentifierGenerator::seeded(1);
        let ids: Vec<u16> = (0..200_000).map(|_| generator.next_id().get()).collect();

        assert!(ids.contains(&BeverageId::MIN));
        assert!(ids.contains(&BeverageId::MAX));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = IdentifierGenerator::seeded(2024);
        let mut second = IdentifierGenerator::seeded(2024);

        for _ in 0..50 {
            assert_eq!(first.next_id(), second.next_id());
        }
    }

    #[test]
    fn test_collisions_are_allowed() {
        let mut generator = IdentifierGenerator::seeded(9);
        let ids: Vec<BeverageId> = (0..2000).map(|_| generator.next_id()).collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        // 2000 draws from 1000 values must repeat.
        assert!(unique.len() < ids.len());
    }
}
