use super::*;
use crate::gameplay::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU opponent that throws uniformly at random.
/// Holds its own RNG so a seed makes whole sessions reproducible.
#[derive(Debug)]
pub struct Computer {
    rng: SmallRng,
}

impl Computer {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Player for Computer {
    fn decide(&mut self) -> Move {
        Move::from(self.rng.random_range(0..3u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_moves() {
        let mut a = Computer::seeded(7);
        let mut b = Computer::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.decide(), b.decide());
        }
    }
    #[test]
    fn draws_every_move() {
        let ref mut cpu = Computer::seeded(42);
        let mut seen = [false; 3];
        (0..256)
            .map(|_| cpu.decide())
            .for_each(|m| seen[u8::from(m) as usize] = true);
        assert_eq!(seen, [true; 3]);
    }
    #[test]
    fn roughly_uniform() {
        let ref mut cpu = Computer::seeded(1);
        let mut counts = [0usize; 3];
        (0..3000)
            .map(|_| cpu.decide())
            .for_each(|m| counts[u8::from(m) as usize] += 1);
        assert!(counts.iter().all(|&n| n > 800 && n < 1200), "{:?}", counts);
    }
}
