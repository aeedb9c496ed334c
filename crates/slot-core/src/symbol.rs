//! Symbols, reels and the injectable symbol source

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of reels (columns) on the cabinet
pub const REEL_COUNT: usize = 3;
/// Number of visible cells (rows) per reel
pub const ROW_COUNT: usize = 3;

/// A reel face. The set is closed; identity is the variant alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Seven,
    Cherries,
    Bars,
}

impl Symbol {
    /// Every symbol, in draw-index order
    pub const ALL: [Symbol; 3] = [Symbol::Seven, Symbol::Cherries, Symbol::Bars];

    /// Stable lowercase name, used for asset lookup and logging
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Seven => "seven",
            Symbol::Cherries => "cherries",
            Symbol::Bars => "bars",
        }
    }
}

/// One column of cells: top, middle, bottom
pub type Reel = [Symbol; ROW_COUNT];

/// The full board, indexed `grid[column][row]`
pub type Grid = [Reel; REEL_COUNT];

/// Supplies symbols for re-rolled reels.
///
/// The reel engine owns one of these and calls it only when a reel settles
/// (or on reset), so a scripted implementation fixes the exact boards a test
/// will see.
pub trait SymbolSource {
    /// Draw one symbol
    fn draw(&mut self) -> Symbol;

    /// Fill a whole reel, top to bottom, with independent draws
    fn roll_reel(&mut self) -> Reel {
        [self.draw(), self.draw(), self.draw()]
    }

    /// Fill the whole board, column by column
    fn roll_grid(&mut self) -> Grid {
        [self.roll_reel(), self.roll_reel(), self.roll_reel()]
    }
}

/// Uniform draws from a seedable ChaCha stream
#[derive(Debug, Clone)]
pub struct RandomSymbols {
    rng: ChaCha8Rng,
}

impl RandomSymbols {
    /// Deterministic source: the same seed always yields the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RandomSymbols {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SymbolSource for RandomSymbols {
    fn draw(&mut self) -> Symbol {
        Symbol::ALL[self.rng.random_range(0..Symbol::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSymbols::seeded(42);
        let mut b = RandomSymbols::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.roll_grid(), b.roll_grid());
        }
    }

    #[test]
    fn every_symbol_is_drawn() {
        let mut source = RandomSymbols::seeded(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(source.draw());
        }
        assert_eq!(seen.len(), Symbol::ALL.len());
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let mut source = RandomSymbols::seeded(1234);
        let mut counts = [0usize; 3];
        let draws = 30_000;
        for _ in 0..draws {
            let s = source.draw();
            let idx = Symbol::ALL.iter().position(|x| *x == s).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            let share = count as f64 / draws as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "share {share}");
        }
    }

    #[test]
    fn names_are_distinct() {
        let names: std::collections::HashSet<_> = Symbol::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 3);
    }
}
