use std::fmt;
use std::hash::{Hash, Hasher};

use super::{flips, generate_flips, BitSet};
use crate::error::InvalidArgument;

/// State of the coin flipping puzzle: a row of `n` coins, each head-up or
/// tail-up, where a single move turns over exactly `m` of them at once.
///
/// The facing pattern is held as a [`BitSet`] in which a 0 bit is a head
/// and a 1 bit is a tail. The catalog of every possible flip is computed
/// once at construction and handed out only as copies, so callers can
/// never reach the cached state. The puzzle is solved when all coins are
/// tails up.
#[derive(Debug, Clone)]
pub struct Coins {
    n: usize,
    m: usize,
    coins: BitSet,
    flips: Vec<BitSet>,
}

impl Coins {
    /// Creates a puzzle with all `n` coins heads up.
    pub fn new(n: usize, m: usize) -> Result<Self, InvalidArgument> {
        Self::with_coins(n, m, &BitSet::new())
    }

    /// Creates a puzzle from an explicit facing pattern. The pattern is
    /// copied; the caller's set is never aliased by the new state.
    pub fn with_coins(n: usize, m: usize, coins: &BitSet) -> Result<Self, InvalidArgument> {
        flips::check_arguments(n, m)?;
        if let Some(index) = coins.highest_bit().filter(|&index| index >= n) {
            return Err(InvalidArgument::PositionOutOfRange { index, n });
        }
        let flips = generate_flips(n, m)?;
        log::debug!("cached {} flips for a ({n}, {m}) puzzle", flips.len());
        Ok(Coins {
            n,
            m,
            coins: coins.clone(),
            flips,
        })
    }

    /// The number of coins.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The number of coins turned over by one move.
    pub fn m(&self) -> usize {
        self.m
    }

    /// A copy of the current facing pattern.
    pub fn coins(&self) -> BitSet {
        self.coins.clone()
    }

    /// Whether every coin is tails up.
    pub fn is_goal(&self) -> bool {
        self.coins.count_ones() == self.n
    }

    /// Whether the coins at the positions set in `which` can be turned
    /// over in one move: the mask must stay within the row and select
    /// exactly `m` positions. Any mask can be asked about; the answer does
    /// not depend on the cached catalog.
    pub fn can_flip(&self, which: &BitSet) -> bool {
        which.highest_bit().is_none_or(|index| index < self.n)
            && which.count_ones() == self.m
    }

    /// Turns over the coins at the positions set in `which`. No legality
    /// check is made here; see [`Coins::can_flip`].
    pub fn flip(&mut self, which: &BitSet) {
        self.coins.xor(which);
    }

    /// A fresh copy of the full move catalog, in the order produced by
    /// [`generate_flips`].
    pub fn flips(&self) -> Vec<BitSet> {
        self.flips.clone()
    }
}

impl PartialEq for Coins {
    fn eq(&self, other: &Self) -> bool {
        // The catalog is determined by (n, m) and carries no extra state.
        self.n == other.n && self.m == other.m && self.coins == other.coins
    }
}

impl Eq for Coins {}

impl Hash for Coins {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
        self.m.hash(state);
        self.coins.hash(state);
    }
}

impl fmt::Display for Coins {
    /// Renders the row left to right, `O` for heads and `1` for tails,
    /// separated by `|`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..self.n {
            if position > 0 {
                f.write_str("|")?;
            }
            f.write_str(if self.coins.contains(position) { "1" } else { "O" })?;
        }
        Ok(())
    }
}
