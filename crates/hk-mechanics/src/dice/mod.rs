//! Dice formulas and rolling.
//!
//! Formulas use the `<count>d<sides>` notation. Parsing never fails:
//! a missing or invalid count becomes 1 and missing or invalid sides
//! become 6, so `"abc"` reads as `1d6`.

pub mod roll;
pub mod source;

pub use roll::RollResult;
pub use source::{DiceSource, ScriptedDice};

use serde::{Deserialize, Serialize};

/// A dice formula such as `2d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceFormula {
    /// Number of dice, at least 1.
    pub count: u32,
    /// Sides per die, at least 1.
    pub sides: u32,
}

impl DiceFormula {
    /// A single twenty-sided die.
    pub const D20: Self = Self::new(1, 20);

    /// Formula used when nothing sensible can be parsed.
    pub const FALLBACK: Self = Self::new(1, 6);

    /// Create a formula from raw parts.
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Parse a formula, degrading to defaults instead of failing.
    pub fn parse(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        let mut parts = lower.split('d');
        let count = parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(Self::FALLBACK.count);
        let sides = parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(Self::FALLBACK.sides);
        Self { count, sides }
    }

    /// Smallest possible total.
    pub fn min(&self) -> u32 {
        self.count
    }

    /// Largest possible total.
    pub fn max(&self) -> u32 {
        self.count * self.sides
    }

    /// Roll the formula.
    pub fn roll(&self, dice: &mut dyn DiceSource) -> RollResult {
        roll_nds(self.count, self.sides, dice)
    }
}

impl Default for DiceFormula {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Roll `count` independent dice with `sides` faces each.
pub fn roll_nds(count: u32, sides: u32, dice: &mut dyn DiceSource) -> RollResult {
    let rolls = (0..count).map(|_| dice.roll_die(sides)).collect();
    RollResult { rolls }
}
