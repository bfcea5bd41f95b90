//! Where randomness comes from.
//!
//! Play draws from one shared [`StdRng`]. Tests swap in [`ScriptedDice`]
//! to force exact rolls and encounter checks.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of die faces and encounter probabilities.
pub trait DiceSource {
    /// Roll one die, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// A uniform value in `[0, 1)` for probability checks.
    fn chance(&mut self) -> f64;
}

impl DiceSource for StdRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }

    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays queued values in order.
///
/// Once a queue runs dry, dice show 1 and probability checks return 1.0,
/// which never triggers a random encounter.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    chances: VecDeque<f64>,
}

impl ScriptedDice {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script with queued die faces.
    pub fn with_rolls(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            chances: VecDeque::new(),
        }
    }

    /// Queue probability values.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = f64>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Queue one more die face.
    pub fn push_roll(&mut self, value: u32) {
        self.rolls.push_back(value);
    }

    /// Die faces not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rolls
            .pop_front()
            .unwrap_or(1)
            .clamp(1, sides.max(1))
    }

    fn chance(&mut self) -> f64 {
        self.chances.pop_front().unwrap_or(1.0)
    }
}
