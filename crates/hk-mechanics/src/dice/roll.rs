//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

/// The individual dice of one roll, in the order they were thrown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die values.
    pub rolls: Vec<u32>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.rolls.iter().sum()
    }

    /// Sum as a signed value, for arithmetic against stats.
    pub fn signed_total(&self) -> i32 {
        i32::try_from(self.total()).unwrap_or(i32::MAX)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(u32::to_string).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
