//! Score constants for terminal positions.
//!
//! Only the ordering matters: a win beats a tie beats a loss, a faster win
//! beats a slower one, and the search sentinels dominate every reachable
//! score.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Default score for a win found at depth zero.
pub const WIN_SCORE: i32 = 100;

/// Default score for a tie.
pub const TIE_SCORE: i32 = 0;

/// Default magnitude of the alpha-beta sentinels.
pub const INFINITY: i32 = 10_000;

/// Invalid scoring constants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid scoring: {}", reason)]
pub struct ScoringError {
    /// What went wrong.
    pub reason: String,
}

/// Terminal score constants used by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    /// Score of a win at depth zero; a win at depth `d` scores `win - d`.
    pub win: i32,
    /// Score of a tie.
    pub tie: i32,
    /// Sentinel magnitude for the alpha-beta window.
    pub infinity: i32,
}

impl Scoring {
    /// Checks that the constants keep the required ordering for any game
    /// lasting up to `max_depth` plies.
    ///
    /// The win score must be positive, every depth-adjusted score must fit an
    /// `i32`, and the sentinels must be negatable.
    pub fn validate(&self, max_depth: usize) -> Result<(), ScoringError> {
        let depth = i32::try_from(max_depth).map_err(|_| ScoringError {
            reason: format!("depth {} does not fit a score", max_depth),
        })?;
        if self.win <= 0 {
            return Err(ScoringError {
                reason: format!("the win score ({}) must be positive", self.win),
            });
        }
        let slowest_win = self.win.checked_sub(depth).ok_or_else(|| ScoringError {
            reason: format!("the win score ({}) minus depth {} overflows", self.win, depth),
        })?;
        // `win` is positive, so its negation cannot overflow.
        let slowest_loss = (-self.win).checked_add(depth).ok_or_else(|| ScoringError {
            reason: format!("the loss score (-{}) plus depth {} overflows", self.win, depth),
        })?;
        if slowest_win <= self.tie {
            return Err(ScoringError {
                reason: format!(
                    "the slowest win ({}) must beat a tie ({})",
                    slowest_win, self.tie
                ),
            });
        }
        if slowest_loss >= self.tie {
            return Err(ScoringError {
                reason: format!(
                    "the slowest loss ({}) must stay below a tie ({})",
                    slowest_loss, self.tie
                ),
            });
        }
        if self.infinity <= self.win {
            return Err(ScoringError {
                reason: format!(
                    "infinity ({}) must exceed the win score ({})",
                    self.infinity, self.win
                ),
            });
        }
        Ok(())
    }

    /// Score of a win for the searching player found at `depth`.
    pub fn win_at(&self, depth: u32) -> i32 {
        self.win - depth as i32
    }

    /// Score of a loss for the searching player found at `depth`.
    pub fn loss_at(&self, depth: u32) -> i32 {
        -self.win + depth as i32
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            win: WIN_SCORE,
            tie: TIE_SCORE,
            infinity: INFINITY,
        }
    }
}
