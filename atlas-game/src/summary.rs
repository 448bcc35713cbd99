//! End-of-game reporting.

use std::fmt;

use atlas_core::RoundResult;
use serde::{Deserialize, Serialize};

/// Title awarded from the average round score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRank {
    /// Average below 200.
    Novice,
    /// Average of 200 or more.
    Student,
    /// Average of 400 or more.
    Enthusiast,
    /// Average of 600 or more.
    Scholar,
    /// Average of 800 or more.
    Expert,
    /// Average of 900 or more.
    Historian,
}

impl PlayerRank {
    /// Rank for an average round score.
    #[must_use]
    pub const fn from_average(average: u32) -> Self {
        match average {
            900.. => Self::Historian,
            800..=899 => Self::Expert,
            600..=799 => Self::Scholar,
            400..=599 => Self::Enthusiast,
            200..=399 => Self::Student,
            _ => Self::Novice,
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Novice => "Fashion Novice",
            Self::Student => "Fashion Student",
            Self::Enthusiast => "Fashion Enthusiast",
            Self::Scholar => "Fashion Scholar",
            Self::Expert => "Costume Expert",
            Self::Historian => "Fashion Historian",
        }
    }

    /// One-line description shown under the title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Novice => "There's a world of fashion history to explore!",
            Self::Student => "You're learning about global fashion traditions.",
            Self::Enthusiast => "You know your way around fashion history.",
            Self::Scholar => "You have a solid understanding of fashion origins.",
            Self::Expert => "Your knowledge of historical fashion is impressive!",
            Self::Historian => "Unbelievable knowledge of global fashion history!",
        }
    }
}

impl fmt::Display for PlayerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Snapshot of a session's score and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Sum of round scores.
    pub total_score: u32,
    /// Best total the game allows.
    pub max_score: u32,
    /// Rounds with a submitted guess.
    pub rounds_played: usize,
    /// Rounds in a full game.
    pub total_rounds: u32,
    /// Total divided by the configured round count, rounded.
    pub average_score: u32,
    /// Title for the average score.
    pub rank: PlayerRank,
    /// Rounds in play order.
    pub history: Vec<RoundResult>,
}

impl GameSummary {
    /// Highest-scoring round; the earliest wins a tie.
    #[must_use]
    pub fn best_round(&self) -> Option<&RoundResult> {
        self.history
            .iter()
            .reduce(|best, round| if round.score > best.score { round } else { best })
    }
}

/// Total divided by `rounds`, rounded half away from zero.
#[expect(
    clippy::float_arithmetic,
    reason = "averages are rounded like the on-screen totals"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the average of non-negative u32 scores fits in u32"
)]
pub(crate) fn average(total: u32, rounds: u32) -> u32 {
    if rounds == 0 {
        return 0;
    }
    (f64::from(total) / f64::from(rounds)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1000, PlayerRank::Historian)]
    #[case(900, PlayerRank::Historian)]
    #[case(899, PlayerRank::Expert)]
    #[case(600, PlayerRank::Scholar)]
    #[case(599, PlayerRank::Enthusiast)]
    #[case(200, PlayerRank::Student)]
    #[case(0, PlayerRank::Novice)]
    fn ranks_follow_thresholds(#[case] average: u32, #[case] expected: PlayerRank) {
        assert_eq!(PlayerRank::from_average(average), expected);
    }

    #[rstest]
    #[case(0, 5, 0)]
    #[case(2500, 5, 500)]
    #[case(1002, 4, 251)]
    #[case(7, 2, 4)]
    #[case(10, 0, 0)]
    fn averages_round_to_nearest(#[case] total: u32, #[case] rounds: u32, #[case] expected: u32) {
        assert_eq!(average(total, rounds), expected);
    }
}
