//! Test-only helpers shared by unit and behaviour tests across the
//! workspace.

use crate::{ArtifactRecord, Guess, GuessScorer, ResolvedLocation, ScoreOutcome};

/// `GuessScorer` that awards the same score for every guess.
#[derive(Debug, Clone, Copy)]
pub struct ConstantScorer {
    /// Score awarded for every guess.
    pub score: u32,
}

impl GuessScorer for ConstantScorer {
    fn score(&self, _actual: &ResolvedLocation, _guess: &Guess) -> ScoreOutcome {
        ScoreOutcome::exact(self.score)
    }

    fn max_score(&self) -> u32 {
        self.score
    }
}

/// A playable record whose culture resolves to `culture`'s country.
#[must_use]
pub fn playable_record(id: u64, culture: &str) -> ArtifactRecord {
    ArtifactRecord::new(id)
        .with_title(format!("Ensemble {id}"))
        .with_image_url(format!("https://images.example/{id}.jpg"))
        .with_culture(culture)
}

/// Playable records cycling through a handful of well-known cultures.
#[must_use]
pub fn playable_records(count: u64) -> Vec<ArtifactRecord> {
    const CULTURES: [&str; 5] = ["French", "Japanese", "Italian", "Peruvian", "Egyptian"];
    (0..count)
        .zip(CULTURES.iter().cycle())
        .map(|(id, culture)| playable_record(id, culture))
        .collect()
}
