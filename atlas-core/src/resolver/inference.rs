//! Best-effort place extraction from free text.
//!
//! Phrases such as "from the ancient city of Antioch" or "of the Ming" are
//! captured with a fixed list of patterns, then tested against the
//! historical name table by case-insensitive substring containment.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::{Gazetteer, gazetteer::CountryEntry};

/// Nouns that may sit between the preposition and the place name.
const QUALIFIERS: [&str; 5] = ["city", "kingdom", "region", "empire", "dynasty"];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    QUALIFIERS
        .iter()
        .filter_map(|qualifier| {
            let pattern = format!(
                r"(?:from|of|in|at) (?:the )?(?:ancient )?(?:{qualifier} of )?([A-Z][a-z]+(?: [A-Z][a-z]+)*)"
            );
            match Regex::new(&pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    warn!("skipping location pattern for {qualifier:?}: {err}");
                    None
                }
            }
        })
        .collect()
});

/// Infer a country from free text.
///
/// Patterns are tried in order; for each pattern, each captured phrase in
/// order; for each phrase, each historical name in table order. The first
/// name contained in a phrase whose country has coordinates wins.
///
/// # Examples
///
/// ```
/// use atlas_core::Gazetteer;
/// use atlas_core::resolver::infer_country;
///
/// let gazetteer = Gazetteer::embedded();
/// let entry = infer_country(gazetteer, "Caftan from the Ottoman Empire").unwrap();
/// assert_eq!(entry.name, "Turkey");
/// assert!(infer_country(gazetteer, "Evening dress").is_none());
/// ```
#[must_use]
pub fn infer_country<'g>(gazetteer: &'g Gazetteer, text: &str) -> Option<&'g CountryEntry> {
    PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .find_map(|phrase| match_phrase(gazetteer, phrase.as_str()))
    })
}

fn match_phrase<'g>(gazetteer: &'g Gazetteer, phrase: &str) -> Option<&'g CountryEntry> {
    let lowered = phrase.to_lowercase();
    gazetteer
        .lowered_historical_names()
        .filter(|&(name, _)| lowered.contains(name))
        .find_map(|(_, entry)| gazetteer.country(&entry.country))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_pattern_compiles() {
        assert_eq!(PATTERNS.len(), QUALIFIERS.len());
    }

    #[rstest]
    #[case("Textile from Byzantium", "Turkey")]
    #[case("Robe of the Ming", "China")]
    #[case("Headdress from the ancient kingdom of Siam", "Thailand")]
    #[case("Shawl made in Persia", "Iran")]
    #[case("Court dress worn at Versailles in France", "France")]
    #[case("Robe of the Han Dynasty", "China")]
    #[case("Tunic from the Tang Dynasty", "China")]
    fn captures_place_phrases(#[case] text: &str, #[case] expected: &str) {
        let entry = infer_country(Gazetteer::embedded(), text).expect("a country is inferred");
        assert_eq!(entry.name, expected);
    }

    #[rstest]
    #[case("Evening dress")]
    #[case("dress from paris")]
    #[case("Ensemble from Atlantis")]
    #[case("Gown made in Johannesburg")]
    #[case("Hat from Tangier")]
    #[case("Dress from Chantilly")]
    #[case("Coat made in Sedona")]
    #[case("Jacket from Paramaribo")]
    #[case("")]
    fn yields_nothing_without_a_known_place(#[case] text: &str) {
        assert!(infer_country(Gazetteer::embedded(), text).is_none());
    }

    #[rstest]
    fn longer_names_win_over_contained_shorter_names() {
        // "Ottoman" contains "Oman"; the table lists longer names first.
        let entry = infer_country(Gazetteer::embedded(), "Caftan from the Ottoman Empire")
            .expect("a country is inferred");
        assert_eq!(entry.name, "Turkey");
    }
}
