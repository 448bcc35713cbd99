use log::info;

use crate::Gazetteer;

/// Map a culture descriptor to a country name.
///
/// Tries, in order: an exact match of the trimmed descriptor, a
/// case-insensitive match, and finally a prefix match where the descriptor
/// starts with an adjective followed by a space or comma
/// (`"French, 18th century"`, `"Italian Renaissance"`). Within each pass the
/// first adjective in table order wins.
///
/// # Examples
///
/// ```
/// use atlas_core::Gazetteer;
/// use atlas_core::resolver::country_for_culture;
///
/// let gazetteer = Gazetteer::embedded();
/// assert_eq!(country_for_culture(gazetteer, "Flemish"), Some("Belgium"));
/// assert_eq!(country_for_culture(gazetteer, "italian, Venice"), Some("Italy"));
/// assert_eq!(country_for_culture(gazetteer, "Italianate"), None);
/// ```
#[must_use]
pub fn country_for_culture<'g>(gazetteer: &'g Gazetteer, culture: &str) -> Option<&'g str> {
    let trimmed = culture.trim();
    if let Some(entry) = gazetteer
        .cultures()
        .iter()
        .find(|entry| entry.adjective == trimmed)
    {
        return Some(entry.country.as_str());
    }

    let lowered = trimmed.to_lowercase();
    if let Some((_, entry)) = gazetteer
        .lowered_cultures()
        .find(|&(adjective, _)| adjective == lowered)
    {
        return Some(entry.country.as_str());
    }

    let prefixed = gazetteer.lowered_cultures().find(|&(adjective, _)| {
        lowered
            .strip_prefix(adjective)
            .is_some_and(|rest| rest.starts_with([' ', ',']))
    });
    if let Some((_, entry)) = prefixed {
        return Some(entry.country.as_str());
    }

    info!("no country mapping found for culture {culture:?}");
    None
}
