//! Artifact records as supplied by the museum collection API.

use serde::{Deserialize, Serialize};

/// A single costume artifact with sparse, free-text metadata.
///
/// Field names follow the collection API's JSON object, so a raw object
/// response deserializes directly. Unknown keys are ignored. The collection
/// reports missing values as empty strings; every accessor treats a value
/// that is blank after trimming as absent.
///
/// # Examples
///
/// ```
/// use atlas_core::ArtifactRecord;
///
/// let json = r#"{"objectID": 80, "title": "Evening dress", "culture": "", "primaryImage": "a.jpg"}"#;
/// let record: ArtifactRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.id, 80);
/// assert_eq!(record.culture(), None);
/// assert!(record.is_playable());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    /// Opaque identifier, unique per artifact.
    #[serde(rename = "objectID", alias = "id", default)]
    pub id: u64,
    /// Display title, occasionally naming a place or era.
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text country, not normalised.
    #[serde(default)]
    pub country: Option<String>,
    /// Culture descriptor such as `"French, 18th century"`.
    #[serde(default)]
    pub culture: Option<String>,
    /// Historical period.
    #[serde(default)]
    pub period: Option<String>,
    /// Free-text creation date.
    #[serde(default)]
    pub object_date: Option<String>,
    /// Materials description.
    #[serde(default)]
    pub medium: Option<String>,
    /// Image reference; never inspected by the resolver.
    #[serde(rename = "primaryImage", alias = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl ArtifactRecord {
    /// Create a record carrying only an identifier.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the culture descriptor.
    #[must_use]
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Set the period.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Set the object date.
    #[must_use]
    pub fn with_object_date(mut self, object_date: impl Into<String>) -> Self {
        self.object_date = Some(object_date.into());
        self
    }

    /// Set the medium.
    #[must_use]
    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Trimmed title, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        present(self.title.as_deref())
    }

    /// Trimmed country, if present.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        present(self.country.as_deref())
    }

    /// Trimmed culture, if present.
    #[must_use]
    pub fn culture(&self) -> Option<&str> {
        present(self.culture.as_deref())
    }

    /// Trimmed period, if present.
    #[must_use]
    pub fn period(&self) -> Option<&str> {
        present(self.period.as_deref())
    }

    /// Trimmed object date, if present.
    #[must_use]
    pub fn object_date(&self) -> Option<&str> {
        present(self.object_date.as_deref())
    }

    /// Trimmed medium, if present.
    #[must_use]
    pub fn medium(&self) -> Option<&str> {
        present(self.medium.as_deref())
    }

    /// Trimmed image reference, if present.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        present(self.image_url.as_deref())
    }

    /// Date and medium joined into one description when both are present.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        let date = self.object_date()?;
        let medium = self.medium()?;
        Some(format!("{date} {medium}"))
    }

    /// Report whether the record can be shown in a round.
    ///
    /// A round needs something to look at and something to call it.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.title().is_some() && self.image_url().is_some()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("  French "), Some("French"))]
    fn blank_fields_are_absent(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let record = ArtifactRecord {
            culture: raw.map(str::to_owned),
            ..ArtifactRecord::default()
        };
        assert_eq!(record.culture(), expected);
    }

    #[rstest]
    fn description_requires_date_and_medium() {
        let dated = ArtifactRecord::new(1).with_object_date("ca. 1870");
        assert_eq!(dated.description(), None);

        let both = dated.with_medium("silk");
        assert_eq!(both.description().as_deref(), Some("ca. 1870 silk"));
    }

    #[rstest]
    #[case(ArtifactRecord::new(1), false)]
    #[case(ArtifactRecord::new(1).with_title("Dress"), false)]
    #[case(ArtifactRecord::new(1).with_image_url("dress.jpg"), false)]
    #[case(ArtifactRecord::new(1).with_title("Dress").with_image_url(""), false)]
    #[case(ArtifactRecord::new(1).with_title("Dress").with_image_url("dress.jpg"), true)]
    fn playable_records_need_title_and_image(#[case] record: ArtifactRecord, #[case] playable: bool) {
        assert_eq!(record.is_playable(), playable);
    }

    #[rstest]
    fn deserialises_collection_object_shape() {
        let json = r#"{
            "objectID": 156212,
            "primaryImage": "https://images.example/156212.jpg",
            "title": "Wedding ensemble",
            "culture": "Japanese",
            "country": "",
            "objectDate": "1900-1910",
            "medium": "silk",
            "department": "The Costume Institute",
            "isPublicDomain": true
        }"#;
        let record: ArtifactRecord = serde_json::from_str(json).expect("parse record");

        assert_eq!(record.id, 156_212);
        assert_eq!(record.culture(), Some("Japanese"));
        assert_eq!(record.country(), None);
        assert_eq!(record.object_date(), Some("1900-1910"));
        assert_eq!(record.image_url(), Some("https://images.example/156212.jpg"));
    }
}
