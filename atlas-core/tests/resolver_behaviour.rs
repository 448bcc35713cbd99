//! Behavioural coverage for the location fallback chain.

use std::cell::RefCell;

use atlas_core::resolver::{DEFAULT_COUNTRY, HOME_COORDINATES};
use atlas_core::{ArtifactRecord, ResolvedLocation, resolve_location};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Record under test.
#[fixture]
pub fn record() -> RefCell<ArtifactRecord> {
    RefCell::new(ArtifactRecord::new(1))
}

/// Captures the resolved location for assertions.
#[fixture]
pub fn resolved() -> RefCell<Option<ResolvedLocation>> {
    RefCell::new(None)
}

#[given("a record with country Ruritania and a French culture")]
fn unknown_country_with_culture(record: &RefCell<ArtifactRecord>) {
    let mut current = record.borrow_mut();
    current.country = Some("Ruritania".to_owned());
    current.culture = Some("French".to_owned());
}

#[given("a record with no location metadata")]
fn bare_record(record: &RefCell<ArtifactRecord>) {
    *record.borrow_mut() = ArtifactRecord::new(2);
}

#[given("a record with culture \"Italian, Venice, 16th century\"")]
fn compound_culture(record: &RefCell<ArtifactRecord>) {
    record.borrow_mut().culture = Some("Italian, Venice, 16th century".to_owned());
}

#[given("a record titled \"Caftan from the Ottoman Empire\"")]
fn titled_record(record: &RefCell<ArtifactRecord>) {
    record.borrow_mut().title = Some("Caftan from the Ottoman Empire".to_owned());
}

#[when("I resolve the record")]
fn resolve(record: &RefCell<ArtifactRecord>, resolved: &RefCell<Option<ResolvedLocation>>) {
    let location = resolve_location(&record.borrow());
    *resolved.borrow_mut() = Some(location);
}

#[then("the record resolves to {country}")]
fn resolves_to(country: String, resolved: &RefCell<Option<ResolvedLocation>>) {
    let binding = resolved.borrow();
    let Some(location) = binding.as_ref() else {
        panic!("resolution must run first");
    };
    assert_eq!(location.country, country);
}

#[then("the record falls back to the home location")]
fn resolves_home(resolved: &RefCell<Option<ResolvedLocation>>) {
    let binding = resolved.borrow();
    let Some(location) = binding.as_ref() else {
        panic!("resolution must run first");
    };
    assert_eq!(location.country, DEFAULT_COUNTRY);
    assert_eq!(location.coordinates(), HOME_COORDINATES);
}

#[then("the resolution source is {source}")]
fn source_is(source: String, resolved: &RefCell<Option<ResolvedLocation>>) {
    let binding = resolved.borrow();
    let Some(location) = binding.as_ref() else {
        panic!("resolution must run first");
    };
    assert_eq!(location.source.as_str(), source);
}

#[scenario(path = "tests/features/resolver.feature", index = 0)]
fn unknown_country_falls_through(
    record: RefCell<ArtifactRecord>,
    resolved: RefCell<Option<ResolvedLocation>>,
) {
    let _ = (record, resolved);
}

#[scenario(path = "tests/features/resolver.feature", index = 1)]
fn empty_record_defaults(
    record: RefCell<ArtifactRecord>,
    resolved: RefCell<Option<ResolvedLocation>>,
) {
    let _ = (record, resolved);
}

#[scenario(path = "tests/features/resolver.feature", index = 2)]
fn compound_culture_prefix(
    record: RefCell<ArtifactRecord>,
    resolved: RefCell<Option<ResolvedLocation>>,
) {
    let _ = (record, resolved);
}

#[scenario(path = "tests/features/resolver.feature", index = 3)]
fn historical_title(
    record: RefCell<ArtifactRecord>,
    resolved: RefCell<Option<ResolvedLocation>>,
) {
    let _ = (record, resolved);
}
