//! End-to-end scan then group through the library API.

mod common;

use std::collections::BTreeSet;

use common::TestFixture;
use flowdir::grouping::{CompletenessPolicy, RecordGrouper};
use flowdir::scanner::{DirectoryScanner, RecordScanner, ScanSource};
use flowdir::{Field, Record, group_by};

fn scanner() -> DirectoryScanner {
    DirectoryScanner::default().with_sorted_entries(true)
}

fn tubes(values: &[u8]) -> BTreeSet<u8> {
    values.iter().copied().collect()
}

#[test]
fn documented_example_scans_and_groups() {
    let fixture = TestFixture::new();
    fixture.create_file("G1/2017-01-ABC12 CLL 9F 01 x.LMD");
    fixture.create_file("G1/2017-01-ABC12 CLL 9F 02 y.LMD");

    let scanned = scanner().scan(fixture.path(), "run1");

    assert_eq!(scanned.count(), 2);
    for (record, tube) in scanned.records().iter().zip([1, 2]) {
        assert_eq!(record.group(), "G1");
        assert_eq!(record.label(), "2017-01");
        assert_eq!(record.material(), "ABC12");
        assert_eq!(record.tube_set(), tube);
    }

    let grouped = group_by(scanned.records(), Field::Material, &tubes(&[1, 2]));
    assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["ABC12"]);
    assert_eq!(grouped.get("ABC12").unwrap().len(), 2);
}

#[test]
fn hidden_directories_never_contribute() {
    let fixture = TestFixture::new();
    fixture.create_panel(".git", "2017-01", "A1", &[1, 2, 3]);
    fixture.create_panel("G1", "2017-01", "B2", &[1]);

    let scanned = scanner().scan(fixture.path(), "run1");

    assert_eq!(scanned.count(), 1);
    assert!(scanned.records().iter().all(|r| r.group() != ".git"));
}

#[test]
fn only_complete_panels_survive() {
    let fixture = TestFixture::new();
    fixture.create_panel("CLL", "2017-01", "P1", &[1, 2, 3]);
    fixture.create_panel("CLL", "2017-01", "P2", &[1, 2]);
    fixture.create_panel("normal", "2017-02", "P3", &[1, 2, 3, 4]);
    fixture.create_file("normal/notes.txt");

    let scanned = scanner().scan(fixture.path(), "run1");
    let grouped = group_by(scanned.records(), Field::Material, &tubes(&[1, 2, 3]));

    assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["P1", "P3"]);
    assert_eq!(grouped.get("P3").unwrap().len(), 3);
}

#[test]
fn duplicate_tube_is_pinned_under_exact_count() {
    let fixture = TestFixture::new();
    fixture.create_file("G1/2017-01-D1 CLL 9F 01 a.LMD");
    fixture.create_file("G1/2017-01-D1 CLL 9F 01 b.LMD");
    fixture.create_file("G1/2017-01-D1 CLL 9F 02 a.LMD");

    let scanned = scanner().scan(fixture.path(), "run1");

    let counted = group_by(scanned.records(), Field::Material, &tubes(&[1, 2, 3]));
    assert_eq!(counted.len(), 1);

    let covered = RecordGrouper::new(Field::Material)
        .with_tubes([1, 2, 3])
        .with_completeness(CompletenessPolicy::ExactCoverage)
        .group(scanned.records());
    assert!(covered.is_empty());
}

#[test]
fn merged_batches_group_by_dataset() {
    let first = TestFixture::new();
    let second = TestFixture::new();
    first.create_panel("G1", "2017-01", "A", &[1, 2]);
    second.create_panel("G1", "2018-01", "B", &[1]);

    let scanned = scanner().scan_sources(&[
        ScanSource::new(first.path(), "2017"),
        ScanSource::new(second.path(), "2018"),
    ]);
    let grouped = group_by(scanned.records(), Field::Dataset, &BTreeSet::new());

    assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["2017", "2018"]);
    assert_eq!(grouped.get("2017").unwrap().len(), 2);
    assert_eq!(grouped.record_count(), scanned.count());
}

#[test]
fn regrouping_by_group_reproduces_membership() {
    let fixture = TestFixture::new();
    fixture.create_panel("G1", "2017-01", "A", &[1, 2]);
    fixture.create_panel("G2", "2017-01", "B", &[1, 2, 3]);
    fixture.create_panel("G3", "2017-02", "C", &[4]);

    let scanned = scanner().scan(fixture.path(), "run1");
    let once = group_by(scanned.records(), Field::Group, &BTreeSet::new());
    let flattened: Vec<Record> = once.clone().into_records();
    let twice = group_by(&flattened, Field::Group, &BTreeSet::new());

    assert!(once.keys().eq(twice.keys()));
    for key in once.keys() {
        assert_eq!(once.get(key), twice.get(key));
    }
}
