//! Runs every demonstration and gathers the outcomes into a serializable report.

use chrono::{TimeZone, Utc};
use serde::Serialize;

use valuekit_core::Record;
use valuekit_query::{
    Index, chunk, distinct_by_key, element_from_end, except_by_key, intersect_by_key, max,
    max_by_key, min, min_by_key, slice, slice_from_end, union_by_key,
};
use valuekit_records::{
    ImmutableUser, ImmutableUserPatch, ReferenceUser, SharedList, UserPatch, ValueUser,
};

use crate::config::DemoConfig;
use crate::population::{ESTIMATED_POPULATION, Population};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    pub name: &'static str,
    pub color: &'static str,
}

const fn shape(name: &'static str, color: &'static str) -> Shape {
    Shape { name, color }
}

pub const SHAPES: &[Shape] = &[
    shape("Square", "Red"),
    shape("Circle", "Red"),
    shape("Triangle", "Green"),
    shape("Square", "Blue"),
    shape("Circle", "Yellow"),
];

pub const SQUARES: &[Shape] = &[
    shape("Square", "Red"),
    shape("Square", "Red"),
    shape("Square", "Green"),
    shape("Sqhare", "Blue"),
];

pub const CIRCLES: &[Shape] = &[
    shape("Circle", "Red"),
    shape("Circle", "Green"),
    shape("Circle", "Yellow"),
];

pub const NUMBERS: &[&str] = &["zero", "one", "two", "three", "four"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub records: RecordReport,
    pub queries: QueryReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    /// Renaming through one handle of a reference user is seen by the other.
    pub reference_alias_sees_rename: bool,
    pub reference_aliases_equal: bool,
    /// Renaming a value-user copy leaves the original untouched.
    pub value_copy_detached: bool,
    pub value_clone_equal: bool,
    pub value_rename_equal: bool,
    pub immutable_fresh_lists_equal: bool,
    pub immutable_absent_lists_equal: bool,
    pub immutable_shared_list_equal_after_push: bool,
    pub immutable_clone_equal_after_push: bool,
    pub immutable_similar_users_in_set: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub min_count: u64,
    pub min_population: Population,
    pub max_count: u64,
    pub max_population: Population,
    pub distinct_by_name: Vec<Shape>,
    pub distinct_by_color: Vec<Shape>,
    pub intersect_by_color: Vec<Shape>,
    pub except_by_color: Vec<Shape>,
    pub union_by_color: Vec<Shape>,
    pub chunk_size: usize,
    pub chunks: Vec<Vec<u32>>,
    pub last: &'static str,
    pub second_to_last: &'static str,
    pub last_two: Vec<&'static str>,
    pub take_three_skip_two: Vec<&'static str>,
}

pub fn build(config: &DemoConfig) -> anyhow::Result<Report> {
    Ok(Report {
        records: record_report(),
        queries: query_report(config)?,
    })
}

pub fn record_report() -> RecordReport {
    let birthdate = Utc
        .with_ymd_and_hms(1990, 3, 21, 0, 0, 0)
        .single()
        .unwrap_or_default();

    let reference = ReferenceUser::new("Daniel", birthdate);
    let alias = reference.clone();
    alias.set_name(Some("Gandalf".to_string()));

    let value = ValueUser::new("Daniel", birthdate);
    let mut value_copy = value.clone();
    value_copy.set_name(Some("Alex".to_string()));
    let value_clone = value.copy_with(UserPatch::default());

    let fresh1 = ImmutableUser::new("Daniel", birthdate);
    let fresh2 = ImmutableUser::new("Daniel", birthdate);
    let absent1 = ImmutableUser::with_stuff(Some("Daniel".to_string()), birthdate, None);
    let absent2 = absent1.copy_with(ImmutableUserPatch::default());

    let stuff = SharedList::new();
    let sharing1 = ImmutableUser::with_stuff(
        Some("Daniel".to_string()),
        birthdate,
        Some(stuff.clone()),
    );
    let sharing2 = ImmutableUser::with_stuff(
        Some("Daniel".to_string()),
        birthdate,
        Some(stuff.clone()),
    );
    stuff.push("something");

    let original = ImmutableUser::new("Daniel", birthdate);
    let cloned = original.copy_with(ImmutableUserPatch::default());
    if let Some(list) = original.stuff() {
        list.push("something");
    }

    let similar: std::collections::HashSet<_> =
        [fresh1.clone(), fresh2.clone()].into_iter().collect();

    RecordReport {
        reference_alias_sees_rename: reference.name().as_deref() == Some("Gandalf"),
        reference_aliases_equal: reference.equals(&alias),
        value_copy_detached: value.name() == Some("Daniel"),
        value_clone_equal: value.equals(&value_clone),
        value_rename_equal: value_copy.equals(&ValueUser::new("Alex", birthdate)),
        immutable_fresh_lists_equal: fresh1.equals(&fresh2),
        immutable_absent_lists_equal: absent1.equals(&absent2),
        immutable_shared_list_equal_after_push: sharing1.equals(&sharing2),
        immutable_clone_equal_after_push: original.equals(&cloned),
        immutable_similar_users_in_set: similar.len(),
    }
}

pub fn query_report(config: &DemoConfig) -> anyhow::Result<QueryReport> {
    let min_count = min(ESTIMATED_POPULATION.iter().map(|p| p.count))?;
    let max_count = max(ESTIMATED_POPULATION.iter().map(|p| p.count))?;
    let min_population = *min_by_key(ESTIMATED_POPULATION, |p| p.count)?;
    let max_population = *max_by_key(ESTIMATED_POPULATION, |p| p.count)?;

    let distinct_by_name = distinct_by_key(SHAPES.iter().copied(), |s| s.name);
    let distinct_by_color = distinct_by_key(SHAPES.iter().copied(), |s| s.color);
    let intersect_by_color = intersect_by_key(
        distinct_by_name.iter().copied(),
        distinct_by_color.iter().map(|s| s.color),
        |s| s.color,
    );
    let except_by_color = except_by_key(
        distinct_by_color.iter().copied(),
        distinct_by_name.iter().map(|s| s.color),
        |s| s.color,
    );
    let union_by_color = union_by_key(
        SQUARES.iter().copied(),
        CIRCLES.iter().copied(),
        |s| s.color,
    );

    let chunks = chunk(0u32..5, config.chunk_size)?;

    let take_three_skip_two = slice(NUMBERS, Index::from_end(3)..Index::from_end(2))?;

    tracing::debug!(
        min_year = min_population.year,
        max_year = max_population.year,
        chunk_count = chunks.len(),
        "query demonstrations complete"
    );

    Ok(QueryReport {
        min_count,
        min_population,
        max_count,
        max_population,
        distinct_by_name,
        distinct_by_color,
        intersect_by_color,
        except_by_color,
        union_by_color,
        chunk_size: config.chunk_size,
        chunks,
        last: *element_from_end(NUMBERS, 1)?,
        second_to_last: *element_from_end(NUMBERS, 2)?,
        last_two: slice_from_end(NUMBERS, 2)?.to_vec(),
        take_three_skip_two: take_three_skip_two.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_outcomes_match_each_variant_semantics() {
        let report = record_report();

        assert!(report.reference_alias_sees_rename);
        assert!(report.reference_aliases_equal);
        assert!(report.value_copy_detached);
        assert!(report.value_clone_equal);
        assert!(report.value_rename_equal);
        assert!(!report.immutable_fresh_lists_equal);
        assert!(report.immutable_absent_lists_equal);
        assert!(report.immutable_shared_list_equal_after_push);
        assert!(report.immutable_clone_equal_after_push);
        assert_eq!(report.immutable_similar_users_in_set, 2);
    }

    #[test]
    fn population_extremes() {
        let report = query_report(&DemoConfig::default()).unwrap();

        assert_eq!(report.min_population, Population::new(1950, 16_236_296));
        assert_eq!(report.max_population, Population::new(1990, 23_489_160));
        assert_eq!(report.min_count, report.min_population.count);
        assert_eq!(report.max_count, report.max_population.count);
    }

    #[test]
    fn shape_set_operations() {
        let report = query_report(&DemoConfig::default()).unwrap();

        assert_eq!(
            report.distinct_by_name,
            vec![shape("Square", "Red"), shape("Circle", "Red"), shape("Triangle", "Green")]
        );
        assert_eq!(
            report.intersect_by_color,
            vec![shape("Square", "Red"), shape("Triangle", "Green")]
        );
        assert_eq!(
            report.except_by_color,
            vec![shape("Square", "Blue"), shape("Circle", "Yellow")]
        );
        assert_eq!(
            report.union_by_color,
            vec![
                shape("Square", "Red"),
                shape("Square", "Green"),
                shape("Sqhare", "Blue"),
                shape("Circle", "Yellow"),
            ]
        );
    }

    #[test]
    fn chunks_and_from_end_addressing() {
        let report = query_report(&DemoConfig::default()).unwrap();

        assert_eq!(report.chunks, vec![vec![0, 1, 2], vec![3, 4]]);
        assert_eq!(report.last, "four");
        assert_eq!(report.second_to_last, "three");
        assert_eq!(report.last_two, vec!["three", "four"]);
        assert_eq!(report.take_three_skip_two, vec!["two"]);
    }

    #[test]
    fn configured_chunk_size_is_honored() {
        let report = query_report(&DemoConfig { chunk_size: 2 }).unwrap();
        assert_eq!(report.chunks, vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn zero_chunk_size_surfaces_as_error() {
        let err = query_report(&DemoConfig { chunk_size: 0 }).unwrap_err();
        assert!(err.to_string().contains("chunk size"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = build(&DemoConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["queries"]["last"], "four");
        assert_eq!(json["queries"]["min_population"]["year"], 1950);
        assert_eq!(json["records"]["immutable_fresh_lists_equal"], false);
    }
}
