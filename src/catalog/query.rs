//! Catalog query engine
//!
//! Pure functions that narrow, order and summarize record collections. None of
//! them mutate their input: filters return a borrowed view in source order,
//! and `toggle_completion` returns a new collection.
//!
//! Records plug in through two traits:
//! - `CatalogRecord`: anything with a headline and description can be searched
//! - `Faceted`: records that can also be narrowed by an exact facet value
//!   (course category, resource type)

use super::records::{Category, Course, CourseCategory, Resource, ResourceType};
use std::cmp::Ordering;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sentinel accepted in place of a facet value to disable facet filtering
pub const ALL_SENTINEL: &str = "all";

/// A searchable catalog record
pub trait CatalogRecord {
    fn id(&self) -> &str;
    /// Name or title, depending on the record kind
    fn headline(&self) -> &str;
    fn description(&self) -> &str;
}

/// A record carrying a single enumerated facet used for exact-match filtering
pub trait Faceted: CatalogRecord {
    type Facet: Copy + PartialEq;

    fn facet(&self) -> Self::Facet;
}

impl CatalogRecord for Course {
    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Faceted for Course {
    type Facet = CourseCategory;

    fn facet(&self) -> CourseCategory {
        self.category
    }
}

impl CatalogRecord for Resource {
    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Faceted for Resource {
    type Facet = ResourceType;

    fn facet(&self) -> ResourceType {
        self.kind
    }
}

impl CatalogRecord for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Exact-match facet filter with an "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetFilter<T> {
    /// No facet filtering
    All,
    /// Keep only records whose facet equals the value
    Only(T),
}

impl<T> Default for FacetFilter<T> {
    fn default() -> Self {
        FacetFilter::All
    }
}

impl<T: Copy + PartialEq> FacetFilter<T> {
    /// Check whether a facet value passes this filter
    pub fn admits(&self, value: T) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => *wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for FacetFilter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(FacetFilter::All)
        } else {
            s.parse().map(FacetFilter::Only)
        }
    }
}

/// Course ordering selector
///
/// Parsing never fails: an unknown key becomes `Unrecognized`, which leaves
/// the order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by name, locale-aware
    #[default]
    Name,
    /// Longest course first
    Hours,
    /// Most progressed first; untracked progress counts as 0
    Progress,
    /// Keep the filtered order
    Unrecognized,
}

impl SortKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "name" => SortKey::Name,
            "hours" => SortKey::Hours,
            "progress" => SortKey::Progress,
            _ => SortKey::Unrecognized,
        }
    }
}

/// Query parameters for the course list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseQuery {
    pub search: String,
    pub category: FacetFilter<CourseCategory>,
    pub sort: SortKey,
}

/// Query parameters for a course's resource list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceQuery {
    pub search: String,
    pub kind: FacetFilter<ResourceType>,
}

/// Check whether a record matches an already lowercased search
///
/// The search matches when it is a substring of the lowercased headline or
/// description. An empty search matches everything.
pub fn matches_search<R: CatalogRecord + ?Sized>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record.headline().to_lowercase().contains(needle)
        || record.description().to_lowercase().contains(needle)
}

/// Narrow records by case-insensitive free-text search, keeping source order
pub fn search_records<'a, R: CatalogRecord>(records: &'a [R], search: &str) -> Vec<&'a R> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(*record, &needle))
        .collect()
}

/// Narrow records by free-text search and facet, keeping source order
pub fn filter_records<'a, R: Faceted>(
    records: &'a [R],
    search: &str,
    facet: FacetFilter<R::Facet>,
) -> Vec<&'a R> {
    let mut matching = search_records(records, search);
    matching.retain(|record| facet.admits(record.facet()));
    matching
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

/// Locale-aware string ordering
///
/// Compares in levels, like a root-locale collator:
/// 1. base letters, ignoring accents and case ("Éclair" before "Zebra")
/// 2. accents, unaccented first ("resume" before "résumé")
/// 3. case, lowercase first ("rust" before "Rust")
///
/// Byte order breaks any remaining tie so the ordering is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Order a course view in place. The sort is stable: equal keys keep their
/// relative order.
pub fn sort_courses(courses: &mut [&Course], key: SortKey) {
    match key {
        SortKey::Name => courses.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Hours => courses.sort_by(|a, b| b.hours.total_cmp(&a.hours)),
        SortKey::Progress => {
            courses.sort_by_key(|course| std::cmp::Reverse(course.progress.unwrap_or(0)))
        }
        SortKey::Unrecognized => {}
    }
}

/// Filter then sort the course list
pub fn query_courses<'a>(courses: &'a [Course], query: &CourseQuery) -> Vec<&'a Course> {
    let mut view = filter_records(courses, &query.search, query.category);
    sort_courses(&mut view, query.sort);
    view
}

/// Filter a resource list (resources are presented in source order)
pub fn query_resources<'a>(resources: &'a [Resource], query: &ResourceQuery) -> Vec<&'a Resource> {
    filter_records(resources, &query.search, query.kind)
}

/// Return a copy of `resources` with the `completed` flag of the resource
/// identified by `id` inverted
///
/// At most one record changes. An unknown id yields an unchanged copy.
pub fn toggle_completion(resources: &[Resource], id: &str) -> Vec<Resource> {
    let mut toggled = false;
    resources
        .iter()
        .map(|resource| {
            let mut resource = resource.clone();
            if !toggled && resource.id == id {
                resource.completed = !resource.completed;
                toggled = true;
            }
            resource
        })
        .collect()
}

/// Rounded arithmetic mean; 0 for an empty input
pub fn rounded_average<I>(values: I) -> u32
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        return 0;
    }
    // `as` saturates, so a negative or non-finite mean cannot wrap
    (sum / count as f64).round() as u32
}

/// `round(part / total * 100)` clamped to [0, 100]; 0 when `total` is 0
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = part as f64 / total as f64 * 100.0;
    (ratio.round() as u32).min(100)
}

/// Headline numbers for the course list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseStats {
    pub total: usize,
    pub filtered: usize,
    pub average_progress: u32,
    pub total_hours: f64,
}

impl CourseStats {
    /// Compute over the full collection; `filtered` is the size of the current view
    pub fn compute(courses: &[Course], filtered: usize) -> Self {
        Self {
            total: courses.len(),
            filtered,
            average_progress: rounded_average(
                courses
                    .iter()
                    .map(|course| f64::from(course.progress.unwrap_or(0))),
            ),
            total_hours: courses.iter().map(|course| course.hours).sum(),
        }
    }
}

/// Headline numbers for a course's resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub filtered: usize,
    pub completion_percentage: u32,
}

impl ResourceStats {
    pub fn compute(resources: &[Resource], filtered: usize) -> Self {
        let total = resources.len();
        let completed = resources.iter().filter(|r| r.completed).count();
        Self {
            total,
            completed,
            remaining: total - completed,
            filtered,
            completion_percentage: percentage(completed, total),
        }
    }
}

/// Headline numbers for the category grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStats {
    pub total: usize,
    pub filtered: usize,
    /// Sum of the advertised course counts
    pub total_courses: u32,
    pub average_courses: u32,
}

impl CategoryStats {
    pub fn compute(categories: &[Category], filtered: usize) -> Self {
        Self {
            total: categories.len(),
            filtered,
            total_courses: categories.iter().map(|c| c.course_count).sum(),
            average_courses: rounded_average(
                categories.iter().map(|c| f64::from(c.course_count)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn seed() -> Catalog {
        Catalog::seed().unwrap()
    }

    fn names(view: &[&Course]) -> Vec<String> {
        view.iter().map(|c| c.name.clone()).collect()
    }

    fn resource(id: &str, completed: bool) -> Resource {
        Resource {
            id: id.to_string(),
            title: format!("Resource {}", id),
            description: String::new(),
            kind: ResourceType::Link,
            url: format!("https://example.com/{}", id),
            completed,
        }
    }

    #[test]
    fn test_programming_courses_sorted_by_name() {
        let catalog = seed();
        let query = CourseQuery {
            search: String::new(),
            category: FacetFilter::Only(CourseCategory::Programming),
            sort: SortKey::Name,
        };
        let view = query_courses(&catalog.courses, &query);

        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "7"]);
        assert_eq!(
            names(&view),
            vec!["Advanced React Development", "Python for Data Science"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = seed();
        let view = search_records(&catalog.courses, "aWs");

        assert!(view.iter().any(|c| c.name == "AWS Solutions Architect"));
        let by_name: Vec<&str> = view
            .iter()
            .filter(|c| c.name.to_lowercase().contains("aws"))
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(by_name, vec!["AWS Solutions Architect"]);

        // Description matches count too: "Cloud Security Fundamentals" mentions AWS
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let catalog = seed();
        assert_eq!(search_records(&catalog.courses, "").len(), 8);
        assert!(matches_search(&catalog.courses[0], ""));
        assert!(matches_search(&catalog.courses[0], "react"));
    }

    #[test]
    fn test_all_filter_is_identity() {
        let catalog = seed();
        for search in ["", "design", "FUNDAMENTALS", "zzz"] {
            let searched = search_records(&catalog.courses, search);
            let filtered = filter_records(&catalog.courses, search, FacetFilter::All);
            assert_eq!(searched, filtered);
            assert!(filtered.len() <= catalog.courses.len());
        }
    }

    #[test]
    fn test_facet_filter_parse() {
        assert_eq!(
            "all".parse::<FacetFilter<ResourceType>>(),
            Ok(FacetFilter::All)
        );
        assert_eq!(
            "video".parse::<FacetFilter<ResourceType>>(),
            Ok(FacetFilter::Only(ResourceType::Video))
        );
        assert!("All".parse::<FacetFilter<ResourceType>>().is_err());
    }

    #[test]
    fn test_sort_by_hours_descending() {
        let catalog = seed();
        let mut view: Vec<&Course> = catalog.courses.iter().collect();
        sort_courses(&mut view, SortKey::Hours);
        let hours: Vec<f64> = view.iter().map(|c| c.hours).collect();
        assert_eq!(hours, vec![40.0, 35.0, 32.0, 28.0, 24.0, 20.0, 18.0, 16.0]);

        let once = view.clone();
        sort_courses(&mut view, SortKey::Hours);
        assert_eq!(once, view);
    }

    #[test]
    fn test_sort_by_progress_treats_missing_as_zero() {
        let mut catalog = seed();
        catalog.courses[0].progress = None;
        let mut view: Vec<&Course> = catalog.courses.iter().collect();
        sort_courses(&mut view, SortKey::Progress);

        assert_eq!(view[0].name, "AWS Solutions Architect");
        // ties at 0 keep source order: 1 (untracked), 3, 7
        let tail: Vec<&str> = view[5..].iter().map(|c| c.id.as_str()).collect();
        assert_eq!(tail, vec!["1", "3", "7"]);
    }

    #[test]
    fn test_name_sort_is_idempotent() {
        let catalog = seed();
        let mut view: Vec<&Course> = catalog.courses.iter().collect();
        sort_courses(&mut view, SortKey::Name);
        let first = names(&view);
        sort_courses(&mut view, SortKey::Name);
        assert_eq!(first, names(&view));
        assert_eq!(first[0], "Advanced React Development");
        assert_eq!(first[7], "UI/UX Design Principles");
    }

    #[test]
    fn test_unrecognized_sort_key_keeps_order() {
        let catalog = seed();
        let query = CourseQuery {
            sort: SortKey::parse("popularity"),
            ..Default::default()
        };
        assert_eq!(query.sort, SortKey::Unrecognized);
        let view = query_courses(&catalog.courses, &query);
        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("rust", "Rust"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_accents() {
        assert_eq!(locale_cmp("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(locale_cmp("résumé", "rust"), Ordering::Less);
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("éclair", "Éclair"), Ordering::Less);
        // precomposed and decomposed forms collate together
        assert!(folded("caf\u{e9}").eq(folded("cafe\u{301}")));
    }

    #[test]
    fn test_name_sort_with_accented_names() {
        let mut catalog = seed();
        catalog.courses[0].name = "Éléments de Réseau".to_string();
        let mut view: Vec<&Course> = catalog.courses.iter().collect();
        sort_courses(&mut view, SortKey::Name);
        let sorted = names(&view);
        let position = sorted
            .iter()
            .position(|name| name == "Éléments de Réseau")
            .unwrap();
        assert_eq!(sorted[position - 1], "Cloud Security Fundamentals");
        assert_eq!(sorted[position + 1], "Ethical Hacking Fundamentals");
    }

    #[test]
    fn test_query_resources_by_type() {
        let catalog = seed();
        let resources = catalog.resources_for("1");
        let query = ResourceQuery {
            search: String::new(),
            kind: FacetFilter::Only(ResourceType::Video),
        };
        let view = query_resources(resources, &query);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "State Management Patterns");
    }

    #[test]
    fn test_toggle_completion_flips_one_record() {
        let catalog = seed();
        let resources = catalog.resources_for("1");
        let toggled = toggle_completion(resources, "2");

        assert!(!resources[1].completed);
        assert!(toggled[1].completed);
        for (before, after) in resources.iter().zip(&toggled) {
            assert_eq!(before.id, after.id);
            if before.id != "2" {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_toggle_completion_is_self_inverse() {
        let resources = vec![resource("a", false), resource("b", true)];
        let twice = toggle_completion(&toggle_completion(&resources, "b"), "b");
        assert_eq!(twice, resources);
    }

    #[test]
    fn test_toggle_completion_unknown_id() {
        let resources = vec![resource("a", false)];
        assert_eq!(toggle_completion(&resources, "missing"), resources);
    }

    #[test]
    fn test_toggle_completion_changes_at_most_one() {
        let resources = vec![resource("dup", false), resource("dup", false)];
        let toggled = toggle_completion(&resources, "dup");
        assert!(toggled[0].completed);
        assert!(!toggled[1].completed);
    }

    #[test]
    fn test_resource_stats_seed() {
        let catalog = seed();
        let stats = ResourceStats::compute(catalog.resources_for("1"), 4);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.remaining, 2);
        assert_eq!(stats.completion_percentage, 50);
    }

    #[test]
    fn test_empty_aggregates_are_zero() {
        let stats = ResourceStats::compute(&[], 0);
        assert_eq!(stats.completion_percentage, 0);
        let stats = CourseStats::compute(&[], 0);
        assert_eq!(stats.average_progress, 0);
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(CategoryStats::compute(&[], 0).average_courses, 0);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(5, 3), 100);
    }

    #[test]
    fn test_course_stats_seed() {
        let catalog = seed();
        let stats = CourseStats::compute(&catalog.courses, 2);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.filtered, 2);
        // (65 + 30 + 0 + 85 + 45 + 10 + 0 + 20) / 8 = 31.875
        assert_eq!(stats.average_progress, 32);
        assert_eq!(stats.total_hours, 213.0);
    }

    #[test]
    fn test_category_stats_seed() {
        let catalog = seed();
        let stats = CategoryStats::compute(&catalog.categories, 6);
        assert_eq!(stats.total_courses, 162);
        assert_eq!(stats.average_courses, 27);
    }
}
