use super::progress::LearnerProgress;
use super::query::{self, CatalogRecord};
use super::records::{Category, Course, Resource, ResourceSet};
use anyhow::{Result, bail};
use serde::Deserialize;
use std::collections::HashSet;

/// Sample catalog served when no catalog file is configured
const SEED_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Number of courses highlighted on the overview
pub const FEATURED_COURSES: usize = 3;

/// The in-memory catalog held by the server for the whole session
///
/// Collections keep the order they were loaded in; that order is the
/// "source order" every query view preserves before sorting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    /// Resources grouped per course
    pub resource_sets: Vec<ResourceSet>,
    pub categories: Vec<Category>,
    pub progress: LearnerProgress,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the built-in sample catalog
    pub fn seed() -> Result<Self> {
        Self::from_toml(SEED_CATALOG)
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants every loaded catalog must satisfy
    ///
    /// - ids are unique within each collection
    /// - course hours are positive and progress values stay within 0-100
    /// - every resource set belongs to a known course
    pub fn validate(&self) -> Result<()> {
        ensure_unique_ids("course", &self.courses)?;
        ensure_unique_ids("category", &self.categories)?;

        for course in &self.courses {
            if !(course.hours.is_finite() && course.hours > 0.0) {
                bail!(
                    "Course '{}' has invalid hours {}. Hours must be a positive number.",
                    course.id,
                    course.hours
                );
            }
            if let Some(progress) = course.progress
                && progress > 100
            {
                bail!(
                    "Course '{}' has invalid progress {}. Progress must be between 0 and 100.",
                    course.id,
                    progress
                );
            }
        }

        let mut seen_sets = HashSet::new();
        for set in &self.resource_sets {
            if !seen_sets.insert(set.course_id.as_str()) {
                bail!("Duplicate resource set for course '{}'", set.course_id);
            }
            if self.find_course(&set.course_id).is_none() {
                bail!(
                    "Resource set refers to course '{}' which does not exist",
                    set.course_id
                );
            }
            ensure_unique_ids("resource", &set.resources)?;
        }

        let mut seen_entries = HashSet::new();
        for entry in &self.progress.entries {
            if !seen_entries.insert(entry.id.as_str()) {
                bail!("Duplicate progress entry ID '{}'", entry.id);
            }
            if entry.progress > 100 {
                bail!(
                    "Progress entry '{}' has invalid progress {}. Progress must be between 0 and 100.",
                    entry.id,
                    entry.progress
                );
            }
        }

        Ok(())
    }

    /// Find a course by its ID
    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Find a category by its ID
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Resources of a course; empty when the course has none (or is unknown)
    pub fn resources_for(&self, course_id: &str) -> &[Resource] {
        self.resource_sets
            .iter()
            .find(|set| set.course_id == course_id)
            .map(|set| set.resources.as_slice())
            .unwrap_or(&[])
    }

    /// Find a resource within a course
    pub fn find_resource(&self, course_id: &str, resource_id: &str) -> Option<&Resource> {
        self.resources_for(course_id)
            .iter()
            .find(|r| r.id == resource_id)
    }

    /// Flip the `completed` flag of a resource in place
    ///
    /// # Returns
    /// The new flag value, or `None` if the course or resource does not exist
    /// (in which case nothing changes)
    pub fn toggle_resource(&mut self, course_id: &str, resource_id: &str) -> Option<bool> {
        let set = self
            .resource_sets
            .iter_mut()
            .find(|set| set.course_id == course_id)?;
        if !set.resources.iter().any(|r| r.id == resource_id) {
            return None;
        }
        set.resources = query::toggle_completion(&set.resources, resource_id);
        set.resources
            .iter()
            .find(|r| r.id == resource_id)
            .map(|r| r.completed)
    }

    /// Courses highlighted on the overview
    pub fn featured_courses(&self) -> &[Course] {
        &self.courses[..self.courses.len().min(FEATURED_COURSES)]
    }
}

fn ensure_unique_ids<R: CatalogRecord>(kind: &str, records: &[R]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            bail!("Duplicate {} ID '{}'", kind, record.id());
        }
    }
    Ok(())
}
