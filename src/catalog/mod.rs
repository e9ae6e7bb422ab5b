//! Catalog domain models and query engine
//!
//! This module contains the catalog data structures and the pure logic that
//! runs over them:
//! - `records`: course, resource and category records
//! - `catalog_data`: the in-memory catalog held for the session
//! - `query`: filtering, sorting and aggregate statistics
//! - `command`: add/edit/delete/toggle commands and their outcomes
//! - `progress`: learner progress dashboard

mod catalog_data;
mod command;
pub mod progress;
pub mod query;
mod records;

pub use catalog_data::{Catalog, FEATURED_COURSES};
pub use command::{Acknowledgment, CatalogCommand, CommandOutcome, RecordKind, RecordRef};
pub use progress::{
    Achievement, LearnerProgress, Period, ProgressEntry, ProgressStatus, ProgressSummary,
    local_date_today,
};
pub use query::{
    CatalogRecord, CategoryStats, CourseQuery, CourseStats, FacetFilter, Faceted, ResourceQuery,
    ResourceStats, SortKey,
};
pub use records::{Category, Course, CourseCategory, Resource, ResourceSet, ResourceType};
