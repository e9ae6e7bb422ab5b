//! Validation helper functions for the catalog MCP server
//!
//! This module turns raw tool parameters (filter labels, periods, record
//! kinds) into typed values, and formats lookup errors.

use crate::catalog::{
    Catalog, CourseCategory, FacetFilter, Period, RecordKind, RecordRef, ResourceType,
};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a course category filter ("all" or an exact category label)
///
/// # Arguments
/// * `category` - Category label; `None` means no filter
pub fn parse_category_filter(category: Option<&str>) -> McpResult<FacetFilter<CourseCategory>> {
    match category {
        None => Ok(FacetFilter::All),
        Some(label) => label.parse().map_err(invalid_params),
    }
}

/// Parse a resource type filter ("all", pdf, video, link, download)
pub fn parse_resource_type_filter(kind: Option<&str>) -> McpResult<FacetFilter<ResourceType>> {
    match kind {
        None => Ok(FacetFilter::All),
        Some(label) => label.parse().map_err(invalid_params),
    }
}

/// Parse a dashboard period; defaults to "all"
pub fn parse_period(period: Option<&str>) -> McpResult<Period> {
    match period {
        None => Ok(Period::All),
        Some(label) => label.parse().map_err(invalid_params),
    }
}

/// Parse a record kind parameter (course, resource, category)
pub fn parse_record_kind(kind: &str) -> McpResult<RecordKind> {
    kind.parse().map_err(invalid_params)
}

/// Build a reference to an existing record
///
/// Resources are scoped to a course, so `course_id` is required for them and
/// ignored otherwise.
pub fn parse_record_ref(kind: &str, id: &str, course_id: Option<&str>) -> McpResult<RecordRef> {
    let id = normalize_id(id);
    match parse_record_kind(kind)? {
        RecordKind::Course => Ok(RecordRef::Course(id)),
        RecordKind::Category => Ok(RecordRef::Category(id)),
        RecordKind::Resource => match course_id {
            Some(course_id) => Ok(RecordRef::Resource {
                course_id: normalize_id(course_id),
                id,
            }),
            None => Err(invalid_params(
                "Resources are identified within a course. Please provide course_id.".to_string(),
            )),
        },
    }
}

/// Format an error message for an unknown course with the available course list
///
/// # Arguments
/// * `course_id` - The course ID that was provided
/// * `catalog` - Catalog to list available courses from
pub fn format_unknown_course_error(course_id: &str, catalog: &Catalog) -> String {
    if catalog.courses.is_empty() {
        format!(
            "Course '{}' does not exist. The catalog has no courses.",
            course_id
        )
    } else {
        let course_list: Vec<String> = catalog
            .courses
            .iter()
            .map(|c| format!("{} ({})", c.id, c.name))
            .collect();
        format!(
            "Course '{}' does not exist.\nAvailable courses: {}",
            course_id,
            course_list.join(", ")
        )
    }
}

/// Trim surrounding whitespace from an ID parameter
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}
