//! Resource list handler for the catalog MCP server

use crate::CatalogServerHandler;
use crate::catalog::query::{self, ResourceQuery, ResourceStats};
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl CatalogServerHandler {
    /// Handles resource search within one course.
    /// Completion statistics always cover every resource of the course, not just the filtered view.
    pub async fn handle_list_resources(
        &self,
        course_id: String,
        search: Option<String>,
        resource_type: Option<String>,
    ) -> McpResult<String> {
        let course_id = validation::normalize_id(&course_id);
        let query = ResourceQuery {
            search: search.unwrap_or_default(),
            kind: validation::parse_resource_type_filter(resource_type.as_deref())?,
        };

        let catalog = self.catalog();
        let Some(course) = catalog.find_course(&course_id) else {
            bail_public!(
                _,
                "{}",
                validation::format_unknown_course_error(&course_id, &catalog)
            );
        };
        tracing::debug!(%course_id, ?query, "Listing resources");

        let resources = catalog.resources_for(&course_id);
        let view = query::query_resources(resources, &query);
        let stats = ResourceStats::compute(resources, view.len());
        Ok(formatting::format_resources(course, &view, &stats))
    }
}
