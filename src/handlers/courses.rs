//! Course list handler for the catalog MCP server

use crate::CatalogServerHandler;
use crate::catalog::query::{self, CourseQuery, CourseStats, SortKey};
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl CatalogServerHandler {
    /// Handles course search - applies search, category filter and sort, then formats
    /// the view together with statistics over the whole collection.
    pub async fn handle_list_courses(
        &self,
        search: Option<String>,
        category: Option<String>,
        sort_by: Option<String>,
    ) -> McpResult<String> {
        let query = CourseQuery {
            search: search.unwrap_or_default(),
            category: validation::parse_category_filter(category.as_deref())?,
            sort: sort_by.as_deref().map(SortKey::parse).unwrap_or_default(),
        };
        tracing::debug!(?query, "Listing courses");

        let catalog = self.catalog();
        let view = query::query_courses(&catalog.courses, &query);
        let stats = CourseStats::compute(&catalog.courses, view.len());
        Ok(formatting::format_courses(&view, &stats))
    }
}
