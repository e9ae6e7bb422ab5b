//! Category list handler for the catalog MCP server

use crate::CatalogServerHandler;
use crate::catalog::query::{self, CategoryStats};
use crate::formatting;
use mcp_attr::Result as McpResult;

impl CatalogServerHandler {
    /// Handles category search over names and descriptions.
    pub async fn handle_list_categories(&self, search: Option<String>) -> McpResult<String> {
        let search = search.unwrap_or_default();
        let catalog = self.catalog();
        let view = query::search_records(&catalog.categories, &search);
        let stats = CategoryStats::compute(&catalog.categories, view.len());
        Ok(formatting::format_categories(&view, &stats))
    }
}
