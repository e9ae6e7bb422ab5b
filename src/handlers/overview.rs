//! Overview handler for the catalog MCP server

use crate::CatalogServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl CatalogServerHandler {
    /// Renders the home overview: headline numbers, featured courses and categories.
    pub async fn handle_overview(&self) -> McpResult<String> {
        let catalog = self.catalog();
        Ok(formatting::format_overview(&catalog))
    }
}
