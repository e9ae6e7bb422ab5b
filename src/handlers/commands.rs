//! Command handlers for the catalog MCP server
//!
//! Toggle completion changes the in-memory catalog. Add, edit and delete
//! only return their backend-pending acknowledgment.

use crate::CatalogServerHandler;
use crate::catalog::CatalogCommand;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl CatalogServerHandler {
    /// Flips a resource's completion flag. Unknown ids leave the catalog unchanged.
    pub async fn handle_toggle_completion(
        &self,
        course_id: String,
        resource_id: String,
    ) -> McpResult<String> {
        let command = CatalogCommand::ToggleCompletion {
            course_id: validation::normalize_id(&course_id),
            resource_id: validation::normalize_id(&resource_id),
        };
        let outcome = self.catalog().execute(command);
        Ok(formatting::format_outcome(&outcome))
    }

    pub async fn handle_add(&self, kind: String) -> McpResult<String> {
        let kind = validation::parse_record_kind(&kind)?;
        let outcome = self.catalog().execute(CatalogCommand::Add(kind));
        Ok(formatting::format_outcome(&outcome))
    }

    pub async fn handle_edit(
        &self,
        kind: String,
        id: String,
        course_id: Option<String>,
    ) -> McpResult<String> {
        let target = validation::parse_record_ref(&kind, &id, course_id.as_deref())?;
        let outcome = self.catalog().execute(CatalogCommand::Edit(target));
        Ok(formatting::format_outcome(&outcome))
    }

    pub async fn handle_delete(
        &self,
        kind: String,
        id: String,
        course_id: Option<String>,
    ) -> McpResult<String> {
        let target = validation::parse_record_ref(&kind, &id, course_id.as_deref())?;
        let outcome = self.catalog().execute(CatalogCommand::Delete(target));
        Ok(formatting::format_outcome(&outcome))
    }
}
