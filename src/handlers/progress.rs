//! Progress dashboard handler for the catalog MCP server

use crate::CatalogServerHandler;
use crate::catalog::progress;
use crate::formatting;
use crate::validation;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

impl CatalogServerHandler {
    /// Handles the progress dashboard. `today` anchors the recency window of `period`.
    pub async fn handle_progress(
        &self,
        period: Option<String>,
        today: NaiveDate,
    ) -> McpResult<String> {
        let period = validation::parse_period(period.as_deref())?;
        let catalog = self.catalog();
        let learner = &catalog.progress;
        let entries = progress::filter_by_period(&learner.entries, period, today);
        Ok(formatting::format_progress(
            &entries,
            &learner.summary(),
            &learner.achievements,
        ))
    }
}
