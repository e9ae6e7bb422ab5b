//! Course Catalog MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for browsing a
//! course catalog: courses, the learning resources of each course, category
//! groupings and a learner progress dashboard.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `CatalogServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `catalog` module - Records, query engine and commands
//! - **Fixture Layer**: `storage` module - Loads the catalog from TOML
//!
//! The catalog is loaded once and held in memory. Marking resources complete
//! is the only change a session can make; add/edit/delete are acknowledged
//! but not performed.
//!
//! # Example
//!
//! ```no_run
//! use course_catalog::CatalogServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = CatalogServerHandler::new(None)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod catalog;
mod formatting;
mod handlers;
pub mod logging;
pub mod storage;
mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use catalog::{Catalog, Category, Course, CourseCategory, Resource, ResourceType};
pub use storage::Storage;

/// MCP Server handler for the course catalog
///
/// Holds the session's catalog. Every tool call locks it, runs a query or
/// command, and renders the result as text.
pub struct CatalogServerHandler {
    pub(crate) catalog: Mutex<Catalog>,
    pub(crate) storage: Storage,
}

impl CatalogServerHandler {
    /// Create a new catalog server handler
    ///
    /// # Arguments
    /// * `catalog_path` - Catalog file (TOML); `None` serves the built-in sample catalog
    ///
    /// # Returns
    /// Result containing the handler or an error if the catalog cannot be loaded
    pub fn new(catalog_path: Option<&Path>) -> Result<Self> {
        let storage = Storage::new(catalog_path);
        let catalog = Mutex::new(storage.load()?);
        Ok(Self { catalog, storage })
    }

    /// Create a handler around an already built catalog
    ///
    /// The catalog goes through the same checks as a loaded catalog file.
    pub fn with_catalog(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog: Mutex::new(catalog),
            storage: Storage::builtin(),
        })
    }

    /// Catalog file the handler was loaded from, if any
    pub fn catalog_path(&self) -> Option<&Path> {
        self.storage.file_path()
    }

    /// Lock the catalog
    ///
    /// Every mutation is a single in-place flag flip, so a poisoned lock still
    /// guards consistent data and is recovered.
    pub(crate) fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current catalog state
    pub fn snapshot(&self) -> Catalog {
        self.catalog().clone()
    }
}

/// Course catalog server: browse courses, their learning resources, categories and learner progress.
///
/// Key concepts:
/// - **course**: has a category (Programming, Cybersecurity, Cloud Computing, Networking, Design, Business Administration), duration in hours and optional progress
/// - **resource**: learning material of one course (pdf, video, link, download) that can be marked completed
/// - **category**: a subject area card with its advertised course count
/// - **progress**: the learner dashboard (tracked courses, hours spent, achievements)
///
/// Filters use exact labels; "all" disables a filter. Add/edit/delete are acknowledged only:
/// the catalog has no backend to apply them.
#[mcp_server]
impl McpServer for CatalogServerHandler {
    /// **Overview**: Home view with headline numbers, featured courses and all categories. Start here.
    #[tool]
    async fn overview(&self) -> McpResult<String> {
        self.handle_overview().await
    }

    /// **Courses**: Search, filter and sort the course library. Shows total/filtered counts, average progress and total hours.
    #[tool]
    async fn list_courses(
        &self,
        /// Search: case-insensitive text matched against name and description (optional)
        search: Option<String>,
        /// Category: all/Programming/Cybersecurity/Cloud Computing/Networking/Design/Business Administration (optional, default all)
        category: Option<String>,
        /// Sort: name (A-Z), hours (longest first), progress (highest first) (optional, default name)
        sort_by: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_courses(search, category, sort_by).await
    }

    /// **Resources**: Learning resources of one course with completion statistics.
    #[tool]
    async fn list_resources(
        &self,
        /// Course ID (e.g., "1")
        course_id: String,
        /// Search: case-insensitive text matched against title and description (optional)
        search: Option<String>,
        /// Type: all/pdf/video/link/download (optional, default all)
        resource_type: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_resources(course_id, search, resource_type)
            .await
    }

    /// **Categories**: Browse subject areas and their advertised course counts.
    #[tool]
    async fn list_categories(
        &self,
        /// Search: case-insensitive text matched against name and description (optional)
        search: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_categories(search).await
    }

    /// **Progress**: Learner dashboard with per-course progress, hours spent, streak and achievements.
    #[tool]
    async fn progress(
        &self,
        /// Period: all/week/month/quarter - only courses accessed within the window (optional, default all)
        period: Option<String>,
    ) -> McpResult<String> {
        self.handle_progress(period, crate::catalog::local_date_today())
            .await
    }

    /// **Toggle completion**: Mark a resource completed, or back to not completed.
    #[tool]
    async fn toggle_completion(
        &self,
        /// Course ID owning the resource
        course_id: String,
        /// Resource ID within the course
        resource_id: String,
    ) -> McpResult<String> {
        self.handle_toggle_completion(course_id, resource_id).await
    }

    /// **Add**: Request a new course, resource or category. Acknowledged only; pending backend support.
    #[tool]
    async fn add(
        &self,
        /// Kind: course/resource/category
        kind: String,
    ) -> McpResult<String> {
        self.handle_add(kind).await
    }

    /// **Edit**: Request an edit of a course, resource or category. Acknowledged only; pending backend support.
    #[tool]
    async fn edit(
        &self,
        /// Kind: course/resource/category
        kind: String,
        /// Record ID
        id: String,
        /// Course ID, required when kind is resource
        course_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_edit(kind, id, course_id).await
    }

    /// **Delete**: Request deletion of a course, resource or category. Acknowledged only; nothing is deleted.
    #[tool]
    async fn delete(
        &self,
        /// Kind: course/resource/category
        kind: String,
        /// Record ID
        id: String,
        /// Course ID, required when kind is resource
        course_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_delete(kind, id, course_id).await
    }
}
