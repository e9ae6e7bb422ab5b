//! Common test utilities for integration tests

#![allow(dead_code)]

use course_catalog::{
    Catalog, CatalogServerHandler, Course, CourseCategory, Resource, ResourceType,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a test handler serving the built-in sample catalog
pub fn get_test_handler() -> CatalogServerHandler {
    CatalogServerHandler::new(None).unwrap()
}

/// Load the built-in sample catalog
pub fn seed_catalog() -> Catalog {
    Catalog::seed().unwrap()
}

/// Write catalog TOML to a temporary file
pub fn write_catalog_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Create a test course with minimal fields
pub fn create_test_course(
    id: &str,
    name: &str,
    hours: f64,
    category: CourseCategory,
    progress: Option<u8>,
) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("About {}", name),
        hours,
        category,
        progress,
    }
}

/// Create a test resource
pub fn create_test_resource(id: &str, title: &str, kind: ResourceType, completed: bool) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("About {}", title),
        kind,
        url: format!("https://example.com/{}", id),
        completed,
    }
}
