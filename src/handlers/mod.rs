//! MCP tool handlers for the catalog server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod categories;
pub mod commands;
pub mod courses;
pub mod overview;
pub mod progress;
pub mod resources;
