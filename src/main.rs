//! Course Catalog MCP Server - Main Entry Point
//!
//! This is the main entry point for the course catalog MCP server application.
//! The actual implementation is in the `course_catalog` library.

use anyhow::Result;
use clap::Parser;
use course_catalog::CatalogServerHandler;
use course_catalog::logging;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;

/// Course Catalog MCP Server - browse courses, resources and learning progress via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a catalog file (TOML). The built-in sample catalog is used when omitted
    catalog: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    let handler = CatalogServerHandler::new(args.catalog.as_deref())?;
    tracing::info!("Serving course catalog over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
