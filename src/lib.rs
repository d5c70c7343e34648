//! Canvas LMS MCP Server Library
//!
//! This crate exposes the Canvas LMS REST API to Model Context Protocol
//! clients as tools and resources.
//!
//! # Architecture
//!
//! - **canvas**: Authenticated HTTP access to Canvas, with retry, pagination
//!   and error normalization, plus one accessor per Canvas operation
//! - **core**: Configuration, error handling, the MCP server and transports
//! - **domains**: MCP-facing surfaces
//!   - **tools**: One tool per Canvas operation
//!   - **resources**: `canvas://` resources backed by Canvas reads
//!
//! # Example
//!
//! ```rust,no_run
//! use canvas_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.canvas.validate()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod core;
pub mod domains;

pub use canvas::{CanvasClient, CanvasError};
pub use core::{Config, Error, McpServer, Result};
