//! Tools domain module.
//!
//! Every tool maps one Canvas operation onto a [`CanvasClient`] accessor.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one file per Canvas API area
//! - `tool.rs` - The [`CanvasTool`] trait and the shared call path
//! - `registry.rs` - Tool catalog and HTTP dispatch
//! - `router.rs` - rmcp ToolRouter builder for STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing [`CanvasTool`] in the matching `definitions/` file
//! 2. List it in [`definitions::all`]
//!
//! [`CanvasClient`]: crate::canvas::CanvasClient

pub mod definitions;
mod error;
mod registry;
pub mod router;
mod tool;

pub use error::ToolError;
pub use registry::{ToolEntry, ToolHandler, ToolRegistry};
pub use router::build_tool_router;
pub use tool::{CanvasTool, NoParams, execute};
