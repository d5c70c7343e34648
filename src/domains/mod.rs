//! Domains module containing the MCP-facing surfaces of the server.
//!
//! Both domains are thin adapters over [`crate::canvas::CanvasClient`].

pub mod resources;
pub mod tools;
