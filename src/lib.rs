#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Platform Registry
//!
//! Thread-safe in-memory registry of cluster node platform metadata.
//!
//! ## Overview
//!
//! Orchestration controllers need to know which operating system and CPU
//! architecture a node runs before making scheduling or compatibility
//! decisions, and they need that answer fast and concurrently rather than
//! re-querying the cluster API on every decision. This crate maintains that
//! mapping in memory: controller event handlers register nodes as they join
//! or change, delete them as they leave, and decision paths look platforms
//! up by node identifier.
//!
//! ## Module Organization
//!
//! - [`registry`] - Concurrent node store and label extraction
//! - [`error`] - Structured error handling
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Structured logging setup for embedding processes
//!
//! ## Quick Start
//!
//! ```rust
//! use platform_registry::NodeRegistry;
//!
//! # fn example() -> platform_registry::Result<()> {
//! let registry = NodeRegistry::new();
//!
//! // Event handler path: node joined the cluster
//! registry.add_node("worker-1", "linux", "amd64")?;
//!
//! // Decision path: where can this workload run?
//! let platform = registry.get_node_architecture("worker-1")?;
//! assert_eq!(platform.architecture, "amd64");
//!
//! // Event handler path: node left the cluster
//! registry.delete_node("worker-1")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous and safe to call from any number of
//! threads at once. Mutations take exclusive access for their O(1) critical
//! section; lookups and counts take shared access. Callers never receive a
//! reference into the shared map, only owned copies.

pub mod config;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{
    platform_from_labels, NodeRegistry, PlatformMetadata, RegistryStats, ARCH_LABEL, OS_LABEL,
};
