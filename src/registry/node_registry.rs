//! # Node Registry
//!
//! Registry of per-node platform metadata with thread-safe operations.
//!
//! ## Overview
//!
//! The NodeRegistry is the in-memory source of truth for which operating
//! system and CPU architecture each cluster node runs. Controller event
//! handlers write to it as nodes join, change, and leave the cluster;
//! scheduling and compatibility decisions read from it without re-querying
//! the cluster API.
//!
//! ## Key Features
//!
//! - **Thread-safe node management** using RwLock for concurrent access
//! - **Atomic replace semantics** for repeated registrations of one node
//! - **Idempotent removal** so delete-after-delete event replays are safe
//! - **Registry statistics** for monitoring platform distribution
//!
//! ## Usage
//!
//! ```rust
//! use platform_registry::NodeRegistry;
//!
//! # fn example() -> platform_registry::Result<()> {
//! let registry = NodeRegistry::new();
//!
//! registry.add_node("worker-1", "linux", "amd64")?;
//!
//! let platform = registry.get_node_architecture("worker-1")?;
//! assert_eq!(platform.os, "linux");
//! assert_eq!(platform.architecture, "amd64");
//! # Ok(())
//! # }
//! ```

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Platform metadata for a single cluster node.
///
/// Immutable once constructed; re-registering a node replaces the whole
/// value rather than merging fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMetadata {
    pub os: String,
    pub architecture: String,
}

/// Thread-safe registry mapping node identifiers to platform metadata.
///
/// The map is never handed out by reference; accessors return owned clones,
/// so no caller can mutate entries without going through the lock.
pub struct NodeRegistry {
    /// Node identifier to platform metadata
    nodes: RwLock<HashMap<String, PlatformMetadata>>,
}

impl NodeRegistry {
    /// Create an empty registry ready for concurrent use.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty registry pre-sized for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Create a registry from runtime configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Insert or replace the platform metadata for a node.
    ///
    /// Replacement is wholesale: a later registration for the same
    /// identifier overwrites the previous entry atomically. The registry
    /// grows only when the identifier was not already present.
    pub fn add_node(&self, identifier: &str, os: &str, architecture: &str) -> Result<()> {
        if identifier.is_empty() {
            return Err(RegistryError::InvalidInput(
                "node identifier cannot be empty".to_string(),
            ));
        }
        if os.is_empty() {
            return Err(RegistryError::MissingField(format!(
                "os value missing for node: {identifier}"
            )));
        }
        if architecture.is_empty() {
            return Err(RegistryError::MissingField(format!(
                "architecture value missing for node: {identifier}"
            )));
        }

        let metadata = PlatformMetadata {
            os: os.to_string(),
            architecture: architecture.to_string(),
        };

        {
            let mut nodes = self.nodes.write();
            nodes.insert(identifier.to_string(), metadata);
        }

        debug!(
            node = identifier,
            os = os,
            architecture = architecture,
            "registered node platform"
        );
        Ok(())
    }

    /// Look up the platform metadata recorded for a node.
    ///
    /// Returns an owned copy of the stored value.
    pub fn get_node_architecture(&self, identifier: &str) -> Result<PlatformMetadata> {
        let nodes = self.nodes.read();
        nodes.get(identifier).cloned().ok_or_else(|| {
            RegistryError::NotFound(format!(
                "no platform metadata recorded for node: {identifier}"
            ))
        })
    }

    /// Remove a node's entry if present.
    ///
    /// Idempotent: removing an absent node is not an error, so replayed
    /// deletion events are harmless.
    pub fn delete_node(&self, identifier: &str) -> Result<()> {
        if identifier.is_empty() {
            return Err(RegistryError::InvalidInput(
                "node identifier cannot be empty".to_string(),
            ));
        }

        let removed = {
            let mut nodes = self.nodes.write();
            nodes.remove(identifier)
        };

        if removed.is_some() {
            debug!(node = identifier, "removed node platform");
        }
        Ok(())
    }

    /// Number of nodes currently registered.
    ///
    /// The value is a snapshot consistent with some serialization of
    /// concurrent operations; operations committing after the call are not
    /// reflected.
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    /// Whether the registry currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }

    /// Snapshot of the platform distribution across registered nodes.
    pub fn stats(&self) -> RegistryStats {
        let nodes = self.nodes.read();
        let mut stats = RegistryStats {
            total_nodes: nodes.len(),
            ..RegistryStats::default()
        };

        for metadata in nodes.values() {
            *stats.nodes_per_os.entry(metadata.os.clone()).or_insert(0) += 1;
            *stats
                .nodes_per_architecture
                .entry(metadata.architecture.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about registered nodes
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistryStats {
    pub total_nodes: usize,
    pub nodes_per_os: HashMap<String, usize>,
    pub nodes_per_architecture: HashMap<String, usize>,
}
