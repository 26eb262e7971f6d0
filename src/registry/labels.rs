//! Platform label extraction for cluster node objects.
//!
//! The registry stores only already-extracted (os, architecture) pairs; this
//! module is the collaborator that pulls those values out of a node's label
//! map before registration. Keeping extraction out of [`NodeRegistry`]
//! decouples the store from any particular cluster-object schema.
//!
//! [`NodeRegistry`]: crate::registry::NodeRegistry

use crate::error::{RegistryError, Result};
use crate::registry::node_registry::PlatformMetadata;
use std::collections::HashMap;

/// Well-known label carrying a node's operating system.
pub const OS_LABEL: &str = "kubernetes.io/os";

/// Well-known label carrying a node's CPU architecture.
pub const ARCH_LABEL: &str = "kubernetes.io/arch";

/// Extract platform metadata from a node's label map.
///
/// Fails with [`RegistryError::MissingField`] naming the absent or empty
/// label, so controllers can report exactly which required label a node is
/// missing.
pub fn platform_from_labels(
    node: &str,
    labels: &HashMap<String, String>,
) -> Result<PlatformMetadata> {
    let architecture = required_label(node, labels, ARCH_LABEL)?;
    let os = required_label(node, labels, OS_LABEL)?;

    Ok(PlatformMetadata {
        os: os.to_string(),
        architecture: architecture.to_string(),
    })
}

fn required_label<'a>(
    node: &str,
    labels: &'a HashMap<String, String>,
    key: &str,
) -> Result<&'a str> {
    labels
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            RegistryError::MissingField(format!("\"{key}\" label not found on node: {node}"))
        })
}
