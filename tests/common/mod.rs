//! Shared fixtures for integration tests.
#![allow(dead_code)] // each test binary uses a different subset of helpers

pub mod strategies;

use platform_registry::{NodeRegistry, ARCH_LABEL, OS_LABEL};
use std::collections::HashMap;

/// Platform pairs seen on real clusters, cycled through by fixtures.
pub const PLATFORM_PAIRS: &[(&str, &str)] = &[
    ("linux", "amd64"),
    ("linux", "arm64"),
    ("windows", "amd64"),
    ("linux", "s390x"),
    ("linux", "ppc64le"),
];

/// Platform pair assigned to the `index`-th fixture node.
pub fn platform_for(index: usize) -> (&'static str, &'static str) {
    PLATFORM_PAIRS[index % PLATFORM_PAIRS.len()]
}

/// Identifier assigned to the `index`-th fixture node.
pub fn node_id(index: usize) -> String {
    format!("node-{index}")
}

/// Build a label map the way cluster node objects carry platform labels.
pub fn node_labels(os: &str, architecture: &str) -> HashMap<String, String> {
    HashMap::from([
        (OS_LABEL.to_string(), os.to_string()),
        (ARCH_LABEL.to_string(), architecture.to_string()),
    ])
}

/// Register `count` fixture nodes and return their identifiers.
pub fn populate(registry: &NodeRegistry, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let id = node_id(i);
            let (os, architecture) = platform_for(i);
            registry
                .add_node(&id, os, architecture)
                .expect("fixture registration should succeed");
            id
        })
        .collect()
}
