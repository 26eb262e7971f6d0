//! # Registry Infrastructure
//!
//! In-memory registry of cluster node platform metadata.
//!
//! ## Overview
//!
//! This module holds the concurrent node store and the label-extraction
//! collaborator that feeds it. Controller event handlers register and remove
//! nodes; scheduling logic reads platform metadata back out.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── NodeRegistry   (Concurrent node platform store)
//! └── labels         (Platform label extraction)
//! ```

pub mod labels;
pub mod node_registry;

// Re-export main types for easy access
pub use labels::{platform_from_labels, ARCH_LABEL, OS_LABEL};
pub use node_registry::{NodeRegistry, PlatformMetadata, RegistryStats};
