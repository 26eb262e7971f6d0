use crate::error::{RegistryError, Result};

/// Runtime configuration for the node registry.
///
/// The registry itself needs very little tuning; this covers the pre-sizing
/// hint for clusters whose node count is known up front and the telemetry
/// toggle embedding controllers pass through to logging setup.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Initial capacity hint for the underlying map (0 means unspecified)
    pub initial_capacity: usize,
    /// Whether the embedding process should emit structured telemetry
    pub telemetry_enabled: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            telemetry_enabled: true,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(capacity) = std::env::var("NODE_REGISTRY_INITIAL_CAPACITY") {
            config.initial_capacity = capacity.parse().map_err(|e| {
                RegistryError::Configuration(format!("Invalid initial_capacity: {e}"))
            })?;
        }

        if let Ok(telemetry) = std::env::var("NODE_REGISTRY_TELEMETRY_ENABLED") {
            config.telemetry_enabled = telemetry.parse().map_err(|e| {
                RegistryError::Configuration(format!("Invalid telemetry_enabled: {e}"))
            })?;
        }

        Ok(config)
    }
}
