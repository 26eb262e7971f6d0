use proptest::prelude::*;

/// Strategy for generating valid node identifiers
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,30}"
}

/// Strategy for generating a valid (os, architecture) pair
pub fn platform_strategy() -> impl Strategy<Value = (String, String)> {
    let os = prop_oneof![
        Just("linux".to_string()),
        Just("windows".to_string()),
        Just("darwin".to_string()),
        "[a-z]{2,10}",
    ];
    let architecture = prop_oneof![
        Just("amd64".to_string()),
        Just("arm64".to_string()),
        Just("s390x".to_string()),
        Just("ppc64le".to_string()),
        "[a-z0-9]{2,10}",
    ];
    (os, architecture)
}
