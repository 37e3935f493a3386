//! Anchor Test: config validates the RPC URL before any network call.

use std::fs;

#[test]
fn test_config_load_validates_rpc_url() {
    let src = fs::read_to_string("src/utils/config.rs")
        .expect("src/utils/config.rs must be readable from workspace root");

    assert!(src.contains("fn validate_http_url("));
    assert!(src.contains("validate_http_url(\"ETH_RPC_URL\""));
    assert!(src.contains("\"http\" | \"https\" => Ok(())"));
}
