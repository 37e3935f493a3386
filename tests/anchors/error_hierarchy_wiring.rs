use std::fs;

#[test]
fn test_verify_error_hierarchy_is_structured_and_wired() {
    let error_source = fs::read_to_string("src/error.rs").expect("src/error.rs must be readable");
    let config_source =
        fs::read_to_string("src/utils/config.rs").expect("src/utils/config.rs must be readable");
    let deployment_source = fs::read_to_string("src/deployment/rpc.rs")
        .expect("src/deployment/rpc.rs must be readable");

    for needle in [
        "pub enum VerifyError",
        "Config(#[from] ConfigError)",
        "Net(#[from] RpcError)",
        "Deployment(#[from] DeploymentError)",
        "Assertion(#[from] AssertionMismatch)",
        "pub struct AssertionMismatch",
    ] {
        assert!(
            error_source.contains(needle),
            "error hierarchy must contain `{needle}`"
        );
    }

    assert!(
        config_source.contains("ConfigError::MissingConfig"),
        "config loader must lift missing env vars into ConfigError"
    );
    assert!(
        config_source.contains("ConfigError::InvalidConfig"),
        "config loader must lift invalid values into ConfigError"
    );
    assert!(
        !config_source.contains("anyhow::"),
        "config loader should avoid ad-hoc anyhow usage"
    );

    for needle in [
        "DeploymentError::NotDeployed",
        "DeploymentError::InvalidAddress",
        "DeploymentError::NoCode",
        "RpcError::Decode",
    ] {
        assert!(
            deployment_source.contains(needle),
            "rpc deployment must surface `{needle}`"
        );
    }
}
