//! Anchor Test: verification never issues state-changing calls.

use std::fs;

#[test]
fn verifier_and_deployment_adapter_stay_read_only() {
    for path in [
        "src/verifier/mod.rs",
        "src/verifier/checks.rs",
        "src/deployment/rpc.rs",
        "src/utils/rpc.rs",
    ] {
        let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("{path} unreadable: {e}"));
        for forbidden in [
            "send_transaction",
            "send_raw_transaction",
            "eth_sendTransaction",
            "PrivateKeySigner",
            "EthereumWallet",
        ] {
            assert!(
                !source.contains(forbidden),
                "{path} must not reference `{forbidden}`"
            );
        }
    }

    let verifier = fs::read_to_string("src/verifier/mod.rs").expect("verifier source");
    assert!(
        !verifier.contains("&mut dyn ContractHandle"),
        "checks must only borrow the handle immutably"
    );
}
