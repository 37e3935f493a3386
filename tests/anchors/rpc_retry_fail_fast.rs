use std::fs;

#[test]
fn rpc_layer_bounds_every_call_and_fails_fast_on_reverts() {
    let source = fs::read_to_string("src/utils/rpc.rs")
        .expect("src/utils/rpc.rs must be readable for retry audit");

    for needle in [
        "timeout(Duration::from_millis(policy.timeout_ms), op()).await",
        "!is_retryable_rpc_error(&message) || attempt == max_attempts",
        "\"execution reverted\"",
        "bounded_exponential_backoff_ms(",
    ] {
        assert!(
            source.contains(needle),
            "rpc layer must contain `{needle}` for the retry protocol"
        );
    }
}
