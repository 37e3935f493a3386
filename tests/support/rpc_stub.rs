//! Minimal JSON-RPC node: answers `eth_chainId`, `eth_getCode` and the two
//! ERC-721 metadata `eth_call`s behind an axum router.

use alloy::primitives::hex;
use alloy::sol_types::{SolCall, SolValue};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

alloy::sol! {
    interface IERC721Metadata {
        function name() external view returns (string memory tokenName);
        function symbol() external view returns (string memory tokenSymbol);
    }
}

#[derive(Clone)]
pub struct StubNode {
    pub chain_id: u64,
    pub code: &'static str,
    /// `None` makes the call revert.
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub methods: Arc<Mutex<Vec<String>>>,
}

impl StubNode {
    pub fn kryptobird(chain_id: u64) -> Self {
        Self {
            chain_id,
            code: "0x608060405234801561001057600080fd5b50",
            name: Some("KryptoBird".to_string()),
            symbol: Some("KBIRDZ".to_string()),
            methods: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seen_methods(&self) -> Vec<String> {
        self.methods.lock().map(|m| m.clone()).unwrap_or_default()
    }

    fn metadata_for(&self, input: &[u8]) -> Option<&str> {
        if input.starts_with(&IERC721Metadata::nameCall::SELECTOR) {
            self.name.as_deref()
        } else if input.starts_with(&IERC721Metadata::symbolCall::SELECTOR) {
            self.symbol.as_deref()
        } else {
            None
        }
    }

    fn answer(&self, request: &Value) -> Value {
        let method = request["method"].as_str().unwrap_or_default().to_string();
        if let Ok(mut seen) = self.methods.lock() {
            seen.push(method.clone());
        }
        let id = request["id"].clone();

        let result = match method.as_str() {
            "eth_chainId" => Ok(json!(format!("0x{:x}", self.chain_id))),
            "eth_getCode" => Ok(json!(self.code)),
            "eth_call" => {
                let tx = &request["params"][0];
                let input = tx["input"]
                    .as_str()
                    .or_else(|| tx["data"].as_str())
                    .and_then(|raw| hex::decode(raw).ok())
                    .unwrap_or_default();
                self.metadata_for(&input)
                    .map(|v| json!(abi_encode_string(v)))
                    .ok_or_else(|| json!({ "code": 3, "message": "execution reverted" }))
            }
            other => Err(json!({ "code": -32601, "message": format!("method {other} not found") })),
        };

        match result {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err(error) => json!({ "jsonrpc": "2.0", "id": id, "error": error }),
        }
    }
}

/// ABI encoding of a single `string` return value, `0x`-prefixed.
pub fn abi_encode_string(value: &str) -> String {
    hex::encode_prefixed((value.to_string(),).abi_encode_params())
}

async fn handle_rpc(State(node): State<StubNode>, body: Bytes) -> Json<Value> {
    let request: Value = serde_json::from_slice(body.as_ref()).unwrap_or(Value::Null);
    Json(node.answer(&request))
}

/// Binds an ephemeral port and serves until the test runtime shuts down.
pub async fn spawn(node: StubNode) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub node must bind");
    let addr = listener.local_addr().expect("stub node local addr");
    let app = Router::new().route("/", post(handle_rpc)).with_state(node);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}
