//! Scripted collaborators shared by the integration tests.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, U256};
use fallback_connector::blockchain::{NetworkIdentity, RpcError, RpcResult, TokenBalanceSource};
use fallback_connector::database::{DatabaseDriver, DriverError, ReadyState};
use fallback_connector::endpoint::Endpoint;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A database driver whose connect results are scripted per URI.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockDriver {
    script: HashMap<String, Result<(), DriverError>>,
    calls: Mutex<Vec<String>>,
    state: AtomicU8,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(mut self, uri: &str) -> Self {
        self.script.insert(uri.to_string(), Ok(()));
        self
    }

    pub fn fail(mut self, uri: &str, error: DriverError) -> Self {
        self.script.insert(uri.to_string(), Err(error));
        self
    }

    /// URIs passed to `connect`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Simulate the driver dropping the connection.
    pub fn disconnect(&self) {
        self.state.store(ReadyState::Disconnected as u8, Ordering::SeqCst);
    }
}

impl DatabaseDriver for MockDriver {
    async fn connect(&self, uri: &str) -> Result<(), DriverError> {
        self.calls.lock().unwrap().push(uri.to_string());
        self.state.store(ReadyState::Connecting as u8, Ordering::SeqCst);

        let result = self
            .script
            .get(uri)
            .cloned()
            .unwrap_or_else(|| Err(DriverError::Other(format!("no route to {}", uri))));

        let next = if result.is_ok() {
            ReadyState::Connected
        } else {
            ReadyState::Disconnected
        };
        self.state.store(next as u8, Ordering::SeqCst);
        result
    }

    fn ready_state(&self) -> ReadyState {
        ReadyState::from(self.state.load(Ordering::SeqCst))
    }
}

/// One recorded `balance_of` call.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCall {
    pub endpoint: String,
    pub network: NetworkIdentity,
    pub contract: Address,
    pub owner: Address,
}

/// A token balance source answering from a queue of scripted results.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockBalanceSource {
    responses: Mutex<VecDeque<RpcResult<U256>>>,
    calls: Mutex<Vec<BalanceCall>>,
}

#[allow(dead_code)]
impl MockBalanceSource {
    pub fn new(responses: Vec<RpcResult<U256>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<BalanceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TokenBalanceSource for &MockBalanceSource {
    async fn balance_of(
        &self,
        endpoint: &Endpoint,
        network: &NetworkIdentity,
        contract: Address,
        owner: Address,
    ) -> RpcResult<U256> {
        self.calls.lock().unwrap().push(BalanceCall {
            endpoint: endpoint.as_str().to_string(),
            network: network.clone(),
            contract,
            owner,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RpcError::Transport("unscripted call".to_string())))
    }
}


/// Collects formatted log output for assertions.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber writing plain-text events at DEBUG and above into this buffer.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Captured lines containing `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A local JSON-RPC node answering `eth_chainId` and `eth_call`.
#[allow(dead_code)]
pub struct JsonRpcStub {
    pub addr: SocketAddr,
    methods: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl JsonRpcStub {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON-RPC methods received, in arrival order.
    pub fn methods(&self) -> Vec<String> {
        self.methods.lock().unwrap().clone()
    }
}

/// Start a node that reports `chain_id` and answers every `eth_call` with `balance`.
#[allow(dead_code)]
pub async fn start_json_rpc_stub(chain_id: u64, balance: u64) -> JsonRpcStub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let methods = Arc::new(Mutex::new(Vec::new()));
    let seen = methods.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen = seen.clone();
                    tokio::spawn(async move {
                        let Some(body) = read_request_body(&mut socket).await else {
                            return;
                        };
                        let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                        let method = request["method"].as_str().unwrap_or_default().to_string();
                        seen.lock().unwrap().push(method.clone());

                        let reply = match method.as_str() {
                            "eth_chainId" => json!({
                                "jsonrpc": "2.0",
                                "id": request["id"],
                                "result": format!("0x{:x}", chain_id),
                            }),
                            "eth_call" => json!({
                                "jsonrpc": "2.0",
                                "id": request["id"],
                                "result": format!("0x{:064x}", balance),
                            }),
                            _ => json!({
                                "jsonrpc": "2.0",
                                "id": request["id"],
                                "error": { "code": -32601, "message": "method not found" },
                            }),
                        };
                        let body = reply.to_string();
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    JsonRpcStub { addr, methods }
}

/// Start a node that accepts connections and never answers.
#[allow(dead_code)]
pub async fn start_silent_rpc_stub() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

/// Read one HTTP request and return its body.
#[allow(dead_code)]
async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[header_end..header_end + length].to_vec())
}
