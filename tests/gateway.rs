//! End-to-end gateway tests against an in-process stub upstream.
//!
//! The stub is a minimal HTTP/1.1 server on a loopback socket. It records
//! every request it receives so the tests can assert on call counts, wire
//! paths, and request bodies without a real pvfUtility instance.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use pvfutility_mcp_server::core::config::UpstreamConfig;
use pvfutility_mcp_server::{ArgumentBag, Dispatcher, ToolError};

/// One request as seen by the stub upstream.
#[derive(Debug, Clone)]
struct CapturedRequest {
    method: String,
    target: String,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    fn body_text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("request body is not UTF-8")
    }
}

/// Canned reply from the stub, with an optional artificial delay.
#[derive(Debug, Clone)]
struct StubResponse {
    status: u16,
    body: String,
    delay: Duration,
}

impl StubResponse {
    fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    fn status(status: u16) -> Self {
        Self {
            status,
            body: "{}".to_string(),
            delay: Duration::ZERO,
        }
    }

    fn delayed(body: &str, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::ok(body)
        }
    }
}

type Responder = Arc<dyn Fn(&CapturedRequest) -> StubResponse + Send + Sync>;

/// Minimal HTTP/1.1 stub server recording every request.
struct StubUpstream {
    base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubUpstream {
    async fn spawn(response: StubResponse) -> Self {
        Self::spawn_with(Arc::new(move |_| response.clone())).await
    }

    async fn spawn_with(responder: Responder) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<CapturedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let responder = responder.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    serve_connection(stream, responder, log).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> CapturedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request captured")
            .clone()
    }
}

async fn serve_connection(
    mut stream: tokio::net::TcpStream,
    responder: Responder,
    log: Arc<Mutex<Vec<CapturedRequest>>>,
) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };

    let response = responder(&request);
    log.lock().unwrap().push(request);

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let payload = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(payload.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let header_end = loop {
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.to_ascii_lowercase().as_str() {
            "content-length" => content_length = value.trim().parse().unwrap_or(0),
            "content-type" => content_type = Some(value.trim().to_string()),
            _ => {}
        }
    }

    let body_start = header_end + 4;
    let mut body = buf[body_start.min(buf.len())..].to_vec();
    while body.len() < content_length {
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(CapturedRequest {
        method,
        target,
        content_type,
        body,
    })
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn dispatcher(base_url: &str) -> Dispatcher {
    Dispatcher::new(&UpstreamConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn args(value: Value) -> ArgumentBag {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn success_payload_passes_through_verbatim() {
    let stub = StubUpstream::spawn(StubResponse::ok(r#"{"a":1}"#)).await;
    let d = dispatcher(&stub.base_url);

    let result = d.invoke("get_version", &ArgumentBag::new()).await.unwrap();
    assert_eq!(result, json!({"a": 1}));

    assert_eq!(stub.request_count(), 1);
    let request = stub.last_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/Api/PvfUtiltiy/getVersion");
}

#[tokio::test]
async fn upstream_failure_status_becomes_upstream_error() {
    let stub = StubUpstream::spawn(StubResponse::status(500)).await;
    let d = dispatcher(&stub.base_url);

    let err = d
        .invoke("get_version", &ArgumentBag::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Upstream { status: 500 }));
    assert_eq!(err.to_string(), "Upstream returned HTTP 500");
}

#[tokio::test]
async fn connection_refusal_becomes_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let d = dispatcher(&format!("http://{addr}"));
    let err = d
        .invoke("get_version", &ArgumentBag::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Transport(_)));
}

#[tokio::test]
async fn malformed_upstream_body_becomes_transport_error() {
    let stub = StubUpstream::spawn(StubResponse::ok("not json at all")).await;
    let d = dispatcher(&stub.base_url);

    let err = d
        .invoke("get_version", &ArgumentBag::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Transport(_)));
}

#[tokio::test]
async fn unknown_tool_makes_no_network_call() {
    let stub = StubUpstream::spawn(StubResponse::ok("{}")).await;
    let d = dispatcher(&stub.base_url);

    let err = d
        .invoke("not_a_tool", &ArgumentBag::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(_)));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn invalid_arguments_make_no_network_call() {
    let stub = StubUpstream::spawn(StubResponse::ok("{}")).await;
    let d = dispatcher(&stub.base_url);

    let err = d
        .invoke("get_file_content", &ArgumentBag::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArgument(_)));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn batch_sizes_always_make_one_call() {
    let stub = StubUpstream::spawn(StubResponse::ok("[]")).await;
    let d = dispatcher(&stub.base_url);

    let batches = [
        json!({"file_paths": []}),
        json!({"file_paths": ["a.equ"]}),
        json!({"file_paths": ["a.equ", "b.equ", "c.equ"]}),
    ];

    for (i, batch) in batches.iter().enumerate() {
        d.invoke("delete_files_batch", &args(batch.clone()))
            .await
            .unwrap();
        assert_eq!(stub.request_count(), i + 1, "batch must be one call");

        let request = stub.last_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.target, "/Api/PvfUtiltiy/DeleteFiles");
        assert_eq!(request.body_json(), batch["file_paths"]);
    }
}

#[tokio::test]
async fn search_request_carries_fixed_auxiliary_fields() {
    let stub = StubUpstream::spawn(StubResponse::ok("[]")).await;
    let d = dispatcher(&stub.base_url);

    d.invoke("search_pvf", &args(json!({"keyword": "sword"})))
        .await
        .unwrap();

    let body = stub.last_request().body_json();
    assert_eq!(body["Keyword"], json!("sword"));
    assert_eq!(body["SourceType"], json!(0));
    assert_eq!(body["NormalUsing"], json!(1));
    assert_eq!(body["ScriptContentSearchMode"], json!(1));
    assert_eq!(body["RemoveOrKeep"], json!(1));
    assert_eq!(body["WholeWordMatch"], json!(false));
    assert_eq!(body["FileTypesString"], Value::Null);
    assert_eq!(body["ScriptContent"], json!(""));
}

#[tokio::test]
async fn import_file_sends_plain_text_body() {
    let stub = StubUpstream::spawn(StubResponse::ok("{}")).await;
    let d = dispatcher(&stub.base_url);

    d.invoke(
        "import_file",
        &args(json!({"file_path": "equipment/new.equ", "file_content": "[name]\n`sword`"})),
    )
    .await
    .unwrap();

    let request = stub.last_request();
    assert_eq!(request.method, "GET");
    assert!(request.target.contains("filePath=equipment%2Fnew.equ"));
    assert_eq!(request.content_type.as_deref(), Some("text/plain"));
    assert_eq!(request.body_text(), "[name]\n`sword`");
}

#[tokio::test]
async fn save_as_path_is_percent_encoded_on_the_wire() {
    let stub = StubUpstream::spawn(StubResponse::ok("{}")).await;
    let d = dispatcher(&stub.base_url);

    d.invoke("save_as_pvf", &args(json!({"file_path": "out dir/pack.pvf"})))
        .await
        .unwrap();

    let request = stub.last_request();
    // Pre-encoded by the registry rule, then encoded again by the query
    // serializer; the upstream decodes twice.
    assert_eq!(
        request.target,
        "/Api/PvfUtiltiy/SaveAsPvfFile?filePath=out%2520dir%252Fpack.pvf"
    );
}

#[tokio::test]
async fn completions_are_not_ordered() {
    let responder: Responder = Arc::new(|request: &CapturedRequest| {
        if request.target.contains("getVersion") {
            StubResponse::delayed("{}", Duration::from_millis(200))
        } else {
            StubResponse::delayed("{}", Duration::from_millis(50))
        }
    });
    let stub = StubUpstream::spawn_with(responder).await;
    let d = dispatcher(&stub.base_url);

    let order: Arc<Mutex<Vec<&str>>> = Arc::new(Mutex::new(Vec::new()));
    let slow = async {
        d.invoke("get_version", &ArgumentBag::new()).await.unwrap();
        order.lock().unwrap().push("slow");
    };
    let fast = async {
        d.invoke("get_pvf_root_directory", &ArgumentBag::new())
            .await
            .unwrap();
        order.lock().unwrap().push("fast");
    };

    tokio::join!(slow, fast);

    assert_eq!(*order.lock().unwrap(), vec!["fast", "slow"]);
    assert_eq!(stub.request_count(), 2);
}
