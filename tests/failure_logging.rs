//! Failure logging tests
//!
//! Server errors are logged at error level together with the request's
//! method, path, client address and user agent. Client errors are not.

use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt; // for oneshot
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use rcs::http_server::build_router;
use rcs::registry::Registry;
use rcs::schema::RegistrationValidator;
use rcs::store::MemoryStore;

// =============================================================================
// Test Utilities
// =============================================================================

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes error-level events on this thread into the returned buffer.
fn capture_errors() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::ERROR)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn app() -> Router {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("schemas/registration.json");
    let validator = RegistrationValidator::from_file(&path).expect("shipped schema loads");
    build_router(
        Registry::new(Arc::new(MemoryStore::new()), Arc::new(validator)),
        &[],
    )
}

fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::USER_AGENT, "layer-viewer/3.0")
        .body(body)
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 7], 51234))));
    request
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_server_error_logged_with_request_context() {
    let (logs, _guard) = capture_errors();

    let response = app()
        .oneshot(request(Method::GET, "/register/k", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let output = logs.contents();
    assert!(output.contains("ERROR"), "{}", output);
    assert!(output.contains("request failed"), "{}", output);
    assert!(output.contains("method=GET"), "{}", output);
    assert!(output.contains("path=/register/k"), "{}", output);
    assert!(output.contains("ip=10.0.0.7"), "{}", output);
    assert!(output.contains("agent=layer-viewer/3.0"), "{}", output);
    assert!(output.contains("status=500"), "{}", output);
    assert!(output.contains("Not implemented"), "{}", output);
}

#[tokio::test]
async fn test_client_error_not_logged() {
    let (logs, _guard) = capture_errors();

    let response = app()
        .oneshot(request(Method::PUT, "/register/k", Body::from("{ not json")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(!logs.contents().contains("request failed"));
}
