// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process stand-in for the qualification service.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header},
    routing::any,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{ClientConfig, QualificationClient};

pub const SERVICE_PATH: &str = "/Rocket-Build-25/BQM/1.4/INPUT-REQUEST";

/// A request as the mock service saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A running mock service and the requests it has received.
pub struct MockService {
    pub addr: SocketAddr,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    /// Starts a service that answers every request with `status` and `body`.
    pub async fn start(status: StatusCode, body: &str) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Starts a service that waits `delay` before answering.
    pub async fn start_delayed(status: StatusCode, body: &str, delay: Duration) -> Self {
        let recorded: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let state: MockState = MockState {
            status,
            body: body.to_string(),
            delay,
            recorded: Arc::clone(&recorded),
        };

        let app: Router = Router::new()
            .route(SERVICE_PATH, any(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, recorded }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, SERVICE_PATH)
    }

    pub fn client(&self) -> QualificationClient {
        QualificationClient::new(ClientConfig::new(&self.endpoint()).unwrap()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type: Option<String> = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.recorded.lock().unwrap().push(RecordedRequest {
        method,
        content_type,
        body,
    });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body)
}

/// Returns an endpoint on a port nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{SERVICE_PATH}")
}
