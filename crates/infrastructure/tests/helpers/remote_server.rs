#![allow(dead_code)]

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::net::SocketAddr;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";

pub const RECORDS_JSON: &str = r#"{
    "record_keys": ["id", "deployment"],
    "record_infos": [["a1", "db"], ["b2", "web"]],
    "aliases": {"_.web.internal": [{"group_id": "3", "root_domain": "bosh",
        "placeholder_type": "uuid", "health_filter": "smart", "initial_health_check": "synchronous"}]},
    "version": 5,
    "records": [["2.2.2.2", "db.internal"], ["3.3.3.3", "web2.internal"]]
}"#;

/// In-process records endpoint bound to an ephemeral port.
pub struct TestRemote {
    addr: SocketAddr,
}

impl TestRemote {
    pub async fn start() -> Self {
        let router = Router::new()
            .route("/records.json", get(|| async { RECORDS_JSON }))
            .route(
                "/unavailable",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            )
            .route("/garbage", get(|| async { "this is not json" }))
            .route("/protected", get(protected))
            .route("/hop/{n}", get(hop))
            .route("/loop/{n}", get(redirect_loop));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });

        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn protected(headers: HeaderMap) -> Response {
    let expected = format!("Basic {}", STANDARD.encode(format!("{USERNAME}:{PASSWORD}")));
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => RECORDS_JSON.into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

/// Redirects three times, then serves the records.
async fn hop(Path(n): Path<u32>) -> Response {
    if n < 3 {
        Redirect::temporary(&format!("/hop/{}", n + 1)).into_response()
    } else {
        RECORDS_JSON.into_response()
    }
}

async fn redirect_loop(Path(n): Path<u32>) -> Redirect {
    Redirect::temporary(&format!("/loop/{}", n + 1))
}
