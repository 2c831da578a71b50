use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Served {
    body: RwLock<String>,
    status: RwLock<Option<StatusCode>>,
    hits: AtomicU64,
}

/// Remote records endpoint whose document and status can be changed while
/// a flow is running.
pub struct TestRemote {
    addr: SocketAddr,
    served: Arc<Served>,
}

impl TestRemote {
    pub async fn start(body: &str) -> Self {
        let served = Arc::new(Served::default());
        *served.body.write().await = body.to_string();

        let router = Router::new()
            .route("/records.json", get(serve_records))
            .with_state(served.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server");
        });

        Self { addr, served }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/records.json", self.addr)
    }

    pub async fn serve(&self, body: &str) {
        *self.served.body.write().await = body.to_string();
    }

    pub async fn fail_with(&self, status: Option<StatusCode>) {
        *self.served.status.write().await = status;
    }

    pub fn hits(&self) -> u64 {
        self.served.hits.load(Ordering::SeqCst)
    }
}

async fn serve_records(State(served): State<Arc<Served>>) -> Response {
    served.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = *served.status.read().await {
        return (status, "unavailable").into_response();
    }
    served.body.read().await.clone().into_response()
}
