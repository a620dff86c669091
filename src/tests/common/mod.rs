// shared helpers for the in-crate test modules
pub use axum::{body::Body, Router};
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Json;

use crate::client::Cloud;
use crate::config::settings::{CloudConfig, MetadataConfig};

pub const METADATA_PATH: &str = "/computeMetadata/v1beta1/instance/service-accounts/default/token";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Metadata server counting its hits; every answer is `{access_token, expires_in}`.
pub async fn spawn_counting_metadata(
    access_token: &'static str,
    expires_in: i64,
    delay: Duration,
) -> (JoinHandle<()>, SocketAddr, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();
    let router = Router::new().route(
        METADATA_PATH,
        get(move || {
            let c = counter_clone.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                Json(json!({"access_token": access_token, "expires_in": expires_in, "token_type": "Bearer"}))
            }
        }),
    );
    let (handle, addr) = spawn_axum(router).await;
    (handle, addr, counter)
}

pub fn metadata_url(addr: &SocketAddr) -> String {
    format!("http://{}{}", addr, METADATA_PATH)
}

pub fn build_cloud(metadata_url: String, project: Option<&str>) -> Cloud {
    Cloud::from_config(CloudConfig {
        project_id: project.map(str::to_owned),
        metadata: MetadataConfig { url: metadata_url },
        ..CloudConfig::default()
    })
    .expect("cloud client")
}

/// Cloud whose metadata endpoint refuses connections.
pub fn offline_cloud(project: Option<&str>) -> Cloud {
    build_cloud(format!("http://127.0.0.1:9{}", METADATA_PATH), project)
}
