//! # voxrelay-adapter-backend-reqwest
//!
//! Device-backend adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement [`InventorySource`] against the automation backend's REST
//!   API: `GET /history` for the aggregate snapshot, `GET /{collection}`
//!   for a single kind's listing.
//! - Implement [`CommandGateway`] by issuing the routed `PUT`/`POST` call
//!   and handing the raw reply back to the application layer.
//!
//! ## Dependency rule
//! Depends on `voxrelay-app` (port traits) and `voxrelay-domain`. Nothing
//! in here knows about the model collaborator or the inbound HTTP surface.

pub mod config;

use std::time::Duration;

use serde_json::Value;

use voxrelay_app::ports::{BackendReply, CommandGateway, InventorySource};
use voxrelay_domain::dispatch::{DispatchMethod, DispatchRoute};
use voxrelay_domain::entity::Entity;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::inventory::InventorySnapshot;
use voxrelay_domain::kind::EntityKind;

pub use config::BackendConfig;

/// HTTP client for the automation backend.
///
/// Cloning is cheap: the inner [`reqwest::Client`] is reference counted,
/// so one instance can serve as inventory source, resolver source and
/// command gateway at the same time.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VoxRelayError::Internal`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, VoxRelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| VoxRelayError::Internal(err.into()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Join a leading-slash path onto the configured base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_checked(&self, path: &str) -> Result<reqwest::Response, VoxRelayError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| VoxRelayError::BackendUnreachable(err.into()))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(VoxRelayError::BackendStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl InventorySource for HttpBackend {
    async fn fetch_snapshot(&self) -> Result<InventorySnapshot, VoxRelayError> {
        let response = self.get_checked("/history").await?;
        response
            .json::<InventorySnapshot>()
            .await
            .map_err(|err| VoxRelayError::BackendDecode(err.into()))
    }

    async fn list_kind(&self, kind: EntityKind) -> Result<Vec<Entity>, VoxRelayError> {
        let response = self
            .get_checked(&format!("/{}", kind.collection_path()))
            .await?;
        let listing = response
            .json::<Vec<Value>>()
            .await
            .map_err(|err| VoxRelayError::BackendDecode(err.into()))?;
        let entities: Vec<Entity> = listing
            .iter()
            .filter_map(|item| Entity::from_listing(kind, item))
            .collect();
        tracing::debug!(kind = %kind, found = entities.len(), "listed backend collection");
        Ok(entities)
    }
}

impl CommandGateway for HttpBackend {
    async fn execute(&self, route: &DispatchRoute) -> Result<BackendReply, VoxRelayError> {
        let url = self.url(&route.path);
        let request = match route.method {
            DispatchMethod::Put => self.client.put(&url),
            DispatchMethod::Post => self.client.post(&url),
        };
        let response = request
            .send()
            .await
            .map_err(|err| VoxRelayError::BackendUnreachable(err.into()))?;
        let status = response.status().as_u16();
        // The body is the user-facing payload; a read cut short is a
        // transport failure, not an empty reply.
        let body = response
            .text()
            .await
            .map_err(|err| VoxRelayError::BackendUnreachable(err.into()))?;
        tracing::debug!(method = %route.method, path = %route.path, status, "dispatched backend action");
        Ok(BackendReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxrelay_domain::action::Action;
    use voxrelay_domain::id::BackendId;

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let backend = HttpBackend::new(&BackendConfig {
            base_url: "http://backend.local:8080/".to_string(),
            timeout_secs: 10,
        })
        .unwrap();

        assert_eq!(backend.url("/history"), "http://backend.local:8080/history");
    }

    #[test]
    fn should_join_collection_paths_onto_default_base() {
        let backend = HttpBackend::new(&BackendConfig::default()).unwrap();

        assert_eq!(
            backend.url(&format!("/{}", EntityKind::Scene.collection_path())),
            "http://31.97.22.121:8080/cenas"
        );
    }

    #[tokio::test]
    async fn should_map_interrupted_reply_body_to_unreachable() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 512];
            let request_bytes = stream.read(&mut buf).unwrap();
            assert!(request_bytes > 0);
            // Promise more body bytes than are sent, then close the socket.
            stream
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 64\r\n\r\ncut")
                .unwrap();
        });

        let backend = HttpBackend::new(&BackendConfig {
            base_url: format!("http://{addr}"),
            timeout_secs: 5,
        })
        .unwrap();
        let route = DispatchRoute::new(EntityKind::Device, Action::TurnOn, &BackendId::from("7"));

        let err = backend.execute(&route).await.unwrap_err();
        assert!(matches!(err, VoxRelayError::BackendUnreachable(_)));
        server.join().unwrap();
    }
}
