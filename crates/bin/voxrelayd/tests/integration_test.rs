//! End-to-end smoke tests for the full voxrelayd stack.
//!
//! Each test wires the real relay pipeline (real services, real axum router)
//! over scripted backend and interpreter ports and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot` — no TCP port is bound and no network is
//! touched.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use voxrelay_adapter_http_axum::router;
use voxrelay_adapter_http_axum::state::AppState;
use voxrelay_app::ports::{BackendReply, CommandGateway, CommandInterpreter, InventorySource};
use voxrelay_app::services::dispatch_service::DispatchService;
use voxrelay_app::services::relay_service::RelayService;
use voxrelay_app::services::resolver_service::ResolverService;
use voxrelay_domain::audio::AudioClip;
use voxrelay_domain::dispatch::{DispatchMethod, DispatchRoute};
use voxrelay_domain::entity::Entity;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::inventory::InventorySnapshot;
use voxrelay_domain::kind::EntityKind;

const BOUNDARY: &str = "voxrelay-it-boundary";

/// Scripted device backend: fixed inventory, fixed action reply, recorded
/// dispatch routes.
#[derive(Clone)]
struct ScriptedBackend {
    devices: Vec<Entity>,
    groups: Vec<Entity>,
    reply: BackendReply,
    routes: Arc<Mutex<Vec<DispatchRoute>>>,
}

impl ScriptedBackend {
    fn new(reply_status: u16, reply_body: &str) -> Self {
        Self {
            devices: vec![Entity {
                id: "7".into(),
                name: "Lamp".to_string(),
                kind: EntityKind::Device,
            }],
            groups: vec![Entity {
                id: "3".into(),
                name: "Bedroom".to_string(),
                kind: EntityKind::Group,
            }],
            reply: BackendReply {
                status: reply_status,
                body: reply_body.to_string(),
            },
            routes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn recorded_routes(&self) -> Vec<DispatchRoute> {
        self.routes.lock().unwrap().clone()
    }
}

impl InventorySource for ScriptedBackend {
    async fn fetch_snapshot(&self) -> Result<InventorySnapshot, VoxRelayError> {
        let snapshot = serde_json::from_value(serde_json::json!({
            "dispositivos": [ { "idDispositivo": 7, "nome": "Lamp" } ],
            "cenas": [],
            "acoesCena": [],
            "grupos": [ { "idGrupo": 3, "nome": "Bedroom" } ]
        }))
        .unwrap();
        Ok(snapshot)
    }

    async fn list_kind(&self, kind: EntityKind) -> Result<Vec<Entity>, VoxRelayError> {
        Ok(match kind {
            EntityKind::Device => self.devices.clone(),
            EntityKind::Group => self.groups.clone(),
            EntityKind::Scene | EntityKind::SceneAction => Vec::new(),
        })
    }
}

impl CommandGateway for ScriptedBackend {
    async fn execute(&self, route: &DispatchRoute) -> Result<BackendReply, VoxRelayError> {
        self.routes.lock().unwrap().push(route.clone());
        Ok(self.reply.clone())
    }
}

/// Interpreter that always answers with a fixed reply text.
struct ScriptedInterpreter {
    reply: &'static str,
}

impl CommandInterpreter for ScriptedInterpreter {
    async fn interpret(
        &self,
        _snapshot: &InventorySnapshot,
        _audio: AudioClip,
    ) -> Result<String, VoxRelayError> {
        Ok(self.reply.to_string())
    }
}

/// Build a fully-wired router over the scripted ports.
fn app(backend: &ScriptedBackend, model_reply: &'static str) -> axum::Router {
    let pipeline = RelayService::new(
        backend.clone(),
        ScriptedInterpreter { reply: model_reply },
        ResolverService::new(backend.clone()),
        DispatchService::new(backend.clone()),
    );
    router::build(AppState::new(pipeline))
}

fn upload_request_for(field: &str) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"command.wav\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
    body.extend_from_slice(b"RIFFfakewavdata");
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/process-audio")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn upload_request() -> Request<Body> {
    upload_request_for("audio_file")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let backend = ScriptedBackend::new(200, "unused");
    let resp = app(&backend, "unused")
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Full pipeline: upload → interpret → resolve → dispatch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_turn_on_device_end_to_end() {
    let backend = ScriptedBackend::new(200, "Device turned on");
    let app = app(
        &backend,
        r#"Sure! {"entidade": "Dispositivo", "nome": "Lamp", "acao": "LIGAR"}"#,
    );

    let resp = app.oneshot(upload_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["text"], "Device turned on");

    let routes = backend.recorded_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].method, DispatchMethod::Put);
    assert_eq!(routes[0].path, "/dispositivos/7/ligar");
}

#[tokio::test]
async fn should_activate_group_with_post() {
    let backend = ScriptedBackend::new(200, "Group switched off");
    let app = app(
        &backend,
        r#"{"entidade": "Grupo", "nome": "Bedroom", "acao": "desligar"}"#,
    );

    let resp = app.oneshot(upload_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["text"], "Group switched off");

    let routes = backend.recorded_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].method, DispatchMethod::Post);
    assert_eq!(routes[0].path, "/grupos/3/desligar");
}

// ---------------------------------------------------------------------------
// Logical failures still answer 200 with a user-facing message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_unknown_item_without_dispatch() {
    let backend = ScriptedBackend::new(200, "unused");
    let app = app(
        &backend,
        r#"{"entidade": "Dispositivo", "nome": "Heater", "acao": "ligar"}"#,
    );

    let resp = app.oneshot(upload_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["text"], "No item named 'Heater' was found.");
    assert!(backend.recorded_routes().is_empty());
}

#[tokio::test]
async fn should_ignore_unrelated_chatter() {
    let backend = ScriptedBackend::new(200, "unused");
    let app = app(&backend, r#"{"entidade": null, "nome": null, "acao": null}"#);

    let resp = app.oneshot(upload_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["text"], "Could not carry out the request. Please try again.");
    assert!(backend.recorded_routes().is_empty());
}

#[tokio::test]
async fn should_relay_backend_refusal_verbatim() {
    let backend = ScriptedBackend::new(400, "Device is offline");
    let app = app(
        &backend,
        r#"{"entidade": "Dispositivo", "nome": "Lamp", "acao": "ligar"}"#,
    );

    let resp = app.oneshot(upload_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["text"], "Device is offline");
}

// ---------------------------------------------------------------------------
// Upload validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_upload_without_audio_field() {
    let backend = ScriptedBackend::new(200, "unused");
    let app = app(&backend, "unused");

    let resp = app.oneshot(upload_request_for("attachment")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = response_json(resp).await;
    assert_eq!(body["error"], "No audio file was sent");
    assert!(backend.recorded_routes().is_empty());
}
