//! # voxrelay-adapter-gemini
//!
//! Model-collaborator adapter for the Generative Language API.
//!
//! ## Responsibilities
//! - Implement [`CommandInterpreter`]: upload the inventory snapshot and
//!   the audio clip through the resumable file API, run one
//!   `generateContent` call over the fixed three-turn prompt and return
//!   the reply text.
//! - Clean up the uploaded files afterwards, success or failure. Deletion
//!   is best-effort and only logs a warning when it fails.
//!
//! ## Dependency rule
//! Depends on `voxrelay-app` (port trait) and `voxrelay-domain`. It knows
//! nothing about the device backend or the inbound HTTP surface.

pub mod config;
pub mod prompt;

use std::time::Duration;

use serde_json::Value;

use voxrelay_app::ports::CommandInterpreter;
use voxrelay_domain::audio::AudioClip;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::inventory::InventorySnapshot;

pub use config::GeminiConfig;

/// Handle to a file stored by the file API.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Resource name (`files/...`), used for deletion.
    pub name: String,
    /// URI referenced from prompt parts.
    pub uri: String,
    /// Mime type declared at upload time.
    pub mime_type: String,
}

/// Client for the Generative Language API.
pub struct GeminiInterpreter {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiInterpreter {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VoxRelayError::Internal`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, VoxRelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| VoxRelayError::Internal(err.into()))?;
        Ok(Self { client, config })
    }

    /// Store a file through the resumable upload protocol.
    ///
    /// One `start` request opens the session and hands back the session
    /// URL in the `x-goog-upload-url` header; a single follow-up request
    /// sends the bytes and finalizes.
    async fn upload_file(
        &self,
        display_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, VoxRelayError> {
        let start_url = format!(
            "{}/upload/v1beta/files?key={}",
            self.config.base_url, self.config.api_key
        );
        let metadata = serde_json::json!({ "file": { "display_name": display_name } });
        let response = self
            .client
            .post(&start_url)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&metadata)
            .send()
            .await
            .map_err(|err| {
                VoxRelayError::ModelInvocation(format!("file upload could not start: {err}"))
            })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxRelayError::ModelInvocation(format!(
                "file upload start returned {status}: {body}"
            )));
        }
        let upload_url = response
            .headers()
            .get("x-goog-upload-url")
            .and_then(|value| value.to_str().ok())
            .map(|url| url.to_string())
            .ok_or_else(|| {
                VoxRelayError::ModelInvocation(
                    "file upload start returned no session URL".to_string(),
                )
            })?;

        let response = self
            .client
            .post(&upload_url)
            .header("X-Goog-Upload-Command", "upload, finalize")
            .header("X-Goog-Upload-Offset", 0)
            .body(bytes)
            .send()
            .await
            .map_err(|err| {
                VoxRelayError::ModelInvocation(format!("file upload did not complete: {err}"))
            })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxRelayError::ModelInvocation(format!(
                "file upload finalize returned {status}: {body}"
            )));
        }
        let body = response.json::<Value>().await.map_err(|err| {
            VoxRelayError::ModelInvocation(format!("file upload reply was not JSON: {err}"))
        })?;

        let file = body.get("file");
        let name = file
            .and_then(|file| file.get("name"))
            .and_then(Value::as_str);
        let uri = file.and_then(|file| file.get("uri")).and_then(Value::as_str);
        let (Some(name), Some(uri)) = (name, uri) else {
            return Err(VoxRelayError::ModelInvocation(
                "file upload reply carried no file name or URI".to_string(),
            ));
        };
        tracing::debug!(display_name, file = name, "uploaded file for interpretation");
        Ok(UploadedFile {
            name: name.to_string(),
            uri: uri.to_string(),
            mime_type: mime_type.to_string(),
        })
    }

    async fn generate(&self, body: &Value) -> Result<Value, VoxRelayError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );
        let response = self.client.post(&url).json(body).send().await.map_err(|err| {
            VoxRelayError::ModelInvocation(format!("generateContent call failed: {err}"))
        })?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxRelayError::ModelInvocation(format!(
                "generateContent returned {status}: {body}"
            )));
        }
        response.json::<Value>().await.map_err(|err| {
            VoxRelayError::ModelInvocation(format!("generateContent reply was not JSON: {err}"))
        })
    }

    /// Delete a stored file, logging instead of failing.
    async fn delete_file(&self, name: &str) {
        let url = format!(
            "{}/v1beta/{}?key={}",
            self.config.base_url, name, self.config.api_key
        );
        match self.client.delete(&url).send().await {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                tracing::warn!(file = name, status = %response.status(), "could not delete uploaded file");
            }
            Err(err) => {
                tracing::warn!(file = name, error = %err, "could not delete uploaded file");
            }
        }
    }
}

/// Concatenated text parts of the first candidate, if any.
fn reply_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

impl CommandInterpreter for GeminiInterpreter {
    #[tracing::instrument(skip_all, fields(audio_bytes = audio.len()))]
    async fn interpret(
        &self,
        snapshot: &InventorySnapshot,
        audio: AudioClip,
    ) -> Result<String, VoxRelayError> {
        let inventory_bytes = serde_json::to_vec(snapshot).map_err(|err| {
            VoxRelayError::ModelInvocation(format!("inventory could not be serialized: {err}"))
        })?;
        let inventory = self
            .upload_file("inventory", "text/plain", inventory_bytes)
            .await?;

        let audio_mime = audio.mime_type().to_string();
        let audio_file = match self
            .upload_file("voice-command", &audio_mime, audio.into_bytes())
            .await
        {
            Ok(file) => file,
            Err(err) => {
                self.delete_file(&inventory.name).await;
                return Err(err);
            }
        };

        let body = prompt::request_body(&inventory, &audio_file);
        let result = self.generate(&body).await;

        self.delete_file(&inventory.name).await;
        self.delete_file(&audio_file.name).await;

        let response = result?;
        reply_text(&response).ok_or_else(|| {
            VoxRelayError::ModelInvocation("generateContent reply carried no text".to_string())
        })
    }
}
