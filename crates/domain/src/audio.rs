//! Audio clip — the uploaded voice command, passed to the model untouched.

/// Mime type assumed when the upload does not declare one.
pub const DEFAULT_MIME: &str = "audio/wav";

/// Raw audio bytes of one voice command.
///
/// The relay never inspects or transcodes the audio; bytes and declared mime
/// type travel to the model collaborator as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    bytes: Vec<u8>,
    mime_type: String,
}

impl AudioClip {
    /// Wrap uploaded bytes, falling back to [`DEFAULT_MIME`] when the client
    /// did not declare a content type.
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: Option<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_MIME.to_string()),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the clip, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Size in bytes, for logging.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
