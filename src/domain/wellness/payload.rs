//! Input payloads accepted by the router.

use serde::{Deserialize, Serialize};

/// Reference to a media file already processed by an upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    /// Where the file lives (path or URL); validated by domain handlers.
    pub location: String,
    /// Transcript, caption or extracted text, when available.
    pub extracted_text: Option<String>,
}

impl MediaReference {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            extracted_text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.extracted_text = Some(text.into());
        self
    }
}

/// What the user sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputPayload {
    Text(String),
    Image(MediaReference),
    Audio(MediaReference),
    Document(MediaReference),
}

/// Payload discriminant, used for routing defaults and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Text,
    Image,
    Audio,
    Document,
}

impl InputPayload {
    pub fn text(text: impl Into<String>) -> Self {
        InputPayload::Text(text.into())
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            InputPayload::Text(_) => PayloadKind::Text,
            InputPayload::Image(_) => PayloadKind::Image,
            InputPayload::Audio(_) => PayloadKind::Audio,
            InputPayload::Document(_) => PayloadKind::Document,
        }
    }

    /// Textual content of the payload: the text itself, or the
    /// extracted text of a media reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputPayload::Text(text) => Some(text.as_str()),
            InputPayload::Image(media) | InputPayload::Audio(media) | InputPayload::Document(media) => {
                media.extracted_text.as_deref()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_text_reads_transcripts() {
        let audio = InputPayload::Audio(MediaReference::new("call.wav").with_text("you never listen"));
        assert_eq!(audio.as_text(), Some("you never listen"));
        assert_eq!(audio.kind(), PayloadKind::Audio);

        let image = InputPayload::Image(MediaReference::new("fridge.jpg"));
        assert_eq!(image.as_text(), None);
    }

    #[test]
    fn payload_serializes_as_tagged_union() {
        let json = serde_json::to_value(InputPayload::text("hi")).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["value"], "hi");
    }
}
