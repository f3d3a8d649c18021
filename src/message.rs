// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    pub context: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub audio_base64: Option<String>,
}

impl ChatResponse {
    /// Size of the base64 audio payload in kilobytes, if any came back.
    pub fn audio_kb(&self) -> Option<f64> {
        self.audio_base64.as_ref().map(|a| a.len() as f64 / 1024.0)
    }
}

// Body of GET / on the API.
#[derive(Debug, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_size_reported_in_kb() {
        let resp = ChatResponse {
            response: "here is your song".to_string(),
            audio_base64: Some("A".repeat(1024)),
        };
        let kb = resp.audio_kb().unwrap();
        assert_eq!(format!("{kb:.2}"), "1.00");

        let resp = ChatResponse {
            response: "no song today".to_string(),
            audio_base64: None,
        };
        assert!(resp.audio_kb().is_none());
    }

    #[test]
    fn missing_audio_field_deserializes_as_none() {
        let resp: ChatResponse = serde_json::from_str(r#"{"response": "Hi"}"#).unwrap();
        assert_eq!(resp.response, "Hi");
        assert!(resp.audio_base64.is_none());

        let resp: ChatResponse =
            serde_json::from_str(r#"{"response": "Hi", "audio_base64": null}"#).unwrap();
        assert!(resp.audio_base64.is_none());
    }
}
