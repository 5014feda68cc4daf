//! Speech boundary traits.
//!
//! Transcription and synthesis are opaque collaborators: text in from audio
//! bytes, audio bytes out from text. The runtime never inspects their
//! internals. Real implementations call a third-party speech API; the
//! passthrough stub below treats the audio payload as UTF-8 text so the
//! voice round-trip stays fully exercisable in tests.

/// Errors crossing the speech boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    /// Audio could not be transcribed to text.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// Text could not be synthesized to audio.
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

/// Turn audio bytes into text.
#[async_trait::async_trait]
pub trait SpeechTranscriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, SpeechError>;
}

/// Turn text into audio bytes.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

/// Stub speech service: audio bytes are the UTF-8 text itself.
pub struct PassthroughSpeech;

#[async_trait::async_trait]
impl SpeechTranscriber for PassthroughSpeech {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, SpeechError> {
        String::from_utf8(audio.to_vec())
            .map_err(|_| SpeechError::Transcription("audio payload is not valid UTF-8".into()))
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for PassthroughSpeech {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        Ok(text.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passthrough_round_trips_utf8_text() {
        let text = PassthroughSpeech.transcribe(b"send an email").await.unwrap();
        assert_eq!(text, "send an email");

        let audio = PassthroughSpeech.synthesize(&text).await.unwrap();
        assert_eq!(audio, b"send an email");
    }

    #[tokio::test]
    async fn invalid_utf8_audio_is_a_transcription_error() {
        let err = PassthroughSpeech.transcribe(&[0xff, 0xfe]).await.unwrap_err();
        assert!(matches!(err, SpeechError::Transcription(_)));
    }
}
