//! Events emitted by the platform and requests sent to it

use serde::{Deserialize, Serialize};

/// Error reported by the platform at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformError {
    pub message: String,
}

/// Intent classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentClassifierResult {
    pub intent_name: String,
    #[serde(default)]
    pub probability: f32,
}

/// A detected intent, tied to the dialogue session it was detected in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentMessage {
    pub session_id: String,
    #[serde(default)]
    pub input: String,
    pub intent: IntentClassifierResult,
    #[serde(default)]
    pub custom_data: Option<String>,
    #[serde(default)]
    pub site_id: Option<String>,
}

/// Everything the platform can tell us
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlatformEvent {
    Ready,
    Error(PlatformError),
    HotwordDetected,
    IntentDetected(IntentMessage),
    LogLine { line: String },
}

/// Arguments of a start-session request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSession {
    /// Text spoken when the session starts
    pub init_text: Option<String>,
    /// Intents the session is restricted to; empty means all
    pub intent_filter: Vec<String>,
    pub send_intent_not_recognized: bool,
    pub custom_session_id: Option<String>,
}

impl StartSession {
    /// The plain session a wake word opens: no prompt, no filter
    pub fn on_wake_word() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_word_session_is_plain() {
        let request = StartSession::on_wake_word();
        assert_eq!(request.init_text, None);
        assert!(request.intent_filter.is_empty());
        assert!(!request.send_intent_not_recognized);
        assert_eq!(request.custom_session_id, None);
    }

    #[test]
    fn test_event_script_yaml() {
        let yaml = r"
- type: ready
- type: log_line
  line: audio server started
- type: hotword_detected
- type: intent_detected
  session_id: s-1
  input: turn on the kitchen lights
  intent:
    intent_name: lightsTurnOn
    probability: 0.92
- type: error
  message: recognizer stalled
";
        let events: Vec<PlatformEvent> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(events.len(), 5);
        assert_eq!(events[0], PlatformEvent::Ready);
        assert_eq!(
            events[1],
            PlatformEvent::LogLine {
                line: "audio server started".to_string()
            }
        );
        match &events[3] {
            PlatformEvent::IntentDetected(intent) => {
                assert_eq!(intent.session_id, "s-1");
                assert_eq!(intent.intent.intent_name, "lightsTurnOn");
                assert_eq!(intent.site_id, None);
            }
            other => panic!("Expected intent, got {other:?}"),
        }
        assert!(matches!(&events[4], PlatformEvent::Error(e) if e.message == "recognizer stalled"));
    }
}
