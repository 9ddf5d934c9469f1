use uuid::Uuid;

/// Emitted after every successful spin.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct SpinRecordedEvent {
    pub session_id: Uuid,
    pub user_id: Option<String>,
    pub target: String,
    pub pick_key: String,
    pub pick_name: String,
    pub was_reset: bool,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct DestinationSavedEvent {
    pub saved_id: Uuid,
    pub user_id: String,
    pub destination_id: String,
    pub timestamp: i64,
}

impl SpinRecordedEvent {
    /// Topic-style name used as the log target for event lines.
    pub const NAME: &'static str = "spin.recorded";
}

impl DestinationSavedEvent {
    pub const NAME: &'static str = "destination.saved";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_event_serialization() {
        let event = SpinRecordedEvent {
            session_id: Uuid::nil(),
            user_id: None,
            target: "country".to_string(),
            pick_key: "JP".to_string(),
            pick_name: "Japan".to_string(),
            was_reset: true,
            timestamp: 1_700_000_000,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["pick_key"], "JP");
        assert_eq!(json["was_reset"], true);
        assert!(json["user_id"].is_null());
    }
}
