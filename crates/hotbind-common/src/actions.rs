use serde::{Deserialize, Serialize};

/// Every action a global hotkey can trigger.
///
/// The registry binds an [`Action`] to an encoded chord; the host's dispatch
/// loop matches on it when the OS reports the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Audio --
    PushToTalk,
    MuteMic,
    MuteDesktop,

    // -- Publish --
    SwitchDisplayMode,
    ZoomInScene,
    ZoomOutScene,
}

impl Action {
    /// Human-readable label for logs and the settings shell.
    pub fn label(&self) -> &'static str {
        match self {
            Action::PushToTalk => "Push to Talk",
            Action::MuteMic => "Mute Microphone",
            Action::MuteDesktop => "Mute Desktop Audio",
            Action::SwitchDisplayMode => "Switch Display Mode",
            Action::ZoomInScene => "Zoom In Scene",
            Action::ZoomOutScene => "Zoom Out Scene",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let all = [
            Action::PushToTalk,
            Action::MuteMic,
            Action::MuteDesktop,
            Action::SwitchDisplayMode,
            Action::ZoomInScene,
            Action::ZoomOutScene,
        ];
        let mut labels: Vec<&str> = all.iter().map(Action::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), all.len());
    }

    #[test]
    fn action_serializes_as_variant_name() {
        let json = serde_json::to_string(&Action::ZoomInScene).unwrap();
        assert_eq!(json, "\"ZoomInScene\"");
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::ZoomInScene);
    }
}
