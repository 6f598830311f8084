use serde::{Deserialize, Serialize};

/// 诊断事件类型
///
/// 未知类型保留原始标签，避免在序列化往返中丢失。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Started,
    Progress,
    Finding,
    ToolCall,
    Summary,
    Success,
    Error,
    Warning,
    PhaseChange,
    FixProposal,
    FixApproved,
    AttestationRequired,
    Other,
    Unrecognized(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Started => "started",
            Self::Progress => "progress",
            Self::Finding => "finding",
            Self::ToolCall => "tool_call",
            Self::Summary => "summary",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::PhaseChange => "phase_change",
            Self::FixProposal => "fix_proposal",
            Self::FixApproved => "fix_approved",
            Self::AttestationRequired => "attestation_required",
            Self::Other => "other",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// `summary` / `success` 终结一个 agent 的会话
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Summary | Self::Success)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "started" => Self::Started,
            "progress" => Self::Progress,
            "finding" => Self::Finding,
            "tool_call" => Self::ToolCall,
            "summary" => Self::Summary,
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "phase_change" => Self::PhaseChange,
            "fix_proposal" => Self::FixProposal,
            "fix_approved" => Self::FixApproved,
            "attestation_required" => Self::AttestationRequired,
            "other" => Self::Other,
            raw => Self::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match EventType::from(s.as_str()) {
            Self::Unrecognized(_) => Self::Unrecognized(s),
            known => known,
        }
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        match t {
            EventType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse_to_variants() {
        assert_eq!(EventType::from("tool_call"), EventType::ToolCall);
        assert_eq!(
            EventType::from("attestation_required"),
            EventType::AttestationRequired
        );
        assert!(EventType::from("summary").is_terminal());
        assert!(!EventType::from("started").is_terminal());
    }

    #[test]
    fn unknown_tag_is_kept_verbatim() {
        let t: EventType = serde_json::from_str("\"heartbeat\"").unwrap();
        assert_eq!(t, EventType::Unrecognized("heartbeat".to_string()));
        assert!(!t.is_known());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"heartbeat\"");
    }
}
