use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::EventType;

/// Reserved agent name for orchestration meta-commentary.
pub const SUPERVISOR_AGENT: &str = "supervisor";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: String,

    pub agent_name: String,

    pub event_type: EventType,

    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl Event {
    pub fn new(
        timestamp: impl Into<String>,
        agent_name: impl Into<String>,
        event_type: EventType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            agent_name: agent_name.into(),
            event_type,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    pub fn is_supervisor(&self) -> bool {
        self.agent_name == SUPERVISOR_AGENT
    }
}

/// Evidence citation tied to one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub agent_name: String,
    pub timestamp: String,
    pub action: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningChainStep {
    pub step: i64,
    pub observation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
}
