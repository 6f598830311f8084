#![allow(dead_code)]

use std::path::Path;

use serde_json::{json, Value};
use triage_core::event::{Breadcrumb, Event, EventType, ReasoningChainStep};
use triage_core::input::parse_events_str;

pub fn ts(sec: u32) -> String {
    format!("2025-06-01T10:{:02}:{:02}Z", sec / 60, sec % 60)
}

pub fn ev(sec: u32, agent: &str, t: &str) -> Event {
    Event::new(ts(sec), agent, EventType::from(t), format!("{agent} {t}"))
}

pub fn phase(sec: u32, name: &str) -> Event {
    Event::new(ts(sec), "supervisor", EventType::PhaseChange, "phase change")
        .with_detail("phase", json!(name))
}

pub fn detail(e: Event, key: &str, v: Value) -> Event {
    e.with_detail(key, v)
}

pub fn crumb(agent: &str, action: &str) -> Breadcrumb {
    Breadcrumb {
        agent_name: agent.to_string(),
        timestamp: ts(0),
        action: action.to_string(),
        detail: format!("{agent} did {action}"),
        source_type: Some("log".to_string()),
        source_reference: Some("loki://checkout".to_string()),
    }
}

pub fn step(n: i64, observation: &str) -> ReasoningChainStep {
    ReasoningChainStep {
        step: n,
        observation: observation.to_string(),
        inference: None,
        tool: None,
    }
}

pub fn fixture_events() -> Vec<Event> {
    let raw = include_str!("../fixtures/investigation.jsonl");
    parse_events_str(Path::new("fixtures/investigation.jsonl"), raw)
        .expect("fixture should parse")
}
