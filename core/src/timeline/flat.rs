//! Legacy flat timeline.
//!
//! No phases and no completion: consecutive `tool_call` events from one agent
//! collapse into a tool group, everything else is its own node, and the
//! reasoning chain is dropped in at its anchor. The list is then stably sorted
//! by timestamp.

use serde::Serialize;

use crate::event::time::now_millis;
use crate::event::{parse_ts_millis, Event, EventType, ReasoningChainStep};

use super::reasoning::reasoning_anchor;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlatNode {
    Event {
        ts: i64,
        event: Event,
    },
    ToolGroup {
        ts: i64,
        agent: String,
        events: Vec<Event>,
    },
    ReasoningChain {
        ts: i64,
        steps: Vec<ReasoningChainStep>,
    },
}

impl FlatNode {
    pub fn ts(&self) -> i64 {
        match self {
            FlatNode::Event { ts, .. }
            | FlatNode::ToolGroup { ts, .. }
            | FlatNode::ReasoningChain { ts, .. } => *ts,
        }
    }
}

pub fn flatten(events: &[Event], chain: &[ReasoningChainStep]) -> Vec<FlatNode> {
    flatten_at(events, chain, now_millis())
}

pub fn flatten_at(events: &[Event], chain: &[ReasoningChainStep], now_ms: i64) -> Vec<FlatNode> {
    let mut nodes: Vec<FlatNode> = Vec::with_capacity(events.len() + 1);

    for ev in events {
        if ev.event_type == EventType::ToolCall {
            if let Some(FlatNode::ToolGroup {
                agent,
                events: group,
                ..
            }) = nodes.last_mut()
            {
                if *agent == ev.agent_name {
                    group.push(ev.clone());
                    continue;
                }
            }
            nodes.push(FlatNode::ToolGroup {
                ts: parse_ts_millis(&ev.timestamp),
                agent: ev.agent_name.clone(),
                events: vec![ev.clone()],
            });
            continue;
        }
        nodes.push(FlatNode::Event {
            ts: parse_ts_millis(&ev.timestamp),
            event: ev.clone(),
        });
    }

    if let Some(ts) = reasoning_anchor(events, chain, now_ms) {
        nodes.push(FlatNode::ReasoningChain {
            ts,
            steps: chain.to_vec(),
        });
    }

    nodes.sort_by_key(FlatNode::ts);
    nodes
}
