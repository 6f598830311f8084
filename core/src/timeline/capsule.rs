//! Agent 会话聚合
//!
//! 在单个阶段内按 agent 把事件收拢成 capsule：确定起始事件、
//! 最后一个终结事件，并把事件分入语义层。

use std::collections::HashMap;

use serde::Serialize;

use crate::event::{parse_ts_millis, Breadcrumb, Event, EventType};

use super::breadcrumbs::BreadcrumbIndex;
use super::layers::{classify, Layer, LayerFilter};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capsule {
    pub agent: String,
    pub started_event: Event,
    pub terminating_event: Option<Event>,
    pub is_complete: bool,
    pub start_ts: i64,
    pub reasoning_events: Vec<Event>,
    pub finding_events: Vec<Event>,
    pub tool_call_events: Vec<Event>,
    pub alert_events: Vec<Event>,
    pub misc_events: Vec<Event>,
    pub breadcrumbs: Vec<Breadcrumb>,
    #[serde(skip)]
    layer_order: Vec<Layer>,
}

impl Capsule {
    /// 过滤模式下可见的分层事件，按输入顺序合并；告警始终可见
    pub fn visible_events(&self, filter: LayerFilter) -> Vec<&Event> {
        let mut cursors = [0usize; 4];
        let mut out = Vec::new();
        for layer in &self.layer_order {
            let (slot, events) = match layer {
                Layer::Reasoning => (0, &self.reasoning_events),
                Layer::Findings => (1, &self.finding_events),
                Layer::Raw => (2, &self.tool_call_events),
                Layer::Alerts => (3, &self.alert_events),
            };
            let Some(ev) = events.get(cursors[slot]) else {
                continue;
            };
            cursors[slot] += 1;
            if filter.shows(*layer) {
                out.push(ev);
            }
        }
        out
    }

    pub fn layered_len(&self) -> usize {
        self.reasoning_events.len()
            + self.finding_events.len()
            + self.tool_call_events.len()
            + self.alert_events.len()
    }
}

struct CapsuleBuilder {
    agent: String,
    started: Option<Event>,
    first: Event,
    terminating: Option<Event>,
    events: Vec<Event>,
}

impl CapsuleBuilder {
    fn new(first: &Event) -> Self {
        Self {
            agent: first.agent_name.clone(),
            started: None,
            first: first.clone(),
            terminating: None,
            events: Vec::new(),
        }
    }

    fn observe(&mut self, ev: &Event) {
        if self.started.is_none() && ev.event_type == EventType::Started {
            self.started = Some(ev.clone());
        }
        if ev.event_type.is_terminal() {
            self.terminating = Some(ev.clone());
        }
        self.events.push(ev.clone());
    }

    fn finish(self, crumbs: &BreadcrumbIndex<'_>) -> Capsule {
        let started_event = self.started.unwrap_or(self.first);
        let start_ts = parse_ts_millis(&started_event.timestamp);
        let layered = classify(self.events);
        let breadcrumbs = crumbs.for_agent(&self.agent);
        Capsule {
            is_complete: self.terminating.is_some(),
            agent: self.agent,
            started_event,
            terminating_event: self.terminating,
            start_ts,
            reasoning_events: layered.reasoning,
            finding_events: layered.findings,
            tool_call_events: layered.raw,
            alert_events: layered.alerts,
            misc_events: layered.misc,
            breadcrumbs,
            layer_order: layered.order,
        }
    }
}

/// 单次遍历阶段内事件，跳过 supervisor，输出按 `start_ts` 升序的 capsule
pub fn aggregate_capsules(events: &[Event], crumbs: &BreadcrumbIndex<'_>) -> Vec<Capsule> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut builders: Vec<CapsuleBuilder> = Vec::new();

    for ev in events {
        if ev.is_supervisor() {
            continue;
        }
        let slot = *slots.entry(ev.agent_name.as_str()).or_insert_with(|| {
            builders.push(CapsuleBuilder::new(ev));
            builders.len() - 1
        });
        builders[slot].observe(ev);
    }

    let mut capsules: Vec<Capsule> = builders.into_iter().map(|b| b.finish(crumbs)).collect();
    capsules.sort_by_key(|c| c.start_ts);
    capsules
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ev(sec: u32, agent: &str, t: EventType) -> Event {
        Event::new(
            format!("1970-01-01T00:00:{sec:02}Z"),
            agent,
            t.clone(),
            t.as_str(),
        )
    }

    fn run(events: &[Event]) -> Vec<Capsule> {
        aggregate_capsules(events, &BreadcrumbIndex::default())
    }

    #[test]
    fn supervisor_never_gets_a_capsule() {
        let capsules = run(&[
            ev(1, "supervisor", EventType::Started),
            ev(2, "supervisor", EventType::Summary),
        ]);
        assert!(capsules.is_empty());
    }

    #[test]
    fn started_event_falls_back_to_first_seen() {
        let capsules = run(&[
            ev(1, "log_agent", EventType::Progress),
            ev(2, "log_agent", EventType::Started),
            ev(3, "code_agent", EventType::ToolCall),
        ]);
        assert_eq!(capsules.len(), 2);
        let log = capsules.iter().find(|c| c.agent == "log_agent").unwrap();
        assert_eq!(log.started_event.event_type, EventType::Started);
        assert_eq!(log.start_ts, 2_000);
        let code = capsules.iter().find(|c| c.agent == "code_agent").unwrap();
        assert_eq!(code.started_event.event_type, EventType::ToolCall);
        assert!(!code.is_complete);
    }

    #[test]
    fn last_terminal_event_wins() {
        let capsules = run(&[
            ev(1, "log_agent", EventType::Started),
            ev(2, "log_agent", EventType::Success),
            ev(3, "log_agent", EventType::Progress),
            ev(4, "log_agent", EventType::Summary),
        ]);
        let c = &capsules[0];
        assert!(c.is_complete);
        assert_eq!(
            c.terminating_event.as_ref().map(|e| e.event_type.clone()),
            Some(EventType::Summary)
        );
        assert_eq!(c.reasoning_events.len(), 1);
    }

    #[test]
    fn capsules_sorted_by_start_not_insertion() {
        let capsules = run(&[
            ev(1, "late_agent", EventType::Progress),
            ev(2, "early_agent", EventType::Started),
            ev(5, "late_agent", EventType::Started),
        ]);
        let order: Vec<&str> = capsules.iter().map(|c| c.agent.as_str()).collect();
        assert_eq!(order, vec!["early_agent", "late_agent"]);
    }

    #[test]
    fn visible_events_keep_alerts_under_any_filter() {
        let capsules = run(&[
            ev(1, "k8s_agent", EventType::Started),
            ev(2, "k8s_agent", EventType::ToolCall),
            ev(3, "k8s_agent", EventType::Error),
            ev(4, "k8s_agent", EventType::Finding),
            ev(5, "k8s_agent", EventType::Progress),
        ]);
        let c = &capsules[0];
        let kinds = |f| {
            c.visible_events(f)
                .into_iter()
                .map(|e| e.event_type.as_str().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(kinds(LayerFilter::Findings), vec!["error", "finding"]);
        assert_eq!(
            kinds(LayerFilter::All),
            vec!["tool_call", "error", "finding", "progress"]
        );
        assert_eq!(c.layered_len(), 4);
    }

    #[test]
    fn visible_events_keep_input_order_for_late_arrivals() {
        let capsules = run(&[
            ev(1, "k8s_agent", EventType::Started),
            ev(5, "k8s_agent", EventType::Finding),
            ev(2, "k8s_agent", EventType::Warning),
            ev(3, "k8s_agent", EventType::Progress),
        ]);
        let stamps: Vec<&str> = capsules[0]
            .visible_events(LayerFilter::All)
            .into_iter()
            .map(|e| e.timestamp.as_str())
            .collect();
        assert_eq!(
            stamps,
            vec![
                "1970-01-01T00:00:05Z",
                "1970-01-01T00:00:02Z",
                "1970-01-01T00:00:03Z"
            ]
        );
    }
}
