//! 语义分层
//!
//! 每个 capsule 的事件被分入四层：推理 / 发现 / 原始工具调用 / 告警。
//! `started`、`summary`、`success` 只决定 capsule 身份，不进入任何一层；
//! `other` 与未知类型进入 misc，保证事件不丢失。

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Reasoning,
    Findings,
    Raw,
    Alerts,
}

impl Layer {
    /// 事件类型到层的映射；新增事件类型时这里必须显式决定归属
    pub fn of(event_type: &EventType) -> Option<Layer> {
        match event_type {
            EventType::Progress => Some(Layer::Reasoning),
            EventType::Finding => Some(Layer::Findings),
            EventType::ToolCall => Some(Layer::Raw),
            EventType::Error
            | EventType::Warning
            | EventType::FixProposal
            | EventType::FixApproved
            | EventType::AttestationRequired => Some(Layer::Alerts),
            EventType::Started
            | EventType::Summary
            | EventType::Success
            | EventType::PhaseChange
            | EventType::Other
            | EventType::Unrecognized(_) => None,
        }
    }
}

/// 工具栏过滤模式。告警层不受过滤影响。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerFilter {
    #[default]
    All,
    Reasoning,
    Findings,
    Raw,
}

impl LayerFilter {
    pub fn shows(self, layer: Layer) -> bool {
        match (self, layer) {
            (_, Layer::Alerts) => true,
            (LayerFilter::All, _) => true,
            (LayerFilter::Reasoning, Layer::Reasoning) => true,
            (LayerFilter::Findings, Layer::Findings) => true,
            (LayerFilter::Raw, Layer::Raw) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerFilter::All => "all",
            LayerFilter::Reasoning => "reasoning",
            LayerFilter::Findings => "findings",
            LayerFilter::Raw => "raw",
        }
    }
}

impl std::str::FromStr for LayerFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(LayerFilter::All),
            "reasoning" => Ok(LayerFilter::Reasoning),
            "findings" => Ok(LayerFilter::Findings),
            "raw" => Ok(LayerFilter::Raw),
            other => Err(format!("unknown layer filter: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayeredEvents {
    pub reasoning: Vec<Event>,
    pub findings: Vec<Event>,
    pub raw: Vec<Event>,
    pub alerts: Vec<Event>,
    pub misc: Vec<Event>,
    /// 分层事件在输入中的先后顺序（仅记录层，不含 misc）
    pub order: Vec<Layer>,
}

/// 对 capsule 已收集的事件做一次划分，保持原有顺序
pub fn classify(events: Vec<Event>) -> LayeredEvents {
    let mut out = LayeredEvents::default();
    for ev in events {
        let layer = Layer::of(&ev.event_type);
        if let Some(l) = layer {
            out.order.push(l);
        }
        match layer {
            Some(Layer::Reasoning) => out.reasoning.push(ev),
            Some(Layer::Findings) => out.findings.push(ev),
            Some(Layer::Raw) => out.raw.push(ev),
            Some(Layer::Alerts) => out.alerts.push(ev),
            None => {
                if !ev.event_type.is_known() {
                    tracing::trace!(kind = %ev.event_type, "unrecognized event type kept as misc");
                }
                if matches!(ev.event_type, EventType::Other | EventType::Unrecognized(_)) {
                    out.misc.push(ev);
                }
            }
        }
    }
    out
}
