//! `details` 字段访问器
//!
//! 缺失或格式错误的字段统一落到默认值（严重度 medium，置信度 0），
//! 避免 None 进入比较或算术。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::Event;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

/// `details.severity`，缺省 medium
pub fn severity(event: &Event) -> Severity {
    event
        .detail("severity")
        .and_then(Value::as_str)
        .and_then(Severity::parse)
        .unwrap_or_default()
}

/// `details.confidence`，接受数字或数字字符串，缺省 0
pub fn confidence(event: &Event) -> f64 {
    let v = match event.detail("confidence") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    v.filter(|c| c.is_finite()).unwrap_or(0.0)
}

/// 阶段标签：优先 `details.phase`，否则使用原始 message
pub fn phase_label(event: &Event) -> String {
    match event.detail("phase").and_then(Value::as_str) {
        Some(p) => p.to_string(),
        None => event.message.clone(),
    }
}
