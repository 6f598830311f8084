use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::InputError;
use crate::event::{Breadcrumb, Event, ReasoningChainStep};
use crate::timeline::TimelineInput;

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn parse_array<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<Vec<T>, InputError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Vec<T>>(raw).map_err(|source| InputError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// 解析事件文本：以 `[` 开头按 JSON 数组解析，否则按 JSONL 逐行解析
pub fn parse_events_str(path: &Path, raw: &str) -> Result<Vec<Event>, InputError> {
    if raw.trim_start().starts_with('[') {
        return parse_array(path, raw);
    }

    let mut events = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        let ev = serde_json::from_str::<Event>(s).map_err(|source| InputError::ParseLine {
            path: path.display().to_string(),
            line: i + 1,
            source,
        })?;
        events.push(ev);
    }
    Ok(events)
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, InputError> {
    let raw = read(path)?;
    let events = parse_events_str(path, &raw)?;
    tracing::debug!(path = %path.display(), count = events.len(), "events loaded");
    Ok(events)
}

pub fn load_breadcrumbs(path: &Path) -> Result<Vec<Breadcrumb>, InputError> {
    parse_array(path, &read(path)?)
}

pub fn load_reasoning_chain(path: &Path) -> Result<Vec<ReasoningChainStep>, InputError> {
    parse_array(path, &read(path)?)
}

/// 组装引擎输入；breadcrumbs 与推理链可选，缺省为空
pub fn load_input(
    events: &Path,
    breadcrumbs: Option<&Path>,
    reasoning_chain: Option<&Path>,
) -> Result<TimelineInput, InputError> {
    let mut input = TimelineInput::new(load_events(events)?);
    if let Some(p) = breadcrumbs {
        input.breadcrumbs = load_breadcrumbs(p)?;
    }
    if let Some(p) = reasoning_chain {
        input.reasoning_chain = load_reasoning_chain(p)?;
    }
    Ok(input)
}
