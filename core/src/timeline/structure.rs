//! 时间线结构化入口
//!
//! 纯函数：同样的输入得到深度相等的输出（唯一例外是推理链找不到锚点时
//! 使用的当前时间）。调用方每次输入变化都整体重算，不保留跨调用状态。

use serde::{Deserialize, Serialize};

use crate::event::time::now_millis;
use crate::event::{Breadcrumb, Event, ReasoningChainStep};

use super::breadcrumbs::BreadcrumbIndex;
use super::capsule::{aggregate_capsules, Capsule};
use super::counts::{filter_counts, FilterCounts};
use super::reasoning::reasoning_anchor;
use super::resolve::resolve_phase_status;
use super::segment::segment_phases;

/// 引擎的三路输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineInput {
    pub events: Vec<Event>,
    #[serde(default)]
    pub breadcrumbs: Vec<Breadcrumb>,
    #[serde(default)]
    pub reasoning_chain: Vec<ReasoningChainStep>,
}

impl TimelineInput {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }

    pub fn with_reasoning_chain(mut self, chain: Vec<ReasoningChainStep>) -> Self {
        self.reasoning_chain = chain;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSection {
    pub phase: String,
    pub phase_id: String,
    pub is_current: bool,
    pub is_complete: bool,
    pub start_ts: i64,
    pub event_count: usize,
    pub capsules: Vec<Capsule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredTimeline {
    pub phases: Vec<PhaseSection>,
    pub preamble: Vec<Event>,
    pub reasoning_chain: Vec<ReasoningChainStep>,
    pub reasoning_anchor_ts: Option<i64>,
}

impl StructuredTimeline {
    pub fn current_phase(&self) -> Option<&PhaseSection> {
        self.phases.iter().find(|p| p.is_current)
    }

    pub fn capsule_count(&self) -> usize {
        self.phases.iter().map(|p| p.capsules.len()).sum()
    }
}

/// 结构化时间线加过滤计数，供渲染层一次取用
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineView {
    pub timeline: StructuredTimeline,
    pub counts: FilterCounts,
}

pub fn structure(input: &TimelineInput) -> StructuredTimeline {
    structure_at(input, now_millis())
}

/// 以给定的“当前时间”构建时间线，便于测试得到确定结果
pub fn structure_at(input: &TimelineInput, now_ms: i64) -> StructuredTimeline {
    let segmentation = segment_phases(&input.events, now_ms);
    let crumbs = BreadcrumbIndex::build(&input.breadcrumbs);

    let total = segmentation.buckets.len();
    let mut phases = Vec::with_capacity(total);
    for (i, bucket) in segmentation.buckets.into_iter().enumerate() {
        let capsules = aggregate_capsules(&bucket.events, &crumbs);
        let status = resolve_phase_status(i, total, &capsules);
        phases.push(PhaseSection {
            phase_id: format!("{}-{}", bucket.phase, i),
            phase: bucket.phase,
            is_current: status.is_current,
            is_complete: status.is_complete,
            start_ts: bucket.start_ts,
            event_count: bucket.events.len(),
            capsules,
        });
    }
    // 阶段保持日志顺序；追加顺序即 start_ts 升序，不再重排

    let reasoning_anchor_ts = reasoning_anchor(&input.events, &input.reasoning_chain, now_ms);

    tracing::debug!(
        events = input.events.len(),
        phases = phases.len(),
        preamble = segmentation.preamble.len(),
        breadcrumb_agents = crumbs.agent_count(),
        "timeline structured"
    );

    StructuredTimeline {
        phases,
        preamble: segmentation.preamble,
        reasoning_chain: input.reasoning_chain.clone(),
        reasoning_anchor_ts,
    }
}

pub fn build_view(input: &TimelineInput) -> TimelineView {
    build_view_at(input, now_millis())
}

pub fn build_view_at(input: &TimelineInput, now_ms: i64) -> TimelineView {
    let timeline = structure_at(input, now_ms);
    let counts = filter_counts(&timeline);
    TimelineView { timeline, counts }
}
