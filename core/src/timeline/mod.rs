//! # 调查时间线结构化引擎
//!
//! 把持续增长的诊断事件流（以及证据 breadcrumb、推理链两路旁路输入）
//! 重塑为：阶段 → agent capsule → 语义层 的层级结构。
//!
//! 流水线：
//! 1. `segment`：按 `phase_change` 切分阶段
//! 2. `capsule`：阶段内按 agent 聚合
//! 3. `layers`：capsule 内事件分层
//! 4. `resolve`：完成 / 当前阶段判定
//! 5. `breadcrumbs`：按 agent 关联证据
//! 6. `reasoning`：推理链锚点
//! 7. `counts`：过滤计数
//!
//! `flat` 保留旧版的扁平时间线模式。

pub mod breadcrumbs;
pub mod capsule;
pub mod counts;
pub mod flat;
pub mod layers;
pub mod reasoning;
pub mod resolve;
pub mod segment;
pub mod structure;

pub use breadcrumbs::BreadcrumbIndex;
pub use capsule::{aggregate_capsules, Capsule};
pub use counts::{filter_counts, FilterCounts};
pub use flat::{flatten, flatten_at, FlatNode};
pub use layers::{classify, Layer, LayerFilter, LayeredEvents};
pub use reasoning::{reasoning_anchor, REASONING_CHAIN_MARKER};
pub use resolve::{resolve_phase_status, PhaseStatus};
pub use segment::{segment_phases, PhaseBucket, Segmentation, INITIAL_PHASE};
pub use structure::{
    build_view, build_view_at, structure, structure_at, PhaseSection, StructuredTimeline,
    TimelineInput, TimelineView,
};
