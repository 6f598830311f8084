//! triage-core：调查时间线结构化引擎
//!
//! 输入为诊断事件、证据 breadcrumb 与推理链；输出为阶段 / capsule / 分层的
//! 结构化时间线以及过滤计数。引擎本身是纯函数，不做 I/O。

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod report;
pub mod timeline;

pub use event::{Breadcrumb, Event, EventType, ReasoningChainStep};
pub use timeline::{
    build_view, build_view_at, filter_counts, flatten, flatten_at, structure, structure_at,
    FilterCounts, FlatNode, LayerFilter, StructuredTimeline, TimelineInput, TimelineView,
};
