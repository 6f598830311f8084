use serde::{Deserialize, Serialize};

use super::structure::StructuredTimeline;

/// Toolbar badge counts. Alerts are always visible and so are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub reasoning: usize,
    pub findings: usize,
    pub raw: usize,
}

pub fn filter_counts(timeline: &StructuredTimeline) -> FilterCounts {
    let mut counts = FilterCounts::default();
    for capsule in timeline.phases.iter().flat_map(|p| p.capsules.iter()) {
        counts.reasoning += capsule.reasoning_events.len();
        counts.findings += capsule.finding_events.len();
        counts.raw += capsule.tool_call_events.len();
    }
    counts.all = counts.reasoning + counts.findings + counts.raw;
    counts
}
