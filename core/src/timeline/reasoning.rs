use crate::event::{parse_ts_millis, Event, EventType, ReasoningChainStep};

/// Marker searched (case-insensitively) in `summary` messages to locate the chain.
pub const REASONING_CHAIN_MARKER: &str = "reasoning chain";

/// Anchor point for the reasoning chain, in milliseconds.
///
/// Placed 1ms after the first `summary` event mentioning the chain, or at
/// `now_ms` when no such event exists. `None` for an empty chain.
pub fn reasoning_anchor(
    events: &[Event],
    chain: &[ReasoningChainStep],
    now_ms: i64,
) -> Option<i64> {
    if chain.is_empty() {
        return None;
    }

    let anchor = events
        .iter()
        .find(|e| {
            e.event_type == EventType::Summary
                && e.message.to_lowercase().contains(REASONING_CHAIN_MARKER)
        })
        .map(|e| parse_ts_millis(&e.timestamp).saturating_add(1))
        .unwrap_or_else(|| {
            tracing::debug!(steps = chain.len(), "no reasoning chain summary, anchoring at now");
            now_ms
        });

    Some(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(n: i64) -> ReasoningChainStep {
        ReasoningChainStep {
            step: n,
            observation: format!("obs {n}"),
            inference: None,
            tool: None,
        }
    }

    #[test]
    fn empty_chain_has_no_anchor() {
        assert_eq!(reasoning_anchor(&[], &[], 7), None);
    }

    #[test]
    fn anchors_after_matching_summary() {
        let events = vec![
            Event::new("1970-01-01T00:00:01Z", "a", EventType::Summary, "done"),
            Event::new(
                "1970-01-01T00:00:02Z",
                "supervisor",
                EventType::Summary,
                "Built REASONING Chain with 3 steps",
            ),
            Event::new(
                "1970-01-01T00:00:03Z",
                "supervisor",
                EventType::Progress,
                "reasoning chain",
            ),
        ];
        assert_eq!(reasoning_anchor(&events, &[step(1)], 99), Some(2_001));
    }

    #[test]
    fn falls_back_to_now() {
        let events = vec![Event::new(
            "1970-01-01T00:00:01Z",
            "a",
            EventType::Progress,
            "reasoning chain",
        )];
        assert_eq!(reasoning_anchor(&events, &[step(1)], 99), Some(99));
    }

    #[test]
    fn malformed_anchor_saturates() {
        let events = vec![Event::new("??", "a", EventType::Summary, "reasoning chain")];
        assert_eq!(reasoning_anchor(&events, &[step(1)], 0), Some(i64::MAX));
    }
}
