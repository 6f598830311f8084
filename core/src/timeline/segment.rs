use crate::event::{parse_ts_millis, phase_label, Event, EventType};

/// Name of the synthetic phase used when no `phase_change` was recorded.
pub const INITIAL_PHASE: &str = "initial";

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseBucket {
    pub phase: String,
    pub start_ts: i64,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    pub preamble: Vec<Event>,
    pub buckets: Vec<PhaseBucket>,
}

/// Split the event log at `phase_change` boundaries.
///
/// Boundary events are consumed and appear in neither the preamble nor any
/// bucket. Without any boundary the whole log becomes one `initial` bucket,
/// stamped with the first event's time (or `now_ms` for an empty log).
pub fn segment_phases(events: &[Event], now_ms: i64) -> Segmentation {
    let boundaries: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.event_type == EventType::PhaseChange)
        .map(|(i, _)| i)
        .collect();

    let Some(&first) = boundaries.first() else {
        let start_ts = events
            .first()
            .map(|e| parse_ts_millis(&e.timestamp))
            .unwrap_or(now_ms);
        return Segmentation {
            preamble: Vec::new(),
            buckets: vec![PhaseBucket {
                phase: INITIAL_PHASE.to_string(),
                start_ts,
                events: events.to_vec(),
            }],
        };
    };

    let mut buckets = Vec::with_capacity(boundaries.len());
    for (n, &at) in boundaries.iter().enumerate() {
        let end = boundaries.get(n + 1).copied().unwrap_or(events.len());
        let marker = &events[at];
        buckets.push(PhaseBucket {
            phase: phase_label(marker),
            start_ts: parse_ts_millis(&marker.timestamp),
            events: events[at + 1..end].to_vec(),
        });
    }

    Segmentation {
        preamble: events[..first].to_vec(),
        buckets,
    }
}
