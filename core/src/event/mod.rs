pub mod details;
pub mod kind;
pub mod model;
pub mod time;

pub use details::{confidence, phase_label, severity, Severity};
pub use kind::EventType;
pub use model::{Breadcrumb, Event, ReasoningChainStep, SUPERVISOR_AGENT};
pub use time::{parse_ts_millis, MALFORMED_TS};
