//! Input Loading Module
//!
//! Reads the three engine inputs from disk:
//! - events: JSON array or JSONL (one event per line)
//! - breadcrumbs / reasoning chain: JSON arrays
//!
//! Fetching from the live backend is not handled here; the caller owns that.

mod loader;

pub use loader::{
    load_breadcrumbs, load_events, load_input, load_reasoning_chain, parse_events_str,
};
