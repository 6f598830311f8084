use std::path::Path;

use triage_core::config::OutputFormat;
use triage_core::error::CliError;
use triage_core::input::load_input;
use triage_core::report::{format_flat_text, format_structured_text};
use triage_core::timeline::{build_view_at, flatten_at, LayerFilter, TimelineInput};

use super::cli::{Filter, Format, InputArgs};

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl From<Filter> for LayerFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::All => LayerFilter::All,
            Filter::Reasoning => LayerFilter::Reasoning,
            Filter::Findings => LayerFilter::Findings,
            Filter::Raw => LayerFilter::Raw,
        }
    }
}

pub fn load(args: &InputArgs) -> Result<TimelineInput, CliError> {
    let input = load_input(
        Path::new(&args.events),
        args.breadcrumbs.as_deref().map(Path::new),
        args.reasoning.as_deref().map(Path::new),
    )?;
    Ok(input)
}

fn to_json<T: serde::Serialize>(v: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(v).map_err(|e| CliError::Command(format!("serialize: {e}")))
}

pub fn render_structure(
    input: &TimelineInput,
    now_ms: i64,
    format: OutputFormat,
    filter: LayerFilter,
) -> Result<String, CliError> {
    let view = build_view_at(input, now_ms);
    match format {
        OutputFormat::Json => to_json(&view),
        OutputFormat::Text => Ok(format_structured_text(&view, filter)),
    }
}

pub fn render_flat(
    input: &TimelineInput,
    now_ms: i64,
    format: OutputFormat,
) -> Result<String, CliError> {
    let nodes = flatten_at(&input.events, &input.reasoning_chain, now_ms);
    match format {
        OutputFormat::Json => to_json(&nodes),
        OutputFormat::Text => Ok(format_flat_text(&nodes)),
    }
}

pub fn render_counts(
    input: &TimelineInput,
    now_ms: i64,
    format: OutputFormat,
) -> Result<String, CliError> {
    let counts = build_view_at(input, now_ms).counts;
    match format {
        OutputFormat::Json => to_json(&counts),
        OutputFormat::Text => Ok(format!(
            "all={} reasoning={} findings={} raw={}",
            counts.all, counts.reasoning, counts.findings, counts.raw
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_events(dir: &Path) -> String {
        let path = dir.join("events.jsonl");
        std::fs::write(
            &path,
            concat!(
                r#"{"timestamp":"2025-06-01T10:00:00Z","agent_name":"log_agent","event_type":"started","message":"scan"}"#,
                "\n",
                r#"{"timestamp":"2025-06-01T10:00:01Z","agent_name":"log_agent","event_type":"tool_call","message":"grep"}"#,
                "\n",
            ),
        )
        .unwrap();
        path.display().to_string()
    }

    #[test]
    fn counts_render_as_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let args = InputArgs {
            events: write_events(dir.path()),
            breadcrumbs: None,
            reasoning: None,
            now_ms: None,
        };
        let input = load(&args).unwrap();

        let text = render_counts(&input, 0, OutputFormat::Text).unwrap();
        assert_eq!(text, "all=1 reasoning=0 findings=0 raw=1");

        let json = render_counts(&input, 0, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["raw"], 1);
    }

    #[test]
    fn structure_json_has_phases() {
        let dir = tempfile::tempdir().unwrap();
        let args = InputArgs {
            events: write_events(dir.path()),
            breadcrumbs: None,
            reasoning: None,
            now_ms: Some(0),
        };
        let input = load(&args).unwrap();
        let json = render_structure(&input, 0, OutputFormat::Json, LayerFilter::All).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["timeline"]["phases"][0]["phase"], "initial");
        assert_eq!(v["counts"]["all"], 1);
    }

    #[test]
    fn missing_events_file_is_input_error() {
        let args = InputArgs {
            events: "/no/such/events.jsonl".to_string(),
            breadcrumbs: None,
            reasoning: None,
            now_ms: None,
        };
        assert!(matches!(load(&args), Err(CliError::Input(_))));
    }
}
