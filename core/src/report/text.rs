use crate::event::{confidence, severity, Event, EventType, ReasoningChainStep};
use crate::timeline::{Capsule, FlatNode, LayerFilter, PhaseSection, TimelineView};

fn phase_state(p: &PhaseSection) -> &'static str {
    if p.is_current {
        "current"
    } else if p.is_complete {
        "complete"
    } else {
        "idle"
    }
}

fn event_line(ev: &Event) -> String {
    let mut line = format!("[{}] {}", ev.event_type, ev.message);
    match ev.event_type {
        EventType::Finding => {
            line.push_str(&format!(" (severity={})", severity(ev).as_str()));
        }
        EventType::Summary => {
            line.push_str(&format!(" (confidence={})", confidence(ev)));
        }
        _ => {}
    }
    line
}

fn push_capsule(out: &mut String, c: &Capsule, filter: LayerFilter) {
    let status = if c.is_complete { "done" } else { "running" };
    out.push_str(&format!(
        "  - {} [{}] events={}\n",
        c.agent,
        status,
        c.layered_len()
    ));
    for ev in c.visible_events(filter) {
        out.push_str(&format!("      {}\n", event_line(ev)));
    }
    if let Some(t) = &c.terminating_event {
        out.push_str(&format!("      {}\n", event_line(t)));
    }
    if !c.breadcrumbs.is_empty() {
        out.push_str(&format!("      breadcrumbs: {}\n", c.breadcrumbs.len()));
    }
}

fn push_chain(out: &mut String, steps: &[ReasoningChainStep]) {
    for s in steps {
        out.push_str(&format!("  {}. {}", s.step, s.observation));
        if let Some(inf) = &s.inference {
            out.push_str(&format!(" => {inf}"));
        }
        out.push('\n');
    }
}

pub fn format_structured_text(view: &TimelineView, filter: LayerFilter) -> String {
    let mut out = String::new();
    let counts = &view.counts;

    out.push_str(&format!(
        "Investigation timeline: {} phases, {} capsules\n",
        view.timeline.phases.len(),
        view.timeline.capsule_count()
    ));
    out.push_str(&format!(
        "filter: {} (all={} reasoning={} findings={} raw={})\n",
        filter.as_str(),
        counts.all,
        counts.reasoning,
        counts.findings,
        counts.raw
    ));

    if !view.timeline.preamble.is_empty() {
        out.push_str(&format!("preamble: {} events\n", view.timeline.preamble.len()));
    }

    for p in &view.timeline.phases {
        out.push_str(&format!(
            "phase {} [{}] capsules={}\n",
            p.phase,
            phase_state(p),
            p.capsules.len()
        ));
        for c in &p.capsules {
            push_capsule(&mut out, c, filter);
        }
    }

    if !view.timeline.reasoning_chain.is_empty() {
        out.push_str(&format!(
            "reasoning chain ({} steps)\n",
            view.timeline.reasoning_chain.len()
        ));
        push_chain(&mut out, &view.timeline.reasoning_chain);
    }

    out
}

pub fn format_flat_text(nodes: &[FlatNode]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Flat timeline: {} nodes\n", nodes.len()));
    for n in nodes {
        match n {
            FlatNode::Event { event, .. } => {
                out.push_str(&format!("- {}: {}\n", event.agent_name, event_line(event)));
            }
            FlatNode::ToolGroup { agent, events, .. } => {
                out.push_str(&format!("- {agent}: {} tool calls\n", events.len()));
            }
            FlatNode::ReasoningChain { steps, .. } => {
                out.push_str(&format!("- reasoning chain ({} steps)\n", steps.len()));
                push_chain(&mut out, steps);
            }
        }
    }
    out
}
