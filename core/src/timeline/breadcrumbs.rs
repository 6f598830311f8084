use std::collections::HashMap;

use crate::event::Breadcrumb;

/// Breadcrumbs grouped by agent, in their original order.
///
/// Evidence trails are agent-scoped: every capsule of an agent receives the
/// full list, whatever phase it sits in.
#[derive(Debug, Default)]
pub struct BreadcrumbIndex<'a> {
    by_agent: HashMap<&'a str, Vec<&'a Breadcrumb>>,
}

impl<'a> BreadcrumbIndex<'a> {
    pub fn build(breadcrumbs: &'a [Breadcrumb]) -> Self {
        let mut by_agent: HashMap<&'a str, Vec<&'a Breadcrumb>> = HashMap::new();
        for b in breadcrumbs {
            by_agent.entry(b.agent_name.as_str()).or_default().push(b);
        }
        Self { by_agent }
    }

    pub fn for_agent(&self, agent: &str) -> Vec<Breadcrumb> {
        self.by_agent
            .get(agent)
            .map(|v| v.iter().map(|b| (*b).clone()).collect())
            .unwrap_or_default()
    }

    pub fn agent_count(&self) -> usize {
        self.by_agent.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumb(agent: &str, action: &str) -> Breadcrumb {
        Breadcrumb {
            agent_name: agent.to_string(),
            timestamp: "2025-01-01T00:00:00Z".to_string(),
            action: action.to_string(),
            detail: String::new(),
            source_type: Some("log".to_string()),
            source_reference: None,
        }
    }

    #[test]
    fn groups_without_reordering() {
        let crumbs = vec![
            crumb("log_agent", "grep"),
            crumb("metrics_agent", "query"),
            crumb("log_agent", "tail"),
        ];
        let idx = BreadcrumbIndex::build(&crumbs);
        assert_eq!(idx.agent_count(), 2);
        let actions: Vec<String> = idx
            .for_agent("log_agent")
            .into_iter()
            .map(|b| b.action)
            .collect();
        assert_eq!(actions, vec!["grep", "tail"]);
        assert!(idx.for_agent("code_agent").is_empty());
    }
}
