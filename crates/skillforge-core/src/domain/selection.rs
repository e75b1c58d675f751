//! Selection-stage data model.
//!
//! `SelectionResult.all` must always equal the concatenation of the four
//! category buckets. The only way to build or update a result is through
//! constructors that regenerate `all` from the buckets — callers never
//! maintain `all` by hand.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Tool;

/// One suggested tool with the reason it was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSuggestion {
    pub tool: Tool,
    pub reason: String,
    pub required: bool,
}

/// The tool-selection artifact: category buckets plus their ordered union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub core: Vec<ToolSuggestion>,
    pub delivery: Vec<ToolSuggestion>,
    pub enrichment: Vec<ToolSuggestion>,
    pub testing: Vec<ToolSuggestion>,
    pub all: Vec<ToolSuggestion>,
}

impl SelectionResult {
    /// Build a result from the four buckets; `all` is derived, never passed.
    pub fn from_buckets(
        core: Vec<ToolSuggestion>,
        delivery: Vec<ToolSuggestion>,
        enrichment: Vec<ToolSuggestion>,
        testing: Vec<ToolSuggestion>,
    ) -> Self {
        let mut result = Self {
            core,
            delivery,
            enrichment,
            testing,
            all: Vec::new(),
        };
        result.rebuild_all();
        result
    }

    /// Regenerate `all` as core → delivery → enrichment → testing.
    ///
    /// Must be called after any bucket is pruned (e.g. by an interactive
    /// confirmation step) so the union stays consistent.
    pub fn rebuild_all(&mut self) {
        self.all = self
            .core
            .iter()
            .chain(&self.delivery)
            .chain(&self.enrichment)
            .chain(&self.testing)
            .cloned()
            .collect();
    }

    /// Keep only the suggestions the predicate accepts, then rebuild `all`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ToolSuggestion) -> bool,
    {
        self.core.retain(&mut keep);
        self.delivery.retain(&mut keep);
        self.enrichment.retain(&mut keep);
        self.testing.retain(&mut keep);
        self.rebuild_all();
    }

    /// Every environment variable declared by a selected tool, deduplicated
    /// and sorted.
    pub fn env_vars(&self) -> Vec<String> {
        let mut vars: Vec<String> = self
            .all
            .iter()
            .flat_map(|s| s.tool.env_vars.iter().cloned())
            .collect();
        vars.sort();
        vars.dedup();
        vars
    }

    /// Package references to install, in selection order.
    pub fn sdk_packages(&self) -> Vec<String> {
        self.all
            .iter()
            .filter_map(|s| s.tool.sdk.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ToolCategory, test_fixtures};

    fn suggest(id: &str, required: bool) -> ToolSuggestion {
        let catalog = test_fixtures::catalog();
        ToolSuggestion {
            tool: catalog.tool(id).unwrap().clone(),
            reason: format!("because {id}"),
            required,
        }
    }

    #[test]
    fn all_is_ordered_union_of_buckets() {
        let result = SelectionResult::from_buckets(
            vec![suggest("supabase", true)],
            vec![suggest("brevo", true)],
            vec![suggest("apify", false)],
            vec![suggest("playwright", true)],
        );
        let ids: Vec<_> = result.all.iter().map(|s| s.tool.id.as_str()).collect();
        assert_eq!(ids, vec!["supabase", "brevo", "apify", "playwright"]);
        assert_eq!(
            result.all.len(),
            result.core.len() + result.delivery.len() + result.enrichment.len()
                + result.testing.len()
        );
    }

    #[test]
    fn retain_rebuilds_all() {
        let mut result = SelectionResult::from_buckets(
            vec![suggest("supabase", true)],
            vec![suggest("brevo", true), suggest("baileys", false)],
            vec![],
            vec![suggest("playwright", true)],
        );
        result.retain(|s| s.required);
        assert_eq!(result.delivery.len(), 1);
        assert_eq!(result.all.len(), 3);
        assert!(result.all.iter().all(|s| s.required));
    }

    #[test]
    fn env_vars_deduped_and_sorted() {
        let result = SelectionResult::from_buckets(
            vec![suggest("supabase", true), suggest("anthropic", true)],
            vec![suggest("brevo", true), suggest("brevo", true)],
            vec![],
            vec![],
        );
        let vars = result.env_vars();
        assert_eq!(
            vars,
            vec!["ANTHROPIC_API_KEY", "BREVO_API_KEY", "SUPABASE_ANON_KEY", "SUPABASE_URL"]
        );
    }

    #[test]
    fn sdk_packages_skip_tools_without_sdk() {
        let mut no_sdk = suggest("slack", true);
        no_sdk.tool.sdk = None;
        let result = SelectionResult::from_buckets(vec![], vec![no_sdk, suggest("brevo", true)], vec![], vec![]);
        assert_eq!(result.sdk_packages(), vec!["@getbrevo/brevo"]);
    }

    #[test]
    fn serializes_with_embedded_tools() {
        let result =
            SelectionResult::from_buckets(vec![suggest("supabase", true)], vec![], vec![], vec![]);
        let json = serde_json::to_string(&result).unwrap();
        let back: SelectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.core[0].tool.category, ToolCategory::Core);
    }
}
