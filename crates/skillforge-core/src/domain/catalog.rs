//! Tool catalog: the static registry of available integrations.
//!
//! The registry is parsed once from a JSON data file (see the adapters
//! crate) and never mutated afterwards. The selector receives the catalog
//! by reference so it stays a pure function of its explicit inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tool category, also the bucketing key for selection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Core,
    Delivery,
    Community,
    Enrichment,
    Testing,
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Delivery => write!(f, "delivery"),
            Self::Community => write!(f, "community"),
            Self::Enrichment => write!(f, "enrichment"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// GDPR posture of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdprInfo {
    pub compliant: bool,
    pub dpa_available: bool,
    pub data_location: String,
}

/// A catalog entry. Immutable static data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub category: ToolCategory,
    pub description: String,
    /// Package reference to install, or `None` for tools with no SDK.
    pub sdk: Option<String>,
    pub env_vars: Vec<String>,
    pub gdpr: GdprInfo,
    /// Capability tags, e.g. `"email"`, `"cron"`, `"vector-search"`.
    pub provides: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Present when suggesting the tool carries a risk worth surfacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

/// A named pre-built stack: a description plus the tool ids it bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub description: String,
    pub tools: Vec<String>,
}

/// The full registry: tools plus named stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCatalog {
    pub version: String,
    /// Category id → human description.
    pub categories: BTreeMap<String, String>,
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub stacks: BTreeMap<String, Stack>,
}

impl ToolCatalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Point lookup by id. Returns `None` when absent — never panics.
    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// All tools in a category, preserving registry order.
    pub fn tools_by_category(&self, category: ToolCategory) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.category == category).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_lookup_hits_and_misses() {
        let catalog = test_fixtures::catalog();
        assert_eq!(catalog.tool("brevo").unwrap().id, "brevo");
        assert!(catalog.tool("nonexistent").is_none());
    }

    #[test]
    fn category_lookup_preserves_registry_order() {
        let catalog = test_fixtures::catalog();
        let core: Vec<_> = catalog
            .tools_by_category(ToolCategory::Core)
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(core, vec!["supabase", "inngest", "anthropic"]);
    }

    #[test]
    fn optional_default_is_false() {
        let json = r#"{
            "id": "x", "name": "X", "category": "delivery", "description": "d",
            "sdk": null, "envVars": [],
            "gdpr": {"compliant": true, "dpaAvailable": false, "dataLocation": "US"},
            "provides": []
        }"#;
        let tool: Tool = serde_json::from_str(json).unwrap();
        assert!(!tool.optional);
        assert!(tool.risk.is_none());
    }
}
