//! Discovery-stage data model.
//!
//! `DiscoveryInput` is what the user supplies; `DiscoveryResult` is the
//! immutable artifact the analyzer produces from it. Field names are
//! camelCase on the wire — that is the artifact contract external callers
//! depend on.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Who the project is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForWhom {
    Me,
    MyCompany,
    Client,
}

impl ForWhom {
    /// The wire-format token, as accepted by the input schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::MyCompany => "my_company",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for ForWhom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business context around a discovery input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    pub for_whom: ForWhom,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub business_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_in_business: Option<String>,
}

/// A validated project description, ready for analysis.
///
/// Invariant: anything of this type has passed schema validation — the
/// analyzer never re-checks structural shape, only the shape of the model's
/// reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryInput {
    pub project_name: String,
    pub context: BusinessContext,
    pub problem: String,
    #[serde(default)]
    pub desired_outcome: String,
    #[serde(default)]
    pub current_process: Vec<String>,
    #[serde(default)]
    pub available_data: Vec<String>,
}

/// Strategic analysis produced by the external model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicAnalysis {
    pub industry_context: String,
    pub value_movement: String,
    pub current_position: String,
    pub target_position: String,
    pub opportunities: Vec<String>,
}

/// Enrichment layer: what data exists, what is missing, where to get it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentLayer {
    pub existing_data: Vec<String>,
    pub missing_data: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceLayer {
    pub patterns: Vec<String>,
    pub predictions: Vec<String>,
    pub anomalies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationLayer {
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLayer {
    pub channels: Vec<String>,
    pub triggers: Vec<String>,
}

/// Four-layer categorization of how the project creates value.
///
/// The lists are free-form model output; no uniqueness or ordering is
/// guaranteed or required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EiidMapping {
    pub enrichment: EnrichmentLayer,
    pub inference: InferenceLayer,
    pub interpretation: InterpretationLayer,
    pub delivery: DeliveryLayer,
}

/// The discovery-stage artifact: input fields plus the model's analysis.
///
/// Created once by the analyzer, immutable thereafter. `created_at` is
/// stamped at the moment of successful construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResult {
    pub project_name: String,
    pub context: BusinessContext,
    pub problem: String,
    pub desired_outcome: String,
    pub current_process: Vec<String>,
    pub available_data: Vec<String>,
    pub strategic_analysis: StrategicAnalysis,
    pub eiid_mapping: EiidMapping,
    pub created_at: String,
}

impl DiscoveryResult {
    /// Merge a validated input with a validated analysis, stamping the
    /// creation time now.
    pub fn from_parts(
        input: DiscoveryInput,
        strategic_analysis: StrategicAnalysis,
        eiid_mapping: EiidMapping,
    ) -> Self {
        Self {
            project_name: input.project_name,
            context: input.context,
            problem: input.problem,
            desired_outcome: input.desired_outcome,
            current_process: input.current_process,
            available_data: input.available_data,
            strategic_analysis,
            eiid_mapping,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub fn minimal_input() -> DiscoveryInput {
        DiscoveryInput {
            project_name: "test".into(),
            context: BusinessContext {
                for_whom: ForWhom::Me,
                company_name: None,
                business_description: "a small bakery chain".into(),
                industry: None,
                employees: None,
                revenue: None,
                years_in_business: None,
            },
            problem: "orders get lost between channels".into(),
            desired_outcome: String::new(),
            current_process: vec![],
            available_data: vec![],
        }
    }

    pub fn analysis() -> (StrategicAnalysis, EiidMapping) {
        (
            StrategicAnalysis {
                industry_context: "ctx".into(),
                value_movement: "vm".into(),
                current_position: "cp".into(),
                target_position: "tp".into(),
                opportunities: vec!["opp".into()],
            },
            EiidMapping {
                enrichment: EnrichmentLayer {
                    existing_data: vec![],
                    missing_data: vec![],
                    sources: vec![],
                },
                inference: InferenceLayer {
                    patterns: vec![],
                    predictions: vec![],
                    anomalies: vec![],
                },
                interpretation: InterpretationLayer { insights: vec![] },
                delivery: DeliveryLayer {
                    channels: vec![],
                    triggers: vec![],
                },
            },
        )
    }

    pub fn result_with_channels(channels: &[&str], data: &[&str]) -> DiscoveryResult {
        let (sa, mut eiid) = analysis();
        eiid.delivery.channels = channels.iter().map(|c| c.to_string()).collect();
        let mut input = minimal_input();
        input.available_data = data.iter().map(|d| d.to_string()).collect();
        DiscoveryResult::from_parts(input, sa, eiid)
    }
}
