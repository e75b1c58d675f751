//! Input schema and validator.
//!
//! Untrusted JSON (user input files, and the model's analysis replies) is
//! checked by a generic [`Checker`] that walks a value and collects one
//! [`Violation`] per broken constraint instead of failing on the first.
//! Constraints live in the `validate_*` functions as flat declarations, not
//! nested per-field conditionals.

use serde_json::Value;
use thiserror::Error;

use crate::domain::discovery::{
    BusinessContext, DeliveryLayer, DiscoveryInput, DiscoveryResult, EiidMapping, EnrichmentLayer,
    ForWhom, InferenceLayer, InterpretationLayer, StrategicAnalysis,
};

/// One violated constraint: where and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted field path, e.g. `context.businessDescription`.
    pub path: String,
    pub message: String,
}

/// Structural input defect. Always raised before any I/O; recoverable by
/// the caller correcting the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Validation failed: {}", .violations.iter().map(|v| format!("{}: {}", v.path, v.message)).collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

const FOR_WHOM_VALUES: &[&str] = &["me", "my_company", "client"];

/// Validate an untyped blob into a [`DiscoveryInput`], applying defaults.
///
/// Pure: no I/O, no side effects.
pub fn validate_input(data: &Value) -> Result<DiscoveryInput, ValidationError> {
    let mut c = Checker::default();

    let project_name = c.required_str(data, "projectName", 1);
    let context = c.object(data, "context");
    let for_whom = context
        .and_then(|ctx| c.required_enum(ctx, "context.forWhom", FOR_WHOM_VALUES))
        .and_then(parse_for_whom);
    let company_name = context.and_then(|ctx| c.optional_str(ctx, "context.companyName"));
    let business_description =
        context.and_then(|ctx| c.required_str(ctx, "context.businessDescription", 10));
    let industry = context.and_then(|ctx| c.optional_str(ctx, "context.industry"));
    let employees = context.and_then(|ctx| c.optional_str(ctx, "context.employees"));
    let revenue = context.and_then(|ctx| c.optional_str(ctx, "context.revenue"));
    let years_in_business =
        context.and_then(|ctx| c.optional_str(ctx, "context.yearsInBusiness"));
    let problem = c.required_str(data, "problem", 10);
    let desired_outcome = c.optional_str(data, "desiredOutcome").unwrap_or_default();
    let current_process = c.optional_str_array(data, "currentProcess");
    let available_data = c.optional_str_array(data, "availableData");

    c.finish()?;

    // All lookups succeeded once finish() returned Ok.
    Ok(DiscoveryInput {
        project_name: project_name.unwrap_or_default(),
        context: BusinessContext {
            for_whom: for_whom.unwrap_or(ForWhom::Me),
            company_name,
            business_description: business_description.unwrap_or_default(),
            industry,
            employees,
            revenue,
            years_in_business,
        },
        problem: problem.unwrap_or_default(),
        desired_outcome,
        current_process,
        available_data,
    })
}

/// Validate the `strategicAnalysis` and `eiidMapping` sub-objects of an
/// analysis reply. A missing or malformed sub-object is a hard failure —
/// nothing here is defaulted.
pub fn validate_analysis_reply(
    data: &Value,
) -> Result<(StrategicAnalysis, EiidMapping), ValidationError> {
    let mut c = Checker::default();

    let sa = c.object(data, "strategicAnalysis");
    let industry_context =
        sa.and_then(|v| c.required_str(v, "strategicAnalysis.industryContext", 0));
    let value_movement = sa.and_then(|v| c.required_str(v, "strategicAnalysis.valueMovement", 0));
    let current_position =
        sa.and_then(|v| c.required_str(v, "strategicAnalysis.currentPosition", 0));
    let target_position =
        sa.and_then(|v| c.required_str(v, "strategicAnalysis.targetPosition", 0));
    let opportunities =
        sa.map(|v| c.required_str_array(v, "strategicAnalysis.opportunities"));

    let eiid = c.object(data, "eiidMapping");
    let enrichment = eiid.and_then(|v| c.object(v, "eiidMapping.enrichment"));
    let existing_data =
        enrichment.map(|v| c.required_str_array(v, "eiidMapping.enrichment.existingData"));
    let missing_data =
        enrichment.map(|v| c.required_str_array(v, "eiidMapping.enrichment.missingData"));
    let sources = enrichment.map(|v| c.required_str_array(v, "eiidMapping.enrichment.sources"));

    let inference = eiid.and_then(|v| c.object(v, "eiidMapping.inference"));
    let patterns = inference.map(|v| c.required_str_array(v, "eiidMapping.inference.patterns"));
    let predictions =
        inference.map(|v| c.required_str_array(v, "eiidMapping.inference.predictions"));
    let anomalies = inference.map(|v| c.required_str_array(v, "eiidMapping.inference.anomalies"));

    let interpretation = eiid.and_then(|v| c.object(v, "eiidMapping.interpretation"));
    let insights =
        interpretation.map(|v| c.required_str_array(v, "eiidMapping.interpretation.insights"));

    let delivery = eiid.and_then(|v| c.object(v, "eiidMapping.delivery"));
    let channels = delivery.map(|v| c.required_str_array(v, "eiidMapping.delivery.channels"));
    let triggers = delivery.map(|v| c.required_str_array(v, "eiidMapping.delivery.triggers"));

    c.finish()?;

    Ok((
        StrategicAnalysis {
            industry_context: industry_context.unwrap_or_default(),
            value_movement: value_movement.unwrap_or_default(),
            current_position: current_position.unwrap_or_default(),
            target_position: target_position.unwrap_or_default(),
            opportunities: opportunities.unwrap_or_default(),
        },
        EiidMapping {
            enrichment: EnrichmentLayer {
                existing_data: existing_data.unwrap_or_default(),
                missing_data: missing_data.unwrap_or_default(),
                sources: sources.unwrap_or_default(),
            },
            inference: InferenceLayer {
                patterns: patterns.unwrap_or_default(),
                predictions: predictions.unwrap_or_default(),
                anomalies: anomalies.unwrap_or_default(),
            },
            interpretation: InterpretationLayer {
                insights: insights.unwrap_or_default(),
            },
            delivery: DeliveryLayer {
                channels: channels.unwrap_or_default(),
                triggers: triggers.unwrap_or_default(),
            },
        },
    ))
}

/// Validate a reloaded discovery artifact (e.g. a `--discovery` file).
///
/// The input-side constraints are relaxed here — the artifact was produced
/// from an already-validated input — but structure, the analysis
/// sub-objects, and `createdAt` must all be present and well-formed.
pub fn validate_discovery_result(data: &Value) -> Result<DiscoveryResult, ValidationError> {
    let mut c = Checker::default();
    let project_name = c.required_str(data, "projectName", 0);
    let context = c.object(data, "context");
    context.and_then(|ctx| c.required_enum(ctx, "context.forWhom", FOR_WHOM_VALUES));
    context.and_then(|ctx| c.required_str(ctx, "context.businessDescription", 0));
    c.required_str(data, "problem", 0);
    c.required_str(data, "desiredOutcome", 0);
    c.required_str_array(data, "currentProcess");
    c.required_str_array(data, "availableData");
    c.required_str(data, "createdAt", 1);
    let _ = project_name;

    // Reuse the analysis checks, merging their violations.
    let analysis = validate_analysis_reply(data);
    if let Err(e) = &analysis {
        c.violations.extend(e.violations.iter().cloned());
    }
    c.finish()?;

    // Shape is verified; serde now cannot fail on the checked fields.
    serde_json::from_value(data.clone()).map_err(|e| {
        ValidationError::new(vec![Violation {
            path: "<root>".into(),
            message: e.to_string(),
        }])
    })
}

/// Machine-readable schema for the discovery input, for external tooling.
///
/// This is a static derived artifact — it mirrors the constraints in
/// [`validate_input`] but has no runtime coupling to the checker.
pub fn input_json_schema() -> Value {
    serde_json::json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "DiscoveryInput",
        "type": "object",
        "required": ["projectName", "context", "problem"],
        "properties": {
            "projectName": { "type": "string", "minLength": 1 },
            "context": {
                "type": "object",
                "required": ["forWhom", "businessDescription"],
                "properties": {
                    "forWhom": { "type": "string", "enum": FOR_WHOM_VALUES },
                    "companyName": { "type": "string" },
                    "businessDescription": { "type": "string", "minLength": 10 },
                    "industry": { "type": "string" },
                    "employees": { "type": "string" },
                    "revenue": { "type": "string" },
                    "yearsInBusiness": { "type": "string" }
                }
            },
            "problem": { "type": "string", "minLength": 10 },
            "desiredOutcome": { "type": "string" },
            "currentProcess": { "type": "array", "items": { "type": "string" } },
            "availableData": { "type": "array", "items": { "type": "string" } }
        }
    })
}

fn parse_for_whom(token: String) -> Option<ForWhom> {
    match token.as_str() {
        "me" => Some(ForWhom::Me),
        "my_company" => Some(ForWhom::MyCompany),
        "client" => Some(ForWhom::Client),
        _ => None,
    }
}

/// Violation collector. Lookup helpers return `None` on failure and record
/// why, so callers chain them without branching per field.
#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn fail(&mut self, path: &str, message: impl Into<String>) {
        self.violations.push(Violation {
            path: path.to_string(),
            message: message.into(),
        });
    }

    /// Last path segment is the JSON key; the full path is for reporting.
    fn key(path: &str) -> &str {
        path.rsplit('.').next().unwrap_or(path)
    }

    fn object<'a>(&mut self, parent: &'a Value, path: &str) -> Option<&'a Value> {
        match parent.get(Self::key(path)) {
            Some(v) if v.is_object() => Some(v),
            Some(_) => {
                self.fail(path, "must be an object");
                None
            }
            None => {
                self.fail(path, "is required");
                None
            }
        }
    }

    fn required_str(&mut self, parent: &Value, path: &str, min_len: usize) -> Option<String> {
        match parent.get(Self::key(path)) {
            Some(Value::String(s)) if s.chars().count() >= min_len => Some(s.clone()),
            Some(Value::String(_)) => {
                let message = if min_len == 1 {
                    "must not be empty".to_string()
                } else {
                    format!("must be at least {min_len} characters")
                };
                self.fail(path, message);
                None
            }
            Some(_) => {
                self.fail(path, "must be a string");
                None
            }
            None => {
                self.fail(path, "is required");
                None
            }
        }
    }

    fn required_enum(&mut self, parent: &Value, path: &str, allowed: &[&str]) -> Option<String> {
        let value = self.required_str(parent, path, 0)?;
        if allowed.contains(&value.as_str()) {
            Some(value)
        } else {
            self.fail(path, format!("must be one of: {}", allowed.join(", ")));
            None
        }
    }

    fn optional_str(&mut self, parent: &Value, path: &str) -> Option<String> {
        match parent.get(Self::key(path)) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.fail(path, "must be a string");
                None
            }
        }
    }

    fn str_array(&mut self, items: &[Value], path: &str) -> Vec<String> {
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                _ => self.fail(&format!("{path}.{i}"), "must be a string"),
            }
        }
        out
    }

    /// Missing field → required violation; present field must be an array
    /// of strings.
    fn required_str_array(&mut self, parent: &Value, path: &str) -> Vec<String> {
        match parent.get(Self::key(path)) {
            Some(Value::Array(items)) => self.str_array(items, path),
            Some(_) => {
                self.fail(path, "must be an array of strings");
                vec![]
            }
            None => {
                self.fail(path, "is required");
                vec![]
            }
        }
    }

    /// Missing field → empty default; present field must be an array of
    /// strings.
    fn optional_str_array(&mut self, parent: &Value, path: &str) -> Vec<String> {
        match parent.get(Self::key(path)) {
            None | Some(Value::Null) => vec![],
            Some(Value::Array(items)) => self.str_array(items, path),
            Some(_) => {
                self.fail(path, "must be an array of strings");
                vec![]
            }
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }
}
