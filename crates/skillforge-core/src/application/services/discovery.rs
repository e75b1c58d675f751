//! Discovery analyzer - turns a project description into a strategic
//! analysis.
//!
//! Four entry points (structured input, raw JSON, free text, file content)
//! funnel into one analysis path. The analyzer talks to the model through
//! the `TextCompletion` port only; parsing and validating the replies
//! happens here, in one place.

use tracing::{debug, info, instrument};

use crate::application::error::ApplicationError;
use crate::application::ports::TextCompletion;
use crate::domain::schema::{validate_analysis_reply, validate_input};
use crate::domain::{DiscoveryInput, DiscoveryResult, ForWhom};
use crate::error::SkillforgeResult;

const ANALYSIS_PROMPT: &str = r#"Generate strategic analysis for the following project.

ANALYSIS FRAMEWORKS:

1. Value Movement (Wardley for mapping, Reshuffle for AI-era value shifts)
   - What's commoditizing in this industry
   - Where value is shifting
   - New coordination possibilities
   - Falling constraints

2. EIID Framework (four layers)
   - Enrichment: existing data, missing data, sources to fill gaps
   - Inference: patterns to detect, predictions to make, anomalies to watch
   - Interpretation: insights to generate from inference results
   - Delivery: channels to reach users, triggers that determine timing

3. AI-Native Architecture (Steinberger principle: intelligence goes where the user is)
   - Push insights to users proactively
   - Deliver where users already are (email, Slack, WhatsApp, Telegram)
   - Dashboard for configuration, not for discovering problems

OUTPUT: JSON only, no markdown, no explanation.

{
  "strategicAnalysis": {
    "industryContext": "Industry dynamics and trends",
    "valueMovement": "Where value is shifting",
    "currentPosition": "Current position",
    "targetPosition": "Strategic target position",
    "opportunities": ["opportunity 1", "opportunity 2"]
  },
  "eiidMapping": {
    "enrichment": {
      "existingData": ["source 1"],
      "missingData": ["missing 1"],
      "sources": ["where to get it"]
    },
    "inference": {
      "patterns": ["pattern"],
      "predictions": ["prediction"],
      "anomalies": ["anomaly"]
    },
    "interpretation": {
      "insights": ["insight"]
    },
    "delivery": {
      "channels": ["email", "slack"],
      "triggers": ["trigger condition"]
    }
  }
}

STYLE: Direct statements. No "I recommend", no "you should". Facts and analysis only."#;

const ANALYSIS_MAX_TOKENS: u32 = 4096;
const EXTRACTION_MAX_TOKENS: u32 = 2048;
const SNIPPET_LEN: usize = 200;

/// Where a discovery run starts from.
#[derive(Debug, Clone)]
pub enum DiscoverySource {
    /// An already-validated input.
    Structured(DiscoveryInput),
    /// Untrusted JSON, validated before any model call.
    Json(serde_json::Value),
    /// Free-form text, structured by an extraction round-trip first.
    Text(String),
    /// File content, same as `Text` but the prompt names the file.
    File { name: String, content: String },
}

/// Orchestrates the discovery stage over a text-completion capability.
pub struct DiscoveryAnalyzer<'a> {
    completion: &'a dyn TextCompletion,
}

impl<'a> DiscoveryAnalyzer<'a> {
    pub fn new(completion: &'a dyn TextCompletion) -> Self {
        Self { completion }
    }

    /// Run the discovery stage for any source.
    #[instrument(skip_all, fields(source = source_kind(&source)))]
    pub async fn analyze(&self, source: DiscoverySource) -> SkillforgeResult<DiscoveryResult> {
        let input = match source {
            DiscoverySource::Structured(input) => input,
            DiscoverySource::Json(value) => validate_input(&value)?,
            DiscoverySource::Text(content) => self.extract_input(&content, None).await?,
            DiscoverySource::File { name, content } => {
                self.extract_input(&content, Some(&name)).await?
            }
        };
        self.analyze_input(input).await
    }

    /// Structured analysis: one model round-trip, validated reply.
    async fn analyze_input(&self, input: DiscoveryInput) -> SkillforgeResult<DiscoveryResult> {
        let input_text = format_input_for_analysis(&input);
        let prompt = format!("{ANALYSIS_PROMPT}\n\n---\n\nPROJECT INFORMATION:\n\n{input_text}");

        debug!(project = %input.project_name, "requesting strategic analysis");
        let reply = self.completion.complete(&prompt, ANALYSIS_MAX_TOKENS).await?;
        let cleaned = strip_markdown_fences(&reply);

        let value: serde_json::Value =
            serde_json::from_str(cleaned).map_err(|_| malformed("analysis", cleaned))?;
        let (strategic_analysis, eiid_mapping) = validate_analysis_reply(&value)?;

        info!(project = %input.project_name, "discovery analysis complete");
        Ok(DiscoveryResult::from_parts(input, strategic_analysis, eiid_mapping))
    }

    /// Extraction round-trip: ask the model to structure raw content.
    async fn extract_input(
        &self,
        content: &str,
        file_name: Option<&str>,
    ) -> SkillforgeResult<DiscoveryInput> {
        let prompt = extraction_prompt(content, file_name);

        debug!(file = ?file_name, "requesting input extraction");
        let reply = self
            .completion
            .complete(&prompt, EXTRACTION_MAX_TOKENS)
            .await?;
        let cleaned = strip_markdown_fences(&reply);

        let value: serde_json::Value =
            serde_json::from_str(cleaned).map_err(|_| malformed("extraction", cleaned))?;
        Ok(validate_input(&value)?)
    }
}

fn source_kind(source: &DiscoverySource) -> &'static str {
    match source {
        DiscoverySource::Structured(_) => "structured",
        DiscoverySource::Json(_) => "json",
        DiscoverySource::Text(_) => "text",
        DiscoverySource::File { .. } => "file",
    }
}

fn malformed(stage: &'static str, reply: &str) -> ApplicationError {
    let snippet: String = reply.chars().take(SNIPPET_LEN).collect();
    ApplicationError::MalformedReply { stage, snippet }
}

fn extraction_prompt(content: &str, file_name: Option<&str>) -> String {
    let what = match file_name {
        Some(name) => format!("file ({name})"),
        None => "text".to_string(),
    };
    format!(
        r#"Extract project information from this {what}.

Return a JSON object with these fields (infer what you can, leave empty string if not found):

{{
  "projectName": "suggested project name based on content",
  "context": {{
    "forWhom": "me" | "my_company" | "client",
    "companyName": "company name if mentioned",
    "businessDescription": "what the business does",
    "industry": "industry/sector",
    "employees": "number if mentioned",
    "revenue": "revenue if mentioned",
    "yearsInBusiness": "years if mentioned"
  }},
  "problem": "the problem being solved",
  "desiredOutcome": "what success looks like",
  "currentProcess": ["step 1", "step 2", "..."],
  "availableData": ["data source 1", "..."]
}}

Content to analyze:

{content}"#
    )
}

/// Deterministic text rendering of the input for the analysis prompt.
fn format_input_for_analysis(input: &DiscoveryInput) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Project: {}", input.project_name));
    lines.push(String::new());
    lines.push("CONTEXT:".into());

    match input.context.for_whom {
        ForWhom::Client => lines.push(format!(
            "Client: {}",
            input.context.company_name.as_deref().unwrap_or("Not specified")
        )),
        ForWhom::MyCompany => lines.push(format!(
            "Company: {}",
            input.context.company_name.as_deref().unwrap_or("Own company")
        )),
        ForWhom::Me => lines.push("For: Personal/freelance project".into()),
    }

    lines.push(format!("Business: {}", input.context.business_description));
    if let Some(industry) = &input.context.industry {
        lines.push(format!("Industry: {industry}"));
    }
    if let Some(employees) = &input.context.employees {
        lines.push(format!("Employees: {employees}"));
    }
    if let Some(revenue) = &input.context.revenue {
        lines.push(format!("Revenue: {revenue}"));
    }
    if let Some(years) = &input.context.years_in_business {
        lines.push(format!("Years in business: {years}"));
    }
    lines.push(String::new());

    lines.push("PROBLEM:".into());
    lines.push(input.problem.clone());
    lines.push(String::new());

    lines.push("DESIRED OUTCOME:".into());
    lines.push(input.desired_outcome.clone());
    lines.push(String::new());

    lines.push("CURRENT PROCESS:".into());
    for (i, step) in input.current_process.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, step));
    }
    lines.push(String::new());

    lines.push("AVAILABLE DATA:".into());
    for data in &input.available_data {
        lines.push(format!("- {data}"));
    }

    lines.join("\n")
}

/// Remove a single outer code fence (optional language tag) wrapping the
/// whole text. Anything else passes through unchanged.
pub fn strip_markdown_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the language tag on the opening fence line, if any.
    let body = match rest.split_once('\n') {
        Some((first_line, body)) if first_line.chars().all(|c| c.is_ascii_alphanumeric()) => body,
        _ => rest,
    };
    body.trim()
}
