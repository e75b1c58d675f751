//! Scaffold-stage data model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One entry inside a hook group. `kind` is the runtime's hook type
/// (`command`, `prompt` or `agent`); the unused payload field stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl HookEntry {
    pub fn command(command: impl Into<String>) -> Self {
        Self {
            kind: "command".into(),
            command: Some(command.into()),
            ..Self::default()
        }
    }

    pub fn prompt(prompt: impl Into<String>, timeout: u32) -> Self {
        Self {
            kind: "prompt".into(),
            prompt: Some(prompt.into()),
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    pub fn agent(prompt: impl Into<String>, timeout: u32) -> Self {
        Self {
            kind: "agent".into(),
            prompt: Some(prompt.into()),
            timeout: Some(timeout),
            ..Self::default()
        }
    }
}

/// Hooks fired for events matching `matcher`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,
    pub hooks: Vec<HookEntry>,
}

/// Hook wiring written into the generated settings file. Keys are the
/// agent runtime's event names, hence the explicit renames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSettings {
    #[serde(rename = "SessionStart", default, skip_serializing_if = "Vec::is_empty")]
    pub session_start: Vec<HookGroup>,
    #[serde(rename = "PreToolUse", default, skip_serializing_if = "Vec::is_empty")]
    pub pre_tool_use: Vec<HookGroup>,
    #[serde(rename = "PostToolUse", default, skip_serializing_if = "Vec::is_empty")]
    pub post_tool_use: Vec<HookGroup>,
    #[serde(rename = "Stop", default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<HookGroup>,
}

/// One skill in the generated agent team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillConfig {
    pub name: String,
    pub focus: String,
    pub triggers: Vec<String>,
    pub system_prompt: String,
}

/// The agent team embedded in the generated project: skill definitions
/// plus the hook wiring that activates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTeamConfig {
    pub skills: Vec<SkillConfig>,
    pub hooks: HookSettings,
}

/// The scaffold-stage artifact: what was generated and where.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldResult {
    /// Absolute path of the generated project directory.
    pub project_path: PathBuf,
    /// Paths relative to `project_path`, in creation order.
    pub files_created: Vec<String>,
    pub packages_to_install: Vec<String>,
    /// Env vars of every selected tool, selection order, duplicates kept.
    /// The deduplicated view lives in the generated `.env.example`.
    pub env_vars: Vec<String>,
    pub agent_team: AgentTeamConfig,
}

/// Lowercase the name, map runs of non-alphanumerics to single hyphens,
/// trim hyphens at the ends. Fails when nothing survives.
pub fn slugify(name: &str) -> Result<String, DomainError> {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        return Err(DomainError::UnusableProjectName { name: name.into() });
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Bakery Order Hub").unwrap(), "bakery-order-hub");
        assert_eq!(slugify("  a__b--c  ").unwrap(), "a-b-c");
        assert_eq!(slugify("Ölwechsel 24/7!").unwrap(), "lwechsel-24-7");
    }

    #[test]
    fn slugify_rejects_names_with_no_alphanumerics() {
        assert!(matches!(
            slugify("!!!"),
            Err(DomainError::UnusableProjectName { .. })
        ));
    }

    #[test]
    fn hook_settings_serialize_with_runtime_event_names() {
        let hooks = HookSettings {
            session_start: vec![HookGroup {
                matcher: Some("startup".into()),
                hooks: vec![HookEntry::command("./.agents/hooks/first-run-check.sh")],
            }],
            ..HookSettings::default()
        };
        let json = serde_json::to_value(&hooks).unwrap();
        assert!(json.get("SessionStart").is_some());
        assert!(json.get("PostToolUse").is_none());
        assert_eq!(json["SessionStart"][0]["hooks"][0]["type"], "command");
    }

    #[test]
    fn hook_entry_constructors_fill_only_their_payload() {
        let prompt = HookEntry::prompt("check this", 15);
        assert_eq!(prompt.kind, "prompt");
        assert_eq!(prompt.timeout, Some(15));
        assert!(prompt.command.is_none());

        let json = serde_json::to_value(&prompt).unwrap();
        assert!(json.get("command").is_none());
        assert!(json.get("statusMessage").is_none());
    }

    #[test]
    fn scaffold_result_round_trips() {
        let result = ScaffoldResult {
            project_path: PathBuf::from("/tmp/out/test"),
            files_created: vec!["PROJECT.md".into(), ".env.example".into()],
            packages_to_install: vec!["@supabase/supabase-js".into()],
            env_vars: vec!["SUPABASE_URL".into(), "SUPABASE_URL".into()],
            agent_team: AgentTeamConfig {
                skills: vec![SkillConfig {
                    name: "strategy".into(),
                    focus: "alignment".into(),
                    triggers: vec!["every commit".into()],
                    system_prompt: "You review strategy.".into(),
                }],
                hooks: HookSettings::default(),
            },
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"projectPath\""));
        assert!(json.contains("\"filesCreated\""));
        let back: ScaffoldResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
