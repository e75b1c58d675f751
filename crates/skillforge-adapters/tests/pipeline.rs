//! Full pipeline over fakes: stubbed completion, built-in catalog,
//! in-memory filesystem.  No network, no disk.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use skillforge_adapters::{MemoryFilesystem, builtin};
use skillforge_core::application::ports::TextCompletion;
use skillforge_core::application::{DiscoveryAnalyzer, DiscoverySource, ScaffoldService, select_tools};
use skillforge_core::error::SkillforgeResult;

struct StubCompletion {
    replies: Mutex<Vec<String>>,
}

impl StubCompletion {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().rev().map(|r| r.to_string()).collect()),
        }
    }
}

#[async_trait]
impl TextCompletion for StubCompletion {
    async fn complete(&self, _prompt: &str, _max_tokens: u32) -> SkillforgeResult<String> {
        Ok(self.replies.lock().unwrap().pop().expect("reply available"))
    }
}

fn analysis_reply() -> String {
    serde_json::json!({
        "strategicAnalysis": {
            "industryContext": "local food retail",
            "valueMovement": "coordination is commoditizing",
            "currentPosition": "manual tracking",
            "targetPosition": "proactive monitoring",
            "opportunities": ["automated intake"]
        },
        "eiidMapping": {
            "enrichment": {
                "existingData": ["order spreadsheet"],
                "missingData": ["delivery status"],
                "sources": ["notion workspace"]
            },
            "inference": {
                "patterns": ["peak hours"],
                "predictions": ["late orders"],
                "anomalies": ["duplicates"]
            },
            "interpretation": { "insights": ["channel losing orders"] },
            "delivery": {
                "channels": ["whatsapp"],
                "triggers": ["order at risk"]
            }
        }
    })
    .to_string()
}

fn input_json() -> serde_json::Value {
    serde_json::json!({
        "projectName": "Order Tracker",
        "context": {
            "forWhom": "my_company",
            "businessDescription": "a small bakery chain with three locations"
        },
        "problem": "orders get lost between phone, email and walk-ins",
        "availableData": ["order spreadsheet"]
    })
}

#[tokio::test]
async fn discovery_to_scaffold_end_to_end() {
    // Discovery over the stubbed model.
    let stub = StubCompletion::new(&[&analysis_reply()]);
    let analyzer = DiscoveryAnalyzer::new(&stub);
    let discovery = analyzer
        .analyze(DiscoverySource::Json(input_json()))
        .await
        .unwrap();
    assert_eq!(discovery.project_name, "Order Tracker");

    // Selection against the shipped catalog.
    let catalog = builtin().unwrap();
    let selection = select_tools(catalog, &discovery);
    let ids: Vec<&str> = selection.all.iter().map(|s| s.tool.id.as_str()).collect();
    assert!(ids.contains(&"supabase"));
    assert!(ids.contains(&"brevo"), "whatsapp maps to brevo: {ids:?}");
    assert!(ids.contains(&"baileys"), "whatsapp offers baileys: {ids:?}");
    assert!(ids.contains(&"playwright"));

    // Scaffold into the in-memory filesystem.
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let result = service
        .scaffold(&discovery, &selection, Path::new("/projects"))
        .unwrap();

    assert_eq!(result.project_path, Path::new("/projects/order-tracker"));
    assert!(fs.read_file(&result.project_path.join("PROJECT.md")).is_some());
    assert!(fs.is_executable(&result.project_path.join(".agents/hooks/first-run-check.sh")));

    let env_example = fs.read_file(&result.project_path.join(".env.example")).unwrap();
    assert!(env_example.contains("BREVO_API_KEY"));

    let package_json = fs.read_file(&result.project_path.join("package.json")).unwrap();
    assert!(package_json.contains("@whiskeysockets/baileys"));
    assert!(package_json.contains("\"next\""));
}

#[tokio::test]
async fn stage_artifacts_round_trip_through_json() {
    let stub = StubCompletion::new(&[&analysis_reply()]);
    let analyzer = DiscoveryAnalyzer::new(&stub);
    let discovery = analyzer
        .analyze(DiscoverySource::Json(input_json()))
        .await
        .unwrap();

    // The persisted artifact reloads through the relaxed validator.
    let value = serde_json::to_value(&discovery).unwrap();
    let reloaded = skillforge_core::domain::validate_discovery_result(&value).unwrap();
    assert_eq!(reloaded, discovery);

    // The selection artifact reloads through plain serde.
    let selection = select_tools(builtin().unwrap(), &discovery);
    let json = serde_json::to_string(&selection).unwrap();
    let reloaded: skillforge_core::domain::SelectionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.all.len(), selection.all.len());
}
