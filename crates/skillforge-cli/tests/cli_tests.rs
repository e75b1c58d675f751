//! End-to-end binary tests.  No network: the only command that talks to the
//! model API is exercised just far enough to hit the credential check.

use assert_cmd::Command;
use predicates::prelude::*;

fn skillforge() -> Command {
    Command::cargo_bin("skillforge").expect("binary builds")
}

/// A complete discovery artifact, as `skillforge discovery -o` would write it.
fn discovery_json() -> String {
    serde_json::json!({
        "projectName": "order-tracker",
        "context": {
            "forWhom": "my_company",
            "companyName": "Acme Bakery",
            "businessDescription": "a small bakery chain with three locations"
        },
        "problem": "orders get lost between phone, email and walk-ins",
        "desiredOutcome": "no order is ever silently dropped",
        "currentProcess": ["take order on paper", "type into spreadsheet"],
        "availableData": ["order spreadsheet", "notion workspace"],
        "strategicAnalysis": {
            "industryContext": "local food retail",
            "valueMovement": "coordination is commoditizing",
            "currentPosition": "manual tracking",
            "targetPosition": "proactive order monitoring",
            "opportunities": ["automated order intake"]
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
                "anomalies": ["duplicate orders"]
            },
            "interpretation": {
                "insights": ["which channel loses orders"]
            },
            "delivery": {
                "channels": ["email", "telegram"],
                "triggers": ["order at risk"]
            }
        },
        "createdAt": "2026-01-15T10:00:00Z"
    })
    .to_string()
}

// ── discovery ─────────────────────────────────────────────────────────────────

#[test]
fn discovery_schema_prints_json_schema() {
    skillforge()
        .args(["discovery", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draft-07"))
        .stdout(predicate::str::contains("projectName"))
        .stdout(predicate::str::contains("businessDescription"));
}

#[test]
fn discovery_without_input_is_a_user_error() {
    skillforge()
        .arg("discovery")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no input"));
}

#[test]
fn discovery_missing_input_file_exits_not_found() {
    skillforge()
        .args(["discovery", "-i", "/definitely/not/here.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn discovery_invalid_stdin_json_reports_details() {
    skillforge()
        .args(["discovery", "--json"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"error\""))
        .stderr(predicate::str::contains("\"details\""));
}

#[test]
fn discovery_without_api_key_is_a_configuration_error() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("input.json");
    std::fs::write(
        &input,
        serde_json::json!({
            "projectName": "x",
            "context": {
                "forWhom": "me",
                "businessDescription": "a small bakery chain"
            },
            "problem": "orders get lost between channels"
        })
        .to_string(),
    )
    .unwrap();

    skillforge()
        .env_remove("ANTHROPIC_API_KEY")
        .env("HOME", home.path())
        .current_dir(home.path())
        .args(["discovery", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("API key"));
}

// ── tools ─────────────────────────────────────────────────────────────────────

#[test]
fn tools_catalog_dumps_the_registry() {
    skillforge()
        .args(["tools", "--catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("supabase"))
        .stdout(predicate::str::contains("playwright"))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn tools_selects_for_a_discovery_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let discovery = dir.path().join("discovery.json");
    std::fs::write(&discovery, discovery_json()).unwrap();

    skillforge()
        .args(["tools", "-i"])
        .arg(&discovery)
        .assert()
        .success()
        .stdout(predicate::str::contains("CORE (always included):"))
        .stdout(predicate::str::contains("Brevo"))
        .stdout(predicate::str::contains("Telegram"));
}

#[test]
fn tools_json_output_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let discovery = dir.path().join("discovery.json");
    std::fs::write(&discovery, discovery_json()).unwrap();

    let output = skillforge()
        .args(["tools", "--json", "-i"])
        .arg(&discovery)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let selection: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(selection["core"].is_array());
    assert!(selection["all"].is_array());
}

#[test]
fn tools_rejects_an_incomplete_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let discovery = dir.path().join("discovery.json");
    std::fs::write(&discovery, r#"{"projectName": "x"}"#).unwrap();

    skillforge()
        .args(["tools", "--json", "-i"])
        .arg(&discovery)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\"error\""))
        .stderr(predicate::str::contains("createdAt"));
}

#[test]
fn tools_without_input_is_a_user_error() {
    skillforge().arg("tools").assert().failure().code(2);
}

// ── scaffold ──────────────────────────────────────────────────────────────────

#[test]
fn scaffold_creates_the_project_skeleton() {
    let dir = tempfile::tempdir().unwrap();
    let discovery = dir.path().join("discovery.json");
    std::fs::write(&discovery, discovery_json()).unwrap();

    skillforge()
        .args(["scaffold", "-d"])
        .arg(&discovery)
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();

    let project = dir.path().join("order-tracker");
    assert!(project.join("PROJECT.md").exists());
    assert!(project.join(".env.example").exists());
    assert!(project.join(".agents/settings.json").exists());
    assert!(project.join(".agents/hooks/first-run-check.sh").exists());
    assert!(project.join("package.json").exists());
    assert!(project.join("src/lib/env.ts").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(project.join(".agents/hooks/first-run-check.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    let package_json = std::fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package_json.contains("\"name\": \"order-tracker\""));
    assert!(package_json.contains("@getbrevo/brevo"));
}

#[test]
fn scaffold_json_reports_created_files() {
    let dir = tempfile::tempdir().unwrap();
    let discovery = dir.path().join("discovery.json");
    std::fs::write(&discovery, discovery_json()).unwrap();

    let output = skillforge()
        .args(["scaffold", "--json", "-d"])
        .arg(&discovery)
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let result: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(result["filesCreated"].as_array().unwrap().len() >= 20);
    assert!(result["packagesToInstall"].is_array());
}

#[test]
fn scaffold_missing_discovery_file_exits_not_found() {
    skillforge()
        .args(["scaffold", "-d", "/definitely/not/here.json"])
        .assert()
        .failure()
        .code(3);
}

// ── misc ──────────────────────────────────────────────────────────────────────

#[test]
fn completions_generate_for_bash() {
    skillforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillforge"));
}

#[test]
fn init_without_any_key_is_a_configuration_error() {
    let home = tempfile::tempdir().unwrap();
    skillforge()
        .env_remove("ANTHROPIC_API_KEY")
        .env("HOME", home.path())
        .current_dir(home.path())
        .arg("init")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn help_lists_all_commands() {
    skillforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("discovery"))
        .stdout(predicate::str::contains("tools"))
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}
