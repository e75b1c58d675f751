//! File templates for the scaffold stage.
//!
//! Every function here is pure: discovery result + selection in, file
//! content out. The only non-determinism in the whole stage is the
//! created-on date in the project document.

use chrono::Utc;
use serde_json::json;

use crate::domain::{
    AgentTeamConfig, DiscoveryResult, ForWhom, HookEntry, HookGroup, HookSettings,
    SelectionResult, SkillConfig, ToolSuggestion,
};

/// Pinned versions for SDKs referenced by the catalog. Unknown packages
/// fall back to `^0.1.0`.
const SDK_VERSIONS: &[(&str, &str)] = &[
    ("@supabase/supabase-js", "^2.49.0"),
    ("inngest", "^3.31.0"),
    ("@anthropic-ai/sdk", "^0.76.0"),
    ("@getbrevo/brevo", "^2.2.0"),
    ("grammy", "^1.35.0"),
    ("@slack/bolt", "^4.3.0"),
    ("discord.js", "^14.17.0"),
    ("@whiskeysockets/baileys", "^6.7.0"),
    ("apify-client", "^2.11.0"),
    ("@supermemory/ai-sdk", "^0.1.0"),
    ("@playwright/test", "^1.49.0"),
];

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tool_bullets(bucket: &[ToolSuggestion], with_reason: bool) -> String {
    if bucket.is_empty() {
        return "- None selected".into();
    }
    bucket
        .iter()
        .map(|s| {
            let text = if with_reason { &s.reason } else { &s.tool.description };
            format!("- **{}**: {}", s.tool.name, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The living project document. Sections at the bottom are append targets
/// for the generated skills.
pub fn project_doc(discovery: &DiscoveryResult, tools: &SelectionResult) -> String {
    let ctx = &discovery.context;
    let mut context_lines = Vec::new();
    match ctx.for_whom {
        ForWhom::Client => context_lines.push(format!(
            "**Client:** {}",
            ctx.company_name.as_deref().unwrap_or("Not specified")
        )),
        ForWhom::MyCompany => context_lines.push(format!(
            "**Company:** {}",
            ctx.company_name.as_deref().unwrap_or("Own company")
        )),
        ForWhom::Me => context_lines.push("**For:** Personal/freelance project".into()),
    }
    context_lines.push(format!("**Business:** {}", ctx.business_description));
    if let Some(industry) = &ctx.industry {
        context_lines.push(format!("**Industry:** {industry}"));
    }
    if let Some(employees) = &ctx.employees {
        context_lines.push(format!("**Size:** {employees} employees"));
    }
    if let Some(revenue) = &ctx.revenue {
        context_lines.push(format!("**Revenue:** {revenue}"));
    }

    let sa = &discovery.strategic_analysis;
    let eiid = &discovery.eiid_mapping;
    let today = Utc::now().format("%Y-%m-%d");

    format!(
        r#"# {name}

## Context

{context}

## Strategic Analysis

### Problem

{problem}

### Desired Outcome

{outcome}

### Industry Context

{industry_context}

### Value Movement

{value_movement}

### Current Position

{current_position}

### Target Position

{target_position}

### Opportunities

{opportunities}

## AI-Native Architecture (EIID)

### Enrichment

**Existing Data:**
{existing_data}

**Missing Data:**
{missing_data}

**Sources:**
{sources}

### Inference

**Patterns to Detect:**
{patterns}

**Predictions:**
{predictions}

**Anomalies:**
{anomalies}

### Interpretation

**Insights to Generate:**
{insights}

### Delivery

**Channels:**
{channels}

**Triggers:**
{triggers}

## Tools Stack

### Core

{core_tools}

### Delivery

{delivery_tools}

### Enrichment

{enrichment_tools}

### Testing

{testing_tools}

## Architecture Decisions

<!-- strategy skill appends decisions here in format: -->
<!-- ### YYYY-MM-DD - Decision Title -->
<!-- **Context:** Why this decision was needed -->
<!-- **Decision:** What was decided -->
<!-- **Consequences:** What this means for the project -->

## Security Findings

<!-- trust skill appends findings here -->

## Design Findings

<!-- design skill appends findings here -->

## Test Report

<!-- testing skill appends results here -->

---

## Changelog

### {today} - Project Created

- Initial setup via skillforge
- EIID mapping defined
- Skills configured
"#,
        name = discovery.project_name,
        context = context_lines.join("\n"),
        problem = discovery.problem,
        outcome = discovery.desired_outcome,
        industry_context = sa.industry_context,
        value_movement = sa.value_movement,
        current_position = sa.current_position,
        target_position = sa.target_position,
        opportunities = bullets(&sa.opportunities),
        existing_data = bullets(&eiid.enrichment.existing_data),
        missing_data = bullets(&eiid.enrichment.missing_data),
        sources = bullets(&eiid.enrichment.sources),
        patterns = bullets(&eiid.inference.patterns),
        predictions = bullets(&eiid.inference.predictions),
        anomalies = bullets(&eiid.inference.anomalies),
        insights = bullets(&eiid.interpretation.insights),
        channels = bullets(&eiid.delivery.channels),
        triggers = bullets(&eiid.delivery.triggers),
        core_tools = tool_bullets(&tools.core, false),
        delivery_tools = tool_bullets(&tools.delivery, true),
        enrichment_tools = tool_bullets(&tools.enrichment, true),
        testing_tools = tool_bullets(&tools.testing, true),
    )
}

/// `.env.example`: one section per selected tool, deduplicated across
/// tools, first declarer wins.
pub fn env_example(tools: &SelectionResult) -> String {
    let mut lines = vec![
        "# Environment Variables".to_string(),
        "# Copy this file to .env.local and fill in the values".to_string(),
        String::new(),
    ];
    let mut seen: Vec<&str> = Vec::new();

    for suggestion in &tools.all {
        let fresh: Vec<&str> = suggestion
            .tool
            .env_vars
            .iter()
            .map(String::as_str)
            .filter(|v| !seen.contains(v))
            .collect();
        if fresh.is_empty() {
            continue;
        }
        lines.push(format!("# {}", suggestion.tool.name));
        for var in fresh {
            lines.push(format!("{var}="));
            seen.push(var);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

const ROLES: [&str; 5] = ["strategy", "design", "trust", "efficiency", "testing"];

fn role_prompt(role: &str, discovery: &DiscoveryResult) -> String {
    let base = match role {
        "strategy" => format!(
            "You keep this project aligned with its strategic goals.\n\n\
             The problem: {problem}\n\
             The desired outcome: {outcome}\n\n\
             Read PROJECT.md before every review. Check changes against the \
             EIID mapping (Enrichment, Inference, Interpretation, Delivery). \
             Flag scope creep. Suggest opportunities the mapping misses. \
             Append decisions to the Architecture Decisions section of \
             PROJECT.md; that section is append-only.",
            problem = discovery.problem,
            outcome = discovery.desired_outcome
        ),
        "design" => "You own the design system. Components come from the \
             component library first; no custom CSS classes, no inline \
             arbitrary values, all colors from the design tokens in \
             src/app/globals.css. Check accessibility: contrast, focus \
             states, alt text, form labels. Append findings to the Design \
             Findings section of PROJECT.md. You advise, you do not block."
            .to_string(),
        "trust" => format!(
            "You audit security and compliance. Scan for hardcoded secrets, \
             SQL injection, XSS, auth bypass, and PII in logs or URLs. Check \
             GDPR obligations for the data this project handles: {data}. \
             You may block a change for a clear violation. Append findings \
             to the Security Findings section of PROJECT.md.",
            data = if discovery.available_data.is_empty() {
                "not specified".to_string()
            } else {
                discovery.available_data.join(", ")
            }
        ),
        "efficiency" => "You watch performance and costs: bundle size, Core \
             Web Vitals, N+1 queries, and API spend per LLM call site. \
             Suggest caching where calls repeat. You advise, you do not \
             block."
            .to_string(),
        _ => "You verify behavior with tests. Run the unit suite and the \
             E2E suite when present. Append results to the Test Report \
             section of PROJECT.md. If tests fail, the task is not done."
            .to_string(),
    };
    base
}

fn role_focus(role: &str) -> &'static str {
    match role {
        "strategy" => "EIID alignment, PROJECT.md sync, architectural decisions",
        "design" => "components, design tokens, brand voice, accessibility",
        "trust" => "OWASP top 10, auth, GDPR, data handling, input validation",
        "efficiency" => "bundle size, Core Web Vitals, N+1 queries, API costs",
        _ => "unit tests, E2E, accessibility audits, regression prevention",
    }
}

fn role_triggers(role: &str) -> Vec<String> {
    let triggers: &[&str] = match role {
        "strategy" => &["every commit", "new features", "weekly review"],
        "design" => &["changes in components/", "changes in app/**/page.tsx"],
        "trust" => &["pre-commit on api/", "pre-commit on auth/", "pre-commit on lib/db/"],
        "efficiency" => &["pre-commit", "weekly cost review"],
        _ => &["pre-stop", "task-completed"],
    };
    triggers.iter().map(|t| t.to_string()).collect()
}

fn role_description(role: &str) -> &'static str {
    match role {
        "strategy" => {
            "Use proactively after commits to check EIID alignment and suggest new opportunities"
        }
        "design" => "Use proactively for UI setup, design tokens, and design reviews",
        "trust" => "Use proactively to audit security and compliance",
        "efficiency" => "Use proactively to check performance and costs",
        _ => "Use proactively to verify behavior with tests",
    }
}

/// The agent team: five skills plus the hook wiring. Prompts carry a
/// `[projectName]` placeholder substituted when the settings file is
/// rendered.
pub fn agent_team(discovery: &DiscoveryResult) -> AgentTeamConfig {
    let skills = ROLES
        .iter()
        .map(|role| SkillConfig {
            name: role.to_string(),
            focus: role_focus(role).to_string(),
            triggers: role_triggers(role),
            system_prompt: role_prompt(role, discovery),
        })
        .collect();

    let hooks = HookSettings {
        session_start: vec![HookGroup {
            matcher: Some("startup".into()),
            hooks: vec![HookEntry {
                status_message: Some("Checking project setup...".into()),
                ..HookEntry::command("\"$AGENT_PROJECT_DIR\"/.agents/hooks/first-run-check.sh")
            }],
        }],
        pre_tool_use: vec![HookGroup {
            matcher: Some("Bash".into()),
            hooks: vec![HookEntry::prompt(
                "Security check for [projectName]. Check if this command is safe: \
                 $ARGUMENTS. Look for: hardcoded secrets, rm -rf, SQL injection via \
                 shell, exposure of sensitive data. Respond {\"ok\": true} if safe, \
                 {\"ok\": false, \"reason\": \"...\"} if dangerous.",
                15,
            )],
        }],
        post_tool_use: vec![HookGroup {
            matcher: Some("Write|Edit".into()),
            hooks: vec![HookEntry::prompt(
                "Security gate for [projectName]. Check this file change for: \
                 hardcoded API keys or secrets, SQL injection, XSS, auth bypass, PII \
                 in logs or URLs. $ARGUMENTS. Respond {\"ok\": true} if safe, \
                 {\"ok\": false, \"reason\": \"...\"} if a blocking issue is found. \
                 Only block on clear violations, not potential issues.",
                15,
            )],
        }],
        stop: vec![HookGroup {
            matcher: None,
            hooks: vec![HookEntry::agent(
                "Test verification for [projectName]. Run `npm test`. If Playwright \
                 tests exist in tests/e2e/, run `npx playwright test` too. Append \
                 results to the \"## Test Report\" section of PROJECT.md. Gate: if \
                 tests fail, respond {\"ok\": false, \"reason\": \"X tests failing\"}. \
                 If tests pass, respond {\"ok\": true}.",
                60,
            )],
        }],
    };

    AgentTeamConfig { skills, hooks }
}

/// Render the settings file, substituting `[projectName]` in every prompt.
pub fn settings_json(team: &AgentTeamConfig, project_name: &str) -> String {
    let mut hooks = team.hooks.clone();
    for group in hooks
        .session_start
        .iter_mut()
        .chain(&mut hooks.pre_tool_use)
        .chain(&mut hooks.post_tool_use)
        .chain(&mut hooks.stop)
    {
        for entry in &mut group.hooks {
            if let Some(prompt) = &mut entry.prompt {
                *prompt = prompt.replace("[projectName]", project_name);
            }
        }
    }

    let settings = json!({
        "hooks": hooks,
        "permissions": {
            "allow": [
                "Bash(npm test)",
                "Bash(npx playwright test*)",
                "Bash(npx tsc --noEmit)",
                "Read(*)",
                "Glob(*)",
                "Grep(*)"
            ]
        }
    });
    // json! never produces a non-serializable value here.
    serde_json::to_string_pretty(&settings).unwrap_or_default()
}

/// Five role prompt files under `.agents/agents/`, frontmatter included.
pub fn agent_files(discovery: &DiscoveryResult) -> Vec<(String, String)> {
    ROLES
        .iter()
        .map(|role| {
            let content = format!(
                "---\nname: {role}\ndescription: {description}\ntools: Read, Grep, Glob, Bash\n---\n\n\
                 # {role}\n\n{description}\n\n{prompt}\n",
                description = role_description(role),
                prompt = role_prompt(role, discovery),
            );
            (format!(".agents/agents/{role}.md"), content)
        })
        .collect()
}

fn skill_body(name: &str, discovery: &DiscoveryResult) -> String {
    match name {
        "strategy-init" => format!(
            "Validate the EIID mapping and set project priorities.\n\n\
             1. Read PROJECT.md and check that each EIID layer has concrete, actionable items\n\
             2. Ask the user which layer to focus on first\n\
             3. Write the first decision to the Architecture Decisions section\n\n\
             **Problem:** {problem}\n**Desired Outcome:** {outcome}\n",
            problem = discovery.problem,
            outcome = discovery.desired_outcome
        ),
        "strategy-review" => format!(
            "Full EIID alignment analysis plus opportunity scan.\n\n\
             1. Read PROJECT.md for the current strategic context\n\
             2. Scan the source for EIID alignment and scope creep\n\
             3. Suggest opportunities per layer: data not yet connected, patterns not yet \
             analyzed, insights not yet surfaced, channels not yet reached\n\n\
             **Opportunities (from discovery):** {opportunities}\n\n\
             Append findings to the Architecture Decisions section. Each finding gets a \
             **Type** (alignment-check | opportunity | drift-warning) and a **Layer**.\n",
            opportunities = discovery.strategic_analysis.opportunities.join(", ")
        ),
        "design-init" => "Set up the design system.\n\n\
             1. Ask for brand assets: color palette in HSL, font family, logo path\n\
             2. Define design tokens as CSS custom properties in src/app/globals.css, \
             light and dark variants, no hardcoded hex or rgb\n\
             3. Configure tailwind.config.ts to extend from the token variables\n\
             4. Install the base component set\n\n\
             Hard rules from day one: library components first, no custom CSS classes, \
             no inline arbitrary values, all colors from tokens.\n"
            .into(),
        "design-review" => "Audit the UI against the hard rules, accessibility, and \
             responsive design.\n\n\
             1. Scan component files for custom CSS classes, hardcoded colors, and \
             arbitrary value syntax in className strings\n\
             2. Check WCAG 2.1 AA: contrast ratios, focus states, alt text, form labels, \
             touch targets\n\
             3. Verify mobile layout down to 320px\n\n\
             Report per issue: file:line, rule violated, fix. Append to the Design \
             Findings section of PROJECT.md.\n"
            .into(),
        "trust-init" => format!(
            "Set up security foundations.\n\n\
             1. Ask about auth method, protected routes, and roles\n\
             2. Enable row-level security on all tables with initial policies\n\
             3. Record data sensitivity: PII fields, retention, GDPR consent/export/deletion\n\
             4. Configure CORS and env var validation at startup\n\n\
             **Industry:** {industry}\n**Data Sources:** {data}\n",
            industry = discovery.context.industry.as_deref().unwrap_or("Not specified"),
            data = if discovery.available_data.is_empty() {
                "Not specified".to_string()
            } else {
                discovery.available_data.join(", ")
            }
        ),
        "trust-audit" => "Full OWASP Top 10 and GDPR audit.\n\n\
             1. Access control, injection, XSS, SSRF, misconfiguration across all API routes\n\
             2. Secrets scan: hardcoded keys, .env files in git, git history\n\
             3. GDPR: consent, export, deletion, data minimization\n\
             4. Run `npm audit` for dependency vulnerabilities\n\n\
             Report with severity levels (BLOCK | HIGH | MEDIUM | LOW) to the Security \
             Findings section of PROJECT.md.\n"
            .into(),
        "efficiency-init" => "Set performance budgets.\n\n\
             1. Ask for targets: LCP (< 2.5s default), bundle size (< 200KB gzipped), \
             API response time (< 500ms)\n\
             2. Configure bundle analysis and an `analyze` script\n\
             3. Add Web Vitals reporting to the root layout\n\n\
             Document the budget in PROJECT.md.\n"
            .into(),
        "efficiency-review" => "Efficiency audit.\n\n\
             1. Build and check output sizes; name the heaviest dependencies\n\
             2. Core Web Vitals: LCP, CLS, main-thread blocking\n\
             3. Search for N+1 query patterns and missing batch operations\n\
             4. Count LLM call sites and estimate cost; flag caching opportunities\n\n\
             Report metrics and recommendations to PROJECT.md.\n"
            .into(),
        "testing-init" => "Set up the testing infrastructure.\n\n\
             1. Configure the unit test runner and tests/unit/, tests/e2e/ directories\n\
             2. Install the E2E browser runner and verify its config\n\
             3. Ask which user flows must never break\n\
             4. Write a unit smoke test and an E2E smoke test for the home page\n\n\
             Document the critical scenarios in PROJECT.md.\n"
            .into(),
        _ => "Run the complete test suite and report results.\n\n\
             1. `npm test -- --run` for unit tests\n\
             2. `npx playwright test` when E2E tests exist\n\
             3. `npx tsc --noEmit` for type checking\n\n\
             Report passed/failed/skipped with file paths for failures to the Test \
             Report section of PROJECT.md. If any test fails, do not mark the task \
             complete.\n"
            .into(),
    }
}

fn skill_description(name: &str) -> &'static str {
    match name {
        "strategy-init" => "Validate EIID mapping, set priorities, write first decision",
        "strategy-review" => "Full EIID alignment analysis + proactive opportunity scan",
        "design-init" => "Configure brand, design tokens, and component library",
        "design-review" => "Audit UI, hard rule violations, a11y, responsive",
        "trust-init" => "Configure auth flow, RLS policies, CORS, data sensitivity",
        "trust-audit" => "Full OWASP Top 10 + GDPR compliance checklist",
        "efficiency-init" => "Set performance budgets and bundle analysis",
        "efficiency-review" => "Bundle size, Core Web Vitals, N+1 queries, cost report",
        "testing-init" => "Set up test runners, define critical scenarios, first smoke test",
        _ => "Run full test suite and report failures",
    }
}

const SKILLS: [&str; 10] = [
    "strategy-init",
    "strategy-review",
    "design-init",
    "design-review",
    "trust-init",
    "trust-audit",
    "efficiency-init",
    "efficiency-review",
    "testing-init",
    "testing-verify",
];

/// Ten skill command files under `.agents/skills/`.
pub fn skill_files(discovery: &DiscoveryResult) -> Vec<(String, String)> {
    SKILLS
        .iter()
        .map(|name| {
            let content = format!(
                "---\nname: {name}\ndescription: {description}\n---\n\n# /{name}\n\n{body}",
                description = skill_description(name),
                body = skill_body(name, discovery),
            );
            (format!(".agents/skills/{name}.md"), content)
        })
        .collect()
}

/// First-run detection hook. Emits additional context when setup steps
/// are missing.
pub fn first_run_script() -> &'static str {
    r#"#!/bin/bash
# First-run detection for generated projects.
# Checks whether the project has been set up and suggests init skills.

MISSING=()

if [ ! -d "node_modules" ]; then
  MISSING+=("node_modules not found - run: npm install")
fi

if [ ! -f ".env.local" ]; then
  MISSING+=(".env.local not found - run: cp .env.example .env.local")
fi

if [ ! -d "tests" ] && [ ! -d "__tests__" ]; then
  MISSING+=("No tests found - run: /testing-init")
fi

if [ ${#MISSING[@]} -gt 0 ]; then
  echo "{"
  echo "  \"additionalContext\": \"This project needs initial setup. Suggest the user run these skills:\\n"
  for item in "${MISSING[@]}"; do
    echo "- $item\\n"
  done
  echo "Available init skills: /strategy-init, /design-init, /trust-init, /efficiency-init, /testing-init\""
  echo "}"
fi
"#
}

/// `package.json` for the generated project: base web-app dependencies
/// plus the selected SDKs at pinned versions, sorted by name.
pub fn package_json(slug: &str, packages: &[String]) -> String {
    let mut dependencies: Vec<(String, String)> = vec![
        ("next".into(), "^15.3.0".into()),
        ("react".into(), "^19.1.0".into()),
        ("react-dom".into(), "^19.1.0".into()),
        ("clsx".into(), "^2.1.0".into()),
        ("tailwind-merge".into(), "^2.6.0".into()),
    ];
    for pkg in packages {
        let version = SDK_VERSIONS
            .iter()
            .find(|(name, _)| name == pkg)
            .map_or("^0.1.0", |(_, v)| v);
        dependencies.push((pkg.clone(), version.to_string()));
    }
    dependencies.sort();
    dependencies.dedup();

    let deps: serde_json::Map<String, serde_json::Value> = dependencies
        .into_iter()
        .map(|(k, v)| (k, serde_json::Value::String(v)))
        .collect();

    let manifest = json!({
        "name": slug,
        "version": "0.1.0",
        "private": true,
        "scripts": {
            "dev": "next dev",
            "build": "next build",
            "start": "next start",
            "lint": "next lint",
            "test": "vitest run",
            "test:watch": "vitest",
            "test:e2e": "npx playwright test"
        },
        "dependencies": deps,
        "devDependencies": {
            "@playwright/test": "^1.49.0",
            "@types/node": "^22.15.0",
            "@types/react": "^19.1.0",
            "@types/react-dom": "^19.1.0",
            "autoprefixer": "^10.4.0",
            "postcss": "^8.5.0",
            "tailwindcss": "^3.4.0",
            "typescript": "^5.8.0",
            "vitest": "^4.0.0"
        }
    });
    serde_json::to_string_pretty(&manifest).unwrap_or_default()
}

/// Minimal web-app stubs: root layout, home page showing the four EIID
/// layers, and an env accessor.
pub fn app_stubs(discovery: &DiscoveryResult, tools: &SelectionResult) -> Vec<(String, String)> {
    let layout = format!(
        r#"import type {{ Metadata }} from 'next';
import './globals.css';

export const metadata: Metadata = {{
  title: '{name}',
  description: '{outcome}',
}};

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode;
}}) {{
  return (
    <html lang="en">
      <body className="min-h-screen bg-background font-sans antialiased">{{children}}</body>
    </html>
  );
}}
"#,
        name = discovery.project_name,
        outcome = discovery.desired_outcome,
    );

    let eiid = &discovery.eiid_mapping;
    let page = format!(
        r#"export default function Home() {{
  return (
    <main className="min-h-screen p-8">
      <h1 className="text-3xl font-bold mb-4">{name}</h1>
      <p className="text-muted-foreground mb-8">{outcome}</p>

      <div className="grid gap-4 md:grid-cols-4">
        <div className="rounded-lg border bg-card p-4 text-card-foreground">
          <h2 className="font-semibold mb-2">Enrichment</h2>
          <p className="text-sm text-muted-foreground">{enrichment}</p>
        </div>
        <div className="rounded-lg border bg-card p-4 text-card-foreground">
          <h2 className="font-semibold mb-2">Inference</h2>
          <p className="text-sm text-muted-foreground">{inference}</p>
        </div>
        <div className="rounded-lg border bg-card p-4 text-card-foreground">
          <h2 className="font-semibold mb-2">Interpretation</h2>
          <p className="text-sm text-muted-foreground">{interpretation}</p>
        </div>
        <div className="rounded-lg border bg-card p-4 text-card-foreground">
          <h2 className="font-semibold mb-2">Delivery</h2>
          <p className="text-sm text-muted-foreground">{delivery}</p>
        </div>
      </div>
    </main>
  );
}}
"#,
        name = discovery.project_name,
        outcome = discovery.desired_outcome,
        enrichment = preview(&eiid.enrichment.existing_data),
        inference = preview(&eiid.inference.patterns),
        interpretation = preview(&eiid.interpretation.insights),
        delivery = eiid.delivery.channels.join(", "),
    );

    let env_checks = tools
        .env_vars()
        .iter()
        .map(|var| format!("  {var}: required('{var}'),"))
        .collect::<Vec<_>>()
        .join("\n");
    let env = format!(
        r#"// Typed access to required environment variables.
// Fails fast at startup instead of deep inside a request handler.

function required(name: string): string {{
  const value = process.env[name];
  if (!value) {{
    throw new Error(`Missing environment variable: ${{name}}`);
  }}
  return value;
}}

export const env = {{
{env_checks}
}};
"#
    );

    vec![
        ("src/app/layout.tsx".to_string(), layout),
        ("src/app/page.tsx".to_string(), page),
        ("src/lib/env.ts".to_string(), env),
    ]
}

fn preview(items: &[String]) -> String {
    items.iter().take(2).cloned().collect::<Vec<_>>().join(", ")
}

pub fn gitignore() -> &'static str {
    "node_modules/\n.next/\n.env\n.env.local\ndist/\n.DS_Store\n"
}
