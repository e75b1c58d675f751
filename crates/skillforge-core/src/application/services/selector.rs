//! Tool selector - maps a discovery result onto the catalog.
//!
//! A pure function of its two inputs. Total: any `DiscoveryResult` yields a
//! selection, never an error. Unknown channels and data sources are simply
//! ignored.

use tracing::debug;

use crate::domain::{
    DiscoveryResult, SelectionResult, Tool, ToolCatalog, ToolCategory, ToolSuggestion,
};

/// Select tools for a discovery result.
///
/// Core tools and Playwright are unconditional; delivery tools follow the
/// analysis' delivery channels; enrichment tools follow keyword families in
/// the data sources.
pub fn select_tools(catalog: &ToolCatalog, discovery: &DiscoveryResult) -> SelectionResult {
    let core: Vec<ToolSuggestion> = catalog
        .tools_by_category(ToolCategory::Core)
        .into_iter()
        .map(|tool| suggest(tool, "Core infrastructure for AI-native apps", true))
        .collect();

    let channels: Vec<String> = discovery
        .eiid_mapping
        .delivery
        .channels
        .iter()
        .map(|c| c.to_lowercase())
        .collect();
    let delivery = select_delivery_tools(catalog, &channels);

    let data_sources: Vec<String> = discovery
        .available_data
        .iter()
        .chain(&discovery.eiid_mapping.enrichment.sources)
        .map(|s| s.to_lowercase())
        .collect();
    let enrichment = select_enrichment_tools(catalog, &data_sources);

    let testing: Vec<ToolSuggestion> = catalog
        .tool("playwright")
        .map(|tool| {
            suggest(
                tool,
                "E2E testing, accessibility auditing, and browser-based scraping",
                true,
            )
        })
        .into_iter()
        .collect();

    debug!(
        core = core.len(),
        delivery = delivery.len(),
        enrichment = enrichment.len(),
        testing = testing.len(),
        "tools selected"
    );

    SelectionResult::from_buckets(core, delivery, enrichment, testing)
}

fn suggest(tool: &Tool, reason: &str, required: bool) -> ToolSuggestion {
    ToolSuggestion {
        tool: tool.clone(),
        reason: reason.to_string(),
        required,
    }
}

/// Channel name → tool mapping, one entry per normalized channel.
const CHANNEL_MAPPING: &[(&str, &[(&str, &str)])] = &[
    ("email", &[("brevo", "Email delivery via Brevo")]),
    ("sms", &[("brevo", "SMS delivery via Brevo")]),
    (
        "whatsapp",
        &[
            ("brevo", "WhatsApp Business API via Brevo (official)"),
            ("baileys", "WhatsApp personal via Baileys (dev/testing only)"),
        ],
    ),
    ("telegram", &[("telegram", "Telegram bot notifications")]),
    ("slack", &[("slack", "Slack channel notifications")]),
    ("discord", &[("discord", "Discord bot notifications")]),
];

fn select_delivery_tools(catalog: &ToolCatalog, channels: &[String]) -> Vec<ToolSuggestion> {
    let mut suggestions: Vec<ToolSuggestion> = Vec::new();
    let mut added: Vec<&str> = Vec::new();

    for channel in channels {
        let normalized = normalize_channel(channel);
        let Some((_, mappings)) = CHANNEL_MAPPING.iter().find(|(c, _)| *c == normalized) else {
            continue;
        };
        for (tool_id, reason) in *mappings {
            if added.contains(tool_id) {
                continue;
            }
            if let Some(tool) = catalog.tool(tool_id) {
                let required = !tool.optional && tool.risk.is_none();
                suggestions.push(suggest(tool, reason, required));
                added.push(tool_id);
            }
        }
    }

    // Channels were mentioned but none mapped: fall back to email delivery.
    if suggestions.is_empty() && !channels.is_empty() {
        if let Some(brevo) = catalog.tool("brevo") {
            suggestions.push(suggest(brevo, "Default delivery tool for email notifications", true));
        }
    }

    suggestions
}

const SCRAPING_KEYWORDS: &[&str] = &["web", "scrape", "crawl", "website", "portal", "external"];
const MEMORY_KEYWORDS: &[&str] = &["drive", "notion", "onedrive", "documents", "files"];

fn select_enrichment_tools(catalog: &ToolCatalog, data_sources: &[String]) -> Vec<ToolSuggestion> {
    let mut suggestions = Vec::new();

    let mentions = |keywords: &[&str]| {
        data_sources
            .iter()
            .any(|source| keywords.iter().any(|kw| source.contains(kw)))
    };

    if mentions(SCRAPING_KEYWORDS) {
        if let Some(apify) = catalog.tool("apify") {
            suggestions.push(suggest(apify, "Web scraping for external data sources", false));
        }
    }

    if mentions(MEMORY_KEYWORDS) {
        if let Some(supermemory) = catalog.tool("supermemory") {
            suggestions.push(suggest(
                supermemory,
                "Memory API with connectors for Google Drive, Notion, OneDrive",
                false,
            ));
        }
    }

    suggestions
}

/// Collapse free-form channel names onto the mapping keys. Checked by
/// substring, so "E-Mail alerts" and "send a WA message" both land.
fn normalize_channel(channel: &str) -> String {
    let normalized = channel.to_lowercase().trim().to_string();

    if normalized.contains("email") || normalized.contains("mail") {
        return "email".into();
    }
    if normalized.contains("whatsapp") || normalized.contains("wa") {
        return "whatsapp".into();
    }
    if normalized.contains("telegram") || normalized.contains("tg") {
        return "telegram".into();
    }
    if normalized.contains("slack") {
        return "slack".into();
    }
    if normalized.contains("discord") {
        return "discord".into();
    }
    if normalized.contains("sms") || normalized.contains("text") {
        return "sms".into();
    }

    normalized
}

/// Human rendering of a selection, one section per non-empty bucket.
pub fn format_selection(result: &SelectionResult) -> String {
    let mut lines = Vec::new();

    lines.push("CORE (always included):".to_string());
    for s in &result.core {
        lines.push(format!("  - {}: {}", s.tool.name, s.tool.description));
    }

    let mut section = |title: &str, bucket: &[ToolSuggestion], with_risk: bool| {
        if bucket.is_empty() {
            return;
        }
        lines.push(format!("\n{title}:"));
        for s in bucket {
            let note = match (&s.tool.risk, with_risk) {
                (Some(risk), true) => format!(" [{risk}]"),
                _ => String::new(),
            };
            lines.push(format!("  - {}: {}{}", s.tool.name, s.reason, note));
        }
    };
    section("DELIVERY", &result.delivery, true);
    section("ENRICHMENT", &result.enrichment, false);
    section("TESTING", &result.testing, false);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::test_fixtures::catalog;
    use crate::domain::discovery::test_fixtures::result_with_channels;

    fn ids(bucket: &[ToolSuggestion]) -> Vec<&str> {
        bucket.iter().map(|s| s.tool.id.as_str()).collect()
    }

    #[test]
    fn core_and_playwright_are_always_selected() {
        let catalog = catalog();
        let result = select_tools(&catalog, &result_with_channels(&[], &[]));
        assert_eq!(ids(&result.core), vec!["supabase", "inngest", "anthropic"]);
        assert!(result.core.iter().all(|s| s.required));
        assert_eq!(ids(&result.testing), vec!["playwright"]);
        assert!(result.delivery.is_empty());
        assert!(result.enrichment.is_empty());
    }

    #[test]
    fn channel_variants_normalize_onto_the_same_tools() {
        let catalog = catalog();
        let result = select_tools(
            &catalog,
            &result_with_channels(&["E-Mail alerts", "SMS reminders"], &[]),
        );
        // Both normalize to brevo, deduplicated by tool id.
        assert_eq!(ids(&result.delivery), vec!["brevo"]);
    }

    #[test]
    fn whatsapp_brings_official_and_risky_tool() {
        let catalog = catalog();
        let result = select_tools(&catalog, &result_with_channels(&["WhatsApp"], &[]));
        assert_eq!(ids(&result.delivery), vec!["brevo", "baileys"]);
        let baileys = &result.delivery[1];
        assert!(!baileys.required);
        assert!(baileys.tool.risk.is_some());
        assert!(result.delivery[0].required);
    }

    #[test]
    fn unmapped_channels_fall_back_to_brevo() {
        let catalog = catalog();
        let result = select_tools(&catalog, &result_with_channels(&["carrier pigeon"], &[]));
        assert_eq!(ids(&result.delivery), vec!["brevo"]);
        assert_eq!(
            result.delivery[0].reason,
            "Default delivery tool for email notifications"
        );
    }

    #[test]
    fn no_channels_means_no_fallback() {
        let catalog = catalog();
        let result = select_tools(&catalog, &result_with_channels(&[], &[]));
        assert!(result.delivery.is_empty());
    }

    #[test]
    fn enrichment_keywords_from_available_data_and_sources() {
        let catalog = catalog();
        let mut discovery = result_with_channels(&[], &["supplier portal exports"]);
        discovery.eiid_mapping.enrichment.sources = vec!["Google Drive folders".into()];
        let result = select_tools(&catalog, &discovery);
        assert_eq!(ids(&result.enrichment), vec!["apify", "supermemory"]);
        assert!(result.enrichment.iter().all(|s| !s.required));
    }

    #[test]
    fn telegram_slack_discord_map_to_their_own_tools() {
        let catalog = catalog();
        let result = select_tools(
            &catalog,
            &result_with_channels(&["telegram group", "Slack", "discord server"], &[]),
        );
        assert_eq!(ids(&result.delivery), vec!["telegram", "slack", "discord"]);
    }

    #[test]
    fn all_concatenates_buckets_in_order() {
        let catalog = catalog();
        let result = select_tools(
            &catalog,
            &result_with_channels(&["email"], &["notion workspace"]),
        );
        assert_eq!(
            ids(&result.all),
            vec!["supabase", "inngest", "anthropic", "brevo", "supermemory", "playwright"]
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = catalog();
        let discovery = result_with_channels(&["email", "whatsapp"], &["web portal"]);
        assert_eq!(
            select_tools(&catalog, &discovery),
            select_tools(&catalog, &discovery)
        );
    }

    #[test]
    fn format_selection_skips_empty_buckets_and_shows_risk() {
        let catalog = catalog();
        let rendered = format_selection(&select_tools(
            &catalog,
            &result_with_channels(&["whatsapp"], &[]),
        ));
        assert!(rendered.starts_with("CORE (always included):"));
        assert!(rendered.contains("DELIVERY:"));
        assert!(!rendered.contains("ENRICHMENT:"));
        assert!(rendered.contains("[unofficial API, account ban possible]"));
    }
}
