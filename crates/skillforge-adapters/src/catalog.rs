//! Embedded tool registry.
//!
//! The catalog ships inside the binary and is parsed exactly once per
//! process. Callers hold a `&'static ToolCatalog` and pass it explicitly
//! to the selector.

use std::sync::OnceLock;

use skillforge_core::application::ApplicationError;
use skillforge_core::domain::catalog::ToolCatalog;
use skillforge_core::error::SkillforgeResult;

const CATALOG_JSON: &str = include_str!("../data/tools-catalog.json");

static CATALOG: OnceLock<Result<ToolCatalog, String>> = OnceLock::new();

/// The built-in catalog. Parse failure surfaces as `ApplicationError::Catalog`
/// on every call rather than panicking at first use.
pub fn builtin() -> SkillforgeResult<&'static ToolCatalog> {
    CATALOG
        .get_or_init(|| ToolCatalog::from_json(CATALOG_JSON).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|reason| {
            ApplicationError::Catalog {
                reason: reason.clone(),
            }
            .into()
        })
}
