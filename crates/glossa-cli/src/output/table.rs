//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale code (e.g., "EN", "FR").
    pub locale_code: String,
    /// Whether this is the table's global default.
    pub is_global_default: bool,
    /// Number of phrases with a direct entry.
    pub translated: usize,
    /// Number of phrases that resolve through fallback instead.
    pub via_fallback: usize,
    /// Keys with no direct entry.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(total: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Via fallback", "Missing"]);

    for locale in coverage {
        let code = if locale.is_global_default {
            format!("{} (default)", locale.locale_code)
        } else {
            locale.locale_code.clone()
        };
        table.add_row(vec![
            code,
            format!("{}/{}", locale.translated, total),
            locale.via_fallback.to_string(),
            locale.missing.len().to_string(),
        ]);
    }

    table
}
