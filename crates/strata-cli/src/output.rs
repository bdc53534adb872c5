// Rust guideline compliant 2026-10-19

//! Output formatting module for the Strata CLI.
//!
//! This module renders leveled catalogs and run summaries as JSON, tables
//! or plain text.

use serde_json::json;
use strata_core::pipeline::RunSummary;
use strata_core::ModuleRecord;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for rendering Strata results in different formats.
pub trait OutputFormatter {
    /// Formats the modules of a catalog, in the given order.
    fn format_catalog(&self, modules: &[ModuleRecord]) -> String;

    /// Formats the outcome of a level computation.
    fn format_summary(&self, summary: &RunSummary) -> String;
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_catalog(&self, modules: &[ModuleRecord]) -> String {
        let output = json!({
            "modules": modules,
            "total": modules.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize catalog" }).to_string())
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let output = json!({
            "modules": summary.catalog.len(),
            "max_level": summary.report.max_level(),
            "waves": summary.report.waves,
            "pruned": summary.report.pruned,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize summary" }).to_string())
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_catalog(&self, modules: &[ModuleRecord]) -> String {
        if modules.is_empty() {
            return "No modules found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Level", "Module", "Version", "Release", "Dependents"]);

        for module in modules {
            let version = if module.version.is_empty() {
                "-"
            } else {
                module.version.as_str()
            };
            builder.push_record(vec![
                module.level.to_string(),
                module.name.clone(),
                version.to_string(),
                if module.release { "yes" } else { "no" }.to_string(),
                module.dependents.join(", "),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let report = &summary.report;
        let mut output = String::new();

        output.push_str(&format!("Modules:     {}\n", summary.catalog.len()));
        output.push_str(&format!("Max level:   {}\n", report.max_level()));
        output.push_str(&format!("Waves:       {}\n", report.waves));
        output.push_str(&format!("Pruned:      {}\n", report.pruned.len()));

        for relation in &report.pruned {
            output.push_str(&format!(
                "  - {} -> {} (via {})\n",
                relation.source, relation.destination, relation.intermediate
            ));
        }

        output
    }
}

/// Plain text output formatter.
///
/// One line per module: level, name, version.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_catalog(&self, modules: &[ModuleRecord]) -> String {
        let mut output = String::new();
        for module in modules {
            output.push_str(&format!("{} {} {}\n", module.level, module.name, module.version));
        }
        output
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        format!(
            "{} {} {} {}\n",
            summary.catalog.len(),
            summary.report.max_level(),
            summary.report.waves,
            summary.report.pruned.len()
        )
    }
}

/// Factory function to create an appropriate formatter.
///
/// Unknown formats fall back to the table formatter.
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}
