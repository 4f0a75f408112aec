use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{ExpressionReport, ExpressionStatus};

/// Which columns a terminal report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Input and canonical form.
    Canonical,
    /// Input and the licenses it references.
    Licenses,
}

/// Render a colored terminal report.
pub fn render(reports: &[ExpressionReport], view: View, quiet: bool) {
    let total = reports.len();
    let unparseable: Vec<&ExpressionReport> = reports.iter().filter(|r| !r.is_parseable()).collect();
    let normalized = reports
        .iter()
        .filter(|r| r.status == ExpressionStatus::Normalized)
        .count();

    if !quiet {
        println!(
            "\n {} v{}\n",
            "spdx-expr".bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("{}", build_table(reports, view));
    } else if !unparseable.is_empty() {
        println!("{}", build_table(unparseable.iter().copied(), view));
    }

    println!(
        "Total: {}  Normalized: {}  Unparseable: {}",
        total,
        normalized.to_string().yellow(),
        unparseable.len().to_string().red(),
    );
}

fn header(title: &str) -> Cell {
    Cell::new(title).add_attribute(Attribute::Bold)
}

fn build_table<'a>(reports: impl IntoIterator<Item = &'a ExpressionReport>, view: View) -> Table {
    let mut table = Table::new();
    let second = match view {
        View::Canonical => "Canonical",
        View::Licenses => "Licenses",
    };
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![header("Expression"), header(second), header("Status")]);

    for report in reports {
        let (status_str, status_color) = match report.status {
            ExpressionStatus::Canonical => ("✓ canonical", Color::Green),
            ExpressionStatus::Normalized => ("⚠ normalized", Color::Yellow),
            ExpressionStatus::Unparseable => ("✗ unparseable", Color::Red),
        };

        let detail = match (&report.error, view) {
            (Some(err), _) => Cell::new(err).fg(Color::Red),
            (None, View::Canonical) => Cell::new(report.canonical.as_deref().unwrap_or_default()),
            (None, View::Licenses) => Cell::new(summarize_licenses(report)),
        };

        table.add_row(vec![
            Cell::new(&report.input),
            detail,
            Cell::new(status_str)
                .fg(status_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    table
}

fn summarize_licenses(report: &ExpressionReport) -> String {
    let mut parts: Vec<String> = report
        .licenses
        .iter()
        .map(|l| {
            if l.deprecated {
                format!("{} (deprecated)", l.id)
            } else {
                l.id.clone()
            }
        })
        .collect();
    if !report.unknown.is_empty() {
        parts.push(format!("unknown: {}", report.unknown.join(", ")));
    }
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spdx::SpdxRegistry;

    #[test]
    fn test_summarize_licenses() {
        let report = ExpressionReport::build("wxWindows AND Foo AND MIT", SpdxRegistry::embedded());
        assert_eq!(
            summarize_licenses(&report),
            "MIT\nwxWindows (deprecated)\nunknown: Foo"
        );
    }

    #[test]
    fn test_table_rows() {
        let reports = vec![
            ExpressionReport::build("MIT", SpdxRegistry::embedded()),
            ExpressionReport::build("MIT AND", SpdxRegistry::embedded()),
        ];
        let table = build_table(&reports, View::Canonical).to_string();
        assert!(table.contains("canonical"));
        assert!(table.contains("unparseable"));
    }
}
