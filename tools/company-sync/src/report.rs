//! Plain-text output for the operator.

use std::fmt::Write as _;

use afritrace_registry::domain::types::{RemaCompany, SyncReport};

pub fn format_companies(companies: &[RemaCompany]) -> String {
    let mut out = String::new();
    for c in companies {
        let _ = writeln!(
            out,
            "{:<16} {:<8} {}",
            c.registration_number,
            c.certification_status,
            c.name
        );
    }
    let _ = writeln!(out, "{} compan{} fetched", companies.len(), plural(companies.len()));
    out
}

pub fn format_report(report: &SyncReport) -> String {
    let mut out = String::new();
    for error in &report.errors {
        let _ = writeln!(out, "FAIL  {error}");
    }
    let _ = writeln!(
        out,
        "synced: {}  skipped: {}  errors: {}",
        report.synced,
        report.skipped,
        report.errors.len()
    );
    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "y" } else { "ies" }
}
