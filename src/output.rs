// src/output.rs
// =============================================================================
// Prints an AuditResponse either as JSON or as a human-readable table.
// =============================================================================

use anyhow::Result;

use copy_auditor::audit::{Severity, Violation, ViolationType};
use copy_auditor::response::AuditResponse;

// Width of the text column before we truncate
const TEXT_WIDTH: usize = 60;

pub fn print_response(response: &AuditResponse, json: bool) -> Result<()> {
    if json {
        // Serialize the envelope to JSON and print
        let json_output = serde_json::to_string_pretty(response)?;
        println!("{}", json_output);
    } else {
        print_table(response);
    }
    Ok(())
}

fn print_table(response: &AuditResponse) {
    if let Some(details) = &response.details {
        println!("⚠️  {}", response.message);
        println!("   Pages scanned: {}", details.pages_scanned);
        println!("   Content found: {}", details.content_found);
        println!("   💡 {}", details.suggestion);
        return;
    }

    let Some(audit) = &response.audit else {
        println!("❌ {}", response.message);
        return;
    };

    if audit.violations.is_empty() {
        println!("✅ {}", response.message);
        return;
    }

    // Print table header
    println!("{:<10} {:<24} {:<62} {}", "SEVERITY", "ISSUE", "TEXT", "PAGE");
    println!("{}", "=".repeat(120));

    for violation in &audit.violations {
        print_violation(violation);
    }

    println!();

    // Print summary
    let summary = &audit.summary;
    println!("📊 Summary:");
    println!("   📄 Pages crawled: {}", summary.pages_crawled);
    println!(
        "   📋 Issues: {} (showing {})",
        summary.total_violations,
        audit.violations.len()
    );
    let top: Vec<&str> = summary.top_issues.iter().map(|t| issue_label(*t)).collect();
    println!("   🔝 Top issues: {}", top.join(", "));
}

fn print_violation(violation: &Violation) {
    println!(
        "{:<10} {:<24} {:<62} {}",
        severity_label(violation.severity),
        issue_label(violation.kind),
        truncate(&violation.text, TEXT_WIDTH),
        violation.page
    );
    println!("{:<35} ↳ {}", "", violation.suggestion);
}

// Truncates on a char boundary so multi-byte text never panics
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🔴 HIGH",
        Severity::Medium => "🟠 MEDIUM",
        Severity::Low => "🟡 LOW",
    }
}

fn issue_label(kind: ViolationType) -> &'static str {
    match kind {
        ViolationType::LongSentence => "Long sentence",
        ViolationType::PassiveVoice => "Passive voice",
        ViolationType::Jargon => "Jargon",
        ViolationType::SpellingInconsistency => "Spelling inconsistency",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééééééééé", 8), "ééééé...");
    }
}
