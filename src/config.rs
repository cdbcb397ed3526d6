// src/config.rs
// =============================================================================
// Settings for one audit run.
//
// There is no config file: the CLI flags and the HTTP request body override
// individual fields of AuditConfig::default(). Every run gets its own copy,
// so nothing here is shared between runs.
// =============================================================================

use std::time::Duration;

use crate::audit::RuleSet;

/// Hard limits of the crawl. These are part of the audit contract, so they
/// are constants rather than settings.
pub const MAX_SUBPAGES: usize = 3;
pub const MIN_ANCHOR_CANDIDATES: usize = 2;
pub const PROBE_TARGET: usize = 5;
pub const DISPLAY_CAP: usize = 10;
pub const TOP_ISSUES: usize = 3;

#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Sent with every request so site owners can identify us
    pub user_agent: String,
    /// None = rely on the transport default
    pub homepage_timeout: Option<Duration>,
    pub subpage_timeout: Duration,
    pub probe_timeout: Duration,
    /// How many existence probes may be in flight at once
    pub probe_concurrency: usize,
    pub rules: RuleSet,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            homepage_timeout: None,
            subpage_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(2),
            probe_concurrency: 4,
            rules: RuleSet::standard(),
        }
    }
}

impl AuditConfig {
    /// Switches to the extended rule set (adds jargon and spelling checks)
    pub fn with_extended_rules(mut self, extended: bool) -> Self {
        self.rules = if extended {
            RuleSet::extended()
        } else {
            RuleSet::standard()
        };
        self
    }
}

pub fn default_user_agent() -> String {
    format!(
        "copy-auditor/{} (+website copy audit)",
        env!("CARGO_PKG_VERSION")
    )
}
