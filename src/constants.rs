//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a sentinel or timeout, only edit this file.

/// Sentinel `source` when a log line has no fourth token
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Sentinel `service` when the source carries no service prefix
pub const DEFAULT_SERVICE: &str = "System";

/// Sentinel host name for findings when no matching record has a source
pub const UNKNOWN_HOST: &str = "Unknown";

/// Default deadline for one analysis pass (seconds)
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Forensic Core";

/// Bundled sample batch for first-run display and fixtures
pub const SAMPLE_LOGS: &str = "\
Feb 14 10:20:01 web-server-01 sshd[2341]: Failed password for root from 192.168.1.50 port 45231 ssh2
Feb 14 10:20:05 web-server-01 sshd[2341]: Failed password for root from 192.168.1.50 port 45235 ssh2
Feb 14 10:20:10 web-server-01 sshd[2341]: Failed password for root from 192.168.1.50 port 45239 ssh2
Feb 14 10:21:45 firewall-edge filter[450]: INBOUND BLOCK TCP 10.0.0.5:443 -> 192.168.1.2:80
Feb 14 10:25:12 database-prod kernel: [12345.678] Out of memory: Kill process 890 (mysqld)
Feb 14 10:30:00 app-gateway nginx: 192.168.1.100 - - [14/Feb/2025:10:30:00 +0000] \"GET /admin/config HTTP/1.1\" 403 562 \"-\" \"Mozilla/5.0\"
Feb 14 10:32:45 workstation-12 security[992]: Unauthorized file access attempt at C:\\Users\\Public\\Documents\\secret.pdf";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the analysis deadline from environment or use default
pub fn get_analysis_timeout_secs() -> u64 {
    std::env::var("FORENSIC_ANALYSIS_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ANALYSIS_TIMEOUT_SECS)
}
