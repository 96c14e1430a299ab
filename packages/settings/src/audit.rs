// ABOUTME: Audit logging seam for settings changes
// ABOUTME: Production implementation routes through tracing

use tracing::info;

/// Receives one informational message when settings are saved.
pub trait AuditLog: Send + Sync {
    fn info(&self, message: &str);
}

/// Default audit sink emitting structured log events on the
/// `wallet_auth` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn info(&self, message: &str) {
        info!(target: "wallet_auth", "{}", message);
    }
}
