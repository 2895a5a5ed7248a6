use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

use content_store::Clock;

/// Most recent entries kept; older ones are evicted oldest-first.
pub const AUDIT_LOG_CAPACITY: usize = 1000;

/// One authentication attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub success: bool,
    pub details: String,
}

/// Bounded, process-local security audit log.
///
/// Held only in memory: lost on restart, and independent per instance in a
/// multi-instance deployment. Both are accepted limitations.
pub struct SecurityAuditLog {
    clock: Arc<dyn Clock>,
    entries: Mutex<VecDeque<AuditEntry>>,
}

impl SecurityAuditLog {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(VecDeque::with_capacity(AUDIT_LOG_CAPACITY)),
        }
    }

    pub fn record(&self, action: &str, success: bool, details: impl Into<String>) {
        let entry = AuditEntry {
            timestamp: self.clock.now(),
            action: action.to_string(),
            success,
            details: details.into(),
        };
        info!(
            action = %entry.action,
            success = entry.success,
            details = %entry.details,
            "security audit"
        );
        let mut entries = self.entries.lock();
        if entries.len() == AUDIT_LOG_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of the log, oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().iter().cloned().collect()
    }
}
