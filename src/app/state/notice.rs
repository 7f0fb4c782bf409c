use chrono::{DateTime, Local, TimeDelta};

pub const NOTICE_TTL: TimeDelta = TimeDelta::seconds(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

/// Transient, non-blocking message shown in the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn new(severity: NoticeSeverity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.timestamp >= NOTICE_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_after_ttl() {
        let notice = Notice::new(NoticeSeverity::Error, "offline");
        assert!(!notice.is_expired(notice.timestamp));
        assert!(notice.is_expired(notice.timestamp + NOTICE_TTL));
    }
}
