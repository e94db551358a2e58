// File: crates/energy-dashboard/src/notify.rs
// Summary: Transient user notifications; failures report and never kill the app.

use std::sync::Mutex;

/// Notification severity, mirroring the toast styles of the web client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Sink for user-facing notices. Backend failures are routed here and the
/// application stays interactive; the triggering action can be retried.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, message: String) {
        self.notify(Notice {
            severity: Severity::Success,
            message,
        });
    }

    fn error(&self, message: String) {
        self.notify(Notice {
            severity: Severity::Error,
            message,
        });
    }

    fn info(&self, message: String) {
        self.notify(Notice {
            severity: Severity::Info,
            message,
        });
    }
}

/// Default notifier: routes notices to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::error!("{}", notice.message),
            Severity::Warning => tracing::warn!("{}", notice.message),
            Severity::Success | Severity::Info => tracing::info!("{}", notice.message),
        }
    }
}

/// Notifier that records notices in memory; used by tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier lock").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("notifier lock").push(notice);
    }
}
