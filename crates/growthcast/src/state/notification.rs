use std::time::{Duration, Instant};

/// How long a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient banner shown after a submission completes.
///
/// Dismissing only flips `open`; message and severity are kept so the last
/// outcome can still be inspected (and re-rendered while closing).
#[derive(Debug)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    shown_at: Option<Instant>,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            open: false,
            message: String::new(),
            severity: Severity::Success,
            shown_at: None,
        }
    }
}

impl Notification {
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(Severity::Success, message.into());
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(Severity::Error, message.into());
    }

    fn show(&mut self, severity: Severity, message: String) {
        self.open = true;
        self.message = message;
        self.severity = severity;
        self.shown_at = Some(Instant::now());
    }

    /// User dismissal: close without clearing message/severity.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Auto-dismiss once the banner has been visible long enough.
    pub fn tick(&mut self, now: Instant) {
        if self.open
            && let Some(shown_at) = self.shown_at
            && now.duration_since(shown_at) >= NOTIFICATION_TIMEOUT
        {
            self.open = false;
        }
    }
}
