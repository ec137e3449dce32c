use std::time::{Duration, Instant};

/// How long the demo-data confirmation stays visible.
pub const DEMO_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// The inline message area under the form.
///
/// Text is rendered once, in the language active when the notice was
/// raised, and is not retranslated on a later language toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    expires_at: Option<Instant>,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            expires_at: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            expires_at: None,
        }
    }

    /// Make the notice dismiss itself `ttl` after `now`.
    pub fn expiring(mut self, now: Instant, ttl: Duration) -> Self {
        self.expires_at = Some(now + ttl);
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}
