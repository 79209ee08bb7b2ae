use std::time::Duration;

use tokio::time::Instant;

/// How long a notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMessage {
    pub text: String,
    pub kind: NoticeKind,
}

/// A message shown to the visitor that hides itself [`NOTICE_DURATION`] after being
/// shown, whatever else happens in the meantime.
#[derive(Debug, Default)]
pub struct Notice {
    shown: Option<(NoticeMessage, Instant)>,
}

impl Notice {
    /// Replaces the current message. The countdown restarts.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind) {
        let message = NoticeMessage {
            text: text.into(),
            kind,
        };
        self.shown = Some((message, Instant::now() + NOTICE_DURATION));
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<&NoticeMessage> {
        self.shown
            .as_ref()
            .filter(|(_, hide_at)| Instant::now() < *hide_at)
            .map(|(message, _)| message)
    }

    /// Resolves once the current message is hidden. Resolves immediately if nothing is shown.
    pub async fn hidden(&self) {
        if let Some((_, hide_at)) = &self.shown {
            tokio::time::sleep_until(*hide_at).await;
        }
    }
}
