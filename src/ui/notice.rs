use std::time::{Duration, Instant};

/// How long a notice stays on screen before the tick handler expires it.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    shown_at: Instant,
}

/// One-slot transient message buffer.
///
/// At most one notice is visible; a new `notify` replaces the current one
/// (last writer wins, no queue). Dismissal, replacement, or expiry are the
/// only ways a notice goes away.
#[derive(Debug, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
}

impl NoticeSlot {
    pub fn notify(&mut self, text: impl Into<String>) {
        self.current = Some(Notice {
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|notice| notice.text.as_str())
    }

    /// Drops the notice once it has been visible for `ttl`.
    pub fn expire(&mut self, ttl: Duration) {
        if self
            .current
            .as_ref()
            .is_some_and(|notice| notice.shown_at.elapsed() >= ttl)
        {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let slot = NoticeSlot::default();
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn new_notice_replaces_current() {
        let mut slot = NoticeSlot::default();
        slot.notify("A");
        slot.notify("B");
        assert_eq!(slot.current(), Some("B"));
    }

    #[test]
    fn dismiss_clears() {
        let mut slot = NoticeSlot::default();
        slot.notify("A");
        slot.dismiss();
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn expire_honors_ttl() {
        let mut slot = NoticeSlot::default();
        slot.notify("A");
        slot.expire(Duration::from_secs(3600));
        assert_eq!(slot.current(), Some("A"));
        slot.expire(Duration::ZERO);
        assert_eq!(slot.current(), None);
    }
}
