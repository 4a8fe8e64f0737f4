// ============================================================================
// NOTIFICATION - At most one transient status message at a time
// ============================================================================

/// Severity of the ambient notification, mapped onto the toast CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyStatus {
    Ok,
    Alert,
    Error,
}

impl NotifyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyStatus::Ok => "ok",
            NotifyStatus::Alert => "alert",
            NotifyStatus::Error => "error",
        }
    }
}

/// The ambient notification cell. A new `shown` overwrites the previous
/// message and bumps the generation; the delayed auto-clear carries the
/// generation it was armed with, so a stale timer never clears a newer
/// notification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notification {
    pub status: Option<NotifyStatus>,
    pub text: Option<String>,
    pub generation: u64,
}

impl Notification {
    pub fn is_visible(&self) -> bool {
        self.status.is_some() && self.text.is_some()
    }

    /// Overwrite with a new message under the given generation.
    pub fn shown(&self, status: NotifyStatus, text: String, generation: u64) -> Self {
        Self {
            status: Some(status),
            text: Some(text),
            generation,
        }
    }

    /// Immediate manual clear.
    pub fn dismissed(&self) -> Self {
        Self {
            status: None,
            text: None,
            generation: self.generation,
        }
    }

    /// Delayed auto-clear: only applies while the armed generation is still
    /// current.
    pub fn expired(&self, generation: u64) -> Self {
        if generation == self.generation {
            self.dismissed()
        } else {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_then_expired_clears() {
        let n = Notification::default().shown(NotifyStatus::Ok, "Saved".into(), 1);
        assert!(n.is_visible());
        let n = n.expired(1);
        assert!(!n.is_visible());
    }

    #[test]
    fn stale_timer_does_not_clear_newer_notification() {
        let n = Notification::default().shown(NotifyStatus::Ok, "First".into(), 1);
        let n = n.shown(NotifyStatus::Error, "Second".into(), 2);
        // First timer fires after the overwrite
        let n = n.expired(1);
        assert!(n.is_visible());
        assert_eq!(n.text.as_deref(), Some("Second"));
        // The current timer still clears it
        let n = n.expired(2);
        assert!(!n.is_visible());
    }

    #[test]
    fn dismiss_clears_immediately() {
        let n = Notification::default().shown(NotifyStatus::Alert, "Heads up".into(), 7);
        let n = n.dismissed();
        assert!(!n.is_visible());
        // The pending timer for generation 7 is now a no-op
        assert_eq!(n.expired(7), n);
    }

    #[test]
    fn new_notification_overwrites_old() {
        let n = Notification::default().shown(NotifyStatus::Ok, "One".into(), 1);
        let n = n.shown(NotifyStatus::Alert, "Two".into(), 2);
        assert_eq!(n.status, Some(NotifyStatus::Alert));
        assert_eq!(n.text.as_deref(), Some("Two"));
    }
}
