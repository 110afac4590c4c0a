#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    /// Slide-out animation running; removal follows.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    Show { message: String, severity: Severity },
    Dismiss(u64),
    Remove(u64),
}

/// Holds at most one notification. Each shown notification gets a fresh id
/// and dismiss/remove requests for any other id are ignored, so timers left
/// over from a replaced notification cannot touch the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn apply(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Show { message, severity } => {
                self.next_id += 1;
                self.current = Some(Notification {
                    id: self.next_id,
                    message,
                    severity,
                    phase: Phase::Visible,
                });
            }
            NotificationAction::Dismiss(id) => {
                if let Some(current) = self.current.as_mut().filter(|n| n.id == id) {
                    current.phase = Phase::Leaving;
                }
            }
            NotificationAction::Remove(id) => {
                if self.current.as_ref().is_some_and(|n| n.id == id) {
                    self.current = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(slot: &mut NotificationSlot, message: &str, severity: Severity) -> u64 {
        slot.apply(NotificationAction::Show {
            message: message.to_string(),
            severity,
        });
        slot.current().map(|n| n.id).unwrap()
    }

    #[test]
    fn second_show_replaces_first() {
        let mut slot = NotificationSlot::default();
        show(&mut slot, "first", Severity::Success);
        show(&mut slot, "second", Severity::Error);

        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.phase, Phase::Visible);
    }

    #[test]
    fn dismiss_then_remove() {
        let mut slot = NotificationSlot::default();
        let id = show(&mut slot, "saved", Severity::Success);
        slot.apply(NotificationAction::Dismiss(id));
        assert_eq!(slot.current().unwrap().phase, Phase::Leaving);
        slot.apply(NotificationAction::Remove(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut slot = NotificationSlot::default();
        let old = show(&mut slot, "old", Severity::Error);
        let new = show(&mut slot, "new", Severity::Success);
        assert_ne!(old, new);

        slot.apply(NotificationAction::Dismiss(old));
        slot.apply(NotificationAction::Remove(old));
        let current = slot.current().unwrap();
        assert_eq!(current.message, "new");
        assert_eq!(current.phase, Phase::Visible);
    }

    #[test]
    fn severity_styles_differ() {
        assert_ne!(Severity::Success.class(), Severity::Error.class());
        assert_ne!(Severity::Success.icon(), Severity::Error.icon());
        assert_ne!(Severity::Success.background(), Severity::Error.background());
    }
}
