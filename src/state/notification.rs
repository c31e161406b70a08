#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Toast severity; picks the background color and icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check",
            Self::Error => "fa-exclamation-triangle",
            Self::Info => "fa-info",
        }
    }
}

/// Where a toast is in its slide-in / slide-out lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Offscreen,
    Shown,
    Leaving,
}

impl ToastPhase {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateX(0)",
            Self::Offscreen | Self::Leaving => "translateX(400px)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

/// Single-slot toast holder. A new toast replaces the current one outright.
///
/// Phase changes and removal are keyed by id, so a timer that outlives its
/// toast finds a different id (or nothing) and does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSlot {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    /// Replace whatever is showing and return the new toast's id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            message: message.into(),
            severity,
            phase: ToastPhase::Offscreen,
        });
        id
    }

    /// Move toast `id` to `phase`. Returns `false` if it is no longer current.
    pub fn advance(&mut self, id: u64, phase: ToastPhase) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id => {
                toast.phase = phase;
                true
            }
            _ => false,
        }
    }

    /// Remove toast `id` if it is still current.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
