//! Transient toast notifications.
//!
//! ARCHITECTURE
//! ============
//! [`Notifier`] is a copyable handle provided through context. It owns the
//! single toast slot and the lifecycle timers for whatever toast is current;
//! replacing the toast drops (and so cancels) the previous toast's timers.
//! [`Toaster`] renders the slot.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::{NOTIFY_ENTER_DELAY_MS, NOTIFY_EXIT_MS, NOTIFY_VISIBLE_MS};
use crate::state::notification::{Severity, ToastPhase, ToastSlot};

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Handle for showing toasts from any component.
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<ToastSlot>,
    #[cfg(feature = "csr")]
    timers: StoredValue<Vec<Timeout>, LocalStorage>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
            #[cfg(feature = "csr")]
            timers: StoredValue::new_local(Vec::new()),
        }
    }

    /// Show `message`, discarding any toast already on screen.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let Some(id) = self.slot.try_update(|slot| slot.show(message, severity)) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let slot = self.slot;
            let timers = vec![
                Timeout::new(NOTIFY_ENTER_DELAY_MS, move || {
                    slot.update(|s| {
                        s.advance(id, ToastPhase::Shown);
                    });
                }),
                Timeout::new(NOTIFY_VISIBLE_MS, move || {
                    slot.update(|s| {
                        s.advance(id, ToastPhase::Leaving);
                    });
                }),
                Timeout::new(NOTIFY_VISIBLE_MS + NOTIFY_EXIT_MS, move || {
                    slot.update(|s| {
                        s.remove(id);
                    });
                }),
            ];
            self.timers.set_value(timers);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the current toast, if any, in the top-right corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let slot = notifier.slot;

    // Re-create the element only when a new toast replaces the old one so
    // phase changes animate through the CSS transition.
    let current_id = Memo::new(move |_| slot.with(|s| s.current.as_ref().map(|t| t.id)));

    move || {
        current_id.get().and_then(|_| {
            let toast = slot.get_untracked().current?;
            let transform = move || {
                slot.with(|s| s.current.as_ref().map_or(ToastPhase::Leaving, |t| t.phase).transform())
            };
            let class = format!("notification {}", toast.severity.class_name());
            let icon = format!("fas {}", toast.severity.icon());
            Some(view! {
                <div class=class role="status" style:background=toast.severity.background() style:transform=transform>
                    <div class="notification-content">
                        <i class=icon></i>
                        <span>{toast.message}</span>
                    </div>
                </div>
            })
        })
    }
}
