use super::*;

#[test]
fn slot_starts_empty() {
    assert!(ToastSlot::default().current.is_none());
}

#[test]
fn show_creates_offscreen_toast() {
    let mut slot = ToastSlot::default();
    let id = slot.show("Hello", Severity::Info);
    let toast = slot.current.as_ref().unwrap();
    assert_eq!(toast.id, id);
    assert_eq!(toast.message, "Hello");
    assert_eq!(toast.phase, ToastPhase::Offscreen);
}

#[test]
fn second_show_leaves_only_latest() {
    let mut slot = ToastSlot::default();
    slot.show("first", Severity::Success);
    slot.show("second", Severity::Error);
    let toast = slot.current.as_ref().unwrap();
    assert_eq!(toast.message, "second");
    assert_eq!(toast.severity, Severity::Error);
}

#[test]
fn full_lifecycle_ends_empty() {
    let mut slot = ToastSlot::default();
    let id = slot.show("msg", Severity::Info);
    assert!(slot.advance(id, ToastPhase::Shown));
    assert_eq!(slot.current.as_ref().unwrap().phase, ToastPhase::Shown);
    assert!(slot.advance(id, ToastPhase::Leaving));
    assert!(slot.remove(id));
    assert!(slot.current.is_none());
}

#[test]
fn stale_timers_do_not_touch_replacement() {
    let mut slot = ToastSlot::default();
    let old = slot.show("old", Severity::Info);
    let new = slot.show("new", Severity::Success);
    assert!(!slot.advance(old, ToastPhase::Leaving));
    assert!(!slot.remove(old));
    let toast = slot.current.as_ref().unwrap();
    assert_eq!(toast.id, new);
    assert_eq!(toast.phase, ToastPhase::Offscreen);
}

#[test]
fn removing_twice_is_noop() {
    let mut slot = ToastSlot::default();
    let id = slot.show("msg", Severity::Info);
    assert!(slot.remove(id));
    assert!(!slot.remove(id));
    assert!(!slot.advance(id, ToastPhase::Shown));
}

#[test]
fn ids_are_unique() {
    let mut slot = ToastSlot::default();
    let a = slot.show("a", Severity::Info);
    let b = slot.show("b", Severity::Info);
    assert_ne!(a, b);
}

#[test]
fn severity_styles() {
    assert_eq!(Severity::Success.background(), "#10b981");
    assert_eq!(Severity::Error.background(), "#ef4444");
    assert_eq!(Severity::Info.background(), "#3b82f6");
    assert_eq!(Severity::Error.icon(), "fa-exclamation-triangle");
    assert_eq!(Severity::default(), Severity::Info);
    assert_eq!(Severity::Success.class_name(), "success");
}

#[test]
fn only_shown_phase_is_on_screen() {
    assert_eq!(ToastPhase::Shown.transform(), "translateX(0)");
    assert_eq!(ToastPhase::Offscreen.transform(), "translateX(400px)");
    assert_eq!(ToastPhase::Leaving.transform(), "translateX(400px)");
}
