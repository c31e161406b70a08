use super::*;

#[test]
fn level_bar_width_resolves_after_delay() {
    let plan = reveal_plan(true, Some("75"));
    assert_eq!(plan.delayed_width, Some((300, "75%".to_owned())));
    assert_eq!(plan.styles, REVEALED_STYLE);
}

#[test]
fn cards_reveal_without_width_change() {
    let plan = reveal_plan(false, Some("75"));
    assert_eq!(plan.delayed_width, None);
    assert_eq!(plan.styles, [("opacity", "1"), ("transform", "translateY(0)")]);
}

#[test]
fn level_bar_without_level_still_reveals() {
    let plan = reveal_plan(true, None);
    assert_eq!(plan.delayed_width, None);
    assert_eq!(plan.styles, REVEALED_STYLE);
}

#[test]
fn level_width_parses_and_clamps() {
    assert_eq!(level_width(Some("0")).as_deref(), Some("0%"));
    assert_eq!(level_width(Some("100")).as_deref(), Some("100%"));
    assert_eq!(level_width(Some(" 90 ")).as_deref(), Some("90%"));
    assert_eq!(level_width(Some("62.5")).as_deref(), Some("62.5%"));
    assert_eq!(level_width(Some("140")).as_deref(), Some("100%"));
    assert_eq!(level_width(Some("-5")).as_deref(), Some("0%"));
}

#[test]
fn level_width_rejects_garbage() {
    assert_eq!(level_width(Some("high")), None);
    assert_eq!(level_width(Some("")), None);
    assert_eq!(level_width(Some("NaN")), None);
}

#[test]
fn hidden_style_matches_reveal_offset() {
    assert_eq!(HIDDEN_STYLE, [("opacity", "0"), ("transform", "translateY(30px)")]);
}

#[test]
fn selector_covers_all_card_kinds() {
    for class in [".experience-card", ".project-card", ".skill-category", ".level-bar"] {
        assert!(REVEAL_SELECTOR.contains(class));
    }
}

#[test]
fn revealed_elements_leave_the_observer() {
    assert!(reveal_plan(true, Some("75")).stop_observing);
    assert!(reveal_plan(false, None).stop_observing);
}
