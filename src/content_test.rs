use super::*;

#[test]
fn skill_levels_are_percentages() {
    for category in SKILLS {
        for skill in category.skills {
            assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
        }
    }
}

#[test]
fn sections_have_unique_ids() {
    let mut ids = SECTIONS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SECTIONS.len());
}

#[test]
fn contact_section_is_reachable_from_nav() {
    assert!(SECTIONS.iter().any(|(id, _)| *id == "contact"));
}

#[test]
fn content_is_not_empty() {
    assert!(!EXPERIENCE.is_empty());
    assert!(!PROJECTS.is_empty());
    assert!(SKILLS.iter().all(|c| !c.skills.is_empty()));
}
