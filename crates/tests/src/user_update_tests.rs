use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, SaveOutcome};

#[test]
fn test_update_user_keeps_position_and_count() {
    let mut dir = common::seeded_directory();
    let order = common::ids(&dir);
    let mut edited = dir.get(3).unwrap().clone();
    edited.role = Role::Admin;

    assert_eq!(dir.save(edited).unwrap(), SaveOutcome::Updated(3));
    assert_eq!(common::ids(&dir), order);
    assert_eq!(dir.get(3).unwrap().role, Role::Admin);
}

#[test]
fn test_update_user_only_touches_matching_row() {
    let mut dir = common::seeded_directory();
    let untouched = dir.get(1).unwrap().clone();
    let mut edited = dir.get(2).unwrap().clone();
    edited.address = "99 Elm St".into();

    dir.save(edited).unwrap();
    assert_eq!(dir.get(1), Some(&untouched));
    assert_eq!(dir.get(2).unwrap().address, "99 Elm St");
}

#[test]
fn test_update_user_blank_name_rejected() {
    let mut dir = common::seeded_directory();
    let before = dir.clone();
    let mut edited = dir.get(2).unwrap().clone();
    edited.full_name.clear();

    let err = dir.save(edited).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(dir, before);
}

#[test]
fn test_update_user_free_text_appointment_kept() {
    let mut dir = common::seeded_directory();
    let mut edited = dir.get(4).unwrap().clone();
    edited.appointment_time = "2024-09-10T14:30".into();
    dir.save(edited).unwrap();
    assert_eq!(dir.get(4).unwrap().appointment_time, "2024-09-10T14:30");
}
