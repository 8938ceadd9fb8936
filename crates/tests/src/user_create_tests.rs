use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, SaveOutcome, UserDirectory};

#[test]
fn test_create_user_in_empty_directory_gets_id_one() {
    let mut dir = UserDirectory::default();
    let outcome = dir.save(common::valid_user(0, "Jane Doe", "jane@x.com")).unwrap();
    assert_eq!(outcome, SaveOutcome::Created(1));
    assert_eq!(common::ids(&dir), vec![1]);
}

#[test]
fn test_create_user_appends_at_end() {
    let mut dir = common::seeded_directory();
    let next = dir.next_id();
    dir.save(common::valid_user(next, "Jane Doe", "jane@x.com")).unwrap();

    let last = dir.all().last().unwrap();
    assert_eq!(last.id, next);
    assert_eq!(last.full_name, "Jane Doe");
}

#[test]
fn test_create_user_defaults_role_and_gender() {
    let mut dir = common::seeded_directory();
    let next = dir.next_id();
    dir.save(common::valid_user(next, "Jane Doe", "jane@x.com")).unwrap();

    let created = dir.get(next).unwrap();
    assert_eq!(created.role, Role::User);
    assert_eq!(created.gender.as_str(), "Other");
}

#[test]
fn test_create_user_missing_email_rejected() {
    let mut dir = common::seeded_directory();
    let before = dir.clone();
    let user = common::valid_user(dir.next_id(), "Jane Doe", "");

    let err = dir.save(user).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("email"), Some("Email is required"));
    assert_eq!(dir, before);
}

#[test]
fn test_create_user_allows_duplicate_email() {
    let mut dir = common::seeded_directory();
    let taken = dir.all()[0].email.clone();
    let outcome = dir.save(common::valid_user(dir.next_id(), "Twin", &taken));
    assert!(matches!(outcome, Ok(SaveOutcome::Created(_))));
}

#[test]
fn test_create_user_ids_stay_unique() {
    let mut dir = common::seeded_directory();
    for i in 0..3 {
        let email = format!("new{i}@x.com");
        dir.save(common::valid_user(dir.next_id(), "New", &email)).unwrap();
    }
    let mut ids = common::ids(&dir);
    let len = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), len);
}
