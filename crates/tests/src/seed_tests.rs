use pretty_assertions::assert_eq;
use shared_types::{seed, Role};

#[test]
fn test_seed_doctors_have_distinct_departments() {
    let doctors = seed::doctors();
    assert_eq!(doctors.len(), 5);
    let mut departments: Vec<_> = doctors.iter().map(|d| d.department.as_str()).collect();
    departments.sort_unstable();
    departments.dedup();
    assert_eq!(departments.len(), doctors.len());
}

#[test]
fn test_seed_users_cover_every_role() {
    let users = seed::initial_users();
    for role in [Role::Admin, Role::Doctor, Role::User] {
        assert!(users.iter().any(|u| u.role == role), "no seed user with {role}");
    }
}

#[test]
fn test_seed_users_pass_required_check() {
    for user in seed::initial_users() {
        assert!(user.check_required().is_ok(), "seed user {} incomplete", user.id);
    }
}
