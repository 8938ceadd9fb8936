use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{Confirmation, SaveOutcome};

#[test]
fn test_delete_user_declined_keeps_directory() {
    let mut dir = common::seeded_directory();
    let before = dir.clone();
    assert!(dir.delete(2, Confirmation::Declined).is_none());
    assert_eq!(dir, before);
}

#[test]
fn test_delete_user_confirmed_keeps_remaining_order() {
    let mut dir = common::seeded_directory();
    let mut expected = common::ids(&dir);
    expected.retain(|id| *id != 2);

    dir.delete(2, Confirmation::Confirmed).unwrap();
    assert_eq!(common::ids(&dir), expected);
}

#[test]
fn test_delete_user_twice_is_noop() {
    let mut dir = common::seeded_directory();
    assert!(dir.delete(2, Confirmation::Confirmed).is_some());
    let after_first = dir.clone();
    assert!(dir.delete(2, Confirmation::Confirmed).is_none());
    assert_eq!(dir, after_first);
}

#[test]
fn test_delete_highest_id_is_reused() {
    let mut dir = common::seeded_directory();
    let highest = *common::ids(&dir).iter().max().unwrap();
    dir.delete(highest, Confirmation::Confirmed).unwrap();

    let outcome = dir
        .save(common::valid_user(dir.next_id(), "Reuse", "r@x.com"))
        .unwrap();
    assert_eq!(outcome, SaveOutcome::Created(highest));
}

#[test]
fn test_delete_middle_id_not_reused() {
    let mut dir = common::seeded_directory();
    let highest = *common::ids(&dir).iter().max().unwrap();
    dir.delete(2, Confirmation::Confirmed).unwrap();
    assert_eq!(dir.next_id(), highest + 1);
}

#[test]
fn test_delete_every_user_resets_next_id() {
    let mut dir = common::seeded_directory();
    for id in common::ids(&dir) {
        dir.delete(id, Confirmation::Confirmed).unwrap();
    }
    assert!(dir.is_empty());
    assert_eq!(dir.next_id(), 1);
}
