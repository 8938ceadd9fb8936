use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{seed, Confirmation, SaveOutcome, User};

/// Add a user, change their phone, then delete them.
#[test]
fn test_add_edit_delete_round() {
    let mut dir = common::seeded_directory();
    let start_len = dir.len();

    let draft = dir.draft(&seed::doctors());
    assert_eq!(draft.assigned_doctor, seed::doctors()[0].name);
    let id = match dir
        .save(common::valid_user(draft.id, "Jane Doe", "jane@x.com"))
        .unwrap()
    {
        SaveOutcome::Created(id) => id,
        other => panic!("expected create, got {other:?}"),
    };
    assert_eq!(id, draft.id);
    assert_eq!(dir.len(), start_len + 1);
    assert_eq!(dir.search("jane").len(), 1);

    let before_edit = dir.get(id).unwrap().clone();
    let mut edited = before_edit.clone();
    edited.phone_number = "555-9999".into();
    assert_eq!(dir.save(edited).unwrap(), SaveOutcome::Updated(id));
    assert_eq!(
        dir.get(id),
        Some(&User {
            phone_number: "555-9999".into(),
            ..before_edit
        })
    );
    assert_eq!(dir.len(), start_len + 1);

    assert!(dir.delete(id, Confirmation::Declined).is_none());
    let removed = dir.delete(id, Confirmation::Confirmed).unwrap();
    assert_eq!(removed.full_name, "Jane Doe");
    assert_eq!(dir.len(), start_len);
    assert!(dir.search("jane").is_empty());
}
