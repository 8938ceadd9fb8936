use crate::common;
use pretty_assertions::assert_eq;
use shared_types::UserDirectory;

/// Every hit contains the term, and every miss does not.
fn assert_partition(dir: &UserDirectory, term: &str) {
    let needle = term.to_lowercase();
    let hits: Vec<_> = dir.search(term).iter().map(|u| u.id).collect();
    for user in dir.all() {
        let contains = user.full_name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle)
            || user.role.as_str().to_lowercase().contains(&needle);
        assert_eq!(hits.contains(&user.id), contains, "term {term:?} user {}", user.id);
    }
}

#[test]
fn test_search_empty_term_returns_everyone() {
    let dir = common::seeded_directory();
    assert_eq!(dir.search("").len(), dir.len());
}

#[test]
fn test_search_partitions_directory() {
    let dir = common::seeded_directory();
    for term in ["a", "ADMIN", "doctor", "user", "@", ".com", "smith", "nothing-here"] {
        assert_partition(&dir, term);
    }
}

#[test]
fn test_search_ignores_phone_and_address() {
    let dir = common::seeded_directory();
    let phone = dir.all()[0].phone_number.clone();
    assert!(dir.search(&phone).is_empty());
}

#[test]
fn test_search_preserves_insertion_order() {
    let dir = common::seeded_directory();
    let hits: Vec<_> = dir.search("e").iter().map(|u| u.id).collect();
    let mut sorted_by_position = hits.clone();
    let order = common::ids(&dir);
    sorted_by_position.sort_by_key(|id| order.iter().position(|o| o == id));
    assert_eq!(hits, sorted_by_position);
}
