use super::record;
use crate::aggregate::{Aggregator, QueryGroup, SortKey, sorted};

fn groups() -> Vec<QueryGroup> {
    let mut agg = Aggregator::default();
    // signature a: 1 member, max lock 3, max elapsed 10
    agg.add_with_signature("a".into(), record("a", 10, 3));
    // signature b: 3 members, max lock 1, max elapsed 2
    agg.add_with_signature("b".into(), record("b", 2, 1));
    agg.add_with_signature("b".into(), record("b", 1, 0));
    agg.add_with_signature("b".into(), record("b", 1, 0));
    // signature c: 2 members, max lock 2, max elapsed 5
    agg.add_with_signature("c".into(), record("c", 5, 2));
    agg.add_with_signature("c".into(), record("c", 4, 2));
    agg.into_groups()
}

fn order(view: &[&QueryGroup]) -> Vec<String> {
    view.iter().map(|g| g.signature().to_string()).collect()
}

#[test]
fn sort_key_from_arg() {
    assert_eq!(SortKey::from_arg(Some("lock")), SortKey::Lock);
    assert_eq!(SortKey::from_arg(Some("time")), SortKey::Time);
    assert_eq!(SortKey::from_arg(Some("number")), SortKey::Count);
    assert_eq!(SortKey::from_arg(Some("LOCK")), SortKey::Count);
    assert_eq!(SortKey::from_arg(None), SortKey::Count);
}

#[test]
fn lock_orders_by_max_lock_ascending() {
    let groups = groups();

    let view = sorted(&groups, SortKey::Lock);

    assert_eq!(order(&view), vec!["b", "c", "a"]);
}

#[test]
fn time_orders_by_max_elapsed_ascending() {
    let groups = groups();

    let view = sorted(&groups, SortKey::Time);

    assert_eq!(order(&view), vec!["b", "c", "a"]);
}

#[test]
fn unrecognized_key_orders_by_count_ascending() {
    let groups = groups();

    let view = sorted(&groups, SortKey::from_arg(Some("whatever")));

    assert_eq!(order(&view), vec!["a", "c", "b"]);
}

#[test]
fn ties_keep_discovery_order() {
    // Arrange
    let mut agg = Aggregator::default();
    for sig in ["z", "m", "a"] {
        agg.add_with_signature(sig.into(), record(sig, 1, 1));
    }
    let groups = agg.into_groups();

    // Act
    let view = sorted(&groups, SortKey::Lock);

    // Assert
    assert_eq!(order(&view), vec!["z", "m", "a"]);
}
