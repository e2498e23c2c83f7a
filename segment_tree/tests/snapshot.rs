use segment_tree::{AddSum, AssignMin, LazySegTree, MinTree, RangeAddTree};
use std::path::Path;

#[test]
fn lazy_tree_keeps_pending_updates_across_save_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("add_sum");

    let mut tree = LazySegTree::<AddSum<i64>>::add_sum(10);
    tree.update(0, 10, 4);
    tree.update(3, 7, -1);
    // nodes off the queried path still hold pending updates
    assert_eq!(tree.find(2, 4), 4 + 3);
    tree.save(&path).unwrap();

    let mut loaded = LazySegTree::<AddSum<i64>>::load(&path).unwrap();
    assert_eq!(loaded.leaf_count(), 10);
    for begin in 0..=10 {
        for end in begin..=10 {
            assert_eq!(loaded.find(begin, end), tree.find(begin, end));
        }
    }
    loaded.update(8, 10, 2);
    assert_eq!(loaded.find_all(), 36 + 4);
}

#[test]
fn assign_min_snapshot_answers_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assign_min");

    let mut tree = LazySegTree::<AssignMin<i32>>::assign_min_from(&[5, 3, 8, 1, 9]);
    tree.update(1, 4, 0);
    tree.save(&path).unwrap();

    let mut loaded = LazySegTree::<AssignMin<i32>>::load(&path).unwrap();
    assert_eq!(loaded.find(0, 5), 0);
    assert_eq!(loaded.find(0, 1), 5);
    assert_eq!(loaded.find(4, 5), 9);
}

#[test]
fn query_and_range_add_trees_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut min_tree = MinTree::from_leaves(&[7u64, 2, 9]);
    min_tree.update_value(1, 11);
    min_tree.save(dir.path().join("min")).unwrap();
    let loaded = MinTree::<u64>::load(dir.path().join("min")).unwrap();
    assert_eq!(loaded.find(0, 3), 7);
    assert_eq!(loaded.peek(1), 11);

    let mut range_add = RangeAddTree::<i64>::new(5);
    range_add.add(1, 4, 3);
    range_add.save(dir.path().join("range_add")).unwrap();
    let loaded = RangeAddTree::<i64>::load(dir.path().join("range_add")).unwrap();
    assert_eq!(loaded.sum(0, 5), 9);
    assert_eq!(loaded.get(2), 3);
}

#[test]
fn loading_a_missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = LazySegTree::<AddSum<i64>>::load(dir.path().join("missing"));
    assert!(matches!(result, Err(file_io::Error::Io(_))));
}

fn is_corrupt<T>(result: Result<T, file_io::Error>) -> bool {
    matches!(result, Err(file_io::Error::Corrupt(_)))
}

fn write_snapshot<T: serde::Serialize>(path: &Path, fields: T) {
    file_io::save_snapshot(path, &fields).unwrap();
}

#[test]
fn lazy_tree_with_short_node_array_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short_nodes");

    // (nodes, width), lazy, needs_eval, leaf_count, ops
    write_snapshot(
        &path,
        ((vec![0i64], 8usize), vec![0i64], vec![false], 8usize, ()),
    );
    assert!(is_corrupt(LazySegTree::<AddSum<i64>>::load(&path)));
}

#[test]
fn lazy_tree_with_mismatched_pending_arrays_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short_lazy");

    write_snapshot(
        &path,
        ((vec![0i64; 7], 4usize), vec![0i64; 3], vec![false; 7], 4usize, ()),
    );
    assert!(is_corrupt(LazySegTree::<AddSum<i64>>::load(&path)));

    write_snapshot(
        &path,
        ((vec![0i64; 7], 4usize), vec![0i64; 7], vec![false; 7], 9usize, ()),
    );
    assert!(is_corrupt(LazySegTree::<AddSum<i64>>::load(&path)));

    // same shape with a consistent layout loads and answers queries
    write_snapshot(
        &path,
        ((vec![0i64; 7], 4usize), vec![0i64; 7], vec![false; 7], 3usize, ()),
    );
    let mut loaded = LazySegTree::<AddSum<i64>>::load(&path).unwrap();
    loaded.update(0, 3, 2);
    assert_eq!(loaded.find_all(), 6);
}

#[test]
fn query_and_range_add_trees_reject_bad_layouts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_layout");

    // (nodes, width), leaf_count, marker
    write_snapshot(&path, ((vec![0u64; 3], 4usize), 3usize, ()));
    assert!(is_corrupt(MinTree::<u64>::load(&path)));

    // width that is not a power of two
    write_snapshot(&path, ((vec![0u64; 5], 3usize), 3usize, ()));
    assert!(is_corrupt(MinTree::<u64>::load(&path)));

    // (all nodes, width), (part nodes, width), leaf_count
    write_snapshot(
        &path,
        ((vec![0i64; 7], 4usize), (vec![0i64; 3], 2usize), 3usize),
    );
    assert!(is_corrupt(RangeAddTree::<i64>::load(&path)));
}
