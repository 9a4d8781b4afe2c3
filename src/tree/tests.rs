use super::{NodePool, Orientation, Tree};
use std::cell::RefCell;
use std::rc::Rc;

fn new_tree(orientation: Orientation) -> Tree {
    Tree::new(orientation, Rc::new(RefCell::new(NodePool::new())))
}

#[test]
fn insert_reuses_existing_node_for_same_price() {
    let mut t = new_tree(Orientation::MinFirst);
    let a = t.insert(100);
    let b = t.insert(100);
    assert_eq!(a, b);
}

#[test]
fn insert_maintains_rb_invariants_across_many_prices() {
    let mut t = new_tree(Orientation::MinFirst);
    for price in [50, 20, 80, 10, 30, 70, 90, 5, 15, 25, 35, 60, 75, 85, 95] {
        t.insert(price);
        t.valid().expect("tree must stay balanced after every insert");
    }
}

#[test]
fn min_first_head_tracks_minimum() {
    let mut t = new_tree(Orientation::MinFirst);
    for price in [50, 20, 80, 10, 90] {
        t.insert(price);
    }
    let head = t.head().unwrap();
    assert_eq!(t.pool().borrow().price(head), 10);
}

#[test]
fn max_first_head_tracks_maximum() {
    let mut t = new_tree(Orientation::MaxFirst);
    for price in [50, 20, 80, 10, 90] {
        t.insert(price);
    }
    let head = t.head().unwrap();
    assert_eq!(t.pool().borrow().price(head), 90);
}

#[test]
fn get_finds_inserted_price_and_rejects_missing() {
    let mut t = new_tree(Orientation::MinFirst);
    t.insert(42);
    assert!(t.get(42).is_ok());
    assert!(t.get(43).is_err());
}

#[test]
fn delete_leaf_preserves_invariants() {
    let mut t = new_tree(Orientation::MinFirst);
    for price in [50, 20, 80] {
        t.insert(price);
    }
    t.delete(20);
    t.valid().unwrap();
    assert!(t.get(20).is_err());
}

#[test]
fn delete_node_with_two_children_preserves_invariants() {
    let mut t = new_tree(Orientation::MinFirst);
    for price in [50, 20, 80, 10, 30, 70, 90] {
        t.insert(price);
    }
    t.delete(50);
    t.valid().unwrap();
    assert!(t.get(50).is_err());
    for price in [20, 80, 10, 30, 70, 90] {
        assert!(t.get(price).is_ok());
    }
}

#[test]
fn delete_missing_price_is_a_no_op() {
    let mut t = new_tree(Orientation::MinFirst);
    t.insert(10);
    t.delete(999);
    t.valid().unwrap();
    assert!(t.get(10).is_ok());
}

#[test]
fn repeated_insert_delete_sequence_stays_balanced_and_updates_head() {
    let mut t = new_tree(Orientation::MinFirst);
    let prices = [64, 32, 96, 16, 48, 80, 112, 8, 24, 40, 56, 72, 88, 104, 120];
    for &p in &prices {
        t.insert(p);
    }
    t.valid().unwrap();

    for &p in prices.iter().step_by(2) {
        t.delete(p);
        t.valid().expect("tree must stay balanced after every delete");
    }

    let remaining: Vec<u64> = prices.iter().skip(1).step_by(2).cloned().collect();
    let head = t.head().unwrap();
    let head_price = t.pool().borrow().price(head);
    assert_eq!(head_price, *remaining.iter().min().unwrap());

    for &p in &remaining {
        assert!(t.get(p).is_ok());
    }
}

#[test]
fn delete_down_to_empty_tree_clears_head() {
    let mut t = new_tree(Orientation::MaxFirst);
    for price in [1, 2, 3, 4, 5] {
        t.insert(price);
    }
    for price in [1, 2, 3, 4, 5] {
        t.delete(price);
        t.valid().unwrap();
    }
    assert!(t.head().is_none());
}

#[test]
fn shared_pool_allows_node_migration_between_two_trees() {
    let pool = Rc::new(RefCell::new(NodePool::new()));
    let mut sell = Tree::new(Orientation::MinFirst, Rc::clone(&pool));
    let mut buy = Tree::new(Orientation::MaxFirst, Rc::clone(&pool));

    let node = sell.insert(100);
    sell.delete(100);
    let same_node = buy.insert(100);

    assert_eq!(node, same_node, "freed node should be reused from the shared pool");
}
