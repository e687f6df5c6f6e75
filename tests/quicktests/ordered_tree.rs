use bst::{Order, OrderedTree, TreeError};

use std::collections::{BTreeSet, HashSet};

/// Inserts every value, returning the tree along with how many inserts were rejected.
fn build(xs: &[i32]) -> (OrderedTree, usize) {
    let mut tree = OrderedTree::new();
    let mut rejected = 0;
    for x in xs {
        match tree.insert(*x) {
            Ok(()) => {}
            Err(TreeError::DuplicateKey(k)) if k == *x => rejected += 1,
            Err(e) => panic!("unexpected insert error: {e}"),
        }
    }
    (tree, rejected)
}

#[quickcheck]
fn size_counts_accepted_inserts(xs: Vec<i32>) -> bool {
    let (tree, rejected) = build(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.len() == xs.len() - rejected && tree.len() == distinct.len()
}

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i32>) -> bool {
    let (tree, _) = build(&xs);
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    tree.traverse(Order::InOrder) == expected
}

#[quickcheck]
fn every_order_visits_every_key_once(xs: Vec<i16>) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let (tree, _) = build(&xs);
    let expected: BTreeSet<_> = xs.iter().copied().collect();

    Order::ALL.into_iter().all(|order| {
        let keys = tree.traverse(order);
        keys.len() == expected.len() && keys.into_iter().collect::<BTreeSet<_>>() == expected
    })
}

#[quickcheck]
fn pre_order_rebuilds_the_same_tree(xs: Vec<i16>) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let (tree, _) = build(&xs);
    let (rebuilt, rejected) = build(&tree.traverse(Order::PreOrder));

    rejected == 0
        && Order::ALL
            .into_iter()
            .all(|order| rebuilt.traverse(order) == tree.traverse(order))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let (tree, _) = build(&xs);

    xs.iter().all(|x| tree.contains(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let (tree, _) = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().map(i32::from).collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(*x))
}

#[quickcheck]
fn sum_matches_in_order(xs: Vec<i32>) -> bool {
    let (tree, _) = build(&xs);
    let expected: i64 = tree.traverse(Order::InOrder).into_iter().map(i64::from).sum();

    tree.sum() == expected
}

#[quickcheck]
fn second_insert_is_rejected(xs: Vec<i8>, x: i8) -> bool {
    let xs: Vec<i32> = xs.into_iter().map(i32::from).collect();
    let x = i32::from(x);
    let (mut tree, _) = build(&xs);
    let _ = tree.insert(x);
    let size = tree.len();

    tree.insert(x) == Err(TreeError::DuplicateKey(x)) && tree.len() == size && tree.contains(x)
}
