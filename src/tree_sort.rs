//! Generic tree-based sort over fixed-size records.
//!
//! The engine never interprets record contents: it copies records and asks
//! an injected [`RecordOrder`] strategy for every pairwise decision. Scratch
//! state is a snapshot of the input plus an arena of index-linked tree
//! nodes, both owned by the single in-flight call and dropped wholesale
//! before it returns.

use std::cmp::Ordering;

/// Comparison capability injected into the sort engine.
///
/// Implementations must provide a total order over the records they will
/// ever see in one sort pass; the engine does not detect violations.
pub trait RecordOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Any three-way closure is a valid order strategy.
impl<T, F> RecordOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// One node of the scratch tree. Children are arena indices, not pointers,
/// so releasing the whole pass is just dropping the `Vec`.
struct Node {
    record: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Sorts `records` in place into non-decreasing order under `order`.
///
/// Each record is first copied into a scratch snapshot (the input slice is
/// overwritten during the flatten, so tree nodes must not reference it),
/// inserted into an unbalanced binary search tree, and the tree is then
/// flattened back into `records` with an in-order traversal.
///
/// Equal records keep their relative input order: an incoming record that
/// compares equal to a node descends to the right, landing after every
/// previously inserted equal record.
///
/// Expected O(N log N) comparisons; O(N²) on input that is already sorted
/// in either direction, since the tree is not balanced.
pub fn tree_sort<T, O>(records: &mut [T], order: &O)
where
    T: Clone,
    O: RecordOrder<T> + ?Sized,
{
    if records.len() < 2 {
        return;
    }

    let scratch: Vec<T> = records.to_vec();
    let mut arena: Vec<Node> = Vec::with_capacity(scratch.len());
    let mut root: Option<usize> = None;

    for i in 0..scratch.len() {
        let new = arena.len();
        arena.push(Node {
            record: i,
            left: None,
            right: None,
        });

        let Some(mut cur) = root else {
            root = Some(new);
            continue;
        };
        loop {
            let goes_left =
                order.compare(&scratch[i], &scratch[arena[cur].record]) == Ordering::Less;
            let child = if goes_left {
                &mut arena[cur].left
            } else {
                &mut arena[cur].right
            };
            match *child {
                Some(next) => cur = next,
                None => {
                    *child = Some(new);
                    break;
                }
            }
        }
    }

    // In-order flatten with an explicit stack: left subtree, node, right.
    let mut out = 0;
    let mut stack: Vec<usize> = Vec::new();
    let mut cur = root;
    while cur.is_some() || !stack.is_empty() {
        while let Some(idx) = cur {
            stack.push(idx);
            cur = arena[idx].left;
        }
        let Some(idx) = stack.pop() else { break };
        records[out] = scratch[arena[idx].record].clone();
        out += 1;
        cur = arena[idx].right;
    }

    debug_assert_eq!(out, records.len());
}
