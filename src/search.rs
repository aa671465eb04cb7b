//! A uniform-cost (Dijkstra) search over an implicit graph. Frontier entries of equal cost are
//! expanded in insertion order, which on unit-cost graphs makes it behave exactly like a
//! breadth-first search while still producing optimal paths for arbitrary non-negative costs.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::iter;

struct SmallestCostHolder<K> {
    cost: K,
    sequence: u64,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest cost, then the earliest push, compares greatest
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = start;
    let mut path: Vec<N> = iter::from_fn(|| {
        parents.get_index(i).map(|(node, &(parent, _))| {
            i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until a node satisfying `success` is expanded. Returns the nodes from
/// start to goal (both included) together with the total cost, or [None] once the frontier is
/// exhausted. Every node is expanded at most once and a recorded predecessor is only replaced
/// by a strictly cheaper route, so with unit costs the first discovery of a node always wins.
pub fn uniform_cost_search<N, C, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence: u64 = 0;
    to_see.push(SmallestCostHolder {
        cost: Zero::zero(),
        sequence,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut visited: FxHashSet<usize> = FxHashSet::default();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        // A node may sit in the heap several times if a cheaper route was found after it was
        // first pushed; only the cheapest copy is expanded.
        if !visited.insert(index) {
            continue;
        }
        let successors = {
            let Some((node, _)) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, index);
                return Some((path, cost));
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if !visited.contains(&e.index()) && e.get().1 > new_cost {
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            sequence += 1;
            to_see.push(SmallestCostHolder {
                cost: new_cost,
                sequence,
                index: n,
            });
        }
    }
    None
}
