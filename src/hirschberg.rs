use tracing::{debug, trace, trace_span};

use crate::edit::DiffOperation;
use crate::hirschberg::column::{Columns, Direction};
use crate::hirschberg::window::Window;
use crate::intern::Token;
use crate::{CostModel, Sink};

mod column;
mod sweep;
mod window;

/// Hirschberg's divide and conquer over an explicit work-list.
///
/// Every window is either resolved directly (when one side is empty or has a
/// single atom) or bisected at the middle of its `after` range. The split
/// point in `before` is found from one forward and one reverse distance
/// column, so no more than O(len1 + len2) memory is ever needed.
///
/// The result is the *vertex path*: `vertices[x]` is the `before` offset an
/// optimal alignment associates with `after` offset `x`.
#[derive(Default)]
pub struct Hirschberg {
    columns: Columns,
    stack: Vec<Window>,
    vertices: Vec<u32>,
}

pub fn diff<S: Sink>(
    before: &[Token],
    after: &[Token],
    cost_model: CostModel,
    sink: S,
) -> S::Out {
    Hirschberg::default().diff(before, after, cost_model, sink)
}

impl Hirschberg {
    pub fn diff<S: Sink>(
        &mut self,
        before: &[Token],
        after: &[Token],
        cost_model: CostModel,
        mut sink: S,
    ) -> S::Out {
        self.run(before, after, cost_model);
        process_path_with_sink(&self.vertices, before, after, &mut sink);
        sink.finish()
    }

    #[cfg(test)]
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    fn run(&mut self, before: &[Token], after: &[Token], cost_model: CostModel) {
        let _span = trace_span!("hirschberg", len1 = before.len(), len2 = after.len()).entered();

        self.columns.reserve(before.len(), after.len());
        self.vertices.clear();
        self.vertices.resize(after.len() + 1, 0);
        self.stack.clear();
        self.stack.push(Window::full(before, after));

        let mut resolved = 0usize;
        while let Some(window) = self.stack.pop() {
            window.bounds_check(before.len(), after.len());
            let tokens1 = window.before(before);
            let tokens2 = window.after(after);

            if tokens1.is_empty() || tokens2.is_empty() {
                self.vertices[window.vertex_range()].fill(window.start1);
            } else if let [token] = tokens2 {
                // the first occurrence is used even if a later one is equally good
                let k = tokens1
                    .iter()
                    .position(|it| it == token)
                    .unwrap_or(tokens1.len()) as u32;
                let pos = window.start2 as usize;
                self.vertices[pos] = window.start1 + k;
                self.vertices[pos + 1] = window.start1 + (k + 1).min(window.len1);
            } else if let [token] = tokens1 {
                // a single `before` atom can only be matched once
                let mut y = window.start1;
                for (x, other) in tokens2.iter().enumerate() {
                    self.vertices[window.start2 as usize + x] = y;
                    if other == token {
                        y = window.end1();
                    }
                }
                self.vertices[window.end2() as usize] = y;
            } else {
                let (lo, hi) = self.bisect(window, tokens1, tokens2, cost_model);
                self.stack.push(lo);
                self.stack.push(hi);
                continue;
            }
            resolved += 1;
        }

        debug_assert!(
            is_valid_path(&self.vertices, before.len()),
            "invalid vertex path {:?}",
            self.vertices
        );
        debug!(windows = resolved, "resolved vertex path");
    }

    /// Splits `window` in the middle of its `after` range and at the `before`
    /// offset that minimises the total cost of both halves.
    fn bisect(
        &mut self,
        window: Window,
        tokens1: &[Token],
        tokens2: &[Token],
        cost_model: CostModel,
    ) -> (Window, Window) {
        debug_assert!(window.len1 >= 2 && window.len2 >= 2);
        let mid = window.len2 / 2;
        let (lo, hi) = tokens2.split_at(mid as usize);
        self.columns.compute(Direction::Forward, tokens1, lo, cost_model);
        self.columns.compute(Direction::Reverse, tokens1, hi, cost_model);
        let (split, cost) = best_split(&self.columns.forward, &self.columns.reverse);
        trace!(?window, split, cost, "bisected window");
        window.split(split, mid)
    }
}

/// Returns the offset `k` minimising `forward[k] + reverse[len - k]` and the
/// minimal cost. The smallest such `k` wins.
fn best_split(forward: &[u32], reverse: &[u32]) -> (u32, u32) {
    debug_assert_eq!(forward.len(), reverse.len());
    let mut split = 0;
    let mut min_cost = u32::MAX;
    for (k, (&cost1, &cost2)) in forward.iter().zip(reverse.iter().rev()).enumerate() {
        let cost = cost1 + cost2;
        if cost < min_cost {
            min_cost = cost;
            split = k as u32;
        }
    }
    (split, min_cost)
}

fn is_valid_path(vertices: &[u32], len1: usize) -> bool {
    vertices.windows(2).all(|pair| pair[0] <= pair[1])
        && vertices.iter().all(|&vertex| vertex as usize <= len1)
}

/// Walks the vertex path once and reports the edit script to `sink`.
fn process_path_with_sink(
    vertices: &[u32],
    before: &[Token],
    after: &[Token],
    sink: &mut impl Sink,
) {
    let mut y = 0;
    for (x, pair) in vertices.windows(2).enumerate() {
        let next = pair[1] as usize;
        // `before` atoms skipped by the path
        while y + 1 < next && y < before.len() {
            sink.process_edit(DiffOperation::Deletion, before[y]);
            y += 1;
        }
        if y + 1 == next {
            if before[y] == after[x] {
                sink.process_edit(DiffOperation::Equality, before[y]);
            } else {
                sink.process_edit(DiffOperation::Deletion, before[y]);
                sink.process_edit(DiffOperation::Insertion, after[x]);
            }
            y += 1;
        } else {
            debug_assert_eq!(pair[0], pair[1]);
            sink.process_edit(DiffOperation::Insertion, after[x]);
        }
    }
    for &token in &before[y..] {
        sink.process_edit(DiffOperation::Deletion, token);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{best_split, is_valid_path, Hirschberg};
    use crate::intern::InternedInput;
    use crate::CostModel;

    fn vertices(before: &str, after: &str, cost_model: CostModel) -> Vec<u32> {
        let input = InternedInput::new(before, after);
        let mut hirschberg = Hirschberg::default();
        hirschberg.run(&input.before, &input.after, cost_model);
        hirschberg.vertices().to_vec()
    }

    #[test]
    fn degenerate_windows() {
        assert_eq!(vertices("", "", CostModel::Indel), [0]);
        assert_eq!(vertices("", "abc", CostModel::Indel), [0, 0, 0, 0]);
        assert_eq!(vertices("abc", "", CostModel::Indel), [0]);
    }

    #[test]
    fn single_after_atom_takes_leftmost_match() {
        assert_eq!(vertices("xaya", "a", CostModel::Indel), [1, 2]);
        assert_eq!(vertices("xyz", "a", CostModel::Indel), [3, 3]);
        assert_eq!(vertices("a", "a", CostModel::Indel), [0, 1]);
    }

    #[test]
    fn single_before_atom_matches_once() {
        assert_eq!(vertices("a", "xaya", CostModel::Indel), [0, 0, 1, 1, 1]);
        assert_eq!(vertices("a", "xyz", CostModel::Indel), [0, 0, 0, 0]);
        assert_eq!(vertices("a", "aa", CostModel::Indel), [0, 1, 1]);
    }

    #[test]
    fn bisected_paths() {
        assert_eq!(
            vertices("kitten", "sitting", CostModel::Indel),
            [0, 0, 2, 3, 4, 4, 6, 6]
        );
        assert_eq!(
            vertices("kitten", "sitting", CostModel::Levenshtein),
            [1, 1, 2, 3, 4, 5, 6, 6]
        );
        assert_eq!(
            vertices("abcabba", "cbabac", CostModel::Indel),
            [0, 0, 2, 4, 5, 7, 7]
        );
    }

    #[test]
    fn split_prefers_first_minimum() {
        // costs 3, 2, 2, 4
        assert_eq!(best_split(&[1, 1, 2, 3], &[1, 0, 1, 2]), (1, 2));
        assert_eq!(best_split(&[0], &[5]), (0, 5));
    }

    #[test]
    fn path_validation() {
        assert!(is_valid_path(&[0, 0, 2, 3], 3));
        assert!(!is_valid_path(&[0, 2, 1], 3));
        assert!(!is_valid_path(&[0, 4], 3));
    }

    #[test]
    fn buffers_are_reused_between_runs() {
        let mut hirschberg = Hirschberg::default();
        let input = InternedInput::new("a long source sequence", "a longer target");
        hirschberg.run(&input.before, &input.after, CostModel::Indel);
        let first = hirschberg.vertices().to_vec();
        let other = InternedInput::new("short", "shirt");
        hirschberg.run(&other.before, &other.after, CostModel::Indel);
        assert_eq!(hirschberg.vertices().len(), 6);
        hirschberg.run(&input.before, &input.after, CostModel::Indel);
        assert_eq!(hirschberg.vertices(), first);
    }

    proptest! {
        #[test]
        fn vertex_path_is_monotonic(before in "[ab]{0,16}", after in "[abc]{0,16}") {
            for cost_model in CostModel::ALL {
                let path = vertices(&before, &after, cost_model);
                prop_assert_eq!(path.len(), after.len() + 1);
                prop_assert!(is_valid_path(&path, before.len()));
            }
        }
    }
}
