use crate::hirschberg::sweep::{fill_frame, sweep};
use crate::intern::Token;
use crate::CostModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Scratch space for distance columns, allocated once per diff and reused
/// for every window.
#[derive(Default)]
pub struct Columns {
    /// Output of the last [`Direction::Forward`] computation.
    pub forward: Vec<u32>,
    /// Output of the last [`Direction::Reverse`] computation.
    pub reverse: Vec<u32>,
    frame: Vec<i32>,
    reversed1: Vec<Token>,
    reversed2: Vec<Token>,
}

impl Columns {
    /// Grows all buffers so that no window of sequences with the given lengths
    /// needs to allocate.
    pub fn reserve(&mut self, len1: usize, len2: usize) {
        fn reserve_total<T>(buf: &mut Vec<T>, total: usize) {
            buf.reserve(total.saturating_sub(buf.len()));
        }
        reserve_total(&mut self.forward, len1 + 1);
        reserve_total(&mut self.reverse, len1 + 1);
        reserve_total(&mut self.frame, len1 + len2 + 1);
        reserve_total(&mut self.reversed1, len1);
        reserve_total(&mut self.reversed2, len2);
    }

    /// Computes the distance column of `before` against all of `after`:
    /// entry `i` is the cost of aligning all of `after` with the first `i`
    /// atoms of `before` ([`Direction::Forward`]) or with the last `i` atoms
    /// of `before` ([`Direction::Reverse`]).
    ///
    /// The result is stored in [`forward`](Columns::forward) or
    /// [`reverse`](Columns::reverse) respectively and has `before.len() + 1` entries.
    pub fn compute(
        &mut self,
        direction: Direction,
        before: &[Token],
        after: &[Token],
        cost_model: CostModel,
    ) {
        let Columns {
            forward,
            reverse,
            frame,
            reversed1,
            reversed2,
        } = self;
        let (column, before, after) = match direction {
            Direction::Forward => (forward, before, after),
            Direction::Reverse => {
                reversed1.clear();
                reversed1.extend(before.iter().rev());
                reversed2.clear();
                reversed2.extend(after.iter().rev());
                (reverse, &reversed1[..], &reversed2[..])
            }
        };

        fill_frame(frame, before.len(), after.len());
        sweep(frame, before, after, cost_model);

        // the answer sits on the trailing diagonals, last row first
        column.clear();
        column.extend(frame.iter().rev().take(before.len() + 1).map(|&cost| {
            debug_assert!(cost >= 0);
            cost as u32
        }));
    }
}
