//! The diagonal distance sweep.
//!
//! Instead of a `(len1 + 1) x (len2 + 1)` matrix the sweep keeps a single
//! *frame* with one slot per diagonal `k = col - row` of the edit graph,
//! shifted by `len1` so that it is a valid index (`0..=len1 + len2`).
//! The matrix is then processed one anti-diagonal (`depth = row + col`) at a time.
//! Cells of one anti-diagonal only sit on every second diagonal, with the parity
//! alternating between depths. Each cell reads its upper and left neighbours,
//! which live on the two adjacent diagonals of the *other* parity and therefore
//! still hold the values of the previous anti-diagonal. Its diagonal
//! predecessor lives in the very slot that is overwritten, so the whole
//! computation happens in place.

use crate::intern::Token;
use crate::CostModel;

/// Resets `frame` to the boundary of the edit graph: slot `i` holds `|len1 - i|`,
/// the cost of a pure insertion or pure deletion prefix path.
pub fn fill_frame(frame: &mut Vec<i32>, len1: usize, len2: usize) {
    let len1 = len1 as i32;
    frame.clear();
    frame.extend((0..=len1 + len2 as i32).map(|i| (len1 - i).abs()));
}

impl CostModel {
    /// Cost of a cell whose atoms differ.
    /// Ties prefer `del` over `ins` over the diagonal.
    fn mismatch(self, del: i32, ins: i32, diag: i32) -> i32 {
        match self {
            CostModel::Indel => {
                if del <= ins {
                    del
                } else {
                    ins
                }
            }
            CostModel::Levenshtein => {
                let sub = diag + 1;
                if del <= ins && del <= sub {
                    del
                } else if ins <= sub {
                    ins
                } else {
                    sub
                }
            }
        }
    }
}

/// Runs the edit distance DP of `before` (rows) against `after` (columns)
/// over a frame prepared by [`fill_frame`].
///
/// Afterwards slot `len1 + len2 - i` holds the cost of aligning
/// `before[..i]` with all of `after`.
pub fn sweep(frame: &mut [i32], before: &[Token], after: &[Token], cost_model: CostModel) {
    let len1 = before.len() as i32;
    let len2 = after.len() as i32;
    debug_assert_eq!(frame.len(), (len1 + len2 + 1) as usize);

    for depth in 0..len1 + len2 - 1 {
        let first = if depth < len1 {
            len1 - depth
        } else {
            depth - (len1 - 2)
        };
        let last = if depth < len2 {
            depth + len1
        } else {
            (len2 - 1) * 2 + len1 - depth
        };

        for k in (first..=last).step_by(2) {
            let col = ((depth + k - len1) >> 1) as usize;
            let row = ((depth - k + len1) >> 1) as usize;
            let k = k as usize;

            // del consumes a `before` atom (downward), ins an `after` atom (rightward)
            let del = frame[k + 1] + 1;
            let ins = frame[k - 1] + 1;
            let diag = frame[k];
            frame[k] = if before[row] == after[col] {
                diag.min(del).min(ins)
            } else {
                cost_model.mismatch(del, ins, diag)
            };
        }
    }
}
