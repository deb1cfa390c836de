//! Weave-diff computes **shortest edit scripts** between two sequences of atoms
//! (usually the characters of two strings) in linear space.
//!
//! The edit script is the minimal list of per-atom [`Equality`](DiffOperation::Equality),
//! [`Insertion`](DiffOperation::Insertion) and [`Deletion`](DiffOperation::Deletion)
//! records that turns the source into the target. A substitution is always
//! reported as a deletion of the source atom immediately followed by an
//! insertion of the target atom.
//!
//! The engine is [Hirschberg's algorithm](https://doi.org/10.1145/360825.360861):
//! a divide and conquer over the edit graph that locates one point of an optimal
//! alignment per step from a forward and a reverse distance column. Each column
//! is computed by an in-place sweep over the anti-diagonals of the dynamic
//! programming matrix, so a diff takes O(n·m) time but only O(n+m) memory.
//!
//! # Api Overview
//!
//! For strings the simplest entry point is [`compute_shortest_edit_script`]:
//!
//! ```
//! use weave_diff::{compute_shortest_edit_script, DiffEdit, DiffOperation};
//!
//! let script = compute_shortest_edit_script("a", "b");
//! assert_eq!(
//!     script,
//!     [
//!         DiffEdit::new('a', DiffOperation::Deletion),
//!         DiffEdit::new('b', DiffOperation::Insertion),
//!     ]
//! );
//! ```
//!
//! Like every algorithm in this crate it works on interned [tokens](crate::intern::Token).
//! Interning is done with [`InternedInput`](crate::intern::InternedInput), the
//! resulting script is passed record by record to a [`Sink`](crate::sink::Sink):
//!
//! ```
//! use weave_diff::intern::{InternedInput, Token};
//! use weave_diff::sink::Counter;
//! use weave_diff::{diff, CostModel, DiffOperation};
//!
//! let input = InternedInput::new("kitten", "sitting");
//! let changes = diff(CostModel::Indel, &input, Counter::default());
//! assert_eq!(changes.insertions, 3);
//! assert_eq!(changes.deletions, 2);
//!
//! let mut rendered = String::new();
//! diff(CostModel::Indel, &input, |operation: DiffOperation, token: Token| {
//!     let atom = input.interner[token];
//!     match operation {
//!         DiffOperation::Equality => rendered.push(atom),
//!         DiffOperation::Insertion => rendered.extend(['[', '+', atom, ']']),
//!         DiffOperation::Deletion => rendered.extend(['[', '-', atom, ']']),
//!     }
//! });
//! assert_eq!(rendered, "[+s][-k]itt[+i][-e]n[+g]");
//! ```
//!
//! `&str` is split into characters and `&[u8]` into bytes. Other sequences
//! can be diffed atom by atom with [`sources::atoms`].

use std::hash::Hash;

pub use crate::edit::{apply, ApplyError, DiffEdit, DiffOperation, EditScriptBuilder};
use crate::hirschberg::Hirschberg;
use crate::intern::{InternedInput, Token, TokenSource};
pub use crate::sink::Sink;

pub mod edit;
mod hirschberg;
pub mod intern;
pub mod sink;
pub mod sources;


/// The cost model of the distance sweep, which decides the alignment (and
/// therefore the script) chosen among all alignments of the two sequences.
///
/// Both models treat an equality as free and insertions and deletions as
/// cost 1. They only differ in how a pair of different atoms is priced.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CostModel {
    /// A substitution costs as much as the deletion plus the insertion that
    /// represent it in the script.
    ///
    /// The produced scripts contain the minimal number of
    /// [`Insertion`](DiffOperation::Insertion) and [`Deletion`](DiffOperation::Deletion)
    /// records, so this is the model to use for a *shortest* edit script.
    #[default]
    Indel,
    /// Unit cost Levenshtein distance: a substitution costs 1.
    ///
    /// The sweep prefers a deletion over an insertion over a substitution
    /// when they cost the same. Scripts produced with this model prefer
    /// substitution pairs over separate insertions and deletions and
    /// minimise the number of changed positions, but may contain more
    /// records than an [`Indel`](CostModel::Indel) script.
    Levenshtein,
}

impl CostModel {
    #[cfg(test)]
    const ALL: [Self; 2] = [CostModel::Indel, CostModel::Levenshtein];
}

/// Computes the shortest edit script that transforms the characters of
/// `source` into the characters of `target`.
pub fn compute_shortest_edit_script(source: &str, target: &str) -> Vec<DiffEdit<char>> {
    let input = InternedInput::new(source, target);
    diff(CostModel::default(), &input, EditScriptBuilder::new(&input))
}

/// Computes an edit script that transforms `input.before` into `input.after`
/// under `cost_model`.
/// The edit script is passed to `sink.process_edit` while it is produced.
pub fn diff<S: Sink, T: Eq + Hash>(
    cost_model: CostModel,
    input: &InternedInput<T>,
    sink: S,
) -> S::Out {
    diff_with_tokens(cost_model, &input.before, &input.after, sink)
}

/// Computes an edit script that transforms `before` into `after`
/// under `cost_model`.
/// The edit script is passed to `sink.process_edit` while it is produced.
pub fn diff_with_tokens<S: Sink>(
    cost_model: CostModel,
    before: &[Token],
    after: &[Token],
    sink: S,
) -> S::Out {
    check_len(before, after);
    hirschberg::diff(before, after, cost_model, sink)
}

fn check_len(before: &[Token], after: &[Token]) {
    assert!(
        before.len() + after.len() < i32::MAX as usize,
        "weave-diff only supports up to {} tokens",
        i32::MAX
    );
}

/// A reusable diff engine.
///
/// Keeps the work-list, the vertex path and the distance columns of previous
/// diffs around, so diffing many sequences in a row does not reallocate.
#[derive(Default)]
pub struct Differ {
    cost_model: CostModel,
    hirschberg: Hirschberg,
}

impl Differ {
    pub fn new(cost_model: CostModel) -> Differ {
        Differ {
            cost_model,
            hirschberg: Hirschberg::default(),
        }
    }

    pub fn cost_model(&self) -> CostModel {
        self.cost_model
    }

    /// Same as [`diff`] but reuses the buffers of this engine.
    pub fn diff<S: Sink, T: Eq + Hash>(&mut self, input: &InternedInput<T>, sink: S) -> S::Out {
        self.diff_with_tokens(&input.before, &input.after, sink)
    }

    /// Same as [`diff_with_tokens`] but reuses the buffers of this engine.
    pub fn diff_with_tokens<S: Sink>(
        &mut self,
        before: &[Token],
        after: &[Token],
        sink: S,
    ) -> S::Out {
        check_len(before, after);
        self.hirschberg.diff(before, after, self.cost_model, sink)
    }
}
