//! Edit records and helpers for consuming finished edit scripts.

use std::fmt::{self, Display};

use thiserror::Error;

use crate::intern::{InternedInput, Interner, Token};
use crate::Sink;

/// The kind of a single edit record.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DiffOperation {
    /// The atom is present in both sequences.
    Equality,
    /// The atom only exists in the target.
    Insertion,
    /// The atom only exists in the source.
    Deletion,
}

/// One record of an edit script: an atom and what happens to it.
///
/// Substitution is not a separate kind. A substituted atom shows up as a
/// `Deletion` of the source atom directly followed by an `Insertion` of the
/// target atom.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct DiffEdit<T> {
    pub atom: T,
    pub operation: DiffOperation,
}

impl<T> DiffEdit<T> {
    pub fn new(atom: T, operation: DiffOperation) -> Self {
        DiffEdit { atom, operation }
    }
}

impl<T: Display> Display for DiffEdit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.operation {
            DiffOperation::Equality => '=',
            DiffOperation::Insertion => '+',
            DiffOperation::Deletion => '-',
        };
        write!(f, "{prefix}{}", self.atom)
    }
}

/// A [`Sink`] that resolves tokens back to their atoms and collects the
/// edit script into a `Vec`.
pub struct EditScriptBuilder<'a, T> {
    interner: &'a Interner<T>,
    edits: Vec<DiffEdit<T>>,
}

impl<'a, T: Clone> EditScriptBuilder<'a, T> {
    pub fn new(input: &'a InternedInput<T>) -> Self {
        Self {
            interner: &input.interner,
            edits: Vec::with_capacity(input.before.len().max(input.after.len())),
        }
    }
}

impl<T: Clone> Sink for EditScriptBuilder<'_, T> {
    type Out = Vec<DiffEdit<T>>;

    fn process_edit(&mut self, operation: DiffOperation, token: Token) {
        self.edits
            .push(DiffEdit::new(self.interner[token].clone(), operation))
    }

    fn finish(self) -> Self::Out {
        self.edits
    }
}

/// Why an edit script could not be replayed over a source sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("the script records a different atom than the source holds at position {position}")]
    SourceMismatch { position: usize },
    #[error("the script consumes source position {position} but the source already ended")]
    SourceExhausted { position: usize },
    #[error("the script ended after consuming {consumed} of {len} source atoms")]
    TrailingSource { consumed: usize, len: usize },
}

/// Replays `script` over `source` and returns the resulting target sequence.
///
/// Every `Equality` and `Deletion` record must match the source atom under the
/// cursor, and the script must consume the whole source.
pub fn apply<T: PartialEq + Clone>(
    source: &[T],
    script: &[DiffEdit<T>],
) -> Result<Vec<T>, ApplyError> {
    let mut target = Vec::with_capacity(source.len());
    let mut pos = 0;
    for edit in script {
        if edit.operation == DiffOperation::Insertion {
            target.push(edit.atom.clone());
            continue;
        }
        let atom = source
            .get(pos)
            .ok_or(ApplyError::SourceExhausted { position: pos })?;
        if *atom != edit.atom {
            return Err(ApplyError::SourceMismatch { position: pos });
        }
        if edit.operation == DiffOperation::Equality {
            target.push(edit.atom.clone());
        }
        pos += 1;
    }
    if pos != source.len() {
        return Err(ApplyError::TrailingSource {
            consumed: pos,
            len: source.len(),
        });
    }
    Ok(target)
}
