use crate::edit::DiffOperation;
use crate::intern::Token;

/// Trait for processing the edit scripts computed with [`diff`](crate::diff)
pub trait Sink: Sized {
    type Out;

    /// Called once for every record of the edit script, in left-to-right
    /// application order.
    ///
    /// # Parameters
    /// - **`operation`** - what happens to `token`.
    /// - **`token`** - the source atom for [`Equality`](DiffOperation::Equality) and
    ///   [`Deletion`](DiffOperation::Deletion), the target atom for
    ///   [`Insertion`](DiffOperation::Insertion).
    ///
    /// # Notes
    ///
    /// There is no dedicated substitution callback. A substituted atom is always
    /// reported as a `Deletion` of the source atom immediately followed by an
    /// `Insertion` of the target atom.
    fn process_edit(&mut self, operation: DiffOperation, token: Token);

    /// This function is called after all calls to `process_edit` are complete
    /// to obtain the final result
    fn finish(self) -> Self::Out;

    /// Utility method that constructs a [`Counter`] that tracks the number
    /// of records of each kind passed to [`process_edit`](crate::Sink::process_edit).
    fn with_counter(self) -> Counter<Self> {
        Counter::new(self)
    }
}

impl<T: FnMut(DiffOperation, Token)> Sink for T {
    type Out = ();

    fn process_edit(&mut self, operation: DiffOperation, token: Token) {
        self(operation, token)
    }

    fn finish(self) -> Self::Out {}
}

impl Sink for () {
    type Out = ();
    fn process_edit(&mut self, _operation: DiffOperation, _token: Token) {}
    fn finish(self) -> Self::Out {}
}

/// A [`Sink`] which wraps a different sink and counts the records it forwards.
pub struct Counter<T> {
    /// Number of [`Equality`](DiffOperation::Equality) records.
    pub equalities: u32,
    /// Number of [`Deletion`](DiffOperation::Deletion) records.
    pub deletions: u32,
    /// Number of [`Insertion`](DiffOperation::Insertion) records.
    pub insertions: u32,
    /// The [`Sink`] every record is forwarded to.
    /// After [`finish`](crate::Sink::finish) is called, this field contains the output returned by the [`finish`](crate::Sink::finish)
    /// method of the wrapped [`Sink`].
    pub wrapped: T,
}

impl<S: Sink> Counter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            equalities: 0,
            deletions: 0,
            insertions: 0,
            wrapped: sink,
        }
    }
}

impl<S: Sink> Sink for Counter<S> {
    type Out = Counter<S::Out>;
    fn process_edit(&mut self, operation: DiffOperation, token: Token) {
        match operation {
            DiffOperation::Equality => self.equalities += 1,
            DiffOperation::Deletion => self.deletions += 1,
            DiffOperation::Insertion => self.insertions += 1,
        }
        self.wrapped.process_edit(operation, token)
    }

    fn finish(self) -> Self::Out {
        Counter {
            equalities: self.equalities,
            deletions: self.deletions,
            insertions: self.insertions,
            wrapped: self.wrapped.finish(),
        }
    }
}

impl<T> Counter<T> {
    /// Insertions plus deletions: the length of the script without equalities.
    pub fn total(&self) -> usize {
        self.insertions as usize + self.deletions as usize
    }
}

impl Default for Counter<()> {
    fn default() -> Self {
        Counter::new(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Counter, Sink};
    use crate::edit::DiffOperation;
    use crate::intern::Token;

    #[test]
    fn counter_forwards_to_wrapped_sink() {
        let mut seen = Vec::new();
        let record = |operation: DiffOperation, token: Token| seen.push((operation, token));
        let mut counter = record.with_counter();
        counter.process_edit(DiffOperation::Deletion, Token(0));
        counter.process_edit(DiffOperation::Insertion, Token(1));
        counter.process_edit(DiffOperation::Equality, Token(2));
        let counter = counter.finish();
        assert_eq!(
            (counter.equalities, counter.deletions, counter.insertions),
            (1, 1, 1)
        );
        assert_eq!(counter.total(), 2);
        assert_eq!(
            seen,
            [
                (DiffOperation::Deletion, Token(0)),
                (DiffOperation::Insertion, Token(1)),
                (DiffOperation::Equality, Token(2)),
            ]
        );
    }

    #[test]
    fn default_counter_discards_records() {
        let mut counter = Counter::default();
        counter.process_edit(DiffOperation::Equality, Token(0));
        assert_eq!(counter.finish().total(), 0);
    }
}
