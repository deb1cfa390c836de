use std::hash::Hash;
use std::ops::Index;

use ahash::RandomState;
use hashbrown::hash_table::{Entry, HashTable};

/// An atom represented as an interned integer.
///
/// A token is the smallest possible unit of change in an edit script.
/// For the text diffs produced by this crate that is a single character (or byte).
/// The [sweep](crate::diff) compares tokens many times per atom, so all
/// algorithms operate on interned tokens instead of the atoms themselves:
/// every comparison becomes a single integer compare.
///
/// While you can intern tokens yourself it is strongly recommended to use [`InternedInput`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Token(pub u32);

impl From<u32> for Token {
    fn from(token: u32) -> Self {
        Token(token)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

/// A trait for types that can be split into atoms for diffing.
///
/// `&str` implements this trait by splitting into characters and `&[u8]`
/// by splitting into bytes. See [`sources`](crate::sources) for the available tokenizers.
pub trait TokenSource {
    /// The atom type produced by this source.
    type Token: Hash + Eq;
    /// An iterator that yields all atoms of this source in order.
    type Tokenizer: Iterator<Item = Self::Token>;
    /// Creates an iterator that yields all atoms from this source.
    fn tokenize(&self) -> Self::Tokenizer;
    /// An estimate of the number of atoms this source will produce,
    /// used to pre-allocate. It does not need to be exact.
    fn estimate_tokens(&self) -> u32;
}

/// Two lists of interned [tokens](Token) that an edit script can be computed from,
/// together with the [`Interner`] needed to map them back to atoms.
#[derive(Default)]
pub struct InternedInput<T> {
    /// The source sequence.
    pub before: Vec<Token>,
    /// The target sequence.
    pub after: Vec<Token>,
    /// Maps every token back to its atom.
    pub interner: Interner<T>,
}

impl<T> InternedInput<T> {
    /// Clears both sequences and the interner without freeing memory.
    pub fn clear(&mut self) {
        self.before.clear();
        self.after.clear();
        self.interner.clear();
    }
}

impl<T: Eq + Hash> InternedInput<T> {
    /// Tokenizes and interns `before` (the source) and `after` (the target).
    pub fn new<I: TokenSource<Token = T>>(before: I, after: I) -> Self {
        let token_estimate_before = before.estimate_tokens() as usize;
        let token_estimate_after = after.estimate_tokens() as usize;
        let mut res = Self {
            before: Vec::with_capacity(token_estimate_before),
            after: Vec::with_capacity(token_estimate_after),
            interner: Interner::new(token_estimate_before + token_estimate_after),
        };
        res.update_before(before.tokenize());
        res.update_after(after.tokenize());
        res
    }

    /// Replaces `self.before` with the interned tokens yielded by `input`.
    ///
    /// Atoms are never removed from the interner, call [`clear`](InternedInput::clear)
    /// when reusing an input for unrelated sequences.
    pub fn update_before(&mut self, input: impl Iterator<Item = T>) {
        self.before.clear();
        self.before
            .extend(input.map(|token| self.interner.intern(token)));
    }

    /// Replaces `self.after` with the interned tokens yielded by `input`.
    pub fn update_after(&mut self, input: impl Iterator<Item = T>) {
        self.after.clear();
        self.after
            .extend(input.map(|token| self.interner.intern(token)));
    }
}

/// Deduplicates atoms and hands out a dense [`Token`] for each distinct one.
#[derive(Default)]
pub struct Interner<T> {
    tokens: Vec<T>,
    table: HashTable<Token>,
    hasher: RandomState,
}

impl<T> Interner<T> {
    /// Create an Interner with initial capacity `capacity`.
    pub fn new(capacity: usize) -> Interner<T> {
        Interner {
            tokens: Vec::with_capacity(capacity),
            table: HashTable::with_capacity(capacity),
            hasher: RandomState::new(),
        }
    }

    /// Remove all interned atoms.
    pub fn clear(&mut self) {
        self.table.clear();
        self.tokens.clear();
    }

    /// Returns the number of **distinct** atoms currently interned.
    pub fn num_tokens(&self) -> u32 {
        self.tokens.len() as u32
    }
}

impl<T: Hash + Eq> Interner<T> {
    /// Reserves capacity for at least `capacity` additional distinct atoms.
    pub fn reserve(&mut self, capacity: usize) {
        self.table.reserve(capacity, |&token| {
            self.hasher.hash_one(&self.tokens[token.0 as usize])
        });
        self.tokens.reserve(capacity);
    }

    /// Intern `atom` and return its token.
    pub fn intern(&mut self, atom: T) -> Token {
        let hash = self.hasher.hash_one(&atom);
        match self.table.entry(
            hash,
            |&it| self.tokens[it.0 as usize] == atom,
            |&token| self.hasher.hash_one(&self.tokens[token.0 as usize]),
        ) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let interned = Token(self.tokens.len() as u32);
                entry.insert(interned);
                self.tokens.push(atom);
                interned
            }
        }
    }
}

impl<T> Index<Token> for Interner<T> {
    type Output = T;
    fn index(&self, index: Token) -> &Self::Output {
        &self.tokens[index.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::{InternedInput, Interner, Token};

    #[test]
    fn equal_atoms_share_a_token() {
        let mut interner = Interner::new(4);
        let a = interner.intern('a');
        let b = interner.intern('b');
        assert_eq!(interner.intern('a'), a);
        assert_ne!(a, b);
        assert_eq!(interner.num_tokens(), 2);
        assert_eq!(interner[b], 'b');
    }

    #[test]
    fn input_interns_both_sides_into_one_table() {
        let input = InternedInput::new("abca", "cab");
        assert_eq!(input.before, [Token(0), Token(1), Token(2), Token(0)]);
        assert_eq!(input.after, [Token(2), Token(0), Token(1)]);
        assert_eq!(input.interner.num_tokens(), 3);
    }

    #[test]
    fn clear_resets_tokens() {
        let mut input = InternedInput::new("xy", "yz");
        input.clear();
        assert!(input.before.is_empty() && input.after.is_empty());
        assert_eq!(input.interner.num_tokens(), 0);
        input.update_before("q".chars());
        assert_eq!(input.before, [Token(0)]);
    }
}
