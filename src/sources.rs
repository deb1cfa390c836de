//! Utilities for creating token sources from common data types.
//!
//! The edit-script engine works on single atoms, so strings are split into
//! characters and byte slices into bytes. Arbitrary slices can be diffed
//! atom by atom with [`atoms`].

use std::hash::Hash;
use std::iter::Copied;
use std::slice::Iter;
use std::str::Chars;

use crate::TokenSource;

/// Returns a [`TokenSource`] that uses the characters of `data` as atoms.
pub fn chars(data: &str) -> CharSource<'_> {
    CharSource(data)
}

/// Returns a [`TokenSource`] that uses the bytes of `data` as atoms.
pub fn bytes(data: &[u8]) -> ByteSource<'_> {
    ByteSource(data)
}

/// Returns a [`TokenSource`] that uses every element of `data` as an atom.
pub fn atoms<T: Hash + Eq>(data: &[T]) -> AtomSource<'_, T> {
    AtomSource(data)
}

/// By default, a character diff is produced for a string
impl<'a> TokenSource for &'a str {
    type Token = char;
    type Tokenizer = Chars<'a>;

    fn tokenize(&self) -> Self::Tokenizer {
        self.chars()
    }

    fn estimate_tokens(&self) -> u32 {
        chars(self).estimate_tokens()
    }
}

/// By default, a byte diff is produced for a byte slice
impl<'a> TokenSource for &'a [u8] {
    type Token = u8;
    type Tokenizer = Copied<Iter<'a, u8>>;

    fn tokenize(&self) -> Self::Tokenizer {
        self.iter().copied()
    }

    fn estimate_tokens(&self) -> u32 {
        self.len() as u32
    }
}

/// A [`TokenSource`] over the characters of a `str`. See [`chars`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CharSource<'a>(&'a str);

impl<'a> TokenSource for CharSource<'a> {
    type Token = char;
    type Tokenizer = Chars<'a>;

    fn tokenize(&self) -> Self::Tokenizer {
        self.0.chars()
    }

    /// The byte length is an upper bound for the number of characters.
    fn estimate_tokens(&self) -> u32 {
        self.0.len() as u32
    }
}

/// A [`TokenSource`] over the bytes of a slice. See [`bytes`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteSource<'a>(&'a [u8]);

impl<'a> TokenSource for ByteSource<'a> {
    type Token = u8;
    type Tokenizer = Copied<Iter<'a, u8>>;

    fn tokenize(&self) -> Self::Tokenizer {
        self.0.iter().copied()
    }

    fn estimate_tokens(&self) -> u32 {
        self.0.len() as u32
    }
}

/// A [`TokenSource`] that borrows every element of a slice. See [`atoms`].
pub struct AtomSource<'a, T>(&'a [T]);

impl<T> Clone for AtomSource<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AtomSource<'_, T> {}

impl<'a, T: Hash + Eq> TokenSource for AtomSource<'a, T> {
    type Token = &'a T;
    type Tokenizer = Iter<'a, T>;

    fn tokenize(&self) -> Self::Tokenizer {
        self.0.iter()
    }

    fn estimate_tokens(&self) -> u32 {
        self.0.len() as u32
    }
}
