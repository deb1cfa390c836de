use std::ops::Range;

use crate::intern::Token;

/// A rectangular sub-problem of the edit graph: `before[start1..start1 + len1]`
/// aligned against `after[start2..start2 + len2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start1: u32,
    pub len1: u32,
    pub start2: u32,
    pub len2: u32,
}

impl Window {
    /// The window covering both sequences completely.
    pub fn full(before: &[Token], after: &[Token]) -> Self {
        Window {
            start1: 0,
            len1: before.len() as u32,
            start2: 0,
            len2: after.len() as u32,
        }
    }

    pub fn end1(&self) -> u32 {
        self.start1 + self.len1
    }

    pub fn end2(&self) -> u32 {
        self.start2 + self.len2
    }

    /// Checks that the window lies within sequences of the given lengths.
    pub fn bounds_check(&self, len1: usize, len2: usize) {
        debug_assert!(
            self.end1() as usize <= len1 && self.end2() as usize <= len2,
            "{:?} exceeds sequences of length {len1} and {len2}",
            self
        );
    }

    pub fn before<'a>(&self, before: &'a [Token]) -> &'a [Token] {
        &before[self.start1 as usize..self.end1() as usize]
    }

    pub fn after<'a>(&self, after: &'a [Token]) -> &'a [Token] {
        &after[self.start2 as usize..self.end2() as usize]
    }

    /// The slots of the vertex path this window resolves, both corners included.
    pub fn vertex_range(&self) -> Range<usize> {
        self.start2 as usize..self.end2() as usize + 1
    }

    /// Splits the window at `before` offset `split1` and `after` offset `split2`
    /// (both relative to the window start).
    pub fn split(self, split1: u32, split2: u32) -> (Window, Window) {
        debug_assert!(split1 <= self.len1);
        debug_assert!(0 < split2 && split2 < self.len2);
        let lo = Window {
            start1: self.start1,
            len1: split1,
            start2: self.start2,
            len2: split2,
        };
        let hi = Window {
            start1: self.start1 + split1,
            len1: self.len1 - split1,
            start2: self.start2 + split2,
            len2: self.len2 - split2,
        };
        (lo, hi)
    }
}
