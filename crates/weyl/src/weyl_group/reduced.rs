//! Lazy enumeration of all reduced expressions of an element.
//!
//! Purpose
//! - Produce every reduced word of `x` (or one per commutation class) without
//!   materializing them, as a restartable iterator.
//!
//! Why this design
//! - The word is filled from the right. With `u` the still-unfixed prefix, the
//!   state carries `u^{-1}` as a canonical word; letter `s` may end `u` iff
//!   `s · u^{-1}` is shorter, which is the deletion case of the small-root
//!   walk. Fixing or un-fixing a letter is one left multiplication, so
//!   backtracking costs the same as descending, and nothing overflows on
//!   infinite groups the way a tracked weight `u^{-1}(ρ)` would.
//! - Candidates are tried in increasing order, hence words come out in
//!   reverse-lexicographic order and the first one is the canonical word.
//! - Commutation classes: a candidate `s` is skipped when a later letter
//!   `a < s` could be commuted next to it. What remains is exactly one word
//!   per class.
//!
//! Code cross-refs: `WeylGroupElem::word`, `RootSystem::commutes`.

use super::element::{LeftMultiplication, WeylGroupElem};
use crate::root_system::RootSystem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// Iterator over reduced words of a fixed element, see
/// [`WeylGroupElem::reduced_expressions`].
#[derive(Clone, Debug)]
pub struct ReducedExpressions<'a> {
    root_system: &'a RootSystem,
    up_to_commutation: bool,
    word: Vec<u8>,
    // u^{-1} for the unfixed prefix u
    prefix_inv: WeylGroupElem<'a>,
    // number of fixed letters, counted from the right
    depth: usize,
    // may reach rank + 1
    next_candidate: usize,
    phase: Phase,
}

impl<'a> WeylGroupElem<'a> {
    /// All reduced words of `self`, canonical word first.
    ///
    /// With `up_to_commutation`, yields one word per class of words related by
    /// swapping adjacent commuting letters.
    pub fn reduced_expressions(&self, up_to_commutation: bool) -> ReducedExpressions<'a> {
        ReducedExpressions {
            root_system: self.parent.root_system().as_ref(),
            up_to_commutation,
            word: self.word.clone(),
            prefix_inv: self.inv(),
            depth: 0,
            next_candidate: 1,
            phase: Phase::Fresh,
        }
    }
}

impl ReducedExpressions<'_> {
    /// Index of the rightmost free letter.
    #[inline]
    fn slot(&self) -> usize {
        self.word.len() - 1 - self.depth
    }

    /// Un-fix the leftmost fixed letter. `false` when nothing is fixed.
    fn backtrack(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        let l = self.word[self.slot()];
        self.prefix_inv.lmul_letter(l);
        self.next_candidate = l as usize + 1;
        true
    }

    fn descend(&mut self, s: u8) {
        let pos = self.slot();
        self.word[pos] = s;
        self.prefix_inv.lmul_letter(s);
        self.depth += 1;
        self.next_candidate = 1;
    }

    fn find_candidate(&self) -> Option<u8> {
        let pos = self.slot();
        let rank = self.root_system.rank();
        (self.next_candidate..=rank)
            .map(|s| s as u8)
            .find(|&s| {
                self.is_right_descent(s)
                    && !(self.up_to_commutation && self.violates_commutation(s, pos))
            })
    }

    /// `u · s_s` is shorter than the unfixed prefix `u`.
    #[inline]
    fn is_right_descent(&self, s: u8) -> bool {
        matches!(
            self.prefix_inv.explain_letter(s),
            LeftMultiplication::Delete { .. }
        )
    }

    /// Some fixed letter `a < s` right of `pos` commutes with `s` and with
    /// everything between them.
    fn violates_commutation(&self, s: u8, pos: usize) -> bool {
        let suffix = &self.word[pos + 1..];
        suffix.iter().enumerate().any(|(q, &a)| {
            a < s
                && self.root_system.commutes(a, s)
                && suffix[..q].iter().all(|&b| self.root_system.commutes(a, b))
        })
    }

    /// Fill every free position; `false` when the search space is exhausted.
    fn complete(&mut self) -> bool {
        while self.depth < self.word.len() {
            match self.find_candidate() {
                Some(s) => self.descend(s),
                None => {
                    if !self.backtrack() {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Iterator for ReducedExpressions<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        match self.phase {
            Phase::Done => return None,
            Phase::Fresh => self.phase = Phase::Running,
            Phase::Running => {
                if !self.backtrack() {
                    self.phase = Phase::Done;
                    return None;
                }
            }
        }
        if self.complete() {
            Some(self.word.clone())
        } else {
            self.phase = Phase::Done;
            None
        }
    }
}
