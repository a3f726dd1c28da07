//! Group elements as canonical reduced words and the left-multiplication engine.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::table::ReflectionTable;
use super::WeylGroup;
use crate::error::WeylError;
use crate::root_system::WeightLatticeElem;

/// Element of a Weyl group, stored as a reduced word in canonical form.
///
/// The word `[a, b, c]` denotes `s_a · s_b · s_c`. Among all reduced words of
/// the element, the stored one has the lexicographically smallest reverse;
/// equal elements therefore have identical words.
#[derive(Clone)]
pub struct WeylGroupElem<'a> {
    pub(super) parent: &'a WeylGroup,
    pub(super) word: Vec<u8>,
}

/// Effect of `s_i · w` on the word of `w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftMultiplication {
    /// Put `letter` before position `at`.
    Insert { at: usize, letter: u8 },
    /// Remove the letter at position `at`.
    Delete { at: usize },
}

impl<'a> WeylGroupElem<'a> {
    pub(super) fn from_word(parent: &'a WeylGroup, word: Vec<u8>) -> Self {
        Self { parent, word }
    }

    #[inline]
    pub fn parent(&self) -> &'a WeylGroup {
        self.parent
    }

    #[inline]
    pub fn word(&self) -> &[u8] {
        &self.word
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.word.is_empty()
    }

    /// Describe how the word changes under `s_i · self` without touching it.
    pub fn explain_lmul(&self, i: usize) -> Result<LeftMultiplication, WeylError> {
        let letter = self.parent.letter(i)?;
        Ok(self.explain_letter(letter))
    }

    #[inline]
    pub(crate) fn explain_letter(&self, i: u8) -> LeftMultiplication {
        explain_by_table(self.parent.table(), &self.word, i)
    }

    fn apply(&mut self, op: LeftMultiplication) {
        match op {
            LeftMultiplication::Insert { at, letter } => self.word.insert(at, letter),
            LeftMultiplication::Delete { at } => {
                self.word.remove(at);
            }
        }
    }

    /// Replace `self` by `s_i · self`. On error nothing changes.
    pub fn lmul(&mut self, i: usize) -> Result<&mut Self, WeylError> {
        let letter = self.parent.letter(i)?;
        self.lmul_letter(letter);
        Ok(self)
    }

    /// `lmul` for a letter already known to be in range.
    #[inline]
    pub(crate) fn lmul_letter(&mut self, i: u8) {
        let op = self.explain_letter(i);
        self.apply(op);
    }

    pub(crate) fn check_parent(&self, other: &WeylGroupElem<'_>) -> Result<(), WeylError> {
        if std::ptr::eq(self.parent, other.parent) {
            Ok(())
        } else {
            Err(WeylError::MismatchedParent)
        }
    }

    /// Product `self · other`.
    pub fn mul(&self, other: &WeylGroupElem<'a>) -> Result<Self, WeylError> {
        self.check_parent(other)?;
        let mut out = other.clone();
        for &l in self.word.iter().rev() {
            out.lmul_letter(l);
        }
        Ok(out)
    }

    pub fn inv(&self) -> Self {
        let mut out = self.parent.identity();
        for &l in &self.word {
            out.lmul_letter(l);
        }
        out
    }

    /// `self^n` by repeated multiplication; costs `O(|n| · length)` lmul steps.
    pub fn pow(&self, n: i64) -> Self {
        if n < 0 {
            return self.pow_unsigned(n.unsigned_abs()).inv();
        }
        self.pow_unsigned(n as u64)
    }

    fn pow_unsigned(&self, n: u64) -> Self {
        let mut out = self.parent.identity();
        for _ in 0..n {
            for &l in self.word.iter().rev() {
                out.lmul_letter(l);
            }
        }
        out
    }

    /// Smallest `k > 0` with `self^k = 1`.
    pub fn order(&self) -> Result<u64, WeylError> {
        if !self.parent.is_finite() {
            return Err(WeylError::InfiniteOrder);
        }
        let mut acc = self.clone();
        let mut k = 1;
        while !acc.is_identity() {
            for &l in self.word.iter().rev() {
                acc.lmul_letter(l);
            }
            k += 1;
        }
        Ok(k)
    }

    /// `self · λ` as a new weight.
    pub fn act(&self, weight: &WeightLatticeElem) -> Result<WeightLatticeElem, WeylError> {
        let mut out = weight.clone();
        self.act_in_place(&mut out)?;
        Ok(out)
    }

    /// Apply `self` to `weight`, reflecting by the letters right to left.
    /// On error `weight` is unchanged.
    pub fn act_in_place(&self, weight: &mut WeightLatticeElem) -> Result<(), WeylError> {
        if !weight.same_root_system(self.parent.root_system()) {
            return Err(WeylError::MismatchedParent);
        }
        let mut image = weight.clone();
        for &l in self.word.iter().rev() {
            image.reflect_simple(l as usize)?;
        }
        *weight = image;
        Ok(())
    }
}

/// Walk `word` front to back tracking the root `w_{<s}^{-1}(α_i)`.
///
/// Hitting the simple root of the current letter means `s_i` cancels against
/// it. Otherwise the last position where the tracked root became a smaller
/// simple root is where `s_i` commutes to in canonical form. Once the root
/// leaves the small roots it can never become simple again, so the walk ends.
fn explain_by_table(table: &ReflectionTable, word: &[u8], i: u8) -> LeftMultiplication {
    let mut insert_at = 0;
    let mut letter = i;
    let mut root = i as u32;
    for (s, &x) in word.iter().enumerate() {
        if root == x as u32 {
            return LeftMultiplication::Delete { at: s };
        }
        root = table.reflect(x, root);
        if root == ReflectionTable::NEGATIVE {
            break;
        }
        if root < x as u32 {
            insert_at = s + 1;
            letter = root as u8;
        }
    }
    LeftMultiplication::Insert {
        at: insert_at,
        letter,
    }
}

impl PartialEq for WeylGroupElem<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.parent, other.parent) && self.word == other.word
    }
}

impl Eq for WeylGroupElem<'_> {}

impl Hash for WeylGroupElem<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.parent, state);
        self.word.hash(state);
    }
}

impl fmt::Display for WeylGroupElem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.word.is_empty() {
            return write!(f, "id");
        }
        for (k, l) in self.word.iter().enumerate() {
            if k > 0 {
                write!(f, " * ")?;
            }
            write!(f, "s{l}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for WeylGroupElem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeylGroupElem").field(&self.word).finish()
    }
}
