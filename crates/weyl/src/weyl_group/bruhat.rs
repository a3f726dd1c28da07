//! Bruhat order by subword deletion.
//!
//! `x < y` iff some reduced word of `x` is a proper subword of the canonical
//! word of `y`. The comparator multiplies the letters of `y` into a scratch
//! copy of `x` and counts deletions; once the scratch is longer than the
//! letters still to come it can no longer reach the identity.

use std::cmp::Ordering;

use super::element::{LeftMultiplication, WeylGroupElem};
use crate::error::WeylError;

impl<'a> WeylGroupElem<'a> {
    /// Strict Bruhat order `self < other`.
    pub fn bruhat_lt(&self, other: &WeylGroupElem<'a>) -> Result<bool, WeylError> {
        self.check_parent(other)?;
        let y = other.word();
        if self.length() >= y.len() {
            return Ok(false);
        }
        if self.is_identity() {
            return Ok(true);
        }
        let mut scratch = self.clone();
        for (k, &l) in y.iter().enumerate() {
            if let LeftMultiplication::Delete { at } = scratch.explain_letter(l) {
                scratch.word.remove(at);
                if scratch.is_identity() {
                    return Ok(true);
                }
            }
            if scratch.length() > y.len() - (k + 1) {
                return Ok(false);
            }
        }
        Ok(false)
    }

    /// `self <= other` in the Bruhat order.
    pub fn bruhat_le(&self, other: &WeylGroupElem<'a>) -> Result<bool, WeylError> {
        self.check_parent(other)?;
        Ok(self == other || self.bruhat_lt(other)?)
    }
}

impl PartialOrd for WeylGroupElem<'_> {
    /// Bruhat order; `None` for incomparable elements or different groups.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.check_parent(other).is_err() {
            return None;
        }
        if self == other {
            Some(Ordering::Equal)
        } else if self.bruhat_lt(other).ok()? {
            Some(Ordering::Less)
        } else if other.bruhat_lt(self).ok()? {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
