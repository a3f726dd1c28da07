//! Weyl groups acting on weights; elements as canonical reduced words.
//!
//! Purpose
//! - Represent elements of a (possibly infinite) crystallographic Coxeter
//!   group by reduced words, kept canonical under left multiplication.
//! - Provide the Bruhat order, reduced-expression enumeration and the
//!   group-level queries built on top (order, longest element, conjugation of
//!   weights into the dominant chamber).
//!
//! Why this design
//! - Left multiplication tracks a single root through the word instead of
//!   multiplying matrices or consulting multiplication tables. The root is an
//!   index into a precomputed [`ReflectionTable`] over the small roots, which
//!   are finite in number even for infinite groups, so no coordinate ever
//!   grows with the length of a word.
//! - Elements borrow their group (`&'a WeylGroup`), so scratch copies are
//!   plain `Vec<u8>` clones and the group stays immutable after construction.
//! - The group order is computed as a product of orbit sizes of fundamental
//!   weights over a flag of parabolic subgroups; nothing ever enumerates `W`.
//!
//! Code cross-refs: `crate::root_system::{RootSystem, WeightLatticeElem}`,
//! `crate::orbit::{OrbitWalker, WeylOrbitPairs}`.

mod bruhat;
mod element;
mod reduced;
mod table;

use std::sync::Arc;

use rand::Rng;

use crate::error::WeylError;
use crate::orbit::{OrbitCfg, OrbitWalker, WeylOrbitPairs};
use crate::root_system::{RootSystem, WeightLatticeElem};

pub use element::{LeftMultiplication, WeylGroupElem};
pub use reduced::ReducedExpressions;
pub use table::ReflectionTable;

/// Weyl group of a root system.
#[derive(Clone, Debug)]
pub struct WeylGroup {
    root_system: Arc<RootSystem>,
    table: ReflectionTable,
}

impl WeylGroup {
    pub fn new(root_system: Arc<RootSystem>) -> Self {
        let table = ReflectionTable::new(&root_system);
        tracing::debug!(
            rank = root_system.rank(),
            finite = root_system.is_finite(),
            small_roots = table.number_of_roots(),
            "weyl group"
        );
        Self { root_system, table }
    }

    /// Weyl group for a Cartan label such as `"E6"` or `"A1xA1"`.
    pub fn from_label(label: &str) -> Result<Self, WeylError> {
        Ok(Self::new(Arc::new(RootSystem::from_label(label)?)))
    }

    #[inline]
    pub fn root_system(&self) -> &Arc<RootSystem> {
        &self.root_system
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.root_system.rank()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.root_system.is_finite()
    }

    #[inline]
    pub(crate) fn table(&self) -> &ReflectionTable {
        &self.table
    }

    /// Generator index `i` as a word letter.
    pub(crate) fn letter(&self, i: usize) -> Result<u8, WeylError> {
        self.root_system.check_generator(i)?;
        Ok(i as u8)
    }

    pub fn identity(&self) -> WeylGroupElem<'_> {
        WeylGroupElem::from_word(self, Vec::new())
    }

    /// Simple reflection `s_i` (1-based).
    pub fn generator(&self, i: usize) -> Result<WeylGroupElem<'_>, WeylError> {
        let letter = self.letter(i)?;
        Ok(WeylGroupElem::from_word(self, vec![letter]))
    }

    pub fn generators(&self) -> Vec<WeylGroupElem<'_>> {
        (1..=self.rank() as u8)
            .map(|l| WeylGroupElem::from_word(self, vec![l]))
            .collect()
    }

    /// Element with the given word.
    ///
    /// With `normalize` the word may be arbitrary and is rebuilt by left
    /// multiplication; without it the caller asserts the word is already
    /// reduced and canonical. Letters are validated either way.
    pub fn element(&self, word: &[u8], normalize: bool) -> Result<WeylGroupElem<'_>, WeylError> {
        for &l in word {
            self.letter(l as usize)?;
        }
        if !normalize {
            return Ok(WeylGroupElem::from_word(self, word.to_vec()));
        }
        let mut out = self.identity();
        for &l in word.iter().rev() {
            out.lmul_letter(l);
        }
        Ok(out)
    }

    /// `|W|` as the product of `|W_k · ω_k|` over the parabolic flag
    /// `W_1 ⊂ W_2 ⊂ … ⊂ W_n = W` on leading nodes; `W_{k-1}` is the
    /// stabilizer of `ω_k` in `W_k`.
    pub fn order(&self) -> Result<u128, WeylError> {
        if !self.is_finite() {
            return Err(WeylError::InfiniteOrder);
        }
        let mut order: u128 = 1;
        for k in (1..=self.rank()).rev() {
            let parabolic = Arc::new(self.root_system.leading_parabolic(k)?);
            let omega = parabolic.fundamental_weight(k)?;
            let mut walker = OrbitWalker::new(omega)?;
            let mut size: u128 = 0;
            while walker.advance()?.is_some() {
                size += 1;
            }
            tracing::trace!(k, size = %size, "fundamental orbit");
            order = order
                .checked_mul(size)
                .ok_or_else(|| WeylError::unsupported("group order overflows u128"))?;
        }
        Ok(order)
    }

    /// Longest element `w_0`, the unique element with `w_0 · ρ = −ρ`.
    pub fn longest_element(&self) -> Result<WeylGroupElem<'_>, WeylError> {
        if !self.is_finite() {
            return Err(WeylError::InfiniteOrder);
        }
        let mut rho = self.root_system.weyl_vector();
        let mut out = self.identity();
        while let Some(k) = rho.coefficients().iter().position(|&c| c > 0) {
            rho.reflect_simple(k + 1)?;
            out.lmul_letter(k as u8 + 1);
        }
        Ok(out)
    }

    /// Dominant representative `λ⁺` of the orbit of `weight` and an element
    /// `g` with `g · weight = λ⁺`.
    pub fn conjugate_dominant_weight_with_elem(
        &self,
        weight: &WeightLatticeElem,
    ) -> Result<(WeightLatticeElem, WeylGroupElem<'_>), WeylError> {
        if !weight.same_root_system(&self.root_system) {
            return Err(WeylError::MismatchedParent);
        }
        let (dominant, letters) = weight.conjugate_dominant()?;
        let mut g = self.identity();
        for &l in &letters {
            g.lmul_letter(l);
        }
        Ok((dominant, g))
    }

    /// Product of `length` uniformly drawn generators; the result may be
    /// shorter than `length` after cancellation.
    pub fn random_element<R: Rng>(&self, rng: &mut R, length: usize) -> WeylGroupElem<'_> {
        let mut out = self.identity();
        if self.rank() == 0 {
            return out;
        }
        for _ in 0..length {
            let l = rng.gen_range(1..=self.rank()) as u8;
            out.lmul_letter(l);
        }
        out
    }

    /// Orbit of a dominant weight as `(μ, g)` pairs with `g · μ = seed`.
    pub fn orbit_pairs(
        &self,
        seed: &WeightLatticeElem,
        cfg: OrbitCfg,
    ) -> Result<WeylOrbitPairs<'_>, WeylError> {
        if !seed.same_root_system(&self.root_system) {
            return Err(WeylError::MismatchedParent);
        }
        WeylOrbitPairs::new(self, seed.clone(), cfg)
    }
}
