//! Weights in fundamental-weight coordinates, tied to their root system.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use nalgebra::DVector;

use super::RootSystem;
use crate::error::WeylError;

/// Conjugating a weight of an infinite root system may not terminate (weights
/// outside the Tits cone); give up after this many reflections.
const CONJUGATION_STEP_LIMIT: usize = 100_000;

/// Element of the weight lattice.
///
/// Equality requires the same root system (`Arc` identity) and equal
/// coordinates.
#[derive(Clone)]
pub struct WeightLatticeElem {
    root_system: Arc<RootSystem>,
    coords: DVector<i64>,
}

impl WeightLatticeElem {
    /// Weight with the given fundamental-weight coordinates.
    pub fn new(root_system: &Arc<RootSystem>, coords: Vec<i64>) -> Result<Self, WeylError> {
        if coords.len() != root_system.rank() {
            return Err(WeylError::DimensionMismatch {
                expected: root_system.rank(),
                found: coords.len(),
            });
        }
        Ok(Self::from_coords(
            Arc::clone(root_system),
            DVector::from_vec(coords),
        ))
    }

    pub(crate) fn from_coords(root_system: Arc<RootSystem>, coords: DVector<i64>) -> Self {
        Self {
            root_system,
            coords,
        }
    }

    pub fn zero(root_system: &Arc<RootSystem>) -> Self {
        Self::from_coords(Arc::clone(root_system), DVector::zeros(root_system.rank()))
    }

    #[inline]
    pub fn root_system(&self) -> &Arc<RootSystem> {
        &self.root_system
    }

    #[inline]
    pub fn coefficients(&self) -> &DVector<i64> {
        &self.coords
    }

    /// Coefficient of `ω_i` (1-based). Panics when `i` is out of range.
    #[inline]
    pub fn coeff(&self, i: usize) -> i64 {
        self.coords[i - 1]
    }

    /// Coefficient of `ω_i`, or `None` unless `1 <= i <= rank`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<i64> {
        i.checked_sub(1).and_then(|k| self.coords.get(k)).copied()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(|&c| c == 0)
    }

    #[inline]
    pub fn is_dominant(&self) -> bool {
        self.coords.iter().all(|&c| c >= 0)
    }

    pub(crate) fn same_root_system(&self, root_system: &Arc<RootSystem>) -> bool {
        Arc::ptr_eq(&self.root_system, root_system)
    }

    /// Reflect in place by the simple reflection `s_i`.
    ///
    /// Fails with `Unsupported`, leaving `self` unchanged, when a coordinate
    /// of the image does not fit in `i64`.
    pub fn reflect(&mut self, i: usize) -> Result<&mut Self, WeylError> {
        self.root_system.check_generator(i)?;
        self.reflect_simple(i)?;
        Ok(self)
    }

    /// `s_i(self)` as a new weight.
    pub fn reflected(&self, i: usize) -> Result<Self, WeylError> {
        let mut out = self.clone();
        out.reflect(i)?;
        Ok(out)
    }

    /// Reflect without validating `i`; callers guarantee `1 <= i <= rank`.
    #[inline]
    pub(crate) fn reflect_simple(&mut self, i: usize) -> Result<(), WeylError> {
        self.root_system.reflect_weight_coords(&mut self.coords, i)
    }

    /// Dominant weight in the orbit of `self`, together with the letters
    /// `j_1, …, j_m` such that `s_{j_m} ⋯ s_{j_1}(self)` is that weight.
    ///
    /// Always reflects at the first negative coordinate.
    pub fn conjugate_dominant(&self) -> Result<(Self, Vec<u8>), WeylError> {
        let mut wt = self.clone();
        let mut letters = Vec::new();
        while let Some(k) = wt.coords.iter().position(|&c| c < 0) {
            if !self.root_system.is_finite() && letters.len() >= CONJUGATION_STEP_LIMIT {
                return Err(WeylError::unsupported(format!(
                    "no dominant conjugate found within {CONJUGATION_STEP_LIMIT} reflections"
                )));
            }
            wt.reflect_simple(k + 1)?;
            letters.push((k + 1) as u8);
        }
        Ok((wt, letters))
    }
}

impl PartialEq for WeightLatticeElem {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root_system, &other.root_system) && self.coords == other.coords
    }
}

impl Eq for WeightLatticeElem {}

impl Hash for WeightLatticeElem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.as_slice().hash(state);
    }
}

impl fmt::Debug for WeightLatticeElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeightLatticeElem")
            .field(&self.coords.as_slice())
            .finish()
    }
}
