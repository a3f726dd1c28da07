//! Root systems given by a generalized Cartan matrix.
//!
//! Purpose
//! - Supply exactly what the Weyl group core consumes: rank, Cartan entries,
//!   reflections of weights and roots, the Weyl vector, a finiteness flag and
//!   the small roots (all positive roots for finite types).
//! - Everything else about root systems (classification, root strings,
//!   weight multiplicities) is deliberately absent.
//!
//! Conventions
//! - `cartan[(i, j)] = <α_i^∨, α_j>`; simple root `α_j` in the basis of
//!   fundamental weights is column `j`.
//! - Weights use fundamental-weight coordinates, roots use simple-root
//!   coordinates. Public generator indices are 1-based.
//!
//! Code cross-refs: `cartan::{cartan_matrix, cartan_matrix_from_label}`,
//! `weight::WeightLatticeElem`, `crate::weyl_group::ReflectionTable`.

mod cartan;
mod weight;

use std::collections::HashSet;
use std::sync::Arc;

use nalgebra::{DMatrix, DVector};

use crate::error::WeylError;

pub use cartan::{block_diagonal, cartan_matrix, cartan_matrix_from_label, CartanType};
pub use weight::WeightLatticeElem;

/// Words store letters as `u8`.
pub const MAX_RANK: usize = u8::MAX as usize;

/// Root system of a (possibly infinite) crystallographic Coxeter group.
///
/// Invariants:
/// - `cartan` is a generalized Cartan matrix of size `rank <= MAX_RANK`.
/// - `small_roots` starts with the `rank` simple roots in order; for finite
///   types it holds every positive root.
#[derive(Clone, Debug)]
pub struct RootSystem {
    cartan: DMatrix<i64>,
    finite: bool,
    small_roots: Vec<DVector<i64>>,
}

impl RootSystem {
    /// Validate `cartan` and precompute finiteness and small roots.
    pub fn new(cartan: DMatrix<i64>) -> Result<Self, WeylError> {
        validate_cartan(&cartan)?;
        let finite = is_finite_type(&cartan);
        let small_roots = enumerate_small_roots(&cartan);
        Ok(Self {
            cartan,
            finite,
            small_roots,
        })
    }

    /// Root system for a label such as `"G2"` or `"A2xB3"`.
    pub fn from_label(label: &str) -> Result<Self, WeylError> {
        Self::new(cartan_matrix_from_label(label)?)
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.cartan.nrows()
    }

    #[inline]
    pub fn cartan_matrix(&self) -> &DMatrix<i64> {
        &self.cartan
    }

    /// `<α_i^∨, α_j>` for 1-based `i`, `j`.
    #[inline]
    pub fn cartan_entry(&self, i: usize, j: usize) -> i64 {
        self.cartan[(i - 1, j - 1)]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.finite
    }

    /// Positive roots in simple-root coordinates; `None` for infinite types.
    pub fn positive_roots(&self) -> Option<&[DVector<i64>]> {
        self.finite.then_some(self.small_roots.as_slice())
    }

    /// Positive roots that dominate no other positive root, simple roots
    /// first. Always finite, even when the group is not.
    #[inline]
    pub fn small_roots(&self) -> &[DVector<i64>] {
        &self.small_roots
    }

    pub fn number_of_positive_roots(&self) -> Option<usize> {
        self.positive_roots().map(<[_]>::len)
    }

    /// Fail with `InvalidGenerator` unless `1 <= i <= rank`.
    pub fn check_generator(&self, i: usize) -> Result<(), WeylError> {
        if (1..=self.rank()).contains(&i) {
            Ok(())
        } else {
            Err(WeylError::InvalidGenerator {
                index: i,
                rank: self.rank(),
            })
        }
    }

    /// Simple reflections `s_a`, `s_b` commute iff the Cartan entry vanishes.
    #[inline]
    pub fn commutes(&self, a: u8, b: u8) -> bool {
        self.cartan[(a as usize - 1, b as usize - 1)] == 0
    }

    /// Weyl vector ρ = ω_1 + … + ω_n.
    pub fn weyl_vector(self: &Arc<Self>) -> WeightLatticeElem {
        WeightLatticeElem::from_coords(Arc::clone(self), DVector::from_element(self.rank(), 1))
    }

    /// Fundamental weight `ω_i` (1-based).
    pub fn fundamental_weight(self: &Arc<Self>, i: usize) -> Result<WeightLatticeElem, WeylError> {
        self.check_generator(i)?;
        let mut coords = DVector::zeros(self.rank());
        coords[i - 1] = 1;
        Ok(WeightLatticeElem::from_coords(Arc::clone(self), coords))
    }

    /// Root system of the parabolic subgroup on nodes `1..=k`.
    pub fn leading_parabolic(&self, k: usize) -> Result<Self, WeylError> {
        if k > self.rank() {
            return Err(WeylError::unsupported(format!(
                "parabolic of rank {k} inside rank {}",
                self.rank()
            )));
        }
        Self::new(self.cartan.view((0, 0), (k, k)).into_owned())
    }

    /// `s_i` on fundamental-weight coordinates: `λ ↦ λ − λ_i α_i`.
    /// Fails, leaving `coords` untouched, when the image leaves `i64`.
    #[inline]
    pub(crate) fn reflect_weight_coords(
        &self,
        coords: &mut DVector<i64>,
        i: usize,
    ) -> Result<(), WeylError> {
        reflect_weight(&self.cartan, coords, i - 1)
    }

    /// `s_i` on simple-root coordinates: `β ↦ β − <α_i^∨, β> α_i`.
    #[inline]
    pub(crate) fn reflect_root_coords(&self, coords: &mut DVector<i64>, i: usize) {
        reflect_root(&self.cartan, coords, i - 1);
    }
}

#[inline]
fn reflect_weight(
    cartan: &DMatrix<i64>,
    coords: &mut DVector<i64>,
    i: usize,
) -> Result<(), WeylError> {
    let c = coords[i] as i128;
    if c == 0 {
        return Ok(());
    }
    // products of two i64 always fit in i128
    let image = |x: i64, a: i64| x as i128 - c * a as i128;
    let n = coords.len();
    if let Some(k) = (0..n).find(|&k| i64::try_from(image(coords[k], cartan[(k, i)])).is_err()) {
        return Err(WeylError::unsupported(format!(
            "coordinate {} of s_{} applied to the weight overflows i64",
            k + 1,
            i + 1
        )));
    }
    for k in 0..n {
        coords[k] = image(coords[k], cartan[(k, i)]) as i64;
    }
    Ok(())
}

#[inline]
fn reflect_root(cartan: &DMatrix<i64>, coords: &mut DVector<i64>, i: usize) {
    let pairing: i64 = (0..coords.len()).map(|k| cartan[(i, k)] * coords[k]).sum();
    coords[i] -= pairing;
}

fn validate_cartan(cartan: &DMatrix<i64>) -> Result<(), WeylError> {
    let n = cartan.nrows();
    if cartan.ncols() != n {
        return Err(WeylError::invalid_cartan(format!(
            "matrix is {}x{}, expected square",
            n,
            cartan.ncols()
        )));
    }
    if n > MAX_RANK {
        return Err(WeylError::unsupported(format!(
            "rank {n} exceeds {MAX_RANK}"
        )));
    }
    for i in 0..n {
        if cartan[(i, i)] != 2 {
            return Err(WeylError::invalid_cartan(format!(
                "diagonal entry ({i}, {i}) is {}",
                cartan[(i, i)]
            )));
        }
        for j in 0..n {
            if i == j {
                continue;
            }
            if cartan[(i, j)] > 0 {
                return Err(WeylError::invalid_cartan(format!(
                    "off-diagonal entry ({i}, {j}) is positive"
                )));
            }
            if (cartan[(i, j)] == 0) != (cartan[(j, i)] == 0) {
                return Err(WeylError::invalid_cartan(format!(
                    "entries ({i}, {j}) and ({j}, {i}) must vanish together"
                )));
            }
        }
    }
    Ok(())
}

/// Finite type iff symmetrizable with all leading principal minors positive.
///
/// For `D A = B` symmetric with `D` positive diagonal, the leading minors of
/// `B` are those of `A` times positive factors, so Sylvester's criterion on
/// `B` reduces to determinants of `A`. Minors are integers; `0.5` is a safe cut.
/// Elimination without pivoting yields all of them in one pass: the running
/// product of pivots is the current leading minor.
fn is_finite_type(cartan: &DMatrix<i64>) -> bool {
    if !is_symmetrizable(cartan) {
        return false;
    }
    let mut a = cartan.map(|x| x as f64);
    let n = a.nrows();
    let mut minor = 1.0;
    for k in 0..n {
        let pivot = a[(k, k)];
        minor *= pivot;
        if minor <= 0.5 {
            return false;
        }
        for r in k + 1..n {
            let f = a[(r, k)] / pivot;
            if f == 0.0 {
                continue;
            }
            for c in k..n {
                let delta = f * a[(k, c)];
                a[(r, c)] -= delta;
            }
        }
    }
    true
}

fn is_symmetrizable(cartan: &DMatrix<i64>) -> bool {
    let n = cartan.nrows();
    let mut d: Vec<Option<f64>> = vec![None; n];
    for start in 0..n {
        if d[start].is_some() {
            continue;
        }
        d[start] = Some(1.0);
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            let Some(di) = d[i] else { continue };
            for j in 0..n {
                if i == j || cartan[(i, j)] == 0 {
                    continue;
                }
                // d_i a_ij = d_j a_ji
                let dj = di * cartan[(i, j)] as f64 / cartan[(j, i)] as f64;
                match d[j] {
                    None => {
                        d[j] = Some(dj);
                        stack.push(j);
                    }
                    Some(existing) => {
                        if (existing - dj).abs() > 1e-9 * existing.abs().max(1.0) {
                            return false;
                        }
                    }
                }
            }
        }
    }
    true
}

/// Breadth-first closure of the simple roots under simple reflections,
/// keeping an image `s_i β` only while it stays small.
///
/// For small `β ≠ α_i`, the positive root `s_i β` fails to be small exactly
/// when `s_i` and `s_β` generate an infinite dihedral group with `β` on the
/// far side of `α_i`: `<α_i^∨, β> < 0` and `<α_i^∨, β><β^∨, α_i> >= 4`.
/// The set of small roots is finite for every Coxeter group. Coroots ride
/// along to evaluate `<β^∨, α_i>`. In finite types nothing is ever cut, and
/// since every non-simple positive root reflects down to a lower one, the
/// closure is then the whole positive system.
fn enumerate_small_roots(cartan: &DMatrix<i64>) -> Vec<DVector<i64>> {
    let n = cartan.nrows();
    let unit = |i: usize| {
        let mut e = DVector::zeros(n);
        e[i] = 1;
        e
    };
    let mut roots: Vec<DVector<i64>> = (0..n).map(unit).collect();
    let mut coroots = roots.clone();
    let mut seen: HashSet<Vec<i64>> = roots.iter().map(|r| r.as_slice().to_vec()).collect();
    let mut k = 0;
    while k < roots.len() {
        for i in 0..n {
            // s_i α_i is negative
            if k == i {
                continue;
            }
            let p: i64 = (0..n).map(|j| cartan[(i, j)] * roots[k][j]).sum();
            let q: i64 = (0..n).map(|j| coroots[k][j] * cartan[(j, i)]).sum();
            if p == 0 || (p < 0 && p * q >= 4) {
                continue;
            }
            let mut beta = roots[k].clone();
            beta[i] -= p;
            if seen.insert(beta.as_slice().to_vec()) {
                let mut beta_check = coroots[k].clone();
                beta_check[i] -= q;
                roots.push(beta);
                coroots.push(beta_check);
            }
        }
        k += 1;
    }
    roots
}

#[cfg(test)]
mod tests;
