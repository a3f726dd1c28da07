//! Depth-first walker over the orbit of a dominant weight.

use super::OrbitCfg;
use crate::error::WeylError;
use crate::root_system::WeightLatticeElem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    Walking,
    Exhausted,
}

/// Backtracking walk over `W · seed` that lends its state instead of cloning.
///
/// Orbit points form a tree rooted at the seed: the parent of a non-dominant
/// `μ` is `s_j μ` where `j` is the smallest index with `μ_j < 0`. The walker
/// keeps the current point and the reflections leading to it,
/// `μ = s_{j_m} ⋯ s_{j_1}(seed)`, and steps by pushing or popping one
/// reflection. Each point is visited exactly once.
#[derive(Clone, Debug)]
pub struct OrbitWalker {
    weight: WeightLatticeElem,
    path: Vec<u8>,
    max_length: Option<usize>,
    phase: Phase,
}

impl OrbitWalker {
    pub fn new(seed: WeightLatticeElem) -> Result<Self, WeylError> {
        Self::with_cfg(seed, OrbitCfg::default())
    }

    pub fn with_cfg(seed: WeightLatticeElem, cfg: OrbitCfg) -> Result<Self, WeylError> {
        if !seed.is_dominant() {
            return Err(WeylError::NotDominant);
        }
        Ok(Self {
            weight: seed,
            path: Vec::new(),
            max_length: cfg.max_length,
            phase: Phase::Fresh,
        })
    }

    /// Move to the next orbit point and return it with its path, or `None`
    /// once the orbit is exhausted. The first call yields `(seed, [])`.
    ///
    /// A point whose coordinates leave `i64` ends the walk with
    /// `Unsupported`; later calls return `Ok(None)`.
    pub fn advance(&mut self) -> Result<Option<(&WeightLatticeElem, &[u8])>, WeylError> {
        match self.phase {
            Phase::Exhausted => return Ok(None),
            Phase::Fresh => {
                self.phase = Phase::Walking;
                return Ok(Some((&self.weight, &self.path)));
            }
            Phase::Walking => {}
        }
        let mut ai = self.last_index();
        let mut di = 0;
        loop {
            if !self.at_length_limit() {
                di = self.next_descendant_index(ai, di);
                if di != 0 {
                    break;
                }
            }
            let Some(last) = self.path.pop() else {
                tracing::trace!(max_length = ?self.max_length, "orbit exhausted");
                self.phase = Phase::Exhausted;
                return Ok(None);
            };
            self.reflect(last as usize)?;
            di = last as usize;
            ai = self.last_index();
        }
        self.reflect(di)?;
        self.path.push(di as u8);
        Ok(Some((&self.weight, &self.path)))
    }

    fn reflect(&mut self, j: usize) -> Result<(), WeylError> {
        self.weight.reflect_simple(j).map_err(|err| {
            tracing::debug!(path_len = self.path.len(), %err, "orbit walk stopped");
            self.phase = Phase::Exhausted;
            err
        })
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.path.last().map_or(0, |&l| l as usize)
    }

    #[inline]
    fn at_length_limit(&self) -> bool {
        self.max_length.is_some_and(|m| self.path.len() >= m)
    }

    /// Smallest child index `j > di` of the current point, or 0.
    ///
    /// `ai` is the reflection that produced the current point (0 at the
    /// seed). `s_j` leads to a child iff the reflected point has `j` as its
    /// smallest negative coordinate. Coordinates below `ai` stay put except
    /// where the Cartan entry is non-zero, which narrows the candidates to
    /// the two ranges tested here.
    fn next_descendant_index(&self, ai: usize, di: usize) -> usize {
        let rs = self.weight.root_system();
        let rank = rs.rank();
        if ai == 0 {
            return (di + 1..=rank)
                .find(|&j| self.weight.coeff(j) != 0)
                .unwrap_or(0);
        }
        if let Some(j) = (di + 1..ai).find(|&j| self.weight.coeff(j) != 0) {
            return j;
        }
        for j in ai.max(di) + 1..=rank {
            let c = self.weight.coeff(j);
            if rs.cartan_entry(ai, j) == 0 || c <= 0 {
                continue;
            }
            // coordinates of s_j(μ) on ai..j, in i128 so nothing overflows
            let ok = (ai..j).all(|k| {
                self.weight.coeff(k) as i128 - c as i128 * rs.cartan_entry(k, j) as i128 >= 0
            });
            if ok {
                return j;
            }
        }
        0
    }
}
