//! Orbits of weights under the Weyl group.
//!
//! Purpose
//! - Enumerate `W · λ` lazily, without building `W` or storing the orbit.
//!
//! Why this design
//! - [`OrbitWalker`] is the explicit-stack state machine and lends its
//!   current state; the wrappers here turn it into ordinary iterators that
//!   hand out owned values ([`WeylOrbit`] for weights, [`WeylOrbitPairs`] for
//!   weights with the group element reaching them).
//! - Orbits of infinite groups are infinite; [`OrbitCfg::max_length`] bounds
//!   the walk by the length of the element. Their points may still outgrow
//!   `i64`, so items are `Result`s and the first error ends the iteration.
//!
//! Code cross-refs: `crate::weyl_group::WeylGroup::orbit_pairs`,
//! `crate::root_system::WeightLatticeElem::conjugate_dominant`.

mod walker;

use std::sync::Arc;

use crate::error::WeylError;
use crate::root_system::{RootSystem, WeightLatticeElem};
use crate::weyl_group::{WeylGroup, WeylGroupElem};

pub use walker::OrbitWalker;

/// Walk configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrbitCfg {
    /// Visit only points `g⁻¹ · λ` with `g` of length at most this.
    /// `None` walks the whole orbit (which must then be finite).
    pub max_length: Option<usize>,
}

impl OrbitCfg {
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }
}

/// Iterator over the weights of an orbit; every item is an independent copy.
#[derive(Clone, Debug)]
pub struct WeylOrbit {
    walker: OrbitWalker,
}

impl Iterator for WeylOrbit {
    type Item = Result<WeightLatticeElem, WeylError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walker
            .advance()
            .transpose()
            .map(|step| step.map(|(wt, _)| wt.clone()))
    }
}

/// Orbit of `weight`, starting from its dominant representative.
pub fn weyl_orbit(weight: &WeightLatticeElem) -> Result<WeylOrbit, WeylError> {
    weyl_orbit_with_cfg(weight, OrbitCfg::default())
}

pub fn weyl_orbit_with_cfg(
    weight: &WeightLatticeElem,
    cfg: OrbitCfg,
) -> Result<WeylOrbit, WeylError> {
    let seed = if weight.is_dominant() {
        weight.clone()
    } else {
        weight.conjugate_dominant()?.0
    };
    Ok(WeylOrbit {
        walker: OrbitWalker::with_cfg(seed, cfg)?,
    })
}

/// Orbit of the weight with fundamental-weight coordinates `coords`.
pub fn weyl_orbit_from_coords(
    root_system: &Arc<RootSystem>,
    coords: Vec<i64>,
) -> Result<WeylOrbit, WeylError> {
    weyl_orbit(&WeightLatticeElem::new(root_system, coords)?)
}

/// Iterator over `(μ, g)` with `g · μ = seed`, `g` in canonical form.
#[derive(Clone, Debug)]
pub struct WeylOrbitPairs<'a> {
    group: &'a WeylGroup,
    walker: OrbitWalker,
}

impl<'a> WeylOrbitPairs<'a> {
    pub(crate) fn new(
        group: &'a WeylGroup,
        seed: WeightLatticeElem,
        cfg: OrbitCfg,
    ) -> Result<Self, WeylError> {
        Ok(Self {
            group,
            walker: OrbitWalker::with_cfg(seed, cfg)?,
        })
    }
}

impl<'a> Iterator for WeylOrbitPairs<'a> {
    type Item = Result<(WeightLatticeElem, WeylGroupElem<'a>), WeylError>;

    fn next(&mut self) -> Option<Self::Item> {
        let group = self.group;
        self.walker.advance().transpose().map(|step| {
            let (wt, path) = step?;
            let mut g = group.identity();
            for &l in path.iter().rev() {
                g.lmul_letter(l);
            }
            Ok((wt.clone(), g))
        })
    }
}
