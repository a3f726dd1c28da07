//! Weyl groups as canonical reduced words.
//!
//! Elements of crystallographic Coxeter groups are stored as reduced words
//! in a canonical normal form that left multiplication maintains in place.
//! On top of that sit the Bruhat order, enumeration of reduced expressions
//! and lazy orbits of dominant weights.
//!
//! Layout
//! - `root_system`: generalized Cartan matrices, weights, small and positive roots.
//! - `weyl_group`: elements, the left-multiplication engine, Bruhat order,
//!   reduced expressions, group-level queries.
//! - `orbit`: depth-first orbit walker and the iterators wrapping it.
//!
//! Conventions
//! - Generator indices are 1-based; a word `[a, b]` means `s_a · s_b`.
//! - Weights are in fundamental-weight coordinates.

pub mod error;
pub mod orbit;
pub mod root_system;
pub mod weyl_group;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::WeylError;
pub use orbit::{
    weyl_orbit, weyl_orbit_from_coords, weyl_orbit_with_cfg, OrbitCfg, WeylOrbit, WeylOrbitPairs,
};
pub use root_system::{RootSystem, WeightLatticeElem};
pub use weyl_group::{WeylGroup, WeylGroupElem};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::WeylError;
    pub use crate::orbit::{
        weyl_orbit, weyl_orbit_from_coords, weyl_orbit_with_cfg, OrbitCfg, OrbitWalker,
    };
    pub use crate::root_system::{cartan_matrix_from_label, RootSystem, WeightLatticeElem};
    pub use crate::weyl_group::{LeftMultiplication, WeylGroup, WeylGroupElem};
}
