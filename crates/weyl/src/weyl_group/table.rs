//! Reflection table over the small roots of a root system.

use std::collections::HashMap;

use crate::root_system::RootSystem;

/// Dense table `refl(i, r)`: index of the small root `s_i(β_r)`, or
/// [`ReflectionTable::NEGATIVE`] when the image is negative or not small.
///
/// Root indices are 1-based and follow [`RootSystem::small_roots`], so
/// `1..=rank` are the simple roots and a root index equal to a letter means
/// "the simple root of that letter". A root that is not small never maps
/// back to a simple root, so a walk may stop at the sentinel.
#[derive(Clone, Debug)]
pub struct ReflectionTable {
    n_roots: usize,
    // row i (0-based generator) holds n_roots + 1 entries; column 0 is unused
    images: Vec<u32>,
}

impl ReflectionTable {
    pub const NEGATIVE: u32 = 0;

    pub fn new(root_system: &RootSystem) -> Self {
        let roots = root_system.small_roots();
        let index: HashMap<&[i64], u32> = roots
            .iter()
            .enumerate()
            .map(|(k, r)| (r.as_slice(), k as u32 + 1))
            .collect();
        let n_roots = roots.len();
        let mut images = Vec::with_capacity(root_system.rank() * (n_roots + 1));
        for i in 1..=root_system.rank() {
            images.push(Self::NEGATIVE);
            for beta in roots {
                let mut image = beta.clone();
                root_system.reflect_root_coords(&mut image, i);
                images.push(
                    index
                        .get(image.as_slice())
                        .copied()
                        .unwrap_or(Self::NEGATIVE),
                );
            }
        }
        Self { n_roots, images }
    }

    #[inline]
    pub fn number_of_roots(&self) -> usize {
        self.n_roots
    }

    /// Image of root `r` under `s_i` (both 1-based).
    #[inline]
    pub fn reflect(&self, i: u8, r: u32) -> u32 {
        self.images[(i as usize - 1) * (self.n_roots + 1) + r as usize]
    }
}
