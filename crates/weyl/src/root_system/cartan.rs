//! Cartan matrices of the finite types and their direct products.
//!
//! Convention: `m[(i, j)] = <α_i^∨, α_j>` with Bourbaki node numbering. For
//! B_n the last simple root is short, for C_n it is long. F4 has α3, α4 short
//! and G2 has α1 short.

use nalgebra::DMatrix;

use crate::error::WeylError;

/// Irreducible finite Cartan types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CartanType {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl CartanType {
    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    fn admits_rank(self, n: usize) -> bool {
        match self {
            Self::A => n >= 1,
            Self::B | Self::C => n >= 2,
            Self::D => n >= 4,
            Self::E => (6..=8).contains(&n),
            Self::F => n == 4,
            Self::G => n == 2,
        }
    }
}

#[inline]
fn link(m: &mut DMatrix<i64>, i: usize, j: usize) {
    m[(i, j)] = -1;
    m[(j, i)] = -1;
}

/// Cartan matrix of the irreducible type `ty` of rank `n`.
pub fn cartan_matrix(ty: CartanType, n: usize) -> Result<DMatrix<i64>, WeylError> {
    if !ty.admits_rank(n) {
        return Err(WeylError::UnknownCartanType {
            label: format!("{ty:?}{n}"),
        });
    }
    let mut m = DMatrix::<i64>::zeros(n, n);
    m.fill_diagonal(2);
    match ty {
        CartanType::A => (0..n - 1).for_each(|i| link(&mut m, i, i + 1)),
        CartanType::B => {
            (0..n - 1).for_each(|i| link(&mut m, i, i + 1));
            m[(n - 1, n - 2)] = -2;
        }
        CartanType::C => {
            (0..n - 1).for_each(|i| link(&mut m, i, i + 1));
            m[(n - 2, n - 1)] = -2;
        }
        CartanType::D => {
            (0..n - 2).for_each(|i| link(&mut m, i, i + 1));
            link(&mut m, n - 3, n - 1);
        }
        CartanType::E => {
            link(&mut m, 0, 2);
            link(&mut m, 1, 3);
            (2..n - 1).for_each(|i| link(&mut m, i, i + 1));
        }
        CartanType::F => {
            (0..3).for_each(|i| link(&mut m, i, i + 1));
            m[(2, 1)] = -2;
        }
        CartanType::G => {
            link(&mut m, 0, 1);
            m[(0, 1)] = -3;
        }
    }
    Ok(m)
}

/// Parse labels such as `"E8"`, `"B2"` or `"A1xA1"` (components separated by
/// `x` or `×`) into a block-diagonal Cartan matrix.
pub fn cartan_matrix_from_label(label: &str) -> Result<DMatrix<i64>, WeylError> {
    let unknown = || WeylError::UnknownCartanType {
        label: label.to_string(),
    };
    let blocks = label
        .split(['x', '×'])
        .map(|part| {
            let part = part.trim();
            let mut chars = part.chars();
            let ty = chars
                .next()
                .and_then(CartanType::from_letter)
                .ok_or_else(unknown)?;
            let n: usize = chars.as_str().parse().map_err(|_| unknown())?;
            cartan_matrix(ty, n)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(block_diagonal(&blocks))
}

/// Direct sum of Cartan matrices (reducible root systems).
pub fn block_diagonal(blocks: &[DMatrix<i64>]) -> DMatrix<i64> {
    let n = blocks.iter().map(|b| b.nrows()).sum();
    let mut m = DMatrix::<i64>::zeros(n, n);
    let mut offset = 0;
    for b in blocks {
        m.view_mut((offset, offset), (b.nrows(), b.ncols()))
            .copy_from(b);
        offset += b.nrows();
    }
    m
}
