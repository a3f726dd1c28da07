use std::sync::Arc;

use nalgebra::DMatrix;

use super::*;

fn rs(label: &str) -> Arc<RootSystem> {
    Arc::new(RootSystem::from_label(label).unwrap())
}

#[test]
fn positive_root_counts_of_finite_types() {
    let expected = [
        ("A1", 1),
        ("A2", 3),
        ("A4", 10),
        ("B3", 9),
        ("C3", 9),
        ("D4", 12),
        ("G2", 6),
        ("F4", 24),
        ("E6", 36),
        ("E8", 120),
        ("A1xA1", 2),
    ];
    for (label, n) in expected {
        let r = rs(label);
        assert!(r.is_finite(), "{label}");
        assert_eq!(r.number_of_positive_roots(), Some(n), "{label}");
    }
}

#[test]
fn simple_roots_come_first() {
    let r = rs("B3");
    let roots = r.positive_roots().unwrap();
    for (i, root) in roots.iter().take(3).enumerate() {
        for (k, &c) in root.iter().enumerate() {
            assert_eq!(c, i64::from(i == k));
        }
    }
    // highest root of B3 is α1 + 2α2 + 2α3
    assert!(roots.iter().any(|b| b.as_slice() == [1, 2, 2]));
}

#[test]
fn affine_and_hyperbolic_matrices_are_infinite() {
    let affine_a2 = DMatrix::from_row_slice(3, 3, &[2, -1, -1, -1, 2, -1, -1, -1, 2]);
    let affine_a1 = DMatrix::from_row_slice(2, 2, &[2, -2, -2, 2]);
    let hyperbolic = DMatrix::from_row_slice(2, 2, &[2, -3, -3, 2]);
    for m in [affine_a2, affine_a1, hyperbolic] {
        let r = RootSystem::new(m).unwrap();
        assert!(!r.is_finite());
        assert!(r.positive_roots().is_none());
    }
}

#[test]
fn malformed_cartan_matrices_are_rejected() {
    let bad_diag = DMatrix::from_row_slice(2, 2, &[1, -1, -1, 2]);
    let positive = DMatrix::from_row_slice(2, 2, &[2, 1, 1, 2]);
    let asymmetric_zero = DMatrix::from_row_slice(2, 2, &[2, 0, -1, 2]);
    let not_square = DMatrix::from_row_slice(1, 2, &[2, 0]);
    for m in [bad_diag, positive, asymmetric_zero, not_square] {
        assert!(matches!(
            RootSystem::new(m),
            Err(WeylError::InvalidCartanMatrix { .. })
        ));
    }
}

#[test]
fn weight_reflection_is_an_involution() {
    let r = rs("G2");
    let mut wt = WeightLatticeElem::new(&r, vec![3, -2]).unwrap();
    let orig = wt.clone();
    wt.reflect(1).unwrap();
    assert_eq!(wt.coefficients().as_slice(), [-3, 1]);
    wt.reflect(1).unwrap();
    assert_eq!(wt, orig);
    assert_eq!(
        wt.reflect(3).unwrap_err(),
        WeylError::InvalidGenerator { index: 3, rank: 2 }
    );
}

#[test]
fn weights_of_different_root_systems_differ() {
    let a = rs("A2");
    let b = rs("A2");
    let x = WeightLatticeElem::new(&a, vec![1, 0]).unwrap();
    let y = WeightLatticeElem::new(&b, vec![1, 0]).unwrap();
    assert_ne!(x, y);
    assert_eq!(x, WeightLatticeElem::new(&a, vec![1, 0]).unwrap());
    assert!(matches!(
        WeightLatticeElem::new(&a, vec![1]),
        Err(WeylError::DimensionMismatch {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn conjugate_dominant_records_reflections() {
    let r = rs("A2");
    let wt = WeightLatticeElem::new(&r, vec![0, -1]).unwrap();
    let (dom, letters) = wt.conjugate_dominant().unwrap();
    assert!(dom.is_dominant());
    assert_eq!(dom.coefficients().as_slice(), [1, 0]);
    let mut replay = wt.clone();
    for &j in &letters {
        replay.reflect(j as usize).unwrap();
    }
    assert_eq!(replay, dom);
}

#[test]
fn leading_parabolic_drops_trailing_nodes() {
    let r = rs("E6");
    let d5 = r.leading_parabolic(5).unwrap();
    assert_eq!(d5.rank(), 5);
    assert_eq!(d5.number_of_positive_roots(), Some(20));
    assert!(r.leading_parabolic(7).is_err());
}

#[test]
fn small_roots_are_finite_for_infinite_types() {
    let cases: [(&[i64], usize, usize); 4] = [
        (&[2, -2, -2, 2], 2, 2),
        (&[2, -3, -3, 2], 2, 2),
        (&[2, -1, -4, 2], 2, 2),
        (&[2, -1, -1, -1, 2, -1, -1, -1, 2], 3, 6),
    ];
    for (m, n, expected) in cases {
        let r = RootSystem::new(DMatrix::from_row_slice(n, n, m)).unwrap();
        assert!(!r.is_finite());
        assert_eq!(r.small_roots().len(), expected, "{m:?}");
    }
    // affine A2: simple roots and the three sums of two of them
    let m = DMatrix::from_row_slice(3, 3, &[2, -1, -1, -1, 2, -1, -1, -1, 2]);
    let r = RootSystem::new(m).unwrap();
    for root in r.small_roots() {
        assert!(root.iter().all(|&c| c == 0 || c == 1));
        assert!(root.sum() <= 2);
    }
}

#[test]
fn small_roots_of_finite_types_are_the_positive_roots() {
    for label in ["B3", "G2", "F4", "E6"] {
        let r = rs(label);
        assert_eq!(Some(r.small_roots()), r.positive_roots(), "{label}");
    }
}

#[test]
fn weight_reflection_reports_overflow() {
    let m = DMatrix::from_row_slice(2, 2, &[2, -3, -3, 2]);
    let hyperbolic = Arc::new(RootSystem::new(m).unwrap());
    let mut wt = WeightLatticeElem::new(&hyperbolic, vec![i64::MAX / 2, 0]).unwrap();
    let orig = wt.clone();
    assert!(matches!(wt.reflect(1), Err(WeylError::Unsupported { .. })));
    assert_eq!(wt, orig);
    assert!(matches!(wt.conjugate_dominant(), Ok((_, ref letters)) if letters.is_empty()));
}

#[test]
fn checked_coefficient_access() {
    let r = rs("A2");
    let wt = WeightLatticeElem::new(&r, vec![4, -1]).unwrap();
    assert_eq!(wt.get(1), Some(4));
    assert_eq!(wt.get(2), Some(-1));
    assert_eq!(wt.get(0), None);
    assert_eq!(wt.get(3), None);
    assert_eq!(wt.coeff(2), -1);
}
