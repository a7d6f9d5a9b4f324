//! Derivation of translated bond operators by cyclic basis permutation.

use anyon_core::{AnyonError, BasisState, ErrorInfo};
use nalgebra::DMatrix;
use num_complex::Complex;

use crate::basis::Basis;

/// Derives the remaining bond operators of a periodic chain from the one
/// already built at the first window position.
///
/// Each step rotates every configuration once more (last site to the
/// front) and looks the rotated configurations up in the original basis,
/// yielding a permutation `reorder`. Conjugating the initial operator by
/// `reorder` is exactly the bond operator at the translated position, so
/// one O(N²) table-matching build plus cheap index shuffles replaces L
/// independent builds. The loop stops when `reorder` is the identity: the
/// rotation orbit has closed and no further distinct operator exists.
/// Callers must not assume exactly `L - 1` derived operators; a basis with
/// extra translational symmetry closes earlier.
pub fn propagate_bond_operators(
    basis: &Basis,
    initial: &DMatrix<Complex<f64>>,
) -> Result<Vec<DMatrix<Complex<f64>>>, AnyonError> {
    let size = basis.len();
    let mut derived = Vec::new();
    let mut current: Vec<BasisState> = basis.states().to_vec();

    // The orbit closes after at most `state_len` rotations.
    for _ in 0..basis.state_len() {
        let rotated: Vec<BasisState> = current.iter().map(BasisState::rotated_right).collect();
        let mut reorder = Vec::with_capacity(size);
        for state in &rotated {
            let Some(idx) = basis.position(state) else {
                // Rotation preserves cyclic admissibility, so a missing
                // state means the basis itself is inconsistent.
                return Err(AnyonError::Operator(
                    ErrorInfo::new(
                        "rotation-closure",
                        "rotated configuration missing from the basis",
                    )
                    .with_context("state", state),
                ));
            };
            reorder.push(idx);
        }

        if is_identity(&reorder) {
            return Ok(derived);
        }

        derived.push(conjugate_by_permutation(initial, &reorder));
        current = rotated;
    }

    Err(AnyonError::Operator(ErrorInfo::new(
        "orbit-open",
        "rotation orbit failed to close within the chain length",
    )))
}

fn is_identity(reorder: &[usize]) -> bool {
    reorder.iter().enumerate().all(|(idx, &target)| idx == target)
}

/// Permutes both rows and columns of `matrix` according to `reorder`,
/// where `reorder[i]` is the original index of the state now at position
/// `i`.
fn conjugate_by_permutation(
    matrix: &DMatrix<Complex<f64>>,
    reorder: &[usize],
) -> DMatrix<Complex<f64>> {
    let size = reorder.len();
    DMatrix::from_fn(size, size, |row, col| matrix[(reorder[row], reorder[col])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_permutation_detected() {
        assert!(is_identity(&[0, 1, 2, 3]));
        assert!(!is_identity(&[1, 0, 2, 3]));
        assert!(is_identity(&[]));
    }

    #[test]
    fn conjugation_shuffles_rows_and_columns() {
        let matrix = DMatrix::from_fn(2, 2, |row, col| Complex::new((2 * row + col) as f64, 0.0));
        let swapped = conjugate_by_permutation(&matrix, &[1, 0]);
        assert_eq!(swapped[(0, 0)], matrix[(1, 1)]);
        assert_eq!(swapped[(0, 1)], matrix[(1, 0)]);
        assert_eq!(swapped[(1, 0)], matrix[(0, 1)]);
        assert_eq!(swapped[(1, 1)], matrix[(0, 0)]);
    }
}
