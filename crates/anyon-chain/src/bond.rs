//! Brute-force construction of a single bond operator.

use anyon_core::{AnyonError, CouplingTable, ErrorInfo};
use nalgebra::DMatrix;
use num_complex::Complex;

use crate::basis::Basis;

fn operator_error(code: &str, message: impl Into<String>) -> AnyonError {
    AnyonError::Operator(ErrorInfo::new(code, message))
}

/// Builds the bond operator whose 3-site window is centred at `pos`.
///
/// The window covers sites `pos - 1 ..= pos + 1`; valid positions are
/// `1 ..= len - 2` for configurations of `len` sites. Entry `(i, j)` is the
/// table amplitude for the windowed pair when configurations `i` and `j`
/// agree on every site outside the window, and zero otherwise. This is the
/// O(N²) primitive the cyclic propagator exists to amortise.
pub fn build_bond_operator(
    basis: &Basis,
    pos: usize,
    table: &CouplingTable,
) -> Result<DMatrix<Complex<f64>>, AnyonError> {
    if basis.is_empty() {
        return Err(operator_error(
            "empty-basis",
            "cannot build a bond operator over an empty basis",
        ));
    }
    let len = basis.state_len();
    if pos == 0 || pos + 2 > len {
        return Err(AnyonError::Operator(
            ErrorInfo::new("window-out-of-range", "bond window does not fit the chain")
                .with_context("pos", pos)
                .with_context("sites", len),
        ));
    }

    let size = basis.len();
    let mut matrix = DMatrix::zeros(size, size);
    for (i, row) in basis.states().iter().enumerate() {
        let Some(row_window) = row.window(pos) else {
            continue;
        };
        for (j, col) in basis.states().iter().enumerate() {
            if !row.agrees_outside(col, pos) {
                continue;
            }
            let Some(col_window) = col.window(pos) else {
                continue;
            };
            if let Some(amplitude) = table.get(row_window, col_window) {
                matrix[(i, j)] = amplitude;
            }
        }
    }

    Ok(matrix)
}

/// Sums a list of bond operators into the full chain Hamiltonian.
///
/// An empty list is a configuration error, never a silent zero matrix.
pub fn assemble_hamiltonian(
    operators: &[DMatrix<Complex<f64>>],
) -> Result<DMatrix<Complex<f64>>, AnyonError> {
    let Some(first) = operators.first() else {
        return Err(operator_error(
            "empty-bond-list",
            "cannot assemble a Hamiltonian from an empty bond operator list",
        ));
    };
    let mut total = first.clone();
    for operator in &operators[1..] {
        if operator.shape() != total.shape() {
            return Err(AnyonError::Operator(
                ErrorInfo::new("shape-mismatch", "bond operators disagree on basis size")
                    .with_context("expected", format!("{:?}", total.shape()))
                    .with_context("found", format!("{:?}", operator.shape())),
            ));
        }
        total += operator;
    }
    Ok(total)
}
