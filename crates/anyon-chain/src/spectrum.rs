//! Eigenvalue extraction for dense complex operators.

use anyon_core::{AnyonError, ErrorInfo};
use nalgebra::{DMatrix, Schur};
use num_complex::Complex;

/// Iteration cap handed to the Schur decomposition. The computation is
/// deterministic, so exceeding it is reported as fatal rather than retried.
const MAX_SCHUR_ITERATIONS: usize = 10_000;

fn spectrum_error(code: &str, message: impl Into<String>) -> AnyonError {
    AnyonError::Spectrum(ErrorInfo::new(code, message))
}

/// Computes the full eigenvalue set of a dense complex matrix.
///
/// Eigenvalues stay complex even when the matrix is Hermitian; callers
/// needing physical (real) energies interpret the imaginary residue
/// themselves.
pub fn eigenvalues(matrix: &DMatrix<Complex<f64>>) -> Result<Vec<Complex<f64>>, AnyonError> {
    if matrix.is_empty() {
        return Ok(Vec::new());
    }
    let schur = Schur::try_new(matrix.clone(), f64::EPSILON, MAX_SCHUR_ITERATIONS).ok_or_else(
        || {
            AnyonError::Spectrum(
                ErrorInfo::new("no-convergence", "Schur iteration failed to converge")
                    .with_context("dim", matrix.nrows()),
            )
        },
    )?;
    let values = schur.eigenvalues().ok_or_else(|| {
        spectrum_error(
            "eigenvalues-unavailable",
            "Schur form did not expose its eigenvalues",
        )
    })?;
    Ok(values.iter().copied().collect())
}

/// Whether a matrix equals its conjugate transpose within `tol`.
pub fn is_hermitian(matrix: &DMatrix<Complex<f64>>, tol: f64) -> bool {
    if matrix.nrows() != matrix.ncols() {
        return false;
    }
    let residue = matrix - matrix.adjoint();
    residue.iter().all(|entry| entry.norm() <= tol)
}

/// Whether a matrix equals its plain transpose within `tol`.
pub fn is_symmetric(matrix: &DMatrix<Complex<f64>>, tol: f64) -> bool {
    if matrix.nrows() != matrix.ncols() {
        return false;
    }
    let residue = matrix - matrix.transpose();
    residue.iter().all(|entry| entry.norm() <= tol)
}
