#![deny(missing_docs)]
#![doc = "Coupling tables and chain constructors for concrete anyon models."]

use std::path::PathBuf;

use anyon_chain::{Chain, ChainConfig};
use anyon_core::{AnyonError, CouplingTable, Window};
use num_complex::Complex;

/// Cache key of the Fibonacci model.
pub const FIBONACCI: &str = "fibonacci";

/// Cache key of the Lee-Yang model.
pub const LEE_YANG: &str = "lee-yang";

const W101: Window = Window::new([1, 0, 1]);
const W010: Window = Window::new([0, 1, 0]);
const W111: Window = Window::new([1, 1, 1]);

/// The golden ratio, quantum dimension of the non-trivial Fibonacci anyon.
fn golden() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Local two-anyon coupling table of the Fibonacci model. Real amplitudes;
/// the resulting Hamiltonians are Hermitian.
pub fn fibonacci_couplings() -> CouplingTable {
    let phi = golden();
    let mut table = CouplingTable::new();
    table.insert(W101, W101, Complex::new(-phi.powi(-2), 0.0));
    table.insert(W010, W010, Complex::new(-1.0, 0.0));
    table.insert(W111, W111, Complex::new(-phi.powi(-1), 0.0));
    let mix = Complex::new(-phi.powf(-1.5), 0.0);
    table.insert(W101, W111, mix);
    table.insert(W111, W101, mix);
    table
}

/// Local two-anyon coupling table of the Lee-Yang model. The off-diagonal
/// amplitudes are imaginary with equal sign, so the Hamiltonians are
/// complex symmetric but not Hermitian.
pub fn lee_yang_couplings() -> CouplingTable {
    let phi = golden();
    let mut table = CouplingTable::new();
    table.insert(W101, W101, Complex::new(phi.powi(2), 0.0));
    table.insert(W010, W010, Complex::new(1.0, 0.0));
    table.insert(W111, W111, Complex::new(-phi, 0.0));
    let mix = Complex::new(0.0, phi.powf(1.5));
    table.insert(W101, W111, mix);
    table.insert(W111, W101, mix);
    table
}

/// Builds a Fibonacci chain of the given length and closure.
pub fn fibonacci_chain(
    length: usize,
    periodic: bool,
    cache_dir: Option<PathBuf>,
) -> Result<Chain, AnyonError> {
    Chain::new(
        ChainConfig {
            model: FIBONACCI.to_string(),
            length,
            periodic,
            cache_dir,
        },
        fibonacci_couplings(),
    )
}

/// Builds a Lee-Yang chain of the given length and closure.
pub fn lee_yang_chain(
    length: usize,
    periodic: bool,
    cache_dir: Option<PathBuf>,
) -> Result<Chain, AnyonError> {
    Chain::new(
        ChainConfig {
            model: LEE_YANG.to_string(),
            length,
            periodic,
            cache_dir,
        },
        lee_yang_couplings(),
    )
}
