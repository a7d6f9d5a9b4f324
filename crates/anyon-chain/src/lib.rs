#![deny(missing_docs)]
#![doc = "Basis enumeration, bond operator construction and spectra for one-dimensional anyon chains with nearest-neighbour interactions."]

/// Admissible-state enumeration under the local exclusion rule.
pub mod basis;
/// Brute-force bond operator construction and Hamiltonian assembly.
pub mod bond;
/// Persistent cache artifacts for spectra and Hamiltonians.
pub mod cache;
/// Cyclic-permutation derivation of translated bond operators.
pub mod cycle;
/// Eigenvalue extraction for dense complex operators.
pub mod spectrum;

mod chain;

pub use basis::{enumerate_basis, Basis, MAX_ENUMERATION_SITES, MIN_CHAIN_LENGTH};
pub use bond::{assemble_hamiltonian, build_bond_operator};
pub use cache::{artifact_path, CacheArtifact};
pub use chain::{Chain, ChainConfig, ChainDiagnostics};
pub use cycle::propagate_bond_operators;
