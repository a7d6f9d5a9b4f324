//! The chain object: immutable basis and couplings, memoized operators.

use std::path::PathBuf;

use anyon_core::{AnyonError, CouplingTable, ErrorInfo, SchemaVersion};
use nalgebra::DMatrix;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::basis::{enumerate_basis, Basis, MIN_CHAIN_LENGTH};
use crate::bond::{assemble_hamiltonian, build_bond_operator};
use crate::cache::{self, CacheArtifact};
use crate::cycle::propagate_bond_operators;
use crate::spectrum;

/// Window position of the one bond operator built by brute force; every
/// other periodic bond is derived from it by cyclic permutation.
const FIRST_BOND_POSITION: usize = 1;

/// Configuration for an anyon chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Model name, used purely as the cache artifact key.
    pub model: String,
    /// Requested number of sites; clamped to the enforced floor of 3.
    pub length: usize,
    /// Whether the last site wraps around to interact with the first.
    pub periodic: bool,
    /// Base directory for cache artifacts, if persistence is wanted.
    pub cache_dir: Option<PathBuf>,
}

/// Diagnostics accumulated while constructing and operating a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChainDiagnostics {
    /// The requested length, recorded when it was below the floor and had
    /// to be clamped.
    pub clamped_from: Option<usize>,
    /// Number of eigensolver invocations performed so far.
    pub eig_runs: usize,
    /// Whether Hamiltonian and spectrum were restored from a cache
    /// artifact instead of computed.
    pub loaded_from_cache: bool,
}

/// A one-dimensional chain of interacting anyons with nearest-neighbour
/// couplings.
///
/// Basis and coupling table are fixed at construction. Bond operators,
/// Hamiltonian and eigenvalues are computed lazily on first request and
/// memoized on the object; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct Chain {
    model: String,
    length: usize,
    periodic: bool,
    basis: Basis,
    table: CouplingTable,
    cache_path: Option<PathBuf>,
    bond_operators: Option<Vec<DMatrix<Complex<f64>>>>,
    hamiltonian: Option<DMatrix<Complex<f64>>>,
    eigenvalues: Option<Vec<Complex<f64>>>,
    diagnostics: ChainDiagnostics,
}

fn memo_missing(field: &str) -> AnyonError {
    AnyonError::Operator(
        ErrorInfo::new("memo-missing", "memoized field absent after computation")
            .with_context("field", field),
    )
}

impl Chain {
    /// Builds a chain for the given configuration and coupling table.
    ///
    /// When a cache directory is configured and an artifact for the
    /// (model, length) key already exists, Hamiltonian and spectrum are
    /// loaded from it and the construction pipeline is skipped. An
    /// artifact that exists but fails to load is a fatal cache error.
    pub fn new(config: ChainConfig, table: CouplingTable) -> Result<Self, AnyonError> {
        let requested = config.length;
        let length = requested.max(MIN_CHAIN_LENGTH);
        let mut diagnostics = ChainDiagnostics::default();
        if length != requested {
            diagnostics.clamped_from = Some(requested);
        }

        let basis = enumerate_basis(length, config.periodic)?;
        let cache_path = config
            .cache_dir
            .as_deref()
            .map(|dir| cache::artifact_path(dir, &config.model, length));

        let mut chain = Self {
            model: config.model,
            length,
            periodic: config.periodic,
            basis,
            table,
            cache_path,
            bond_operators: None,
            hamiltonian: None,
            eigenvalues: None,
            diagnostics,
        };

        if let Some(path) = chain.cache_path.clone() {
            if path.exists() {
                let artifact = cache::load_artifact(&path, &chain.model, chain.length)?;
                chain.hamiltonian = Some(artifact.hamiltonian);
                chain.eigenvalues = Some(artifact.eigenvalues);
                chain.diagnostics.loaded_from_cache = true;
            }
        }

        Ok(chain)
    }

    /// Model name used as the cache key.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Effective chain length after clamping.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the chain is periodic.
    pub fn periodic(&self) -> bool {
        self.periodic
    }

    /// The ordered basis indexing every operator matrix.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// The immutable local coupling table.
    pub fn coupling_table(&self) -> &CouplingTable {
        &self.table
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &ChainDiagnostics {
        &self.diagnostics
    }

    fn derive_bond_operators(&self) -> Result<Vec<DMatrix<Complex<f64>>>, AnyonError> {
        let first = build_bond_operator(&self.basis, FIRST_BOND_POSITION, &self.table)?;
        let mut operators = vec![first];
        if self.periodic {
            let derived = propagate_bond_operators(&self.basis, &operators[0])?;
            operators.extend(derived);
        } else {
            let len = self.basis.state_len();
            for pos in FIRST_BOND_POSITION + 1..=len.saturating_sub(2) {
                operators.push(build_bond_operator(&self.basis, pos, &self.table)?);
            }
        }
        Ok(operators)
    }

    /// All bond operators for the chain, derived lazily and memoized.
    ///
    /// Periodic chains derive every operator past the first by cyclic
    /// basis permutation; open chains build each interior position
    /// directly.
    pub fn bond_operators(&mut self) -> Result<&[DMatrix<Complex<f64>>], AnyonError> {
        if self.bond_operators.is_none() {
            self.bond_operators = Some(self.derive_bond_operators()?);
        }
        Ok(self.bond_operators.as_deref().unwrap_or_default())
    }

    /// The assembled chain Hamiltonian, computed lazily and memoized.
    pub fn hamiltonian(&mut self) -> Result<&DMatrix<Complex<f64>>, AnyonError> {
        if self.hamiltonian.is_none() {
            self.bond_operators()?;
            let operators = self.bond_operators.as_deref().unwrap_or_default();
            self.hamiltonian = Some(assemble_hamiltonian(operators)?);
        }
        self.hamiltonian
            .as_ref()
            .ok_or_else(|| memo_missing("hamiltonian"))
    }

    /// Eigenvalues of the full Hamiltonian (collective mode), memoized.
    pub fn eigenvalues(&mut self) -> Result<&[Complex<f64>], AnyonError> {
        if self.eigenvalues.is_none() {
            let hamiltonian = self.hamiltonian()?.clone();
            let values = spectrum::eigenvalues(&hamiltonian)?;
            self.diagnostics.eig_runs += 1;
            self.eigenvalues = Some(values);
        }
        Ok(self.eigenvalues.as_deref().unwrap_or_default())
    }

    /// Concatenated eigenvalues of every bond operator (individual mode).
    ///
    /// Not memoized; recomputed on every call, deriving the bond operator
    /// list first when it is absent.
    pub fn bond_eigenvalues(&mut self) -> Result<Vec<Complex<f64>>, AnyonError> {
        self.bond_operators()?;
        let operators = self.bond_operators.as_deref().unwrap_or_default();
        let mut values = Vec::new();
        for operator in operators {
            values.extend(spectrum::eigenvalues(operator)?);
        }
        let runs = operators.len();
        self.diagnostics.eig_runs += runs;
        Ok(values)
    }

    /// Whether the assembled Hamiltonian equals its conjugate transpose
    /// within `tol`. Not enforced anywhere; well-posed physical models
    /// satisfy it and tests pin it.
    pub fn is_hermitian(&mut self, tol: f64) -> Result<bool, AnyonError> {
        let hamiltonian = self.hamiltonian()?;
        Ok(spectrum::is_hermitian(hamiltonian, tol))
    }

    /// Persists eigenvalues and Hamiltonian together as one cache
    /// artifact, computing the spectrum first if it is still absent.
    /// Returns the artifact path.
    pub fn save(&mut self) -> Result<PathBuf, AnyonError> {
        let path = self.cache_path.clone().ok_or_else(|| {
            AnyonError::Cache(
                ErrorInfo::new("no-cache-dir", "chain was built without a cache directory")
                    .with_hint("set ChainConfig::cache_dir to enable persistence"),
            )
        })?;

        self.eigenvalues()?;
        let hamiltonian = self
            .hamiltonian
            .as_ref()
            .ok_or_else(|| memo_missing("hamiltonian"))?;
        let eigenvalues = self.eigenvalues.as_deref().unwrap_or_default();

        let artifact = CacheArtifact {
            schema_version: SchemaVersion::default(),
            model: self.model.clone(),
            length: self.length,
            eigenvalues: eigenvalues.to_vec(),
            hamiltonian: hamiltonian.clone(),
        };
        cache::save_artifact(&path, &artifact)?;
        Ok(path)
    }
}
