//! Persistent cache artifacts keyed by model name and chain length.
//!
//! One artifact pairs the eigenvalue set of a chain with its assembled
//! Hamiltonian. Loading an artifact bypasses enumeration, bond
//! construction and diagonalization entirely, so a present-but-malformed
//! artifact is a fatal error rather than a silent recomputation: callers
//! must be able to tell a corrupt cache from an absent one.

use std::fs;
use std::path::{Path, PathBuf};

use anyon_core::{AnyonError, ErrorInfo, SchemaVersion};
use nalgebra::DMatrix;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

fn cache_error(code: &str, message: impl Into<String>) -> AnyonError {
    AnyonError::Cache(ErrorInfo::new(code, message))
}

/// Persisted record pairing a chain's spectrum with its Hamiltonian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheArtifact {
    /// Schema version of the artifact payload.
    pub schema_version: SchemaVersion,
    /// Model name the artifact was computed for.
    pub model: String,
    /// Chain length the artifact was computed for.
    pub length: usize,
    /// Eigenvalues of the full Hamiltonian.
    pub eigenvalues: Vec<Complex<f64>>,
    /// Assembled Hamiltonian matrix.
    pub hamiltonian: DMatrix<Complex<f64>>,
}

/// Deterministic artifact location for a (model, length) pair.
pub fn artifact_path(base: &Path, model: &str, length: usize) -> PathBuf {
    base.join(format!("{model}_{length}.bin"))
}

/// Serializes an artifact to a JSON string.
pub fn to_json(artifact: &CacheArtifact) -> Result<String, AnyonError> {
    serde_json::to_string(artifact)
        .map_err(|err| AnyonError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores an artifact from a JSON string.
pub fn from_json(data: &str) -> Result<CacheArtifact, AnyonError> {
    serde_json::from_str(data)
        .map_err(|err| AnyonError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))
}

/// Serializes an artifact into a binary blob.
pub fn to_bytes(artifact: &CacheArtifact) -> Result<Vec<u8>, AnyonError> {
    let json = to_json(artifact)?;
    bincode::serialize(&json)
        .map_err(|err| AnyonError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates an artifact from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<CacheArtifact, AnyonError> {
    let json: String = bincode::deserialize(bytes)
        .map_err(|err| AnyonError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    from_json(&json)
}

/// Loads the artifact at `path` and validates it against the expected
/// (model, length) key.
pub fn load_artifact(path: &Path, model: &str, length: usize) -> Result<CacheArtifact, AnyonError> {
    let bytes = fs::read(path).map_err(|err| {
        AnyonError::Cache(
            ErrorInfo::new("artifact-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    let artifact = from_bytes(&bytes).map_err(|err| {
        AnyonError::Cache(
            ErrorInfo::new("artifact-decode", err.to_string())
                .with_context("path", path.display())
                .with_hint("delete the artifact to force recomputation"),
        )
    })?;

    if artifact.schema_version != SchemaVersion::default() {
        return Err(cache_error(
            "schema-mismatch",
            "artifact was written with an incompatible schema version",
        ));
    }
    if artifact.model != model || artifact.length != length {
        return Err(AnyonError::Cache(
            ErrorInfo::new("key-mismatch", "artifact does not match its storage key")
                .with_context("expected", format!("{model}_{length}"))
                .with_context("found", format!("{}_{}", artifact.model, artifact.length)),
        ));
    }
    let dim = artifact.hamiltonian.nrows();
    if artifact.hamiltonian.ncols() != dim || artifact.eigenvalues.len() != dim {
        return Err(cache_error(
            "artifact-inconsistent",
            "eigenvalue count does not match the Hamiltonian dimension",
        ));
    }

    Ok(artifact)
}

/// Writes the artifact to `path`, creating the base directory if missing.
pub fn save_artifact(path: &Path, artifact: &CacheArtifact) -> Result<(), AnyonError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            AnyonError::Cache(
                ErrorInfo::new("artifact-mkdir", err.to_string())
                    .with_context("path", parent.display()),
            )
        })?;
    }
    let bytes = to_bytes(artifact)?;
    fs::write(path, bytes).map_err(|err| {
        AnyonError::Cache(
            ErrorInfo::new("artifact-write", err.to_string())
                .with_context("path", path.display()),
        )
    })
}
