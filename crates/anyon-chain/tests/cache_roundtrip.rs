use anyon_chain::{artifact_path, cache, Chain, ChainConfig};
use anyon_core::{AnyonError, CouplingTable, SchemaVersion, Window};
use num_complex::Complex;

fn golden_table() -> CouplingTable {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let w101 = Window::new([1, 0, 1]);
    let w010 = Window::new([0, 1, 0]);
    let w111 = Window::new([1, 1, 1]);
    let mut table = CouplingTable::new();
    table.insert(w101, w101, Complex::new(-phi.powi(-2), 0.0));
    table.insert(w010, w010, Complex::new(-1.0, 0.0));
    table.insert(w111, w111, Complex::new(-phi.powi(-1), 0.0));
    let mix = Complex::new(-phi.powf(-1.5), 0.0);
    table.insert(w101, w111, mix);
    table.insert(w111, w101, mix);
    table
}

fn config(dir: Option<std::path::PathBuf>) -> ChainConfig {
    ChainConfig {
        model: "golden".to_string(),
        length: 4,
        periodic: true,
        cache_dir: dir,
    }
}

#[test]
fn save_and_reload_reproduces_spectrum_exactly() {
    let dir = tempfile::tempdir().unwrap();
    // The base directory is created on save, so point one level deeper.
    let base = dir.path().join("artifacts");

    let mut chain = Chain::new(config(Some(base.clone())), golden_table()).unwrap();
    let eigenvalues: Vec<_> = chain.eigenvalues().unwrap().to_vec();
    let hamiltonian = chain.hamiltonian().unwrap().clone();
    let path = chain.save().unwrap();
    assert_eq!(path, artifact_path(&base, "golden", 4));
    assert!(path.exists());

    let mut reloaded = Chain::new(config(Some(base)), golden_table()).unwrap();
    assert!(reloaded.diagnostics().loaded_from_cache);
    assert_eq!(reloaded.eigenvalues().unwrap(), eigenvalues.as_slice());
    assert_eq!(reloaded.hamiltonian().unwrap(), &hamiltonian);
    // The restored spectrum is memoized, not recomputed.
    assert_eq!(reloaded.diagnostics().eig_runs, 0);
}

#[test]
fn malformed_artifact_is_a_fatal_cache_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = artifact_path(dir.path(), "golden", 4);
    std::fs::write(&path, b"not an artifact").unwrap();

    let err = Chain::new(config(Some(dir.path().to_path_buf())), golden_table()).unwrap_err();
    assert!(matches!(err, AnyonError::Cache(_)));
    assert_eq!(err.info().code, "artifact-decode");
}

#[test]
fn mismatched_artifact_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let mut donor = Chain::new(
        ChainConfig {
            model: "golden".to_string(),
            length: 5,
            periodic: true,
            cache_dir: None,
        },
        golden_table(),
    )
    .unwrap();
    let eigenvalues = donor.eigenvalues().unwrap().to_vec();
    let hamiltonian = donor.hamiltonian().unwrap().clone();
    let artifact = cache::CacheArtifact {
        schema_version: SchemaVersion::default(),
        model: "golden".to_string(),
        length: 5,
        eigenvalues,
        hamiltonian,
    };
    // Plant the length-5 artifact where the length-4 chain looks for its own.
    let path = artifact_path(dir.path(), "golden", 4);
    cache::save_artifact(&path, &artifact).unwrap();

    let err = Chain::new(config(Some(dir.path().to_path_buf())), golden_table()).unwrap_err();
    assert_eq!(err.info().code, "key-mismatch");
}

#[test]
fn saving_without_cache_dir_is_rejected() {
    let mut chain = Chain::new(config(None), golden_table()).unwrap();
    let err = chain.save().unwrap_err();
    assert!(matches!(err, AnyonError::Cache(_)));
    assert_eq!(err.info().code, "no-cache-dir");
}

#[test]
fn artifact_bytes_roundtrip() {
    let mut chain = Chain::new(config(None), golden_table()).unwrap();
    let eigenvalues = chain.eigenvalues().unwrap().to_vec();
    let hamiltonian = chain.hamiltonian().unwrap().clone();
    let artifact = cache::CacheArtifact {
        schema_version: SchemaVersion::default(),
        model: "golden".to_string(),
        length: 4,
        eigenvalues,
        hamiltonian,
    };
    let bytes = cache::to_bytes(&artifact).unwrap();
    let restored = cache::from_bytes(&bytes).unwrap();
    assert_eq!(artifact, restored);
}
