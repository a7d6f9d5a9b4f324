use anyon_chain::spectrum::{is_hermitian, is_symmetric};
use anyon_models::{fibonacci_chain, lee_yang_chain, lee_yang_couplings};

#[test]
fn fibonacci_length_3_periodic_end_to_end() {
    let mut chain = fibonacci_chain(3, true, None).unwrap();

    let states: Vec<String> = chain
        .basis()
        .states()
        .iter()
        .map(|state| state.to_string())
        .collect();
    assert_eq!(states, vec!["011", "101", "110", "111"]);

    let hamiltonian = chain.hamiltonian().unwrap().clone();
    assert_eq!(hamiltonian.nrows(), 4);
    assert_eq!(hamiltonian.ncols(), 4);

    // Hermitian model: the physical spectrum is real up to numerical
    // residue, which callers interpret themselves.
    let eigenvalues = chain.eigenvalues().unwrap();
    assert_eq!(eigenvalues.len(), 4);
    for value in eigenvalues {
        assert!(value.im.abs() < 1e-9, "unexpected imaginary part: {value}");
    }
}

#[test]
fn fibonacci_hamiltonians_are_hermitian() {
    for periodic in [true, false] {
        for length in 3..=6 {
            let mut chain = fibonacci_chain(length, periodic, None).unwrap();
            let hamiltonian = chain.hamiltonian().unwrap();
            assert!(
                is_hermitian(hamiltonian, 1e-12),
                "length {length}, periodic {periodic}"
            );
        }
    }
}

#[test]
fn lee_yang_hamiltonians_are_symmetric_but_not_hermitian() {
    // Both off-diagonal couplings carry +i, so the matrix equals its
    // transpose while its conjugate transpose flips the sign.
    let mut chain = lee_yang_chain(4, true, None).unwrap();
    let hamiltonian = chain.hamiltonian().unwrap();
    assert!(is_symmetric(hamiltonian, 1e-12));
    assert!(!is_hermitian(hamiltonian, 1e-12));
}

#[test]
fn lee_yang_couplings_are_complex() {
    let table = lee_yang_couplings();
    assert!(table.iter().any(|(_, amplitude)| amplitude.im != 0.0));
}

#[test]
fn model_constructors_clamp_short_chains() {
    let chain = lee_yang_chain(2, true, None).unwrap();
    assert_eq!(chain.length(), 3);
    assert_eq!(chain.diagnostics().clamped_from, Some(2));
}

#[test]
fn model_cache_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("spectra");

    let mut chain = fibonacci_chain(4, true, Some(base.clone())).unwrap();
    let eigenvalues = chain.eigenvalues().unwrap().to_vec();
    chain.save().unwrap();

    let mut reloaded = fibonacci_chain(4, true, Some(base)).unwrap();
    assert!(reloaded.diagnostics().loaded_from_cache);
    assert_eq!(reloaded.eigenvalues().unwrap(), eigenvalues.as_slice());
}
