use anyon_core::{AnyonError, BasisState, CouplingTable, Window};
use num_complex::Complex;

#[test]
fn rejects_non_binary_labels() {
    let err = BasisState::new(vec![1, 0, 2]).unwrap_err();
    assert!(matches!(err, AnyonError::Basis(_)));
    assert_eq!(err.info().code, "invalid-site-label");
}

#[test]
fn displays_as_label_string() {
    let state = BasisState::new(vec![1, 0, 1, 1]).unwrap();
    assert_eq!(state.to_string(), "1011");
}

#[test]
fn rotation_moves_last_site_to_front() {
    let state = BasisState::new(vec![1, 0, 1, 1, 0]).unwrap();
    assert_eq!(state.rotated_right().to_string(), "01011");
    // Five rotations return to the original configuration.
    let mut current = state.clone();
    for _ in 0..5 {
        current = current.rotated_right();
    }
    assert_eq!(current, state);
}

#[test]
fn window_extraction_respects_bounds() {
    let state = BasisState::new(vec![1, 0, 1, 1]).unwrap();
    assert_eq!(state.window(1), Some(Window::new([1, 0, 1])));
    assert_eq!(state.window(2), Some(Window::new([0, 1, 1])));
    assert_eq!(state.window(0), None);
    assert_eq!(state.window(3), None);
}

#[test]
fn agreement_outside_window() {
    let a = BasisState::new(vec![1, 0, 1, 1, 1]).unwrap();
    let b = BasisState::new(vec![1, 1, 1, 1, 1]).unwrap();
    // The strings differ only at site 1, inside every window touching it.
    assert!(a.agrees_outside(&b, 2));
    assert!(!a.agrees_outside(&b, 3));
    let c = BasisState::new(vec![1, 0, 1, 1]).unwrap();
    assert!(!a.agrees_outside(&c, 2));
}

#[test]
fn coupling_table_lookup_is_ordered() {
    let mut table = CouplingTable::new();
    let row = Window::new([1, 0, 1]);
    let col = Window::new([1, 1, 1]);
    table.insert(row, col, Complex::new(0.0, 1.0));
    assert_eq!(table.get(row, col), Some(Complex::new(0.0, 1.0)));
    assert_eq!(table.get(col, row), None);
    assert_eq!(table.len(), 1);
}
