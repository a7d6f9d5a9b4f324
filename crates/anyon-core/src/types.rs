//! Chain configurations, local windows and coupling tables.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::errors::{AnyonError, ErrorInfo};

/// One admissible chain configuration: an ordered sequence of binary site
/// labels, e.g. `1011`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BasisState(Vec<u8>);

impl BasisState {
    /// Creates a configuration from raw site labels, rejecting anything
    /// other than 0 or 1.
    pub fn new(sites: Vec<u8>) -> Result<Self, AnyonError> {
        if let Some(label) = sites.iter().find(|&&label| label > 1) {
            return Err(AnyonError::Basis(
                ErrorInfo::new("invalid-site-label", "site labels must be 0 or 1")
                    .with_context("label", label),
            ));
        }
        Ok(Self(sites))
    }

    /// Number of sites in the configuration.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the configuration has no sites.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw site labels in chain order.
    pub fn sites(&self) -> &[u8] {
        &self.0
    }

    /// The configuration obtained by moving the last site label to the
    /// front (one cyclic rotation of the chain).
    pub fn rotated_right(&self) -> Self {
        let mut sites = Vec::with_capacity(self.0.len());
        if let Some((&last, rest)) = self.0.split_last() {
            sites.push(last);
            sites.extend_from_slice(rest);
        }
        Self(sites)
    }

    /// The 3-site window centred at `pos` (sites `pos - 1 ..= pos + 1`),
    /// or `None` when the window does not fit.
    pub fn window(&self, pos: usize) -> Option<Window> {
        if pos == 0 || pos + 2 > self.0.len() {
            return None;
        }
        Some(Window::new([self.0[pos - 1], self.0[pos], self.0[pos + 1]]))
    }

    /// Whether two configurations agree on every site outside the 3-site
    /// window centred at `pos`. Returns `false` when the window does not
    /// fit or the lengths differ.
    pub fn agrees_outside(&self, other: &Self, pos: usize) -> bool {
        let len = self.0.len();
        if other.0.len() != len || pos == 0 || pos + 2 > len {
            return false;
        }
        self.0[..pos - 1] == other.0[..pos - 1] && self.0[pos + 2..] == other.0[pos + 2..]
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.0 {
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

/// A 3-site local window used as one half of a coupling table key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Window([u8; 3]);

impl Window {
    /// Creates a window from its three site labels.
    pub const fn new(sites: [u8; 3]) -> Self {
        Self(sites)
    }

    /// The three site labels of the window.
    pub fn sites(&self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Matrix elements of the elementary two-anyon interaction, keyed by an
/// ordered pair of 3-site windows. Immutable once handed to a chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouplingTable {
    entries: BTreeMap<(Window, Window), Complex<f64>>,
}

impl CouplingTable {
    /// Creates an empty coupling table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the amplitude for an ordered window pair, replacing any
    /// previous entry.
    pub fn insert(&mut self, row: Window, col: Window, amplitude: Complex<f64>) {
        self.entries.insert((row, col), amplitude);
    }

    /// Looks up the amplitude for an ordered window pair.
    pub fn get(&self, row: Window, col: Window) -> Option<Complex<f64>> {
        self.entries.get(&(row, col)).copied()
    }

    /// Number of recorded window pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table records no couplings at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all recorded window pairs and their amplitudes.
    pub fn iter(&self) -> btree_map::Iter<'_, (Window, Window), Complex<f64>> {
        self.entries.iter()
    }
}
