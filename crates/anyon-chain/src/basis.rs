//! Admissible-state enumeration under the adjacent-00 exclusion rule.

use std::collections::BTreeMap;

use anyon_core::{AnyonError, BasisState, ErrorInfo};

/// Minimum viable chain length; shorter requests are clamped to this floor.
pub const MIN_CHAIN_LENGTH: usize = 3;

/// Most sites a single enumeration can scan (one bit per site in a `u64`).
/// Dense operator storage becomes impractical long before this bound.
pub const MAX_ENUMERATION_SITES: usize = 63;

/// Ordered set of admissible chain configurations.
///
/// The enumeration order (ascending binary, most significant site first)
/// defines the index space for every operator matrix, so it must never be
/// re-sorted after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basis {
    states: Vec<BasisState>,
    positions: BTreeMap<BasisState, usize>,
}

impl Basis {
    fn from_states(states: Vec<BasisState>) -> Self {
        let positions = states
            .iter()
            .enumerate()
            .map(|(idx, state)| (state.clone(), idx))
            .collect();
        Self { states, positions }
    }

    /// The configurations in enumeration order.
    pub fn states(&self) -> &[BasisState] {
        &self.states
    }

    /// Number of configurations in the basis.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the basis holds no configurations.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of sites per configuration (0 for an empty basis).
    pub fn state_len(&self) -> usize {
        self.states.first().map_or(0, BasisState::len)
    }

    /// Index of a configuration in the enumeration order.
    pub fn position(&self, state: &BasisState) -> Option<usize> {
        self.positions.get(state).copied()
    }
}

/// Enumerates the ordered basis for a chain of the given length and closure.
///
/// Lengths below [`MIN_CHAIN_LENGTH`] are clamped; callers that care about
/// the clamp should compare against the requested value (the chain object
/// records it as a diagnostic).
///
/// Periodic chains enumerate binary strings of length `L` and accept those
/// with no adjacent 0-pair under wraparound. Open chains enumerate strings
/// of length `L + 1` (one extra site reflects the bond construction
/// convention at the free ends) and apply the rule without wraparound.
///
/// Lengths whose site count exceeds [`MAX_ENUMERATION_SITES`] are rejected
/// outright rather than scanned.
pub fn enumerate_basis(length: usize, periodic: bool) -> Result<Basis, AnyonError> {
    let length = length.max(MIN_CHAIN_LENGTH);
    let sites = if periodic { length } else { length + 1 };
    if sites > MAX_ENUMERATION_SITES {
        return Err(AnyonError::Basis(
            ErrorInfo::new("length-unsupported", "chain length exceeds the enumerable range")
                .with_context("sites", sites)
                .with_context("max", MAX_ENUMERATION_SITES),
        ));
    }

    let mut states = Vec::new();
    for value in 0u64..(1u64 << sites) {
        let labels: Vec<u8> = (0..sites)
            .map(|idx| ((value >> (sites - 1 - idx)) & 1) as u8)
            .collect();
        if admissible(&labels, periodic) {
            states.push(BasisState::new(labels)?);
        }
    }

    Ok(Basis::from_states(states))
}

/// The exclusion rule: no two adjacent 0-labels. Extending a periodic
/// string by its first two sites creates two extra pairs, but only the
/// wraparound pair `(last, first)` adds a new constraint, so that is all
/// we check here.
fn admissible(labels: &[u8], periodic: bool) -> bool {
    if labels.windows(2).any(|pair| pair[0] == 0 && pair[1] == 0) {
        return false;
    }
    if periodic {
        if let (Some(&last), Some(&first)) = (labels.last(), labels.first()) {
            if last == 0 && first == 0 {
                return false;
            }
        }
    }
    true
}
