//! Implicant generation
//!
//! Every implicant of an `n`-variable function is a sub-cube of the boolean
//! hypercube, described by a `(mask, value)` pair: `mask` marks the fixed
//! variable positions and `value` their required bits. There are `3^n` of
//! them, found by scanning `O(4^n)` pairs, so results are memoized per
//! variable count in an [`ImplicantCache`].

use super::implicant::{Implicant, MAX_SET_VARIABLES};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Generate all implicants for `num_vars` variables, largest first
pub fn generate(num_vars: usize) -> Result<Vec<Implicant>> {
    check_range(num_vars)?;
    Ok(generate_unchecked(num_vars))
}

fn check_range(num_vars: usize) -> Result<()> {
    if num_vars == 0 || num_vars > MAX_SET_VARIABLES {
        return Err(Error::UnsupportedVariableCount {
            got: num_vars,
            min: 1,
            max: MAX_SET_VARIABLES,
        });
    }
    Ok(())
}

fn generate_unchecked(num_vars: usize) -> Vec<Implicant> {
    let count = 1usize << num_vars;
    let mut implicants = Vec::new();

    // mask == 0 is the empty term, appended once below
    for mask in 1..count {
        for value in 0..count {
            if mask & value != value {
                continue;
            }
            implicants.push(Implicant::from_mask(num_vars, mask, value));
        }
    }
    implicants.push(Implicant::universal(num_vars));

    let mut seen = HashSet::new();
    implicants.retain(|imp| seen.insert(imp.minterms()));

    // Stable sort: enumeration order decides between equal sizes
    implicants.sort_by(|a, b| b.size().cmp(&a.size()));
    implicants
}

/// Append-only memo of generated implicants, keyed by variable count.
///
/// Slots are written once and never mutated afterwards, so a shared
/// reference can be handed to any number of concurrent solvers.
#[derive(Debug, Default)]
pub struct ImplicantCache {
    slots: [OnceLock<Vec<Implicant>>; MAX_SET_VARIABLES + 1],
    generations: AtomicUsize,
}

impl ImplicantCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Implicants for `num_vars` variables, generating them on first use
    pub fn get(&self, num_vars: usize) -> Result<&[Implicant]> {
        check_range(num_vars)?;

        let slot = &self.slots[num_vars];
        if let Some(implicants) = slot.get() {
            trace!("implicant cache hit for {} variables", num_vars);
            return Ok(implicants.as_slice());
        }

        let implicants = slot.get_or_init(|| {
            self.generations.fetch_add(1, Ordering::Relaxed);
            let generated = generate_unchecked(num_vars);
            debug!(
                "generated {} implicants for {} variables",
                generated.len(),
                num_vars
            );
            generated
        });
        Ok(implicants.as_slice())
    }

    /// Whether implicants for `num_vars` variables are already cached
    pub fn contains(&self, num_vars: usize) -> bool {
        self.slots
            .get(num_vars)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// How many times the full enumeration has run
    pub fn generations(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }
}
