//! Greedy cover selection
//!
//! Picks prime implicants until every required minterm is covered. Each
//! round takes the implicant covering the most still-uncovered minterms;
//! on a tie the earlier implicant wins. This is the classic greedy set
//! cover and is not guaranteed to be minimal.

use super::implicant::{Implicant, MintermSet};
use crate::error::{Error, Result};
use log::{error, trace};
use std::collections::HashSet;

/// Select a cover of `required` from `primes`.
///
/// The result is deduplicated by term and sorted by term key. Fails with
/// [`Error::UncoveredMinterms`] if the primes cannot cover `required`,
/// which means they were not derived from it.
pub fn select(primes: &[Implicant], required: MintermSet) -> Result<Vec<Implicant>> {
    let mut selected: Vec<&Implicant> = Vec::new();
    let mut uncovered = required;

    while !uncovered.is_empty() {
        let mut best: Option<&Implicant> = None;
        let mut best_count = 0;

        for prime in primes {
            let count = prime.minterms().intersection(uncovered).len();
            if count > best_count {
                best_count = count;
                best = Some(prime);
            }
        }

        let Some(prime) = best else {
            error!(
                "cover selection stalled with {} minterms uncovered",
                uncovered.len()
            );
            return Err(Error::UncoveredMinterms {
                minterms: uncovered.to_vec(),
            });
        };

        trace!("selected {} covering {} new minterms", prime, best_count);
        uncovered = uncovered.difference(prime.minterms());
        selected.push(prime);
    }

    let mut seen = HashSet::new();
    let mut cover: Vec<Implicant> = selected
        .into_iter()
        .filter(|imp| seen.insert(imp.term().key()))
        .cloned()
        .collect();
    cover.sort_by_cached_key(|imp| imp.term().key());
    Ok(cover)
}
