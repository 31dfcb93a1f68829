//! Prime implicant extraction

use super::implicant::{Implicant, MintermSet};
use log::debug;
use std::collections::HashSet;

/// Keep the implicants of `required` that no larger valid implicant contains.
///
/// An implicant is valid when it is non-empty and every minterm it covers
/// is in `required`. Input order is preserved.
pub fn extract(implicants: &[Implicant], required: MintermSet) -> Vec<Implicant> {
    let valid: Vec<&Implicant> = implicants
        .iter()
        .filter(|imp| !imp.minterms().is_empty() && imp.minterms().is_subset(required))
        .collect();

    let mut seen = HashSet::new();
    let primes: Vec<Implicant> = valid
        .iter()
        .filter(|a| {
            !valid.iter().any(|b| {
                b.size() > a.size() && a.minterms().is_strict_subset(b.minterms())
            })
        })
        .filter(|imp| seen.insert(imp.minterms()))
        .map(|imp| (*imp).clone())
        .collect();

    debug!(
        "{} candidate implicants, {} valid, {} prime",
        implicants.len(),
        valid.len(),
        primes.len()
    );
    primes
}
