//! Implicant cache behaviour across solves and threads

use std::sync::Arc;
use std::thread;
use ttsolve::minimize::generate::generate;
use ttsolve::{ImplicantCache, Minimizer, TruthTable};

#[test]
fn test_second_lookup_does_not_regenerate() {
    let cache = ImplicantCache::new();
    let first: Vec<_> = cache.get(4).unwrap().to_vec();
    let second: Vec<_> = cache.get(4).unwrap().to_vec();

    assert_eq!(first, second);
    assert_eq!(first.len(), 81);
    assert_eq!(cache.generations(), 1);
}

#[test]
fn test_cache_equals_fresh_generation() {
    let cache = ImplicantCache::new();
    for n in 2..=4 {
        let cached = cache.get(n).unwrap();
        let fresh = generate(n).unwrap();
        assert_eq!(cached, fresh.as_slice());
        // equality is by minterm set; compare the terms too
        let cached_terms: Vec<String> = cached.iter().map(|i| i.term().key()).collect();
        let fresh_terms: Vec<String> = fresh.iter().map(|i| i.term().key()).collect();
        assert_eq!(cached_terms, fresh_terms);
    }
    assert_eq!(cache.generations(), 3);
}

#[test]
fn test_one_generation_per_variable_count() {
    let minimizer = Minimizer::new();
    let tables = ["0111", "0110", "01110001", "00010111", "1010010110100101"];
    for table in tables {
        minimizer.solve(&table.parse().unwrap()).unwrap();
    }
    assert_eq!(minimizer.cache().generations(), 3);
}

#[test]
fn test_prefilled_cache() {
    let cache = ImplicantCache::new();
    cache.get(3).unwrap();
    let minimizer = Minimizer::with_cache(cache);
    minimizer.solve(&"00010111".parse().unwrap()).unwrap();
    assert_eq!(minimizer.cache().generations(), 1);
}

#[test]
fn test_shared_across_threads() {
    let minimizer = Arc::new(Minimizer::new());
    let expected = minimizer
        .solve(&"0110100110010110".parse().unwrap())
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let minimizer = Arc::clone(&minimizer);
            thread::spawn(move || {
                let table = if i % 2 == 0 {
                    "0110100110010110"
                } else {
                    "1001011001101001"
                };
                let table: TruthTable = table.parse().unwrap();
                minimizer.solve(&table).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let solution = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(solution, expected);
        }
        // parity functions have no adjacent 1s: one term per minterm
        assert_eq!(solution.simplified_expression_terms.len(), 8);
    }
    assert_eq!(minimizer.cache().generations(), 1);
}
