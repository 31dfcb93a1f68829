//! Implicant representation
//!
//! An implicant is a product term together with the set of minterms it
//! covers. A variable that does not appear in the term is free and ranges
//! over both values.
//!
//! Minterm sets are stored as a bitmask. The bitmask is also the identity
//! of an implicant: two implicants are equal iff they cover the same
//! minterms, and subset tests reduce to a single AND.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed variable alphabet, assigned positionally
pub const VARIABLE_NAMES: [char; 8] = ['p', 'q', 'r', 's', 't', 'u', 'v', 'w'];

/// Suffix marking a complemented literal
pub const NEGATION_MARKER: char = '\'';

/// Largest variable count whose minterms fit in a [`MintermSet`]
pub const MAX_SET_VARIABLES: usize = 6;

/// Names of the first `num_vars` variables (at most the whole alphabet)
pub fn variable_names(num_vars: usize) -> Vec<String> {
    VARIABLE_NAMES
        .iter()
        .take(num_vars)
        .map(|c| c.to_string())
        .collect()
}

/// Bit of `minterm` that holds variable `var` (variable 0 is the MSB)
pub(crate) fn var_bit(num_vars: usize, var: usize) -> usize {
    1 << (num_vars - 1 - var)
}

/// A set of minterm indices in `[0, 64)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MintermSet(u64);

impl MintermSet {
    /// The empty set
    pub const EMPTY: MintermSet = MintermSet(0);

    /// Every minterm of a `num_vars`-variable function
    pub fn full(num_vars: usize) -> Self {
        let count = 1usize << num_vars;
        if count >= 64 {
            MintermSet(u64::MAX)
        } else {
            MintermSet((1u64 << count) - 1)
        }
    }

    pub fn insert(&mut self, minterm: usize) {
        self.0 |= 1u64 << minterm;
    }

    pub fn contains(self, minterm: usize) -> bool {
        minterm < 64 && self.0 & (1u64 << minterm) != 0
    }

    /// Number of minterms in the set
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every minterm of `self` is also in `other`
    pub fn is_subset(self, other: MintermSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// `self` is a subset of `other` and not equal to it
    pub fn is_strict_subset(self, other: MintermSet) -> bool {
        self.is_subset(other) && self != other
    }

    pub fn intersection(self, other: MintermSet) -> MintermSet {
        MintermSet(self.0 & other.0)
    }

    pub fn difference(self, other: MintermSet) -> MintermSet {
        MintermSet(self.0 & !other.0)
    }

    pub fn union(self, other: MintermSet) -> MintermSet {
        MintermSet(self.0 | other.0)
    }

    /// Minterms in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let next = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(next)
        })
    }

    /// Minterms in ascending order, collected
    pub fn to_vec(self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for MintermSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = MintermSet::EMPTY;
        for minterm in iter {
            set.insert(minterm);
        }
        set
    }
}

/// A variable or its complement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Variable index (0 is the most significant minterm bit)
    pub var: usize,
    /// Complemented literal
    pub negated: bool,
}

impl Literal {
    pub fn new(var: usize, negated: bool) -> Self {
        Literal { var, negated }
    }

    /// Variable name from the fixed alphabet
    pub fn name(&self) -> char {
        VARIABLE_NAMES[self.var]
    }

    /// Whether this literal is satisfied by `minterm`
    pub fn evaluate(&self, num_vars: usize, minterm: usize) -> bool {
        let set = minterm & var_bit(num_vars, self.var) != 0;
        set != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}{}", self.name(), NEGATION_MARKER)
        } else {
            write!(f, "{}", self.name())
        }
    }
}

/// A product of literals; the empty term is the constant 1
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    pub fn new(literals: Vec<Literal>) -> Self {
        Term { literals }
    }

    /// Build the term for a `(mask, value)` pair: one literal per fixed
    /// position, in variable order, negated where `value` has a 0.
    pub fn from_mask(num_vars: usize, mask: usize, value: usize) -> Self {
        let literals = (0..num_vars)
            .filter(|&var| mask & var_bit(num_vars, var) != 0)
            .map(|var| Literal::new(var, value & var_bit(num_vars, var) == 0))
            .collect();
        Term { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Concatenated literal text, used to dedup and order terms
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Literal strings in stored order
    pub fn to_strings(&self) -> Vec<String> {
        self.literals.iter().map(|l| l.to_string()).collect()
    }

    /// Whether every literal is satisfied by `minterm`
    pub fn evaluate(&self, num_vars: usize, minterm: usize) -> bool {
        self.literals.iter().all(|l| l.evaluate(num_vars, minterm))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in &self.literals {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// A term together with the minterms it covers
#[derive(Debug, Clone)]
pub struct Implicant {
    term: Term,
    minterms: MintermSet,
}

impl Implicant {
    /// Build the sub-cube fixed by `mask` to `value`.
    ///
    /// `value` must only set bits that are also in `mask`.
    pub fn from_mask(num_vars: usize, mask: usize, value: usize) -> Self {
        debug_assert_eq!(mask & value, value);

        let free = !mask & ((1usize << num_vars) - 1);
        let mut minterms = MintermSet::EMPTY;
        // Walk every submask of the free bits, including zero.
        let mut sub = free;
        loop {
            minterms.insert(value | sub);
            if sub == 0 {
                break;
            }
            sub = (sub - 1) & free;
        }

        Implicant {
            term: Term::from_mask(num_vars, mask, value),
            minterms,
        }
    }

    /// The zero-literal implicant covering every minterm
    pub fn universal(num_vars: usize) -> Self {
        Implicant {
            term: Term::default(),
            minterms: MintermSet::full(num_vars),
        }
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn minterms(&self) -> MintermSet {
        self.minterms
    }

    /// Number of covered minterms
    pub fn size(&self) -> usize {
        self.minterms.len()
    }

    pub fn covers(&self, minterm: usize) -> bool {
        self.minterms.contains(minterm)
    }
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.minterms == other.minterms
    }
}

impl Eq for Implicant {}

impl Hash for Implicant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.minterms.hash(state);
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.term, self.minterms.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::new(0, false).to_string(), "p");
        assert_eq!(Literal::new(3, true).to_string(), "s'");
    }

    #[test]
    fn test_term_from_mask() {
        // 3 vars, fix p=0 and r=1
        let term = Term::from_mask(3, 0b101, 0b001);
        assert_eq!(term.to_string(), "p'r");
        assert_eq!(term.to_strings(), vec!["p'", "r"]);
        assert_eq!(term.len(), 2);
    }

    #[test]
    fn test_implicant_minterms() {
        // p' over 3 variables covers 0..4
        let imp = Implicant::from_mask(3, 0b100, 0b000);
        assert_eq!(imp.minterms().to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(imp.term().to_string(), "p'");

        // fully fixed implicant is a single minterm
        let imp = Implicant::from_mask(3, 0b111, 0b110);
        assert_eq!(imp.minterms().to_vec(), vec![6]);
        assert_eq!(imp.term().to_string(), "pqr'");
    }

    #[test]
    fn test_universal_implicant() {
        let imp = Implicant::universal(2);
        assert!(imp.term().is_empty());
        assert_eq!(imp.minterms().to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(Implicant::universal(6).size(), 64);
    }

    #[test]
    fn test_equality_by_minterms() {
        let a = Implicant::from_mask(2, 0b10, 0b10);
        let b = Implicant {
            term: Term::new(vec![Literal::new(1, false)]),
            minterms: a.minterms(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_term_evaluate_matches_minterms() {
        for mask in 0..16 {
            for value in 0..16 {
                if mask & value != value {
                    continue;
                }
                let imp = Implicant::from_mask(4, mask, value);
                for m in 0..16 {
                    assert_eq!(imp.term().evaluate(4, m), imp.covers(m));
                }
            }
        }
    }

    #[test]
    fn test_minterm_set_ops() {
        let a: MintermSet = [1, 3].into_iter().collect();
        let b: MintermSet = [1, 2, 3].into_iter().collect();
        assert!(a.is_subset(b));
        assert!(a.is_strict_subset(b));
        assert!(!b.is_subset(a));
        assert!(!a.is_strict_subset(a));
        assert_eq!(b.difference(a).to_vec(), vec![2]);
        assert_eq!(a.intersection(b), a);
        assert_eq!(a.union(b), b);
        assert_eq!(b.len(), 3);
    }
}
