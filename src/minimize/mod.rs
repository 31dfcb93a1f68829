//! # Two-level minimizer
//!
//! Turns a truth table into a sum-of-products expression in three stages:
//!
//! 1. **Generate**: enumerate every implicant of the hypercube for the
//!    variable count (memoized in an [`ImplicantCache`])
//! 2. **Extract**: keep the implicants that only cover 1-rows and are not
//!    contained in a larger such implicant (the prime implicants)
//! 3. **Select**: greedily pick primes until every 1-row is covered
//!
//! Constant functions bypass the pipeline and render as `0` or `1`.
//!
//! ## Example
//!
//! ```rust
//! use ttsolve::{Minimizer, TruthTable};
//!
//! let minimizer = Minimizer::new();
//! let table: TruthTable = "0111".parse()?;
//! let solution = minimizer.solve(&table)?;
//! assert_eq!(solution.simplified_expression, "p + q");
//! # Ok::<(), ttsolve::Error>(())
//! ```

pub mod cover;
pub mod expr;
pub mod generate;
pub mod implicant;
pub mod primes;

pub use generate::ImplicantCache;
pub use implicant::{Implicant, Literal, MintermSet, Term, NEGATION_MARKER, VARIABLE_NAMES};

use crate::error::Result;
use crate::table::TruthTable;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimized form of a truth table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Variable names, most significant first
    pub variables: Vec<String>,
    /// Rows whose output is 1, ascending
    pub minterms: Vec<usize>,
    /// Rendered sum of products, or `0` / `1`
    pub simplified_expression: String,
    /// Product terms as literal strings; `[]` for 0 and `[[]]` for 1
    pub simplified_expression_terms: Vec<Vec<String>>,
}

impl Solution {
    fn constant_zero(variables: Vec<String>) -> Self {
        Solution {
            variables,
            minterms: Vec::new(),
            simplified_expression: expr::CONSTANT_ZERO.to_string(),
            simplified_expression_terms: Vec::new(),
        }
    }

    fn constant_one(variables: Vec<String>, minterms: Vec<usize>) -> Self {
        Solution {
            variables,
            minterms,
            simplified_expression: expr::CONSTANT_ONE.to_string(),
            simplified_expression_terms: vec![Vec::new()],
        }
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn is_constant_zero(&self) -> bool {
        self.simplified_expression_terms.is_empty()
    }

    pub fn is_constant_one(&self) -> bool {
        matches!(self.simplified_expression_terms.as_slice(), [only] if only.is_empty())
    }

    /// Human-readable summary
    pub fn to_report(&self) -> String {
        let minterms: Vec<String> = self.minterms.iter().map(|m| m.to_string()).collect();
        format!(
            "Y = {}\nminterms: m({})\nterms: {}",
            self.simplified_expression,
            minterms.join(", "),
            self.simplified_expression_terms.len()
        )
    }
}

/// Runs the minimization pipeline, owning the implicant cache.
///
/// A single `Minimizer` can be shared between threads; the cache is
/// filled on first use of each variable count.
#[derive(Debug, Default)]
pub struct Minimizer {
    cache: ImplicantCache,
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing (possibly pre-filled) cache
    pub fn with_cache(cache: ImplicantCache) -> Self {
        Minimizer { cache }
    }

    pub fn cache(&self) -> &ImplicantCache {
        &self.cache
    }

    /// Minimize a truth table
    pub fn solve(&self, table: &TruthTable) -> Result<Solution> {
        let num_vars = table.num_variables();
        let variables = table.variables();
        let minterms = table.minterms();

        if minterms.is_empty() {
            debug!("all {} outputs are 0", table.len());
            return Ok(Solution::constant_zero(variables));
        }
        if minterms.len() == table.len() {
            debug!("all {} outputs are 1", table.len());
            return Ok(Solution::constant_one(variables, minterms));
        }

        let required = table.minterm_set();
        let implicants = self.cache.get(num_vars)?;
        let primes = primes::extract(implicants, required);
        let selected = cover::select(&primes, required)?;

        let terms: Vec<Term> = selected.iter().map(|imp| imp.term().clone()).collect();
        let simplified_expression = expr::render(&terms);
        debug!(
            "{} minterms -> {} terms: {}",
            minterms.len(),
            terms.len(),
            simplified_expression
        );

        Ok(Solution {
            variables,
            minterms,
            simplified_expression,
            simplified_expression_terms: terms.iter().map(Term::to_strings).collect(),
        })
    }
}

/// Minimize a truth table with a fresh, single-use [`Minimizer`]
pub fn solve(table: &TruthTable) -> Result<Solution> {
    Minimizer::new().solve(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_str(s: &str) -> Solution {
        solve(&s.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_constant_zero() {
        for table in ["0000", "00000000", "0000000000000000"] {
            let solution = solve_str(table);
            assert_eq!(solution.simplified_expression, "0");
            assert!(solution.simplified_expression_terms.is_empty());
            assert!(solution.minterms.is_empty());
            assert!(solution.is_constant_zero());
        }
    }

    #[test]
    fn test_constant_one() {
        for table in ["1111", "11111111", "1111111111111111"] {
            let solution = solve_str(table);
            assert_eq!(solution.simplified_expression, "1");
            assert_eq!(solution.simplified_expression_terms, vec![Vec::<String>::new()]);
            assert_eq!(solution.minterms.len(), table.len());
            assert!(solution.is_constant_one());
        }
    }

    #[test]
    fn test_or_function() {
        let solution = solve_str("0111");
        assert_eq!(solution.variables, vec!["p", "q"]);
        assert_eq!(solution.minterms, vec![1, 2, 3]);
        assert_eq!(solution.simplified_expression, "p + q");
        assert_eq!(
            solution.simplified_expression_terms,
            vec![vec!["p".to_string()], vec!["q".to_string()]]
        );
    }

    #[test]
    fn test_single_literal() {
        let solution = solve_str("11110000");
        assert_eq!(solution.simplified_expression, "p'");
        assert_eq!(solution.simplified_expression_terms, vec![vec!["p'".to_string()]]);
    }

    #[test]
    fn test_cache_reused_across_solves() {
        let minimizer = Minimizer::new();
        for table in ["0111", "0110", "1000", "0001"] {
            minimizer.solve(&table.parse().unwrap()).unwrap();
        }
        assert_eq!(minimizer.cache().generations(), 1);
    }

    #[test]
    fn test_constants_skip_generation() {
        let minimizer = Minimizer::new();
        minimizer.solve(&"0000".parse().unwrap()).unwrap();
        minimizer.solve(&"1111".parse().unwrap()).unwrap();
        assert_eq!(minimizer.cache().generations(), 0);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(solve_str("0111")).unwrap();
        assert_eq!(json["simplifiedExpression"], "p + q");
        assert_eq!(json["simplifiedExpressionTerms"][1][0], "q");
        assert_eq!(json["minterms"][0], 1);
        assert_eq!(json["variables"][1], "q");
    }

    #[test]
    fn test_report() {
        let report = solve_str("0111").to_report();
        assert!(report.starts_with("Y = p + q"));
        assert!(report.contains("m(1, 2, 3)"));
    }
}
