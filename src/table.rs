//! Truth table input
//!
//! A [`TruthTable`] is the validated input to the minimizer: a variable
//! count in `2..=4` and one 0/1 output per minterm, indexed by the
//! MSB-first encoding of the input row.

use crate::error::{Error, Result};
use crate::minimize::implicant::{variable_names, MintermSet};
use std::fmt;
use std::str::FromStr;

/// Smallest supported variable count
pub const MIN_VARIABLES: usize = 2;

/// Largest supported variable count
pub const MAX_VARIABLES: usize = 4;

/// Single-output truth table over 2 to 4 variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    num_variables: usize,
    outputs: Vec<bool>,
}

impl TruthTable {
    /// Build from an output vector of `2^num_variables` zeros and ones
    pub fn new(num_variables: usize, outputs: Vec<u8>) -> Result<Self> {
        check_variable_count(num_variables)?;

        let expected = 1usize << num_variables;
        if outputs.len() != expected {
            return Err(Error::OutputLength {
                expected,
                got: outputs.len(),
            });
        }

        let outputs = outputs
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(Error::OutputValue { index, value }),
            })
            .collect::<Result<Vec<bool>>>()?;

        Ok(TruthTable {
            num_variables,
            outputs,
        })
    }

    /// Build from the list of rows whose output is 1
    pub fn from_minterms(num_variables: usize, minterms: &[usize]) -> Result<Self> {
        check_variable_count(num_variables)?;

        let rows = 1usize << num_variables;
        let mut outputs = vec![false; rows];
        for &m in minterms {
            if m >= rows {
                return Err(Error::Parse(format!(
                    "Minterm {} out of range for {} variables",
                    m, num_variables
                )));
            }
            outputs[m] = true;
        }

        Ok(TruthTable {
            num_variables,
            outputs,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Number of rows (`2^num_variables`)
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Output for a single row
    pub fn output(&self, minterm: usize) -> bool {
        self.outputs.get(minterm).copied().unwrap_or(false)
    }

    /// Variable names, most significant first
    pub fn variables(&self) -> Vec<String> {
        variable_names(self.num_variables)
    }

    /// Rows whose output is 1, ascending
    pub fn minterms(&self) -> Vec<usize> {
        self.outputs
            .iter()
            .enumerate()
            .filter(|(_, out)| **out)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn minterm_set(&self) -> MintermSet {
        self.minterms().into_iter().collect()
    }
}

fn check_variable_count(num_variables: usize) -> Result<()> {
    if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&num_variables) {
        return Err(Error::UnsupportedVariableCount {
            got: num_variables,
            min: MIN_VARIABLES,
            max: MAX_VARIABLES,
        });
    }
    Ok(())
}

impl FromStr for TruthTable {
    type Err = Error;

    /// Parse an output column such as `0111` or `0, 1, 1, 1`.
    /// The variable count follows from the number of rows.
    fn from_str(s: &str) -> Result<Self> {
        let outputs = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '_')
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                _ => Err(Error::Parse(format!(
                    "Invalid character '{}' in truth table",
                    c
                ))),
            })
            .collect::<Result<Vec<u8>>>()?;

        let rows = outputs.len();
        if !rows.is_power_of_two() {
            return Err(Error::Parse(format!(
                "Truth table has {} rows, expected 4, 8 or 16",
                rows
            )));
        }

        TruthTable::new(rows.trailing_zeros() as usize, outputs)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.num_variables;
        writeln!(f, "{} | Y", self.variables().join(" "))?;
        writeln!(f, "{}+--", "-".repeat(2 * n))?;
        for (row, &out) in self.outputs.iter().enumerate() {
            let bits: Vec<String> = (0..n)
                .map(|i| ((row >> (n - 1 - i)) & 1).to_string())
                .collect();
            writeln!(f, "{} | {}", bits.join(" "), u8::from(out))?;
        }
        Ok(())
    }
}
