//! Karnaugh map layout
//!
//! Rows take the leading variables and columns the trailing ones, both in
//! reflected Gray-code order so that neighbouring cells differ in exactly
//! one variable:
//!
//! | variables | rows | columns |
//! |-----------|------|---------|
//! | 2         | 2    | 2       |
//! | 3         | 2    | 4       |
//! | 4         | 4    | 4       |

use crate::error::{Error, Result};
use crate::minimize::{MintermSet, Solution};
use crate::table::{MAX_VARIABLES, MIN_VARIABLES};
use std::fmt;

/// Reflected Gray code sequence of `bits` bits
pub fn gray_code(bits: usize) -> Vec<usize> {
    (0..1usize << bits).map(|i| i ^ (i >> 1)).collect()
}

/// A Karnaugh map grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    row_vars: Vec<String>,
    col_vars: Vec<String>,
    rows: Vec<usize>,
    cols: Vec<usize>,
    minterms: MintermSet,
}

impl KarnaughMap {
    /// Lay out a map for `variables` with the given 1-rows
    pub fn new(variables: &[String], minterms: &[usize]) -> Result<Self> {
        let n = variables.len();
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&n) {
            return Err(Error::UnsupportedVariableCount {
                got: n,
                min: MIN_VARIABLES,
                max: MAX_VARIABLES,
            });
        }

        let row_bits = n / 2;
        Ok(KarnaughMap {
            row_vars: variables[..row_bits].to_vec(),
            col_vars: variables[row_bits..].to_vec(),
            rows: gray_code(row_bits),
            cols: gray_code(n - row_bits),
            minterms: minterms.iter().copied().collect(),
        })
    }

    pub fn from_solution(solution: &Solution) -> Result<Self> {
        Self::new(&solution.variables, &solution.minterms)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    /// Minterm shown at grid position `(row, col)`
    pub fn minterm_at(&self, row: usize, col: usize) -> usize {
        (self.rows[row] << self.col_vars.len()) | self.cols[col]
    }

    /// Whether the cell at `(row, col)` holds a 1
    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.minterms.contains(self.minterm_at(row, col))
    }

    pub fn row_labels(&self) -> Vec<String> {
        label_all(&self.rows, self.row_vars.len())
    }

    pub fn col_labels(&self) -> Vec<String> {
        label_all(&self.cols, self.col_vars.len())
    }
}

fn label_all(codes: &[usize], width: usize) -> Vec<String> {
    codes
        .iter()
        .map(|code| format!("{:0width$b}", code, width = width))
        .collect()
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corner = format!("{}\\{}", self.row_vars.concat(), self.col_vars.concat());
        let col_labels = self.col_labels();
        let cell_width = self.col_vars.len();

        let header = format!("{} | {}", corner, col_labels.join(" | "));
        let rule: String = header
            .chars()
            .map(|c| if c == '|' { '+' } else { '-' })
            .collect();
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", rule)?;

        for (r, label) in self.row_labels().iter().enumerate() {
            let cells: Vec<String> = (0..self.num_cols())
                .map(|c| format!("{:>w$}", u8::from(self.cell(r, c)), w = cell_width))
                .collect();
            writeln!(
                f,
                "{:>w$} | {}",
                label,
                cells.join(" | "),
                w = corner.chars().count()
            )?;
        }
        Ok(())
    }
}

/// Render the Karnaugh map of a solution
pub fn render(solution: &Solution) -> Result<String> {
    Ok(KarnaughMap::from_solution(solution)?.to_string())
}
