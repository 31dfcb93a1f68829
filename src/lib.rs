// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # ttsolve — Truth Table Solver
//!
//! Minimizes a single-output boolean function of 2 to 4 variables, given as
//! a truth table, into a sum-of-products expression.
//!
//! ## Quick Start
//!
//! ```rust
//! use ttsolve::{Minimizer, TruthTable};
//!
//! // Y is 1 exactly when p = 0
//! let table = TruthTable::new(3, vec![1, 1, 1, 1, 0, 0, 0, 0])?;
//!
//! let minimizer = Minimizer::new();
//! let solution = minimizer.solve(&table)?;
//!
//! assert_eq!(solution.simplified_expression, "p'");
//! assert_eq!(solution.minterms, vec![0, 1, 2, 3]);
//! # Ok::<(), ttsolve::Error>(())
//! ```
//!
//! ## Notation
//!
//! Variables are named `p q r s` (most significant first). A trailing `'`
//! marks a complemented literal, literals in a term are written side by
//! side and terms are joined with ` + `. The constant functions render as
//! `0` and `1`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  TruthTable                                                 │
//! │       │                                                     │
//! │       └──► Minimizer::solve ──► Solution                    │
//! │                 │                   │                       │
//! │                 │ generate          ├──► verilog::module    │
//! │                 │ (ImplicantCache)  │                       │
//! │                 │ extract primes    ├──► verilog::testbench │
//! │                 │ select cover      │                       │
//! │                 ▼                   ├──► kmap::render       │
//! │           minimal SOP terms         │                       │
//! │                                     └──► circuit::render    │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The only state kept between solves is the implicant cache owned by the
//! [`Minimizer`]; it depends on nothing but the variable count.

pub mod config;
pub mod error;
pub mod minimize;
pub mod render;
pub mod table;

// Re-exports
pub use config::{Config, OutputConfig, OutputFormat, RenderConfig};
pub use error::{Error, Result};
pub use minimize::{
    solve, Implicant, ImplicantCache, Literal, Minimizer, MintermSet, Solution, Term,
};
pub use render::{CircuitDiagram, KarnaughMap};
pub use table::{TruthTable, MAX_VARIABLES, MIN_VARIABLES};

/// Version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
