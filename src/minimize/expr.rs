//! Sum-of-products rendering

use super::implicant::Term;

/// Rendered form of the constant-0 function
pub const CONSTANT_ZERO: &str = "0";

/// Rendered form of the constant-1 function
pub const CONSTANT_ONE: &str = "1";

/// Separator between product terms
pub const TERM_SEPARATOR: &str = " + ";

/// Render terms as `t1 + t2 + ...`, each term its literals concatenated.
///
/// The constants are not derived from this function; callers that know
/// the function is constant use [`CONSTANT_ZERO`] / [`CONSTANT_ONE`].
pub fn render(terms: &[Term]) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}

/// Render terms already split into literal strings
pub fn render_literals(terms: &[Vec<String>]) -> String {
    terms
        .iter()
        .map(|t| t.concat())
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}
