//! Custom MiniJinja filters for Verilog and SVG generation

use crate::minimize::NEGATION_MARKER;
use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("verilog_literal", verilog_literal);
    env.add_filter("svg_number", svg_number);
}

/// Rewrite a literal in Verilog syntax: `p'` becomes `~p`
pub fn verilog_literal(value: &str) -> String {
    match value.strip_suffix(NEGATION_MARKER) {
        Some(name) => format!("~{}", name),
        None => value.to_string(),
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub fn svg_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verilog_literal() {
        assert_eq!(verilog_literal("p"), "p");
        assert_eq!(verilog_literal("q'"), "~q");
    }

    #[test]
    fn test_filter_registered() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let out = env
            .render_str("{{ \"r'\" | verilog_literal }}", minijinja::context! {})
            .unwrap();
        assert_eq!(out, "~r");
    }

    #[test]
    fn test_svg_number() {
        assert_eq!(svg_number(150.0), "150");
        assert_eq!(svg_number(143.333333), "143.33");
        assert_eq!(svg_number(-0.001), "0");
        assert_eq!(svg_number(7.5), "7.5");
    }

    #[test]
    fn test_svg_number_filter_in_expression() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let out = env
            .render_str("{{ (y + 5) | svg_number }}", minijinja::context! { y => 62.5 })
            .unwrap();
        assert_eq!(out, "67.5");
    }
}
