//! Verilog generation
//!
//! [`module`] emits a single-output combinational module whose continuous
//! assignment is the minimized sum of products. [`testbench`] emits a
//! testbench that drives every input combination through that module.

use super::{engine, MODULE_TEMPLATE, TESTBENCH_TEMPLATE};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::minimize::Solution;
use minijinja::context;

/// Render the Verilog module for a solution
pub fn module(solution: &Solution, config: &RenderConfig) -> Result<String> {
    let constant: Option<u8> = if solution.is_constant_zero() {
        Some(0)
    } else if solution.is_constant_one() {
        Some(1)
    } else {
        None
    };

    let template = engine().get_template(MODULE_TEMPLATE)?;
    let code = template.render(context! {
        module_name => &config.module_name,
        output_name => &config.output_name,
        inputs => &solution.variables,
        terms => &solution.simplified_expression_terms,
        constant => constant,
    })?;
    Ok(code)
}

/// Render an exhaustive testbench for the module of a solution
pub fn testbench(solution: &Solution, config: &RenderConfig) -> Result<String> {
    let inputs = &solution.variables;
    let n = inputs.len();

    let initial_values = inputs
        .iter()
        .map(|v| format!("{} = 0;", v))
        .collect::<Vec<_>>()
        .join(" ");
    let monitor_format = inputs
        .iter()
        .map(|v| format!("{}=%b", v))
        .collect::<Vec<_>>()
        .join(" ");
    let vectors: Vec<String> = (0..1usize << n)
        .map(|row| {
            inputs
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{} = 1'b{};", v, (row >> (n - 1 - i)) & 1))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let template = engine().get_template(TESTBENCH_TEMPLATE)?;
    let code = template.render(context! {
        module_name => &config.module_name,
        output_name => &config.output_name,
        step_delay => config.step_delay,
        inputs => inputs,
        initial_values => initial_values,
        monitor_format => monitor_format,
        vectors => vectors,
    })?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::solve;

    fn solution(table: &str) -> Solution {
        solve(&table.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_module_sum_of_products() {
        let code = module(&solution("01110001"), &RenderConfig::default()).unwrap();
        assert!(code.starts_with("module logic_circuit(\n  input  logic p, q, r,\n"));
        assert!(code.contains("// Behavioral model for the simplified expression"));
        assert!(code.contains("assign Y = "));
        assert!(code.ends_with("endmodule"));
    }

    #[test]
    fn test_module_negated_literals() {
        // p'q' only
        let code = module(&solution("1000"), &RenderConfig::default()).unwrap();
        assert!(code.contains("  assign Y = (~p & ~q);\n"), "{}", code);
    }

    #[test]
    fn test_module_constants() {
        let zero = module(&solution("0000"), &RenderConfig::default()).unwrap();
        assert!(zero.contains("  // All outputs are 0\n  assign Y = 1'b0;\n"));

        let one = module(&solution("11111111"), &RenderConfig::default()).unwrap();
        assert!(one.contains("  // All outputs are 1\n  assign Y = 1'b1;\n"));
    }

    #[test]
    fn test_module_names_from_config() {
        let config = RenderConfig {
            module_name: "majority".to_string(),
            output_name: "F".to_string(),
            step_delay: 10,
        };
        let code = module(&solution("0111"), &config).unwrap();
        assert!(code.starts_with("module majority("));
        assert!(code.contains("  output logic F\n"));
        assert!(code.contains("  assign F = (p) | (q);"));
    }

    #[test]
    fn test_testbench_vectors() {
        let code = testbench(&solution("0110"), &RenderConfig::default()).unwrap();
        assert!(code.starts_with("`timescale 1ns/1ps\n\nmodule logic_circuit_tb;"));
        assert!(code.contains("      #10 p = 1'b0; q = 1'b0;\n      #10 p = 1'b0; q = 1'b1;\n"));
        assert!(code.contains("      #10 p = 1'b1; q = 1'b1;\n"));
        assert_eq!(code.matches("#10 p =").count(), 4);
        assert!(code.ends_with("endmodule"));
    }

    #[test]
    fn test_testbench_step_delay() {
        let config = RenderConfig {
            step_delay: 5,
            ..RenderConfig::default()
        };
        let code = testbench(&solution("00000001"), &config).unwrap();
        assert_eq!(code.matches("#5 p =").count(), 8);
        assert!(code.contains("      #5;\n"));
    }
}
