//! Output rendering — turn a [`Solution`](crate::Solution) into text
//!
//! - [`verilog`]: synthesizable module and exhaustive testbench, rendered
//!   from MiniJinja templates embedded in the binary
//! - [`kmap`]: Karnaugh map as a text grid
//! - [`circuit`]: gate-level circuit diagram as SVG

pub mod circuit;
pub mod filters;
pub mod kmap;
pub mod verilog;

pub use circuit::CircuitDiagram;
pub use kmap::KarnaughMap;

use minijinja::Environment;
use std::sync::OnceLock;

// Embedded templates (compiled into binary)
mod embedded {
    pub const VERILOG_MODULE: &str = include_str!("../../templates/verilog/module.jinja");
    pub const VERILOG_TESTBENCH: &str = include_str!("../../templates/verilog/testbench.jinja");
    pub const CIRCUIT_DIAGRAM: &str = include_str!("../../templates/circuit/diagram.svg.jinja");
}

/// Template name of the Verilog module
pub const MODULE_TEMPLATE: &str = "verilog/module.jinja";

/// Template name of the Verilog testbench
pub const TESTBENCH_TEMPLATE: &str = "verilog/testbench.jinja";

/// Template name of the SVG circuit diagram
pub const CIRCUIT_TEMPLATE: &str = "circuit/diagram.svg.jinja";

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    filters::register_filters(&mut env);

    env.add_template(MODULE_TEMPLATE, embedded::VERILOG_MODULE)
        .expect("Failed to load verilog module template");
    env.add_template(TESTBENCH_TEMPLATE, embedded::VERILOG_TESTBENCH)
        .expect("Failed to load verilog testbench template");
    env.add_template(CIRCUIT_TEMPLATE, embedded::CIRCUIT_DIAGRAM)
        .expect("Failed to load circuit diagram template");

    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}
