//! Gate-level circuit diagram as SVG
//!
//! Every input gets a rail with a NOT gate next to it. Each multi-literal
//! term becomes an AND gate fed from the rails, and an OR gate joins the
//! terms when there is more than one. Constant functions are drawn as a
//! GND or VCC stub.
//!
//! Geometry is computed here; `templates/circuit/diagram.svg.jinja` only
//! turns it into markup.

use super::filters::svg_number;
use super::{engine, CIRCUIT_TEMPLATE};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::minimize::{Solution, NEGATION_MARKER};
use minijinja::context;
use serde::Serialize;

/// x of the input pins
pub const INPUT_X: f64 = 50.0;
/// x of the NOT gates
pub const NOT_X: f64 = 120.0;
/// x of the AND gates
pub const AND_X: f64 = 250.0;
/// x of the OR gate
pub const OR_X: f64 = 350.0;
/// x where the output wire ends
pub const OUTPUT_X: f64 = 420.0;

const RAIL_SPACING: f64 = 50.0;
const AND_SPACING: f64 = 60.0;
const MIN_HEIGHT: f64 = 250.0;
const MARGIN: f64 = 50.0;

/// Offset from a NOT gate's origin to its inverted output
const NOT_OUTPUT: f64 = 26.0;
/// Offset from an AND gate's origin to its output
const AND_OUTPUT: f64 = 30.0;
/// Offset from the OR gate's origin to its output
const OR_OUTPUT: f64 = 35.0;
/// Gap between a gate's input stubs and its body
const STUB: f64 = 10.0;

/// One input variable and the height of its rail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputRail {
    pub name: String,
    pub y: f64,
}

/// A gate's position, body height and input offsets relative to its top
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gate {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub inputs: Vec<f64>,
}

/// Horizontal output wire ending in the output label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputWire {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Laid-out gates and wires for a non-constant solution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitDiagram {
    pub width: f64,
    pub height: f64,
    pub inputs: Vec<InputRail>,
    pub and_gates: Vec<Gate>,
    pub or_gate: Option<Gate>,
    /// SVG path data, one per wire between rails and gates
    pub wires: Vec<String>,
    pub output: OutputWire,
}

impl CircuitDiagram {
    /// Lay out the circuit, or `None` for a constant function
    pub fn from_solution(solution: &Solution) -> Result<Option<Self>> {
        if solution.is_constant_zero() || solution.is_constant_one() {
            return Ok(None);
        }

        let terms = &solution.simplified_expression_terms;
        let num_inputs = solution.variables.len();
        let multi_literal = terms.iter().filter(|t| t.len() > 1).count();

        let height = (num_inputs as f64 * RAIL_SPACING)
            .max(multi_literal.max(1) as f64 * AND_SPACING)
            .max(MIN_HEIGHT)
            + MARGIN;

        let inputs: Vec<InputRail> = solution
            .variables
            .iter()
            .enumerate()
            .map(|(i, name)| InputRail {
                name: name.clone(),
                y: height / (num_inputs + 1) as f64 * (i + 1) as f64,
            })
            .collect();

        let or_gate = (terms.len() > 1).then(|| {
            let or_height = (terms.len() as f64 * 20.0).max(40.0);
            Gate {
                x: OR_X,
                y: height / 2.0 - or_height / 2.0,
                height: or_height,
                inputs: spread(or_height, terms.len()),
            }
        });

        let mut and_gates = Vec::new();
        let mut wires = Vec::new();
        for (index, term) in terms.iter().enumerate() {
            let or_input = or_gate.as_ref().map(|g| g.y + g.inputs[index]);

            if term.len() > 1 {
                let gate_height = ((term.len() - 1) as f64 * 20.0).max(30.0);
                let slot = and_gates.len() + 1;
                let gate_y = height / (multi_literal + 1) as f64 * slot as f64 - gate_height / 2.0;
                let step = gate_height / (term.len() - 1) as f64;
                let gate = Gate {
                    x: AND_X,
                    y: gate_y,
                    height: gate_height,
                    inputs: (0..term.len()).map(|i| step * i as f64).collect(),
                };

                for (literal, offset) in term.iter().zip(&gate.inputs) {
                    let (x, y) = literal_source(&inputs, literal)?;
                    wires.push(format!(
                        "M {} {} H {} V {}",
                        svg_number(x),
                        svg_number(y),
                        svg_number(AND_X - STUB),
                        svg_number(gate_y + offset)
                    ));
                }
                if let Some(target) = or_input {
                    wires.push(format!(
                        "M {} {} H {} V {}",
                        svg_number(AND_X + AND_OUTPUT),
                        svg_number(gate_y + gate_height / 2.0),
                        svg_number(OR_X - STUB),
                        svg_number(target)
                    ));
                }
                and_gates.push(gate);
            } else if let (Some(literal), Some(target)) = (term.first(), or_input) {
                let (x, y) = literal_source(&inputs, literal)?;
                wires.push(format!(
                    "M {} {} H {} V {}",
                    svg_number(x),
                    svg_number(y),
                    svg_number(OR_X - STUB),
                    svg_number(target)
                ));
            }
        }

        let output = match (&or_gate, and_gates.first(), terms.first()) {
            (Some(or), _, _) => OutputWire {
                x1: OR_X + OR_OUTPUT,
                x2: OUTPUT_X,
                y: or.y + or.height / 2.0,
            },
            (None, Some(and), _) => OutputWire {
                x1: AND_X + AND_OUTPUT,
                x2: OUTPUT_X,
                y: and.y + and.height / 2.0,
            },
            (None, None, Some(term)) => {
                let literal = term
                    .first()
                    .ok_or_else(|| Error::Parse("empty term in a non-constant solution".into()))?;
                let (x, y) = literal_source(&inputs, literal)?;
                OutputWire {
                    x1: x,
                    x2: OUTPUT_X,
                    y,
                }
            }
            (None, None, None) => {
                return Err(Error::Parse("solution has no terms".into()));
            }
        };

        Ok(Some(CircuitDiagram {
            width: OUTPUT_X + MARGIN,
            height,
            inputs,
            and_gates,
            or_gate,
            wires,
            output,
        }))
    }
}

/// `count` evenly spaced offsets strictly inside `span`
fn spread(span: f64, count: usize) -> Vec<f64> {
    (1..=count)
        .map(|i| span / (count + 1) as f64 * i as f64)
        .collect()
}

/// Where a literal's signal leaves its rail: the input pin, or the NOT output
fn literal_source(inputs: &[InputRail], literal: &str) -> Result<(f64, f64)> {
    let (name, negated) = match literal.strip_suffix(NEGATION_MARKER) {
        Some(name) => (name, true),
        None => (literal, false),
    };
    let rail = inputs
        .iter()
        .find(|rail| rail.name == name)
        .ok_or_else(|| Error::Parse(format!("Unknown variable in literal '{}'", literal)))?;
    let x = if negated { NOT_X + NOT_OUTPUT } else { INPUT_X };
    Ok((x, rail.y))
}

/// Render the circuit diagram of a solution as a standalone SVG document
pub fn render(solution: &Solution, config: &RenderConfig) -> Result<String> {
    let constant: Option<u8> = if solution.is_constant_zero() {
        Some(0)
    } else if solution.is_constant_one() {
        Some(1)
    } else {
        None
    };

    let template = engine().get_template(CIRCUIT_TEMPLATE)?;
    let svg = template.render(context! {
        output_name => &config.output_name,
        constant => constant,
        circuit => CircuitDiagram::from_solution(solution)?,
        input_x => INPUT_X,
        not_x => NOT_X,
        and_x => AND_X,
        or_x => OR_X,
    })?;
    Ok(svg)
}
