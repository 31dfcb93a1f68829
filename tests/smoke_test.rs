//! Smoke test to verify basic functionality

use ttsolve::render::{circuit, kmap, verilog};
use ttsolve::{solve, RenderConfig, TruthTable};

#[test]
fn smoke_test_basic_solve() {
    let table = TruthTable::new(2, vec![0, 1, 1, 1]).unwrap();
    let solution = solve(&table).unwrap();

    assert_eq!(solution.simplified_expression, "p + q");
    assert_eq!(solution.minterms, vec![1, 2, 3]);
    assert!(verilog::module(&solution, &RenderConfig::default()).is_ok());
    assert!(verilog::testbench(&solution, &RenderConfig::default()).is_ok());
    assert!(kmap::render(&solution).is_ok());
    assert!(circuit::render(&solution, &RenderConfig::default()).is_ok());
}
