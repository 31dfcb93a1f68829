//! ttsolve CLI - Command-line interface
//!
//! Commands:
//!   solve      - Minimize a truth table
//!   kmap       - Print the Karnaugh map
//!   verilog    - Generate a Verilog module
//!   testbench  - Generate a Verilog testbench
//!   circuit    - Generate an SVG circuit diagram
//!   table      - Print the truth table

use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use ttsolve::render::{circuit, kmap, verilog};
use ttsolve::*;

/// Options that take a value; their values are never positional
const VALUE_FLAGS: [&str; 5] = ["--output", "-o", "--config", "--minterms", "--vars"];

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    init_logging(args.iter().any(|a| a == "--verbose" || a == "-v"));

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "solve" => cmd_solve(&args[2..]),
        "kmap" => cmd_kmap(&args[2..]),
        "verilog" => cmd_verilog(&args[2..]),
        "testbench" => cmd_testbench(&args[2..]),
        "circuit" => cmd_circuit(&args[2..]),
        "table" => cmd_table(&args[2..]),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" => {
            println!("ttsolve {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // A logger may already be installed when embedded; keep going without ours
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn print_usage() {
    println!(
        r#"
ttsolve - Truth table solver

USAGE:
    ttsolve <COMMAND> <TABLE> [OPTIONS]

COMMANDS:
    solve <table> [--json|--yaml]     Minimize to a sum of products
    kmap <table> [--output]           Print the Karnaugh map
    verilog <table> [--output]        Generate a Verilog module
    testbench <table> [--output]      Generate a Verilog testbench
    circuit <table> [--output]        Generate an SVG circuit diagram
    table <table> [--output]          Print the truth table
    schema [solution|config]          Print JSON schema for output type
    version                           Print version

TABLE:
    Output column as 0/1 digits, one per row (4, 8 or 16 rows),
    e.g. 0111 or 0,1,1,1. Alternatively: --minterms 1,2,3 --vars 2

OPTIONS:
    --output <file>                   Output file (default: stdout)
    --config <file>                   Config file (default: ./ttsolve.yaml)
    --json / --yaml                   Solution output format (solve)
    --verbose, -v                     Debug logging on stderr

EXAMPLES:
    ttsolve solve 0111
    ttsolve solve --minterms 0,1,2,3 --vars 3 --json
    ttsolve kmap 0110100110010110
    ttsolve verilog 00010111 --output majority.sv
    ttsolve circuit 01110001 -o circuit.svg
"#
    );
}

fn cmd_solve(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let table = parse_table_arg(args)?;
    let solution = Minimizer::new().solve(&table)?;

    let format = if args.iter().any(|a| a == "--json") {
        OutputFormat::Json
    } else if args.iter().any(|a| a == "--yaml") {
        OutputFormat::Yaml
    } else {
        config.output.format
    };

    let text = match format {
        OutputFormat::Text => solution.to_report(),
        OutputFormat::Json => serde_json::to_string_pretty(&solution)?,
        OutputFormat::Yaml => serde_norway::to_string(&solution)?,
    };
    write_output(&parse_output_arg(args), &text)
}

fn cmd_kmap(args: &[String]) -> Result<()> {
    let table = parse_table_arg(args)?;
    let solution = Minimizer::new().solve(&table)?;

    let map = kmap::render(&solution)?;
    let text = format!("Y = {}\n\n{}", solution.simplified_expression, map.trim_end());
    write_output(&parse_output_arg(args), &text)
}

fn cmd_verilog(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let table = parse_table_arg(args)?;
    let solution = Minimizer::new().solve(&table)?;

    let code = verilog::module(&solution, &config.render)?;
    write_output(&parse_output_arg(args), &code)
}

fn cmd_testbench(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let table = parse_table_arg(args)?;
    let solution = Minimizer::new().solve(&table)?;

    let code = verilog::testbench(&solution, &config.render)?;
    write_output(&parse_output_arg(args), &code)
}

fn cmd_circuit(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let table = parse_table_arg(args)?;
    let solution = Minimizer::new().solve(&table)?;

    let svg = circuit::render(&solution, &config.render)?;
    write_output(&parse_output_arg(args), &svg)
}

fn cmd_table(args: &[String]) -> Result<()> {
    let table = parse_table_arg(args)?;
    let text = table.to_string();
    write_output(&parse_output_arg(args), text.trim_end())
}

fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("solution");

    match schema_name {
        "list" => {
            println!("Available schemas: solution, config");
            Ok(())
        }
        "solution" => print_schema::<Solution>(),
        "config" => print_schema::<Config>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn load_config(args: &[String]) -> Result<Config> {
    if let Some(path) = flag_value(args, &["--config"]) {
        return Config::load(&PathBuf::from(path));
    }
    let current_dir = std::env::current_dir().map_err(Error::Io)?;
    Ok(Config::load_from_dir(&current_dir)?.unwrap_or_default())
}

fn parse_table_arg(args: &[String]) -> Result<TruthTable> {
    if let Some(list) = flag_value(args, &["--minterms"]) {
        let vars = flag_value(args, &["--vars"])
            .ok_or("--minterms requires --vars <2|3|4>")?
            .parse::<usize>()
            .map_err(|e| Error::Parse(format!("Invalid --vars: {}", e)))?;
        let minterms = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|e| Error::Parse(format!("Invalid minterm '{}': {}", s, e)))
            })
            .collect::<Result<Vec<usize>>>()?;
        return TruthTable::from_minterms(vars, &minterms);
    }

    match positional(args) {
        Some(table) => table.parse(),
        None => Err("Missing truth table (e.g. 0111, or --minterms 1,2,3 --vars 2)".into()),
    }
}

/// Value following the first occurrence of any of `names`
fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

/// First argument that is neither a flag nor a flag's value
fn positional(args: &[String]) -> Option<&String> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return Some(arg);
    }
    None
}

fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, &["--output", "-o"]).map(PathBuf::from)
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
