//! src/main.rs

/*******************************************************************************
 *                                MAIN MODULE
 *-------------------------------------------------------------------------------
 * Entry point for a small demo tool: reads a `.expr` file or an inline
 * expression string from the command line, parses it, and prints its
 * derivative, simplified form, and value under an empty environment.
 ******************************************************************************/

use std::collections::HashMap;
use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use symexpr::{parse, Environment};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage:");
        eprintln!("  {} <file.expr>", args[0]);
        eprintln!("  {} \"<expression>\"", args[0]);
        process::exit(1);
    }

    let input = if args.len() == 2 && args[1].ends_with(".expr") {
        fs::read_to_string(&args[1]).with_context(|| format!("reading {}", args[1]))?
    } else {
        args[1..].join(" ")
    };

    let node = parse(&input);
    println!("parsed:     {}", node);

    let derivative = node.differentiate("x").simplify();
    println!("d/dx:       {}", derivative);

    let simplified = node.simplify();
    println!("simplified: {}", simplified);

    let env: Environment = HashMap::new();
    println!("value:      {}", node.evaluate(&env));

    Ok(())
}
