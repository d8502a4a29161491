//! Basic usage example for argcheck-core
//!
//! Run with: cargo run --example basic_usage

use argcheck_core::{check, check_detailed, ArgError, RESERVED_ARG};

fn main() {
    println!("=== Argcheck Core Basic Usage Example ===\n");

    // Example 1: an accepted input is shifted and returned
    println!("1. Accepted Input:");
    println!("   check(7) = {:?}\n", check(7));

    // Example 2: a rejected input, message only
    println!("2. Rejected Input (message only):");
    match check(RESERVED_ARG) {
        Ok(value) => println!("   unexpected acceptance: {value}\n"),
        Err(err) => println!("   {err}\n"),
    }

    // Example 3: a rejected input with structured fields
    println!("3. Rejected Input (structured):");
    match check_detailed(RESERVED_ARG) {
        Ok(value) => println!("   unexpected acceptance: {value}\n"),
        Err(err) => {
            println!("   display: {err}");
            println!("   arg: {}", err.arg);
            println!("   problem: {}\n", err.problem);
        }
    }

    // Example 4: recovering the fields through a type-erased error
    println!("4. Downcast Through anyhow:");
    let err = anyhow::Error::from(check_detailed(RESERVED_ARG).unwrap_err());
    if let Some(details) = err.downcast_ref::<ArgError>() {
        println!("   arg: {}", details.arg);
        println!("   problem: {}", details.problem);
    }

    println!("\n=== Example Complete ===");
}
