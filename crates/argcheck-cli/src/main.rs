//! Argcheck command-line driver
//!
//! Walks a fixed probe sequence through both check flavors, printing one
//! report line per outcome, then recovers the structured fields from a
//! type-erased failure.

use std::error::Error;
use std::fmt::Display;

use argcheck_core::{check, check_detailed, ArgError, RESERVED_ARG};
use log::debug;

/// Inputs pushed through every check flavor, in report order
const PROBE_ARGS: [i64; 2] = [7, 42];

fn main() {
    env_logger::init();
    debug!("probing {} inputs per check flavor", PROBE_ARGS.len());

    for arg in PROBE_ARGS {
        report("f1", check(arg));
    }
    for arg in PROBE_ARGS {
        report("f2", check_detailed(arg));
    }

    print_recovered_details();
}

/// Print one outcome line under the given stage label.
fn report<E: Display>(label: &str, outcome: Result<i64, E>) {
    match outcome {
        Ok(value) => println!("{label} worked: {value}"),
        Err(err) => println!("{label} failed: {err}"),
    }
}

/// Recover the structured fields from a type-erased failure and print them,
/// one per line. Skips printing when the erased error carries no fields.
fn print_recovered_details() {
    let err: Box<dyn Error> = match check_detailed(RESERVED_ARG) {
        Ok(value) => {
            debug!("reserved input unexpectedly accepted: {value}");
            return;
        }
        Err(err) => Box::new(err),
    };

    match err.downcast_ref::<ArgError>() {
        Some(details) => {
            println!("{}", details.arg);
            println!("{}", details.problem);
        }
        None => debug!("failure is not a detailed rejection, nothing to print"),
    }
}
