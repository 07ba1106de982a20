//! Greet command implementation.

use myrustlib_core::{Greeter, GreeterConfig, StatsSnapshot};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;

/// Output of the greet command.
#[derive(Debug, Serialize)]
pub struct GreetResult {
    /// The produced greeting.
    pub greeting: String,
    /// Counters after the call.
    pub stats: StatsSnapshot,
}

/// Runs the greet command.
pub fn run(name: &str, config: GreeterConfig, format: &str) -> Result<(), CliError> {
    let greeter = Greeter::new(config)?;

    let result = build(&greeter, name)?;
    debug!(bytes = result.stats.bytes_out, "greeting built");

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => println!("{}", result.greeting),
    }

    Ok(())
}

fn build(greeter: &Greeter, name: &str) -> Result<GreetResult, CliError> {
    let greeting = greeter.greet(name)?;
    Ok(GreetResult {
        greeting,
        stats: greeter.stats(),
    })
}
