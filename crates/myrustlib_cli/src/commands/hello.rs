//! Hello command implementation.

use myrustlib_core::HELLO_MESSAGE;
use serde_json::json;

use crate::error::CliError;

/// Runs the hello command.
pub fn run(format: &str) -> Result<(), CliError> {
    let message = HELLO_MESSAGE.to_string_lossy();
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&json!({ "greeting": message }))?),
        _ => println!("{message}"),
    }
    Ok(())
}
