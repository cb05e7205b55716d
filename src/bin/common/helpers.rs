use std::fmt::Display;

use log::trace;
use pinebarrens::errors::FireModelError;
use serde::Serialize;

#[derive(Debug)]
pub struct CliError {
    msg: String,
}

impl From<String> for CliError {
    fn from(msg: String) -> Self {
        CliError { msg }
    }
}

impl From<CliError> for String {
    fn from(value: CliError) -> String {
        value.msg
    }
}

impl From<&str> for CliError {
    fn from(msg: &str) -> Self {
        CliError { msg: msg.into() }
    }
}

impl From<FireModelError> for CliError {
    fn from(err: FireModelError) -> Self {
        CliError {
            msg: err.to_string(),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for CliError {}

/// Pretty print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| format!("Cannot serialize output: {}", err))?;
    trace!("writing {} bytes of JSON", text.len());
    println!("{}", text);
    Ok(())
}
