//! JSON result envelope.
//!
//! Every binary prints exactly one JSON value to stdout and nothing else;
//! diagnostics go to stderr via tracing. Exit code 0 means success, 1 means
//! failure.

use std::process::ExitCode;

use serde::Serialize;

use crate::error::WinctlError;

/// Print a success payload. The payload struct carries its own `ok` field.
pub fn emit<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let payload = serde_json::json!({
                "ok": false,
                "error": format!("Failed to serialize result: {e}"),
            });
            println!("{payload}");
            ExitCode::FAILURE
        }
    }
}

/// Print the uniform failure envelope.
pub fn fail(err: &WinctlError) -> ExitCode {
    let payload = serde_json::json!({ "ok": false, "error": err.to_string() });
    println!("{payload}");
    ExitCode::FAILURE
}

/// Collapse a tool result into printed JSON plus an exit code.
pub fn finish<T: Serialize>(result: crate::error::Result<T>) -> ExitCode {
    match result {
        Ok(value) => emit(&value),
        Err(err) => fail(&err),
    }
}

/// Wrong or missing arguments.
pub fn usage(text: &str) -> ExitCode {
    let payload = serde_json::json!({ "ok": false, "error": format!("Usage: {text}") });
    println!("{payload}");
    ExitCode::FAILURE
}

/// Stub result for platform-gated binaries built on non-Windows targets.
#[cfg(not(windows))]
pub fn unsupported(tool: &str) -> ExitCode {
    let payload = serde_json::json!({
        "ok": false,
        "error": format!("{tool} is only supported on Windows"),
    });
    println!("{payload}");
    ExitCode::FAILURE
}
