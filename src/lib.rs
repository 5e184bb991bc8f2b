//! Library backing the `winctl-*` binaries.
//!
//! Each binary performs exactly one window-control operation and prints a
//! single JSON value to stdout. The library holds everything the binaries
//! share: handle parsing and validation, the error taxonomy, the JSON result
//! envelope, and the Win32 glue.

pub mod capture;
pub mod config;
pub mod console;
pub mod error;
pub mod handle;
pub mod input;
pub mod listing;
pub mod logging;
pub mod platform;
pub mod report;

pub use error::WinctlError;
pub use handle::WindowHandle;
