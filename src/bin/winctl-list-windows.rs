use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    winctl::logging::init();

    let windows = winctl::platform::windows::list_windows();
    winctl::report::emit(&windows)
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    winctl::logging::init();
    winctl::report::unsupported("winctl-list-windows")
}
