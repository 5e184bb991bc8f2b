use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    winctl::logging::init();

    let Some(handle) = std::env::args().nth(1) else {
        return winctl::report::usage("winctl-close <handle>");
    };

    let result =
        winctl::WindowHandle::resolve(&handle).map(|h| winctl::platform::windows::close_window(&h));
    winctl::report::finish(result)
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    winctl::logging::init();
    winctl::report::unsupported("winctl-close")
}
