use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    winctl::logging::init();

    let mut args = std::env::args().skip(1);
    let (Some(handle), Some(out_path)) = (args.next(), args.next()) else {
        return winctl::report::usage("winctl-capture <handle> <output.png>");
    };

    let result = winctl::WindowHandle::resolve(&handle)
        .and_then(|h| winctl::capture::capture_window(&h, &out_path));
    winctl::report::finish(result)
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    winctl::logging::init();
    winctl::report::unsupported("winctl-capture")
}
