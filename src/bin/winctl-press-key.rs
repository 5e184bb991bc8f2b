use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    winctl::logging::init();

    let mut args = std::env::args().skip(1);
    let (Some(handle), Some(key)) = (args.next(), args.next()) else {
        return winctl::report::usage("winctl-press-key <handle> <key>");
    };

    let result = winctl::WindowHandle::resolve(&handle).and_then(|h| {
        let tokens = winctl::input::parse_chord(&key)?;
        let config = winctl::config::load();
        winctl::platform::windows::focus_window(h.raw(), config.settle_ms);
        winctl::input::press_chord(&tokens)?;
        Ok(winctl::input::KeyReport {
            ok: true,
            handle: h.as_str().to_string(),
            key: key.trim().to_lowercase(),
        })
    });
    winctl::report::finish(result)
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    winctl::logging::init();
    winctl::report::unsupported("winctl-press-key")
}
