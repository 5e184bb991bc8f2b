use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    winctl::logging::init();

    let mut args = std::env::args().skip(1);
    let (Some(handle), Some(text)) = (args.next(), args.next()) else {
        return winctl::report::usage("winctl-type-text <handle> <text>");
    };

    let result = winctl::WindowHandle::resolve(&handle).and_then(|h| {
        let config = winctl::config::load();
        winctl::platform::windows::focus_window(h.raw(), config.settle_ms);
        winctl::input::type_text(&text)?;
        Ok(winctl::input::TextReport {
            ok: true,
            handle: h.as_str().to_string(),
            text: text.clone(),
        })
    });
    winctl::report::finish(result)
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    winctl::logging::init();
    winctl::report::unsupported("winctl-type-text")
}
