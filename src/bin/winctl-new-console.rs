use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    winctl::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut request = winctl::console::ConsoleRequest::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--command" if i + 1 < args.len() => {
                request.command = Some(args[i + 1].clone());
                i += 2;
            }
            "--title" if i + 1 < args.len() => {
                request.title = Some(args[i + 1].clone());
                i += 2;
            }
            "--directory" if i + 1 < args.len() => {
                request.directory = Some(args[i + 1].clone());
                i += 2;
            }
            _ => i += 1,
        }
    }

    let config = winctl::config::load();
    winctl::report::finish(winctl::console::launch(&request, &config.shell))
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    winctl::logging::init();
    winctl::report::unsupported("winctl-new-console")
}
