use std::process::ExitCode;

fn main() -> ExitCode {
    winctl::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--path" && i + 1 < args.len() {
            path = Some(args[i + 1].clone());
            i += 2;
        } else {
            i += 1;
        }
    }

    match winctl::listing::list_dirs(path.as_deref()) {
        Ok(listing) => winctl::report::emit(&listing),
        Err(e) => {
            let payload = winctl::listing::failure_envelope(&e, path.as_deref());
            println!("{payload}");
            ExitCode::FAILURE
        }
    }
}
