//! Console launcher.
//!
//! Composes a `cmd.exe /k` command line from the optional directory, title,
//! and initial command, and spawns it detached in a new console window. The
//! spawned process is not waited for or tracked past launch.

use serde::Serialize;

#[derive(Debug, Default)]
pub struct ConsoleRequest {
    pub command: Option<String>,
    pub title: Option<String>,
    pub directory: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConsoleReport {
    pub ok: bool,
    pub command: String,
    pub title: Option<String>,
}

/// Compose the shell payload: change directory, set the window title, then
/// run the initial command, joined with ` && `. None means the shell starts
/// bare, without `/k`.
pub fn compose(request: &ConsoleRequest) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(dir) = &request.directory {
        parts.push(format!("cd /d {dir}"));
    }
    if let Some(title) = &request.title {
        parts.push(format!("title {title}"));
    }
    if let Some(command) = &request.command {
        parts.push(command.clone());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" && "))
    }
}

#[cfg(windows)]
pub fn launch(request: &ConsoleRequest, shell: &str) -> crate::error::Result<ConsoleReport> {
    use std::os::windows::process::CommandExt;

    use windows::Win32::System::Threading::CREATE_NEW_CONSOLE;

    use crate::error::WinctlError;

    let mut cmd = std::process::Command::new(shell);
    if let Some(payload) = compose(request) {
        cmd.arg("/k").arg(payload);
    }
    cmd.creation_flags(CREATE_NEW_CONSOLE.0);
    cmd.spawn()
        .map_err(|e| WinctlError::LaunchFailed(e.to_string()))?;

    Ok(ConsoleReport {
        ok: true,
        command: request
            .command
            .clone()
            .unwrap_or_else(|| "cmd".to_string()),
        title: request.title.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        command: Option<&str>,
        title: Option<&str>,
        directory: Option<&str>,
    ) -> ConsoleRequest {
        ConsoleRequest {
            command: command.map(String::from),
            title: title.map(String::from),
            directory: directory.map(String::from),
        }
    }

    #[test]
    fn bare_request_has_no_payload() {
        assert_eq!(compose(&request(None, None, None)), None);
    }

    #[test]
    fn command_only() {
        assert_eq!(
            compose(&request(Some("npm start"), None, None)).unwrap(),
            "npm start"
        );
    }

    #[test]
    fn title_before_command() {
        assert_eq!(
            compose(&request(Some("dir"), Some("build"), None)).unwrap(),
            "title build && dir"
        );
    }

    #[test]
    fn directory_comes_first() {
        assert_eq!(
            compose(&request(Some("dir"), Some("build"), Some("C:\\src"))).unwrap(),
            "cd /d C:\\src && title build && dir"
        );
    }

    #[test]
    fn title_alone() {
        assert_eq!(
            compose(&request(None, Some("logs"), None)).unwrap(),
            "title logs"
        );
    }
}
