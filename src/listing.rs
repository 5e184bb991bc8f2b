//! Immediate-subdirectory listing.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Result, WinctlError};

#[derive(Debug, Serialize)]
pub struct DirListing {
    pub ok: bool,
    pub path: String,
    pub dirs: Vec<String>,
}

/// List the immediate child directories of `path` (current directory when
/// absent), case-insensitively sorted by name. Files are never included. The
/// path is resolved to absolute form before reading.
pub fn list_dirs(path: Option<&str>) -> Result<DirListing> {
    let requested = match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let absolute = std::path::absolute(&requested)?;

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(&absolute)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dirs.sort_by_key(|name| name.to_lowercase());

    Ok(DirListing {
        ok: true,
        path: absolute.to_string_lossy().into_owned(),
        dirs,
    })
}

/// Path string echoed in failure envelopes: the caller's input, or the
/// current directory when none was given.
pub fn requested_display(path: Option<&str>) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p.to_string(),
        None => std::env::current_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Failure envelope for the listing tool. Keeps `path` and an empty `dirs`
/// list so callers always read the same shape.
pub fn failure_envelope(error: &WinctlError, path: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "ok": false,
        "error": error.to_string(),
        "path": requested_display(path),
        "dirs": [],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_directories() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("sub")).unwrap();
        std::fs::write(root.path().join("file.txt"), "x").unwrap();

        let listing = list_dirs(Some(root.path().to_str().unwrap())).unwrap();
        assert!(listing.ok);
        assert_eq!(listing.dirs, vec!["sub"]);
    }

    #[test]
    fn sorts_case_insensitively() {
        let root = tempfile::tempdir().unwrap();
        for name in ["Public", "admin", "Guest"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }

        let listing = list_dirs(Some(root.path().to_str().unwrap())).unwrap();
        assert_eq!(listing.dirs, vec!["admin", "Guest", "Public"]);
    }

    #[test]
    fn apple_sorts_before_banana() {
        let root = tempfile::tempdir().unwrap();
        for name in ["banana", "Apple"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }

        let listing = list_dirs(Some(root.path().to_str().unwrap())).unwrap();
        assert_eq!(listing.dirs, vec!["Apple", "banana"]);
    }

    #[test]
    fn resolves_to_absolute_path() {
        let root = tempfile::tempdir().unwrap();
        let listing = list_dirs(Some(root.path().to_str().unwrap())).unwrap();
        assert!(PathBuf::from(&listing.path).is_absolute());
    }

    #[test]
    fn nonexistent_path_is_an_error_not_a_panic() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("missing");
        assert!(list_dirs(Some(missing.to_str().unwrap())).is_err());
    }

    #[test]
    fn failure_envelope_keeps_path_and_empty_dirs() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("missing");
        let requested = missing.to_str().unwrap();

        let err = list_dirs(Some(requested)).unwrap_err();
        let payload = failure_envelope(&err, Some(requested));
        assert_eq!(payload["ok"], false);
        assert_eq!(payload["path"], requested);
        assert_eq!(payload["dirs"], serde_json::json!([]));
        assert!(!payload["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn blank_input_falls_back_to_current_dir() {
        let listing = list_dirs(Some("   ")).unwrap();
        assert!(PathBuf::from(&listing.path).is_absolute());
    }
}
