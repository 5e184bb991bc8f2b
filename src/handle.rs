use crate::error::{Result, WinctlError};

/// A window handle that has been parsed and, on Windows, checked against a
/// live window.
///
/// Raw handle values are unsafe aliases with no ownership tracking across
/// process runs, so every tool re-validates at the start of its invocation
/// and never trusts a previously seen value. The original text form is kept
/// for echoing back in results and error messages.
#[derive(Debug, Clone)]
pub struct WindowHandle {
    raw: isize,
    text: String,
}

impl WindowHandle {
    /// Parse a handle from its textual form: decimal, or hex with a
    /// `0x`/`0X` prefix. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
            Some(hex) => isize::from_str_radix(hex, 16),
            None => trimmed.parse::<isize>(),
        };
        match parsed {
            Ok(raw) => Ok(Self {
                raw,
                text: trimmed.to_string(),
            }),
            Err(_) => Err(WinctlError::InvalidHandle(trimmed.to_string())),
        }
    }

    /// Parse and verify the handle refers to a live window. All handle-taking
    /// tools construct through here so the liveness check cannot be skipped.
    #[cfg(windows)]
    pub fn resolve(input: &str) -> Result<Self> {
        let handle = Self::parse(input)?;
        if !crate::platform::windows::is_live_window(handle.raw) {
            return Err(WinctlError::WindowNotFound(handle.text));
        }
        Ok(handle)
    }

    pub fn raw(&self) -> isize {
        self.raw
    }

    /// The handle exactly as the caller wrote it.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal() {
        assert_eq!(WindowHandle::parse("6699").unwrap().raw(), 6699);
    }

    #[test]
    fn parses_hex_both_prefix_cases() {
        assert_eq!(WindowHandle::parse("0x1A2B").unwrap().raw(), 6699);
        assert_eq!(WindowHandle::parse("0X1a2b").unwrap().raw(), 6699);
    }

    #[test]
    fn decimal_and_hex_forms_agree() {
        let dec = WindowHandle::parse("6699").unwrap();
        let hex = WindowHandle::parse("0x1A2B").unwrap();
        assert_eq!(dec.raw(), hex.raw());
    }

    #[test]
    fn trims_whitespace_but_keeps_trimmed_text() {
        let h = WindowHandle::parse("  0xFF  ").unwrap();
        assert_eq!(h.raw(), 255);
        assert_eq!(h.as_str(), "0xFF");
    }

    #[test]
    fn rejects_junk() {
        assert!(matches!(
            WindowHandle::parse("window-1"),
            Err(WinctlError::InvalidHandle(_))
        ));
        assert!(matches!(
            WindowHandle::parse("0xZZ"),
            Err(WinctlError::InvalidHandle(_))
        ));
        assert!(matches!(
            WindowHandle::parse(""),
            Err(WinctlError::InvalidHandle(_))
        ));
    }

    #[test]
    fn invalid_handle_error_echoes_input() {
        let err = WindowHandle::parse("nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid handle: nope");
    }
}
