//! Key and text injection.
//!
//! Keys are named case-insensitively and can be combined into a chord with
//! `+` (e.g. `ctrl+shift+s`). A chord is dispatched simultaneously: modifiers
//! are pressed in order and released in reverse. Text goes through the
//! synthesis backend's Unicode path, so it is safe for characters outside the
//! active keyboard layout.

use serde::Serialize;

use crate::error::{Result, WinctlError};

/// Backend-independent key name, resolved to the synthesis backend's key type
/// at injection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Control,
    Alt,
    Shift,
    Meta,
    Return,
    Tab,
    Escape,
    Space,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Char(char),
}

#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub ok: bool,
    pub handle: String,
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct TextReport {
    pub ok: bool,
    pub handle: String,
    pub text: String,
}

/// Parse a single key name or a `+`-delimited chord.
pub fn parse_chord(spec: &str) -> Result<Vec<KeyToken>> {
    let spec = spec.trim().to_lowercase();
    spec.split('+').map(|part| parse_key(part.trim())).collect()
}

fn parse_key(name: &str) -> Result<KeyToken> {
    let token = match name {
        "ctrl" | "control" => KeyToken::Control,
        "alt" => KeyToken::Alt,
        "shift" => KeyToken::Shift,
        "win" | "super" | "meta" | "cmd" => KeyToken::Meta,
        "enter" | "return" => KeyToken::Return,
        "tab" => KeyToken::Tab,
        "esc" | "escape" => KeyToken::Escape,
        "space" => KeyToken::Space,
        "backspace" => KeyToken::Backspace,
        "delete" | "del" => KeyToken::Delete,
        "up" => KeyToken::Up,
        "down" => KeyToken::Down,
        "left" => KeyToken::Left,
        "right" => KeyToken::Right,
        "home" => KeyToken::Home,
        "end" => KeyToken::End,
        "pageup" | "pgup" => KeyToken::PageUp,
        "pagedown" | "pgdn" => KeyToken::PageDown,
        _ => {
            if let Some(n) = name.strip_prefix('f').and_then(|d| d.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyToken::F(n));
                }
            }
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyToken::Char(c),
                _ => {
                    return Err(WinctlError::InputSynthesisFailed(format!(
                        "Unknown key: {name}"
                    )))
                }
            }
        }
    };
    Ok(token)
}

#[cfg(windows)]
mod inject {
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};

    use super::KeyToken;
    use crate::error::{Result, WinctlError};

    fn synth_err(e: impl std::fmt::Display) -> WinctlError {
        WinctlError::InputSynthesisFailed(e.to_string())
    }

    fn backend() -> Result<Enigo> {
        Enigo::new(&Settings::default()).map_err(synth_err)
    }

    fn to_key(token: KeyToken) -> Key {
        match token {
            KeyToken::Control => Key::Control,
            KeyToken::Alt => Key::Alt,
            KeyToken::Shift => Key::Shift,
            KeyToken::Meta => Key::Meta,
            KeyToken::Return => Key::Return,
            KeyToken::Tab => Key::Tab,
            KeyToken::Escape => Key::Escape,
            KeyToken::Space => Key::Space,
            KeyToken::Backspace => Key::Backspace,
            KeyToken::Delete => Key::Delete,
            KeyToken::Up => Key::UpArrow,
            KeyToken::Down => Key::DownArrow,
            KeyToken::Left => Key::LeftArrow,
            KeyToken::Right => Key::RightArrow,
            KeyToken::Home => Key::Home,
            KeyToken::End => Key::End,
            KeyToken::PageUp => Key::PageUp,
            KeyToken::PageDown => Key::PageDown,
            KeyToken::F(n) => match n {
                1 => Key::F1,
                2 => Key::F2,
                3 => Key::F3,
                4 => Key::F4,
                5 => Key::F5,
                6 => Key::F6,
                7 => Key::F7,
                8 => Key::F8,
                9 => Key::F9,
                10 => Key::F10,
                11 => Key::F11,
                // The parser only produces F1..=F12.
                _ => Key::F12,
            },
            KeyToken::Char(c) => Key::Unicode(c),
        }
    }

    /// Press a chord into whatever currently holds keyboard focus.
    pub fn press_chord(tokens: &[KeyToken]) -> Result<()> {
        let mut enigo = backend()?;
        if let [single] = tokens {
            return enigo.key(to_key(*single), Direction::Click).map_err(synth_err);
        }
        for &token in tokens {
            enigo.key(to_key(token), Direction::Press).map_err(synth_err)?;
        }
        for &token in tokens.iter().rev() {
            enigo
                .key(to_key(token), Direction::Release)
                .map_err(synth_err)?;
        }
        Ok(())
    }

    /// Type a literal string into whatever currently holds keyboard focus.
    pub fn type_text(text: &str) -> Result<()> {
        backend()?.text(text).map_err(synth_err)
    }
}

#[cfg(windows)]
pub use inject::{press_chord, type_text};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key() {
        assert_eq!(parse_chord("enter").unwrap(), vec![KeyToken::Return]);
    }

    #[test]
    fn modifier_chord_preserves_order() {
        assert_eq!(
            parse_chord("ctrl+shift+s").unwrap(),
            vec![KeyToken::Control, KeyToken::Shift, KeyToken::Char('s')]
        );
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            parse_chord("CTRL+C").unwrap(),
            vec![KeyToken::Control, KeyToken::Char('c')]
        );
    }

    #[test]
    fn function_keys() {
        assert_eq!(parse_chord("f5").unwrap(), vec![KeyToken::F(5)]);
        assert_eq!(
            parse_chord("alt+f4").unwrap(),
            vec![KeyToken::Alt, KeyToken::F(4)]
        );
    }

    #[test]
    fn bare_f_is_a_character() {
        assert_eq!(parse_chord("f").unwrap(), vec![KeyToken::Char('f')]);
    }

    #[test]
    fn unknown_name_is_rejected_verbatim() {
        let err = parse_chord("volumeup").unwrap_err();
        assert_eq!(err.to_string(), "Unknown key: volumeup");
    }

    #[test]
    fn empty_chord_part_is_rejected() {
        assert!(parse_chord("ctrl+").is_err());
        assert!(parse_chord("").is_err());
    }
}
