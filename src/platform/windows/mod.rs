//! Win32 window operations shared by the tools.
//!
//! Raw handle values come from the caller and are only trusted after an
//! `IsWindow` liveness check (see [`crate::handle::WindowHandle`]).

pub mod gdi;

use std::ffi::c_void;
use std::time::Duration;

use serde::Serialize;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT, TRUE, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, EnumWindows, GetClassNameW, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, GetWindowThreadProcessId, IsIconic, IsWindow, IsWindowVisible, PostMessageW,
    SetForegroundWindow, ShowWindow, SW_RESTORE, SW_SHOW, WM_CLOSE,
};

use crate::handle::WindowHandle;

pub(crate) fn hwnd(raw: isize) -> HWND {
    HWND(raw as *mut c_void)
}

pub fn is_live_window(raw: isize) -> bool {
    unsafe { IsWindow(hwnd(raw)).as_bool() }
}

/// Bounding rectangle in screen coordinates.
pub fn window_rect(raw: isize) -> RECT {
    let mut rect = RECT::default();
    unsafe {
        let _ = GetWindowRect(hwnd(raw), &mut rect);
    }
    rect
}

/// Restore a minimized window, otherwise issue a plain show.
pub fn restore_or_show(raw: isize) {
    let target = hwnd(raw);
    unsafe {
        if IsIconic(target).as_bool() {
            let _ = ShowWindow(target, SW_RESTORE);
        } else {
            let _ = ShowWindow(target, SW_SHOW);
        }
    }
}

pub fn set_foreground(raw: isize) -> bool {
    unsafe { SetForegroundWindow(hwnd(raw)).as_bool() }
}

pub fn bring_to_top(raw: isize) {
    unsafe {
        let _ = BringWindowToTop(hwnd(raw));
    }
}

/// Focus sequence used before input injection: restore/show, take foreground,
/// then wait for the asynchronous focus change to propagate.
pub fn focus_window(raw: isize, settle_ms: u64) {
    restore_or_show(raw);
    let _ = set_foreground(raw);
    std::thread::sleep(Duration::from_millis(settle_ms));
}

#[derive(Debug, Serialize)]
pub struct ActivateReport {
    pub ok: bool,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<&'static str>,
}

/// Bring a window to the foreground, handling the minimized case.
///
/// SetForegroundWindow can be refused by focus-stealing prevention; when that
/// happens we fall back to BringWindowToTop and still report success,
/// annotating which method worked.
pub fn activate_window(handle: &WindowHandle) -> ActivateReport {
    restore_or_show(handle.raw());
    if set_foreground(handle.raw()) {
        ActivateReport {
            ok: true,
            handle: handle.as_str().to_string(),
            method: None,
        }
    } else {
        bring_to_top(handle.raw());
        ActivateReport {
            ok: true,
            handle: handle.as_str().to_string(),
            method: Some("BringWindowToTop"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CloseReport {
    pub ok: bool,
    pub handle: String,
}

/// Post WM_CLOSE fire-and-forget. Does not wait for the window to honor it.
pub fn close_window(handle: &WindowHandle) -> CloseReport {
    unsafe {
        let _ = PostMessageW(hwnd(handle.raw()), WM_CLOSE, WPARAM(0), LPARAM(0));
    }
    CloseReport {
        ok: true,
        handle: handle.as_str().to_string(),
    }
}

/// One visible top-level window, as reported by winctl-list-windows.
#[derive(Debug, Clone, Serialize)]
pub struct WindowDescriptor {
    pub handle: String,
    pub title: String,
    pub pid: u32,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}

/// Enumerate visible top-level windows with a non-empty title, in OS z-order
/// (top to bottom). Results are read fresh, never cached.
pub fn list_windows() -> Vec<WindowDescriptor> {
    let mut windows: Vec<WindowDescriptor> = Vec::new();
    unsafe {
        let _ = EnumWindows(
            Some(enum_windows_cb),
            LPARAM(&mut windows as *mut Vec<WindowDescriptor> as isize),
        );
    }
    windows
}

unsafe extern "system" fn enum_windows_cb(window: HWND, lparam: LPARAM) -> BOOL {
    let out = &mut *(lparam.0 as *mut Vec<WindowDescriptor>);

    if !IsWindowVisible(window).as_bool() {
        return TRUE;
    }
    let title = window_title(window);
    if title.trim().is_empty() {
        return TRUE;
    }

    let mut rect = RECT::default();
    let _ = GetWindowRect(window, &mut rect);
    let mut pid = 0u32;
    GetWindowThreadProcessId(window, Some(&mut pid));

    out.push(WindowDescriptor {
        handle: format!("0x{:X}", window.0 as usize),
        title,
        pid,
        width: rect.right - rect.left,
        height: rect.bottom - rect.top,
        class_name: class_name(window),
        is_visible: true,
    });
    TRUE
}

unsafe fn window_title(window: HWND) -> String {
    let len = GetWindowTextLengthW(window);
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u16; len as usize + 1];
    let copied = GetWindowTextW(window, &mut buf);
    String::from_utf16_lossy(&buf[..copied.max(0) as usize])
}

unsafe fn class_name(window: HWND) -> String {
    let mut buf = [0u16; 256];
    let len = GetClassNameW(window, &mut buf);
    String::from_utf16_lossy(&buf[..len.max(0) as usize])
}
