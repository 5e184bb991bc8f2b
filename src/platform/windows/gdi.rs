//! GDI capture strategies with scoped handle guards.
//!
//! Every attempt acquires a device context, a memory DC, and a bitmap. Each
//! acquisition is wrapped in a guard whose Drop releases it, so no handle
//! leaks on any exit path, early failure included.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject, GetDC, GetDIBits,
    GetWindowDC, ReleaseDC, SelectObject, BITMAPINFO, BITMAPINFOHEADER, DIB_RGB_COLORS, HBITMAP,
    HDC, HGDIOBJ, SRCCOPY,
};
use windows::Win32::UI::WindowsAndMessaging::{PrintWindow, PRINT_WINDOW_FLAGS};

use super::hwnd;

/// Ask DWM to render composited/GPU content too. Not exposed by the windows
/// crate metadata.
const PW_RENDERFULLCONTENT: PRINT_WINDOW_FLAGS = PRINT_WINDOW_FLAGS(2);

/// Window or screen DC, released with ReleaseDC.
struct Dc {
    owner: Option<HWND>,
    raw: HDC,
}

impl Dc {
    fn window(window: HWND) -> Option<Self> {
        let raw = unsafe { GetWindowDC(window) };
        (!raw.is_invalid()).then_some(Self {
            owner: Some(window),
            raw,
        })
    }

    fn screen() -> Option<Self> {
        let raw = unsafe { GetDC(None) };
        (!raw.is_invalid()).then_some(Self { owner: None, raw })
    }
}

impl Drop for Dc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(self.owner, self.raw);
        }
    }
}

/// Memory DC, released with DeleteDC.
struct MemDc(HDC);

impl MemDc {
    fn compatible(dc: &Dc) -> Option<Self> {
        let raw = unsafe { CreateCompatibleDC(dc.raw) };
        (!raw.is_invalid()).then_some(Self(raw))
    }
}

impl Drop for MemDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

/// GDI bitmap, released with DeleteObject.
struct Bitmap(HBITMAP);

impl Bitmap {
    fn compatible(dc: &Dc, width: i32, height: i32) -> Option<Self> {
        let raw = unsafe { CreateCompatibleBitmap(dc.raw, width, height) };
        (!raw.is_invalid()).then_some(Self(raw))
    }
}

impl Drop for Bitmap {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.0);
        }
    }
}

/// Keeps a bitmap selected into a memory DC, restoring the previous object on
/// drop.
struct Selection {
    dc: HDC,
    previous: HGDIOBJ,
}

impl Selection {
    fn select(dc: &MemDc, bitmap: &Bitmap) -> Self {
        let previous = unsafe { SelectObject(dc.0, bitmap.0) };
        Self { dc: dc.0, previous }
    }
}

impl Drop for Selection {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc, self.previous);
        }
    }
}

/// Primary strategy: PrintWindow with PW_RENDERFULLCONTENT into a memory
/// bitmap. Returns the top-down 32-bit BGRA buffer, or None if any GDI step
/// fails. The return value of PrintWindow itself is unreliable for composited
/// windows; the caller decides via blank-buffer sampling instead.
pub fn print_window_capture(raw: isize, width: i32, height: i32) -> Option<Vec<u8>> {
    let target = hwnd(raw);
    let window_dc = Dc::window(target)?;
    let mem_dc = MemDc::compatible(&window_dc)?;
    let bitmap = Bitmap::compatible(&window_dc, width, height)?;
    let _selected = Selection::select(&mem_dc, &bitmap);
    unsafe {
        let _ = PrintWindow(target, mem_dc.0, PW_RENDERFULLCONTENT);
    }
    read_bits(&mem_dc, &bitmap, width, height)
}

/// Fallback strategy: BitBlt the window's screen region from the desktop
/// surface. Captures whatever is visually on top, overlapping windows
/// included, as a deliberate reliability trade-off.
pub fn screen_region_capture(rect: RECT, width: i32, height: i32) -> Option<Vec<u8>> {
    let screen_dc = Dc::screen()?;
    let mem_dc = MemDc::compatible(&screen_dc)?;
    let bitmap = Bitmap::compatible(&screen_dc, width, height)?;
    let _selected = Selection::select(&mem_dc, &bitmap);
    unsafe {
        let _ = BitBlt(
            mem_dc.0,
            0,
            0,
            width,
            height,
            screen_dc.raw,
            rect.left,
            rect.top,
            SRCCOPY,
        );
    }
    read_bits(&mem_dc, &bitmap, width, height)
}

/// Read the bitmap back as a top-down 32-bit BGRA buffer.
fn read_bits(dc: &MemDc, bitmap: &Bitmap, width: i32, height: i32) -> Option<Vec<u8>> {
    let mut info = BITMAPINFO::default();
    info.bmiHeader = BITMAPINFOHEADER {
        biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
        biWidth: width,
        // Negative height requests a top-down DIB.
        biHeight: -height,
        biPlanes: 1,
        biBitCount: 32,
        biCompression: 0, // BI_RGB
        ..Default::default()
    };

    let mut buf = vec![0u8; width as usize * height as usize * 4];
    let copied = unsafe {
        GetDIBits(
            dc.0,
            bitmap.0,
            0,
            height as u32,
            Some(buf.as_mut_ptr() as *mut c_void),
            &mut info,
            DIB_RGB_COLORS,
        )
    };
    (copied != 0).then_some(buf)
}
