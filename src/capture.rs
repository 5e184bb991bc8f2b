//! Window capture policy.
//!
//! Primary strategy: PrintWindow with full-content rendering, which reaches
//! DWM-composited windows but comes back black for some hardware-accelerated
//! surfaces. A blank result is detected by pixel sampling and discarded in
//! favor of the fallback: a BitBlt of the window's screen region, which grabs
//! whatever is visually on top. The surviving BGRA buffer is converted to
//! 24-bit RGB and written as a PNG.

use serde::Serialize;

/// Roughly how many evenly spaced pixels the blank check inspects.
pub const BLANK_SAMPLE_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaptureMethod {
    PrintWindow,
    BitBlt,
}

#[derive(Debug, Serialize)]
pub struct CaptureReport {
    pub ok: bool,
    pub handle: String,
    pub png: String,
    pub width: i32,
    pub height: i32,
    pub method: CaptureMethod,
}

/// Whether a top-down BGRA buffer is all black. Samples evenly spaced pixels
/// and checks the three color channels; alpha is ignored. A buffer too small
/// for the stated dimensions counts as blank, so a truncated capture is
/// discarded rather than indexed past its end.
pub fn is_blank(buf: &[u8], width: i32, height: i32) -> bool {
    let pixels = width as usize * height as usize;
    if pixels == 0 || buf.len() < pixels * 4 {
        return true;
    }
    let step = (pixels / BLANK_SAMPLE_COUNT).max(1);
    for i in (0..pixels).step_by(step) {
        let offset = i * 4;
        if buf[offset] != 0 || buf[offset + 1] != 0 || buf[offset + 2] != 0 {
            return false;
        }
    }
    true
}

/// Convert a top-down 32-bit BGRA buffer to a 24-bit RGB image. Returns None
/// when the buffer does not match the stated dimensions.
pub fn bgra_to_rgb(buf: &[u8], width: u32, height: u32) -> Option<image::RgbImage> {
    if buf.len() != width as usize * height as usize * 4 {
        return None;
    }
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for px in buf.chunks_exact(4) {
        rgb.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    image::RgbImage::from_raw(width, height, rgb)
}

/// Pick the buffer to keep: the primary strategy's result unless it is
/// missing or blank, in which case the fallback runs and its method is
/// reported instead.
pub fn select_capture(
    primary: Option<Vec<u8>>,
    fallback: impl FnOnce() -> Option<Vec<u8>>,
    width: i32,
    height: i32,
) -> Option<(Vec<u8>, CaptureMethod)> {
    match primary.filter(|b| !is_blank(b, width, height)) {
        Some(buf) => Some((buf, CaptureMethod::PrintWindow)),
        None => fallback().map(|buf| (buf, CaptureMethod::BitBlt)),
    }
}

/// Capture a validated window into a PNG file at `out_path`.
#[cfg(windows)]
pub fn capture_window(
    handle: &crate::handle::WindowHandle,
    out_path: &str,
) -> crate::error::Result<CaptureReport> {
    use crate::error::WinctlError;
    use crate::platform::windows as win32;

    let rect = win32::window_rect(handle.raw());
    let width = rect.right - rect.left;
    let height = rect.bottom - rect.top;
    if width <= 0 || height <= 0 {
        return Err(WinctlError::ZeroSizeWindow { width, height });
    }

    let (buf, method) = select_capture(
        win32::gdi::print_window_capture(handle.raw(), width, height),
        || {
            tracing::debug!(
                handle = handle.as_str(),
                "PrintWindow blank or unavailable, falling back to BitBlt"
            );
            win32::gdi::screen_region_capture(rect, width, height)
        },
        width,
        height,
    )
    .ok_or(WinctlError::CaptureFailed)?;

    let img = bgra_to_rgb(&buf, width as u32, height as u32)
        .ok_or_else(|| WinctlError::EncoderUnavailable("pixel buffer size mismatch".to_string()))?;
    img.save_with_format(out_path, image::ImageFormat::Png)
        .map_err(|e| WinctlError::EncoderUnavailable(e.to_string()))?;

    Ok(CaptureReport {
        ok: true,
        handle: handle.as_str().to_string(),
        png: out_path.to_string(),
        width,
        height,
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgra(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    #[test]
    fn all_zero_buffer_is_blank() {
        let buf = vec![0u8; 64 * 64 * 4];
        assert!(is_blank(&buf, 64, 64));
    }

    #[test]
    fn sampled_color_defeats_blank_check() {
        let mut buf = vec![0u8; 64 * 64 * 4];
        // Pixel 0 is always sampled.
        buf[1] = 200;
        assert!(!is_blank(&buf, 64, 64));
    }

    #[test]
    fn alpha_alone_is_still_blank() {
        let mut buf = vec![0u8; 16 * 16 * 4];
        for px in buf.chunks_exact_mut(4) {
            px[3] = 255;
        }
        assert!(is_blank(&buf, 16, 16));
    }

    #[test]
    fn empty_dimensions_count_as_blank() {
        assert!(is_blank(&[], 0, 0));
    }

    #[test]
    fn undersized_buffer_counts_as_blank() {
        let buf = vec![200u8; 8 * 8 * 4];
        assert!(is_blank(&buf, 16, 16));
    }

    #[test]
    fn blank_primary_falls_back_and_reports_bitblt() {
        let blank = vec![0u8; 32 * 32 * 4];
        let replacement = vec![50u8; 32 * 32 * 4];
        let (buf, method) = select_capture(Some(blank), || Some(replacement.clone()), 32, 32)
            .unwrap();
        assert_eq!(method, CaptureMethod::BitBlt);
        assert_eq!(buf, replacement);
    }

    #[test]
    fn colored_primary_wins_without_invoking_fallback() {
        let mut colored = vec![0u8; 32 * 32 * 4];
        colored[0] = 99;
        let (buf, method) = select_capture(
            Some(colored.clone()),
            || panic!("fallback should not run"),
            32,
            32,
        )
        .unwrap();
        assert_eq!(method, CaptureMethod::PrintWindow);
        assert_eq!(buf, colored);
    }

    #[test]
    fn missing_primary_uses_fallback() {
        let replacement = vec![7u8; 4 * 4 * 4];
        let (_, method) = select_capture(None, || Some(replacement), 4, 4).unwrap();
        assert_eq!(method, CaptureMethod::BitBlt);
    }

    #[test]
    fn both_strategies_failing_yields_none() {
        assert!(select_capture(None, || None, 4, 4).is_none());
    }

    #[test]
    fn bgra_to_rgb_swaps_channels() {
        let buf = bgra(&[[10, 20, 30, 255], [1, 2, 3, 0]]);
        let img = bgra_to_rgb(&buf, 2, 1).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [30, 20, 10]);
        assert_eq!(img.get_pixel(1, 0).0, [3, 2, 1]);
    }

    #[test]
    fn bgra_to_rgb_rejects_mismatched_buffer() {
        assert!(bgra_to_rgb(&[0u8; 8], 3, 1).is_none());
    }

    #[test]
    fn method_serializes_as_api_name() {
        assert_eq!(
            serde_json::to_string(&CaptureMethod::PrintWindow).unwrap(),
            "\"PrintWindow\""
        );
        assert_eq!(
            serde_json::to_string(&CaptureMethod::BitBlt).unwrap(),
            "\"BitBlt\""
        );
    }
}
