//! Pure clamping and placement helpers shared by every window mutation.

use platform_host::WindowSize;

use crate::model::{Jitter, WindowRect};

pub const MIN_WINDOW_WIDTH: i32 = 420;
pub const MAX_WINDOW_WIDTH: i32 = 1600;
pub const MIN_WINDOW_HEIGHT: i32 = 320;
pub const MAX_WINDOW_HEIGHT: i32 = 1000;

pub const MIN_WINDOW_X: i32 = -2000;
pub const MAX_WINDOW_X: i32 = 2000;
/// Windows may not be dragged above the menu bar.
pub const MIN_WINDOW_Y: i32 = 0;
pub const MAX_WINDOW_Y: i32 = 2000;

pub const OPEN_BASE_X: i32 = 80;
pub const OPEN_BASE_Y: i32 = 70;
pub const JITTER_SPAN_X: i32 = 60;
pub const JITTER_SPAN_Y: i32 = 40;

/// Clamps `value` into `[min, max]`, preferring `min` when the range is empty.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

pub fn clamp_position(x: i32, y: i32) -> (i32, i32) {
    (
        clamp(x, MIN_WINDOW_X, MAX_WINDOW_X),
        clamp(y, MIN_WINDOW_Y, MAX_WINDOW_Y),
    )
}

pub fn clamp_size(w: i32, h: i32) -> (i32, i32) {
    (
        clamp(w, MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH),
        clamp(h, MIN_WINDOW_HEIGHT, MAX_WINDOW_HEIGHT),
    )
}

pub fn clamp_rect(rect: WindowRect) -> WindowRect {
    let (x, y) = clamp_position(rect.x, rect.y);
    let (w, h) = clamp_size(rect.w, rect.h);
    WindowRect { x, y, w, h }
}

/// Geometry for a freshly opened window: jittered off the base point, kept inside the work
/// area when it fits.
pub fn initial_rect(size: WindowSize, jitter: Jitter, work_area: WindowSize) -> WindowRect {
    let (w, h) = clamp_size(size.w, size.h);
    let x = clamp(OPEN_BASE_X + jitter.dx, 0, work_area.w - w);
    let y = clamp(OPEN_BASE_Y + jitter.dy, 0, work_area.h - h);
    clamp_rect(WindowRect { x, y, w, h })
}

pub fn maximized_rect(work_area: WindowSize) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: work_area.w,
        h: work_area.h,
    }
}
