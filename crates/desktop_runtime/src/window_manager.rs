//! Shared window-manager transition helpers used by the desktop reducer.

use crate::{
    geometry::{clamp_position, clamp_size, initial_rect, maximized_rect},
    model::{DesktopState, OpenWindowRequest, WindowId, WindowRecord},
    reducer::ReducerError,
};

/// Hands out the next stacking value. Never reused, never decremented.
pub fn next_z(state: &mut DesktopState) -> u64 {
    state.z_top += 1;
    state.z_top
}

pub fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

pub fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

/// Raises `window_id` above every other window. Visibility is left alone.
pub fn raise_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    // Validate before consuming a stacking value.
    find_window_mut(state, window_id)?;
    let z_index = next_z(state);
    find_window_mut(state, window_id)?.z_index = z_index;
    Ok(())
}

/// Brings `window_id` back on screen and to the front.
pub fn restore_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?.minimized = false;
    raise_window(state, window_id)
}

/// Either surfaces the existing window for the request's target or creates a new record.
///
/// Returns the id of the window that ended up in front and whether it was newly created.
pub fn open_or_focus(state: &mut DesktopState, req: OpenWindowRequest) -> (WindowId, bool) {
    if !req.new_window {
        if let Some(existing) = state.window_for_target(&req.target).map(|w| w.id) {
            // The id came from the collection, so restoring cannot miss.
            let _ = restore_window(state, existing);
            return (existing, false);
        }
    }

    let id = next_window_id(state);
    let z_index = next_z(state);
    let rect = initial_rect(req.size, req.jitter, state.work_area);
    state.windows.push(WindowRecord {
        id,
        target: req.target,
        title: req.title,
        rect,
        z_index,
        minimized: false,
        maximized: false,
        restore_rect: None,
        launch_params: req.launch_params,
    });
    (id, true)
}

/// Engages or releases maximize, keeping `maximized` and `restore_rect` in lockstep.
pub fn toggle_maximize(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let work_area = state.work_area;
    let window = find_window_mut(state, window_id)?;
    if window.maximized {
        if let Some(restore_rect) = window.restore_rect.take() {
            window.rect = restore_rect;
        }
        window.maximized = false;
    } else {
        window.restore_rect = Some(window.rect);
        window.rect = maximized_rect(work_area);
        window.maximized = true;
    }
    raise_window(state, window_id)
}

/// Stores a clamped position unless the window is maximized.
pub fn move_window(
    state: &mut DesktopState,
    window_id: WindowId,
    x: i32,
    y: i32,
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.maximized {
        (window.rect.x, window.rect.y) = clamp_position(x, y);
    }
    Ok(())
}

/// Stores a clamped size unless the window is maximized.
pub fn resize_window(
    state: &mut DesktopState,
    window_id: WindowId,
    w: i32,
    h: i32,
) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.maximized {
        (window.rect.w, window.rect.h) = clamp_size(w, h);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stacking_values_keep_growing_past_u32() {
        let mut state = DesktopState {
            z_top: u64::from(u32::MAX) - 1,
            ..DesktopState::default()
        };
        let handed_out = (0..3).map(|_| next_z(&mut state)).collect::<Vec<_>>();
        assert!(handed_out.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(handed_out[2] > u64::from(u32::MAX));
        assert_eq!(state.z_top, handed_out[2]);
    }
}
