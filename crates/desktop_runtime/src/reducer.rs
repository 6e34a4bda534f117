//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::WindowSize;
use thiserror::Error;

use crate::{
    model::{
        note_launch_params, DesktopState, DragSession, InteractionState, Jitter,
        OpenWindowRequest, PointerPosition, ResizeSession, WindowId, WindowTarget,
    },
    window_manager::{
        find_window_mut, move_window, open_or_focus, raise_window, resize_window,
        restore_window, toggle_maximize,
    },
};

/// Default size of the shared notes window.
pub const NOTES_WINDOW_SIZE: WindowSize = WindowSize::new(820, 560);

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for the request's target, or surface the existing one.
    OpenWindow(OpenWindowRequest),
    /// Open the notes window at `slug`, retargeting the existing one unless `new_window` is set.
    OpenNote {
        /// Note title.
        title: String,
        /// Note slug.
        slug: String,
        /// Force a second notes window.
        new_window: bool,
        /// Placement offset for a newly created window.
        jitter: Jitter,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Close every window.
    CloseAllWindows,
    /// Raise a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Move a window to an absolute position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// Requested x.
        x: i32,
        /// Requested y.
        y: i32,
    },
    /// Resize a window to an absolute size.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// Requested width.
        w: i32,
        /// Requested height.
        h: i32,
    },
    /// Hide a window into the dock.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Bring a minimized window back and raise it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Engage or release maximize.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Record the space available to windows.
    SetWorkArea {
        /// Current work-area size.
        size: WindowSize,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from its corner handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Toggle the spotlight launcher, clearing its query.
    ToggleSpotlight,
    /// Open or close the spotlight launcher.
    SetSpotlightOpen {
        /// Whether spotlight should be shown.
        open: bool,
    },
    /// Replace the spotlight query text.
    SetSpotlightQuery {
        /// New query.
        query: String,
    },
    /// Show the desktop context menu at a pointer position.
    OpenContextMenu {
        /// Menu anchor.
        position: PointerPosition,
    },
    /// Dismiss spotlight, the context menu, and the about dialog.
    CloseOverlays,
    /// Show or hide the about dialog.
    SetAboutOpen {
        /// Whether the dialog should be shown.
        open: bool,
    },
    /// Leave the shell for an external page.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
    /// Open an external URL outside the shell.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for desktop window management and
/// shell overlays. Every stacking change draws from the monotonic counter in
/// [`DesktopState::z_top`].
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present. The state is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let (window_id, _) = open_or_focus(state, req);
            close_launch_overlays(state);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::OpenNote {
            title,
            slug,
            new_window,
            jitter,
        } => {
            let window_title = format!("Notes - {title}");
            let existing = (!new_window)
                .then(|| state.window_for_target(&WindowTarget::Notes))
                .flatten()
                .map(|w| w.id);
            let window_id = match existing {
                Some(window_id) => {
                    let window = find_window_mut(state, window_id)?;
                    window.launch_params = note_launch_params(&slug);
                    window.title = window_title;
                    restore_window(state, window_id)?;
                    window_id
                }
                None => {
                    let mut req =
                        OpenWindowRequest::new(WindowTarget::Notes, window_title, NOTES_WINDOW_SIZE);
                    req.launch_params = note_launch_params(&slug);
                    req.new_window = true;
                    req.jitter = jitter;
                    open_or_focus(state, req).0
                }
            };
            close_launch_overlays(state);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            interaction.release_window(window_id);
        }
        DesktopAction::CloseAllWindows => {
            state.windows.clear();
            *interaction = InteractionState::default();
            state.overlays.context_menu = None;
        }
        DesktopAction::FocusWindow { window_id } => {
            raise_window(state, window_id)?;
            state.overlays.context_menu = None;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            move_window(state, window_id, x, y)?;
        }
        DesktopAction::ResizeWindow { window_id, w, h } => {
            resize_window(state, window_id, w, h)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            find_window_mut(state, window_id)?.minimized = true;
            interaction.release_window(window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            restore_window(state, window_id)?;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ToggleMaximize { window_id } => {
            toggle_maximize(state, window_id)?;
            interaction.release_window(window_id);
        }
        DesktopAction::SetWorkArea { size } => {
            state.work_area = size;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = find_window_mut(state, window_id)?;
            if !window.maximized {
                let rect_start = window.rect;
                raise_window(state, window_id)?;
                interaction.resizing = None;
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let target = session.rect_start.offset(dx, dy);
                move_window(state, session.window_id, target.x, target.y)?;
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize { window_id, pointer } => {
            let window = find_window_mut(state, window_id)?;
            if !window.maximized {
                let rect_start = window.rect;
                raise_window(state, window_id)?;
                interaction.dragging = None;
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing {
                let dw = pointer.x - session.pointer_start.x;
                let dh = pointer.y - session.pointer_start.y;
                let target = session.rect_start.grown(dw, dh);
                resize_window(state, session.window_id, target.w, target.h)?;
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleSpotlight => {
            state.overlays.spotlight_open = !state.overlays.spotlight_open;
            state.overlays.spotlight_query.clear();
            state.overlays.context_menu = None;
        }
        DesktopAction::SetSpotlightOpen { open } => {
            state.overlays.spotlight_open = open;
            state.overlays.spotlight_query.clear();
            state.overlays.context_menu = None;
        }
        DesktopAction::SetSpotlightQuery { query } => {
            state.overlays.spotlight_query = query;
        }
        DesktopAction::OpenContextMenu { position } => {
            state.overlays.context_menu = Some(position);
            state.overlays.spotlight_open = false;
        }
        DesktopAction::CloseOverlays => {
            state.overlays.spotlight_open = false;
            state.overlays.spotlight_query.clear();
            state.overlays.context_menu = None;
            state.overlays.about_open = false;
        }
        DesktopAction::SetAboutOpen { open } => {
            state.overlays.about_open = open;
            state.overlays.context_menu = None;
        }
        DesktopAction::OpenExternalUrl { url } => {
            close_launch_overlays(state);
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    Ok(effects)
}

fn close_launch_overlays(state: &mut DesktopState) {
    state.overlays.spotlight_open = false;
    state.overlays.spotlight_query.clear();
    state.overlays.context_menu = None;
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::UrlKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRect, WindowRecord};

    fn finder_request() -> OpenWindowRequest {
        OpenWindowRequest::new(
            WindowTarget::app("finder"),
            "Finder",
            WindowSize::new(760, 520),
        )
    }

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        req: OpenWindowRequest,
    ) -> WindowId {
        let effects = reduce(state, interaction, DesktopAction::OpenWindow(req));
        match effects.first() {
            Some(RuntimeEffect::FocusWindowInput(window_id)) => *window_id,
            other => panic!("expected focus effect, got {other:?}"),
        }
    }

    fn window(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window")
    }

    fn max_other_z(state: &DesktopState, window_id: WindowId) -> u64 {
        state
            .windows
            .iter()
            .filter(|w| w.id != window_id)
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn opening_finder_creates_single_window_with_default_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, finder_request());

        assert_eq!(state.windows.len(), 1);
        let record = window(&state, id);
        assert_eq!(record.target, WindowTarget::app("finder"));
        assert!(!record.minimized);
        assert!(!record.maximized);
        assert_eq!((record.rect.w, record.rect.h), (760, 520));
        assert_eq!(record.restore_rect, None);
    }

    #[test]
    fn reopening_singleton_focuses_existing_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: first },
        );
        let z_before = window(&state, first).z_index;
        let again = open(&mut state, &mut interaction, finder_request());

        assert_eq!(again, first);
        assert_eq!(state.windows.len(), 1);
        assert!(!window(&state, first).minimized);
        assert!(window(&state, first).z_index > z_before);
    }

    #[test]
    fn new_window_option_creates_distinct_record() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, finder_request());
        let mut req = finder_request();
        req.new_window = true;
        let second = open(&mut state, &mut interaction, req);

        assert_ne!(first, second);
        assert_eq!(state.windows.len(), 2);
        assert!(window(&state, second).z_index > window(&state, first).z_index);
    }

    #[test]
    fn url_windows_are_keyed_by_kind_and_url() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let target = |kind| WindowTarget::Url {
            kind,
            url: "https://example.com".to_string(),
        };

        let iframe = open(
            &mut state,
            &mut interaction,
            OpenWindowRequest::new(target(UrlKind::Iframe), "Example", WindowSize::new(1100, 720)),
        );
        let external = open(
            &mut state,
            &mut interaction,
            OpenWindowRequest::new(target(UrlKind::External), "Example", WindowSize::new(720, 520)),
        );
        let iframe_again = open(
            &mut state,
            &mut interaction,
            OpenWindowRequest::new(target(UrlKind::Iframe), "Example", WindowSize::new(1100, 720)),
        );

        assert_ne!(iframe, external);
        assert_eq!(iframe_again, iframe);
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn open_note_retargets_existing_notes_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let note = |slug: &str, new_window| DesktopAction::OpenNote {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            new_window,
            jitter: Jitter::NONE,
        };

        reduce(&mut state, &mut interaction, note("about", false));
        let notes_id = state.windows[0].id;
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: notes_id,
            },
        );
        let z_before = window(&state, notes_id).z_index;
        reduce(&mut state, &mut interaction, note("edu-cs50", false));

        assert_eq!(state.windows.len(), 1);
        let record = window(&state, notes_id);
        assert_eq!(record.initial_slug(), Some("edu-cs50".to_string()));
        assert_eq!(record.title, "Notes - EDU-CS50");
        assert!(!record.minimized);
        assert!(record.z_index > z_before);

        reduce(&mut state, &mut interaction, note("edu-kean", true));
        assert_eq!(state.windows.len(), 2);
        assert_eq!(
            state.windows[1].initial_slug(),
            Some("edu-kean".to_string())
        );
        assert_eq!(
            window(&state, notes_id).initial_slug(),
            Some("edu-cs50".to_string())
        );
    }

    #[test]
    fn stacking_values_strictly_increase_and_never_repeat() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, finder_request());
        let b = open(
            &mut state,
            &mut interaction,
            OpenWindowRequest::new(WindowTarget::app("terminal"), "Terminal", WindowSize::new(720, 520)),
        );
        let actions = [
            DesktopAction::FocusWindow { window_id: a },
            DesktopAction::FocusWindow { window_id: a },
            DesktopAction::ToggleMaximize { window_id: b },
            DesktopAction::MinimizeWindow { window_id: a },
            DesktopAction::RestoreWindow { window_id: a },
            DesktopAction::ToggleMaximize { window_id: b },
        ];
        let mut seen = state.windows.iter().map(|w| w.z_index).collect::<Vec<_>>();

        for action in actions {
            let target = match &action {
                DesktopAction::FocusWindow { window_id }
                | DesktopAction::ToggleMaximize { window_id }
                | DesktopAction::MinimizeWindow { window_id }
                | DesktopAction::RestoreWindow { window_id } => *window_id,
                _ => unreachable!(),
            };
            let bumps = !matches!(action, DesktopAction::MinimizeWindow { .. });
            let own_before = window(&state, target).z_index;
            let others_before = max_other_z(&state, target);

            reduce(&mut state, &mut interaction, action);

            let own_after = window(&state, target).z_index;
            if bumps {
                assert!(own_after > own_before);
                assert!(own_after > others_before);
                assert!(!seen.contains(&own_after));
                seen.push(own_after);
            } else {
                assert_eq!(own_after, own_before);
            }
        }
    }

    #[test]
    fn minimize_is_idempotent_and_keeps_stacking() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );
        let once = state.clone();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );

        assert_eq!(state, once);
        assert!(window(&state, id).minimized);
        assert!(state.visible_windows().is_empty());
    }

    #[test]
    fn toggle_maximize_twice_restores_exact_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: id,
                x: 133,
                y: 87,
            },
        );
        let before = window(&state, id).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        let maximized = window(&state, id);
        assert!(maximized.maximized);
        assert_eq!(maximized.restore_rect, Some(before));
        assert_eq!(
            maximized.rect,
            WindowRect {
                x: 0,
                y: 0,
                w: state.work_area.w,
                h: state.work_area.h,
            }
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        let restored = window(&state, id);
        assert!(!restored.maximized);
        assert_eq!(restored.restore_rect, None);
        assert_eq!(restored.rect, before);
    }

    #[test]
    fn move_and_resize_are_ignored_while_maximized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        let before = window(&state, id).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: id,
                x: 300,
                y: 300,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: id,
                w: 500,
                h: 400,
            },
        );

        assert_eq!(window(&state, id).rect, before);
    }

    #[test]
    fn move_and_resize_clamp_to_bounds() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: id,
                x: -9000,
                y: -25,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: id,
                w: 10,
                h: 5000,
            },
        );

        assert_eq!(
            window(&state, id).rect,
            WindowRect {
                x: -2000,
                y: 0,
                w: 420,
                h: 1000,
            }
        );
    }

    #[test]
    fn maximize_minimize_restore_keeps_maximized_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());
        let original = window(&state, id).rect;

        for action in [
            DesktopAction::ToggleMaximize { window_id: id },
            DesktopAction::MinimizeWindow { window_id: id },
            DesktopAction::RestoreWindow { window_id: id },
        ] {
            reduce(&mut state, &mut interaction, action);
        }

        let record = window(&state, id);
        assert!(record.maximized);
        assert!(!record.minimized);
        assert_eq!(record.restore_rect, Some(original));
        assert_eq!(
            (record.rect.x, record.rect.y, record.rect.w, record.rect.h),
            (0, 0, state.work_area.w, state.work_area.h)
        );
    }

    #[test]
    fn work_area_changes_apply_to_future_maximize_only() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a },
        );
        let stale = window(&state, a).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetWorkArea {
                size: WindowSize::new(1600, 900),
            },
        );
        assert_eq!(window(&state, a).rect, stale);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a },
        );
        assert_eq!((window(&state, a).rect.w, window(&state, a).rect.h), (1600, 900));
    }

    #[test]
    fn focus_does_not_touch_geometry_or_visibility() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );
        let before = window(&state, id).clone();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: id },
        );

        let after = window(&state, id);
        assert!(after.minimized);
        assert_eq!(after.rect, before.rect);
        assert!(after.z_index > before.z_index);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id)]);
    }

    #[test]
    fn missing_window_ids_error_without_mutation() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, finder_request());
        let snapshot = state.clone();
        let missing = WindowId(99);

        for action in [
            DesktopAction::CloseWindow { window_id: missing },
            DesktopAction::FocusWindow { window_id: missing },
            DesktopAction::MoveWindow {
                window_id: missing,
                x: 1,
                y: 1,
            },
            DesktopAction::ResizeWindow {
                window_id: missing,
                w: 500,
                h: 500,
            },
            DesktopAction::MinimizeWindow { window_id: missing },
            DesktopAction::RestoreWindow { window_id: missing },
            DesktopAction::ToggleMaximize { window_id: missing },
            DesktopAction::BeginMove {
                window_id: missing,
                pointer: PointerPosition::default(),
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::WindowNotFound)
            );
        }
        assert_eq!(state, snapshot);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn drag_focuses_first_then_moves_by_pointer_delta() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, finder_request());
        let mut req = finder_request();
        req.new_window = true;
        let b = open(&mut state, &mut interaction, req);
        let start = window(&state, a).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(state.focused_window_id(), Some(a));
        assert_eq!(window(&state, a).rect, start);
        assert!(window(&state, a).z_index > window(&state, b).z_index);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );
        assert_eq!(window(&state, a).rect, start.offset(25, 40));

        reduce(&mut state, &mut interaction, DesktopAction::EndMove);
        assert!(!interaction.is_active());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 500, y: 500 },
            },
        );
        assert_eq!(window(&state, a).rect, start.offset(25, 40));
    }

    #[test]
    fn gestures_do_not_start_on_maximized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        let before = state.clone();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition::default(),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                pointer: PointerPosition::default(),
            },
        );

        assert!(!interaction.is_active());
        assert_eq!(state, before);
    }

    #[test]
    fn resize_gesture_grows_from_start_size_with_clamps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                pointer: PointerPosition { x: 800, y: 600 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 840, y: 500 },
            },
        );
        assert_eq!(
            (window(&state, id).rect.w, window(&state, id).rect.h),
            (800, 420)
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(
            (window(&state, id).rect.w, window(&state, id).rect.h),
            (420, 320)
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndResize);
        assert!(interaction.resizing.is_none());
    }

    #[test]
    fn closing_dragged_window_ends_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, finder_request());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition::default(),
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        );

        assert!(state.windows.is_empty());
        assert!(!interaction.is_active());
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove {
                    pointer: PointerPosition { x: 4, y: 4 },
                },
            ),
            Ok(Vec::new())
        );
    }

    #[test]
    fn close_all_keeps_stacking_counter_monotonic() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let first = open(&mut state, &mut interaction, finder_request());
        let first_z = window(&state, first).z_index;

        reduce(&mut state, &mut interaction, DesktopAction::CloseAllWindows);
        assert!(state.windows.is_empty());

        let second = open(&mut state, &mut interaction, finder_request());
        assert_ne!(second, first);
        assert!(window(&state, second).z_index > first_z);
    }

    #[test]
    fn launches_close_spotlight_and_context_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, DesktopAction::ToggleSpotlight);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetSpotlightQuery {
                query: "fin".to_string(),
            },
        );
        assert!(state.overlays.spotlight_open);

        open(&mut state, &mut interaction, finder_request());
        assert!(!state.overlays.spotlight_open);
        assert_eq!(state.overlays.spotlight_query, "");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenContextMenu {
                position: PointerPosition { x: 40, y: 60 },
            },
        );
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenExternalUrl {
                url: "https://github.com".to_string(),
            },
        );
        assert_eq!(state.overlays.context_menu, None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl("https://github.com".to_string())]
        );
    }

    #[test]
    fn close_overlays_dismisses_everything() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetAboutOpen { open: true },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetSpotlightOpen { open: true },
        );

        reduce(&mut state, &mut interaction, DesktopAction::CloseOverlays);

        assert_eq!(state.overlays, crate::model::ShellOverlays::default());
    }
}
