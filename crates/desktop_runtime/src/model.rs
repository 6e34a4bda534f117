use desktop_app_contract::{UrlKind, INITIAL_SLUG_PARAM};
use platform_host::WindowSize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// First stacking value handed out; the counter only ever grows from here.
pub const FIRST_Z_INDEX: u64 = 10;
/// Work area assumed until the shell reports the real one.
pub const DEFAULT_WORK_AREA: WindowSize = WindowSize::new(1280, 628);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// What a window shows. Singleton lookups key on this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowTarget {
    /// A catalog app, resolved through the app registry at render time.
    App(String),
    /// An ad-hoc URL window carrying its own payload.
    Url { kind: UrlKind, url: String },
    /// The shared notes hub.
    Notes,
}

impl WindowTarget {
    pub fn app(app_id: impl Into<String>) -> Self {
        Self::App(app_id.into())
    }

    pub fn app_id(&self) -> Option<&str> {
        match self {
            Self::App(app_id) => Some(app_id),
            Self::Url { .. } | Self::Notes => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn grown(self, dw: i32, dh: i32) -> Self {
        Self {
            w: self.w + dw,
            h: self.h + dh,
            ..self
        }
    }

    pub fn size(self) -> WindowSize {
        WindowSize::new(self.w, self.h)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub target: WindowTarget,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u64,
    pub minimized: bool,
    pub maximized: bool,
    pub restore_rect: Option<WindowRect>,
    pub launch_params: Value,
}

impl WindowRecord {
    /// Slug the notes hub should display, when this window carries one.
    pub fn initial_slug(&self) -> Option<String> {
        desktop_app_contract::launch_param_str(&self.launch_params, INITIAL_SLUG_PARAM)
    }
}

/// Launch params for a notes window pointed at `slug`.
pub fn note_launch_params(slug: &str) -> Value {
    json!({ INITIAL_SLUG_PARAM: slug })
}

/// Placement offset applied to freshly opened windows so successive windows do not overlap
/// exactly. Sampled by the host; deterministic in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Jitter {
    pub dx: i32,
    pub dy: i32,
}

impl Jitter {
    pub const NONE: Self = Self { dx: 0, dy: 0 };

    /// Maps two unit-interval samples onto the jitter band.
    pub fn from_unit(rx: f64, ry: f64) -> Self {
        let scale = |sample: f64, span: i32| {
            let sample = if sample.is_finite() {
                sample.clamp(0.0, 1.0)
            } else {
                0.0
            };
            ((sample * f64::from(span)).floor() as i32).min(span - 1)
        };
        Self {
            dx: scale(rx, crate::geometry::JITTER_SPAN_X),
            dy: scale(ry, crate::geometry::JITTER_SPAN_Y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub target: WindowTarget,
    pub title: String,
    pub size: WindowSize,
    pub launch_params: Value,
    pub new_window: bool,
    pub jitter: Jitter,
}

impl OpenWindowRequest {
    pub fn new(target: WindowTarget, title: impl Into<String>, size: WindowSize) -> Self {
        Self {
            target,
            title: title.into(),
            size,
            launch_params: Value::Null,
            new_window: false,
            jitter: Jitter::NONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShellOverlays {
    pub spotlight_open: bool,
    pub spotlight_query: String,
    pub context_menu: Option<PointerPosition>,
    pub about_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Highest stacking value handed out so far. `u64` so the counter never reaches its ceiling
    /// within a session.
    pub z_top: u64,
    pub work_area: WindowSize,
    pub windows: Vec<WindowRecord>,
    pub overlays: ShellOverlays,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            z_top: FIRST_Z_INDEX,
            work_area: DEFAULT_WORK_AREA,
            windows: Vec::new(),
            overlays: ShellOverlays::default(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// First window showing `target`, in open order.
    pub fn window_for_target(&self, target: &WindowTarget) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.target == *target)
    }

    /// Windows the renderer mounts.
    pub fn visible_windows(&self) -> Vec<WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .cloned()
            .collect()
    }

    /// Windows the dock offers to restore, oldest first.
    pub fn minimized_windows(&self) -> Vec<WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.minimized)
            .cloned()
            .collect()
    }

    /// Topmost visible window.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }

    /// Drops any gesture bound to `window_id`.
    pub fn release_window(&mut self, window_id: WindowId) {
        if self.dragging.is_some_and(|s| s.window_id == window_id) {
            self.dragging = None;
        }
        if self.resizing.is_some_and(|s| s.window_id == window_id) {
            self.resizing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn jitter_from_unit_stays_inside_band() {
        assert_eq!(Jitter::from_unit(0.0, 0.0), Jitter { dx: 0, dy: 0 });
        assert_eq!(Jitter::from_unit(0.5, 0.5), Jitter { dx: 30, dy: 20 });
        assert_eq!(Jitter::from_unit(1.0, 1.0), Jitter { dx: 59, dy: 39 });
        assert_eq!(Jitter::from_unit(f64::NAN, -3.0), Jitter { dx: 0, dy: 0 });
    }

    #[test]
    fn focused_window_is_topmost_visible() {
        let record = |id: u64, z_index: u64, minimized: bool| WindowRecord {
            id: WindowId(id),
            target: WindowTarget::app(format!("app-{id}")),
            title: String::new(),
            rect: WindowRect {
                x: 0,
                y: 0,
                w: 420,
                h: 320,
            },
            z_index,
            minimized,
            maximized: false,
            restore_rect: None,
            launch_params: Value::Null,
        };
        let state = DesktopState {
            windows: vec![record(1, 12, false), record(2, 14, true), record(3, 11, false)],
            ..DesktopState::default()
        };

        assert_eq!(state.focused_window_id(), Some(WindowId(1)));
        assert_eq!(state.visible_windows().len(), 2);
        assert_eq!(state.minimized_windows()[0].id, WindowId(2));
    }

    #[test]
    fn interaction_release_only_clears_matching_sessions() {
        let rect = WindowRect {
            x: 0,
            y: 0,
            w: 420,
            h: 320,
        };
        let mut interaction = InteractionState {
            dragging: Some(DragSession {
                window_id: WindowId(1),
                pointer_start: PointerPosition::default(),
                rect_start: rect,
            }),
            resizing: Some(ResizeSession {
                window_id: WindowId(2),
                pointer_start: PointerPosition::default(),
                rect_start: rect,
            }),
        };

        interaction.release_window(WindowId(1));

        assert!(interaction.dragging.is_none());
        assert!(interaction.resizing.is_some());
        assert!(interaction.is_active());
    }

    #[test]
    fn note_params_expose_initial_slug() {
        let record = WindowRecord {
            id: WindowId(1),
            target: WindowTarget::Notes,
            title: "Notes".to_string(),
            rect: WindowRect {
                x: 0,
                y: 0,
                w: 420,
                h: 320,
            },
            z_index: FIRST_Z_INDEX + 1,
            minimized: false,
            maximized: false,
            restore_rect: None,
            launch_params: note_launch_params("edu-cs50"),
        };
        assert_eq!(record.initial_slug(), Some("edu-cs50".to_string()));
    }
}
