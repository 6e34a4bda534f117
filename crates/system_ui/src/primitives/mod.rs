//! Shared shell, navigation, and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod navigation;
mod overlays;
mod shell;

pub use navigation::{Dock, DockButton, DockSeparator, MenuBar, MenuBarSection};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, Modal};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Titlebar control roles, rendered as the three traffic-light buttons.
pub enum WindowControlKind {
    /// Close the window.
    #[default]
    Close,
    /// Minimize to the dock.
    Minimize,
    /// Toggle the maximized layout.
    Maximize,
}

impl WindowControlKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }

    fn default_label(self) -> &'static str {
        match self {
            Self::Close => "Close window",
            Self::Minimize => "Minimize window",
            Self::Maximize => "Maximize window",
        }
    }
}

/// Accessible label shared by a control's `aria-label` and `title`; an empty label falls back to
/// the control's role.
pub(crate) fn control_label(
    kind: WindowControlKind,
    aria_label: MaybeSignal<String>,
) -> Signal<String> {
    Signal::derive(move || {
        let label = aria_label.get();
        if label.trim().is_empty() {
            kind.default_label().to_string()
        } else {
            label
        }
    })
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn call_optional<T: 'static>(callback: Option<&Callback<T>>, ev: T) {
    if let Some(callback) = callback {
        callback.call(ev);
    }
}

pub(crate) fn stop_mouse(ev: &MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_appends_non_empty_extras() {
        assert_eq!(merge_layout_class("ui-dock", None), "ui-dock");
        assert_eq!(merge_layout_class("ui-dock", Some("")), "ui-dock");
        assert_eq!(
            merge_layout_class("ui-dock", Some("dock-compact")),
            "ui-dock dock-compact"
        );
    }

    #[test]
    fn control_tokens_are_stable() {
        assert_eq!(WindowControlKind::Close.token(), "close");
        assert_eq!(WindowControlKind::Maximize.token(), "maximize");
        assert_eq!(bool_token(true), "true");
    }

    #[test]
    fn control_label_tracks_the_prop_and_falls_back_to_the_role() {
        let rt = create_runtime();

        let unlabeled = control_label(WindowControlKind::Minimize, MaybeSignal::default());
        assert_eq!(unlabeled.get_untracked(), "Minimize window");

        let restore = create_rw_signal("Maximize window".to_string());
        let label = control_label(WindowControlKind::Maximize, restore.into());
        assert_eq!(label.get_untracked(), "Maximize window");
        restore.set("Restore window".to_string());
        assert_eq!(label.get_untracked(), "Restore window");

        rt.dispose();
    }
}
