//! Global keyboard shortcut parsing shared by the window-level listener and the spotlight input.

use crate::reducer::DesktopAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShellShortcut {
    ToggleSpotlight,
    CloseOverlays,
}

impl ShellShortcut {
    pub(super) fn action(self) -> DesktopAction {
        match self {
            Self::ToggleSpotlight => DesktopAction::ToggleSpotlight,
            Self::CloseOverlays => DesktopAction::CloseOverlays,
        }
    }
}

/// Maps a key press to a shell shortcut. `command` is Ctrl on Windows/Linux and Cmd on macOS.
pub(super) fn parse_shell_shortcut(key: &str, command: bool) -> Option<ShellShortcut> {
    if command && key.eq_ignore_ascii_case("k") {
        return Some(ShellShortcut::ToggleSpotlight);
    }
    (key == "Escape").then_some(ShellShortcut::CloseOverlays)
}

pub(super) fn shortcut_from_event(ev: &web_sys::KeyboardEvent) -> Option<ShellShortcut> {
    parse_shell_shortcut(&ev.key(), ev.ctrl_key() || ev.meta_key())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_k_toggles_spotlight() {
        assert_eq!(
            parse_shell_shortcut("k", true),
            Some(ShellShortcut::ToggleSpotlight)
        );
        assert_eq!(
            parse_shell_shortcut("K", true),
            Some(ShellShortcut::ToggleSpotlight)
        );
        assert_eq!(parse_shell_shortcut("k", false), None);
    }

    #[test]
    fn escape_closes_overlays_with_or_without_modifiers() {
        assert_eq!(
            parse_shell_shortcut("Escape", false),
            Some(ShellShortcut::CloseOverlays)
        );
        assert_eq!(
            parse_shell_shortcut("Escape", true),
            Some(ShellShortcut::CloseOverlays)
        );
        assert_eq!(parse_shell_shortcut("Enter", false), None);
        assert_eq!(
            ShellShortcut::CloseOverlays.action(),
            DesktopAction::CloseOverlays
        );
    }
}
