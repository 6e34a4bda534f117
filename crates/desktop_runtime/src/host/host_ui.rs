#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use platform_host::WindowSize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{Jitter, WindowId, DEFAULT_WORK_AREA};

/// Height of the menu bar above the work area.
pub const MENU_BAR_HEIGHT_PX: i32 = 28;
/// Vertical space reserved below the work area for the dock.
pub const DOCK_SPACE_PX: i32 = 92;

const TYPING_TAGS: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

pub(super) fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_primary_input_dom_id(window_id.0);
        let callback = Closure::once_into_js(move || {
            let Some(element) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
            else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub(super) fn random_jitter() -> Jitter {
    #[cfg(target_arch = "wasm32")]
    {
        Jitter::from_unit(js_sys::Math::random(), js_sys::Math::random())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Jitter::NONE
    }
}

/// Work area left over once the menu bar and dock strip are removed from the shell surface.
pub fn work_area_from_rect(width: f64, height: f64) -> WindowSize {
    WindowSize::new(
        (width.round() as i32).max(0),
        (height.round() as i32 - MENU_BAR_HEIGHT_PX - DOCK_SPACE_PX).max(0),
    )
}

/// Measures the element with DOM id `desktop_dom_id`, falling back to the default work area when
/// it is not mounted yet.
pub(crate) fn measure_work_area(desktop_dom_id: &str) -> WindowSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(desktop_dom_id))
        {
            let rect = element.get_bounding_client_rect();
            return work_area_from_rect(rect.width(), rect.height());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = desktop_dom_id;
    DEFAULT_WORK_AREA
}

/// True when keyboard shortcuts should yield to a focused text control.
pub fn is_typing_tag(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || TYPING_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Checks the event target of a keyboard event against [`is_typing_tag`].
pub(crate) fn is_typing_target(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast as _;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|element| is_typing_tag(&element.tag_name(), element.is_content_editable()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn work_area_subtracts_dock_space() {
        assert_eq!(work_area_from_rect(1440.0, 900.0), WindowSize::new(1440, 780));
        assert_eq!(work_area_from_rect(1023.6, 100.0), WindowSize::new(1024, 0));
    }

    #[test]
    fn typing_targets_are_detected() {
        assert!(is_typing_tag("INPUT", false));
        assert!(is_typing_tag("textarea", false));
        assert!(is_typing_tag("SELECT", false));
        assert!(is_typing_tag("DIV", true));
        assert!(!is_typing_tag("DIV", false));
        assert!(!is_typing_tag("BUTTON", false));
    }

    #[test]
    fn native_builds_place_windows_without_jitter() {
        assert_eq!(random_jitter(), Jitter::NONE);
    }
}
