//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menus;
mod shortcuts;
mod window;

use desktop_app_contract::LaunchOptions;
use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
};

use self::{
    dock::{ShellDock, ShellMenuBar},
    menus::{AboutDialog, DesktopContextMenu, SpotlightOverlay},
    shortcuts::shortcut_from_event,
    window::DesktopWindow,
};
use crate::{
    host::{is_typing_target, measure_work_area},
    model::PointerPosition,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const DESKTOP_ROOT_ID: &str = "desktop-shell-root";

#[component]
/// Renders the full desktop shell UI: menu bar, icons, windows, dock, and shell overlays.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = runtime.catalog;

    let report_work_area = move || {
        runtime.dispatch_action(DesktopAction::SetWorkArea {
            size: measure_work_area(DESKTOP_ROOT_ID),
        });
    };
    request_animation_frame(report_work_area);
    let resize_listener = window_event_listener(ev::resize, move |_| report_work_area());

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || is_typing_target(&ev) {
            return;
        }
        if let Some(shortcut) = shortcut_from_event(&ev) {
            ev.prevent_default();
            runtime.dispatch_action(shortcut.action());
        }
    });
    on_cleanup(move || {
        resize_listener.remove();
        key_listener.remove();
    });

    let dismiss_context_menu = Callback::new(move |_| {
        if state.with_untracked(|s| s.overlays.context_menu.is_some()) {
            runtime.dispatch_action(DesktopAction::CloseOverlays);
        }
    });
    let open_context_menu = Callback::new(move |ev: ev::MouseEvent| {
        if pointer_inside_window(&ev) {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::OpenContextMenu {
            position: PointerPosition {
                x: ev.client_x(),
                y: ev.client_y(),
            },
        });
    });

    view! {
        <DesktopRoot id=DESKTOP_ROOT_ID tabindex=-1>
            <ShellMenuBar />
            <DesktopBackdrop on_mousedown=dismiss_context_menu on_contextmenu=open_context_menu>
                <DesktopIconGrid>
                    <For
                        each=move || catalog.with(|catalog| catalog.desktop_apps())
                        key=|app| app.id.clone()
                        let:app
                    >
                        {{
                            let app_id = app.id.clone();
                            view! {
                                <DesktopIconButton
                                    title="Double click to open"
                                    aria_label=format!("Open {}", app.name)
                                    on_dblclick=Callback::new(move |_| {
                                        runtime
                                            .launcher
                                            .open_app(app_id.clone(), LaunchOptions::default());
                                    })
                                >
                                    <img src=app.icon.clone() alt=app.name.clone() draggable="false" />
                                    <span>{app.name.clone()}</span>
                                </DesktopIconButton>
                            }
                        }}
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|desktop| desktop.visible_windows())
                        key=|win| win.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <ShellDock />

            <SpotlightOverlay />
            <DesktopContextMenu />
            <AboutDialog />
        </DesktopRoot>
    }
}

fn pointer_inside_window(ev: &ev::MouseEvent) -> bool {
    use wasm_bindgen::JsCast as _;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("[data-ui-kind='window-frame']").ok().flatten())
        .is_some()
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
