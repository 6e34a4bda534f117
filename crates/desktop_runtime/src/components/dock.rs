use desktop_app_contract::LaunchOptions;
use leptos::*;
use system_ui::{Dock, DockButton, DockSeparator, MenuBar, MenuBarSection};

use super::use_desktop_runtime;
use crate::{
    model::{WindowRecord, WindowTarget},
    reducer::DesktopAction,
};

/// Dock tooltip for a minimized window.
pub(super) fn restore_label(window: &WindowRecord) -> String {
    format!("Restore: {}", window.title)
}

#[component]
pub(super) fn ShellMenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let origin = Signal::derive(move || runtime.catalog.with(|catalog| catalog.origin()));

    view! {
        <MenuBar aria_label="Menu bar">
            <MenuBarSection ui_slot="brand">
                <span data-ui-slot="menubar-dot" aria-hidden="true"></span>
                <strong>"Daniel Lee"</strong>
                <span data-ui-slot="menubar-product">"Portfolio OS"</span>
            </MenuBarSection>
            <MenuBarSection ui_slot="status">
                <button
                    type="button"
                    data-ui-slot="spotlight-hint"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleSpotlight)
                >
                    "⌘K Spotlight"
                </button>
                <span
                    data-ui-slot="catalog-origin"
                    title=move || format!("App catalog source: {}", origin.get().label())
                >
                    {move || origin.get().label()}
                </span>
            </MenuBarSection>
        </MenuBar>
    }
}

#[component]
pub(super) fn ShellDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let minimized = create_memo(move |_| state.with(|desktop| desktop.minimized_windows()));

    view! {
        <Dock aria_label="Dock">
            <For
                each=move || runtime.catalog.with(|catalog| catalog.dock_apps())
                key=|app| app.id.clone()
                let:app
            >
                {{
                    let running_id = app.id.clone();
                    let running = Signal::derive(move || {
                        state.with(|desktop| {
                            desktop
                                .window_for_target(&WindowTarget::app(running_id.clone()))
                                .is_some()
                        })
                    });
                    let app_id = app.id.clone();
                    view! {
                        <DockButton
                            title=app.name.clone()
                            running=running
                            on_click=Callback::new(move |_| {
                                runtime.launcher.open_app(app_id.clone(), LaunchOptions::default());
                            })
                        >
                            <img src=app.icon.clone() alt=app.name.clone() draggable="false" />
                        </DockButton>
                    }
                }}
            </For>
            <Show when=move || minimized.with(|windows| !windows.is_empty())>
                <DockSeparator />
            </Show>
            <For each=move || minimized.get() key=|win| win.id.0 let:win>
                {{
                    let window_id = win.id;
                    view! {
                        <DockButton
                            title=restore_label(&win)
                            minimized=true
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
                            })
                        >
                            <span data-ui-slot="dock-window-title">{win.title.clone()}</span>
                        </DockButton>
                    }
                }}
            </For>
        </Dock>
    }
}

#[cfg(test)]
mod tests {
    use platform_host::WindowSize;
    use pretty_assertions::assert_eq;

    use crate::{
        model::{DesktopState, OpenWindowRequest},
        reducer::reduce_desktop,
    };

    use super::*;

    #[test]
    fn minimized_windows_get_restore_labels() {
        let mut state = DesktopState::default();
        let mut interaction = Default::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(
                WindowTarget::app("terminal"),
                "Terminal",
                WindowSize::new(760, 520),
            )),
        )
        .expect("open");
        let window_id = state.windows[0].id;
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id },
        )
        .expect("minimize");

        let labels: Vec<_> = state.minimized_windows().iter().map(restore_label).collect();
        assert_eq!(labels, vec!["Restore: Terminal".to_string()]);
    }
}
