use desktop_app_contract::LaunchOptions;
use leptos::{html, *};
use system_ui::{MenuItem, MenuSeparator, MenuSurface, Modal};

use super::{shortcuts::shortcut_from_event, stop_mouse_event, use_desktop_runtime};
use crate::reducer::DesktopAction;

const CONTEXT_MENU_ID: &str = "desktop-context-menu";

#[component]
pub(super) fn SpotlightOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = create_memo(move |_| state.with(|desktop| desktop.overlays.spotlight_open));
    let query = create_memo(move |_| state.with(|desktop| desktop.overlays.spotlight_query.clone()));
    let results = create_memo(move |_| {
        let query = query.get();
        runtime.catalog.with(|catalog| catalog.search(&query))
    });

    let launch = move |app_id: String| {
        runtime.launcher.open_app(app_id, LaunchOptions::default());
    };

    view! {
        <Show when=move || open.get()>
            {move || {
                let input_ref = create_node_ref::<html::Input>();
                input_ref.on_load(|input| {
                    request_animation_frame(move || {
                        let _ = input.focus();
                    });
                });
                view! {
                    <Modal
                        layout_class="spotlight"
                        aria_label="Spotlight"
                        on_dismiss=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::SetSpotlightOpen { open: false });
                        })
                    >
                        <input
                            node_ref=input_ref
                            type="search"
                            data-ui-slot="spotlight-input"
                            placeholder="Search apps…"
                            aria-label="Search apps"
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                runtime.dispatch_action(DesktopAction::SetSpotlightQuery {
                                    query: event_target_value(&ev),
                                });
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    if let Some(first) = results.with_untracked(|apps| apps.first().map(|app| app.id.clone())) {
                                        launch(first);
                                    }
                                    return;
                                }
                                if let Some(shortcut) = shortcut_from_event(&ev) {
                                    ev.prevent_default();
                                    runtime.dispatch_action(shortcut.action());
                                }
                            }
                        />
                        <div data-ui-slot="spotlight-results" role="listbox">
                            <For each=move || results.get() key=|app| app.id.clone() let:app>
                                {{
                                    let app_id = app.id.clone();
                                    view! {
                                        <MenuItem
                                            layout_class="spotlight-item"
                                            on_click=Callback::new(move |_| launch(app_id.clone()))
                                        >
                                            <img src=app.icon.clone() alt="" />
                                            <span>
                                                <strong>{app.name.clone()}</strong>
                                                <small>{app.window_title.clone()}</small>
                                            </span>
                                        </MenuItem>
                                    }
                                }}
                            </For>
                        </div>
                    </Modal>
                }
            }}
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let position = create_memo(move |_| runtime.state.with(|desktop| desktop.overlays.context_menu));
    let close = move || runtime.dispatch_action(DesktopAction::CloseOverlays);

    view! {
        {move || {
            position.get().map(|position| {
                view! {
                    <div
                        data-ui-slot="dismiss-layer"
                        on:mousedown=move |_| close()
                        on:contextmenu=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    ></div>
                    <MenuSurface
                        id=CONTEXT_MENU_ID
                        role="menu"
                        aria_label="Desktop context menu"
                        style=format!("left:{}px;top:{}px;", position.x, position.y)
                    >
                        <MenuItem on_click=Callback::new(move |_| {
                            runtime.launcher.open_app("finder", LaunchOptions::default());
                        })>
                            "Open Finder"
                        </MenuItem>
                        <MenuItem on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::SetSpotlightOpen { open: true });
                        })>
                            "Open Spotlight"
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseAllWindows);
                        })>
                            "Close All Windows"
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::SetAboutOpen { open: true });
                        })>
                            "About This Desktop"
                        </MenuItem>
                    </MenuSurface>
                }
            })
        }}
    }
}

#[component]
pub(super) fn AboutDialog() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_memo(move |_| runtime.state.with(|desktop| desktop.overlays.about_open));
    let close = move || runtime.dispatch_action(DesktopAction::SetAboutOpen { open: false });
    let host_strategy = runtime.host.with_value(|host| host.host_strategy_name());

    view! {
        <Show when=move || open.get()>
            <Modal
                layout_class="about-dialog"
                aria_label="About This Desktop"
                on_dismiss=Callback::new(move |_| close())
            >
                <header data-ui-slot="about-header">
                    <span data-ui-slot="about-avatar" aria-hidden="true">"DL"</span>
                    <div>
                        <strong>"Portfolio OS"</strong>
                        <small>"Daniel Lee - Junior Frontend / Full-Stack Developer"</small>
                    </div>
                </header>
                <p>
                    "This portfolio is built as a desktop-style UI with real window management and "
                    "interactive apps. It showcases production work (Custom LED Builder) and "
                    "full-stack project dashboard experience."
                </p>
                <p data-ui-slot="about-shortcuts">
                    "Shortcuts: ⌘K Spotlight • Double-click desktop icons • Drag/resize windows"
                </p>
                <p data-ui-slot="about-runtime">
                    {move || {
                        format!(
                            "Apps: {} • Catalog: {} • Host: {}",
                            runtime.catalog.with(|catalog| catalog.apps().len()),
                            runtime.catalog.with(|catalog| catalog.origin().label()),
                            host_strategy,
                        )
                    }}
                </p>
                <footer>
                    <button type="button" on:click=move |_| close()>
                        "Close"
                    </button>
                </footer>
            </Modal>
        </Show>
    }
}
