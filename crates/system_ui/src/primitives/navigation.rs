use super::*;

#[component]
/// Top menu bar.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-menubar", layout_class)
            role="menubar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </header>
    }
}

#[component]
/// Left or right cluster inside [`MenuBar`].
pub fn MenuBarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom dock strip.
pub fn Dock(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-dock", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="dock"
            on:mousedown=move |ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </nav>
    }
}

#[component]
/// Dock launcher button.
pub fn DockButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] running: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let label = title.clone();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-dock-button", layout_class)
            title=move || title.get()
            aria-label=move || label.get()
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-running=move || bool_token(running.get())
            data-ui-minimized=move || bool_token(minimized.get())
            on:click=move |ev| call_optional(on_click.as_ref(), ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Divider between pinned apps and minimized windows.
pub fn DockSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-dock-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="dock-separator"
        ></div>
    }
}
