//! Terminal desktop app: a line-oriented view over a [`system_shell`] session.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_shell::{LineKind, ShellEngine, ShellEnvironment, ShellProfile, TermLine};

/// Mount entry used by the desktop app registry.
pub fn mount(context: AppMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

fn clock_text() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        format_clock(0, 0)
    }
}

fn line_class(line: &TermLine) -> &'static str {
    match line.kind {
        LineKind::Out => "terminal-line",
        LineKind::Err => "terminal-line terminal-line-err",
        LineKind::Cmd => "terminal-line terminal-line-cmd",
    }
}

#[component]
/// Terminal app window contents.
///
/// Each mounted window owns one shell session; history and fetched content live as long as the
/// window does.
pub fn TerminalApp(
    /// Runtime context of the hosting window.
    context: AppMountContext,
) -> impl IntoView {
    let input_id = window_primary_input_dom_id(context.window_id);
    let session = ShellEngine::with_builtins().new_session(ShellEnvironment {
        host: context.host.clone(),
        launcher: context.launcher,
        catalog: context.catalog,
        profile: ShellProfile::default(),
        clock: clock_text,
    });
    let lines = session.lines();
    let input = create_rw_signal(String::new());
    let screen = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        let _ = lines.with(Vec::len);
        if let Some(screen) = screen.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let on_keydown = {
        let session = session.clone();
        move |ev: KeyboardEvent| match ev.key().as_str() {
            "Enter" => {
                let line = input.get_untracked();
                input.set(String::new());
                session.submit(line);
            }
            "ArrowUp" => {
                ev.prevent_default();
                if let Some(previous) = session.history_previous() {
                    input.set(previous);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                if let Some(next) = session.history_next() {
                    input.set(next);
                }
            }
            "Tab" => {
                ev.prevent_default();
                let completion = session.complete(input.get_untracked());
                spawn_local(async move {
                    if let Some(replacement) = completion.await {
                        input.set(replacement);
                    }
                });
            }
            _ => {}
        }
    };

    view! {
        <div
            class="app-shell app-terminal-shell"
            on:mousedown=move |_| {
                if let Some(field) = input_ref.get_untracked() {
                    let _ = field.focus();
                }
            }
        >
            <div class="terminal-screen" role="log" aria-live="polite" node_ref=screen>
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .map(|line| view! { <div class=line_class(&line)>{line.text}</div> })
                        .collect_view()
                }}
            </div>
            <input
                id=input_id
                node_ref=input_ref
                class="terminal-input app-field"
                type="text"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder="Type a command… (help, projects, notes, open about)"
                autocomplete="off"
                spellcheck="false"
            />
        </div>
    }
}
