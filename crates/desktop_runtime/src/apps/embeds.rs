//! URL-backed window bodies: PDF viewer, iframe embed, and the external-link placeholder.

use std::{collections::HashMap, time::Duration};

use leptos::*;

use crate::{components::use_desktop_runtime, model::WindowId, reducer::DesktopAction};

/// Delay before an iframe window offers the open-in-new-tab fallback. Sites that refuse to be
/// embedded never fire an error event, so a timer is the only signal.
pub const IFRAME_FALLBACK_DELAY: Duration = Duration::from_millis(2500);

/// Returns the URL to open when an external placeholder sees `url`, or `None` when it already
/// opened that URL.
pub fn external_launch_due(last_opened: Option<&str>, url: &str) -> Option<String> {
    (last_opened != Some(url) && !url.is_empty()).then(|| url.to_string())
}

/// External URLs already handed to the browser, per window. Lives with the runtime rather than
/// the view, since minimizing unmounts a window and restoring mounts it again.
#[derive(Debug, Default)]
pub struct ExternalLaunchLedger {
    opened: HashMap<WindowId, String>,
}

impl ExternalLaunchLedger {
    /// Records `url` for `window_id` and returns it when it still has to be opened.
    pub fn claim(&mut self, window_id: WindowId, url: &str) -> Option<String> {
        let due = external_launch_due(self.opened.get(&window_id).map(String::as_str), url)?;
        self.opened.insert(window_id, due.clone());
        Some(due)
    }

    /// Forgets windows that no longer exist.
    pub fn retain_windows(&mut self, mut is_open: impl FnMut(WindowId) -> bool) {
        self.opened.retain(|window_id, _| is_open(*window_id));
    }
}

#[component]
pub(crate) fn PdfView(url: String, title: String) -> impl IntoView {
    view! {
        <div class="app-shell app-pdf-shell">
            <iframe class="app-embed-frame" src=url title=title></iframe>
        </div>
    }
}

#[component]
pub(crate) fn IframeView(url: String, title: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let show_fallback = create_rw_signal(false);

    match set_timeout_with_handle(move || show_fallback.set(true), IFRAME_FALLBACK_DELAY) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::debug_warn!("iframe fallback timer unavailable: {err:?}"),
    }

    let open_live = Callback::new({
        let url = url.clone();
        move |_: ev::MouseEvent| {
            runtime.dispatch_action(DesktopAction::OpenExternalUrl { url: url.clone() });
        }
    });

    view! {
        <div class="app-shell app-iframe-shell">
            <div class="app-toolbar">
                <strong>{title.clone()}</strong>
                <button type="button" class="app-action" on:click=move |ev| open_live.call(ev)>
                    "Open Live ↗"
                </button>
            </div>
            <div class="app-iframe-stage">
                <iframe
                    class="app-embed-frame"
                    src=url
                    title=title
                    on:error=move |_| show_fallback.set(true)
                ></iframe>
                <Show when=move || show_fallback.get()>
                    <div class="app-iframe-fallback" role="note">
                        <strong>"Not loading? Some sites block embedding."</strong>
                        <button
                            type="button"
                            class="app-action"
                            on:click=move |ev| open_live.call(ev)
                        >
                            "Open in new tab ↗"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub(crate) fn ExternalLaunchView(
    window_id: WindowId,
    url: String,
    name: String,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let ledger = runtime.external_launches;

    let due = ledger
        .try_update_value(|ledger| {
            runtime.state.with_untracked(|desktop| {
                ledger.retain_windows(|id| desktop.window(id).is_some());
            });
            ledger.claim(window_id, &url)
        })
        .flatten();
    if let Some(url) = due {
        runtime.dispatch_action(DesktopAction::OpenExternalUrl { url });
    }

    view! {
        <div class="app-shell app-external-shell">
            <p>{format!("Opening {name}…")}</p>
            <p class="app-muted">{url}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn external_launch_fires_once_per_url() {
        let url = "https://github.com/e-dvni";
        assert_eq!(external_launch_due(None, url), Some(url.to_string()));
        assert_eq!(external_launch_due(Some(url), url), None);
        assert_eq!(
            external_launch_due(Some(url), "https://linkedin.com"),
            Some("https://linkedin.com".to_string())
        );
        assert_eq!(external_launch_due(None, ""), None);
    }

    #[test]
    fn ledger_opens_each_window_url_once_across_remounts() {
        let url = "https://github.com/e-dvni";
        let mut ledger = ExternalLaunchLedger::default();

        assert_eq!(ledger.claim(WindowId(1), url), Some(url.to_string()));
        // Restoring a minimized window mounts the view again.
        assert_eq!(ledger.claim(WindowId(1), url), None);
        assert_eq!(ledger.claim(WindowId(2), url), Some(url.to_string()));
        assert_eq!(
            ledger.claim(WindowId(1), "https://linkedin.com"),
            Some("https://linkedin.com".to_string())
        );
    }

    #[test]
    fn ledger_forgets_closed_windows() {
        let url = "https://github.com/e-dvni";
        let mut ledger = ExternalLaunchLedger::default();
        ledger.claim(WindowId(1), url);
        ledger.claim(WindowId(2), url);

        ledger.retain_windows(|id| id == WindowId(2));

        assert_eq!(ledger.claim(WindowId(1), url), Some(url.to_string()));
        assert_eq!(ledger.claim(WindowId(2), url), None);
    }
}
