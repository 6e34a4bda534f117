//! Runtime-effect dispatch for the desktop host boundary.

use leptos::{logging, spawn_local};

use crate::{host::DesktopHostContext, reducer::RuntimeEffect};

pub(super) fn run_runtime_effect(host: DesktopHostContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => host.focus_window_input(window_id),
        RuntimeEffect::OpenExternalUrl(url) => open_external_url(host, url),
    }
}

fn open_external_url(host: DesktopHostContext, url: String) {
    let service = host.services().external_urls.clone();
    spawn_local(async move {
        if let Err(err) = service.open_url(&url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    });
}
