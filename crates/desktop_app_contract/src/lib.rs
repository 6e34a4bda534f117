//! Shared contract types between the desktop window manager runtime and the UI surfaces that
//! launch windows.
//!
//! Every launch entry point (desktop icons, dock, spotlight, context menu, the terminal shell,
//! the finder) goes through the same three [`Launcher`] commands, with [`LaunchOptions`]
//! controlling singleton-versus-new-window semantics uniformly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGetUntracked, View};
use platform_host::{AppDescriptor, HostServices};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// Launch-param key holding the slug a notes window should display.
pub const INITIAL_SLUG_PARAM: &str = "initial_slug";

/// Returns the DOM id apps should assign to their primary input so the runtime can focus it.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-primary-input-{window_id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Options shared by every launch command.
pub struct LaunchOptions {
    /// Create a second window even when one for the same target already exists.
    pub new_window: bool,
}

impl LaunchOptions {
    /// Options requesting a fresh window.
    pub const fn new_window() -> Self {
        Self { new_window: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How an ad-hoc URL window presents its page.
pub enum UrlKind {
    /// Embedded in the window.
    Iframe,
    /// Opened outside the shell; the window shows a placeholder.
    External,
}

impl UrlKind {
    /// Parses `iframe` / `external`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "iframe" => Some(Self::Iframe),
            "external" => Some(Self::External),
            _ => None,
        }
    }

    /// Stable lowercase token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iframe => "iframe",
            Self::External => "external",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload for [`Launcher::open_url`].
pub struct OpenUrlRequest {
    /// Window title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Presentation kind.
    pub kind: UrlKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload for [`Launcher::open_note`].
pub struct OpenNoteRequest {
    /// Note title, used for the window title.
    pub title: String,
    /// Note slug shown by the notes hub.
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Launch command delivered to the runtime.
pub enum LaunchRequest {
    /// Open a catalog app by id.
    App {
        /// Catalog app id.
        app_id: String,
        /// Launch options.
        options: LaunchOptions,
    },
    /// Open an ad-hoc URL window.
    Url {
        /// URL payload.
        request: OpenUrlRequest,
        /// Launch options.
        options: LaunchOptions,
    },
    /// Open or retarget the notes window.
    Note {
        /// Note payload.
        request: OpenNoteRequest,
        /// Launch options.
        options: LaunchOptions,
    },
}

#[derive(Clone, Copy)]
/// Launcher handle handed to every UI surface.
pub struct Launcher {
    sender: Callback<LaunchRequest>,
}

impl Launcher {
    /// Creates a launcher forwarding requests to `sender`.
    pub fn new(sender: Callback<LaunchRequest>) -> Self {
        Self { sender }
    }

    /// Opens (or focuses) the catalog app `app_id`.
    pub fn open_app(&self, app_id: impl Into<String>, options: LaunchOptions) {
        self.sender.call(LaunchRequest::App {
            app_id: app_id.into(),
            options,
        });
    }

    /// Opens (or focuses) a URL window.
    pub fn open_url(&self, request: OpenUrlRequest, options: LaunchOptions) {
        self.sender.call(LaunchRequest::Url { request, options });
    }

    /// Opens the notes window, or retargets the existing one, at `request.slug`.
    pub fn open_note(&self, request: OpenNoteRequest, options: LaunchOptions) {
        self.sender.call(LaunchRequest::Note { request, options });
    }
}

#[derive(Clone)]
/// Runtime context passed into mounted sub-applications.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Launch params of the hosting window; changes when the window is retargeted.
    pub launch_params: Signal<Value>,
    /// Launcher for opening further windows.
    pub launcher: Launcher,
    /// Host content and navigation services.
    pub host: HostServices,
    /// Active app catalog.
    pub catalog: Signal<Vec<AppDescriptor>>,
}

impl AppMountContext {
    /// Reads a string launch parameter without tracking.
    pub fn launch_param_str(&self, key: &str) -> Option<String> {
        launch_param_str(&self.launch_params.get_untracked(), key)
    }
}

/// Reads a non-blank string field from a launch-params object.
pub fn launch_param_str(params: &Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime renderer.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn url_kind_parses_case_insensitively() {
        assert_eq!(UrlKind::parse(" IFrame "), Some(UrlKind::Iframe));
        assert_eq!(UrlKind::parse("external"), Some(UrlKind::External));
        assert_eq!(UrlKind::parse("popup"), None);
    }

    #[test]
    fn launch_param_str_ignores_blank_and_non_string_values() {
        let params = json!({ "initial_slug": " edu-cs50 ", "blank": "  ", "count": 3 });
        assert_eq!(
            launch_param_str(&params, "initial_slug"),
            Some("edu-cs50".to_string())
        );
        assert_eq!(launch_param_str(&params, "blank"), None);
        assert_eq!(launch_param_str(&params, "count"), None);
        assert_eq!(launch_param_str(&Value::Null, "initial_slug"), None);
    }

    #[test]
    fn launch_requests_serialize_with_lowercase_kinds() {
        let request = LaunchRequest::Url {
            request: OpenUrlRequest {
                title: "LED Builder".to_string(),
                url: "https://led-jungle.com/pages/custom-text-led".to_string(),
                kind: UrlKind::Iframe,
            },
            options: LaunchOptions::new_window(),
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["Url"]["request"]["kind"], json!("iframe"));
        assert_eq!(value["Url"]["options"]["new_window"], json!(true));
    }

    #[test]
    fn primary_input_dom_id_is_window_scoped() {
        assert_eq!(window_primary_input_dom_id(4), "window-primary-input-4");
    }
}
