//! Launch dispatcher: turns [`LaunchRequest`] values from any UI surface into reducer actions.

use desktop_app_contract::{LaunchRequest, OpenUrlRequest, UrlKind};
use platform_host::WindowSize;
use thiserror::Error;

use crate::{
    apps::AppCatalog,
    model::{Jitter, OpenWindowRequest, WindowTarget},
    reducer::DesktopAction,
};

/// Default size of an embedded URL window.
pub const IFRAME_WINDOW_SIZE: WindowSize = WindowSize::new(1100, 720);
/// Default size of an external-link placeholder window.
pub const EXTERNAL_WINDOW_SIZE: WindowSize = WindowSize::new(720, 520);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Launch requests the runtime cannot turn into a window.
pub enum LaunchError {
    #[error("unknown app `{0}`")]
    UnknownApp(String),
    #[error("url must not be empty")]
    EmptyUrl,
    #[error("note slug must not be empty")]
    EmptySlug,
}

/// Default window size for ad-hoc URL windows of `kind`.
pub const fn url_window_size(kind: UrlKind) -> WindowSize {
    match kind {
        UrlKind::Iframe => IFRAME_WINDOW_SIZE,
        UrlKind::External => EXTERNAL_WINDOW_SIZE,
    }
}

/// Resolves a launch request against the active catalog.
///
/// `jitter` only matters when the resulting action creates a window.
pub fn launch_action(
    request: LaunchRequest,
    catalog: &AppCatalog,
    jitter: Jitter,
) -> Result<DesktopAction, LaunchError> {
    match request {
        LaunchRequest::App { app_id, options } => {
            let app = catalog
                .get(&app_id)
                .ok_or_else(|| LaunchError::UnknownApp(app_id.clone()))?;
            let mut req = OpenWindowRequest::new(
                WindowTarget::app(app.id.clone()),
                app.window_title.clone(),
                app.default_size,
            );
            req.new_window = options.new_window;
            req.jitter = jitter;
            Ok(DesktopAction::OpenWindow(req))
        }
        LaunchRequest::Url {
            request: OpenUrlRequest { title, url, kind },
            options,
        } => {
            let url = url.trim().to_string();
            if url.is_empty() {
                return Err(LaunchError::EmptyUrl);
            }
            let title = match title.trim() {
                "" => url.clone(),
                title => title.to_string(),
            };
            let mut req = OpenWindowRequest::new(
                WindowTarget::Url { kind, url },
                title,
                url_window_size(kind),
            );
            req.new_window = options.new_window;
            req.jitter = jitter;
            Ok(DesktopAction::OpenWindow(req))
        }
        LaunchRequest::Note { request, options } => {
            let slug = request.slug.trim().to_string();
            if slug.is_empty() {
                return Err(LaunchError::EmptySlug);
            }
            let title = match request.title.trim() {
                "" => slug.clone(),
                title => title.to_string(),
            };
            Ok(DesktopAction::OpenNote {
                title,
                slug,
                new_window: options.new_window,
                jitter,
            })
        }
    }
}
