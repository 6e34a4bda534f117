//! Maps a window record to the view its body should mount.

use desktop_app_contract::UrlKind;
use platform_host::AppKind;

use crate::{
    apps::{AppCatalog, InternalApp},
    model::{WindowRecord, WindowTarget},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved window body.
pub enum WindowView {
    /// Embedded PDF document.
    Pdf { url: String, title: String },
    /// Embedded page with an open-in-new-tab fallback.
    Iframe { url: String, title: String },
    /// Placeholder that navigates away once per URL.
    External { url: String, name: String },
    /// Built-in sub-application.
    Internal(InternalApp),
    /// Visible error placeholder.
    NotFound { message: String },
}

/// Resolves `record` against the active catalog. Never fails; unresolvable windows get
/// [`WindowView::NotFound`].
pub fn resolve_window_view(record: &WindowRecord, catalog: &AppCatalog) -> WindowView {
    match &record.target {
        WindowTarget::Url {
            kind: UrlKind::Iframe,
            url,
        } => WindowView::Iframe {
            url: url.clone(),
            title: record.title.clone(),
        },
        WindowTarget::Url {
            kind: UrlKind::External,
            url,
        } => WindowView::External {
            url: url.clone(),
            name: record.title.clone(),
        },
        WindowTarget::Notes => WindowView::Internal(InternalApp::Notes),
        WindowTarget::App(app_id) => {
            let Some(app) = catalog.get(app_id) else {
                return WindowView::NotFound {
                    message: format!("App not found: {app_id}"),
                };
            };
            let url = app.url.clone().filter(|url| !url.trim().is_empty());
            match (app.kind, url) {
                (AppKind::Pdf, Some(url)) => WindowView::Pdf {
                    url,
                    title: app.window_title.clone(),
                },
                (AppKind::Iframe, Some(url)) => WindowView::Iframe {
                    url,
                    title: app.window_title.clone(),
                },
                (AppKind::External, Some(url)) => WindowView::External {
                    url,
                    name: app.name.clone(),
                },
                (AppKind::Internal, _) => app
                    .internal_key
                    .as_deref()
                    .and_then(InternalApp::from_key)
                    .map(WindowView::Internal)
                    .unwrap_or_else(|| WindowView::NotFound {
                        message: format!(
                            "Unknown internal app: {}",
                            app.internal_key.as_deref().unwrap_or("(none)")
                        ),
                    }),
                (kind, None) => WindowView::NotFound {
                    message: format!("{} app `{}` has no URL", kind.as_str(), app.id),
                },
            }
        }
    }
}
