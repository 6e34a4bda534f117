//! Launchable app descriptors and the catalog source contract.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`AppCatalogSource`].
pub type AppCatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How a launchable app renders inside (or outside) a managed window.
pub enum AppKind {
    /// Embedded PDF document.
    Pdf,
    /// Embedded third-party page.
    Iframe,
    /// Built-in sub-application selected by `internal_key`.
    Internal,
    /// Link opened outside the shell.
    External,
}

impl AppKind {
    /// Parses the API's `app_type` token.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "iframe" => Some(Self::Iframe),
            "internal" => Some(Self::Internal),
            "external" => Some(Self::External),
            _ => None,
        }
    }

    /// Returns the stable token for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Iframe => "iframe",
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Width/height pair in CSS pixels.
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Creates a size from width and height.
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Read-only description of one launchable application.
pub struct AppDescriptor {
    /// Stable app id used by launch commands.
    pub id: String,
    /// Display name for icons, dock, and search.
    pub name: String,
    /// Rendering kind.
    pub kind: AppKind,
    /// Title shown in the window chrome.
    pub window_title: String,
    /// Size used when a new window is created.
    pub default_size: WindowSize,
    /// Whether the app has a desktop icon.
    pub desktop: bool,
    /// Whether the app is pinned to the dock.
    pub dock: bool,
    /// Target URL for pdf, iframe, and external kinds.
    #[serde(default)]
    pub url: Option<String>,
    /// Sub-application key for the internal kind.
    #[serde(default)]
    pub internal_key: Option<String>,
    /// Icon token or image path.
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Where the active app catalog came from.
pub enum CatalogOrigin {
    /// Fetched from the content API.
    Api,
    /// Static list compiled into the shell.
    Local,
}

impl CatalogOrigin {
    /// Short label for the source indicator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Local => "Local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Wire form of an app row returned by `GET /api/apps`.
pub struct ApiApp {
    /// Database id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Stable slug, used as the descriptor id.
    #[serde(default)]
    pub slug: String,
    /// Icon token or image path.
    #[serde(default)]
    pub icon: Option<String>,
    /// `pdf`, `iframe`, `internal`, or `external`.
    #[serde(default)]
    pub app_type: String,
    /// Window chrome title.
    #[serde(default)]
    pub window_title: Option<String>,
    /// Default window width.
    #[serde(default)]
    pub default_w: Option<i32>,
    /// Default window height.
    #[serde(default)]
    pub default_h: Option<i32>,
    /// Desktop icon flag.
    #[serde(default)]
    pub desktop: Option<bool>,
    /// Dock pin flag.
    #[serde(default)]
    pub dock: Option<bool>,
    /// Sort key; rows without one sort last.
    #[serde(default)]
    pub order_index: Option<i32>,
    /// Target URL.
    #[serde(default)]
    pub launch_url: Option<String>,
    /// Internal sub-application key.
    #[serde(default)]
    pub internal_key: Option<String>,
}

const API_DEFAULT_SIZE: WindowSize = WindowSize::new(720, 520);

impl ApiApp {
    /// Converts the wire row into a descriptor, dropping rows without a slug or a known type.
    pub fn into_descriptor(self) -> Option<AppDescriptor> {
        let slug = self.slug.trim().to_string();
        if slug.is_empty() {
            return None;
        }
        let kind = AppKind::parse(&self.app_type)?;
        let name = if self.name.trim().is_empty() {
            slug.clone()
        } else {
            self.name.trim().to_string()
        };
        Some(AppDescriptor {
            window_title: self
                .window_title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| name.clone()),
            default_size: WindowSize::new(
                self.default_w.unwrap_or(API_DEFAULT_SIZE.w),
                self.default_h.unwrap_or(API_DEFAULT_SIZE.h),
            ),
            desktop: self.desktop.unwrap_or(false),
            dock: self.dock.unwrap_or(false),
            url: self.launch_url.filter(|url| !url.trim().is_empty()),
            internal_key: self.internal_key.filter(|key| !key.trim().is_empty()),
            icon: self.icon.unwrap_or_else(|| "app".to_string()),
            id: slug,
            name,
            kind,
        })
    }
}

/// Converts an API app list into descriptors ordered by `order_index`.
pub fn descriptors_from_api(rows: Vec<ApiApp>) -> Vec<AppDescriptor> {
    let mut rows = rows;
    rows.sort_by_key(|row| row.order_index.unwrap_or(i32::MAX));
    rows.into_iter()
        .filter_map(ApiApp::into_descriptor)
        .collect()
}

/// Read-only source of launchable app descriptors.
pub trait AppCatalogSource {
    /// Lists every launchable app in display order.
    fn list_apps<'a>(&'a self) -> AppCatalogFuture<'a, Result<Vec<AppDescriptor>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Catalog source for hosts without a content API.
pub struct NoopAppCatalogSource;

impl AppCatalogSource for NoopAppCatalogSource {
    fn list_apps<'a>(&'a self) -> AppCatalogFuture<'a, Result<Vec<AppDescriptor>, String>> {
        Box::pin(async { Err("app catalog source unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory catalog source.
pub struct MemoryAppCatalogSource {
    inner: Rc<RefCell<Vec<AppDescriptor>>>,
}

impl MemoryAppCatalogSource {
    /// Creates a source preloaded with `apps`.
    pub fn new(apps: Vec<AppDescriptor>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(apps)),
        }
    }

    /// Replaces the stored descriptors.
    pub fn replace(&self, apps: Vec<AppDescriptor>) {
        *self.inner.borrow_mut() = apps;
    }
}

impl AppCatalogSource for MemoryAppCatalogSource {
    fn list_apps<'a>(&'a self) -> AppCatalogFuture<'a, Result<Vec<AppDescriptor>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(slug: &str, app_type: &str, order_index: Option<i32>) -> ApiApp {
        ApiApp {
            name: slug.to_uppercase(),
            slug: slug.to_string(),
            app_type: app_type.to_string(),
            order_index,
            ..ApiApp::default()
        }
    }

    #[test]
    fn api_rows_are_ordered_by_index_with_missing_last() {
        let descriptors = descriptors_from_api(vec![
            row("mail", "internal", None),
            row("resume", "pdf", Some(2)),
            row("github", "external", Some(1)),
        ]);

        let ids: Vec<&str> = descriptors.iter().map(|app| app.id.as_str()).collect();
        assert_eq!(ids, vec!["github", "resume", "mail"]);
    }

    #[test]
    fn api_row_conversion_uses_slug_and_fills_defaults() {
        let descriptor = ApiApp {
            id: Some(7),
            name: "Finder".to_string(),
            slug: "finder".to_string(),
            app_type: "internal".to_string(),
            internal_key: Some("finder".to_string()),
            default_w: Some(760),
            dock: Some(true),
            ..ApiApp::default()
        }
        .into_descriptor()
        .expect("descriptor");

        assert_eq!(descriptor.id, "finder");
        assert_eq!(descriptor.window_title, "Finder");
        assert_eq!(descriptor.default_size, WindowSize::new(760, 520));
        assert!(descriptor.dock);
        assert!(!descriptor.desktop);
        assert_eq!(descriptor.icon, "app");
    }

    #[test]
    fn api_rows_without_slug_or_known_type_are_dropped() {
        assert!(row("", "internal", None).into_descriptor().is_none());
        assert!(row("widget", "applet", None).into_descriptor().is_none());
    }

    #[test]
    fn memory_source_round_trips_replacements() {
        let source = MemoryAppCatalogSource::default();
        assert_eq!(block_on(source.list_apps()), Ok(Vec::new()));

        let apps = descriptors_from_api(vec![row("resume", "pdf", None)]);
        source.replace(apps.clone());
        assert_eq!(block_on(source.list_apps()), Ok(apps));
    }

    #[test]
    fn noop_source_reports_unavailable() {
        assert!(block_on(NoopAppCatalogSource.list_apps()).is_err());
    }
}
