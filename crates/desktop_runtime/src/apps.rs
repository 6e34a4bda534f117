//! App registry: the active catalog of launchable apps and the internal sub-application table.

mod embeds;
mod placeholders;

use desktop_app_contract::AppModule;
use leptos::logging;
use platform_host::{AppDescriptor, CatalogOrigin};

pub(crate) use embeds::{ExternalLaunchLedger, ExternalLaunchView, IframeView, PdfView};
pub(crate) use placeholders::NotFoundView;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Number of apps spotlight lists when the query matches nothing.
pub const SPOTLIGHT_DEFAULT_RESULTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active app catalog plus where it came from.
pub struct AppCatalog {
    apps: Vec<AppDescriptor>,
    origin: CatalogOrigin,
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

impl AppCatalog {
    /// Creates a catalog from an explicit app list.
    pub fn new(apps: Vec<AppDescriptor>, origin: CatalogOrigin) -> Self {
        Self { apps, origin }
    }

    /// The compiled-in local catalog.
    pub fn fallback() -> Self {
        let apps = serde_json::from_str::<Vec<AppDescriptor>>(FALLBACK_APP_CATALOG_JSON)
            .unwrap_or_else(|err| {
                logging::warn!("fallback app catalog is invalid: {err}");
                Vec::new()
            });
        Self::new(apps, CatalogOrigin::Local)
    }

    /// Catalog to adopt after a source fetch; `None` keeps the current one.
    pub fn from_fetch(result: Result<Vec<AppDescriptor>, String>) -> Option<Self> {
        match result {
            Ok(apps) if !apps.is_empty() => Some(Self::new(apps, CatalogOrigin::Api)),
            Ok(_) => {
                logging::log!("app catalog source returned no apps; keeping local catalog");
                None
            }
            Err(err) => {
                logging::warn!("app catalog fetch failed: {err}");
                None
            }
        }
    }

    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn get(&self, app_id: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == app_id)
    }

    pub fn desktop_apps(&self) -> Vec<AppDescriptor> {
        self.apps.iter().filter(|app| app.desktop).cloned().collect()
    }

    pub fn dock_apps(&self) -> Vec<AppDescriptor> {
        self.apps.iter().filter(|app| app.dock).cloned().collect()
    }

    /// Case-insensitive match on name or window title.
    ///
    /// A blank query, or one that matches nothing, lists the first
    /// [`SPOTLIGHT_DEFAULT_RESULTS`] apps instead.
    pub fn search(&self, query: &str) -> Vec<AppDescriptor> {
        let query = query.trim().to_lowercase();
        let matches = if query.is_empty() {
            Vec::new()
        } else {
            self.apps
                .iter()
                .filter(|app| {
                    app.name.to_lowercase().contains(&query)
                        || app.window_title.to_lowercase().contains(&query)
                })
                .cloned()
                .collect::<Vec<_>>()
        };
        if matches.is_empty() {
            self.apps
                .iter()
                .take(SPOTLIGHT_DEFAULT_RESULTS)
                .cloned()
                .collect()
        } else {
            matches
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Built-in sub-applications selectable through a descriptor's `internal_key`.
pub enum InternalApp {
    Finder,
    Terminal,
    Mail,
    Notes,
    AdminDashboard,
    AdminCms,
}

impl InternalApp {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "finder" => Some(Self::Finder),
            "terminal" => Some(Self::Terminal),
            "mail" => Some(Self::Mail),
            "notes" => Some(Self::Notes),
            "admin" => Some(Self::AdminDashboard),
            "admin-cms" => Some(Self::AdminCms),
            _ => None,
        }
    }
}

/// Mount table for internal sub-applications.
pub fn app_module(app: InternalApp) -> AppModule {
    match app {
        InternalApp::Finder => AppModule::new(desktop_app_finder::mount),
        InternalApp::Terminal => AppModule::new(desktop_app_terminal::mount),
        InternalApp::Notes => AppModule::new(desktop_app_notes::mount),
        InternalApp::Mail => AppModule::new(placeholders::mount_mail),
        InternalApp::AdminDashboard => AppModule::new(placeholders::mount_admin_dashboard),
        InternalApp::AdminCms => AppModule::new(placeholders::mount_admin_cms),
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{AppKind, WindowSize};
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(apps: &[AppDescriptor]) -> Vec<&str> {
        apps.iter().map(|app| app.id.as_str()).collect()
    }

    #[test]
    fn fallback_catalog_matches_compiled_config() {
        let catalog = AppCatalog::fallback();
        assert_eq!(catalog.origin(), CatalogOrigin::Local);
        assert_eq!(catalog.apps().len(), 9);
        assert_eq!(
            ids(&catalog.desktop_apps()),
            vec!["resume", "led-builder", "admin", "about"]
        );
        assert_eq!(
            ids(&catalog.dock_apps()),
            vec!["github", "linkedin", "finder", "terminal", "mail"]
        );
        let finder = catalog.get("finder").expect("finder");
        assert_eq!(finder.default_size, WindowSize::new(760, 520));
        assert_eq!(finder.kind, AppKind::Internal);
    }

    #[test]
    fn every_fallback_internal_key_is_registered() {
        for app in AppCatalog::fallback().apps() {
            if let Some(key) = app.internal_key.as_deref() {
                assert!(InternalApp::from_key(key).is_some(), "unregistered key {key}");
            }
        }
    }

    #[test]
    fn search_matches_name_or_title_case_insensitively() {
        let catalog = AppCatalog::fallback();
        assert_eq!(ids(&catalog.search("TERM")), vec!["terminal"]);
        assert_eq!(ids(&catalog.search("led jungle")), vec!["led-builder"]);
        assert_eq!(ids(&catalog.search("sign avenue")), vec!["admin"]);
    }

    #[test]
    fn search_falls_back_to_first_eight_apps() {
        let catalog = AppCatalog::fallback();
        assert_eq!(catalog.search("").len(), SPOTLIGHT_DEFAULT_RESULTS);
        assert_eq!(catalog.search("zzz"), catalog.search("   "));
        assert_eq!(catalog.search("zzz")[0].id, "resume");
    }

    #[test]
    fn empty_or_failed_fetch_keeps_current_catalog() {
        assert_eq!(AppCatalog::from_fetch(Ok(Vec::new())), None);
        assert_eq!(AppCatalog::from_fetch(Err("offline".to_string())), None);

        let apps = AppCatalog::fallback().apps()[..2].to_vec();
        let fetched = AppCatalog::from_fetch(Ok(apps.clone())).expect("api catalog");
        assert_eq!(fetched.origin(), CatalogOrigin::Api);
        assert_eq!(fetched.apps(), apps.as_slice());
    }

    #[test]
    fn internal_keys_parse() {
        assert_eq!(InternalApp::from_key("admin"), Some(InternalApp::AdminDashboard));
        assert_eq!(InternalApp::from_key(" notes "), Some(InternalApp::Notes));
        assert_eq!(InternalApp::from_key("paint"), None);
    }
}
