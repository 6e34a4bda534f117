//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    AppCatalogSource, ExternalUrlService, NoopAppCatalogSource, NoopExternalUrlService,
    NoopNotesSource, NoopProjectsSource, NotesSource, ProjectsSource,
};

/// Runtime-selected host service bundle.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates decoupled from browser adapter
/// details.
#[derive(Clone)]
pub struct HostServices {
    /// Launchable app catalog source.
    pub apps: Rc<dyn AppCatalogSource>,
    /// Notes content source.
    pub notes: Rc<dyn NotesSource>,
    /// Portfolio project source.
    pub projects: Rc<dyn ProjectsSource>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
}

impl HostServices {
    /// Bundle where every content source is unavailable, so the shell runs on fallback data.
    pub fn offline() -> Self {
        Self {
            apps: Rc::new(NoopAppCatalogSource),
            notes: Rc::new(NoopNotesSource),
            projects: Rc::new(NoopProjectsSource),
            external_urls: Rc::new(NoopExternalUrlService),
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::offline()
    }
}
