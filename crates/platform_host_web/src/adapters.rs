use std::rc::Rc;

use platform_host::HostServices;

use crate::{HttpAppCatalogSource, HttpNotesSource, HttpProjectsSource, WebExternalUrlService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// HTTP content sources against the portfolio API plus `window.open`.
    Browser,
    /// No content API; the shell runs entirely on its compiled-in fallback data.
    Offline,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "offline-host")]
    {
        HostStrategy::Offline
    }

    #[cfg(not(feature = "offline-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Offline => "offline",
    }
}

/// Builds the host service bundle for the compile-time selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            apps: Rc::new(HttpAppCatalogSource),
            notes: Rc::new(HttpNotesSource),
            projects: Rc::new(HttpProjectsSource),
            external_urls: Rc::new(WebExternalUrlService),
        },
        HostStrategy::Offline => HostServices::offline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_name_matches_selection() {
        let expected = match selected_host_strategy() {
            HostStrategy::Browser => "browser",
            HostStrategy::Offline => "offline",
        };
        assert_eq!(host_strategy_name(), expected);
    }
}
